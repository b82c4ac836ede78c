//! Item table paired with its similarity matrix

use crate::error::{Error, Result};
use crate::matrix::SimilarityMatrix;
use crate::types::Item;

/// Immutable serving state: row `i` of the item table and row `i` of the
/// similarity matrix describe the same course.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<Item>,
    similarity: SimilarityMatrix,
}

impl Catalog {
    pub fn new(items: Vec<Item>, similarity: SimilarityMatrix) -> Result<Self> {
        if items.len() != similarity.len() {
            return Err(Error::ArtifactMismatch {
                reason: format!(
                    "{} items but similarity matrix has {} rows",
                    items.len(),
                    similarity.len()
                ),
            });
        }
        Ok(Self { items, similarity })
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn similarity(&self) -> &SimilarityMatrix {
        &self.similarity
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn item_at(&self, i: usize) -> Option<&Item> {
        self.items.get(i)
    }

    pub fn similarity_row(&self, i: usize) -> Option<&[f32]> {
        self.similarity.row(i)
    }

    /// Row of the first course whose name matches, ignoring case.
    ///
    /// Names are not unique upstream; later duplicates are unreachable here.
    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.items.iter().position(|item| item.name_matches(name))
    }

    /// Distinct difficulty values in first-seen order
    pub fn difficulty_levels(&self) -> Vec<&str> {
        let mut levels: Vec<&str> = Vec::new();
        for item in &self.items {
            if !levels.contains(&item.difficulty.as_str()) {
                levels.push(item.difficulty.as_str());
            }
        }
        levels
    }

    /// Highest rated courses; unrated ones are skipped, ties keep table order
    pub fn top_rated(&self, n: usize) -> Vec<&Item> {
        let mut rated: Vec<(&Item, f32)> = self
            .items
            .iter()
            .filter_map(|item| item.rating.map(|r| (item, r)))
            .collect();
        rated.sort_by(|a, b| b.1.total_cmp(&a.1));
        rated.into_iter().take(n).map(|(item, _)| item).collect()
    }
}
