//! Nearest-neighbour recommendations over the similarity matrix

use crate::catalog::Catalog;
use tracing::debug;

impl Catalog {
    /// Top-`k` most similar other courses as `(row, score)` pairs.
    ///
    /// Scores are non-increasing; equal scores keep ascending row order.
    /// The queried row itself is never returned. Unknown names yield an
    /// empty list.
    pub fn recommend_scored(&self, name: &str, k: usize) -> Vec<(usize, f32)> {
        let Some(index) = self.position_of(name) else {
            debug!(name, "no course with this name");
            return Vec::new();
        };
        let Some(row) = self.similarity_row(index) else {
            return Vec::new();
        };

        let mut scores: Vec<(usize, f32)> = row.iter().copied().enumerate().collect();
        // sort_by is stable, so ties stay in row order
        scores.sort_by(|a, b| b.1.total_cmp(&a.1));

        scores
            .into_iter()
            .filter(|(j, _)| *j != index)
            .take(k)
            .collect()
    }

    /// Names of the top-`k` most similar other courses
    pub fn recommend(&self, name: &str, k: usize) -> Vec<String> {
        self.recommend_scored(name, k)
            .into_iter()
            .filter_map(|(j, _)| self.item_at(j).map(|item| item.name.clone()))
            .collect()
    }
}
