//! Substring search with an optional difficulty filter

use crate::catalog::Catalog;
use crate::types::Item;

/// Sentinel used by the presentation layer for "no filter"
pub const ALL_LEVELS: &str = "All";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DifficultyFilter {
    #[default]
    All,
    Level(String),
}

impl DifficultyFilter {
    /// Exact, case-sensitive comparison against an item's difficulty
    pub fn accepts(&self, difficulty: &str) -> bool {
        match self {
            Self::All => true,
            Self::Level(level) => level == difficulty,
        }
    }
}

impl From<&str> for DifficultyFilter {
    fn from(value: &str) -> Self {
        if value == ALL_LEVELS {
            Self::All
        } else {
            Self::Level(value.to_string())
        }
    }
}

impl From<Option<&str>> for DifficultyFilter {
    fn from(value: Option<&str>) -> Self {
        value.map(Self::from).unwrap_or_default()
    }
}

fn matches_query(item: &Item, query: &str) -> bool {
    item.name.to_lowercase().contains(query)
        || item.description.to_lowercase().contains(query)
        || item.skills.to_lowercase().contains(query)
}

impl Catalog {
    /// Courses whose name, description or skills contain `query`
    /// (case-insensitive), restricted by `filter`, in table order.
    ///
    /// A blank query matches nothing.
    pub fn search(&self, query: &str, filter: &DifficultyFilter) -> Vec<&Item> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }

        self.items()
            .iter()
            .filter(|item| matches_query(item, &query))
            .filter(|item| filter.accepts(&item.difficulty))
            .collect()
    }
}
