//! Course record shown to users

use serde::{Deserialize, Serialize};

/// One course from the catalog.
///
/// Row position inside a [`crate::Catalog`] is the course's identity;
/// `name` is only a lookup key and may repeat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub institution: String,
    pub difficulty: String,
    /// `None` when upstream had no numeric rating
    #[serde(default)]
    pub rating: Option<f32>,
    pub url: String,
    pub description: String,
    pub skills: String,
}

impl Item {
    /// Case-insensitive exact name comparison used for lookups
    pub fn name_matches(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Item {
        Item {
            name: "Intro to Python".to_string(),
            institution: "University of Michigan".to_string(),
            difficulty: "Beginner".to_string(),
            rating: Some(4.8),
            url: "https://example.org/python".to_string(),
            description: "Learn Python basics".to_string(),
            skills: "python, programming".to_string(),
        }
    }

    #[test]
    fn test_name_matches_ignores_case() {
        let item = sample();
        assert!(item.name_matches("intro to python"));
        assert!(item.name_matches("INTRO TO PYTHON"));
        assert!(!item.name_matches("intro to python 2"));
    }

    #[test]
    fn test_item_roundtrip_without_rating() {
        let json = r#"{"name":"n","institution":"i","difficulty":"Mixed","url":"u","description":"d","skills":"s"}"#;
        let parsed: Item = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.rating, None);

        let item = sample();
        let back: Item = serde_json::from_str(&serde_json::to_string(&item).unwrap()).unwrap();
        assert_eq!(back, item);
    }
}
