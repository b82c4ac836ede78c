//! Course catalog, similarity matrix and the query engines built on them

mod catalog;
mod config;
mod error;
mod matrix;
mod recommend;
mod search;
mod types;

pub use catalog::Catalog;
pub use config::{Config, ARTIFACT_DIR_ENV};
pub use error::{Error, Result};
pub use matrix::SimilarityMatrix;
pub use search::{DifficultyFilter, ALL_LEVELS};
pub use types::Item;
