//! Persisted item table and similarity matrix

mod matrix_file;
mod paths;
mod store;
mod table;

pub use paths::Paths;
pub use store::{ArtifactStore, Manifest};
