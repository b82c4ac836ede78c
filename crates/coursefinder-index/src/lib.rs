//! Dataset ingestion, count vectorization and the similarity build pipeline

mod ingest;
mod pipeline;
mod similarity;
mod vectorize;

pub use ingest::{load_courses, read_courses, REQUIRED_COLUMNS};
pub use pipeline::{Build, Pipeline};
pub use similarity::{cosine, cosine_matrix};
pub use vectorize::{CountVectorizer, CountVectors, Vocabulary};
