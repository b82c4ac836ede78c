//! Batch build: dataset -> tags -> count vectors -> similarity matrix

use crate::ingest::load_courses;
use crate::similarity::cosine_matrix;
use crate::vectorize::{CountVectorizer, Vocabulary};
use coursefinder_core::{Catalog, Config, Item, Result, SimilarityMatrix};
use coursefinder_text::{compose_tag, Normalizer, StopWords};
use std::collections::HashMap;
use std::path::Path;
use tracing::{info, warn};

/// Output of one pipeline run.
///
/// `items`, `tags` and the matrix rows share the same ordering.
#[derive(Debug, Clone)]
pub struct Build {
    pub items: Vec<Item>,
    pub tags: Vec<String>,
    pub vocabulary: Vocabulary,
    pub similarity: SimilarityMatrix,
}

impl Build {
    pub fn into_catalog(self) -> Result<Catalog> {
        Catalog::new(self.items, self.similarity)
    }
}

pub struct Pipeline {
    normalizer: Normalizer,
    vectorizer: CountVectorizer,
    parallel: bool,
}

impl Pipeline {
    pub fn new(normalizer: Normalizer, vectorizer: CountVectorizer, parallel: bool) -> Self {
        Self {
            normalizer,
            vectorizer,
            parallel,
        }
    }

    /// English stemming and stop words, bounds from `config`
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Normalizer::english(),
            CountVectorizer::new(config.max_features, StopWords::english()),
            config.parallel,
        )
    }

    /// Load the CSV at `dataset` and build from its rows
    pub fn run(&self, dataset: &Path) -> Result<Build> {
        info!(path = %dataset.display(), "loading dataset");
        let items = load_courses(dataset)?;
        Ok(self.build(items))
    }

    pub fn build(&self, items: Vec<Item>) -> Build {
        warn_duplicate_names(&items);

        info!(courses = items.len(), "composing tags");
        let tags: Vec<String> = items
            .iter()
            .map(|item| compose_tag(&self.normalizer, item))
            .collect();

        info!("building vocabulary");
        let (vocabulary, vectors) = self.vectorizer.fit_transform(&tags);
        info!(terms = vocabulary.len(), "vocabulary ready");

        info!(parallel = self.parallel, "computing similarity");
        let similarity = cosine_matrix(&vectors, self.parallel);

        Build {
            items,
            tags,
            vocabulary,
            similarity,
        }
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

fn warn_duplicate_names(items: &[Item]) {
    let mut seen: HashMap<String, usize> = HashMap::new();
    for item in items {
        *seen.entry(item.name.to_lowercase()).or_insert(0) += 1;
    }
    let duplicated = seen.values().filter(|&&count| count > 1).count();
    if duplicated > 0 {
        warn!(
            duplicated,
            "course names repeat; lookups resolve to the first row"
        );
    }
}
