//! Paired save/load of the item table and similarity matrix

use crate::matrix_file;
use crate::paths::Paths;
use crate::table;
use chrono::{DateTime, Utc};
use coursefinder_core::{Catalog, Error, Item, Result, SimilarityMatrix};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Metadata stamped on both artifacts of one build
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Manifest {
    pub build_id: u64,
    pub row_count: usize,
    pub built_at: DateTime<Utc>,
    pub max_features: usize,
}

pub struct ArtifactStore {
    paths: Paths,
    max_features: usize,
}

impl ArtifactStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            paths: Paths::new(dir),
            max_features: 5000,
        }
    }

    /// Vocabulary bound recorded in the manifest
    pub fn with_max_features(mut self, max_features: usize) -> Self {
        self.max_features = max_features;
        self
    }

    pub fn paths(&self) -> &Paths {
        &self.paths
    }

    /// Write both artifacts to staging files, then rename each into place.
    ///
    /// Both carry the same build id so a reader can detect a torn pair.
    pub fn save(&self, items: &[Item], similarity: &SimilarityMatrix) -> Result<Manifest> {
        if items.len() != similarity.len() {
            return Err(Error::ArtifactMismatch {
                reason: format!(
                    "refusing to save {} items with a {}-row matrix",
                    items.len(),
                    similarity.len()
                ),
            });
        }

        let built_at = Utc::now();
        let manifest = Manifest {
            build_id: built_at.timestamp_nanos_opt().unwrap_or_default() as u64,
            row_count: items.len(),
            built_at,
            max_features: self.max_features,
        };

        std::fs::create_dir_all(&self.paths.dir).map_err(|e| Error::io(&self.paths.dir, e))?;

        let matrix_path = self.paths.similarity_file();
        let matrix_stage = Paths::staging(&matrix_path);
        let bytes = matrix_file::encode(manifest.build_id, similarity);
        std::fs::write(&matrix_stage, bytes).map_err(|e| Error::io(&matrix_stage, e))?;

        let db_path = self.paths.items_db();
        let db_stage = Paths::staging(&db_path);
        remove_stale(&db_stage)?;
        table::write(&db_stage, items, &manifest)?;

        rename(&matrix_stage, &matrix_path)?;
        rename(&db_stage, &db_path)?;

        info!(
            dir = %self.paths.dir.display(),
            rows = manifest.row_count,
            build_id = manifest.build_id,
            "saved artifacts"
        );
        Ok(manifest)
    }

    fn require(path: &Path) -> Result<()> {
        if path.is_file() {
            Ok(())
        } else {
            Err(Error::ArtifactMissing {
                path: path.to_path_buf(),
            })
        }
    }

    fn read_matrix(&self) -> Result<(u64, SimilarityMatrix)> {
        let path = self.paths.similarity_file();
        let bytes = std::fs::read(&path).map_err(|e| Error::io(&path, e))?;
        matrix_file::decode(&path, &bytes)
    }

    fn check_pair(manifest: &Manifest, items: usize, matrix_id: u64, rows: usize) -> Result<()> {
        if manifest.build_id != matrix_id {
            return Err(Error::ArtifactMismatch {
                reason: format!(
                    "item table is from build {} but similarity matrix is from build {}",
                    manifest.build_id, matrix_id
                ),
            });
        }
        if manifest.row_count != items || items != rows {
            return Err(Error::ArtifactMismatch {
                reason: format!(
                    "{items} items (manifest says {}) but similarity matrix has {rows} rows",
                    manifest.row_count
                ),
            });
        }
        Ok(())
    }

    /// Load both artifacts as one [`Catalog`], or fail without partial state
    pub fn load(&self) -> Result<Catalog> {
        Self::require(&self.paths.items_db())?;
        Self::require(&self.paths.similarity_file())?;

        let (matrix_id, similarity) = self.read_matrix()?;
        let (manifest, items) = table::read(&self.paths.items_db())?;
        Self::check_pair(&manifest, items.len(), matrix_id, similarity.len())?;

        debug!(rows = items.len(), build_id = matrix_id, "loaded artifacts");
        Catalog::new(items, similarity)
    }

    /// Manifest of the stored pair, checked against the matrix header
    pub fn manifest(&self) -> Result<Manifest> {
        let db_path = self.paths.items_db();
        let matrix_path = self.paths.similarity_file();
        Self::require(&db_path)?;
        Self::require(&matrix_path)?;

        let manifest = table::read_manifest(&db_path)?;
        let bytes = std::fs::read(&matrix_path).map_err(|e| Error::io(&matrix_path, e))?;
        let (matrix_id, rows) = matrix_file::read_header(&matrix_path, &bytes)?;
        Self::check_pair(&manifest, manifest.row_count, matrix_id, rows)?;
        Ok(manifest)
    }
}

fn remove_stale(path: &Path) -> Result<()> {
    match std::fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(Error::io(path, e)),
    }
}

fn rename(from: &Path, to: &Path) -> Result<()> {
    std::fs::rename(from, to).map_err(|e| Error::io(to, e))
}
