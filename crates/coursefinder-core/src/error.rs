//! Error type shared by the build pipeline and the artifact store

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// A required column is absent from the raw dataset
    #[error("dataset '{path}' is missing required column '{column}'")]
    DataShape { column: String, path: PathBuf },

    #[error("failed to read dataset '{path}': {source}")]
    Csv {
        path: PathBuf,
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("artifact '{path}' not found; run `coursefinder build` first")]
    ArtifactMissing { path: PathBuf },

    #[error("artifact '{path}' is corrupt: {reason}")]
    ArtifactCorrupt { path: PathBuf, reason: String },

    /// Item table and similarity matrix were not produced by the same build
    #[error("artifacts do not match: {reason}")]
    ArtifactMismatch { reason: String },

    #[error("I/O error on '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid configuration in '{path}': {reason}")]
    Config { path: PathBuf, reason: String },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn corrupt(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::ArtifactCorrupt {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// True for failures that mean the artifacts on disk cannot be served
    pub fn is_artifact_error(&self) -> bool {
        matches!(
            self,
            Self::ArtifactMissing { .. } | Self::ArtifactCorrupt { .. } | Self::ArtifactMismatch { .. }
        )
    }
}
