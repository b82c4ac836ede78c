//! Artifact file locations

use std::path::{Path, PathBuf};

/// Resolves the two artifact files inside one directory
#[derive(Debug, Clone)]
pub struct Paths {
    pub dir: PathBuf,
}

impl Paths {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// SQLite item table
    pub fn items_db(&self) -> PathBuf {
        self.dir.join("courses.db")
    }

    /// Binary similarity matrix
    pub fn similarity_file(&self) -> PathBuf {
        self.dir.join("similarity.bin")
    }

    /// Sibling used while writing `path`, renamed into place when complete
    pub fn staging(path: &Path) -> PathBuf {
        let mut name = path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        path.with_file_name(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artifact_paths() {
        let paths = Paths::new("models");
        assert_eq!(paths.items_db(), PathBuf::from("models/courses.db"));
        assert_eq!(paths.similarity_file(), PathBuf::from("models/similarity.bin"));
    }

    #[test]
    fn test_staging_is_sibling() {
        let staged = Paths::staging(Path::new("models/similarity.bin"));
        assert_eq!(staged, PathBuf::from("models/similarity.bin.tmp"));
    }
}
