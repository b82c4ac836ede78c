pub mod build;
pub mod levels;
pub mod recommend;
pub mod search;
pub mod status;
pub mod top;
pub mod version;

use anyhow::Context;
use coursefinder_core::{Catalog, Config};
use coursefinder_store::ArtifactStore;

/// Load the artifact pair once for this process
pub fn load_catalog(config: &Config) -> anyhow::Result<Catalog> {
    ArtifactStore::new(&config.artifact_dir)
        .load()
        .with_context(|| {
            format!(
                "cannot serve from '{}'",
                config.artifact_dir.display()
            )
        })
}
