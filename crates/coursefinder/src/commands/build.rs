use anyhow::Context;
use coursefinder_core::Config;
use coursefinder_index::Pipeline;
use coursefinder_store::ArtifactStore;
use std::path::PathBuf;

pub fn run(
    config: &Config,
    dataset: Option<PathBuf>,
    out: Option<PathBuf>,
    max_features: Option<usize>,
) -> anyhow::Result<()> {
    let mut config = config.clone();
    if let Some(dataset) = dataset {
        config.dataset = dataset;
    }
    if let Some(out) = out {
        config.artifact_dir = out;
    }
    if let Some(max_features) = max_features {
        config.max_features = max_features;
    }

    let build = Pipeline::from_config(&config)
        .run(&config.dataset)
        .with_context(|| format!("build from '{}' failed", config.dataset.display()))?;

    tracing::info!("saving artifacts");
    let manifest = ArtifactStore::new(&config.artifact_dir)
        .with_max_features(config.max_features)
        .save(&build.items, &build.similarity)
        .context("failed to save artifacts")?;

    println!(
        "Built {} courses ({} terms) into {}",
        manifest.row_count,
        build.vocabulary.len(),
        config.artifact_dir.display()
    );
    Ok(())
}
