use coursefinder_core::Config;
use coursefinder_store::ArtifactStore;

pub fn run(config: &Config) -> anyhow::Result<()> {
    let store = ArtifactStore::new(&config.artifact_dir);
    let paths = store.paths();

    let mut output = serde_json::json!({
        "items_db": paths.items_db(),
        "similarity": paths.similarity_file(),
    });

    match store.manifest() {
        Ok(manifest) => {
            output["ready"] = serde_json::json!(true);
            output["manifest"] = serde_json::to_value(&manifest)?;
        }
        Err(err) => {
            output["ready"] = serde_json::json!(false);
            output["error"] = serde_json::json!(err.to_string());
        }
    }

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
