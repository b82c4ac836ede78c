use coursefinder_core::{Config, ALL_LEVELS};

pub fn run(config: &Config) -> anyhow::Result<()> {
    let catalog = super::load_catalog(config)?;
    println!("{ALL_LEVELS}");
    for level in catalog.difficulty_levels() {
        println!("{level}");
    }
    Ok(())
}
