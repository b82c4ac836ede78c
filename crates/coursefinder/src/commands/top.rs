use coursefinder_core::Config;

pub fn run(config: &Config, n: usize) -> anyhow::Result<()> {
    let catalog = super::load_catalog(config)?;
    for (rank, item) in catalog.top_rated(n).into_iter().enumerate() {
        let rating = item.rating.unwrap_or_default();
        println!("{:>3}. {:.1}  {} ({})", rank + 1, rating, item.name, item.institution);
    }
    Ok(())
}
