use coursefinder_core::{Config, DifficultyFilter, Item};

const SKILLS_PREVIEW_CHARS: usize = 100;

pub fn run(config: &Config, query: &str, difficulty: Option<&str>, json: bool) -> anyhow::Result<()> {
    let catalog = super::load_catalog(config)?;
    let filter = DifficultyFilter::from(difficulty);
    let results = catalog.search(query, &filter);

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }
    if results.is_empty() {
        println!("No courses found matching '{}'", query.trim());
        return Ok(());
    }
    println!("Found {} courses", results.len());
    for item in results {
        println!("{}", format_item(item));
    }
    Ok(())
}

fn format_item(item: &Item) -> String {
    let rating = item
        .rating
        .map(|r| format!("{r:.1}"))
        .unwrap_or_else(|| "n/a".to_string());
    let skills: String = item.skills.chars().take(SKILLS_PREVIEW_CHARS).collect();
    let ellipsis = if item.skills.chars().count() > SKILLS_PREVIEW_CHARS {
        "..."
    } else {
        ""
    };
    format!(
        "\n{}\n  {} | rating {} | {}\n  skills: {}{}\n  {}",
        item.name, item.institution, rating, item.difficulty, skills, ellipsis, item.url
    )
}
