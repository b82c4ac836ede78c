mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use coursefinder_core::Config;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays parseable
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(dir) = cli.artifacts {
        config.artifact_dir = dir;
    }

    match cli.command {
        Commands::Build {
            dataset,
            out,
            max_features,
        } => commands::build::run(&config, dataset, out, max_features),
        Commands::Recommend { name, k, json } => commands::recommend::run(&config, &name, k, json),
        Commands::Search {
            query,
            difficulty,
            json,
        } => commands::search::run(&config, &query, difficulty.as_deref(), json),
        Commands::Top { n } => commands::top::run(&config, n),
        Commands::Levels => commands::levels::run(&config),
        Commands::Status => commands::status::run(&config),
        Commands::Version => commands::version::run(),
    }
}
