use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "coursefinder")]
#[command(version)]
#[command(about = "Content-based course recommendations and search")]
pub struct Cli {
    /// Configuration file (defaults to ./coursefinder.toml, then the user config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding the built artifacts
    #[arg(long, global = true)]
    pub artifacts: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the item table and similarity matrix from the raw dataset
    Build {
        /// Raw CSV dataset
        #[arg(long)]
        dataset: Option<PathBuf>,

        /// Output directory for the artifacts
        #[arg(long)]
        out: Option<PathBuf>,

        /// Vocabulary size bound
        #[arg(long)]
        max_features: Option<usize>,
    },

    /// Courses most similar to the named one
    Recommend {
        name: String,

        /// Number of recommendations
        #[arg(short)]
        k: Option<usize>,

        #[arg(long)]
        json: bool,
    },

    /// Find courses whose name, description or skills contain QUERY
    Search {
        query: String,

        /// Exact difficulty level, or "All"
        #[arg(long)]
        difficulty: Option<String>,

        #[arg(long)]
        json: bool,
    },

    /// Highest rated courses
    Top {
        #[arg(short, default_value_t = 10)]
        n: usize,
    },

    /// List difficulty levels present in the catalog
    Levels,

    /// Show artifact status
    Status,

    /// Print version information
    Version,
}
