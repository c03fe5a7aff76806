use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Config;

#[derive(Parser)]
#[command(name = "docsearch")]
#[command(about = "Offline HTML doc indexer and search core", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Walk an HTML source tree and write extracted (title, body, url) triples
    /// to the raw store.
    Extract {
        #[arg(long, default_value = "data/source/html")]
        source_root: PathBuf,
        #[arg(long)]
        url_prefix: String,
        #[arg(long, default_value = "data/raw")]
        raw_file: PathBuf,
    },
    /// Build the forward/inverted index from the raw store and report summary
    /// statistics, without serving any queries.
    Build {
        #[arg(long, default_value = "data/raw")]
        raw_file: PathBuf,
        #[arg(long, default_value_t = 10)]
        title_weight: u32,
        #[arg(long, default_value_t = 1)]
        body_weight: u32,
    },
    /// Build the index and run a single query against it, printing the JSON
    /// result array to stdout.
    Search {
        query: String,
        #[arg(long, default_value = "data/raw")]
        raw_file: PathBuf,
        #[arg(long, default_value_t = 10)]
        title_weight: u32,
        #[arg(long, default_value_t = 1)]
        body_weight: u32,
        #[arg(long, default_value_t = 50)]
        snippet_prev: usize,
        #[arg(long, default_value_t = 100)]
        snippet_after: usize,
    },
}

impl Commands {
    /// Builds the [`Config`] implied by this subcommand's flags.
    pub fn to_config(&self) -> Config {
        match self {
            Commands::Extract {
                source_root,
                url_prefix,
                raw_file,
            } => Config {
                source_root_path: source_root.clone(),
                url_prefix: url_prefix.clone(),
                raw_file_path: raw_file.clone(),
                ..Config::default()
            },
            Commands::Build {
                raw_file,
                title_weight,
                body_weight,
            } => Config {
                raw_file_path: raw_file.clone(),
                title_weight: *title_weight,
                body_weight: *body_weight,
                ..Config::default()
            },
            Commands::Search {
                raw_file,
                title_weight,
                body_weight,
                snippet_prev,
                snippet_after,
                ..
            } => Config {
                raw_file_path: raw_file.clone(),
                title_weight: *title_weight,
                body_weight: *body_weight,
                snippet_prev: *snippet_prev,
                snippet_after: *snippet_after,
                ..Config::default()
            },
        }
    }
}
