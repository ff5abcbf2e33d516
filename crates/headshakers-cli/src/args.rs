use crate::types::{FeaturedArg, OutputFormat, SortArg};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "headshakers")]
#[command(about = "Browse, filter, and inspect bobblehead collection exports", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    /// Data directory for persisted preferences.
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show one page of a collection under the given filters and sort.
    Browse {
        /// Collection export (JSON array of items).
        #[arg(long)]
        items: PathBuf,

        /// Seed state from a query string, e.g. "category=Sports&page=2".
        /// Explicit flags below override individual params.
        #[arg(long)]
        query: Option<String>,

        #[arg(long)]
        search: Option<String>,

        #[arg(long)]
        category: Option<String>,

        #[arg(long)]
        condition: Option<String>,

        #[arg(long)]
        featured: Option<FeaturedArg>,

        #[arg(long)]
        sort: Option<SortArg>,

        #[arg(long)]
        page: Option<usize>,

        #[arg(long)]
        page_size: Option<usize>,
    },

    /// Roll-up statistics for a whole collection.
    Stats {
        /// Collection export (JSON array of items).
        #[arg(long)]
        items: PathBuf,
    },

    /// Read or write persisted preferences.
    Prefs {
        #[command(subcommand)]
        command: PrefsCommand,
    },
}

#[derive(Subcommand)]
pub enum PrefsCommand {
    /// Print the current preferences.
    Show,

    /// Set one preference key, e.g. `prefs set default-page-size 24`.
    Set { key: String, value: String },
}
