use clap::Subcommand;
use std::path::PathBuf;

pub mod batch;
pub mod convert;
mod execute;
pub mod inspect;

#[derive(Subcommand)]
pub enum Commands {
    /// Convert one furniture folder to furni.json
    Convert {
        /// Folder containing the assets, logic, visualization and index XML
        source: PathBuf,

        /// Output file (prints to stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write compact JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,

        /// Folder layout TOML (file suffixes, image extensions)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Convert every furniture folder below a directory
    Batch {
        /// Directory whose subfolders are furniture folders
        source: PathBuf,

        /// Output directory (writes into each folder if omitted)
        destination: Option<PathBuf>,

        /// Folder layout TOML (file suffixes, image extensions)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Suppress progress bar
        #[arg(short, long)]
        quiet: bool,
    },

    /// Show a summary of a furniture folder
    Inspect {
        /// Folder containing the assets, logic, visualization and index XML
        source: PathBuf,

        /// List assets whose image is missing from the folder
        #[arg(short, long)]
        missing: bool,

        /// Folder layout TOML (file suffixes, image extensions)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}
