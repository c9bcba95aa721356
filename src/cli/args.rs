use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "docs-tl")]
#[command(about = "Translate markdown documentation while preserving its structure")]
#[command(version)]
pub struct Args {
    /// Directory containing the source markdown files
    pub src_dir: Option<PathBuf>,

    /// Directory to write translated files into
    pub dest_dir: Option<PathBuf>,

    /// Specific markdown files to translate (defaults to every *.md in SRC_DIR)
    #[arg(long, num_args = 0..)]
    pub files: Vec<String>,

    /// Source language code (ISO 639-1, or "auto")
    #[arg(short = 'f', long)]
    pub from: Option<String>,

    /// Target language code (ISO 639-1, e.g., ru, de, ja)
    #[arg(short = 't', long)]
    pub to: Option<String>,

    /// Directory to store the translation cache [default: .cache/translate]
    #[arg(long, global = true)]
    pub cache_dir: Option<PathBuf>,

    /// Path to a config file [default: ~/.config/docs-tl/config.toml]
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    /// Report a file that fails to translate and continue with the next one
    #[arg(short = 'k', long)]
    pub keep_going: bool,

    /// Only print skipped files and errors
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Show retry and cache diagnostics
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List supported language codes
    Languages,
    /// Inspect or empty the translation cache
    Cache {
        #[command(subcommand)]
        action: CacheCommand,
    },
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheCommand {
    /// Show the number and total size of cached translations
    Stats,
    /// Delete every cached translation
    Clear,
}
