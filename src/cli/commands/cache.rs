//! `docs-tl cache` handler.

use anyhow::Result;
use std::path::PathBuf;

use super::translate::load_resolved_config;
use crate::cache::CacheStore;
use crate::cli::CacheCommand;
use crate::config::ResolveOptions;
use crate::status;
use crate::ui::Style;

pub struct CacheOptions {
    pub action: CacheCommand,
    pub config: Option<PathBuf>,
    pub resolve: ResolveOptions,
}

pub fn run_cache(options: &CacheOptions) -> Result<()> {
    let config = load_resolved_config(options.config.as_deref(), &options.resolve)?;
    let cache_dir = config.cache_dir;

    if !cache_dir.is_dir() {
        println!(
            "{} {} (not created yet)",
            Style::label("Cache directory:"),
            cache_dir.display()
        );
        return Ok(());
    }

    let store = CacheStore::open(&cache_dir)?;

    match options.action {
        CacheCommand::Stats => {
            let stats = store.stats()?;
            println!("{} {}", Style::label("Cache directory:"), cache_dir.display());
            println!("  {} {}", Style::label("entries"), Style::value(stats.entries));
            println!("  {} {}", Style::label("size   "), Style::value(format_bytes(stats.bytes)));
        }
        CacheCommand::Clear => {
            let removed = store.clear()?;
            status!(
                "{} {} cached translation(s) from {}",
                Style::success("Removed"),
                removed,
                cache_dir.display()
            );
        }
    }

    Ok(())
}

fn format_bytes(bytes: u64) -> String {
    const KIB: f64 = 1024.0;
    let bytes_f = bytes as f64;

    if bytes_f < KIB {
        format!("{bytes} B")
    } else if bytes_f < KIB * KIB {
        format!("{:.1} KiB", bytes_f / KIB)
    } else {
        format!("{:.1} MiB", bytes_f / KIB / KIB)
    }
}
