//! XDG-style location of the configuration file.
//!
//! The translation cache is deliberately not here: it defaults to a path
//! relative to the working directory so it can live next to the docs.

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_DIR: &str = "docs-tl";

/// Returns the configuration directory for docs-tl.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/docs-tl` if `XDG_CONFIG_HOME` is set
/// 2. `~/.config/docs-tl` otherwise
pub fn config_dir() -> Result<PathBuf> {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME")
        && !xdg.is_empty()
    {
        return Ok(PathBuf::from(xdg).join(APP_DIR));
    }

    let home = dirs::home_dir().context("Failed to determine home directory")?;
    Ok(home.join(".config").join(APP_DIR))
}
