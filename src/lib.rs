//! # docs-tl - Markdown Documentation Translator
//!
//! `docs-tl` translates a directory of markdown documents line by line,
//! keeping list markers, blockquotes, headings, tables and fenced code
//! untouched. Every translated line is cached on disk by content, so a
//! second run over unchanged docs makes no network calls.
//!
//! ## Quick Start
//!
//! ```bash
//! # Translate every *.md file from English to Russian
//! docs-tl docs/en docs/ru
//!
//! # Only some files, into German, with a shared cache
//! docs-tl docs/en docs/de --to de --files routing.md blade.md --cache-dir ~/.cache/docs
//!
//! # Inspect the cache
//! docs-tl cache stats
//! ```
//!
//! ## Configuration
//!
//! Optional settings live in `~/.config/docs-tl/config.toml`:
//!
//! ```toml
//! [translate]
//! from = "en"
//! to = "ru"
//! cache_dir = ".cache/translate"
//!
//! [retry]
//! max_attempts = 5
//! base_delay_ms = 500
//!
//! [aliases]
//! "artisan.md" = ["artisan-console.md"]
//! ```

/// Content-addressed translation cache.
pub mod cache;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management.
pub mod config;

/// File system utilities.
pub mod fs;

/// Line-level markdown segmentation.
pub mod markdown;

/// Global output configuration (quiet mode, colors).
pub mod output;

/// XDG-style config location.
pub mod paths;

/// Provider client, retry policy and document translation.
pub mod translation;

/// Terminal UI components (spinner, colors).
pub mod ui;
