//! Configuration file loading and resolution against CLI options.

mod manager;

pub use manager::{
    ConfigFile, ConfigManager, DEFAULT_CACHE_DIR, DEFAULT_SOURCE_LANGUAGE,
    DEFAULT_TARGET_LANGUAGE, MarkdownSection, ProviderSection, ResolveOptions, ResolvedConfig,
    RetrySection, TranslateSection, resolve_config,
};
