use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::markdown::{DEFAULT_FENCES, DEFAULT_PREFIX_PATTERN, Segmenter};
use crate::paths;
use crate::translation::{
    AliasMap, ProviderSettings, RetryPolicy, validate_language, validate_source_language,
};

pub const DEFAULT_SOURCE_LANGUAGE: &str = "en";
pub const DEFAULT_TARGET_LANGUAGE: &str = "ru";
pub const DEFAULT_CACHE_DIR: &str = ".cache/translate";

/// The `[translate]` section of config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TranslateSection {
    /// Source language code, or `auto`.
    pub from: Option<String>,
    /// Target language code.
    pub to: Option<String>,
    /// Directory holding cached translations.
    pub cache_dir: Option<PathBuf>,
}

/// The `[provider]` section of config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderSection {
    pub endpoint: Option<String>,
    /// Value of the `client` query parameter.
    pub client: Option<String>,
    pub timeout_secs: Option<u64>,
}

/// The `[retry]` section of config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RetrySection {
    pub max_attempts: Option<u32>,
    pub base_delay_ms: Option<u64>,
    pub retryable_statuses: Option<Vec<u16>>,
}

/// The `[markdown]` section of config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MarkdownSection {
    /// Regex matching the structural prefix at the start of a line.
    pub prefix_pattern: Option<String>,
    /// Delimiters toggling fenced code regions.
    pub fences: Option<Vec<String>>,
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/docs-tl/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub translate: TranslateSection,
    #[serde(default)]
    pub provider: ProviderSection,
    #[serde(default)]
    pub retry: RetrySection,
    #[serde(default)]
    pub markdown: MarkdownSection,
    /// Replaces the built-in alias table when present, even if empty.
    #[serde(default)]
    pub aliases: Option<HashMap<String, Vec<String>>>,
}

/// CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    pub from: Option<String>,
    pub to: Option<String>,
    pub cache_dir: Option<PathBuf>,
}

/// Everything a run needs, after merging CLI, config file and defaults.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub source_language: String,
    pub target_language: String,
    pub cache_dir: PathBuf,
    pub provider: ProviderSettings,
    pub retry: RetryPolicy,
    pub segmenter: Segmenter,
    pub aliases: AliasMap,
}

/// Resolves configuration by merging CLI options with config file settings.
///
/// Priority: CLI options, then the config file, then built-in defaults.
///
/// # Errors
///
/// Returns an error for malformed language codes, a zero attempt count or
/// timeout, and an invalid prefix pattern or fence list.
pub fn resolve_config(options: &ResolveOptions, config_file: &ConfigFile) -> Result<ResolvedConfig> {
    let source_language = options
        .from
        .as_ref()
        .or(config_file.translate.from.as_ref())
        .cloned()
        .unwrap_or_else(|| DEFAULT_SOURCE_LANGUAGE.to_string());
    validate_source_language(&source_language)?;

    let target_language = options
        .to
        .as_ref()
        .or(config_file.translate.to.as_ref())
        .cloned()
        .unwrap_or_else(|| DEFAULT_TARGET_LANGUAGE.to_string());
    validate_language(&target_language)?;

    let cache_dir = options
        .cache_dir
        .as_ref()
        .or(config_file.translate.cache_dir.as_ref())
        .cloned()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CACHE_DIR));

    let provider = resolve_provider(&config_file.provider)?;
    let retry = resolve_retry(&config_file.retry)?;

    let segmenter = Segmenter::new(
        config_file
            .markdown
            .prefix_pattern
            .as_deref()
            .unwrap_or(DEFAULT_PREFIX_PATTERN),
        config_file.markdown.fences.clone().unwrap_or_else(|| {
            DEFAULT_FENCES.iter().map(ToString::to_string).collect()
        }),
    )
    .context("Invalid [markdown] configuration")?;

    let aliases = config_file
        .aliases
        .clone()
        .map_or_else(AliasMap::laravel, AliasMap::new);

    Ok(ResolvedConfig {
        source_language,
        target_language,
        cache_dir,
        provider,
        retry,
        segmenter,
        aliases,
    })
}

fn resolve_provider(section: &ProviderSection) -> Result<ProviderSettings> {
    let defaults = ProviderSettings::default();

    let timeout = match section.timeout_secs {
        Some(0) => bail!("Invalid [provider] configuration: 'timeout_secs' must be at least 1"),
        Some(secs) => Duration::from_secs(secs),
        None => defaults.timeout,
    };

    Ok(ProviderSettings {
        endpoint: section.endpoint.clone().unwrap_or(defaults.endpoint),
        client_id: section.client.clone().unwrap_or(defaults.client_id),
        timeout,
    })
}

fn resolve_retry(section: &RetrySection) -> Result<RetryPolicy> {
    let defaults = RetryPolicy::default();

    let max_attempts = section.max_attempts.unwrap_or(defaults.max_attempts);
    if max_attempts == 0 {
        bail!("Invalid [retry] configuration: 'max_attempts' must be at least 1");
    }

    Ok(RetryPolicy {
        max_attempts,
        base_delay: section
            .base_delay_ms
            .map_or(defaults.base_delay, Duration::from_millis),
        retryable_statuses: section
            .retryable_statuses
            .clone()
            .unwrap_or(defaults.retryable_statuses),
    })
}

/// Locates and loads the configuration file.
pub struct ConfigManager {
    config_path: PathBuf,
    required: bool,
}

impl ConfigManager {
    /// Uses `$XDG_CONFIG_HOME/docs-tl/config.toml` or
    /// `~/.config/docs-tl/config.toml`; the file is optional.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
            required: false,
        })
    }

    /// Uses an explicitly given file, which must exist.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            required: true,
        }
    }

    /// Picks the explicit path when given, the default location otherwise.
    pub fn for_path(path: Option<&Path>) -> Result<Self> {
        path.map_or_else(Self::new, |path| Ok(Self::with_path(path)))
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        toml::from_str(&contents).with_context(|| {
            format!("Failed to parse config file: {}", self.config_path.display())
        })
    }

    /// Loads the file, or returns defaults when an optional file is absent.
    pub fn load_or_default(&self) -> Result<ConfigFile> {
        if !self.required && !self.config_path.exists() {
            return Ok(ConfigFile::default());
        }
        self.load()
    }
}
