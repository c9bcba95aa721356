use anyhow::{Result, bail};
use std::path::{Path, PathBuf};

use crate::cache::CacheStore;
use crate::config::{ConfigManager, ResolveOptions, ResolvedConfig, resolve_config};
use crate::fs::list_markdown_files;
use crate::translation::{DocumentTranslator, HttpTransport, TranslationClient};
use crate::ui::{Spinner, Style};
use crate::{notice, status};

pub struct TranslateOptions {
    pub src_dir: PathBuf,
    pub dest_dir: PathBuf,
    pub files: Vec<String>,
    pub config: Option<PathBuf>,
    pub resolve: ResolveOptions,
    pub keep_going: bool,
}

/// Loads the config file (if any) and merges it with CLI overrides.
pub fn load_resolved_config(
    config_path: Option<&Path>,
    options: &ResolveOptions,
) -> Result<ResolvedConfig> {
    let file_config = ConfigManager::for_path(config_path)?.load_or_default()?;
    resolve_config(options, &file_config)
}

/// Source paths to process: the named files, or every markdown file in `src_dir`.
fn collect_sources(src_dir: &Path, files: &[String]) -> Result<Vec<PathBuf>> {
    if files.is_empty() {
        list_markdown_files(src_dir)
    } else {
        Ok(files.iter().map(|name| src_dir.join(name)).collect())
    }
}

pub async fn run_translate(options: TranslateOptions) -> Result<()> {
    let config = load_resolved_config(options.config.as_deref(), &options.resolve)?;
    let sources = collect_sources(&options.src_dir, &options.files)?;

    log::debug!(
        "Translating {} file(s) {} -> {} with cache at {}",
        sources.len(),
        config.source_language,
        config.target_language,
        config.cache_dir.display()
    );

    let transport = HttpTransport::new(config.provider)?;
    let cache = CacheStore::open(&config.cache_dir)?;
    let client = TranslationClient::new(
        Box::new(transport),
        cache,
        config.source_language,
        config.target_language,
        config.retry,
    );
    let mut translator = DocumentTranslator::new(client, config.segmenter, config.aliases);

    let mut translated = 0usize;
    let mut failed = Vec::new();

    for src_path in sources {
        if !src_path.exists() {
            notice!(
                "{} {}",
                Style::warning("Skipping missing file"),
                src_path.display()
            );
            continue;
        }

        let Some(file_name) = src_path.file_name() else {
            continue;
        };
        let name = file_name.to_string_lossy().into_owned();
        let dest_path = options.dest_dir.join(file_name);

        let spinner = Spinner::new(&format!("Translating {name}..."));
        let result = translator.translate(&src_path, &dest_path).await;
        spinner.stop();

        match result {
            Ok(report) => {
                translated += 1;
                log::debug!(
                    "{name}: {} segment(s), {} distinct, wrote {} file(s)",
                    report.segments,
                    report.distinct,
                    report.written.len()
                );
                status!("{} {}", Style::success("Translated"), name);
            }
            Err(e) if options.keep_going => {
                notice!("{} {name}: {e:#}", Style::error("Failed"));
                failed.push(name);
            }
            Err(e) => return Err(e.context(format!("Failed to translate {name}"))),
        }
    }

    let stats = translator.client().stats();
    status!(
        "{} {} file(s), {} cached, {} fetched, {} request(s)",
        Style::label("Done:"),
        Style::value(translated),
        Style::value(stats.cache_hits),
        Style::value(stats.fetched),
        Style::value(stats.requests)
    );

    if !failed.is_empty() {
        bail!(
            "{} file(s) failed to translate: {}",
            failed.len(),
            failed.join(", ")
        );
    }

    Ok(())
}
