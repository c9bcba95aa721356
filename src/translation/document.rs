use anyhow::{Context, Result};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use super::client::TranslationClient;
use crate::fs::atomic_write;
use crate::markdown::Segmenter;

/// Extra file names that receive a copy of a translated document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasMap(HashMap<String, Vec<String>>);

impl AliasMap {
    pub const fn new(aliases: HashMap<String, Vec<String>>) -> Self {
        Self(aliases)
    }

    /// Aliases shipped for the Laravel documentation, whose pages are
    /// linked under both names.
    pub fn laravel() -> Self {
        let pairs = [
            ("artisan.md", "artisan-console.md"),
            ("blade.md", "blade-templates.md"),
            ("container.md", "service-container.md"),
            ("csrf.md", "csrf-protection.md"),
            ("providers.md", "service-providers.md"),
            ("urls.md", "url-generation.md"),
            ("vite.md", "asset-bundling.md"),
        ];

        Self(
            pairs
                .into_iter()
                .map(|(name, alias)| (name.to_string(), vec![alias.to_string()]))
                .collect(),
        )
    }

    pub fn aliases_for(&self, file_name: &str) -> &[String] {
        self.0.get(file_name).map(Vec::as_slice).unwrap_or_default()
    }
}

/// What a single [`DocumentTranslator::translate`] call did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentReport {
    /// Lines that needed translation.
    pub segments: usize,
    /// Distinct texts among them.
    pub distinct: usize,
    /// Output file first, then alias copies.
    pub written: Vec<PathBuf>,
}

/// Translates whole markdown files.
pub struct DocumentTranslator {
    client: TranslationClient,
    segmenter: Segmenter,
    aliases: AliasMap,
}

impl DocumentTranslator {
    pub const fn new(client: TranslationClient, segmenter: Segmenter, aliases: AliasMap) -> Self {
        Self {
            client,
            segmenter,
            aliases,
        }
    }

    pub const fn client(&self) -> &TranslationClient {
        &self.client
    }

    /// Translates `source_path` into `dest_path` and writes any alias copies
    /// next to it.
    ///
    /// Texts repeated within the document are resolved once.
    pub async fn translate(&mut self, source_path: &Path, dest_path: &Path) -> Result<DocumentReport> {
        let source = fs::read_to_string(source_path)
            .with_context(|| format!("Failed to read file: {}", source_path.display()))?;

        let document = self.segmenter.segment(&source);

        let mut seen = HashSet::new();
        let distinct: Vec<&str> = document
            .segments()
            .iter()
            .map(String::as_str)
            .filter(|segment| seen.insert(*segment))
            .collect();

        let translated = self.client.translate_all(&distinct).await?;
        let resolved: HashMap<&str, &str> = distinct
            .iter()
            .copied()
            .zip(translated.iter().map(String::as_str))
            .collect();
        let translations: Vec<&str> = document
            .segments()
            .iter()
            .map(|segment| resolved.get(segment.as_str()).copied().unwrap_or_default())
            .collect();

        let rendered = document.render(&translations)?;

        if let Some(parent) = dest_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create output directory: {}", parent.display())
            })?;
        }

        atomic_write(dest_path, &rendered)?;
        let mut written = vec![dest_path.to_path_buf()];

        let file_name = source_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        for alias in self.aliases.aliases_for(&file_name) {
            let alias_path = dest_path.with_file_name(alias);
            atomic_write(&alias_path, &rendered)?;
            written.push(alias_path);
        }

        Ok(DocumentReport {
            segments: document.segments().len(),
            distinct: distinct.len(),
            written,
        })
    }
}
