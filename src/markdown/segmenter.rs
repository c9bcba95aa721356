use anyhow::{Context, Result, bail};
use regex::Regex;

/// Leading markers stripped before a line is sent for translation: list
/// bullets, ordered list numbers, blockquotes, headings, `:::` containers
/// and table pipes.
pub const DEFAULT_PREFIX_PATTERN: &str =
    r"^(\s*(?:[-*+]\s+|\d+\.\s+|>\s+|#+\s+|:::\s*|\|\s+|\|))";

/// Delimiters that open or close a fenced code region.
pub const DEFAULT_FENCES: &[&str] = &["```"];

/// Splits a markdown document into fixed lines and translatable segments.
#[derive(Debug, Clone)]
pub struct Segmenter {
    prefix: Regex,
    fences: Vec<String>,
}

impl Segmenter {
    /// Creates a segmenter from a prefix pattern and a list of fence delimiters.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern does not compile or a fence is blank.
    pub fn new(prefix_pattern: &str, fences: Vec<String>) -> Result<Self> {
        let prefix = Regex::new(prefix_pattern)
            .with_context(|| format!("Invalid prefix pattern: {prefix_pattern}"))?;

        if fences.is_empty() || fences.iter().any(|fence| fence.trim().is_empty()) {
            bail!("At least one non-empty fence delimiter is required");
        }

        Ok(Self { prefix, fences })
    }

    /// Splits a line into its structural prefix and the remaining core text.
    ///
    /// Only a match anchored at the first byte counts. The prefix ends where
    /// the first capture group ends, or where the whole match ends if the
    /// pattern has no group.
    pub fn split_prefix<'a>(&self, line: &'a str) -> (&'a str, &'a str) {
        let prefix_len = self
            .prefix
            .captures(line)
            .filter(|caps| caps.get(0).is_some_and(|m| m.start() == 0))
            .and_then(|caps| caps.get(1).or_else(|| caps.get(0)))
            .map_or(0, |m| m.end());

        line.split_at(prefix_len)
    }

    fn is_fence(&self, line: &str) -> bool {
        let trimmed = line.trim();
        self.fences
            .iter()
            .any(|fence| trimmed.starts_with(fence.as_str()))
    }

    /// Classifies every line of `source`.
    pub fn segment(&self, source: &str) -> SegmentedDocument {
        let mut document = SegmentedDocument::default();
        let mut in_code_block = false;

        for line in source.lines() {
            let line = line.strip_suffix('\r').unwrap_or(line);

            if self.is_fence(line) {
                in_code_block = !in_code_block;
                document.push_literal(line);
                continue;
            }

            if in_code_block || line.trim().is_empty() {
                document.push_literal(line);
                continue;
            }

            let (prefix, core) = self.split_prefix(line);
            if core.trim().is_empty() {
                document.push_literal(line);
                continue;
            }

            document.push_placeholder(prefix, core);
        }

        document
    }
}

impl Default for Segmenter {
    #[allow(clippy::expect_used)]
    fn default() -> Self {
        // expect is safe: the default pattern and fences are compile-time constants
        Self::new(
            DEFAULT_PREFIX_PATTERN,
            DEFAULT_FENCES.iter().map(ToString::to_string).collect(),
        )
        .expect("default segmenter settings are valid")
    }
}

/// A segmented document as three parallel arrays.
///
/// `slots` holds every output line, with `None` where a translation is
/// still pending. `placeholders[i]` names the slot and prefix for
/// `segments[i]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SegmentedDocument {
    slots: Vec<Option<String>>,
    placeholders: Vec<(usize, String)>,
    segments: Vec<String>,
}

impl SegmentedDocument {
    fn push_literal(&mut self, line: &str) {
        self.slots.push(Some(line.to_string()));
    }

    fn push_placeholder(&mut self, prefix: &str, core: &str) {
        self.placeholders.push((self.slots.len(), prefix.to_string()));
        self.slots.push(None);
        self.segments.push(core.to_string());
    }

    pub fn slots(&self) -> &[Option<String>] {
        &self.slots
    }

    pub fn placeholders(&self) -> &[(usize, String)] {
        &self.placeholders
    }

    /// Core texts awaiting translation, in document order.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Rebuilds the document with one translation per segment.
    ///
    /// Lines are joined with `\n` and a single trailing newline is appended.
    ///
    /// # Errors
    ///
    /// Returns an error if the number of translations does not match the
    /// number of segments.
    pub fn render<S: AsRef<str>>(&self, translations: &[S]) -> Result<String> {
        if translations.len() != self.segments.len() {
            bail!(
                "Expected {} translations, got {}",
                self.segments.len(),
                translations.len()
            );
        }

        let mut slots = self.slots.clone();
        for ((index, prefix), translated) in self.placeholders.iter().zip(translations) {
            if let Some(slot) = slots.get_mut(*index) {
                *slot = Some(format!("{prefix}{}", translated.as_ref()));
            }
        }

        let mut rendered = slots
            .into_iter()
            .map(Option::unwrap_or_default)
            .collect::<Vec<_>>()
            .join("\n");
        rendered.push('\n');

        Ok(rendered)
    }
}
