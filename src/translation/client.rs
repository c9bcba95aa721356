use serde_json::Value;
use std::time::Duration;

use super::error::TranslationError;
use super::transport::{ProviderQuery, Transport};
use crate::cache::CacheStore;

/// Bounded exponential backoff.
///
/// The delay after attempt `n` (1-based) is `base_delay * 2^(n-1)`; no
/// delay follows the final attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay: Duration,
    pub retryable_statuses: Vec<u16>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            base_delay: Duration::from_millis(500),
            retryable_statuses: vec![429, 500, 502, 503],
        }
    }
}

impl RetryPolicy {
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let factor = 2u32.saturating_pow(attempt.saturating_sub(1));
        self.base_delay.saturating_mul(factor)
    }

    pub fn is_retryable(&self, status: u16) -> bool {
        self.retryable_statuses.contains(&status)
    }

    /// Upper bound on time spent sleeping for one text.
    pub fn max_total_delay(&self) -> Duration {
        (1..self.max_attempts)
            .map(|attempt| self.delay_for(attempt))
            .fold(Duration::ZERO, Duration::saturating_add)
    }
}

/// Counters for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClientStats {
    pub cache_hits: usize,
    pub requests: usize,
    pub fetched: usize,
}

/// Cache-first translation of individual texts with retry.
pub struct TranslationClient {
    transport: Box<dyn Transport>,
    cache: CacheStore,
    source_language: String,
    target_language: String,
    retry: RetryPolicy,
    stats: ClientStats,
}

impl TranslationClient {
    pub fn new(
        transport: Box<dyn Transport>,
        cache: CacheStore,
        source_language: impl Into<String>,
        target_language: impl Into<String>,
        retry: RetryPolicy,
    ) -> Self {
        Self {
            transport,
            cache,
            source_language: source_language.into(),
            target_language: target_language.into(),
            retry,
            stats: ClientStats::default(),
        }
    }

    pub const fn stats(&self) -> ClientStats {
        self.stats
    }

    pub const fn cache(&self) -> &CacheStore {
        &self.cache
    }

    /// Translates one text, consulting the cache before the provider.
    ///
    /// Empty text short-circuits to an empty translation.
    pub async fn translate_one(&mut self, text: &str) -> Result<String, TranslationError> {
        if text.is_empty() {
            return Ok(String::new());
        }

        if let Some(cached) = self.cache.lookup(text)? {
            self.stats.cache_hits += 1;
            return Ok(cached);
        }

        let translation = self.fetch_with_retry(text).await?;
        self.cache.store(text, &translation)?;
        self.stats.fetched += 1;

        Ok(translation)
    }

    /// Translates texts one at a time, in order.
    pub async fn translate_all<S: AsRef<str>>(
        &mut self,
        texts: &[S],
    ) -> Result<Vec<String>, TranslationError> {
        let mut translations = Vec::with_capacity(texts.len());
        for text in texts {
            translations.push(self.translate_one(text.as_ref()).await?);
        }
        Ok(translations)
    }

    async fn fetch_with_retry(&mut self, text: &str) -> Result<String, TranslationError> {
        let query = ProviderQuery {
            source_language: &self.source_language,
            target_language: &self.target_language,
            text,
        };
        let max_attempts = self.retry.max_attempts;
        let mut last_error = String::from("no attempt made");

        for attempt in 1..=max_attempts {
            self.stats.requests += 1;

            match self.transport.fetch(&query).await {
                Ok(reply) if reply.status == 200 => match parse_payload(&reply.body) {
                    Some(translation) => return Ok(translation),
                    None => last_error = "malformed response payload".to_string(),
                },
                Ok(reply) if self.retry.is_retryable(reply.status) => {
                    last_error = format!("status {}", reply.status);
                }
                Ok(reply) => {
                    log::error!("Provider rejected request with status {}", reply.status);
                    return Err(TranslationError::Rejected {
                        status: reply.status,
                    });
                }
                Err(e) => last_error = e.to_string(),
            }

            if attempt < max_attempts {
                let delay = self.retry.delay_for(attempt);
                log::warn!(
                    "Translation attempt {attempt}/{max_attempts} failed ({last_error}), retrying in {delay:?}"
                );
                tokio::time::sleep(delay).await;
            }
        }

        Err(TranslationError::Exhausted {
            attempts: max_attempts,
            last: last_error,
        })
    }
}

/// Extracts the translation from a provider payload.
///
/// The payload's first element lists segments whose first element is a
/// translated fragment; non-empty fragments are concatenated in order.
/// Returns `None` when the payload does not have that shape.
pub fn parse_payload(body: &str) -> Option<String> {
    let payload: Value = serde_json::from_str(body).ok()?;
    let segments = payload.get(0)?.as_array()?;

    let translation = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(Value::as_str))
        .collect();

    Some(translation)
}
