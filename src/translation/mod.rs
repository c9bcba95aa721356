//! Translation of markdown documents through a remote provider.

mod client;
mod document;
mod error;
mod language;
mod transport;

#[cfg(test)]
pub(crate) mod testing;

pub use client::{ClientStats, RetryPolicy, TranslationClient, parse_payload};
pub use document::{AliasMap, DocumentReport, DocumentTranslator};
pub use error::{TranslationError, TransportError};
pub use language::{
    AUTO_DETECT, KNOWN_LANGUAGES, Language, is_known, print_languages, validate_language,
    validate_source_language,
};
pub use transport::{
    DEFAULT_CLIENT_ID, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT, HttpTransport, ProviderQuery,
    ProviderReply, ProviderSettings, Transport,
};
