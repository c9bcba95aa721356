//! In-memory transports for unit tests.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::error::TransportError;
use super::transport::{ProviderQuery, ProviderReply, Transport};

/// Shared view of how many requests a transport has served.
#[derive(Debug, Clone, Default)]
pub struct CallCounter(Arc<AtomicUsize>);

impl CallCounter {
    pub fn get(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }

    fn bump(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

/// Replays canned replies in order, then answers 503 forever.
pub struct ScriptedTransport {
    replies: Mutex<VecDeque<Result<ProviderReply, TransportError>>>,
    calls: CallCounter,
}

impl ScriptedTransport {
    pub fn new(replies: Vec<Result<ProviderReply, TransportError>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            calls: CallCounter::default(),
        }
    }

    pub fn calls(&self) -> CallCounter {
        self.calls.clone()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    #[allow(clippy::unwrap_used)]
    async fn fetch(&self, _query: &ProviderQuery<'_>) -> Result<ProviderReply, TransportError> {
        self.calls.bump();
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(ProviderReply::new(503, "")))
    }
}

/// Answers every request with `[<target>] <text>` in the provider's payload shape.
#[derive(Default)]
pub struct EchoTransport {
    calls: CallCounter,
}

impl EchoTransport {
    pub fn calls(&self) -> CallCounter {
        self.calls.clone()
    }
}

#[async_trait]
impl Transport for EchoTransport {
    async fn fetch(&self, query: &ProviderQuery<'_>) -> Result<ProviderReply, TransportError> {
        self.calls.bump();
        let translated = format!("[{}] {}", query.target_language, query.text);
        let body = serde_json::json!([[[translated, query.text]]]).to_string();
        Ok(ProviderReply::new(200, body))
    }
}
