#![allow(clippy::unwrap_used)]
//! Whole-document translation through the public API with a fake provider.

use async_trait::async_trait;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use docs_tl::cache::CacheStore;
use docs_tl::markdown::Segmenter;
use docs_tl::translation::{
    AliasMap, DocumentTranslator, ProviderQuery, ProviderReply, RetryPolicy, TranslationClient,
    Transport, TransportError,
};
use tempfile::TempDir;

const ROUTING_MD: &str = "\
# Routing

- [Basic Routing](#basic-routing)
    - [Redirect Routes](#redirect-routes)

<a name=\"basic-routing\"></a>
## Basic Routing

The most basic Laravel routes accept a URI and a closure:

```php
use Illuminate\\Support\\Facades\\Route;

# This comment stays in English
Route::get('/greeting', function () {
    return 'Hello World';
});
```

> [!NOTE]
> Routes are defined in your route files.

| Verb | URI |
|------|-----|

1. First step
2. Second step
";

/// Reverses every text so translated lines are easy to spot.
#[derive(Clone, Default)]
struct ReversingTransport {
    calls: Arc<AtomicUsize>,
}

#[async_trait]
impl Transport for ReversingTransport {
    async fn fetch(&self, query: &ProviderQuery<'_>) -> Result<ProviderReply, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let reversed: String = query.text.chars().rev().collect();
        let body = serde_json::json!([[[reversed, query.text]], null, query.source_language]);
        Ok(ProviderReply::new(200, body.to_string()))
    }
}

fn create_translator(cache_dir: &Path, transport: ReversingTransport, aliases: AliasMap) -> DocumentTranslator {
    let cache = CacheStore::open(cache_dir).unwrap();
    let client =
        TranslationClient::new(Box::new(transport), cache, "en", "ru", RetryPolicy::default());
    DocumentTranslator::new(client, Segmenter::default(), aliases)
}

fn reversed(text: &str) -> String {
    text.chars().rev().collect()
}

#[tokio::test]
async fn test_structure_and_code_preserved() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("routing.md");
    let dest = temp_dir.path().join("ru").join("routing.md");
    fs::write(&source, ROUTING_MD).unwrap();

    let mut translator = create_translator(
        &temp_dir.path().join("cache"),
        ReversingTransport::default(),
        AliasMap::laravel(),
    );
    translator.translate(&source, &dest).await.unwrap();

    let output = fs::read_to_string(&dest).unwrap();
    let input_lines: Vec<_> = ROUTING_MD.lines().collect();
    let output_lines: Vec<_> = output.lines().collect();
    assert_eq!(input_lines.len(), output_lines.len());
    assert!(output.ends_with('\n') && !output.ends_with("\n\n"));

    assert_eq!(output_lines[0], format!("# {}", reversed("Routing")));
    assert_eq!(
        output_lines[3],
        format!("    - {}", reversed("[Redirect Routes](#redirect-routes)"))
    );
    assert_eq!(output_lines[25], format!("1. {}", reversed("First step")));

    let fence_start = input_lines.iter().position(|l| l.starts_with("```php")).unwrap();
    let fence_end = fence_start + 7;
    assert_eq!(input_lines[fence_end], "```");
    for index in fence_start..=fence_end {
        assert_eq!(output_lines[index], input_lines[index]);
    }

    for (input, output) in input_lines.iter().zip(&output_lines) {
        if input.trim().is_empty() {
            assert_eq!(input, output);
        }
    }
}

#[tokio::test]
async fn test_second_run_is_identical_and_offline() {
    let temp_dir = TempDir::new().unwrap();
    let cache_dir = temp_dir.path().join("cache");
    let source = temp_dir.path().join("routing.md");
    fs::write(&source, ROUTING_MD).unwrap();

    let first_transport = ReversingTransport::default();
    let first_calls = Arc::clone(&first_transport.calls);
    let mut first = create_translator(&cache_dir, first_transport, AliasMap::default());
    first
        .translate(&source, &temp_dir.path().join("a").join("routing.md"))
        .await
        .unwrap();
    assert!(first_calls.load(Ordering::SeqCst) > 0);

    let second_transport = ReversingTransport::default();
    let second_calls = Arc::clone(&second_transport.calls);
    let mut second = create_translator(&cache_dir, second_transport, AliasMap::default());
    second
        .translate(&source, &temp_dir.path().join("b").join("routing.md"))
        .await
        .unwrap();

    assert_eq!(second_calls.load(Ordering::SeqCst), 0);
    assert_eq!(
        fs::read(temp_dir.path().join("a").join("routing.md")).unwrap(),
        fs::read(temp_dir.path().join("b").join("routing.md")).unwrap()
    );
}

#[tokio::test]
async fn test_configured_aliases() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("index.md");
    fs::write(&source, "# Welcome\n").unwrap();
    let out_dir = temp_dir.path().join("out");

    let mut aliases = HashMap::new();
    aliases.insert(
        "index.md".to_string(),
        vec!["README.md".to_string(), "home.md".to_string()],
    );
    let mut translator = create_translator(
        &temp_dir.path().join("cache"),
        ReversingTransport::default(),
        AliasMap::new(aliases),
    );

    let report = translator
        .translate(&source, &out_dir.join("index.md"))
        .await
        .unwrap();

    assert_eq!(report.written.len(), 3);
    let expected = format!("# {}\n", reversed("Welcome"));
    for name in ["index.md", "README.md", "home.md"] {
        assert_eq!(fs::read_to_string(out_dir.join(name)).unwrap(), expected);
    }
}
