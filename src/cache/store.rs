use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

const ENTRY_EXTENSION: &str = "json";

/// Computes the cache key for a source text: hex-encoded SHA-256 of its UTF-8 bytes.
pub fn cache_key(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    hex::encode(hasher.finalize())
}

/// On-disk representation of one cache entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheRecord {
    pub text: String,
    pub translation: String,
}

/// Summary of the entries currently in a cache directory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub entries: usize,
    pub bytes: u64,
}

/// File-per-entry translation cache.
///
/// Entries are immutable once written and keyed by content, so several
/// processes may share a directory without locking; a concurrent overwrite
/// is last-writer-wins.
#[derive(Debug, Clone)]
pub struct CacheStore {
    cache_dir: PathBuf,
}

impl CacheStore {
    /// Opens (and creates, if needed) the cache directory.
    pub fn open(cache_dir: impl Into<PathBuf>) -> Result<Self> {
        let cache_dir = cache_dir.into();

        fs::create_dir_all(&cache_dir).with_context(|| {
            format!("Failed to create cache directory: {}", cache_dir.display())
        })?;

        Ok(Self { cache_dir })
    }

    pub fn dir(&self) -> &Path {
        &self.cache_dir
    }

    fn entry_path(&self, text: &str) -> PathBuf {
        self.cache_dir
            .join(format!("{}.{ENTRY_EXTENSION}", cache_key(text)))
    }

    /// Returns the cached translation of `text`, if any.
    ///
    /// Entries that fail to parse, or whose stored text differs from `text`,
    /// are deleted and reported as a miss.
    pub fn lookup(&self, text: &str) -> Result<Option<String>> {
        let path = self.entry_path(text);

        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) if e.kind() == ErrorKind::InvalidData => {
                Self::evict(&path, "entry is not valid UTF-8");
                return Ok(None);
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Failed to read cache entry: {}", path.display()));
            }
        };

        let record = match serde_json::from_str::<CacheRecord>(&contents) {
            Ok(record) => record,
            Err(e) => {
                Self::evict(&path, &e.to_string());
                return Ok(None);
            }
        };

        if record.text != text {
            Self::evict(&path, "stored text does not match");
            return Ok(None);
        }

        Ok(Some(record.translation))
    }

    /// Writes `translation` for `text`, replacing any existing entry.
    pub fn store(&self, text: &str, translation: &str) -> Result<()> {
        let path = self.entry_path(text);
        let record = CacheRecord {
            text: text.to_string(),
            translation: translation.to_string(),
        };

        let payload =
            serde_json::to_string(&record).context("Failed to serialize cache entry")?;

        fs::write(&path, payload)
            .with_context(|| format!("Failed to write cache entry: {}", path.display()))?;

        Ok(())
    }

    /// Counts the entries in the cache directory and their total size.
    pub fn stats(&self) -> Result<CacheStats> {
        let mut stats = CacheStats::default();

        for path in self.entry_paths()? {
            let metadata = fs::metadata(&path)
                .with_context(|| format!("Failed to access cache entry: {}", path.display()))?;
            stats.entries += 1;
            stats.bytes += metadata.len();
        }

        Ok(stats)
    }

    /// Deletes every entry and returns how many were removed.
    pub fn clear(&self) -> Result<usize> {
        let mut removed = 0;

        for path in self.entry_paths()? {
            match fs::remove_file(&path) {
                Ok(()) => removed += 1,
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => {
                    return Err(e).with_context(|| {
                        format!("Failed to remove cache entry: {}", path.display())
                    });
                }
            }
        }

        Ok(removed)
    }

    fn entry_paths(&self) -> Result<Vec<PathBuf>> {
        let entries = fs::read_dir(&self.cache_dir).with_context(|| {
            format!("Failed to read cache directory: {}", self.cache_dir.display())
        })?;

        let mut paths = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.is_file()
                && path.extension().is_some_and(|ext| ext == ENTRY_EXTENSION)
            {
                paths.push(path);
            }
        }

        Ok(paths)
    }

    fn evict(path: &Path, reason: &str) {
        log::debug!("Evicting cache entry {}: {reason}", path.display());

        if let Err(e) = fs::remove_file(path)
            && e.kind() != ErrorKind::NotFound
        {
            log::warn!("Failed to evict cache entry {}: {e}", path.display());
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_store(temp_dir: &TempDir) -> CacheStore {
        CacheStore::open(temp_dir.path().join("cache")).unwrap()
    }

    #[test]
    fn test_cache_key_is_sha256_hex() {
        assert_eq!(
            cache_key("Hello"),
            "185f8db32271fe25f561a6fc938b2e264306ec304eda518007d1764826381969"
        );
        assert_eq!(cache_key("Hello"), cache_key("Hello"));
        assert_ne!(cache_key("Hello"), cache_key("hello"));
    }

    #[test]
    fn test_open_creates_directory() {
        let temp_dir = TempDir::new().unwrap();
        let store = create_test_store(&temp_dir);

        assert!(store.dir().is_dir());
    }

    #[test]
    fn test_cache_miss() {
        let temp_dir = TempDir::new().unwrap();
        let store = create_test_store(&temp_dir);

        assert_eq!(store.lookup("Hello").unwrap(), None);
    }

    #[test]
    fn test_cache_hit() {
        let temp_dir = TempDir::new().unwrap();
        let store = create_test_store(&temp_dir);

        store.store("Hello", "Привет").unwrap();

        assert_eq!(store.lookup("Hello").unwrap(), Some("Привет".to_string()));
        assert_eq!(store.lookup("Goodbye").unwrap(), None);
    }

    #[test]
    fn test_store_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let store = create_test_store(&temp_dir);

        store.store("Hello", "Привет").unwrap();
        store.store("Hello", "Здравствуйте").unwrap();

        assert_eq!(
            store.lookup("Hello").unwrap(),
            Some("Здравствуйте".to_string())
        );
    }

    #[test]
    fn test_entry_file_format() {
        let temp_dir = TempDir::new().unwrap();
        let store = create_test_store(&temp_dir);

        store.store("Hello", "Привет").unwrap();

        let path = store.dir().join(format!("{}.json", cache_key("Hello")));
        let raw = fs::read_to_string(path).unwrap();
        assert!(raw.contains("Привет"));

        let record: CacheRecord = serde_json::from_str(&raw).unwrap();
        assert_eq!(record.text, "Hello");
        assert_eq!(record.translation, "Привет");
    }

    #[test]
    fn test_corrupt_entry_self_heals() {
        let temp_dir = TempDir::new().unwrap();
        let store = create_test_store(&temp_dir);
        let path = store.dir().join(format!("{}.json", cache_key("Hello")));

        fs::write(&path, "{not json").unwrap();

        assert_eq!(store.lookup("Hello").unwrap(), None);
        assert!(!path.exists());

        store.store("Hello", "Привет").unwrap();
        assert_eq!(store.lookup("Hello").unwrap(), Some("Привет".to_string()));
    }

    #[test]
    fn test_invalid_utf8_entry_self_heals() {
        let temp_dir = TempDir::new().unwrap();
        let store = create_test_store(&temp_dir);
        let path = store.dir().join(format!("{}.json", cache_key("Hello")));

        fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();

        assert_eq!(store.lookup("Hello").unwrap(), None);
        assert!(!path.exists());
    }

    #[test]
    fn test_mismatched_text_is_evicted() {
        let temp_dir = TempDir::new().unwrap();
        let store = create_test_store(&temp_dir);
        let path = store.dir().join(format!("{}.json", cache_key("Hello")));

        fs::write(&path, r#"{"text": "Other", "translation": "Другое"}"#).unwrap();

        assert_eq!(store.lookup("Hello").unwrap(), None);
        assert!(!path.exists());
    }

    #[test]
    fn test_missing_translation_field_is_evicted() {
        let temp_dir = TempDir::new().unwrap();
        let store = create_test_store(&temp_dir);
        let path = store.dir().join(format!("{}.json", cache_key("Hello")));

        fs::write(&path, r#"{"text": "Hello"}"#).unwrap();

        assert_eq!(store.lookup("Hello").unwrap(), None);
        assert!(!path.exists());
    }

    #[test]
    fn test_stats_and_clear() {
        let temp_dir = TempDir::new().unwrap();
        let store = create_test_store(&temp_dir);

        store.store("One", "Один").unwrap();
        store.store("Two", "Два").unwrap();
        fs::write(store.dir().join("notes.txt"), "ignored").unwrap();

        let stats = store.stats().unwrap();
        assert_eq!(stats.entries, 2);
        assert!(stats.bytes > 0);

        assert_eq!(store.clear().unwrap(), 2);
        assert_eq!(store.stats().unwrap(), CacheStats::default());
        assert!(store.dir().join("notes.txt").exists());
    }
}
