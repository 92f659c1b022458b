//! Content-hash cache for incremental re-annotation.
//!
//! Annotation is idempotent, so the cache is purely work avoidance: a
//! file whose content hash matches its recorded hash was produced or
//! accepted by a previous run and is skipped without parsing. Losing the
//! cache costs time, never correctness.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::PathBuf;

#[derive(Serialize, Deserialize)]
pub struct CacheEntry {
    pub hash: String,
}

pub struct AnnotateCache {
    cache_dir: PathBuf,
}

impl AnnotateCache {
    pub fn new() -> Self {
        // Default to .quill/annotate-cache in the current workspace
        Self::with_dir(PathBuf::from(".quill/annotate-cache"))
    }

    pub fn with_dir(cache_dir: PathBuf) -> Self {
        if !cache_dir.exists() {
            fs::create_dir_all(&cache_dir).ok();
        }
        Self { cache_dir }
    }

    pub fn compute_hash(source: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(source.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    fn entry_path(&self, file_path: &str) -> PathBuf {
        // Create a stable file name for the cache entry
        let safe_name = file_path
            .replace("/", "_")
            .replace("\\", "_")
            .replace(":", "_");
        self.cache_dir.join(format!("{}.json", safe_name))
    }

    /// True when `source` matches the hash recorded for `file_path`.
    /// Unreadable or corrupt entries are removed and treated as a miss.
    pub fn is_current(&self, file_path: &str, source: &str) -> bool {
        let entry_path = self.entry_path(file_path);
        if !entry_path.exists() {
            return false;
        }
        let data = match fs::read_to_string(&entry_path) {
            Ok(data) => data,
            Err(_) => return false,
        };
        let entry: CacheEntry = match serde_json::from_str(&data) {
            Ok(entry) => entry,
            Err(e) => {
                eprintln!(
                    "[QuillNative] Corrupt cache entry for {}, invalidating: {}",
                    file_path, e
                );
                fs::remove_file(&entry_path).ok();
                return false;
            }
        };
        entry.hash == Self::compute_hash(source)
    }

    /// Record `source` as the accepted content for `file_path`. Failures
    /// are swallowed; the worst case is a redundant re-annotation later.
    pub fn record(&self, file_path: &str, source: &str) {
        let entry = CacheEntry {
            hash: Self::compute_hash(source),
        };
        if let Ok(data) = serde_json::to_string(&entry) {
            fs::write(self.entry_path(file_path), data).ok();
        }
    }
}
