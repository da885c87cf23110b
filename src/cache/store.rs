// Cache store for reading and writing release entries.
// Handles JSON serialization and filesystem operations.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{RelwatchError, Result};
use crate::github::Release;
use crate::locator::RepositoryRef;

use super::paths;

/// Last release seen for a repository, as persisted on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheEntry {
    /// Release tag.
    pub tag: String,
    /// Publish timestamp, verbatim from the API.
    pub date: String,
}

impl CacheEntry {
    pub fn new(tag: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            date: date.into(),
        }
    }
}

impl From<&Release> for CacheEntry {
    fn from(release: &Release) -> Self {
        Self::new(release.tag_name.clone(), release.published())
    }
}

/// Persistent store of the last release seen per repository.
pub trait ReleaseCache {
    /// Load the entry for `repo`, or `None` if it was never saved.
    fn load(&self, repo: &RepositoryRef) -> Result<Option<CacheEntry>>;

    /// Save `entry` for `repo`, replacing any previous entry.
    fn save(&mut self, repo: &RepositoryRef, entry: &CacheEntry) -> Result<()>;
}

/// Cache backed by one JSON file per repository under a root directory.
#[derive(Debug, Clone)]
pub struct FileCache {
    root: PathBuf,
    read_only: bool,
}

impl FileCache {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            read_only: false,
        }
    }

    /// A cache that loads entries but silently drops saves.
    pub fn read_only(root: impl Into<PathBuf>) -> Self {
        Self {
            read_only: true,
            ..Self::new(root)
        }
    }
}

impl ReleaseCache for FileCache {
    fn load(&self, repo: &RepositoryRef) -> Result<Option<CacheEntry>> {
        read_entry(&paths::entry_path(&self.root, repo))
    }

    fn save(&mut self, repo: &RepositoryRef, entry: &CacheEntry) -> Result<()> {
        let path = paths::entry_path(&self.root, repo);
        if self.read_only {
            debug!(path = %path.display(), "read-only cache, skipping write");
            return Ok(());
        }
        write_entry(&path, entry)
    }
}

/// Read a cache entry from a file.
pub fn read_entry(path: &Path) -> Result<Option<CacheEntry>> {
    if !path.exists() {
        return Ok(None);
    }

    let contents = fs::read_to_string(path)?;
    let entry = serde_json::from_str(&contents).map_err(|source| RelwatchError::CorruptCache {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(entry))
}

/// Write a cache entry as JSON.
pub fn write_entry(path: &Path, entry: &CacheEntry) -> Result<()> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(entry)?;

    // Write atomically via temp file
    let temp_path = path.with_extension("tmp");
    let mut file = fs::File::create(&temp_path)?;
    file.write_all(json.as_bytes())?;
    file.sync_all()?;
    fs::rename(&temp_path, path)?;

    debug!(path = %path.display(), tag = %entry.tag, "cache entry written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let mut cache = FileCache::new(temp_dir.path());
        let repo = RepositoryRef::new("acme", "widget");
        let entry = CacheEntry::new("v1.2.0", "2024-01-01T00:00:00Z");

        cache.save(&repo, &entry).unwrap();

        assert_eq!(cache.load(&repo).unwrap(), Some(entry));
        assert!(temp_dir.path().join("acme").join("widget.json").is_file());
    }

    #[test]
    fn test_save_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let mut cache = FileCache::new(temp_dir.path());
        let repo = RepositoryRef::new("acme", "widget");

        cache
            .save(&repo, &CacheEntry::new("v1.0.0", "2023-01-01T00:00:00Z"))
            .unwrap();
        cache
            .save(&repo, &CacheEntry::new("v1.1.0", "2023-06-01T00:00:00Z"))
            .unwrap();

        let loaded = cache.load(&repo).unwrap().unwrap();
        assert_eq!(loaded.tag, "v1.1.0");
        assert_eq!(loaded.date, "2023-06-01T00:00:00Z");
        assert!(!temp_dir.path().join("acme").join("widget.tmp").exists());
    }

    #[test]
    fn test_file_format() {
        let temp_dir = TempDir::new().unwrap();
        let mut cache = FileCache::new(temp_dir.path());
        let repo = RepositoryRef::new("acme", "widget");

        cache
            .save(&repo, &CacheEntry::new("v1.2.0", "2024-01-01T00:00:00Z"))
            .unwrap();

        let raw = fs::read_to_string(temp_dir.path().join("acme/widget.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"tag": "v1.2.0", "date": "2024-01-01T00:00:00Z"})
        );
    }

    #[test]
    fn test_load_missing() {
        let temp_dir = TempDir::new().unwrap();
        let cache = FileCache::new(temp_dir.path());

        let loaded = cache.load(&RepositoryRef::new("acme", "widget")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_load_corrupt() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("acme").join("widget.json");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{ not json").unwrap();

        let cache = FileCache::new(temp_dir.path());
        let result = cache.load(&RepositoryRef::new("acme", "widget"));

        match result {
            Err(RelwatchError::CorruptCache { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected corrupt cache error, got {:?}", other),
        }
    }

    #[test]
    fn test_read_only_skips_writes() {
        let temp_dir = TempDir::new().unwrap();
        let mut cache = FileCache::read_only(temp_dir.path());
        let repo = RepositoryRef::new("acme", "widget");

        cache
            .save(&repo, &CacheEntry::new("v1.2.0", "2024-01-01T00:00:00Z"))
            .unwrap();

        assert!(cache.load(&repo).unwrap().is_none());
        assert!(!temp_dir.path().join("acme").exists());
    }
}
