// In-memory release cache.

use std::collections::HashMap;

use crate::error::Result;
use crate::locator::RepositoryRef;

use super::store::{CacheEntry, ReleaseCache};

/// Cache that keeps entries in a map for the lifetime of the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryCache {
    entries: HashMap<RepositoryRef, CacheEntry>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an entry, as if a previous run had saved it.
    pub fn with_entry(mut self, repo: RepositoryRef, entry: CacheEntry) -> Self {
        self.entries.insert(repo, entry);
        self
    }

    pub fn get(&self, repo: &RepositoryRef) -> Option<&CacheEntry> {
        self.entries.get(repo)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ReleaseCache for MemoryCache {
    fn load(&self, repo: &RepositoryRef) -> Result<Option<CacheEntry>> {
        Ok(self.entries.get(repo).cloned())
    }

    fn save(&mut self, repo: &RepositoryRef, entry: &CacheEntry) -> Result<()> {
        self.entries.insert(repo.clone(), entry.clone());
        Ok(())
    }
}
