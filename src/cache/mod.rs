// Cache module for the last release seen per repository.
// Stores one JSON entry per repository under `<root>/<owner>/<name>.json`.

pub mod memory;
pub mod paths;
pub mod store;

pub use memory::MemoryCache;
pub use paths::DEFAULT_CACHE_DIR;
pub use store::{CacheEntry, FileCache, ReleaseCache};
