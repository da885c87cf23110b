// Cache path utilities.
// Maps a repository to its entry file under the cache root.

use std::path::{Path, PathBuf};

use crate::locator::RepositoryRef;

/// Default cache root, relative to the working directory.
pub const DEFAULT_CACHE_DIR: &str = "cache";

/// Path to an owner's directory.
pub fn owner_dir(root: &Path, owner: &str) -> PathBuf {
    root.join(sanitize_name(owner))
}

/// Path to a repository's cache entry (`<root>/<owner>/<name>.json`).
pub fn entry_path(root: &Path, repo: &RepositoryRef) -> PathBuf {
    owner_dir(root, &repo.owner).join(format!("{}.json", sanitize_name(&repo.name)))
}

/// Sanitize a name for use in filesystem paths.
/// Replaces problematic characters with underscores.
fn sanitize_name(name: &str) -> String {
    let sanitized: String = name
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            _ => c,
        })
        .collect();

    // Never let a segment climb out of the cache root.
    match sanitized.as_str() {
        "." | ".." => sanitized.replace('.', "_"),
        _ => sanitized,
    }
}
