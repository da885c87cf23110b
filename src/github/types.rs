// GitHub API response types.
// Defines structs for deserializing GitHub REST API responses.

use serde::{Deserialize, Serialize};

/// Latest published release of a repository.
///
/// `published_at` is kept as the raw string the API returned so it can be
/// cached without reformatting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Release {
    pub tag_name: String,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub html_url: Option<String>,
}

impl Release {
    pub fn new(tag_name: impl Into<String>, published_at: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            published_at: Some(published_at.into()),
            html_url: None,
        }
    }

    /// Publish timestamp, or an empty string when the API sent none.
    pub fn published(&self) -> &str {
        self.published_at.as_deref().unwrap_or_default()
    }
}

/// Rate limit information from response headers.
#[derive(Debug, Clone, Default)]
pub struct RateLimit {
    pub limit: u64,
    pub remaining: u64,
    pub reset: u64,
}
