// Repository locator.
// Turns a repository URL from the input list into an owner/name pair.

use std::fmt;

use thiserror::Error;
use url::Url;

/// Reason a line could not be turned into a repository reference.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocateError {
    #[error("not a URL: {0}")]
    InvalidUrl(String),

    #[error("URL path has fewer than two segments: {0}")]
    MissingSegments(String),
}

/// A repository identified by its owner and name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepositoryRef {
    pub owner: String,
    pub name: String,
}

impl RepositoryRef {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// Parse a URL of the form `scheme://host/owner/name[/...]`.
    ///
    /// Anything after the second path segment is ignored, so links to a
    /// repository's releases page or a file inside it resolve to the
    /// repository itself.
    pub fn parse(line: &str) -> Result<Self, LocateError> {
        let line = line.trim();
        let url = Url::parse(line).map_err(|_| LocateError::InvalidUrl(line.to_string()))?;

        // Only outer slashes are trimmed; `/acme//widget` has an empty name.
        let mut segments = url.path().trim_matches('/').split('/');

        match (segments.next(), segments.next()) {
            (Some(owner), Some(name)) if !owner.is_empty() && !name.is_empty() => {
                Ok(Self::new(owner, name))
            }
            _ => Err(LocateError::MissingSegments(line.to_string())),
        }
    }
}

impl fmt::Display for RepositoryRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}
