// GitHub API endpoint functions.
// Provides typed methods for fetching data from the GitHub REST API.

use crate::error::{RelwatchError, Result};

use super::client::GitHubClient;
use super::types::Release;

impl GitHubClient {
    /// Get the latest published release of a repository.
    ///
    /// Returns `Ok(None)` when GitHub answers 404, which covers both a
    /// repository without releases and one that does not exist.
    pub async fn get_latest_release(&mut self, owner: &str, repo: &str) -> Result<Option<Release>> {
        match self
            .get(&format!("/repos/{}/{}/releases/latest", owner, repo))
            .await
        {
            Ok(response) => {
                let release: Release = response.json().await?;
                Ok(Some(release))
            }
            Err(RelwatchError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }
}
