// Release fetcher abstraction.
// Lets the runner ask for a repository's latest release without knowing the transport.

use std::future::Future;

use crate::error::Result;
use crate::locator::RepositoryRef;

use super::client::GitHubClient;
use super::types::Release;

/// Source of the latest release for a repository.
pub trait ReleaseFetcher: Send {
    /// Fetch the latest release.
    ///
    /// # Returns
    /// * `Ok(Some(release))` - the repository has a published release
    /// * `Ok(None)` - the repository has no release
    /// * `Err(_)` - the request failed for any other reason
    fn latest_release(
        &mut self,
        repo: &RepositoryRef,
    ) -> impl Future<Output = Result<Option<Release>>> + Send;
}

impl ReleaseFetcher for GitHubClient {
    async fn latest_release(&mut self, repo: &RepositoryRef) -> Result<Option<Release>> {
        self.get_latest_release(&repo.owner, &repo.name).await
    }
}
