// GitHub API module.
// Provides the client, release types, and the fetcher seam used by the runner.

pub mod client;
pub mod endpoints;
pub mod fetcher;
pub mod types;

pub use client::{GITHUB_API_BASE, GitHubClient};
pub use fetcher::ReleaseFetcher;
pub use types::{RateLimit, Release};
