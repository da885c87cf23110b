// GitHub API HTTP client.
// Handles optional authentication, rate limit tracking, and status mapping.

use reqwest::{
    Client, Response, StatusCode,
    header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT},
};
use tracing::debug;

use crate::error::{RelwatchError, Result};

use super::types::RateLimit;

pub const GITHUB_API_BASE: &str = "https://api.github.com";
const GITHUB_API_VERSION: &str = "2022-11-28";

/// GitHub API client with optional authentication and rate limit tracking.
pub struct GitHubClient {
    client: Client,
    base_url: String,
    rate_limit: RateLimit,
}

impl GitHubClient {
    /// Create a new client against `base_url`, authenticating when a token is given.
    pub fn new(base_url: &str, token: Option<&str>) -> Result<Self> {
        let mut headers = HeaderMap::new();

        if let Some(token) = token {
            headers.insert(
                AUTHORIZATION,
                HeaderValue::from_str(&format!("Bearer {}", token))
                    .map_err(|e| RelwatchError::Other(e.to_string()))?,
            );
        }
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            HeaderValue::from_static(GITHUB_API_VERSION),
        );
        headers.insert(USER_AGENT, HeaderValue::from_static("relwatch"));

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(RelwatchError::Api)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            rate_limit: RateLimit::default(),
        })
    }

    /// Get the current rate limit information.
    pub fn rate_limit(&self) -> &RateLimit {
        &self.rate_limit
    }

    /// Make a GET request to the GitHub API.
    pub async fn get(&mut self, endpoint: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!(%url, "GET");
        let response = self.client.get(&url).send().await.map_err(RelwatchError::Api)?;

        self.update_rate_limit(&response);
        self.check_response(response).await
    }

    /// Update rate limit from response headers.
    fn update_rate_limit(&mut self, response: &Response) {
        let header = |name: &str| -> Option<u64> {
            response
                .headers()
                .get(name)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok())
        };

        if let Some(limit) = header("x-ratelimit-limit") {
            self.rate_limit.limit = limit;
        }
        if let Some(remaining) = header("x-ratelimit-remaining") {
            self.rate_limit.remaining = remaining;
        }
        if let Some(reset) = header("x-ratelimit-reset") {
            self.rate_limit.reset = reset;
        }
    }

    /// Check response status and convert errors.
    async fn check_response(&self, response: Response) -> Result<Response> {
        match response.status() {
            StatusCode::OK => Ok(response),
            StatusCode::UNAUTHORIZED => Err(RelwatchError::Unauthorized),
            StatusCode::NOT_FOUND => {
                let url = response.url().to_string();
                Err(RelwatchError::NotFound(url))
            }
            StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS
                if self.rate_limit.remaining == 0 && self.rate_limit.limit > 0 =>
            {
                let reset_at = chrono::DateTime::from_timestamp(self.rate_limit.reset as i64, 0)
                    .map(|dt| dt.format("%H:%M:%S").to_string())
                    .unwrap_or_else(|| "unknown".to_string());
                Err(RelwatchError::RateLimited { reset_at })
            }
            status => Err(RelwatchError::Http {
                status,
                body: response.text().await.unwrap_or_default(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    #[tokio::test]
    async fn test_get_tracks_rate_limit() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/rate")
            .with_status(200)
            .with_header("x-ratelimit-limit", "60")
            .with_header("x-ratelimit-remaining", "59")
            .with_header("x-ratelimit-reset", "1700000000")
            .with_body("{}")
            .create_async()
            .await;

        let mut client = GitHubClient::new(&server.url(), None).unwrap();
        client.get("/rate").await.unwrap();

        mock.assert_async().await;
        assert_eq!(client.rate_limit().limit, 60);
        assert_eq!(client.rate_limit().remaining, 59);
        assert_eq!(client.rate_limit().reset, 1_700_000_000);
    }

    #[tokio::test]
    async fn test_get_sends_token_and_headers() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/auth")
            .match_header("authorization", "Bearer secret")
            .match_header("accept", "application/vnd.github+json")
            .match_header("user-agent", "relwatch")
            .with_status(200)
            .create_async()
            .await;

        let mut client = GitHubClient::new(&format!("{}/", server.url()), Some("secret")).unwrap();
        client.get("/auth").await.unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_status_mapping() {
        let mut server = Server::new_async().await;
        let _unauthorized = server
            .mock("GET", "/unauthorized")
            .with_status(401)
            .create_async()
            .await;
        let _missing = server
            .mock("GET", "/missing")
            .with_status(404)
            .create_async()
            .await;
        let _limited = server
            .mock("GET", "/limited")
            .with_status(403)
            .with_header("x-ratelimit-limit", "60")
            .with_header("x-ratelimit-remaining", "0")
            .with_header("x-ratelimit-reset", "1700000000")
            .create_async()
            .await;
        let _broken = server
            .mock("GET", "/broken")
            .with_status(502)
            .with_body("bad gateway")
            .create_async()
            .await;

        let mut client = GitHubClient::new(&server.url(), None).unwrap();

        assert!(matches!(
            client.get("/unauthorized").await,
            Err(RelwatchError::Unauthorized)
        ));
        assert!(matches!(
            client.get("/missing").await,
            Err(RelwatchError::NotFound(_))
        ));
        assert!(matches!(
            client.get("/limited").await,
            Err(RelwatchError::RateLimited { .. })
        ));
        match client.get("/broken").await {
            Err(RelwatchError::Http { status, body }) => {
                assert_eq!(status, StatusCode::BAD_GATEWAY);
                assert_eq!(body, "bad gateway");
            }
            other => panic!("unexpected result: {:?}", other.map(|r| r.status())),
        }
    }
}
