mod calendar;
mod events;
mod response;
mod types;

pub use types::USER_AGENT;

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::debug;
use reqwest::{Client, Proxy};
use url::Url;

use foliopulse_domain::{ContributionCalendar, ContributionProvider, DomainError, PublicEvent};

use crate::config::ClientConfig;

/// GitHub API client backing both activity strategies.
///
/// Performs one request per call; retrying is left to the caller.
pub struct GitHubClient {
    pub(super) client: Client,
    pub(super) config: ClientConfig,
}

impl GitHubClient {
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    pub fn with_config(config: ClientConfig) -> Result<Self> {
        debug!(
            "🌐 Configuring GitHubClient api_base={} graphql={}",
            config.endpoints.api_base_url, config.endpoints.graphql_url
        );

        let mut builder = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeouts.http_request)
            .connect_timeout(config.timeouts.connect)
            .gzip(true)
            // Ignore environment/system proxy settings; use only app config.
            .no_proxy();

        if let Some(url) = &config.proxy_url {
            debug!("🌐 Configuring GitHubClient with proxy: {}", url);
            builder = builder.proxy(Proxy::all(url.as_str()).context("Invalid proxy URL")?);
        }

        let client = builder
            .build()
            .context("Failed to create GitHub HTTP client")?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// `{api_base}/users/{username}/events/public?per_page=N`, with the
    /// username escaped as a single path segment.
    pub(super) fn events_url(&self, username: &str) -> Result<Url, DomainError> {
        let mut url = Url::parse(&self.config.endpoints.api_base_url).map_err(|e| {
            DomainError::Infrastructure(format!(
                "Invalid GitHub API base URL {}: {}",
                self.config.endpoints.api_base_url, e
            ))
        })?;

        url.path_segments_mut()
            .map_err(|_| {
                DomainError::Infrastructure(format!(
                    "GitHub API base URL cannot carry a path: {}",
                    self.config.endpoints.api_base_url
                ))
            })?
            .pop_if_empty()
            .extend(["users", username, "events", "public"]);

        url.query_pairs_mut()
            .append_pair("per_page", &self.config.events_page_size().to_string());

        Ok(url)
    }
}

#[async_trait]
impl ContributionProvider for GitHubClient {
    async fn fetch_calendar(
        &self,
        username: &str,
        token: &str,
    ) -> Result<ContributionCalendar, DomainError> {
        self.request_calendar(username, token).await
    }

    async fn fetch_public_events(&self, username: &str) -> Result<Vec<PublicEvent>, DomainError> {
        self.request_public_events(username).await
    }
}

fn transport_error(api: &str, err: reqwest::Error) -> DomainError {
    if err.is_timeout() {
        DomainError::Upstream(format!("{} request timed out: {}", api, err))
    } else {
        DomainError::Upstream(format!("Failed to reach {}: {}", api, err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GitHubEndpoints;

    #[test]
    fn test_github_client_creation() {
        let client = GitHubClient::new();
        assert!(client.is_ok());
    }

    #[test]
    fn test_events_url() {
        let client = GitHubClient::new().unwrap();

        let url = client.events_url("octocat").unwrap();

        assert_eq!(
            url.as_str(),
            "https://api.github.com/users/octocat/events/public?per_page=100"
        );
    }

    #[test]
    fn test_events_url_escapes_username_and_keeps_base_path() {
        let config = ClientConfig::new(GitHubEndpoints::enterprise("https://git.example.com"))
            .with_events_page_size(30);
        let client = GitHubClient::with_config(config).unwrap();

        let url = client.events_url("a/b").unwrap();

        assert_eq!(
            url.as_str(),
            "https://git.example.com/api/v3/users/a%2Fb/events/public?per_page=30"
        );
    }

    #[test]
    fn test_events_url_rejects_invalid_base() {
        let config = ClientConfig::new(GitHubEndpoints::github().with_api_base_url("not a url"));
        let client = GitHubClient::with_config(config).unwrap();

        let err = client.events_url("octocat").unwrap_err();

        assert!(matches!(err, DomainError::Infrastructure(_)));
    }
}
