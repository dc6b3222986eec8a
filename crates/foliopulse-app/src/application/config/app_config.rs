use std::path::PathBuf;
use std::time::Duration;

use crate::application::services::EventsFailurePolicy;
use foliopulse_domain::DomainError;
use foliopulse_infrastructure::config::{ClientConfig, GitHubEndpoints, TimeoutConfig};

const ENV_USERNAME: &str = "GITHUB_USERNAME";
const ENV_TOKEN: &str = "GITHUB_TOKEN";
/// Name used by the web frontend's build-time environment
const ENV_TOKEN_PUBLIC: &str = "NEXT_PUBLIC_GITHUB_TOKEN";
const ENV_API_BASE_URL: &str = "FOLIOPULSE_API_BASE_URL";
const ENV_GRAPHQL_URL: &str = "FOLIOPULSE_GRAPHQL_URL";
const ENV_EVENTS_POLICY: &str = "FOLIOPULSE_EVENTS_POLICY";
const ENV_EVENTS_PAGE_SIZE: &str = "FOLIOPULSE_EVENTS_PAGE_SIZE";
const ENV_PROXY_URL: &str = "FOLIOPULSE_PROXY_URL";
const ENV_HTTP_TIMEOUT_SECS: &str = "FOLIOPULSE_HTTP_TIMEOUT_SECS";
const ENV_LOG_DIR: &str = "FOLIOPULSE_LOG_DIR";

/// Runner settings read from the process environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub username: String,
    pub token: Option<String>,
    pub endpoints: GitHubEndpoints,
    pub events_failure_policy: EventsFailurePolicy,
    pub events_page_size: Option<u8>,
    pub proxy_url: Option<String>,
    pub http_timeout: Option<Duration>,
    pub log_dir: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, DomainError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Blank values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DomainError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let username = get(ENV_USERNAME).ok_or_else(|| {
            DomainError::InvalidInput(format!("{} must be set", ENV_USERNAME))
        })?;

        let token = get(ENV_TOKEN).or_else(|| get(ENV_TOKEN_PUBLIC));

        let mut endpoints = GitHubEndpoints::default();
        if let Some(url) = get(ENV_API_BASE_URL) {
            endpoints = endpoints.with_api_base_url(url);
        }
        if let Some(url) = get(ENV_GRAPHQL_URL) {
            endpoints = endpoints.with_graphql_url(url);
        }

        let events_failure_policy = get(ENV_EVENTS_POLICY)
            .map(|value| value.parse::<EventsFailurePolicy>())
            .transpose()?
            .unwrap_or_default();

        let events_page_size = get(ENV_EVENTS_PAGE_SIZE)
            .map(|value| parse_number::<u8>(ENV_EVENTS_PAGE_SIZE, &value))
            .transpose()?;

        let http_timeout = get(ENV_HTTP_TIMEOUT_SECS)
            .map(|value| parse_number::<u64>(ENV_HTTP_TIMEOUT_SECS, &value))
            .transpose()?
            .map(Duration::from_secs);

        let log_dir = get(ENV_LOG_DIR)
            .map(PathBuf::from)
            .unwrap_or_else(default_log_dir);

        Ok(Self {
            username,
            token,
            endpoints,
            events_failure_policy,
            events_page_size,
            proxy_url: get(ENV_PROXY_URL),
            http_timeout,
            log_dir,
        })
    }

    pub fn client_config(&self) -> ClientConfig {
        let mut timeouts = TimeoutConfig::default();
        if let Some(timeout) = self.http_timeout {
            timeouts = timeouts.with_http_request(timeout);
        }

        let mut config = ClientConfig::new(self.endpoints.clone())
            .with_timeouts(timeouts)
            .with_proxy(self.proxy_url.clone());
        if let Some(size) = self.events_page_size {
            config = config.with_events_page_size(size);
        }
        config
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, DomainError> {
    value
        .parse::<T>()
        .map_err(|_| DomainError::InvalidInput(format!("{} is not a valid number: {}", key, value)))
}

fn default_log_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join("foliopulse").join("logs"))
        .unwrap_or_else(|| PathBuf::from("logs"))
}
