use super::TimeoutConfig;
use crate::http::USER_AGENT;

pub const DEFAULT_EVENTS_PAGE_SIZE: u8 = 100;
/// GitHub caps `per_page` at 100
pub const MAX_EVENTS_PAGE_SIZE: u8 = 100;

/// Base URLs of the two GitHub APIs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitHubEndpoints {
    pub api_base_url: String,
    pub graphql_url: String,
}

impl GitHubEndpoints {
    /// github.com
    pub fn github() -> Self {
        Self {
            api_base_url: "https://api.github.com".to_string(),
            graphql_url: "https://api.github.com/graphql".to_string(),
        }
    }

    /// GitHub Enterprise Server instance
    pub fn enterprise(instance_url: &str) -> Self {
        let base = instance_url.trim_end_matches('/');
        Self {
            api_base_url: format!("{}/api/v3", base),
            graphql_url: format!("{}/api/graphql", base),
        }
    }

    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    pub fn with_graphql_url(mut self, url: impl Into<String>) -> Self {
        self.graphql_url = url.into();
        self
    }
}

impl Default for GitHubEndpoints {
    fn default() -> Self {
        Self::github()
    }
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub endpoints: GitHubEndpoints,
    pub timeouts: TimeoutConfig,
    pub user_agent: String,
    pub proxy_url: Option<String>,
    events_page_size: u8,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoints: GitHubEndpoints::default(),
            timeouts: TimeoutConfig::default(),
            user_agent: USER_AGENT.to_string(),
            proxy_url: None,
            events_page_size: DEFAULT_EVENTS_PAGE_SIZE,
        }
    }
}

impl ClientConfig {
    pub fn new(endpoints: GitHubEndpoints) -> Self {
        Self {
            endpoints,
            ..Self::default()
        }
    }

    pub fn with_timeouts(mut self, timeouts: TimeoutConfig) -> Self {
        self.timeouts = timeouts;
        self
    }

    pub fn with_proxy(mut self, proxy_url: Option<String>) -> Self {
        self.proxy_url = proxy_url;
        self
    }

    /// Page size for the public events listing, clamped to 1..=100
    pub fn with_events_page_size(mut self, size: u8) -> Self {
        self.events_page_size = size.clamp(1, MAX_EVENTS_PAGE_SIZE);
        self
    }

    pub fn events_page_size(&self) -> u8 {
        self.events_page_size
    }
}
