mod github;
mod timeouts;

pub use github::{ClientConfig, GitHubEndpoints, DEFAULT_EVENTS_PAGE_SIZE, MAX_EVENTS_PAGE_SIZE};
pub use timeouts::TimeoutConfig;
