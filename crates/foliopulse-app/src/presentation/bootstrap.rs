use std::sync::Arc;
use tracing::info;

use crate::application::config::AppConfig;
use crate::application::services::ActivityService;
use crate::application::ResultExt;
use foliopulse_domain::DomainError;
use foliopulse_infrastructure::http::GitHubClient;

/// Wire the GitHub client into an [`ActivityService`] configured from `config`.
pub fn build_activity_service(config: &AppConfig) -> Result<ActivityService, DomainError> {
    let client_config = config.client_config();
    info!(
        "🌐 GitHub endpoints: api={} graphql={}",
        client_config.endpoints.api_base_url, client_config.endpoints.graphql_url
    );

    let client = GitHubClient::with_config(client_config).to_infra_err()?;

    info!(
        "✓ Activity service ready (events policy: {:?}, token: {})",
        config.events_failure_policy,
        if config.token.is_some() { "set" } else { "not set" }
    );

    Ok(ActivityService::new(Arc::new(client))
        .with_events_failure_policy(config.events_failure_policy))
}
