use log::{debug, info};
use reqwest::header;

use foliopulse_domain::{DomainError, PublicEvent};

use super::response::{check_status, parse_events_body, rate_limit_remaining};

const API_NAME: &str = "GitHub REST API";

impl super::GitHubClient {
    /// GET the user's most recent public events, unauthenticated
    pub(super) async fn request_public_events(
        &self,
        username: &str,
    ) -> Result<Vec<PublicEvent>, DomainError> {
        let url = self.events_url(username)?;
        info!("[activity] requesting public events user={} url={}", username, url);

        let response = self
            .client
            .get(url)
            .header(header::ACCEPT, "application/vnd.github+json")
            .send()
            .await
            .map_err(|e| super::transport_error(API_NAME, e))?;

        let status = response.status();
        let remaining = rate_limit_remaining(response.headers());
        debug!(
            "[activity] events response user={} status={} rate_limit_remaining={}",
            username,
            status,
            remaining.as_deref().unwrap_or("-")
        );

        let body = response
            .text()
            .await
            .map_err(|e| super::transport_error(API_NAME, e))?;

        check_status(status, remaining.as_deref(), username, &body)?;
        let events = parse_events_body(&body)?;

        info!(
            "[activity] public events received user={} events={}",
            username,
            events.len()
        );

        Ok(events)
    }
}
