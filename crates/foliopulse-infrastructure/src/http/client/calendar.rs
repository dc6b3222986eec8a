use log::{debug, info};
use reqwest::header;

use foliopulse_domain::{ContributionCalendar, DomainError};

use super::response::{check_status, parse_calendar_body, rate_limit_remaining};
use super::types::{CalendarVariables, GraphQlRequest, CALENDAR_QUERY};

const API_NAME: &str = "GitHub GraphQL API";

impl super::GitHubClient {
    /// POST the contribution calendar query with a bearer token
    pub(super) async fn request_calendar(
        &self,
        username: &str,
        token: &str,
    ) -> Result<ContributionCalendar, DomainError> {
        info!("[activity] requesting contribution calendar user={}", username);

        let payload = GraphQlRequest {
            query: CALENDAR_QUERY,
            variables: CalendarVariables { username },
        };

        let response = self
            .client
            .post(self.config.endpoints.graphql_url.as_str())
            .bearer_auth(token)
            .header(header::ACCEPT, "application/json")
            .json(&payload)
            .send()
            .await
            .map_err(|e| super::transport_error(API_NAME, e))?;

        let status = response.status();
        let remaining = rate_limit_remaining(response.headers());
        debug!(
            "[activity] calendar response user={} status={} rate_limit_remaining={}",
            username,
            status,
            remaining.as_deref().unwrap_or("-")
        );

        let body = response
            .text()
            .await
            .map_err(|e| super::transport_error(API_NAME, e))?;

        check_status(status, remaining.as_deref(), username, &body)?;
        let calendar = parse_calendar_body(&body, username)?;

        info!(
            "[activity] calendar received user={} days={} total={}",
            username,
            calendar.days.len(),
            calendar.total_contributions
        );

        Ok(calendar)
    }
}
