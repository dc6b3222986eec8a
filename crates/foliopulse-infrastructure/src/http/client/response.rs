use reqwest::header::HeaderMap;
use reqwest::StatusCode;

use foliopulse_domain::{ContributionCalendar, DomainError, PublicEvent};

use super::types::{CalendarData, EventNode, GraphQlResponse};

const RATE_LIMIT_REMAINING: &str = "x-ratelimit-remaining";

pub(super) fn rate_limit_remaining(headers: &HeaderMap) -> Option<String> {
    headers
        .get(RATE_LIMIT_REMAINING)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.trim().to_string())
}

/// Map a non-success HTTP status onto the domain error taxonomy.
pub(super) fn check_status(
    status: StatusCode,
    rate_limit_remaining: Option<&str>,
    username: &str,
    body: &str,
) -> Result<(), DomainError> {
    if status.is_success() {
        return Ok(());
    }

    let exhausted = rate_limit_remaining == Some("0");

    match status {
        StatusCode::NOT_FOUND => Err(DomainError::NotFound(format!(
            "GitHub user \"{}\" not found",
            username
        ))),
        StatusCode::TOO_MANY_REQUESTS => Err(DomainError::RateLimited(
            "GitHub API rate limit exceeded".to_string(),
        )),
        StatusCode::FORBIDDEN if exhausted => Err(DomainError::RateLimited(
            "GitHub API rate limit exceeded".to_string(),
        )),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(DomainError::Authentication(
            format!("GitHub rejected the credentials (status {})", status.as_u16()),
        )),
        _ => Err(DomainError::Upstream(format!(
            "Failed to fetch GitHub data: status {}: {}",
            status.as_u16(),
            snippet(body)
        ))),
    }
}

pub(super) fn parse_calendar_body(
    body: &str,
    username: &str,
) -> Result<ContributionCalendar, DomainError> {
    let response: GraphQlResponse<CalendarData> = serde_json::from_str(body).map_err(|e| {
        DomainError::Upstream(format!("Failed to parse GitHub GraphQL response: {}", e))
    })?;

    if let Some(errors) = response.errors.filter(|errors| !errors.is_empty()) {
        if errors
            .iter()
            .any(|error| error.error_type.as_deref() == Some("NOT_FOUND"))
        {
            return Err(DomainError::NotFound(format!(
                "GitHub user \"{}\" not found",
                username
            )));
        }

        let message = errors
            .into_iter()
            .find_map(|error| error.message)
            .unwrap_or_else(|| "GitHub API error".to_string());
        return Err(DomainError::Upstream(message));
    }

    let user = response
        .data
        .and_then(|data| data.user)
        .ok_or_else(|| DomainError::NotFound(format!("GitHub user \"{}\" not found", username)))?;

    let calendar = user
        .contributions_collection
        .and_then(|collection| collection.contribution_calendar)
        .ok_or_else(|| DomainError::Upstream("No contribution data found".to_string()))?;

    let total_contributions = calendar.total_contributions;
    Ok(ContributionCalendar {
        total_contributions,
        days: calendar.flatten_days(),
    })
}

pub(super) fn parse_events_body(body: &str) -> Result<Vec<PublicEvent>, DomainError> {
    let events: Vec<EventNode> = serde_json::from_str(body).map_err(|e| {
        DomainError::Upstream(format!("Failed to parse GitHub events response: {}", e))
    })?;

    Ok(events.into_iter().map(PublicEvent::from).collect())
}

fn snippet(body: &str) -> &str {
    match body.char_indices().nth(200) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}
