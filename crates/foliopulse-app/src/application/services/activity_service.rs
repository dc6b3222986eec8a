use chrono::{NaiveDate, Utc};
use log::{error, info, warn};
use std::str::FromStr;
use std::sync::Arc;

use foliopulse_domain::{ActivitySourceKind, ActivitySummary, ContributionProvider, DomainError};

/// What to do when the public events fallback fails upstream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventsFailurePolicy {
    /// Log a warning and return an empty summary
    #[default]
    EmptySummary,
    /// Surface the typed error to the caller
    Propagate,
}

impl FromStr for EventsFailurePolicy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "empty" | "empty_summary" => Ok(EventsFailurePolicy::EmptySummary),
            "propagate" => Ok(EventsFailurePolicy::Propagate),
            other => Err(DomainError::InvalidInput(format!(
                "Unknown events failure policy: {}",
                other
            ))),
        }
    }
}

/// Upstream strategy, chosen by whether a token is available.
///
/// The calendar is strictly richer and is preferred whenever a token is
/// present. Public events only cover recent history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStrategy<'a> {
    Calendar { token: &'a str },
    PublicEvents,
}

impl<'a> FetchStrategy<'a> {
    /// Blank tokens count as absent
    pub fn select(token: Option<&'a str>) -> Self {
        match token.map(str::trim).filter(|token| !token.is_empty()) {
            Some(token) => FetchStrategy::Calendar { token },
            None => FetchStrategy::PublicEvents,
        }
    }

    pub fn source_kind(&self) -> ActivitySourceKind {
        match self {
            FetchStrategy::Calendar { .. } => ActivitySourceKind::Calendar,
            FetchStrategy::PublicEvents => ActivitySourceKind::PublicEvents,
        }
    }
}

pub struct ActivityService {
    provider: Arc<dyn ContributionProvider>,
    events_failure_policy: EventsFailurePolicy,
}

impl ActivityService {
    pub fn new(provider: Arc<dyn ContributionProvider>) -> Self {
        Self {
            provider,
            events_failure_policy: EventsFailurePolicy::default(),
        }
    }

    pub fn with_events_failure_policy(mut self, policy: EventsFailurePolicy) -> Self {
        self.events_failure_policy = policy;
        self
    }

    /// Fetch and aggregate contribution activity, with "today" taken in UTC.
    pub async fn fetch_activity(
        &self,
        username: &str,
        token: Option<&str>,
    ) -> Result<ActivitySummary, DomainError> {
        self.fetch_activity_on(username, token, Utc::now().date_naive())
            .await
    }

    pub async fn fetch_activity_on(
        &self,
        username: &str,
        token: Option<&str>,
        today: NaiveDate,
    ) -> Result<ActivitySummary, DomainError> {
        let username = validate_username(username)?;
        let strategy = FetchStrategy::select(token);

        info!(
            "[activity] fetch user={} source={:?} today={}",
            username,
            strategy.source_kind(),
            today
        );

        let summary = match strategy {
            FetchStrategy::Calendar { token } => {
                let calendar = self
                    .provider
                    .fetch_calendar(username, token)
                    .await
                    .inspect_err(|e| {
                        error!("[activity] calendar fetch failed user={} err={}", username, e)
                    })?;
                ActivitySummary::from_calendar(calendar, today)
            }
            FetchStrategy::PublicEvents => match self.provider.fetch_public_events(username).await
            {
                Ok(events) => ActivitySummary::from_events(&events, today),
                Err(e)
                    if self.events_failure_policy == EventsFailurePolicy::EmptySummary
                        && e.is_upstream_failure() =>
                {
                    warn!(
                        "[activity] public events unavailable, returning empty summary user={} err={}",
                        username, e
                    );
                    ActivitySummary::empty(ActivitySourceKind::PublicEvents)
                }
                Err(e) => {
                    error!("[activity] public events fetch failed user={} err={}", username, e);
                    return Err(e);
                }
            },
        };

        info!(
            "[activity] result user={} days={} total={} streak={} longest={}",
            username,
            summary.contributions().len(),
            summary.total_contributions(),
            summary.streak(),
            summary.longest_streak()
        );

        Ok(summary)
    }
}

fn validate_username(username: &str) -> Result<&str, DomainError> {
    let username = username.trim();
    if username.is_empty() {
        return Err(DomainError::InvalidInput(
            "GitHub username is required".to_string(),
        ));
    }
    Ok(username)
}
