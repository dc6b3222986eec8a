use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::value_objects::Contribution;
use crate::shared::DomainError;

/// Contribution calendar as reported by the upstream, weeks already flattened
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionCalendar {
    pub total_contributions: u32,
    pub days: Vec<Contribution>,
}

/// One entry of a user's public events listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicEvent {
    pub event_type: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Upstream source of contribution data
///
/// Implementations perform exactly one request per call and never retry.
#[async_trait]
pub trait ContributionProvider: Send + Sync {
    /// Fetch the full contribution calendar. Requires a bearer token.
    async fn fetch_calendar(
        &self,
        username: &str,
        token: &str,
    ) -> Result<ContributionCalendar, DomainError>;

    /// Fetch the most recent public events without credentials.
    async fn fetch_public_events(&self, username: &str) -> Result<Vec<PublicEvent>, DomainError>;
}
