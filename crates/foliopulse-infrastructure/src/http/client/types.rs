use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use foliopulse_domain::{Contribution, PublicEvent};

pub const USER_AGENT: &str = concat!("foliopulse/", env!("CARGO_PKG_VERSION"));

pub(super) const CALENDAR_QUERY: &str = r#"
query($username: String!) {
  user(login: $username) {
    contributionsCollection {
      contributionCalendar {
        totalContributions
        weeks {
          contributionDays {
            date
            contributionCount
          }
        }
      }
    }
  }
}
"#;

#[derive(Debug, Serialize)]
pub(super) struct GraphQlRequest<'a> {
    pub query: &'a str,
    pub variables: CalendarVariables<'a>,
}

#[derive(Debug, Serialize)]
pub(super) struct CalendarVariables<'a> {
    pub username: &'a str,
}

#[derive(Debug, Deserialize)]
pub(super) struct GraphQlResponse<T> {
    pub data: Option<T>,
    pub errors: Option<Vec<GraphQlError>>,
}

#[derive(Debug, Deserialize)]
pub(super) struct GraphQlError {
    pub message: Option<String>,
    #[serde(rename = "type")]
    pub error_type: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct CalendarData {
    pub user: Option<UserNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct UserNode {
    pub contributions_collection: Option<ContributionsCollection>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ContributionsCollection {
    pub contribution_calendar: Option<CalendarNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct CalendarNode {
    #[serde(default)]
    pub total_contributions: u32,
    #[serde(default)]
    pub weeks: Vec<WeekNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct WeekNode {
    #[serde(default)]
    pub contribution_days: Vec<DayNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct DayNode {
    pub date: NaiveDate,
    pub contribution_count: u32,
}

impl CalendarNode {
    /// Weeks flattened into one chronological list of days
    pub fn flatten_days(self) -> Vec<Contribution> {
        self.weeks
            .into_iter()
            .flat_map(|week| week.contribution_days)
            .map(|day| Contribution::new(day.date, day.contribution_count))
            .collect()
    }
}

/// Entry of `GET /users/{username}/events/public`; unused fields are skipped.
#[derive(Debug, Deserialize)]
pub(super) struct EventNode {
    #[serde(rename = "type")]
    pub event_type: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl From<EventNode> for PublicEvent {
    fn from(node: EventNode) -> Self {
        Self {
            event_type: node.event_type,
            created_at: node.created_at,
        }
    }
}
