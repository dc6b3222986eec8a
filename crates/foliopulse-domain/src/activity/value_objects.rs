use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Activity recorded on one calendar day.
///
/// `date` serializes as `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Contribution {
    pub date: NaiveDate,
    pub count: u32,
}

impl Contribution {
    pub fn new(date: NaiveDate, count: u32) -> Self {
        Self { date, count }
    }

    pub fn is_active(&self) -> bool {
        self.count > 0
    }
}

/// Fixed 7-day grouping used for heatmap layout.
/// Not aligned to week-of-year boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekBucket {
    pub days: Vec<Contribution>,
}

impl WeekBucket {
    pub fn total(&self) -> u32 {
        self.days
            .iter()
            .fold(0u32, |acc, day| acc.saturating_add(day.count))
    }
}

/// Which upstream produced a summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivitySourceKind {
    /// GraphQL contribution calendar (token required)
    Calendar,
    /// REST public events listing; only the most recent events are visible,
    /// so older history is undercounted.
    PublicEvents,
}

impl ActivitySourceKind {
    pub fn is_undercounted(&self) -> bool {
        matches!(self, ActivitySourceKind::PublicEvents)
    }
}

/// Heatmap intensity bucket: 0, 1-2, 3-4, 5-6, 7+
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContributionLevel {
    None,
    Low,
    Medium,
    High,
    Max,
}

impl ContributionLevel {
    pub fn from_count(count: u32) -> Self {
        match count {
            0 => ContributionLevel::None,
            1..=2 => ContributionLevel::Low,
            3..=4 => ContributionLevel::Medium,
            5..=6 => ContributionLevel::High,
            _ => ContributionLevel::Max,
        }
    }

    pub fn as_u8(&self) -> u8 {
        *self as u8
    }
}
