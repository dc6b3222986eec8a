use chrono::NaiveDate;
use serde::Serialize;

use super::aggregation::{aggregate_events, normalize_days, sum_counts};
use super::provider::{ContributionCalendar, PublicEvent};
use super::streak::compute_streaks;
use super::value_objects::{ActivitySourceKind, Contribution};

/// Aggregated contribution activity for one fetch.
///
/// Built fresh per fetch and never mutated afterwards. `contributions` is
/// sorted ascending with unique dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivitySummary {
    contributions: Vec<Contribution>,
    total_contributions: u32,
    streak: u32,
    longest_streak: u32,
    active_days: u32,
    source: ActivitySourceKind,
}

impl ActivitySummary {
    /// Summary with no recorded activity
    pub fn empty(source: ActivitySourceKind) -> Self {
        Self {
            contributions: Vec::new(),
            total_contributions: 0,
            streak: 0,
            longest_streak: 0,
            active_days: 0,
            source,
        }
    }

    /// Total comes from the server, not from summing days.
    pub fn from_calendar(calendar: ContributionCalendar, today: NaiveDate) -> Self {
        let contributions = normalize_days(calendar.days);
        Self::build(
            contributions,
            calendar.total_contributions,
            today,
            ActivitySourceKind::Calendar,
        )
    }

    pub fn from_events(events: &[PublicEvent], today: NaiveDate) -> Self {
        let contributions = aggregate_events(events);
        let total = sum_counts(&contributions);
        Self::build(contributions, total, today, ActivitySourceKind::PublicEvents)
    }

    fn build(
        contributions: Vec<Contribution>,
        total_contributions: u32,
        today: NaiveDate,
        source: ActivitySourceKind,
    ) -> Self {
        let streaks = compute_streaks(&contributions, today);
        Self {
            contributions,
            total_contributions,
            streak: streaks.current_streak,
            longest_streak: streaks.longest_streak,
            active_days: streaks.active_days,
            source,
        }
    }

    pub fn contributions(&self) -> &[Contribution] {
        &self.contributions
    }

    pub fn total_contributions(&self) -> u32 {
        self.total_contributions
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }

    pub fn longest_streak(&self) -> u32 {
        self.longest_streak
    }

    pub fn active_days(&self) -> u32 {
        self.active_days
    }

    pub fn source(&self) -> ActivitySourceKind {
        self.source
    }

    pub fn is_empty(&self) -> bool {
        self.contributions.is_empty()
    }

    pub fn into_contributions(self) -> Vec<Contribution> {
        self.contributions
    }
}
