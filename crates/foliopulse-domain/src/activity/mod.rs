mod aggregation;
mod calendar;
mod provider;
mod streak;
mod summary;
mod value_objects;

#[cfg(test)]
mod value_objects_test;

pub use aggregation::{aggregate_events, normalize_days};
pub use calendar::{bucket_by_week, fill_missing_days, DAYS_PER_WEEK};
pub use provider::{ContributionCalendar, ContributionProvider, PublicEvent};
pub use streak::{compute_streaks, StreakComputation};
pub use summary::ActivitySummary;
pub use value_objects::{ActivitySourceKind, Contribution, ContributionLevel, WeekBucket};
