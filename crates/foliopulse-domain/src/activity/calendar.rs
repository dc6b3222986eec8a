use chrono::NaiveDate;
use std::collections::HashMap;

use super::value_objects::{Contribution, WeekBucket};

pub const DAYS_PER_WEEK: usize = 7;

/// Slice days into consecutive groups of seven, keeping input order.
///
/// The last bucket holds the remainder. Gaps stay gaps: callers that need
/// one cell per calendar day run [`fill_missing_days`] first.
pub fn bucket_by_week(days: &[Contribution]) -> Vec<WeekBucket> {
    days.chunks(DAYS_PER_WEEK)
        .map(|chunk| WeekBucket {
            days: chunk.to_vec(),
        })
        .collect()
}

/// One entry per day in `start..=end`; days absent from `days` get a zero count.
pub fn fill_missing_days(
    days: &[Contribution],
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<Contribution> {
    let counts: HashMap<NaiveDate, u32> = days.iter().map(|day| (day.date, day.count)).collect();

    start
        .iter_days()
        .take_while(|date| *date <= end)
        .map(|date| Contribution::new(date, counts.get(&date).copied().unwrap_or(0)))
        .collect()
}
