use chrono::NaiveDate;
use std::collections::BTreeMap;

use super::provider::PublicEvent;
use super::value_objects::Contribution;

/// Group events by the UTC calendar day of `created_at` and count them.
///
/// Events without a timestamp are ignored. The result is sorted ascending
/// and holds one entry per date.
pub fn aggregate_events<'a, I>(events: I) -> Vec<Contribution>
where
    I: IntoIterator<Item = &'a PublicEvent>,
{
    let mut per_day: BTreeMap<NaiveDate, u32> = BTreeMap::new();
    for created_at in events.into_iter().filter_map(|event| event.created_at) {
        let count = per_day.entry(created_at.date_naive()).or_insert(0);
        *count = count.saturating_add(1);
    }

    per_day
        .into_iter()
        .map(|(date, count)| Contribution::new(date, count))
        .collect()
}

/// Sort days ascending and merge repeated dates by summing their counts.
pub fn normalize_days(days: Vec<Contribution>) -> Vec<Contribution> {
    let mut per_day: BTreeMap<NaiveDate, u32> = BTreeMap::new();
    for day in days {
        let count = per_day.entry(day.date).or_insert(0);
        *count = count.saturating_add(day.count);
    }

    per_day
        .into_iter()
        .map(|(date, count)| Contribution::new(date, count))
        .collect()
}

pub(crate) fn sum_counts(days: &[Contribution]) -> u32 {
    days.iter()
        .fold(0u32, |acc, day| acc.saturating_add(day.count))
}
