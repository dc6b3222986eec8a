use chrono::NaiveDate;

use super::value_objects::Contribution;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StreakComputation {
    pub current_streak: u32,
    pub longest_streak: u32,
    pub active_days: u32,
}

/// Derive streak statistics from days sorted ascending with unique dates.
///
/// The current streak starts at the most recent day not after `today` and
/// walks backward while the count is non-zero and the days are contiguous.
/// Days after `today` (clock skew) are skipped. Today does not have to be
/// present: a calendar that has not indexed today yet still reports the
/// streak ending yesterday.
pub fn compute_streaks(days: &[Contribution], today: NaiveDate) -> StreakComputation {
    let mut current_streak = 0u32;
    let mut expected: Option<NaiveDate> = None;

    for day in days.iter().rev().skip_while(|day| day.date > today) {
        if !day.is_active() {
            break;
        }
        if expected.is_some_and(|date| date != day.date) {
            break;
        }
        current_streak += 1;
        expected = day.date.pred_opt();
    }

    let mut longest_streak = 0u32;
    let mut active_days = 0u32;
    let mut run = 0u32;
    let mut last_active: Option<NaiveDate> = None;

    for day in days.iter().take_while(|day| day.date <= today) {
        if !day.is_active() {
            run = 0;
            last_active = None;
            continue;
        }

        run = match last_active {
            Some(prev) if prev.succ_opt() == Some(day.date) => run + 1,
            _ => 1,
        };
        longest_streak = longest_streak.max(run);
        active_days += 1;
        last_active = Some(day.date);
    }

    StreakComputation {
        current_streak,
        longest_streak,
        active_days,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn days(entries: &[(&str, u32)]) -> Vec<Contribution> {
        entries
            .iter()
            .map(|(d, count)| Contribution::new(date(d), *count))
            .collect()
    }

    #[test]
    fn test_streak_stops_at_zero_day() {
        let data = days(&[("2024-01-01", 0), ("2024-01-02", 3), ("2024-01-03", 2)]);

        let streak = compute_streaks(&data, date("2024-01-03"));

        assert_eq!(streak.current_streak, 2);
        assert_eq!(streak.longest_streak, 2);
        assert_eq!(streak.active_days, 2);
    }

    #[test]
    fn test_all_zero_days_has_no_streak() {
        let data = days(&[("2024-01-01", 0), ("2024-01-02", 0), ("2024-01-03", 0)]);

        let streak = compute_streaks(&data, date("2024-01-03"));

        assert_eq!(streak, StreakComputation::default());
    }

    #[test]
    fn test_today_zero_breaks_streak() {
        let data = days(&[("2024-01-01", 4), ("2024-01-02", 3), ("2024-01-03", 0)]);

        let streak = compute_streaks(&data, date("2024-01-03"));

        assert_eq!(streak.current_streak, 0);
        assert_eq!(streak.longest_streak, 2);
    }

    #[test]
    fn test_future_dated_days_are_skipped() {
        let data = days(&[
            ("2024-01-01", 1),
            ("2024-01-02", 3),
            ("2024-01-03", 2),
            ("2024-01-04", 0),
            ("2024-01-05", 7),
        ]);

        let streak = compute_streaks(&data, date("2024-01-03"));

        assert_eq!(streak.current_streak, 3);
        assert_eq!(streak.longest_streak, 3);
        assert_eq!(streak.active_days, 3);
    }

    #[test]
    fn test_today_missing_counts_from_latest_day() {
        let data = days(&[("2024-01-01", 1), ("2024-01-02", 5)]);

        let streak = compute_streaks(&data, date("2024-01-03"));

        assert_eq!(streak.current_streak, 2);
    }

    #[test]
    fn test_missing_day_stops_streak() {
        let data = days(&[("2024-01-01", 1), ("2024-01-02", 2), ("2024-01-04", 3)]);

        let streak = compute_streaks(&data, date("2024-01-04"));

        assert_eq!(streak.current_streak, 1);
        assert_eq!(streak.longest_streak, 2);
        assert_eq!(streak.active_days, 3);
    }

    #[test]
    fn test_empty_days() {
        let streak = compute_streaks(&[], date("2024-01-04"));
        assert_eq!(streak, StreakComputation::default());
    }

    #[test]
    fn test_longest_streak_across_month_boundary() {
        let data = days(&[
            ("2024-01-30", 1),
            ("2024-01-31", 1),
            ("2024-02-01", 1),
            ("2024-02-02", 0),
            ("2024-02-03", 1),
        ]);

        let streak = compute_streaks(&data, date("2024-02-03"));

        assert_eq!(streak.current_streak, 1);
        assert_eq!(streak.longest_streak, 3);
        assert_eq!(streak.active_days, 4);
    }
}
