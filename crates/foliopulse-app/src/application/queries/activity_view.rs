use chrono::NaiveDate;

use crate::application::dtos::{ActivityViewDto, ContributionDayDto, WeekDto};
use foliopulse_domain::activity::{bucket_by_week, fill_missing_days};
use foliopulse_domain::{ActivitySummary, Contribution, ContributionLevel};

/// Roughly one year of heatmap columns
pub const DISPLAY_WEEKS: usize = 52;

const GITHUB_PROFILE_BASE_URL: &str = "https://github.com";

/// Turns an [`ActivitySummary`] into the heatmap view shown on the profile page.
#[derive(Debug, Clone)]
pub struct ActivityViewBuilder {
    display_weeks: usize,
    profile_base_url: String,
}

impl Default for ActivityViewBuilder {
    fn default() -> Self {
        Self {
            display_weeks: DISPLAY_WEEKS,
            profile_base_url: GITHUB_PROFILE_BASE_URL.to_string(),
        }
    }
}

impl ActivityViewBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_display_weeks(mut self, weeks: usize) -> Self {
        self.display_weeks = weeks.max(1);
        self
    }

    pub fn with_profile_base_url(mut self, url: impl Into<String>) -> Self {
        self.profile_base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn build(
        &self,
        summary: &ActivitySummary,
        username: &str,
        today: NaiveDate,
    ) -> ActivityViewDto {
        let weeks = self.build_weeks(summary.contributions(), today);

        ActivityViewDto {
            username: username.to_string(),
            profile_url: format!("{}/{}", self.profile_base_url, username),
            total_contributions: summary.total_contributions(),
            streak: summary.streak(),
            longest_streak: summary.longest_streak(),
            active_days: summary.active_days(),
            source: summary.source(),
            undercounted: summary.source().is_undercounted(),
            headline: headline(summary.total_contributions(), summary.streak()),
            weeks,
        }
    }

    fn build_weeks(&self, contributions: &[Contribution], today: NaiveDate) -> Vec<WeekDto> {
        let (Some(first), Some(last)) = (contributions.first(), contributions.last()) else {
            return Vec::new();
        };

        // Run the grid through today so quiet recent days still render.
        let days = fill_missing_days(contributions, first.date, last.date.max(today));
        let mut weeks = bucket_by_week(&days);
        if weeks.len() > self.display_weeks {
            weeks.drain(..weeks.len() - self.display_weeks);
        }

        weeks
            .into_iter()
            .map(|week| WeekDto {
                total: week.total(),
                days: week
                    .days
                    .iter()
                    .map(|day| day_dto(day, today))
                    .collect(),
            })
            .collect()
    }
}

fn day_dto(day: &Contribution, today: NaiveDate) -> ContributionDayDto {
    let date = day.date.format("%Y-%m-%d").to_string();
    let title = match day.count {
        1 => format!("{}: 1 contribution", date),
        n => format!("{}: {} contributions", date, n),
    };

    ContributionDayDto {
        date,
        count: day.count,
        level: ContributionLevel::from_count(day.count).as_u8(),
        is_today: day.date == today,
        title,
    }
}

/// `"<total> contributions in the last year"`, plus `" • <n> day streak"` while a streak is running
pub fn headline(total_contributions: u32, streak: u32) -> String {
    let mut text = format!("{} contributions in the last year", total_contributions);
    if streak > 0 {
        text.push_str(&format!(" • {} day streak", streak));
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use foliopulse_domain::{ActivitySourceKind, ContributionCalendar, PublicEvent};

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn calendar_summary(days: Vec<(&str, u32)>, total: u32, today: NaiveDate) -> ActivitySummary {
        let calendar = ContributionCalendar {
            total_contributions: total,
            days: days
                .into_iter()
                .map(|(d, count)| Contribution::new(date(d), count))
                .collect(),
        };
        ActivitySummary::from_calendar(calendar, today)
    }

    #[test]
    fn test_headline() {
        assert_eq!(headline(0, 0), "0 contributions in the last year");
        assert_eq!(
            headline(5, 2),
            "5 contributions in the last year • 2 day streak"
        );
    }

    #[test]
    fn test_build_view_from_calendar() {
        let today = date("2024-01-03");
        let summary = calendar_summary(
            vec![("2024-01-01", 0), ("2024-01-02", 3), ("2024-01-03", 2)],
            5,
            today,
        );

        let view = ActivityViewBuilder::new().build(&summary, "octocat", today);

        assert_eq!(view.username, "octocat");
        assert_eq!(view.profile_url, "https://github.com/octocat");
        assert_eq!(view.total_contributions, 5);
        assert_eq!(view.streak, 2);
        assert_eq!(view.source, ActivitySourceKind::Calendar);
        assert!(!view.undercounted);
        assert_eq!(view.headline, "5 contributions in the last year • 2 day streak");

        assert_eq!(view.weeks.len(), 1);
        let days = &view.weeks[0].days;
        assert_eq!(days.len(), 3);
        assert_eq!(view.weeks[0].total, 5);
        assert_eq!(days[0].level, 0);
        assert_eq!(days[1].level, 2);
        assert_eq!(days[1].title, "2024-01-02: 3 contributions");
        assert!(days[2].is_today);
        assert!(!days[1].is_today);
    }

    #[test]
    fn test_gaps_are_filled_through_today() {
        let today = date("2024-01-10");
        let summary = calendar_summary(vec![("2024-01-01", 1), ("2024-01-04", 7)], 8, today);

        let view = ActivityViewBuilder::new().build(&summary, "octocat", today);

        let days: Vec<&ContributionDayDto> = view.weeks.iter().flat_map(|w| &w.days).collect();
        assert_eq!(days.len(), 10);
        assert_eq!(days[0].title, "2024-01-01: 1 contribution");
        assert_eq!(days[1].count, 0);
        assert_eq!(days[3].level, 4);
        assert_eq!(days[9].date, "2024-01-10");
        assert!(days[9].is_today);
        assert_eq!(view.weeks.len(), 2);
        assert_eq!(view.weeks[1].days.len(), 3);
    }

    #[test]
    fn test_only_most_recent_weeks_are_kept() {
        let today = date("2024-03-31");
        let summary = calendar_summary(vec![("2024-01-01", 1), ("2024-03-31", 1)], 2, today);

        let view = ActivityViewBuilder::new()
            .with_display_weeks(4)
            .build(&summary, "octocat", today);

        assert_eq!(view.weeks.len(), 4);
        let last_week = view.weeks.last().unwrap();
        assert_eq!(last_week.days.last().unwrap().date, "2024-03-31");
    }

    #[test]
    fn test_empty_summary_has_no_weeks() {
        let summary = ActivitySummary::empty(ActivitySourceKind::PublicEvents);

        let view = ActivityViewBuilder::new()
            .with_profile_base_url("https://git.example.com/")
            .build(&summary, "octocat", date("2024-01-03"));

        assert!(view.weeks.is_empty());
        assert!(view.undercounted);
        assert_eq!(view.profile_url, "https://git.example.com/octocat");
        assert_eq!(view.headline, "0 contributions in the last year");
    }

    #[test]
    fn test_events_view_is_flagged_undercounted() {
        let event = PublicEvent {
            event_type: Some("PushEvent".to_string()),
            created_at: date("2024-01-03").and_hms_opt(8, 0, 0).map(|dt| dt.and_utc()),
        };
        let summary = ActivitySummary::from_events(&[event], date("2024-01-03"));

        let view = ActivityViewBuilder::new().build(&summary, "octocat", date("2024-01-03"));

        assert!(view.undercounted);
        assert_eq!(view.headline, "1 contributions in the last year • 1 day streak");
    }
}
