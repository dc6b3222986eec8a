#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::super::value_objects::*;

    #[test]
    fn test_contribution_level_thresholds() {
        assert_eq!(ContributionLevel::from_count(0), ContributionLevel::None);
        assert_eq!(ContributionLevel::from_count(1), ContributionLevel::Low);
        assert_eq!(ContributionLevel::from_count(2), ContributionLevel::Low);
        assert_eq!(ContributionLevel::from_count(3), ContributionLevel::Medium);
        assert_eq!(ContributionLevel::from_count(4), ContributionLevel::Medium);
        assert_eq!(ContributionLevel::from_count(5), ContributionLevel::High);
        assert_eq!(ContributionLevel::from_count(6), ContributionLevel::High);
        assert_eq!(ContributionLevel::from_count(7), ContributionLevel::Max);
        assert_eq!(ContributionLevel::from_count(250), ContributionLevel::Max);
    }

    #[test]
    fn test_contribution_level_numbers() {
        assert_eq!(ContributionLevel::None.as_u8(), 0);
        assert_eq!(ContributionLevel::Max.as_u8(), 4);
    }

    #[test]
    fn test_contribution_deserializes_from_iso_date() {
        let day: Contribution =
            serde_json::from_str(r#"{"date":"2024-03-09","count":4}"#).unwrap();

        assert_eq!(day.date, NaiveDate::from_ymd_opt(2024, 3, 9).unwrap());
        assert_eq!(day.count, 4);
        assert!(day.is_active());
    }

    #[test]
    fn test_week_bucket_total() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let week = WeekBucket {
            days: start
                .iter_days()
                .take(3)
                .map(|d| Contribution::new(d, 2))
                .collect(),
        };

        assert_eq!(week.total(), 6);
    }

    #[test]
    fn test_only_public_events_are_undercounted() {
        assert!(ActivitySourceKind::PublicEvents.is_undercounted());
        assert!(!ActivitySourceKind::Calendar.is_undercounted());
    }
}
