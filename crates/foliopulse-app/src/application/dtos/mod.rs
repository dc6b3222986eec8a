mod activity_dto;

pub use activity_dto::{ActivityViewDto, ContributionDayDto, WeekDto};
