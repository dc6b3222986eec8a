use foliopulse_domain::ActivitySourceKind;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionDayDto {
    pub date: String, // YYYY-MM-DD
    pub count: u32,
    pub level: u8, // 0-4 heatmap intensity
    pub is_today: bool,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekDto {
    pub days: Vec<ContributionDayDto>,
    pub total: u32,
}

/// Render-ready activity section for one profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityViewDto {
    pub username: String,
    pub profile_url: String,
    pub total_contributions: u32,
    pub streak: u32,
    pub longest_streak: u32,
    pub active_days: u32,
    pub source: ActivitySourceKind,
    /// Public events only reach back a limited window
    pub undercounted: bool,
    pub headline: String,
    pub weeks: Vec<WeekDto>,
}
