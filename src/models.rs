use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

pub const UPDATE_POINTS: &str = "update_points";
pub const TIME_POINTS: &str = "time_points";

/// Integer score per category for a single day.
pub type DayPoints = BTreeMap<String, i64>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSummary {
    pub name: String,
    pub days: BTreeMap<String, DayPoints>,
    /// Running total per category; only non-negative daily scores count.
    pub totals: BTreeMap<String, i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub today: Option<TodayMarker>,
}

impl UserSummary {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            days: BTreeMap::new(),
            totals: BTreeMap::new(),
            today: None,
        }
    }

    pub fn total(&self, category: &str) -> i64 {
        self.totals.get(category).copied().unwrap_or(0)
    }

    /// Ranking key: update points plus time points.
    pub fn combined_score(&self) -> i64 {
        self.total(UPDATE_POINTS).saturating_add(self.total(TIME_POINTS))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodayMarker {
    pub day: String,
    pub points: DayPoints,
    /// The untouched `{sum, reasons}` records of that day, keyed by category.
    pub reasons: Map<String, Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GaugeBand {
    Low,
    Fair,
    Good,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaugeReading {
    pub value: i64,
    pub band: GaugeBand,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub date: String,
    pub time_points: i64,
    pub update_points: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardEntry {
    pub rank: usize,
    pub user: UserSummary,
    pub gauge: GaugeReading,
    pub series: Vec<SeriesPoint>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardResponse {
    pub date: String,
    pub entries: Vec<DashboardEntry>,
}
