use crate::models::{
    DashboardEntry, DashboardResponse, GaugeBand, GaugeReading, SeriesPoint, UserSummary, TIME_POINTS,
    UPDATE_POINTS,
};
use chrono::NaiveDate;

pub const GAUGE_MIN: i64 = -100;
pub const GAUGE_MAX: i64 = 100;

pub fn build_dashboard(today: NaiveDate, summaries: Vec<UserSummary>) -> DashboardResponse {
    let entries = summaries
        .into_iter()
        .enumerate()
        .map(|(index, user)| DashboardEntry {
            rank: index + 1,
            gauge: gauge_reading(&user),
            series: series(&user),
            user,
        })
        .collect();

    DashboardResponse {
        date: today.to_string(),
        entries,
    }
}

/// Today's combined score, clamped to the gauge range. Zero without a today marker.
pub fn gauge_value(user: &UserSummary) -> i64 {
    let Some(today) = &user.today else {
        return 0;
    };
    let points = |category: &str| today.points.get(category).copied().unwrap_or(0);
    points(UPDATE_POINTS)
        .saturating_add(points(TIME_POINTS))
        .clamp(GAUGE_MIN, GAUGE_MAX)
}

pub fn gauge_band(value: i64) -> GaugeBand {
    if value < -20 {
        GaugeBand::Low
    } else if value < 30 {
        GaugeBand::Fair
    } else {
        GaugeBand::Good
    }
}

pub fn gauge_reading(user: &UserSummary) -> GaugeReading {
    let value = gauge_value(user);
    GaugeReading {
        value,
        band: gauge_band(value),
    }
}

/// One point per recorded day, oldest first.
pub fn series(user: &UserSummary) -> Vec<SeriesPoint> {
    user.days
        .iter()
        .map(|(date, points)| SeriesPoint {
            date: date.clone(),
            time_points: points.get(TIME_POINTS).copied().unwrap_or(0),
            update_points: points.get(UPDATE_POINTS).copied().unwrap_or(0),
        })
        .collect()
}
