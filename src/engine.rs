//! Reward engine: scores logged time and issue updates per user and day,
//! producing the document the dashboard ranks.

use crate::scoring::date_key;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IssueActivity {
    pub hours: f64,
    pub updates: u32,
    pub comment_length: u64,
    pub comment_extra: u32,
    pub attachments: u32,
}

/// Everything a user did on one calendar day.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DayActivity {
    pub total_hours: f64,
    #[serde(default)]
    pub issues: BTreeMap<u64, IssueActivity>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueMeta {
    #[serde(default)]
    pub done_ratio: u8,
    pub tracker: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActivityLog {
    pub user_names: BTreeMap<String, String>,
    pub entries: BTreeMap<String, BTreeMap<NaiveDate, DayActivity>>,
    #[serde(default)]
    pub issues: BTreeMap<u64, IssueMeta>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeWeights {
    pub default: f64,
    pub for_update: f64,
    pub for_update_on_weekday: f64,
    pub for_at_least_3: f64,
    pub for_max_8: f64,
    pub for_distributed: f64,
}

impl Default for TimeWeights {
    fn default() -> Self {
        Self {
            default: -1.0,
            for_update: 0.8,
            for_update_on_weekday: 0.2,
            for_at_least_3: 0.3,
            for_max_8: 0.5,
            for_distributed: 0.2,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateWeights {
    pub default: f64,
    pub for_any_comment: f64,
    pub for_done_ratio: f64,
    pub for_attachment: f64,
    pub for_nice_comments: f64,
    pub for_story_teller: f64,
}

impl Default for UpdateWeights {
    fn default() -> Self {
        Self {
            default: -1.0,
            for_any_comment: 0.6,
            for_done_ratio: 0.4,
            for_attachment: 0.5,
            for_nice_comments: 0.3,
            for_story_teller: 0.2,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RewardConfig {
    pub time: TimeWeights,
    pub update: UpdateWeights,
    /// Only issues in these trackers count towards the done-ratio rule.
    pub trackers: Vec<u32>,
}

impl Default for RewardConfig {
    fn default() -> Self {
        Self {
            time: TimeWeights::default(),
            update: UpdateWeights::default(),
            trackers: (1..=8).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointRecord {
    pub sum: f64,
    pub reasons: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayRecord {
    pub time_points: PointRecord,
    pub update_points: PointRecord,
}

impl DayRecord {
    fn absent(config: &RewardConfig) -> Self {
        let absent = |sum| PointRecord {
            sum,
            reasons: vec!["Absent".to_string()],
        };
        Self {
            time_points: absent(config.time.default),
            update_points: absent(config.update.default),
        }
    }
}

/// Serializes to the `{user_names, points}` document read by the dashboard.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoringPayload {
    pub user_names: BTreeMap<String, String>,
    pub points: BTreeMap<String, BTreeMap<String, DayRecord>>,
}

pub fn calculate_points(log: &ActivityLog, config: &RewardConfig) -> ScoringPayload {
    // Weekdays on which anybody logged something; everyone is scored on all of them.
    let scored_days: BTreeSet<NaiveDate> = log
        .entries
        .values()
        .flat_map(|days| days.keys())
        .filter(|day| is_weekday(**day))
        .copied()
        .collect();

    let mut points = BTreeMap::new();
    for (user, days) in &log.entries {
        let mut user_points: BTreeMap<String, DayRecord> = scored_days
            .iter()
            .map(|day| (date_key(*day), DayRecord::absent(config)))
            .collect();

        for (day, activity) in days {
            if let Some(record) = user_points.get_mut(&date_key(*day)) {
                record.time_points = time_points(activity, is_weekday(*day), &config.time);
                record.update_points = update_points(activity, &log.issues, config);
            }
        }

        points.insert(user.clone(), user_points);
    }

    ScoringPayload {
        user_names: log.user_names.clone(),
        points,
    }
}

fn time_points(activity: &DayActivity, weekday: bool, weights: &TimeWeights) -> PointRecord {
    let hours = activity.total_hours;
    let mut sum = weights.default;
    let mut reasons = Vec::new();

    if hours > 0.0 {
        sum += weights.for_update;
    } else if weights.for_update > 0.0 {
        reasons.push("Penalty for no logged time");
    }

    if weekday {
        sum += weights.for_update_on_weekday;
    } else if weights.for_update_on_weekday > 0.0 {
        reasons.push("Penalty for logging on weekend");
    }

    let missing = 3.0 - hours.min(3.0);
    sum += weights.for_at_least_3 / (1.0 + missing);
    if hours < 3.0 && weights.for_at_least_3 > 0.0 {
        reasons.push("Penalty for logging less than 3 hours");
    }

    let overtime = (hours - 8.0).max(0.0);
    sum += weights.for_max_8 / (1.0 + overtime);
    if hours > 8.0 && weights.for_max_8 > 0.0 {
        reasons.push("Penalty for logging more than 8 hours");
    }

    let with_hours = activity.issues.values().filter(|issue| issue.hours > 0.0).count();
    sum += weights.for_distributed * (1.0 - 1.0 / (1.0 + with_hours as f64));
    if with_hours > 1 && weights.for_distributed > 0.0 {
        reasons.push("Reward for logging time on multiple issues");
    }

    record(sum, reasons)
}

fn update_points(
    activity: &DayActivity,
    issues: &BTreeMap<u64, IssueMeta>,
    config: &RewardConfig,
) -> PointRecord {
    let weights = &config.update;
    let mut sum = weights.default;
    let mut reasons = Vec::new();

    let comment_sum: u64 = activity.issues.values().map(|issue| issue.comment_length).sum();
    if comment_sum > 0 {
        sum += weights.for_any_comment;
    } else if weights.for_any_comment > 0.0 {
        reasons.push("Penalty for not commenting on issues");
    }

    // One issue with logged time but no progress is tolerated.
    let without_done_ratio = activity
        .issues
        .iter()
        .filter(|(id, issue)| {
            issues.get(*id).is_some_and(|meta| {
                config.trackers.contains(&meta.tracker) && meta.done_ratio == 0 && issue.hours > 0.0
            })
        })
        .count()
        .saturating_sub(1);
    sum += weights.for_done_ratio / (1.0 + without_done_ratio as f64);
    if without_done_ratio > 0 {
        reasons.push("Penalty for not updating done ratio on issue with logged time");
    }

    let known = || activity.issues.iter().filter(|(id, _)| issues.contains_key(*id));

    let attachments: u32 = known().map(|(_, issue)| issue.attachments).sum();
    sum += weights.for_attachment * (1.0 - 1.0 / (1.0 + f64::from(attachments)));
    if attachments > 0 && weights.for_attachment > 0.0 {
        reasons.push("Reward for attaching files");
    }

    let formatted: u32 = known().map(|(_, issue)| issue.comment_extra).sum();
    sum += weights.for_nice_comments * (1.0 - 1.0 / (1.0 + f64::from(formatted) / 2.0));
    if formatted > 0 && weights.for_nice_comments > 0.0 {
        reasons.push("Reward for nicely formatted comments");
    }

    let comment_extra = comment_sum.saturating_sub(150);
    sum += weights.for_story_teller * (1.0 - 1.0 / (1.0 + comment_extra as f64 / 50.0));
    if comment_extra > 0 && weights.for_story_teller > 0.0 {
        reasons.push("Reward for being a story teller");
    }

    record(sum, reasons)
}

fn record(sum: f64, reasons: Vec<&str>) -> PointRecord {
    PointRecord {
        sum,
        reasons: reasons.into_iter().map(str::to_string).collect(),
    }
}

fn is_weekday(day: NaiveDate) -> bool {
    day.weekday().num_days_from_monday() < 5
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TIME_POINTS, UPDATE_POINTS};
    use crate::scoring::aggregate_at;

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 9).unwrap()
    }

    fn saturday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 14).unwrap()
    }

    fn sample_log() -> ActivityLog {
        let worked = DayActivity {
            total_hours: 8.0,
            issues: BTreeMap::from([(
                42,
                IssueActivity {
                    hours: 8.0,
                    updates: 2,
                    comment_length: 200,
                    comment_extra: 0,
                    attachments: 1,
                },
            )]),
        };
        let weekend = DayActivity {
            total_hours: 2.0,
            issues: BTreeMap::new(),
        };

        ActivityLog {
            user_names: BTreeMap::from([
                ("1".to_string(), "John Doe".to_string()),
                ("2".to_string(), "Jane Roe".to_string()),
            ]),
            entries: BTreeMap::from([
                ("1".to_string(), BTreeMap::from([(monday(), worked)])),
                ("2".to_string(), BTreeMap::from([(saturday(), weekend)])),
            ]),
            issues: BTreeMap::from([(
                42,
                IssueMeta {
                    done_ratio: 50,
                    tracker: 2,
                },
            )]),
        }
    }

    fn approx(actual: f64, expected: f64) {
        assert!((actual - expected).abs() < 1e-9, "{actual} != {expected}");
    }

    #[test]
    fn full_day_earns_time_and_update_points() {
        let payload = calculate_points(&sample_log(), &RewardConfig::default());
        let day = &payload.points["1"]["2026-03-09"];

        approx(day.time_points.sum, 0.9);
        assert!(day.time_points.reasons.is_empty());

        approx(day.update_points.sum, 0.35);
        assert_eq!(
            day.update_points.reasons,
            ["Reward for attaching files", "Reward for being a story teller"]
        );
    }

    #[test]
    fn weekends_are_not_scored_and_missing_weekdays_are_absent() {
        let payload = calculate_points(&sample_log(), &RewardConfig::default());
        let jane = &payload.points["2"];

        assert_eq!(jane.len(), 1);
        assert!(!jane.contains_key("2026-03-14"));
        let absent = &jane["2026-03-09"];
        approx(absent.time_points.sum, -1.0);
        assert_eq!(absent.update_points.reasons, ["Absent"]);
    }

    #[test]
    fn short_day_without_comments_is_penalised() {
        let mut log = sample_log();
        let day = log.entries.get_mut("1").unwrap().get_mut(&monday()).unwrap();
        day.total_hours = 1.0;
        day.issues.get_mut(&42).unwrap().comment_length = 0;

        let payload = calculate_points(&log, &RewardConfig::default());
        let record = &payload.points["1"]["2026-03-09"];
        assert!(record
            .time_points
            .reasons
            .contains(&"Penalty for logging less than 3 hours".to_string()));
        assert!(record
            .update_points
            .reasons
            .contains(&"Penalty for not commenting on issues".to_string()));
    }

    #[test]
    fn second_issue_without_done_ratio_is_penalised() {
        let mut log = sample_log();
        log.issues.insert(
            1,
            IssueMeta {
                done_ratio: 0,
                tracker: 1,
            },
        );
        log.issues.insert(
            2,
            IssueMeta {
                done_ratio: 0,
                tracker: 3,
            },
        );
        let day = log.entries.get_mut("1").unwrap().get_mut(&monday()).unwrap();
        for id in [1, 2] {
            day.issues.insert(
                id,
                IssueActivity {
                    hours: 1.0,
                    ..IssueActivity::default()
                },
            );
        }

        let payload = calculate_points(&log, &RewardConfig::default());
        let update = &payload.points["1"]["2026-03-09"].update_points;
        assert!(update
            .reasons
            .contains(&"Penalty for not updating done ratio on issue with logged time".to_string()));
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let config: RewardConfig = serde_json::from_str(r#"{"trackers": [1], "time": {"for_max_8": 1.0}}"#).unwrap();
        assert_eq!(config.trackers, [1]);
        approx(config.time.for_max_8, 1.0);
        approx(config.time.for_update, 0.8);
        approx(config.update.for_any_comment, 0.6);
    }

    #[test]
    fn payload_feeds_the_leaderboard() {
        let payload = calculate_points(&sample_log(), &RewardConfig::default());
        let value = serde_json::to_value(&payload).unwrap();

        let board = aggregate_at(monday(), &value).unwrap();
        assert_eq!(board.len(), 2);
        assert_eq!(board[0].name, "John Doe");
        assert_eq!(board[0].total(TIME_POINTS), 90);
        assert_eq!(board[0].total(UPDATE_POINTS), 35);
        assert_eq!(board[1].days["2026-03-09"][TIME_POINTS], -100);
        assert_eq!(board[1].combined_score(), 0);
    }

    #[test]
    fn activity_log_reads_string_issue_ids() {
        let log: ActivityLog = serde_json::from_str(
            r#"{
                "user_names": {"1": "John Doe"},
                "entries": {"1": {"2026-03-09": {"total_hours": 4.5, "issues": {"42": {"hours": 4.5}}}}},
                "issues": {"42": {"done_ratio": 10, "tracker": 1}}
            }"#,
        )
        .unwrap();

        assert_eq!(log.entries["1"][&monday()].issues[&42].hours, 4.5);
        assert_eq!(log.issues[&42].done_ratio, 10);
    }
}
