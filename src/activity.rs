//! Reduces an issue-tracker export (time entries plus issue journals) to the
//! per-user, per-day activity the reward engine scores.

use crate::engine::{ActivityLog, IssueMeta};
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Markers of a carefully written comment: links, list bullets, emphasis, politeness.
const FORMATTING_MARKERS: [&str; 4] = ["http", "+", "*", "please"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeEntry {
    pub user_id: u64,
    pub user_name: String,
    pub issue_id: u64,
    pub spent_on: NaiveDate,
    pub hours: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalDetail {
    pub property: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Journal {
    pub user_id: u64,
    pub created_on: NaiveDate,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub details: Vec<JournalDetail>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueRecord {
    pub id: u64,
    #[serde(default)]
    pub done_ratio: u8,
    pub tracker: u32,
    #[serde(default)]
    pub journals: Vec<Journal>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrackerExport {
    #[serde(default)]
    pub time_entries: Vec<TimeEntry>,
    #[serde(default)]
    pub issues: Vec<IssueRecord>,
}

pub fn lookback_start(today: NaiveDate, days: u32) -> NaiveDate {
    today - Duration::days(i64::from(days))
}

/// Builds the activity log from time entries spent on or after `since`.
///
/// Journals only count on days their author also logged time.
pub fn analyze(export: &TrackerExport, since: NaiveDate) -> ActivityLog {
    let mut log = ActivityLog::default();
    let mut watched = BTreeSet::new();

    for entry in export.time_entries.iter().filter(|entry| entry.spent_on >= since) {
        let user = entry.user_id.to_string();
        log.user_names
            .entry(user.clone())
            .or_insert_with(|| entry.user_name.clone());

        let day = log
            .entries
            .entry(user)
            .or_default()
            .entry(entry.spent_on)
            .or_default();
        day.total_hours += entry.hours;
        day.issues.entry(entry.issue_id).or_default().hours += entry.hours;
        watched.insert(entry.issue_id);
    }

    for issue in export.issues.iter().filter(|issue| watched.contains(&issue.id)) {
        log.issues.insert(
            issue.id,
            IssueMeta {
                done_ratio: issue.done_ratio,
                tracker: issue.tracker,
            },
        );

        for journal in &issue.journals {
            let Some(day) = log
                .entries
                .get_mut(&journal.user_id.to_string())
                .and_then(|days| days.get_mut(&journal.created_on))
            else {
                continue;
            };

            let activity = day.issues.entry(issue.id).or_default();
            activity.updates += 1;

            if let Some(notes) = &journal.notes {
                activity.comment_length += notes.chars().count() as u64;
                if is_formatted(notes) {
                    activity.comment_extra += 1;
                }
            }

            activity.attachments += journal
                .details
                .iter()
                .filter(|detail| detail.property == "attachment")
                .count() as u32;
        }
    }

    log
}

fn is_formatted(notes: &str) -> bool {
    let notes = notes.to_lowercase();
    FORMATTING_MARKERS.iter().any(|marker| notes.contains(marker))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{calculate_points, RewardConfig};

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, day).unwrap()
    }

    fn entry(user_id: u64, issue_id: u64, day: u32, hours: f64) -> TimeEntry {
        TimeEntry {
            user_id,
            user_name: format!("User {user_id}"),
            issue_id,
            spent_on: date(day),
            hours,
        }
    }

    fn journal(user_id: u64, day: u32, notes: Option<&str>, details: &[&str]) -> Journal {
        Journal {
            user_id,
            created_on: date(day),
            notes: notes.map(str::to_string),
            details: details
                .iter()
                .map(|property| JournalDetail {
                    property: property.to_string(),
                })
                .collect(),
        }
    }

    fn issue(id: u64, journals: Vec<Journal>) -> IssueRecord {
        IssueRecord {
            id,
            done_ratio: 30,
            tracker: 2,
            journals,
        }
    }

    #[test]
    fn hours_accumulate_per_day_and_issue() {
        let export = TrackerExport {
            time_entries: vec![entry(1, 10, 9, 2.5), entry(1, 10, 9, 1.5), entry(1, 11, 9, 3.0)],
            issues: Vec::new(),
        };

        let log = analyze(&export, date(1));
        let day = &log.entries["1"][&date(9)];
        assert_eq!(day.total_hours, 7.0);
        assert_eq!(day.issues[&10].hours, 4.0);
        assert_eq!(day.issues[&11].hours, 3.0);
        assert_eq!(log.user_names["1"], "User 1");
    }

    #[test]
    fn entries_before_lookback_are_skipped() {
        let export = TrackerExport {
            time_entries: vec![entry(1, 10, 2, 8.0), entry(2, 11, 9, 1.0)],
            issues: vec![issue(10, Vec::new()), issue(11, Vec::new())],
        };

        let log = analyze(&export, lookback_start(date(10), 7));
        assert!(!log.entries.contains_key("1"));
        assert!(!log.user_names.contains_key("1"));
        assert!(!log.issues.contains_key(&10));
        assert!(log.issues.contains_key(&11));
    }

    #[test]
    fn journals_count_only_on_days_with_logged_time() {
        let export = TrackerExport {
            time_entries: vec![entry(1, 10, 9, 4.0)],
            issues: vec![issue(
                10,
                vec![
                    journal(1, 9, Some("Fixed, see https://example.org"), &["attachment", "status_id"]),
                    journal(1, 9, Some("done"), &["attachment"]),
                    journal(1, 9, None, &[]),
                    journal(1, 10, Some("please review"), &[]),
                    journal(2, 9, Some("*bold*"), &[]),
                ],
            )],
        };

        let log = analyze(&export, date(1));
        let activity = &log.entries["1"][&date(9)].issues[&10];
        assert_eq!(activity.updates, 3);
        assert_eq!(activity.comment_length, 30 + 4);
        assert_eq!(activity.comment_extra, 1);
        assert_eq!(activity.attachments, 2);
        assert!(!log.entries.contains_key("2"));
        assert_eq!(log.entries["1"].len(), 1);
    }

    #[test]
    fn journal_on_issue_without_time_adds_it_to_the_day() {
        let export = TrackerExport {
            time_entries: vec![entry(1, 10, 9, 4.0), entry(2, 20, 9, 1.0)],
            issues: vec![issue(10, Vec::new()), issue(20, vec![journal(1, 9, Some("PLEASE check"), &[])])],
        };

        let log = analyze(&export, date(1));
        let activity = &log.entries["1"][&date(9)].issues[&20];
        assert_eq!(activity.hours, 0.0);
        assert_eq!(activity.comment_extra, 1);
        assert_eq!(log.issues[&20].done_ratio, 30);
    }

    #[test]
    fn analysed_export_is_scored() {
        let export: TrackerExport = serde_json::from_str(
            r#"{
                "time_entries": [
                    {"user_id": 3, "user_name": "John Doe", "issue_id": 42, "spent_on": "2026-03-09", "hours": 8.0}
                ],
                "issues": [
                    {"id": 42, "done_ratio": 50, "tracker": 2, "journals": [
                        {"user_id": 3, "created_on": "2026-03-09", "notes": "Uploaded the logs", "details": [{"property": "attachment"}]}
                    ]}
                ]
            }"#,
        )
        .unwrap();

        let payload = calculate_points(&analyze(&export, date(1)), &RewardConfig::default());
        let update = &payload.points["3"]["2026-03-09"].update_points;
        assert!(update.reasons.contains(&"Reward for attaching files".to_string()));
        assert_eq!(payload.user_names["3"], "John Doe");
    }
}
