use crate::clock::Clock;
use crate::errors::ValidationError;
use crate::models::{DayPoints, TodayMarker, UserSummary};
use chrono::NaiveDate;
use serde_json::{Map, Value};

/// Turns a raw scoring document into a leaderboard, reading the clock once.
pub fn aggregate(payload: &Value, clock: &dyn Clock) -> Result<Vec<UserSummary>, ValidationError> {
    aggregate_at(clock.today(), payload)
}

/// Builds one summary per entry of `user_names`, ranked by combined score.
///
/// Daily scores are `round(sum * 100)` and are kept as-is, negatives included.
/// Category totals only accumulate the non-negative part of each day. Users
/// with the same combined score keep their document order.
pub fn aggregate_at(today: NaiveDate, payload: &Value) -> Result<Vec<UserSummary>, ValidationError> {
    let root = payload.as_object().ok_or(ValidationError::PayloadNotObject)?;
    let user_names = section(root, "user_names")?;
    let points = section(root, "points")?;
    let today_key = date_key(today);

    let mut result = Vec::with_capacity(user_names.len());
    for (user, name) in user_names {
        let name = name
            .as_str()
            .ok_or_else(|| ValidationError::NameNotString { user: user.clone() })?;
        let mut row = UserSummary::new(name);

        match points.get(user) {
            None | Some(Value::Null) => {}
            Some(Value::Object(user_points)) => fill_days(&mut row, user, user_points, &today_key)?,
            Some(_) => return Err(ValidationError::UserPointsNotObject { user: user.clone() }),
        }

        result.push(row);
    }

    result.sort_by(|a, b| b.combined_score().cmp(&a.combined_score()));
    Ok(result)
}

fn fill_days(
    row: &mut UserSummary,
    user: &str,
    user_points: &Map<String, Value>,
    today_key: &str,
) -> Result<(), ValidationError> {
    for (day, categories) in user_points {
        check_day(user, day)?;
        let categories = categories.as_object().ok_or_else(|| ValidationError::DayNotObject {
            user: user.to_string(),
            day: day.clone(),
        })?;

        let mut scores = DayPoints::new();
        for (category, record) in categories {
            let score = daily_score(user, day, category, record)?;
            let total = row.totals.entry(category.clone()).or_insert(0);
            *total = total.saturating_add(score.max(0));
            scores.insert(category.clone(), score);
        }

        if day == today_key {
            row.today = Some(TodayMarker {
                day: day.clone(),
                points: scores.clone(),
                reasons: categories.clone(),
            });
        }
        row.days.insert(day.clone(), scores);
    }
    Ok(())
}

fn daily_score(user: &str, day: &str, category: &str, record: &Value) -> Result<i64, ValidationError> {
    let record = record.as_object().ok_or_else(|| ValidationError::CategoryNotObject {
        user: user.to_string(),
        day: day.to_string(),
        category: category.to_string(),
    })?;
    let sum = record
        .get("sum")
        .and_then(Value::as_f64)
        .ok_or_else(|| ValidationError::MissingSum {
            user: user.to_string(),
            day: day.to_string(),
            category: category.to_string(),
        })?;

    // f64::round ties away from zero. i64::MAX as f64 rounds up to 2^63, hence the open bound.
    let scaled = (sum * 100.0).round();
    if !(scaled >= i64::MIN as f64 && scaled < i64::MAX as f64) {
        return Err(ValidationError::SumOutOfRange {
            user: user.to_string(),
            day: day.to_string(),
            category: category.to_string(),
        });
    }
    Ok(scaled as i64)
}

fn section<'a>(root: &'a Map<String, Value>, name: &'static str) -> Result<&'a Map<String, Value>, ValidationError> {
    root.get(name)
        .ok_or(ValidationError::MissingSection(name))?
        .as_object()
        .ok_or(ValidationError::SectionNotObject(name))
}

fn check_day(user: &str, day: &str) -> Result<(), ValidationError> {
    match NaiveDate::parse_from_str(day, "%Y-%m-%d") {
        Ok(date) if date_key(date) == day => Ok(()),
        _ => Err(ValidationError::InvalidDay {
            user: user.to_string(),
            day: day.to_string(),
        }),
    }
}

pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
