use axum::http::StatusCode;
use std::path::PathBuf;
use thiserror::Error;

/// A payload that decoded as JSON but does not have the scoring shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("payload must be a JSON object")]
    PayloadNotObject,

    #[error("payload is missing the `{0}` section")]
    MissingSection(&'static str),

    #[error("`{0}` must be an object")]
    SectionNotObject(&'static str),

    #[error("display name of user {user} must be a string")]
    NameNotString { user: String },

    #[error("points of user {user} must be an object")]
    UserPointsNotObject { user: String },

    #[error("day `{day}` of user {user} is not a YYYY-MM-DD date")]
    InvalidDay { user: String, day: String },

    #[error("points of user {user} on {day} must be an object")]
    DayNotObject { user: String, day: String },

    #[error("{category} of user {user} on {day} must be an object")]
    CategoryNotObject {
        user: String,
        day: String,
        category: String,
    },

    #[error("{category} of user {user} on {day} has no numeric `sum`")]
    MissingSum {
        user: String,
        day: String,
        category: String,
    },

    #[error("{category} of user {user} on {day} has a `sum` too large to score")]
    SumOutOfRange {
        user: String,
        day: String,
        category: String,
    },
}

/// Failure to obtain the raw scoring document.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} answered with status {status}")]
    Status { url: String, status: u16 },

    #[error("scoring data is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn unprocessable(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            message: message.into(),
        }
    }

    pub fn bad_gateway(err: impl std::error::Error) -> Self {
        Self {
            status: StatusCode::BAD_GATEWAY,
            message: err.to_string(),
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        Self::unprocessable(err.to_string())
    }
}

impl From<FetchError> for AppError {
    fn from(err: FetchError) -> Self {
        Self::bad_gateway(err)
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}
