use crate::errors::FetchError;
use serde_json::Value;
use std::{env, path::PathBuf};
use tokio::fs;
use tracing::{debug, error};

pub const DEFAULT_LOCATION: &str = "data/data.json";

/// Where the raw scoring document comes from.
#[derive(Debug, Clone)]
pub enum DataSource {
    File(PathBuf),
    Http { client: reqwest::Client, url: String },
}

impl DataSource {
    pub fn from_location(location: &str) -> Self {
        if location.starts_with("http://") || location.starts_with("https://") {
            Self::Http {
                client: reqwest::Client::new(),
                url: location.to_string(),
            }
        } else {
            Self::File(PathBuf::from(location))
        }
    }

    pub fn location(&self) -> String {
        match self {
            Self::File(path) => path.display().to_string(),
            Self::Http { url, .. } => url.clone(),
        }
    }

    /// Fetches and decodes the document. Performs a single GET with no extra headers.
    pub async fn fetch(&self) -> Result<Value, FetchError> {
        let bytes = match self {
            Self::File(path) => fs::read(path).await.map_err(|source| FetchError::Read {
                path: path.clone(),
                source,
            })?,
            Self::Http { client, url } => fetch_http(client, url).await?,
        };

        debug!(location = %self.location(), bytes = bytes.len(), "fetched scoring data");
        serde_json::from_slice(&bytes).map_err(|err| {
            error!("failed to parse scoring data from {}: {err}", self.location());
            FetchError::Decode(err)
        })
    }
}

async fn fetch_http(client: &reqwest::Client, url: &str) -> Result<Vec<u8>, FetchError> {
    let http_err = |source| FetchError::Http {
        url: url.to_string(),
        source,
    };

    let response = client.get(url).send().await.map_err(http_err)?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    Ok(response.bytes().await.map_err(http_err)?.to_vec())
}

pub fn resolve_source() -> DataSource {
    let location = env::var("GAMIFICATION_DATA_URL").unwrap_or_else(|_| DEFAULT_LOCATION.to_string());
    DataSource::from_location(&location)
}
