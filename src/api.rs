use anyhow::Context;
use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;
use tracing::{debug, warn};

use crate::config::Config;
use crate::store::{is_language_code, Configuration};

/// Errors from the dictionary backend.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// One definition entry of a lookup response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Definition {
    /// Part of speech (e.g., "n.", "v.")
    #[serde(default, deserialize_with = "string_or_default")]
    pub pos: String,
    /// Meaning
    #[serde(default, deserialize_with = "string_or_default")]
    pub m: String,
    /// Example sentence
    #[serde(default, deserialize_with = "non_empty_string")]
    pub ex: Option<String>,
}

/// Body of a successful `/api/lookup` response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LookupResponse {
    /// Phonetic transcription
    #[serde(default, deserialize_with = "non_empty_string")]
    pub p: Option<String>,
    #[serde(default, deserialize_with = "definition_list")]
    pub defs: Option<Vec<Definition>>,
}

impl LookupResponse {
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }

    /// Load a response saved as JSON.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_json(&contents)
            .with_context(|| format!("Failed to parse lookup response in {}", path.display()))
    }

    /// Definitions to display; empty when the response carried none.
    pub fn definitions(&self) -> &[Definition] {
        self.defs.as_deref().unwrap_or_default()
    }
}

/// Treats missing, null and empty strings alike.
fn non_empty_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

/// Null reads as an empty string.
fn string_or_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// A `defs` value that is not an array counts as absent.
fn definition_list<'de, D>(deserializer: D) -> Result<Option<Vec<Definition>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Array(_) => serde_json::from_value(value)
            .map(Some)
            .map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}

/// A validated lookup query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    pub word: String,
    pub source: String,
    pub target: String,
}

impl LookupRequest {
    /// Parse the compact `<source>-<target>-<word>` form (e.g. `en-zh-hello`).
    ///
    /// The word may itself contain dashes; only the first two separate the
    /// language codes.
    pub fn parse_compact(query: &str) -> Option<Self> {
        let mut parts = query.splitn(3, '-');
        let source = parts.next()?;
        let target = parts.next()?;
        let word = parts.next()?.trim();

        if !is_language_code(source) || !is_language_code(target) || word.is_empty() {
            return None;
        }

        Some(Self {
            word: word.to_string(),
            source: source.to_string(),
            target: target.to_string(),
        })
    }
}

/// HTTP client for the dictionary backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            base_url: config.api_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch the widget configuration from `GET /api/config`.
    pub async fn fetch_config(&self) -> Result<Configuration, ApiError> {
        let url = format!("{}/api/config", self.base_url);
        debug!("Fetching configuration from {}", url);

        let response = self.http.get(&url).send().await?;
        let body = Self::success_body(response).await?;

        Ok(serde_json::from_str(&body)?)
    }

    /// Look a word up with `GET /api/lookup`.
    pub async fn lookup(&self, request: &LookupRequest) -> Result<LookupResponse, ApiError> {
        let url = format!("{}/api/lookup", self.base_url);
        debug!(
            "Looking up '{}' ({} -> {})",
            request.word, request.source, request.target
        );

        let response = self
            .http
            .get(&url)
            .query(&[
                ("word", request.word.as_str()),
                ("source", request.source.as_str()),
                ("target", request.target.as_str()),
            ])
            .send()
            .await?;
        let body = Self::success_body(response).await?;

        Ok(LookupResponse::from_json(&body)?)
    }

    /// Body of a 2xx response, or `ApiError::Status` carrying the error text.
    async fn success_body(response: reqwest::Response) -> Result<String, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Dictionary API error ({}): {}", status, body);
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.text().await?)
    }
}
