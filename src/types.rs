use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A single article as supplied by the news provider.
///
/// Every field is optional: the provider omits or nulls fields freely, and
/// downstream code is expected to degrade gracefully rather than reject the
/// whole response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Article {
    pub article_id: Option<String>,
    pub title: Option<String>,
    pub link: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub pub_date: Option<String>,
    pub image_url: Option<String>,
    pub source_id: Option<String>,
    pub category: Option<Vec<String>>,
    pub creator: Option<Vec<String>>,
}

impl Article {
    /// Parse the provider timestamp into a concrete instant.
    ///
    /// The provider sends `YYYY-MM-DD HH:MM:SS` wall-clock times (assumed
    /// UTC); some sources send RFC 3339 instead. Anything else yields `None`,
    /// which recency checks treat as "not recent".
    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        parse_pub_date(self.pub_date.as_deref()?)
    }

    /// First category tag, used for badge and image-fallback lookups.
    pub fn primary_category(&self) -> Option<&str> {
        self.category
            .as_ref()
            .and_then(|tags| tags.first())
            .map(|tag| tag.as_str())
    }

    pub fn has_image(&self) -> bool {
        self.image_url
            .as_deref()
            .map(|url| !url.trim().is_empty())
            .unwrap_or(false)
    }
}

/// Parse a provider timestamp, tolerating both the provider's
/// `YYYY-MM-DD HH:MM:SS` wall-clock format (assumed UTC) and RFC 3339.
pub fn parse_pub_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(naive.and_utc());
    }

    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Response envelope returned by the provider's `latest` endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct NewsResponse {
    pub status: Option<String>,
    #[serde(default, deserialize_with = "deserialize_results")]
    pub results: Vec<Article>,
    #[serde(rename = "nextPage")]
    pub next_page: Option<String>,
    pub message: Option<String>,
    #[serde(rename = "totalResults")]
    pub total_results: Option<u64>,
}

impl NewsResponse {
    /// The provider signals success with `status: "success"`; anything else
    /// carries a human-readable `message`.
    pub fn is_success(&self) -> bool {
        matches!(self.status.as_deref(), Some("success") | None)
    }
}

/// Accept whatever the provider puts in `results`: a missing field, `null`,
/// or a non-array value all become an empty list, and malformed entries
/// inside an array are skipped rather than failing the whole response.
fn deserialize_results<'de, D>(deserializer: D) -> std::result::Result<Vec<Article>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Array(entries) => Ok(entries
            .into_iter()
            .filter_map(|entry| serde_json::from_value(entry).ok())
            .collect()),
        _ => Ok(Vec::new()),
    }
}

/// An article saved by the user, stamped at save time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedArticle {
    #[serde(flatten)]
    pub article: Article,
    pub bookmarked_at: DateTime<Utc>,
}

/// Two-valued display theme persisted alongside bookmarks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub base_url: String,
    pub language: String,
    pub user_agent: String,
    pub timeout_seconds: u64,
    pub max_retries: u32,
    pub retry_delay_seconds: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            base_url: "https://newsdata.io/api/1/latest".to_string(),
            language: "en".to_string(),
            user_agent: "frontpage/0.1".to_string(),
            timeout_seconds: 30,
            max_retries: 3,
            retry_delay_seconds: 5,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FrontPageError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API returned {status}: {message}")]
    Api { status: String, message: String },

    #[error("no API key configured (pass --api-key or set NEWSDATA_API_KEY)")]
    MissingApiKey,

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FrontPageError>;
