use std::fmt;

use serde::Deserialize;

pub type RequestId = u64;

/// Episode number as the backend sends it: integer, float or text.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum EpisodeNumberField {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for EpisodeNumberField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EpisodeNumberField::Integer(value) => write!(f, "{value}"),
            EpisodeNumberField::Float(value) => write!(f, "{value}"),
            EpisodeNumberField::Text(value) => f.write_str(value.trim()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PageRecord {
    pub filename: String,
}

/// One episode as returned by the episode-list endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EpisodeRecord {
    #[serde(default)]
    pub id: Option<u64>,
    pub episode_number: EpisodeNumberField,
    #[serde(default)]
    pub episode_name: Option<String>,
    #[serde(default, alias = "special_label")]
    pub special_type: Option<String>,
    #[serde(default)]
    pub manga_name: String,
    #[serde(default)]
    pub manga_cover: String,
    #[serde(default)]
    pub pages: Vec<PageRecord>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    EpisodesFetched {
        request_id: RequestId,
        result: Result<Vec<EpisodeRecord>, FetchError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    RedirectLimitExceeded,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    UnsupportedContentType { content_type: String },
    Decode,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::RedirectLimitExceeded => write!(f, "redirect limit exceeded"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::UnsupportedContentType { content_type } => {
                write!(f, "unsupported content type {content_type}")
            }
            FailureKind::Decode => write!(f, "malformed episode list"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}
