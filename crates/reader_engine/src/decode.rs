use serde::Deserialize;
use thiserror::Error;

use crate::EpisodeRecord;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("invalid episode list json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Accepted body shapes: a bare array or the `{ "data": [...] }` envelope.
#[derive(Deserialize)]
#[serde(untagged)]
enum EpisodeListBody {
    Bare(Vec<EpisodeRecord>),
    Envelope { data: Vec<EpisodeRecord> },
}

/// Decodes an episode-list response body.
pub fn decode_episode_list(bytes: &[u8]) -> Result<Vec<EpisodeRecord>, DecodeError> {
    let body: EpisodeListBody = serde_json::from_slice(bytes)?;
    Ok(match body {
        EpisodeListBody::Bare(records) => records,
        EpisodeListBody::Envelope { data } => data,
    })
}
