use crate::{ReaderSettings, RequestId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch the episode list of a manga.
    FetchEpisodes { request_id: RequestId, slug: String },
    /// Abandon an outstanding fetch; its response must not reach the reader.
    CancelFetch { request_id: RequestId },
    /// Rewrite the current location in place (no new history entry).
    ReplaceLocation { path: String },
    /// Fire-and-forget page-view notification for the rewritten location.
    TrackPageView { path: String },
    /// Persist the session preferences.
    SaveSettings(ReaderSettings),
}
