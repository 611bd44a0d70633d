use crate::{Episode, EpisodeNumber, MangaInfo, ReaderRoute, ReaderSettings, RequestId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Reader opened (or re-targeted) at a location.
    Open(ReaderRoute),
    /// Episode list arrived for a fetch.
    EpisodesLoaded {
        request_id: RequestId,
        manga: MangaInfo,
        episodes: Vec<Episode>,
    },
    /// Episode list fetch failed; the reason is not shown to the user.
    EpisodesFailed { request_id: RequestId },
    /// User picked an episode from the selector.
    SelectEpisode(EpisodeNumber),
    /// User asked for the next page.
    NextPage,
    /// User asked for the previous page.
    PreviousPage,
    /// User flipped between page-by-page and continuous reading.
    ToggleReadingMode,
    /// Restore persisted preferences.
    RestoreSettings(ReaderSettings),
    /// Reader view torn down.
    Close,
    /// Fallback for placeholder wiring.
    NoOp,
}
