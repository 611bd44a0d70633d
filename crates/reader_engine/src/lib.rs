//! Reader engine: IO for the reader. Fetches episode lists, resolves API and
//! image addresses, reports page views and writes state files.
mod analytics;
mod api;
mod decode;
mod engine;
mod fetch;
mod persist;
mod types;

pub use analytics::{LogPageViewReporter, PageView, PageViewReporter};
pub use api::ApiRoutes;
pub use decode::{decode_episode_list, DecodeError};
pub use engine::EngineHandle;
pub use fetch::{EpisodeSource, FetchSettings, ReqwestEpisodeSource};
pub use persist::{ensure_state_dir, AtomicFileWriter, PersistError};
pub use types::{
    EngineEvent, EpisodeNumberField, EpisodeRecord, FailureKind, FetchError, PageRecord,
    RequestId,
};
