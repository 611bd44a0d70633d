//! Reader core: pure navigation state machine, location codec and view model.
mod effect;
mod episode;
mod msg;
pub mod routes;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use episode::{Episode, EpisodeNumber, MangaInfo, Page, SpecialLabel};
pub use msg::Msg;
pub use routes::ReaderRoute;
pub use state::{
    AppState, ReaderSettings, ReaderStatus, ReadingMode, RequestId, Selection,
};
pub use update::update;
pub use view_model::{EpisodeOption, PageImageView, ReaderPageView, ReaderView, SelectedEpisodeView};
