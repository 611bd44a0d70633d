#![allow(dead_code)]

use std::sync::Once;

use reader_core::{update, AppState, Effect, Episode, MangaInfo, Msg, Page, ReaderRoute};

pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(reader_logging::initialize_for_tests);
}

pub fn episode(number: &str, filenames: &[&str]) -> Episode {
    Episode::new(number, filenames.iter().map(|name| Page::new(*name)).collect())
}

/// Episode 1 with pages a, b, c and episode 2 with pages d, e.
pub fn two_episodes() -> Vec<Episode> {
    vec![episode("1", &["a", "b", "c"]), episode("2", &["d", "e"])]
}

pub fn manga() -> MangaInfo {
    MangaInfo {
        name: "Blue Harbor".to_string(),
        cover: "covers/blue-harbor.jpg".to_string(),
    }
}

/// Opens `route` and answers the resulting fetch with `episodes`.
pub fn open_with(route: ReaderRoute, episodes: Vec<Episode>) -> (AppState, Vec<Effect>) {
    let (state, effects) = update(AppState::new(), Msg::Open(route));
    let request_id = fetch_request_id(&effects).expect("fetch effect");
    update(
        state,
        Msg::EpisodesLoaded {
            request_id,
            manga: manga(),
            episodes,
        },
    )
}

pub fn fetch_request_id(effects: &[Effect]) -> Option<u64> {
    effects.iter().find_map(|effect| match effect {
        Effect::FetchEpisodes { request_id, .. } => Some(*request_id),
        _ => None,
    })
}

pub fn location_effects(path: &str) -> Vec<Effect> {
    vec![
        Effect::ReplaceLocation {
            path: path.to_string(),
        },
        Effect::TrackPageView {
            path: path.to_string(),
        },
    ]
}
