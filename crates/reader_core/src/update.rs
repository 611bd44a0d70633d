use crate::state::LoadOutcome;
use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Open(route) => {
            reader_logging::reader_nav!("Open slug={} path={}", route.slug, route.to_path());
            let slug = route.slug.clone();
            let (request_id, previous) = state.begin_loading(route);
            let mut effects = Vec::with_capacity(2);
            if let Some(previous) = previous {
                effects.push(Effect::CancelFetch {
                    request_id: previous,
                });
            }
            effects.push(Effect::FetchEpisodes { request_id, slug });
            effects
        }
        Msg::EpisodesLoaded {
            request_id,
            manga,
            episodes,
        } => match state.finish_loading(request_id, episodes, manga) {
            LoadOutcome::Loaded => location_effects(&state),
            LoadOutcome::NoData => {
                reader_logging::reader_info!("No episode data for request {}", request_id);
                Vec::new()
            }
            LoadOutcome::Stale => {
                reader_logging::reader_debug!("Discarding stale episode list {}", request_id);
                Vec::new()
            }
        },
        Msg::EpisodesFailed { request_id } => {
            if state.fail_loading(request_id) == LoadOutcome::Stale {
                reader_logging::reader_debug!("Discarding stale failure {}", request_id);
            }
            Vec::new()
        }
        Msg::SelectEpisode(number) => {
            if state.select_episode(&number) {
                location_effects(&state)
            } else {
                Vec::new()
            }
        }
        Msg::NextPage => {
            if state.step_page(true) {
                location_effects(&state)
            } else {
                Vec::new()
            }
        }
        Msg::PreviousPage => {
            if state.step_page(false) {
                location_effects(&state)
            } else {
                Vec::new()
            }
        }
        Msg::ToggleReadingMode => {
            let settings = state.toggle_reading_mode();
            vec![Effect::SaveSettings(settings)]
        }
        Msg::RestoreSettings(settings) => {
            state.set_settings(settings);
            Vec::new()
        }
        Msg::Close => match state.close() {
            Some(request_id) => vec![Effect::CancelFetch { request_id }],
            None => Vec::new(),
        },
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

/// Location rewrite followed by the page-view notification for it.
fn location_effects(state: &AppState) -> Vec<Effect> {
    match state.location() {
        Some(path) => vec![
            Effect::ReplaceLocation { path: path.clone() },
            Effect::TrackPageView { path },
        ],
        None => Vec::new(),
    }
}
