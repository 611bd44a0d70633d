mod common;

use common::*;
use pretty_assertions::assert_eq;
use reader_core::{update, Effect, Msg, ReaderRoute, ReaderSettings, ReaderStatus, ReadingMode};

#[test]
fn select_episode_resets_to_first_page() {
    init_logging();
    let (state, _) = open_with(
        ReaderRoute::new("blue-harbor").with_episode("1").with_page("3"),
        two_episodes(),
    );

    let (state, effects) = update(state, Msg::SelectEpisode("2".into()));
    assert_eq!(state.selected_episode().unwrap().number.as_str(), "2");
    assert_eq!(state.page_number(), Some(1));
    assert_eq!(effects, location_effects("/manga/blue-harbor/read/2/1"));

    // Re-selecting the current episode from a later page goes back to page 1.
    let (state, _) = update(state, Msg::NextPage);
    let (state, effects) = update(state, Msg::SelectEpisode("2".into()));
    assert_eq!(state.page_number(), Some(1));
    assert_eq!(effects, location_effects("/manga/blue-harbor/read/2/1"));
}

#[test]
fn select_episode_from_no_selection() {
    init_logging();
    let (state, _) = open_with(ReaderRoute::new("blue-harbor"), two_episodes());
    assert_eq!(state.status(), ReaderStatus::NoEpisodeSelected);

    let (state, effects) = update(state, Msg::SelectEpisode("1".into()));
    assert_eq!(state.status(), ReaderStatus::EpisodeSelected);
    assert_eq!(state.page_number(), Some(1));
    assert_eq!(effects, location_effects("/manga/blue-harbor/read/1/1"));
}

#[test]
fn select_unknown_episode_is_ignored() {
    init_logging();
    let (state, _) = open_with(
        ReaderRoute::new("blue-harbor").with_episode("1").with_page("2"),
        two_episodes(),
    );
    let before = state.clone();

    let (state, effects) = update(state, Msg::SelectEpisode("99".into()));
    assert!(effects.is_empty());
    assert_eq!(state, before);
}

#[test]
fn selecting_current_first_page_emits_nothing() {
    init_logging();
    let (state, _) = open_with(
        ReaderRoute::new("blue-harbor").with_episode("2"),
        two_episodes(),
    );
    let (_state, effects) = update(state, Msg::SelectEpisode("2".into()));
    assert!(effects.is_empty());
}

#[test]
fn next_page_saturates_at_last_page() {
    init_logging();
    let (state, _) = open_with(
        ReaderRoute::new("blue-harbor").with_episode("1"),
        two_episodes(),
    );

    let (state, effects) = update(state, Msg::NextPage);
    assert_eq!(state.page_number(), Some(2));
    assert_eq!(effects, location_effects("/manga/blue-harbor/read/1/2"));

    let (state, _) = update(state, Msg::NextPage);
    assert_eq!(state.page_number(), Some(3));

    let mut state = state;
    for _ in 0..3 {
        let (next, effects) = update(state, Msg::NextPage);
        assert_eq!(next.page_number(), Some(3));
        assert!(effects.is_empty());
        state = next;
    }
    // Never wraps into the next episode.
    assert_eq!(state.selected_episode().unwrap().number.as_str(), "1");
}

#[test]
fn previous_page_saturates_at_first_page() {
    init_logging();
    let (state, _) = open_with(
        ReaderRoute::new("blue-harbor").with_episode("2").with_page("2"),
        two_episodes(),
    );

    let (state, effects) = update(state, Msg::PreviousPage);
    assert_eq!(state.page_number(), Some(1));
    assert_eq!(effects, location_effects("/manga/blue-harbor/read/2/1"));

    let (state, effects) = update(state, Msg::PreviousPage);
    assert_eq!(state.page_number(), Some(1));
    assert!(effects.is_empty());
}

#[test]
fn page_stays_in_range_under_any_step_sequence() {
    init_logging();
    let (mut state, _) = open_with(
        ReaderRoute::new("blue-harbor").with_episode("1"),
        two_episodes(),
    );
    let steps = [
        Msg::NextPage,
        Msg::NextPage,
        Msg::NextPage,
        Msg::NextPage,
        Msg::PreviousPage,
        Msg::SelectEpisode("2".into()),
        Msg::NextPage,
        Msg::NextPage,
        Msg::PreviousPage,
        Msg::PreviousPage,
        Msg::PreviousPage,
    ];
    for msg in steps {
        let (next, _) = update(state, msg);
        let page = next.page_number().unwrap();
        let count = next.selected_episode().unwrap().page_count();
        assert!((1..=count).contains(&page));
        state = next;
    }
}

#[test]
fn navigation_without_selection_is_noop() {
    init_logging();
    let (state, _) = open_with(ReaderRoute::new("blue-harbor"), two_episodes());
    let before = state.clone();

    let (state, next_effects) = update(state, Msg::NextPage);
    let (state, prev_effects) = update(state, Msg::PreviousPage);
    assert!(next_effects.is_empty());
    assert!(prev_effects.is_empty());
    assert_eq!(state, before);
}

#[test]
fn toggle_reading_mode_twice_restores_mode_and_keeps_selection() {
    init_logging();
    let (state, _) = open_with(
        ReaderRoute::new("blue-harbor").with_episode("1").with_page("2"),
        two_episodes(),
    );
    let original_mode = state.reading_mode();
    let location = state.location();

    let (state, effects) = update(state, Msg::ToggleReadingMode);
    assert_eq!(state.reading_mode(), ReadingMode::Continuous);
    assert_eq!(
        effects,
        vec![Effect::SaveSettings(ReaderSettings {
            reading_mode: ReadingMode::Continuous
        })]
    );
    assert_eq!(state.location(), location);

    let (state, _) = update(state, Msg::ToggleReadingMode);
    assert_eq!(state.reading_mode(), original_mode);
    assert_eq!(state.location(), location);
    assert_eq!(state.page_number(), Some(2));
}

#[test]
fn reading_mode_survives_reopen() {
    init_logging();
    let (state, _) = open_with(ReaderRoute::new("blue-harbor"), two_episodes());
    let (state, _) = update(state, Msg::ToggleReadingMode);
    let (state, _) = update(state, Msg::Open(ReaderRoute::new("red-canyon")));
    assert_eq!(state.reading_mode(), ReadingMode::Continuous);
}

#[test]
fn restore_settings_marks_dirty_only_on_change() {
    init_logging();
    let (mut state, _) = update(
        reader_core::AppState::new(),
        Msg::RestoreSettings(ReaderSettings::default()),
    );
    assert!(!state.consume_dirty());

    let (mut state, effects) = update(
        state,
        Msg::RestoreSettings(ReaderSettings {
            reading_mode: ReadingMode::Continuous,
        }),
    );
    assert!(effects.is_empty());
    assert!(state.consume_dirty());
    assert_eq!(state.reading_mode(), ReadingMode::Continuous);
}

#[test]
fn selection_tracks_episode_index_and_page() {
    init_logging();
    let (state, _) = open_with(
        ReaderRoute::new("blue-harbor").with_episode("2").with_page("2"),
        two_episodes(),
    );
    let selection = state.selection().unwrap();
    assert_eq!(selection.episode_index(), 1);
    assert_eq!(selection.page(), 2);
}
