use crate::episode::prepare_episodes;
use crate::routes::{reader_path, resolve_page};
use crate::view_model::{self, ReaderView};
use crate::{Episode, EpisodeNumber, MangaInfo, ReaderRoute};

/// Identifies one episode-list fetch so late responses can be told apart.
pub type RequestId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadingMode {
    /// One page at a time with previous/next affordances.
    #[default]
    PageByPage,
    /// Every page of the episode stacked for scrolling.
    Continuous,
}

impl ReadingMode {
    pub fn toggled(self) -> Self {
        match self {
            ReadingMode::PageByPage => ReadingMode::Continuous,
            ReadingMode::Continuous => ReadingMode::PageByPage,
        }
    }
}

/// Per-session preferences handed to the reader instead of living in globals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReaderSettings {
    pub reading_mode: ReadingMode,
}

/// Current `(episode, page)` pair. `page` is 1-based and always within the
/// selected episode's page range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    episode_index: usize,
    page: usize,
}

impl Selection {
    pub fn episode_index(&self) -> usize {
        self.episode_index
    }

    pub fn page(&self) -> usize {
        self.page
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReaderStatus {
    Idle,
    Loading,
    NoData,
    NoEpisodeSelected,
    EpisodeSelected,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LoadedManga {
    pub(crate) manga: MangaInfo,
    pub(crate) episodes: Vec<Episode>,
    pub(crate) selection: Option<Selection>,
}

impl LoadedManga {
    pub(crate) fn selected_episode(&self) -> Option<(&Episode, Selection)> {
        let selection = self.selection?;
        self.episodes
            .get(selection.episode_index)
            .map(|episode| (episode, selection))
    }

    fn find(&self, number: &EpisodeNumber) -> Option<usize> {
        self.episodes
            .iter()
            .position(|episode| &episode.number == number)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Phase {
    Loading {
        request_id: RequestId,
        requested: ReaderRoute,
    },
    NoData,
    Loaded(LoadedManga),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Session {
    pub(crate) slug: String,
    pub(crate) phase: Phase,
}

/// Outcome of applying a fetch response to the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoadOutcome {
    /// Response did not belong to the outstanding request.
    Stale,
    NoData,
    Loaded,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    settings: ReaderSettings,
    session: Option<Session>,
    last_request_id: RequestId,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: ReaderSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    pub fn view(&self) -> ReaderView {
        view_model::build(self)
    }

    pub fn settings(&self) -> ReaderSettings {
        self.settings
    }

    pub fn reading_mode(&self) -> ReadingMode {
        self.settings.reading_mode
    }

    pub fn status(&self) -> ReaderStatus {
        match self.session.as_ref().map(|session| &session.phase) {
            None => ReaderStatus::Idle,
            Some(Phase::Loading { .. }) => ReaderStatus::Loading,
            Some(Phase::NoData) => ReaderStatus::NoData,
            Some(Phase::Loaded(loaded)) if loaded.selection.is_some() => {
                ReaderStatus::EpisodeSelected
            }
            Some(Phase::Loaded(_)) => ReaderStatus::NoEpisodeSelected,
        }
    }

    pub fn slug(&self) -> Option<&str> {
        self.session.as_ref().map(|session| session.slug.as_str())
    }

    pub fn episodes(&self) -> &[Episode] {
        match self.loaded() {
            Some(loaded) => &loaded.episodes,
            None => &[],
        }
    }

    pub fn selected_episode(&self) -> Option<&Episode> {
        self.loaded()
            .and_then(LoadedManga::selected_episode)
            .map(|(episode, _)| episode)
    }

    pub fn selection(&self) -> Option<Selection> {
        self.loaded().and_then(|loaded| loaded.selection)
    }

    pub fn page_number(&self) -> Option<usize> {
        self.selection().map(|selection| selection.page)
    }

    /// Location mirroring the current selection; `None` until data is loaded.
    pub fn location(&self) -> Option<String> {
        let session = self.session.as_ref()?;
        let loaded = match &session.phase {
            Phase::Loaded(loaded) => loaded,
            Phase::Loading { .. } | Phase::NoData => return None,
        };
        let selection = loaded
            .selected_episode()
            .map(|(episode, selection)| (&episode.number, selection.page));
        Some(reader_path(&session.slug, selection))
    }

    pub fn pending_request(&self) -> Option<RequestId> {
        match self.session.as_ref().map(|session| &session.phase) {
            Some(Phase::Loading { request_id, .. }) => Some(*request_id),
            _ => None,
        }
    }

    /// Returns whether the state changed since the last call and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub(crate) fn loaded(&self) -> Option<&LoadedManga> {
        match self.session.as_ref().map(|session| &session.phase) {
            Some(Phase::Loaded(loaded)) => Some(loaded),
            _ => None,
        }
    }

    fn loaded_mut(&mut self) -> Option<&mut LoadedManga> {
        match self.session.as_mut().map(|session| &mut session.phase) {
            Some(Phase::Loaded(loaded)) => Some(loaded),
            _ => None,
        }
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn set_settings(&mut self, settings: ReaderSettings) {
        if self.settings != settings {
            self.settings = settings;
            self.mark_dirty();
        }
    }

    pub(crate) fn toggle_reading_mode(&mut self) -> ReaderSettings {
        self.settings.reading_mode = self.settings.reading_mode.toggled();
        self.mark_dirty();
        self.settings
    }

    /// Starts a new session. Returns the new request id and the request of
    /// the replaced session if it was still loading.
    pub(crate) fn begin_loading(&mut self, route: ReaderRoute) -> (RequestId, Option<RequestId>) {
        let previous = self.pending_request();
        self.last_request_id += 1;
        let request_id = self.last_request_id;
        self.session = Some(Session {
            slug: route.slug.clone(),
            phase: Phase::Loading {
                request_id,
                requested: route,
            },
        });
        self.mark_dirty();
        (request_id, previous)
    }

    pub(crate) fn finish_loading(
        &mut self,
        request_id: RequestId,
        episodes: Vec<Episode>,
        manga: MangaInfo,
    ) -> LoadOutcome {
        let Some(requested) = self.take_requested(request_id) else {
            return LoadOutcome::Stale;
        };

        let (episodes, dropped) = prepare_episodes(episodes);
        if dropped > 0 {
            reader_logging::reader_warn!(
                "Dropped {} episode(s) without pages for slug={}",
                dropped,
                requested.slug
            );
        }
        if episodes.is_empty() {
            self.set_phase(Phase::NoData);
            return LoadOutcome::NoData;
        }

        let mut loaded = LoadedManga {
            manga,
            episodes,
            selection: None,
        };
        if let Some(number) = &requested.episode {
            match loaded.find(number) {
                Some(episode_index) => {
                    let page_count = loaded.episodes[episode_index].page_count();
                    let page = resolve_page(requested.page.as_deref(), page_count);
                    loaded.selection = Some(Selection {
                        episode_index,
                        page,
                    });
                }
                None => reader_logging::reader_nav!(
                    "Requested episode {} not in list for slug={}",
                    number,
                    requested.slug
                ),
            }
        }

        self.set_phase(Phase::Loaded(loaded));
        LoadOutcome::Loaded
    }

    /// Moves an outstanding request into the terminal no-data state.
    pub(crate) fn fail_loading(&mut self, request_id: RequestId) -> LoadOutcome {
        if self.take_requested(request_id).is_none() {
            return LoadOutcome::Stale;
        }
        self.set_phase(Phase::NoData);
        LoadOutcome::NoData
    }

    /// Selects an episode by number and resets to its first page.
    /// Returns whether the selection changed.
    pub(crate) fn select_episode(&mut self, number: &EpisodeNumber) -> bool {
        let Some(loaded) = self.loaded_mut() else {
            return false;
        };
        let Some(episode_index) = loaded.find(number) else {
            reader_logging::reader_nav!("Ignoring unknown episode {}", number);
            return false;
        };
        let next = Selection {
            episode_index,
            page: 1,
        };
        if loaded.selection == Some(next) {
            return false;
        }
        loaded.selection = Some(next);
        self.mark_dirty();
        true
    }

    /// Moves the page by one step in either direction, saturating at both ends.
    /// Returns whether the page changed.
    pub(crate) fn step_page(&mut self, forward: bool) -> bool {
        let Some(loaded) = self.loaded_mut() else {
            return false;
        };
        let Some(selection) = loaded.selection else {
            return false;
        };
        let page_count = loaded.episodes[selection.episode_index].page_count();
        let next_page = if forward {
            (selection.page + 1).min(page_count)
        } else {
            selection.page.saturating_sub(1).max(1)
        };
        if next_page == selection.page {
            return false;
        }
        loaded.selection = Some(Selection {
            page: next_page,
            ..selection
        });
        self.mark_dirty();
        true
    }

    /// Ends the session. Returns the request that was still outstanding, if any.
    pub(crate) fn close(&mut self) -> Option<RequestId> {
        let pending = self.pending_request();
        if self.session.take().is_some() {
            self.mark_dirty();
        }
        pending
    }

    fn take_requested(&mut self, request_id: RequestId) -> Option<ReaderRoute> {
        match self.session.as_ref().map(|session| &session.phase) {
            Some(Phase::Loading {
                request_id: pending,
                requested,
            }) if *pending == request_id => Some(requested.clone()),
            _ => None,
        }
    }

    fn set_phase(&mut self, phase: Phase) {
        if let Some(session) = self.session.as_mut() {
            session.phase = phase;
            self.mark_dirty();
        }
    }
}
