use chrono::Utc;
use reader_core::{Effect, Episode, EpisodeNumber, MangaInfo, Msg, Page, SpecialLabel};
use reader_engine::{EngineEvent, EngineHandle, EpisodeRecord, PageView, PageViewReporter};
use reader_logging::{reader_debug, reader_info};

use super::persistence::StateStore;

/// Executes the effects returned by `update`.
pub struct EffectRunner {
    engine: EngineHandle,
    reporter: Box<dyn PageViewReporter>,
    store: StateStore,
    location: Option<String>,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle, reporter: Box<dyn PageViewReporter>, store: StateStore) -> Self {
        Self {
            engine,
            reporter,
            store,
            location: None,
        }
    }

    /// The reader's current address, as last rewritten.
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    #[cfg(test)]
    pub fn store(&self) -> &StateStore {
        &self.store
    }

    pub fn run(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchEpisodes { request_id, slug } => {
                    reader_info!("FetchEpisodes request_id={} slug={}", request_id, slug);
                    self.engine.fetch(request_id, slug);
                }
                Effect::CancelFetch { request_id } => {
                    reader_debug!("CancelFetch request_id={}", request_id);
                    self.engine.cancel(request_id);
                }
                Effect::ReplaceLocation { path } => {
                    self.store.set_last_location(&path);
                    self.location = Some(path);
                }
                Effect::TrackPageView { path } => {
                    self.reporter.page_view(PageView {
                        path,
                        viewed_at: Utc::now().to_rfc3339(),
                    });
                }
                Effect::SaveSettings(settings) => self.store.set_settings(settings),
            }
        }
    }

    /// Next engine event already translated into a reader message.
    pub fn poll_engine(&self) -> Option<Msg> {
        self.engine.try_recv().map(map_engine_event)
    }
}

pub fn map_engine_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::EpisodesFetched {
            request_id,
            result: Ok(records),
        } => {
            let manga = records
                .first()
                .map(|record| MangaInfo {
                    name: record.manga_name.clone(),
                    cover: record.manga_cover.clone(),
                })
                .unwrap_or_default();
            Msg::EpisodesLoaded {
                request_id,
                manga,
                episodes: records.into_iter().map(map_record).collect(),
            }
        }
        EngineEvent::EpisodesFetched {
            request_id,
            result: Err(_),
        } => Msg::EpisodesFailed { request_id },
    }
}

fn map_record(record: EpisodeRecord) -> Episode {
    Episode {
        id: record.id,
        number: EpisodeNumber::new(record.episode_number.to_string()),
        name: record.episode_name,
        special: record.special_type.as_deref().and_then(SpecialLabel::parse),
        pages: record
            .pages
            .into_iter()
            .map(|page| Page::new(page.filename))
            .collect(),
    }
}
