use crate::routes::{comments_identifier, manga_path, page_image_path};
use crate::state::{LoadedManga, Phase};
use crate::{AppState, EpisodeNumber, ReadingMode};

/// Everything a front-end needs to draw the reader, one variant per state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ReaderView {
    #[default]
    Idle,
    Loading {
        slug: String,
    },
    /// Fetch failed or returned nothing; shown as a static message.
    NoData {
        slug: String,
    },
    Reader(ReaderPageView),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReaderPageView {
    pub slug: String,
    pub manga_name: String,
    pub manga_cover: String,
    pub manga_link: String,
    pub document_title: String,
    pub reading_mode: ReadingMode,
    pub episodes: Vec<EpisodeOption>,
    /// `None` asks the user to pick an episode.
    pub selected: Option<SelectedEpisodeView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpisodeOption {
    pub number: EpisodeNumber,
    pub label: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedEpisodeView {
    pub number: EpisodeNumber,
    pub title: String,
    pub page_number: usize,
    pub page_count: usize,
    pub has_previous: bool,
    pub has_next: bool,
    /// One image in page-by-page mode, the whole episode in continuous mode.
    pub images: Vec<PageImageView>,
    pub comments_identifier: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageImageView {
    pub page_number: usize,
    pub image_path: String,
    pub alt: String,
}

pub(crate) fn build(state: &AppState) -> ReaderView {
    let Some(session) = state.session() else {
        return ReaderView::Idle;
    };
    let slug = session.slug.clone();
    match &session.phase {
        Phase::Loading { .. } => ReaderView::Loading { slug },
        Phase::NoData => ReaderView::NoData { slug },
        Phase::Loaded(loaded) => ReaderView::Reader(build_page(slug, loaded, state.reading_mode())),
    }
}

fn build_page(slug: String, loaded: &LoadedManga, reading_mode: ReadingMode) -> ReaderPageView {
    let selected_index = loaded.selection.map(|selection| selection.episode_index());
    let episodes = loaded
        .episodes
        .iter()
        .enumerate()
        .map(|(index, episode)| EpisodeOption {
            number: episode.number.clone(),
            label: episode.selector_label(),
            selected: selected_index == Some(index),
        })
        .collect();

    let manga_name = loaded.manga.name.clone();
    let selected = loaded.selected_episode().map(|(episode, selection)| {
        let page_count = episode.page_count();
        let page_number = selection.page();
        let image = |(index, page): (usize, &crate::Page)| PageImageView {
            page_number: index + 1,
            image_path: page_image_path(&slug, &episode.number, &page.filename),
            alt: format!("{} {} page {}", manga_name, episode.title(), index + 1),
        };
        let images = match reading_mode {
            ReadingMode::PageByPage => episode
                .pages
                .iter()
                .enumerate()
                .skip(page_number - 1)
                .take(1)
                .map(image)
                .collect(),
            ReadingMode::Continuous => episode.pages.iter().enumerate().map(image).collect(),
        };
        SelectedEpisodeView {
            number: episode.number.clone(),
            title: episode.title(),
            page_number,
            page_count,
            has_previous: page_number > 1,
            has_next: page_number < page_count,
            images,
            comments_identifier: comments_identifier(&slug, &episode.number),
        }
    });

    let document_title = match &selected {
        Some(selected) => format!("{} - {}", manga_name, selected.title),
        None => manga_name.clone(),
    };

    ReaderPageView {
        manga_link: manga_path(&slug),
        slug,
        manga_name,
        manga_cover: loaded.manga.cover.clone(),
        document_title,
        reading_mode,
        episodes,
        selected,
    }
}
