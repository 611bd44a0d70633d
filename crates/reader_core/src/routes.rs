//! Reader location codec.
//!
//! A reader location has the shape `/manga/{slug}/read[/{episode}[/{page}]]`.
//! Decoding is lenient: anything that cannot be trusted is dropped and later
//! corrected by the state machine, never rejected.

use url::Url;

use crate::EpisodeNumber;

const MANGA_SEGMENT: &str = "manga";
const READ_SEGMENT: &str = "read";

/// Raw request decoded from a reader location.
///
/// The page stays a raw string: validation needs the episode's page count,
/// which is only known once the episode list has been fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReaderRoute {
    pub slug: String,
    pub episode: Option<EpisodeNumber>,
    pub page: Option<String>,
}

impl ReaderRoute {
    pub fn new(slug: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            episode: None,
            page: None,
        }
    }

    pub fn with_episode(mut self, episode: impl Into<EpisodeNumber>) -> Self {
        self.episode = Some(episode.into());
        self
    }

    pub fn with_page(mut self, page: impl Into<String>) -> Self {
        self.page = Some(page.into());
        self
    }

    /// Decodes a reader path or a full URL pointing at one.
    ///
    /// Returns `None` when the input is not a reader location at all.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        let path = if input.contains("://") {
            Url::parse(input).ok()?.path().to_string()
        } else {
            strip_query_and_fragment(input).to_string()
        };

        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        let (slug, rest) = match segments.as_slice() {
            [MANGA_SEGMENT, slug, READ_SEGMENT, rest @ ..] if rest.len() <= 2 => (*slug, rest),
            _ => return None,
        };

        let slug = decode_segment(slug)?;
        if slug.trim().is_empty() {
            return None;
        }

        let episode = rest
            .first()
            .and_then(|raw| decode_segment(raw))
            .map(EpisodeNumber::new)
            .filter(|number| !number.is_empty());
        let page = if episode.is_some() {
            rest.get(1).and_then(|raw| decode_segment(raw))
        } else {
            None
        };

        Some(Self {
            slug,
            episode,
            page,
        })
    }

    pub fn to_path(&self) -> String {
        let mut path = reader_root(&self.slug);
        if let Some(episode) = &self.episode {
            path.push('/');
            path.push_str(&urlencoding::encode(episode.as_str()));
            if let Some(page) = &self.page {
                path.push('/');
                path.push_str(&urlencoding::encode(page));
            }
        }
        path
    }
}

/// Encodes the location for a manga and an optional `(episode, page)` selection.
pub fn reader_path(slug: &str, selection: Option<(&EpisodeNumber, usize)>) -> String {
    match selection {
        Some((episode, page)) => format!(
            "{}/{}/{}",
            reader_root(slug),
            urlencoding::encode(episode.as_str()),
            page
        ),
        None => reader_root(slug),
    }
}

/// Location of the manga's own overview page.
pub fn manga_path(slug: &str) -> String {
    format!("/{MANGA_SEGMENT}/{}", urlencoding::encode(slug))
}

/// Image path relative to the image host, derived only from its inputs.
pub fn page_image_path(slug: &str, episode: &EpisodeNumber, filename: &str) -> String {
    format!(
        "{MANGA_SEGMENT}/{}/{}/{}",
        urlencoding::encode(slug),
        urlencoding::encode(episode.as_str()),
        urlencoding::encode(filename)
    )
}

/// Comment thread key for an episode.
pub fn comments_identifier(slug: &str, episode: &EpisodeNumber) -> String {
    format!("{MANGA_SEGMENT}/{slug}/{episode}")
}

/// Accepts a requested page only if it is an integer within `1..=page_count`.
///
/// Everything else (missing, non-numeric, zero, negative, too large) falls
/// back to page 1.
pub fn resolve_page(raw: Option<&str>, page_count: usize) -> usize {
    raw.and_then(|raw| raw.trim().parse::<usize>().ok())
        .filter(|page| (1..=page_count).contains(page))
        .unwrap_or(1)
}

fn reader_root(slug: &str) -> String {
    format!(
        "/{MANGA_SEGMENT}/{}/{READ_SEGMENT}",
        urlencoding::encode(slug)
    )
}

fn strip_query_and_fragment(input: &str) -> &str {
    input
        .split(['?', '#'])
        .next()
        .unwrap_or(input)
}

fn decode_segment(raw: &str) -> Option<String> {
    urlencoding::decode(raw).ok().map(|decoded| decoded.into_owned())
}
