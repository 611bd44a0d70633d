use std::cmp::Ordering;
use std::fmt;

/// Episode key as it appears in the URL and in the episode list.
///
/// The backend is free to use non-contiguous or fractional numbers (`12.5`),
/// so the key stays textual and only ordering looks at the numeric value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EpisodeNumber(String);

impl EpisodeNumber {
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(raw.as_ref().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn numeric(&self) -> Option<f64> {
        self.0.parse::<f64>().ok().filter(|value| value.is_finite())
    }

    /// Numeric episodes first in ascending order, then the rest by text.
    pub fn sort_cmp(&self, other: &Self) -> Ordering {
        match (self.numeric(), other.numeric()) {
            (Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.0.cmp(&other.0),
        }
    }
}

impl fmt::Display for EpisodeNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for EpisodeNumber {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for EpisodeNumber {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

/// Release category that overrides the normal "Episode N" title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecialLabel {
    Batch,
    Other(String),
}

impl SpecialLabel {
    /// Parses the backend's raw label; blank labels mean "no label".
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        if trimmed.eq_ignore_ascii_case("batch") || trimmed.eq_ignore_ascii_case("toplu") {
            Some(Self::Batch)
        } else {
            Some(Self::Other(trimmed.to_string()))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub filename: String,
}

impl Page {
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Episode {
    pub id: Option<u64>,
    pub number: EpisodeNumber,
    pub name: Option<String>,
    pub special: Option<SpecialLabel>,
    pub pages: Vec<Page>,
}

impl Episode {
    pub fn new(number: impl Into<EpisodeNumber>, pages: Vec<Page>) -> Self {
        Self {
            id: None,
            number: number.into(),
            name: None,
            special: None,
            pages,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_special(mut self, special: SpecialLabel) -> Self {
        self.special = Some(special);
        self
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Short title, e.g. `Episode 12`, `OVA 3` or `Batch release`.
    pub fn title(&self) -> String {
        match &self.special {
            Some(SpecialLabel::Batch) => "Batch release".to_string(),
            Some(SpecialLabel::Other(label)) => {
                format!("{} {}", label.to_uppercase(), self.number)
            }
            None => format!("Episode {}", self.number),
        }
    }

    /// Title used in the episode selector; appends the episode name if any.
    pub fn selector_label(&self) -> String {
        match self.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => format!("{}: {}", self.title(), name),
            _ => self.title(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MangaInfo {
    pub name: String,
    pub cover: String,
}

/// Drops episodes without pages and orders the rest by episode number.
///
/// Returns the kept episodes and how many were dropped.
pub(crate) fn prepare_episodes(episodes: Vec<Episode>) -> (Vec<Episode>, usize) {
    let total = episodes.len();
    let mut kept: Vec<Episode> = episodes
        .into_iter()
        .filter(|episode| !episode.pages.is_empty())
        .collect();
    kept.sort_by(|a, b| a.number.sort_cmp(&b.number));
    let dropped = total - kept.len();
    (kept, dropped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_episodes_sort_before_text() {
        let mut numbers: Vec<EpisodeNumber> = ["10", "extra", "2", "2.5"]
            .into_iter()
            .map(EpisodeNumber::from)
            .collect();
        numbers.sort_by(EpisodeNumber::sort_cmp);
        let sorted: Vec<&str> = numbers.iter().map(EpisodeNumber::as_str).collect();
        assert_eq!(sorted, vec!["2", "2.5", "10", "extra"]);
    }

    #[test]
    fn titles_follow_special_label() {
        let plain = Episode::new("4", vec![Page::new("a.jpg")]).with_name("Arrival");
        assert_eq!(plain.title(), "Episode 4");
        assert_eq!(plain.selector_label(), "Episode 4: Arrival");

        let batch = Episode::new("1", vec![Page::new("a.jpg")])
            .with_special(SpecialLabel::parse("Toplu").unwrap());
        assert_eq!(batch.title(), "Batch release");

        let ova = Episode::new("2", vec![Page::new("a.jpg")])
            .with_special(SpecialLabel::parse("ova").unwrap());
        assert_eq!(ova.title(), "OVA 2");
        assert_eq!(SpecialLabel::parse("  "), None);
    }

    #[test]
    fn prepare_drops_empty_episodes() {
        let (kept, dropped) = prepare_episodes(vec![
            Episode::new("3", vec![Page::new("x.jpg")]),
            Episode::new("1", Vec::new()),
            Episode::new("2", vec![Page::new("y.jpg")]),
        ]);
        assert_eq!(dropped, 1);
        let numbers: Vec<&str> = kept.iter().map(|e| e.number.as_str()).collect();
        assert_eq!(numbers, vec!["2", "3"]);
    }
}
