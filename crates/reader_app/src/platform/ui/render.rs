use reader_core::{ReaderPageView, ReaderView, ReadingMode, SelectedEpisodeView};
use reader_engine::ApiRoutes;

/// Renders the reader view as terminal lines.
pub fn render(view: &ReaderView, routes: &ApiRoutes, location: Option<&str>) -> Vec<String> {
    match view {
        ReaderView::Idle => vec![
            "No manga open. Use `open /manga/<slug>/read` to start reading.".to_string(),
        ],
        ReaderView::Loading { slug } => vec![format!("Loading episodes of {slug}...")],
        ReaderView::NoData { slug } => vec![format!("No episode data for {slug}.")],
        ReaderView::Reader(page) => render_page(page, routes, location),
    }
}

fn render_page(page: &ReaderPageView, routes: &ApiRoutes, location: Option<&str>) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push(format!("== {} ==", page.document_title));
    if let Some(location) = location {
        lines.push(format!("Location: {location}"));
    }
    lines.push(format!("Manga page: {}", page.manga_link));
    lines.push(format!("Mode: {}", mode_label(page.reading_mode)));

    lines.push("Episodes:".to_string());
    for option in &page.episodes {
        let marker = if option.selected { '*' } else { ' ' };
        lines.push(format!("  {marker} {:<6} {}", option.number, option.label));
    }

    match &page.selected {
        Some(selected) => render_selected(&mut lines, selected, routes),
        None => lines.push("Select the episode you want to read (e <number>).".to_string()),
    }
    lines
}

fn render_selected(lines: &mut Vec<String>, selected: &SelectedEpisodeView, routes: &ApiRoutes) {
    let previous = if selected.has_previous { "< p" } else { "   " };
    let next = if selected.has_next { "n >" } else { "   " };
    lines.push(format!(
        "{previous}  {} page {}/{}  {next}",
        selected.title, selected.page_number, selected.page_count
    ));
    for image in &selected.images {
        let url = routes
            .page_image_url(&image.image_path)
            .map(|url| url.to_string())
            .unwrap_or_else(|_| image.image_path.clone());
        lines.push(format!("  [{}] {}", image.page_number, url));
    }
    lines.push(format!("Comments thread: {}", selected.comments_identifier));
}

fn mode_label(mode: ReadingMode) -> &'static str {
    match mode {
        ReadingMode::PageByPage => "page-by-page (m: continuous)",
        ReadingMode::Continuous => "continuous (m: page-by-page)",
    }
}
