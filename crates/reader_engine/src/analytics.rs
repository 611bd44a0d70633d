use std::sync::{Arc, Mutex};

/// A page-view notification sent after each location rewrite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub path: String,
    /// RFC 3339 timestamp supplied by the caller.
    pub viewed_at: String,
}

/// Analytics collaborator. Implementations must not block navigation.
pub trait PageViewReporter: Send + Sync {
    fn page_view(&self, view: PageView);
}

/// Reports page views to the log under the `reader::analytics` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogPageViewReporter;

impl PageViewReporter for LogPageViewReporter {
    fn page_view(&self, view: PageView) {
        log::info!(target: "reader::analytics", "pageview path={} at={}", view.path, view.viewed_at);
    }
}

impl<T: PageViewReporter + ?Sized> PageViewReporter for Arc<T> {
    fn page_view(&self, view: PageView) {
        (**self).page_view(view);
    }
}

/// Keeps every page view in memory; lets callers inspect what was reported.
impl PageViewReporter for Mutex<Vec<PageView>> {
    fn page_view(&self, view: PageView) {
        if let Ok(mut views) = self.lock() {
            views.push(view);
        }
    }
}
