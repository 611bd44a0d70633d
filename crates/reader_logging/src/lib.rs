#![deny(missing_docs)]
//! Shared logging utilities for the reader workspace.
//!
//! This crate provides the `reader_*` logging macros used by the core, the
//! engine and the terminal front-end, plus a minimal test initializer for the
//! global logger. Log sinks for the binary are configured by `reader_app`.

/// Log target used by navigation and session events.
pub const NAVIGATION_TARGET: &str = "reader::navigation";

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! reader_trace {
    ($($arg:tt)*) => {{
        log::trace!($($arg)*);
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! reader_debug {
    ($($arg:tt)*) => {{
        log::debug!($($arg)*);
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! reader_info {
    ($($arg:tt)*) => {{
        log::info!($($arg)*);
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! reader_warn {
    ($($arg:tt)*) => {{
        log::warn!($($arg)*);
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! reader_error {
    ($($arg:tt)*) => {{
        log::error!($($arg)*);
    }};
}

/// Logs a navigation transition at debug level under [`NAVIGATION_TARGET`].
#[macro_export]
macro_rules! reader_nav {
    ($($arg:tt)*) => {{
        log::debug!(target: $crate::NAVIGATION_TARGET, $($arg)*);
    }};
}

/// Initializes a simple terminal logger for use in unit tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    // Use debug level in debug builds, info in release builds.
    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // Ignore the error if a logger was already set by another test.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}
