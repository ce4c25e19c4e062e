//! Logging configuration for addressbook.
//!
//! Log output goes to stderr so it never interleaves with the menu and
//! prompts written to stdout.

use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// How much of the crate's own logging reaches stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Errors only (`-q`).
    Quiet,
    /// Warnings and above; silent during a normal menu session.
    #[default]
    Normal,
    /// Load, save and search events (`-v`).
    Verbose,
    /// Everything (`-vv`).
    Trace,
}

impl Verbosity {
    /// Convert verbosity to tracing level filter.
    #[must_use]
    pub fn to_level_filter(&self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::WARN,
            Self::Verbose => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }
}

/// Filter directive used when `RUST_LOG` is unset.
///
/// Only the `addressbook` target is enabled; dependency crates stay silent.
#[must_use]
pub fn default_filter(verbosity: Verbosity) -> String {
    format!("addressbook={}", verbosity.to_level_filter())
}

/// Install the stderr subscriber for the `addrbook` binary.
///
/// At the default [`Verbosity::Normal`] a menu session prints nothing to
/// stderr: loads, saves, searches and a missing contact file all log at
/// debug. `-v` surfaces those events. A set
/// `RUST_LOG` replaces [`default_filter`] entirely, e.g.
/// `RUST_LOG=addressbook::directory=trace`.
///
/// Calling this more than once keeps the first subscriber.
///
/// ```no_run
/// use addressbook::{init_logging, logging::Verbosity};
///
/// init_logging(Verbosity::Verbose);
/// ```
pub fn init_logging(verbosity: Verbosity) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbosity)));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false),
    );

    let _ = subscriber.try_init();
}

/// Initialize logging for tests.
#[cfg(test)]
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("warn")
        .with_test_writer()
        .try_init();
}
