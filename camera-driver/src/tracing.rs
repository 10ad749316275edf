//! Logging setup for the camera driver.
//!
//! The daemon calls [`init_journald_or_stdout`] once before anything else
//! logs. Other modules pull the event macros in through
//! `use crate::tracing::prelude::*`.

use std::env;
use time::{macros::format_description, OffsetDateTime};
use tracing_subscriber::{
    filter::{EnvFilter, LevelFilter},
    fmt::{format::Writer, time::FormatTime},
    prelude::*,
};

pub mod prelude {
    #[allow(unused_imports)]
    pub use tracing::{debug, error, info, trace, warn};
}

use prelude::*;

/// Install the global subscriber.
///
/// Under systemd (`JOURNAL_STREAM` is set) events go to journald. Everywhere
/// else, or if the journald socket cannot be opened, they go to stdout.
pub fn init_journald_or_stdout() {
    if env::var_os("JOURNAL_STREAM").is_none() {
        init_stdout();
        return;
    }

    match tracing_journald::layer() {
        Ok(layer) => tracing_subscriber::registry().with(layer).init(),
        Err(e) => {
            init_stdout();
            error!(error = %e, "Failed to initialize journald logging, using stdout.");
        }
    }
}

// Filter with RUST_LOG, defaulting to INFO rather than the subscriber's ERROR.
fn init_stdout() {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .with_env_var("RUST_LOG")
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_timer(SecondsTimer))
        .init();
}

// Local wall-clock time to the second; the default UTC timestamp is too
// noisy for a daemon that logs one line per request.
struct SecondsTimer;

impl FormatTime for SecondsTimer {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
        let stamp = now
            .format(format_description!("[hour]:[minute]:[second]"))
            .map_err(|_| std::fmt::Error)?;
        w.write_str(&stamp)
    }
}
