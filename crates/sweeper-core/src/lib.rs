//! Core library for sweeper, a best-effort janitor for stale cloud
//! resources.
//!
//! The pieces fit together like this: `resources` describes the five
//! resource kinds to the generic engine in `sweep`, which talks to the
//! management surfaces through the transport trait in `api`. Everything is
//! synchronous; a run is one sequential pass over kinds, locations, and
//! resources.

pub mod api;
pub mod errors;
pub mod events;
pub mod resources;
pub mod sweep;

pub use errors::{SweeperError, SweeperResult};
pub use sweep::{KindOutcome, SweepSummary, Sweeper, PROTECTION_LABEL};

/// Initialize the global tracing subscriber.
///
/// Quiet mode (the default for scheduled runs) logs warnings and errors
/// only; verbose mode enables info and debug. `RUST_LOG` overrides both.
pub fn init_logging(quiet: bool) {
    let default_directive = if quiet { "warn" } else { "info" };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
