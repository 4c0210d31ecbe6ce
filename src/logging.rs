//! Tracing subscriber setup

use crate::config::EngineConfig;
use tracing::{debug, trace};
use tracing_subscriber::EnvFilter;

/// Map a `-v` count to a filter directive
pub fn filter_for_verbosity(verbosity: u8, base: &str) -> String {
    match verbosity {
        0 => base.to_string(),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

/// Filter directive for `verbosity`, falling back to the configured `log_filter`
pub fn directive_for(verbosity: u8, config: &EngineConfig) -> String {
    filter_for_verbosity(verbosity, &config.log_filter)
}

/// Install the global fmt subscriber.
///
/// `RUST_LOG` wins over the computed filter when set. Calling this more than
/// once is harmless; later calls leave the first subscriber in place.
pub fn init_tracing(verbosity: u8, config: &EngineConfig) {
    let directive = directive_for(verbosity, config);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&directive));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbosity >= 2)
        .with_thread_ids(verbosity >= 3)
        .with_line_number(verbosity >= 3)
        .try_init()
        .is_ok();

    if installed {
        debug!("seqflow tracing initialised with verbosity level: {}", verbosity);
        trace!("Filter directive: {}", directive);
    }
}
