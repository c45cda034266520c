//! Logging utilities and structured logging support
//!
//! The library only emits records through the `log` facade; installing a
//! logger is left to the application.

pub use log::{debug, info, warn, error, trace};

/// Initialize logging, falling back to `default_filter` when `RUST_LOG` is unset
///
/// Safe to call more than once; if a logger is already installed it is kept.
pub fn init_with_default(default_filter: &str) {
    let env = env_logger::Env::default().default_filter_or(default_filter);
    if let Err(err) = env_logger::Builder::from_env(env).try_init() {
        log::debug!("Keeping existing logger: {}", err);
    }
}
