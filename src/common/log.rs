//! Logging utilities
//!
//! Logger initialization for the CLI binary. The filter level is decided
//! once, up front, from the verbosity flag; nothing toggles global logger
//! state around individual operations.

/// Initialize the logging system
///
/// `RUST_LOG` still wins when set, matching env_logger conventions. Log
/// lines go to stderr, so a report written to stdout stays clean.
pub fn init_logger(level: &str) {
    let env = env_logger::Env::default().filter_or("RUST_LOG", level);

    env_logger::Builder::from_env(env)
        .target(env_logger::Target::Stderr)
        .try_init()
        .ok();
}
