//! Diagnostic logging to stderr, filtered by `MOODTRACKER_LOG`.

use env_logger::Env;

const LOG_ENV: &str = "MOODTRACKER_LOG";

pub fn init() {
    env_logger::Builder::from_env(Env::default().filter_or(LOG_ENV, "warn"))
        .format_target(false)
        .format_timestamp(None)
        .init();
}
