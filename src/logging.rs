// src/logging.rs
use env_logger::{Builder, Env};
use log::LevelFilter;

/// Environment variable that overrides the level chosen by `-v`/`-q`.
pub const LOG_ENV: &str = "LINE_HISTOGRAM_LOG";

/// Install the stderr logger. A second call is a no-op.
pub fn init(level: LevelFilter) {
    let _ = Builder::new()
        .filter_level(level)
        .parse_env(Env::new().filter(LOG_ENV))
        .format_timestamp(None)
        .format_target(false)
        .try_init();
}
