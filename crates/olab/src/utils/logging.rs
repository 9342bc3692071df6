use log::{LevelFilter, SetLoggerError};

/// Environment variable holding the `env_logger` filter directives.
pub const LOG_ENV_VAR: &str = "OLAB_LOG";

const DEFAULT_FILTER: &str = "error,olab=info";

/// Install an `env_logger` for the process.
///
/// Filters default to `error,olab=info` and are read from `OLAB_LOG` when set,
/// e.g. `OLAB_LOG=olab=trace`. Fails if a logger is already installed, so
/// callers that may race (tests, embedding applications) can ignore the error.
pub fn init_logging() -> Result<(), SetLoggerError> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or(LOG_ENV_VAR, DEFAULT_FILTER))
        .try_init()
}
