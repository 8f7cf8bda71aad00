use crate::error::RaterError;
use tracing_subscriber::EnvFilter;

/// Picks the filter directive: `-q` wins, then `-v`/`-vv`, then the configured level.
pub fn level_for(verbose: u8, quiet: bool, configured: &str) -> String {
    if quiet {
        return "error".to_string();
    }
    match verbose {
        0 => configured.to_string(),
        1 => "info".to_string(),
        _ => "debug".to_string(),
    }
}

/// Installs the global subscriber writing compact lines to stderr. `RUST_LOG`
/// overrides `level` when set.
pub fn init(level: &str) -> Result<(), RaterError> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level).map_err(|err| {
            RaterError::Telemetry(format!("invalid log level/filter '{level}': {err}"))
        })?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(|err| RaterError::Telemetry(err.to_string()))
}
