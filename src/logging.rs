use tracing_subscriber::EnvFilter;

use crate::error::AppError;

pub const LOG_ENV: &str = "KIRA_SENTIMENT_LOG";

/// `KIRA_SENTIMENT_LOG` wins over the verbosity flag when set.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

pub fn init(verbosity: u8) -> Result<(), AppError> {
    let filter = match std::env::var(LOG_ENV) {
        Ok(spec) if !spec.trim().is_empty() => {
            EnvFilter::try_new(&spec).map_err(|e| AppError::LogFilter(e.to_string()))?
        }
        _ => EnvFilter::new(default_directive(verbosity)),
    };
    // A second init in the same process keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
    Ok(())
}
