//! Tracing subscriber setup

use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::config::LogFormat;

pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

/// Initialize the global subscriber.
///
/// `RUST_LOG` wins when set; otherwise the configured level applies to this
/// crate and the HTTP trace layer, with dependencies kept at `warn`.
pub fn init_logging(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(&config.level));

    match config.format {
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().json().with_span_events(FmtSpan::CLOSE))
                .init();
        }
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().pretty().with_target(true))
                .init();
        }
    }

    tracing::info!("Logging initialized with level: {}", config.level);
}

fn default_filter(level: &str) -> EnvFilter {
    EnvFilter::new(default_directives(level))
}

fn default_directives(level: &str) -> String {
    format!(
        "warn,{crate_name}={level},tower_http={level}",
        crate_name = env!("CARGO_CRATE_NAME"),
    )
}
