//! Tracing setup and structured run logging.
//!
//! Logs always go to stderr; stdout is reserved for reports.

use tracing::{info, warn, Span};
use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize tracing with colored output by default, JSON when
/// `LOG_FORMAT=json`.
pub fn init_tracing() {
    let use_json = std::env::var("LOG_FORMAT")
        .map(|v| v.to_lowercase() == "json")
        .unwrap_or(false);

    let env_filter = EnvFilter::from_default_env().add_directive(imgmap_directive());

    if use_json {
        tracing_subscriber::registry()
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .with(env_filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(true)
                    .with_target(true)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false),
            )
            .with(env_filter)
            .init();
    }
}

fn imgmap_directive() -> Directive {
    // literal directive, always parses
    "imgmap=info"
        .parse()
        .unwrap_or_else(|_| Directive::from(LevelFilter::INFO))
}

/// Logger for one analysis run, tagged with where the regions came from.
#[derive(Debug, Clone)]
pub struct RunLogger {
    source: String,
    operation: String,
}

impl RunLogger {
    /// # Arguments
    /// * `source` - Regions file path, or `builtin`
    /// * `operation` - The type of operation (e.g., "analyze")
    pub fn new(source: &str, operation: &str) -> Self {
        Self {
            source: source.to_string(),
            operation: operation.to_string(),
        }
    }

    pub fn log_start(&self, message: &str) {
        info!(
            source = %self.source,
            operation = %self.operation,
            "Run started: {}", message
        );
    }

    pub fn log_warning(&self, message: &str) {
        warn!(
            source = %self.source,
            operation = %self.operation,
            "Run warning: {}", message
        );
    }

    pub fn log_completion(&self, message: &str) {
        info!(
            source = %self.source,
            operation = %self.operation,
            "Run completed: {}", message
        );
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn operation(&self) -> &str {
        &self.operation
    }

    pub fn create_span(&self) -> Span {
        tracing::info_span!(
            "run",
            source = %self.source,
            operation = %self.operation
        )
    }
}
