// Diagnostic output setup

use tracing::Level;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

/// How diagnostics are reported
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogSettings {
    pub verbose: bool,
    pub color: bool,
    /// Stdout carries a JSON document, so diagnostics must not be written there
    pub json: bool,
}

impl LogSettings {
    pub fn level(&self) -> Level {
        if self.verbose {
            Level::DEBUG
        } else {
            Level::INFO
        }
    }

    /// Diagnostics are interleaved with the text output on stdout, and moved
    /// to stderr when stdout is JSON
    pub fn writer(&self) -> BoxMakeWriter {
        if self.json {
            BoxMakeWriter::new(std::io::stderr)
        } else {
            BoxMakeWriter::new(std::io::stdout)
        }
    }

    /// `RUST_LOG` takes precedence over the verbosity flag
    pub fn filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.level().as_str().to_lowercase()))
    }
}

/// Install the global subscriber
pub fn init(settings: LogSettings) {
    let result = tracing_subscriber::fmt()
        .with_env_filter(settings.filter())
        .with_writer(settings.writer())
        .with_ansi(settings.color)
        .with_target(false)
        .without_time()
        .try_init();

    if result.is_err() {
        tracing::debug!("Logging was already initialized");
    }
}
