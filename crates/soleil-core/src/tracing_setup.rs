use std::fs::OpenOptions;
use std::io;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Environment variable naming a file to append logs to.
pub const LOG_FILE_ENV: &str = "SOLEIL_LOG_FILE";

/// Where log lines go when no log file is configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    /// Write to stderr (headless use)
    Stderr,
    /// Drop log lines (the terminal belongs to the dashboard)
    Discard,
}

pub fn init_tracing(fallback: Fallback) -> io::Result<()> {
    let filter = || EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry();

    if let Ok(log_path) = std::env::var(LOG_FILE_ENV) {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(true)
            .with_filter(filter());

        registry.with(file_layer).init();
        return Ok(());
    }

    match fallback {
        Fallback::Stderr => {
            let stderr_layer = fmt::layer()
                .with_writer(io::stderr)
                .with_target(true)
                .with_filter(filter());
            registry.with(stderr_layer).init();
        }
        Fallback::Discard => registry.init(),
    }
    Ok(())
}
