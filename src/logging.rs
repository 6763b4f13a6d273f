use std::fs;
use std::path::Path;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::DEFAULT_LOG_FILE;

/// Initializes console logging, plus daily-rotated JSON file logs when a
/// log directory is given.
pub fn init_logging(log_dir: Option<&Path>) {
    let file_layer = log_dir.and_then(|dir| {
        if let Err(e) = fs::create_dir_all(dir) {
            eprintln!("Could not create log directory {}: {}", dir.display(), e);
            return None;
        }
        let file_appender = tracing_appender::rolling::daily(dir, DEFAULT_LOG_FILE);
        let (non_blocking_writer, guard) = tracing_appender::non_blocking(file_appender);
        // The guard flushes on drop; keep it for the whole process
        std::mem::forget(guard);
        Some(fmt::layer().json().with_writer(non_blocking_writer))
    });

    // stdout carries the progress and summary lines, diagnostics go to stderr
    let console_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

    // Respect RUST_LOG if set; otherwise info for our crate
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("news_prep=info,corpus_stats=info,warn"));

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(console_layer)
        .try_init();
}
