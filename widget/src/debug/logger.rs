//! File-based logging initialization

use super::config::{LogConfig, DEFAULT_LOG_LEVEL, LOG_FILE_NAME};
use std::fs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Initialize the logging system.
///
/// Installs a daily-rotating, non-blocking file layer (plus an optional
/// stderr layer) and a panic hook. Keep the returned guard alive for the
/// lifetime of the program so buffered lines are flushed on exit.
///
/// Returns `None` when the log directory cannot be created or a global
/// subscriber is already installed; the widget then runs without file logs.
pub fn init(config: &LogConfig) -> Option<WorkerGuard> {
    if let Err(e) = fs::create_dir_all(&config.log_dir) {
        eprintln!("Warning: Failed to create log directory {}: {}", config.log_dir.display(), e);
        return None;
    }

    let file_appender = tracing_appender::rolling::daily(&config.log_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false);

    let stderr_layer = config
        .stderr
        .then(|| fmt::layer().with_writer(std::io::stderr).with_target(false).boxed());

    let installed = tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stderr_layer)
        .try_init();

    if let Err(e) = installed {
        eprintln!("Warning: Logging already initialized: {}", e);
        return None;
    }

    setup_panic_hook();

    tracing::info!(
        log_file = %config.log_file().display(),
        log_level = %config.log_level,
        "Logging initialized"
    );

    Some(guard)
}

/// Log panics with their location before running the default hook
fn setup_panic_hook() {
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let location = panic_info
            .location()
            .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
            .unwrap_or_else(|| "unknown location".to_string());

        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic payload".to_string()
        };

        let thread = std::thread::current();
        tracing::error!(
            location = %location,
            thread = thread.name().unwrap_or("unnamed"),
            "PANIC: {}",
            message
        );

        default_panic(panic_info);
    }));
}
