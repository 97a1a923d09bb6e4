//! # Logging
//!
//! File-based structured logging for the buy widget host.
//!
//! - Daily-rotated log file under `logs/` (override with `WIDGET_LOG_DIR`)
//! - Level filter from `RUST_LOG`, default `trade_widget=info,warn`
//! - Panic hook that records the panic location before the default handler
//!
//! ```rust,no_run
//! use trade_widget::debug::{init_logger, LogConfig};
//!
//! let _guard = init_logger(&LogConfig::from_env());
//! tracing::info!(network = 50, "Widget started");
//! ```

pub mod config;
pub mod logger;

pub use config::LogConfig;
pub use logger::init as init_logger;
