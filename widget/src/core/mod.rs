//! # Core Abstractions
//!
//! Error types and collaborator traits shared by every layer of the widget.
//!
//! - **[`error`]**: `WidgetError`, `ErrorKind` and the `Result<T>` alias
//! - **[`service`]**: traits for the dispatcher, order-fill handle and chain
//!   session, injected once when the widget is constructed
//!
//! ## Dependency Injection
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use trade_widget::core::service::Dispatcher;
//! use trade_widget::services::dispatcher::ChannelDispatcher;
//!
//! let (dispatcher, actions) = ChannelDispatcher::new();
//! let dispatcher: Arc<dyn Dispatcher> = Arc::new(dispatcher);
//! ```

pub mod error;
pub mod service;

pub use error::{ErrorKind, Result, WidgetError};
pub use service::{ChainSession, Dispatcher, ForwarderConnector, OrderFiller};
