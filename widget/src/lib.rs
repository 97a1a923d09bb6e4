//! # Buy Tokens Widget
//!
//! A "buy tokens" form for a decentralized-exchange trading interface, built
//! on egui. The widget shows the account's balances, lets the user pick a
//! token and an amount, keeps the store's quote in sync with the selection
//! and fills the quoted order on chain.
//!
//! ## Structure
//!
//! - **[`app`]**: `BuyWidget` orchestrator, state, handlers and async tasks
//! - **[`core`]**: `WidgetError` and the collaborator traits
//! - **[`services`]**: dispatcher, forwarder registry, JSON-RPC adapters, store
//! - **[`ui`]**: egui rendering
//! - **[`config`]**: host configuration from the environment
//! - **[`debug`]**: logging setup
//! - **[`utils`]**: runtime and amount parsing
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use trade_widget::app::{BuyWidget, BuyWidgetProps};
//! use trade_widget::services::dispatcher::ChannelDispatcher;
//! use trade_widget::services::forwarder::{ContractArtifacts, ForwarderRegistry};
//! use trade_widget::services::rpc::{RpcChainSession, RpcClient, RpcConnector};
//! use trade_widget::utils::runtime::shared_runtime;
//! use std::time::Duration;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = RpcClient::new("http://127.0.0.1:8545")?;
//! let artifacts = ContractArtifacts::load("artifacts/exchange.json")?;
//! let forwarders = Arc::new(ForwarderRegistry::new(artifacts, Arc::new(RpcConnector::new(client.clone()))));
//! let session = Arc::new(RpcChainSession::new(client, Duration::from_secs(1), Duration::from_secs(300)));
//! let (dispatcher, _actions) = ChannelDispatcher::new();
//!
//! let _widget = BuyWidget::new(
//!     Arc::new(dispatcher),
//!     forwarders,
//!     session,
//!     None,
//!     shared_runtime()?.handle().clone(),
//! );
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod config;
pub mod core;
pub mod debug;
pub mod services;
pub mod ui;
pub mod utils;

pub use app::{BuyWidget, BuyWidgetProps, SubmitOutcome, SubmitStatus};
pub use config::WidgetConfig;
pub use core::error::{ErrorKind, Result, WidgetError};
