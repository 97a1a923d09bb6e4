//! # Services
//!
//! Implementations of the collaborator traits and the store stand-in.
//!
//! - **[`dispatcher`]**: `StoreAction` and the channel-backed dispatcher
//! - **[`forwarder`]**: contract artifacts and the per-network handle registry
//! - **[`exchange`]**: `fillOrder` ABI encoding
//! - **[`rpc`]**: JSON-RPC order filler, connector and chain session
//! - **[`store`]**: `TradeStore`, the props owner used by the demo host

pub mod dispatcher;
pub mod exchange;
pub mod forwarder;
pub mod rpc;
pub mod store;
