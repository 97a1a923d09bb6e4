//! # Data Transfer Objects (DTOs)
//!
//! ## Module Organization
//!
//! - [`token`] - Asset tokens and trading pairs
//! - [`quote`] - Quotes, quote requests and the signed orders they carry
//! - [`chain`] - Network ids, transaction receipts and balances
//!
//! ## Serialization Format
//!
//! - **Field naming**: camelCase for exchange/JSON-RPC payloads, snake_case elsewhere
//! - **Optional fields**: Omitted when `None`
//! - **Enums**: Token symbols serialize to upper-case strings

pub mod chain;
pub mod quote;
pub mod token;

pub use chain::*;
pub use quote::*;
pub use token::*;
