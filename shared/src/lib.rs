//! # Shared Trading Types
//!
//! Types exchanged between the buy widget and the collaborators around it
//! (the store that owns selection/quotes/balances, the exchange wrappers and
//! the chain session). All DTOs serialize with `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects
//!   - **[`dto::token`]**: Asset tokens and token pairs
//!   - **[`dto::quote`]**: Quotes, quote requests and signed orders
//!   - **[`dto::chain`]**: Network ids, receipts and account balances
//! - **[`utils`]**: Display helpers
//!   - **[`utils::format_address`]**: Shorten account addresses for display
//!   - **[`utils::format_token_amount`]**: Render base-unit amounts as decimals
//!
//! ## Wire Format
//!
//! - Order and receipt fields use **camelCase** in JSON (the exchange and
//!   JSON-RPC conventions)
//! - Token symbols serialize as upper-case strings (`"WETH"`, `"ZRX"`)
//! - Amounts are `U256` and serialize as `0x`-prefixed hex strings
//!
//! ```rust
//! use shared::{AssetToken, TokenPair};
//!
//! let pair = TokenPair::new(AssetToken::Zrx, AssetToken::Weth);
//! let json = serde_json::to_string(&pair).unwrap();
//! assert_eq!(json, r#"{"base":"ZRX","quote":"WETH"}"#);
//! ```

pub mod dto;
pub mod utils;

pub use dto::*;
pub use utils::*;

/// Re-exported so downstream crates name amounts and addresses with the
/// same types.
pub use alloy_primitives::{Address, Bytes, TxHash, U256};
