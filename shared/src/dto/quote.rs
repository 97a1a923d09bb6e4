use alloy_primitives::{Address, Bytes, U256};
use serde::{Deserialize, Serialize};

use super::token::TokenPair;

/// An exchange order signed by its maker, ready to be filled by a taker.
///
/// Field names follow the exchange's JSON order format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignedOrder {
    pub exchange_address: Address,
    pub maker_address: Address,
    pub taker_address: Address,
    pub fee_recipient_address: Address,
    pub sender_address: Address,
    pub maker_asset_amount: U256,
    pub taker_asset_amount: U256,
    pub maker_fee: U256,
    pub taker_fee: U256,
    pub expiration_time_seconds: U256,
    pub salt: U256,
    pub maker_asset_data: Bytes,
    pub taker_asset_data: Bytes,
    pub signature: Bytes,
}

/// A priced proposal for a token pair, carrying the orders that can fill it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub pair: TokenPair,
    /// Base-asset amount the quote was priced for
    pub amount: U256,
    pub orders: Vec<SignedOrder>,
}

impl Quote {
    /// The order a fill is executed against
    pub fn first_order(&self) -> Option<&SignedOrder> {
        self.orders.first()
    }
}

/// Request for a fresh quote, emitted when the current one is missing or stale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRequest {
    /// Purchase amount in base units; `None` when the amount was never set
    pub amount: Option<U256>,
    pub pair: TokenPair,
}
