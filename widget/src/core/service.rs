//! # Service Traits
//!
//! The external collaborators of the buy widget. Production code wires the
//! JSON-RPC adapters from [`crate::services`]; tests substitute hand-written
//! mocks.

use crate::core::error::Result;
use crate::services::dispatcher::StoreAction;
use crate::services::forwarder::ForwarderDeployment;
use async_trait::async_trait;
use shared::{Address, AssetToken, NetworkId, QuoteRequest, SignedOrder, TransactionReceipt, TxHash, U256};
use std::sync::Arc;

/// Single emission point for every notification the widget sends to the
/// surrounding store.
pub trait Dispatcher: Send + Sync {
    /// Deliver one action to the store
    fn dispatch(&self, action: StoreAction) -> Result<()>;

    /// The user picked a different token to buy
    fn update_selected_token(&self, token: AssetToken) -> Result<()> {
        self.dispatch(StoreAction::UpdateSelectedToken(token))
    }

    /// The current quote is missing or stale
    fn quote_requested(&self, request: QuoteRequest) -> Result<()> {
        self.dispatch(StoreAction::QuoteRequested(request))
    }

    /// A fill transaction was broadcast
    fn transaction_submitted(&self, tx_hash: TxHash) -> Result<()> {
        self.dispatch(StoreAction::TransactionSubmitted(tx_hash))
    }

    /// A fill transaction was included in a block
    fn transaction_mined(&self, receipt: TransactionReceipt) -> Result<()> {
        self.dispatch(StoreAction::TransactionMined(receipt))
    }
}

/// Order-fill handle bound to one network's exchange deployment.
#[async_trait]
pub trait OrderFiller: Send + Sync {
    /// Fill `order` for `fill_amount` base units on behalf of `taker`,
    /// returning the hash of the broadcast transaction.
    async fn fill_order(&self, order: &SignedOrder, fill_amount: U256, taker: Address) -> Result<TxHash>;
}

/// Builds order-fill handles from deployment addresses.
pub trait ForwarderConnector: Send + Sync {
    fn connect(&self, network_id: NetworkId, deployment: &ForwarderDeployment) -> Result<Arc<dyn OrderFiller>>;
}

/// Chain access used to wait for confirmations.
#[async_trait]
pub trait ChainSession: Send + Sync {
    /// Resolve once `tx_hash` has been mined, with its receipt
    async fn await_transaction_mined(&self, tx_hash: TxHash) -> Result<TransactionReceipt>;
}
