//! # Store Dispatcher
//!
//! Actions the widget emits towards the surrounding store, and a
//! channel-backed [`Dispatcher`] that delivers them.

use crate::core::error::{Result, WidgetError};
use crate::core::service::Dispatcher;
use async_channel::{Receiver, Sender};
use shared::{AssetToken, QuoteRequest, TransactionReceipt, TxHash};

/// Notification sent from the widget to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreAction {
    UpdateSelectedToken(AssetToken),
    QuoteRequested(QuoteRequest),
    TransactionSubmitted(TxHash),
    TransactionMined(TransactionReceipt),
}

impl StoreAction {
    /// Short name for log lines
    pub fn name(&self) -> &'static str {
        match self {
            StoreAction::UpdateSelectedToken(_) => "update_selected_token",
            StoreAction::QuoteRequested(_) => "quote_requested",
            StoreAction::TransactionSubmitted(_) => "transaction_submitted",
            StoreAction::TransactionMined(_) => "transaction_mined",
        }
    }
}

/// Dispatcher forwarding every action into an unbounded channel.
///
/// Sending never blocks, so it is safe from both the UI thread and the
/// submit task.
#[derive(Debug, Clone)]
pub struct ChannelDispatcher {
    tx: Sender<StoreAction>,
}

impl ChannelDispatcher {
    /// Create a dispatcher and the receiving end consumed by the store
    pub fn new() -> (Self, Receiver<StoreAction>) {
        let (tx, rx) = async_channel::unbounded();
        (Self { tx }, rx)
    }
}

impl Dispatcher for ChannelDispatcher {
    fn dispatch(&self, action: StoreAction) -> Result<()> {
        let name = action.name();
        tracing::debug!(action = name, "Dispatching store action");
        self.tx
            .try_send(action)
            .map_err(|e| WidgetError::Dispatch(format!("{}: {}", name, e)))
    }
}
