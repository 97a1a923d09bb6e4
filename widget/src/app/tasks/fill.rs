//! # Fill Task
//!
//! The submit sequence: resolve the order-fill handle for the network, fill
//! the first order of the quote, report the transaction to the store, wait
//! for it to be mined and report the receipt.

use crate::app::events::WidgetEvent;
use crate::app::state::Notice;
use crate::core::error::{Result, WidgetError};
use crate::core::service::{ChainSession, Dispatcher};
use crate::services::forwarder::ForwarderRegistry;
use async_channel::Sender;
use shared::{Address, NetworkId, Quote, TransactionReceipt, U256};
use std::sync::Arc;
use tokio::runtime::Handle;

/// Collaborators used by the fill sequence
#[derive(Clone)]
pub(crate) struct FillContext {
    pub dispatcher: Arc<dyn Dispatcher>,
    pub forwarders: Arc<ForwarderRegistry>,
    pub session: Arc<dyn ChainSession>,
    pub events: Sender<WidgetEvent>,
}

/// Inputs captured when the user pressed submit
#[derive(Debug, Clone)]
pub(crate) struct FillRequest {
    pub network_id: NetworkId,
    pub taker: Address,
    pub quote: Option<Quote>,
    pub amount: Option<U256>,
}

/// Run the submit sequence to completion.
///
/// Stops at the first failing fill, confirmation or revert. A mined receipt
/// whose status reports a revert is still forwarded to the store before
/// resolving to [`WidgetError::Reverted`]. Store notifications never decide
/// the outcome: a refused one is logged and sent to the UI as a notice.
pub(crate) async fn run_fill(ctx: FillContext, request: FillRequest) -> Result<TransactionReceipt> {
    let quote = request.quote.ok_or(WidgetError::QuoteUnavailable)?;
    let order = quote.first_order().ok_or(WidgetError::EmptyQuote)?;
    let amount = request.amount.ok_or(WidgetError::MissingAmount)?;

    let filler = ctx.forwarders.resolve(request.network_id)?;

    tracing::info!(
        pair = %quote.pair,
        amount = %amount,
        taker = %request.taker,
        "Filling order"
    );
    let tx_hash = filler.fill_order(order, amount, request.taker).await?;

    // the UI may already be gone; the sequence still completes
    let _ = ctx.events.send(WidgetEvent::TransactionSubmitted(tx_hash)).await;
    if let Err(e) = ctx.dispatcher.transaction_submitted(tx_hash) {
        report_undelivered(&ctx, "transaction_submitted", e).await;
    }
    tracing::info!(tx = %tx_hash, "Transaction submitted, awaiting confirmation");

    let receipt = ctx.session.await_transaction_mined(tx_hash).await?;
    if let Err(e) = ctx.dispatcher.transaction_mined(receipt.clone()) {
        report_undelivered(&ctx, "transaction_mined", e).await;
    }

    if !receipt.is_success() {
        return Err(WidgetError::Reverted(tx_hash));
    }

    tracing::info!(tx = %tx_hash, block = ?receipt.block_number, "Transaction mined");
    Ok(receipt)
}

async fn report_undelivered(ctx: &FillContext, action: &str, error: WidgetError) {
    tracing::warn!(action, error = %error, "Store notification not delivered");
    let _ = ctx.events.send(WidgetEvent::Notice(Notice::from(&error))).await;
}

/// Spawn [`run_fill`] on `handle`, always reporting a
/// [`WidgetEvent::SubmitFinished`], including when the sequence panics.
pub(crate) fn execute_fill(handle: &Handle, ctx: FillContext, request: FillRequest) {
    let events = ctx.events.clone();
    let inner = handle.spawn(run_fill(ctx, request));

    handle.spawn(async move {
        let result = match inner.await {
            Ok(result) => result,
            Err(join_error) => {
                tracing::error!(error = %join_error, "Fill task aborted");
                Err(WidgetError::Internal(format!("fill task aborted: {}", join_error)))
            }
        };

        if let Err(e) = &result {
            tracing::error!(error = %e, "Submit failed");
        }
        let _ = events.send(WidgetEvent::SubmitFinished(result)).await;
    });
}
