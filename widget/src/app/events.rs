//! # Widget Events
//!
//! Results sent from the submit task back to the UI thread.

use crate::app::state::Notice;
use crate::core::error::WidgetError;
use shared::{TransactionReceipt, TxHash};

/// Async task results, drained every frame by `BuyWidget::on_tick`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetEvent {
    /// The fill transaction was broadcast and is awaiting confirmation
    TransactionSubmitted(TxHash),
    /// The submit sequence ended, successfully or not
    SubmitFinished(Result<TransactionReceipt, WidgetError>),
    /// A store notification was refused; the sequence carried on
    Notice(Notice),
}
