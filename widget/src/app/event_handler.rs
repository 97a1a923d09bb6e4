//! # Event Handler
//!
//! Applies results from the submit task to the widget state. Each event takes
//! the write lock once, for the duration of a single assignment.

use crate::app::events::WidgetEvent;
use crate::app::state::{SubmitStatus, WidgetState};
use parking_lot::RwLock;
use std::sync::Arc;

pub(crate) fn apply_event(state: &Arc<RwLock<WidgetState>>, event: &WidgetEvent) {
    let mut state = state.write();
    match event {
        WidgetEvent::TransactionSubmitted(tx_hash) => {
            if state.status == SubmitStatus::Submitting {
                state.status = SubmitStatus::AwaitingConfirmation(*tx_hash);
            }
        }
        WidgetEvent::SubmitFinished(Ok(receipt)) => {
            tracing::debug!(tx = %receipt.transaction_hash, "Submit confirmed");
            state.status = SubmitStatus::Confirmed(receipt.clone());
        }
        WidgetEvent::SubmitFinished(Err(e)) => {
            state.status = SubmitStatus::Failed(e.clone());
        }
        WidgetEvent::Notice(notice) => {
            state.notice = Some(notice.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::Notice;
    use crate::core::error::WidgetError;
    use shared::{TransactionReceipt, TxHash};

    #[test]
    fn test_lifecycle_transitions() {
        let state = Arc::new(RwLock::new(WidgetState::default()));
        state.write().status = SubmitStatus::Submitting;

        let tx = TxHash::repeat_byte(3);
        apply_event(&state, &WidgetEvent::TransactionSubmitted(tx));
        assert_eq!(state.read().status, SubmitStatus::AwaitingConfirmation(tx));

        let receipt = TransactionReceipt {
            transaction_hash: tx,
            block_number: None,
            status: None,
            gas_used: None,
        };
        apply_event(&state, &WidgetEvent::SubmitFinished(Ok(receipt.clone())));
        assert_eq!(state.read().status, SubmitStatus::Confirmed(receipt));
    }

    #[test]
    fn test_failure_clears_busy() {
        let state = Arc::new(RwLock::new(WidgetState::default()));
        state.write().status = SubmitStatus::AwaitingConfirmation(TxHash::ZERO);

        apply_event(&state, &WidgetEvent::SubmitFinished(Err(WidgetError::ConfirmationTimeout(TxHash::ZERO))));
        assert!(!state.read().status.is_busy());
        assert_eq!(state.read().status.error(), Some(&WidgetError::ConfirmationTimeout(TxHash::ZERO)));
    }

    #[test]
    fn test_notice_leaves_status_alone() {
        let state = Arc::new(RwLock::new(WidgetState::default()));
        state.write().status = SubmitStatus::AwaitingConfirmation(TxHash::ZERO);

        let notice = Notice::from(&WidgetError::Dispatch("store busy".to_string()));
        apply_event(&state, &WidgetEvent::Notice(notice.clone()));
        assert_eq!(state.read().notice, Some(notice));
        assert_eq!(state.read().status, SubmitStatus::AwaitingConfirmation(TxHash::ZERO));
    }

    #[test]
    fn test_late_submitted_event_does_not_resurrect_busy() {
        let state = Arc::new(RwLock::new(WidgetState::default()));
        state.write().status = SubmitStatus::Failed(WidgetError::EmptyQuote);
        apply_event(&state, &WidgetEvent::TransactionSubmitted(TxHash::ZERO));
        assert!(!state.read().status.is_busy());
    }
}
