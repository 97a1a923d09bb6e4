//! # Buy Form Handlers
//!
//! Amount entry and token selection. Both run on the UI thread and hold the
//! state lock only for the single write they perform.

use crate::app::state::WidgetState;
use crate::core::error::Result;
use crate::core::service::Dispatcher;
use crate::utils::units::parse_token_amount;
use parking_lot::RwLock;
use shared::{AssetToken, U256};
use std::sync::Arc;

/// Parse `raw` and store it as the purchase amount.
///
/// Invalid input leaves the state untouched and returns the input error.
pub(crate) fn apply_amount_input(state: &Arc<RwLock<WidgetState>>, raw: &str) -> Result<U256> {
    let amount = parse_token_amount(raw)?;
    state.write().amount = Some(amount);
    Ok(amount)
}

/// Forward the user's token choice to the store.
pub(crate) fn select_token(dispatcher: &dyn Dispatcher, token: AssetToken) -> Result<()> {
    tracing::info!(token = %token, "Token selected");
    dispatcher.update_selected_token(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::WidgetError;

    #[test]
    fn test_valid_input_replaces_amount() {
        let state = Arc::new(RwLock::new(WidgetState::new(None)));
        let amount = apply_amount_input(&state, "0.25").unwrap();
        assert_eq!(amount, U256::from(250_000_000_000_000_000u128));
        assert_eq!(state.read().amount, Some(amount));
    }

    #[test]
    fn test_invalid_input_keeps_previous_amount() {
        let previous = U256::from(7u64);
        let state = Arc::new(RwLock::new(WidgetState::new(Some(previous))));
        let err = apply_amount_input(&state, "seven").unwrap_err();
        assert!(matches!(err, WidgetError::InvalidAmount(_)));
        assert_eq!(state.read().amount, Some(previous));
    }
}
