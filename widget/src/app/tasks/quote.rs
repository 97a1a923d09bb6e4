//! # Quote Refresh
//!
//! Decides whether the quote held by the store still matches the selected
//! token, and asks the store for a new one when it does not.

use crate::app::state::{Notice, WidgetState};
use crate::core::error::WidgetError;
use crate::core::service::Dispatcher;
use parking_lot::RwLock;
use shared::{AssetToken, Quote, QuoteRequest, TokenPair, U256};
use std::sync::Arc;

/// Asset every purchase is paid in
pub const QUOTE_ASSET: AssetToken = AssetToken::Weth;

/// Result of one refresh attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuoteRefresh {
    /// The current quote already matches the selection
    Current,
    /// A new quote was requested from the store
    Requested(QuoteRequest),
    /// The request could not be delivered; logged and shown as a notice
    Failed(WidgetError),
}

/// The request to issue for `selected`, if the current quote is missing or
/// priced for a different token.
pub fn quote_request_for(selected: AssetToken, quote: Option<&Quote>, amount: Option<U256>) -> Option<QuoteRequest> {
    match quote {
        Some(quote) if quote.pair.base == selected => None,
        _ => Some(QuoteRequest {
            amount,
            pair: TokenPair::new(selected, QUOTE_ASSET),
        }),
    }
}

/// Evaluate the rule and dispatch a request when needed.
///
/// Failures never propagate: they are logged and stored as a notice.
pub(crate) fn refresh_quote(
    dispatcher: &dyn Dispatcher,
    state: &Arc<RwLock<WidgetState>>,
    selected: AssetToken,
    quote: Option<&Quote>,
) -> QuoteRefresh {
    let amount = state.read().amount;

    let Some(request) = quote_request_for(selected, quote, amount) else {
        tracing::debug!(token = %selected, "Quote is current");
        return QuoteRefresh::Current;
    };

    tracing::debug!(pair = %request.pair, amount = ?request.amount, "Requesting quote");
    match dispatcher.quote_requested(request.clone()) {
        Ok(()) => {
            state.write().notice = None;
            QuoteRefresh::Requested(request)
        }
        Err(e) => {
            tracing::warn!(pair = %request.pair, error = %e, "Quote refresh failed");
            state.write().notice = Some(Notice::from(&e));
            QuoteRefresh::Failed(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote_for(base: AssetToken) -> Quote {
        Quote {
            pair: TokenPair::new(base, QUOTE_ASSET),
            amount: U256::from(1u64),
            orders: Vec::new(),
        }
    }

    #[test]
    fn test_missing_quote_requests_one() {
        let request = quote_request_for(AssetToken::Zrx, None, Some(U256::from(5u64))).unwrap();
        assert_eq!(request.pair, TokenPair::new(AssetToken::Zrx, AssetToken::Weth));
        assert_eq!(request.amount, Some(U256::from(5u64)));
    }

    #[test]
    fn test_stale_quote_requests_selected_pair() {
        let stale = quote_for(AssetToken::Zrx);
        let request = quote_request_for(AssetToken::Weth, Some(&stale), None).unwrap();
        assert_eq!(request.pair, TokenPair::new(AssetToken::Weth, QUOTE_ASSET));
        assert_eq!(request.amount, None);
    }

    #[test]
    fn test_matching_quote_is_current() {
        let current = quote_for(AssetToken::Dai);
        assert_eq!(quote_request_for(AssetToken::Dai, Some(&current), Some(U256::from(1u64))), None);
    }
}
