//! # Trade Store
//!
//! Stand-in for the application store around the widget. It owns the
//! selected token, the active quote and the balances, consumes the widget's
//! [`StoreAction`]s and hands back fresh [`BuyWidgetProps`].
//!
//! Quotes are served from a static quote book loaded from JSON.

use crate::app::state::BuyWidgetProps;
use crate::core::error::{Result, WidgetError};
use crate::services::dispatcher::StoreAction;
use async_channel::Receiver;
use shared::{Address, AssetToken, Quote, QuoteRequest, TransactionReceipt, TxHash, U256};
use std::path::Path;

/// Load a quote book (a JSON array of quotes).
pub fn load_quote_book(path: impl AsRef<Path>) -> Result<Vec<Quote>> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path)
        .map_err(|e| WidgetError::Internal(format!("cannot read quote book {}: {}", path.display(), e)))?;
    Ok(serde_json::from_str(&json)?)
}

pub struct TradeStore {
    props: BuyWidgetProps,
    quote_book: Vec<Quote>,
    actions: Receiver<StoreAction>,
    last_request: Option<QuoteRequest>,
    pending: Vec<TxHash>,
    mined: Vec<TransactionReceipt>,
}

impl TradeStore {
    pub fn new(props: BuyWidgetProps, quote_book: Vec<Quote>, actions: Receiver<StoreAction>) -> Self {
        Self {
            props,
            quote_book,
            actions,
            last_request: None,
            pending: Vec::new(),
            mined: Vec::new(),
        }
    }

    pub fn props(&self) -> &BuyWidgetProps {
        &self.props
    }

    /// Apply every queued action, returning them in arrival order.
    pub fn pump(&mut self) -> Vec<StoreAction> {
        let mut applied = Vec::new();
        while let Ok(action) = self.actions.try_recv() {
            self.reduce(&action);
            applied.push(action);
        }
        applied
    }

    pub fn reduce(&mut self, action: &StoreAction) {
        match action {
            StoreAction::UpdateSelectedToken(token) => {
                self.props.selected_token = *token;
            }
            StoreAction::QuoteRequested(request) => {
                self.props.quote = self.lookup_quote(request);
                if self.props.quote.is_none() {
                    tracing::warn!(pair = %request.pair, "No quote in book");
                }
                self.last_request = Some(request.clone());
            }
            StoreAction::TransactionSubmitted(tx_hash) => {
                self.pending.push(*tx_hash);
            }
            StoreAction::TransactionMined(receipt) => {
                self.pending.retain(|tx| *tx != receipt.transaction_hash);
                self.mined.push(receipt.clone());
            }
        }
    }

    fn lookup_quote(&self, request: &QuoteRequest) -> Option<Quote> {
        self.quote_book
            .iter()
            .find(|quote| quote.pair == request.pair)
            .map(|quote| Quote {
                amount: request.amount.unwrap_or(quote.amount),
                ..quote.clone()
            })
    }

    pub fn set_wei_balance(&mut self, account: Address, balance: U256) {
        self.props.wei_balances.insert(account, balance);
    }

    pub fn set_token_balance(&mut self, account: Address, token: AssetToken, balance: U256) {
        self.props.token_balances.entry(account).or_default().insert(token, balance);
    }

    pub fn last_request(&self) -> Option<&QuoteRequest> {
        self.last_request.as_ref()
    }

    pub fn pending(&self) -> &[TxHash] {
        &self.pending
    }

    pub fn mined(&self) -> &[TransactionReceipt] {
        &self.mined
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::service::Dispatcher;
    use crate::services::dispatcher::ChannelDispatcher;
    use shared::{NetworkId, TokenPair};

    fn book() -> Vec<Quote> {
        vec![Quote {
            pair: TokenPair::new(AssetToken::Zrx, AssetToken::Weth),
            amount: U256::from(1u64),
            orders: Vec::new(),
        }]
    }

    fn store() -> (TradeStore, ChannelDispatcher) {
        let (dispatcher, rx) = ChannelDispatcher::new();
        let props = BuyWidgetProps::new(Address::repeat_byte(1), NetworkId(50), AssetToken::Weth);
        (TradeStore::new(props, book(), rx), dispatcher)
    }

    #[test]
    fn test_selection_and_quote_flow() {
        let (mut store, dispatcher) = store();
        dispatcher.update_selected_token(AssetToken::Zrx).unwrap();
        dispatcher
            .quote_requested(QuoteRequest {
                amount: Some(U256::from(9u64)),
                pair: TokenPair::new(AssetToken::Zrx, AssetToken::Weth),
            })
            .unwrap();

        assert_eq!(store.pump().len(), 2);
        assert_eq!(store.props().selected_token, AssetToken::Zrx);
        let quote = store.props().quote.as_ref().unwrap();
        assert_eq!(quote.amount, U256::from(9u64));
    }

    #[test]
    fn test_unknown_pair_leaves_quote_empty() {
        let (mut store, dispatcher) = store();
        dispatcher
            .quote_requested(QuoteRequest {
                amount: None,
                pair: TokenPair::new(AssetToken::Mkr, AssetToken::Weth),
            })
            .unwrap();
        store.pump();
        assert!(store.props().quote.is_none());
        assert!(store.last_request().is_some());
    }

    #[test]
    fn test_transactions_move_from_pending_to_mined() {
        let (mut store, dispatcher) = store();
        let tx = TxHash::repeat_byte(4);
        dispatcher.transaction_submitted(tx).unwrap();
        store.pump();
        assert_eq!(store.pending(), &[tx]);

        dispatcher
            .transaction_mined(TransactionReceipt {
                transaction_hash: tx,
                block_number: None,
                status: None,
                gas_used: None,
            })
            .unwrap();
        store.pump();
        assert!(store.pending().is_empty());
        assert_eq!(store.mined().len(), 1);
    }

    #[test]
    fn test_bundled_quote_book_parses() {
        let book: Vec<Quote> = serde_json::from_str(include_str!("../../artifacts/quotes.json")).unwrap();
        assert_eq!(book[0].pair, TokenPair::new(AssetToken::Zrx, AssetToken::Weth));
        assert!(book[0].first_order().is_some());
    }

    #[test]
    fn test_balances() {
        let (mut store, _dispatcher) = store();
        let account = store.props().address;
        store.set_wei_balance(account, U256::from(3u64));
        store.set_token_balance(account, AssetToken::Weth, U256::from(2u64));
        assert_eq!(store.props().wei_balance(), U256::from(3u64));
        assert_eq!(store.props().selected_token_balance(), U256::from(2u64));
    }
}
