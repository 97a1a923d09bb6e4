//! # View Model
//!
//! Everything the buy form displays, derived from props and local state
//! without side effects.

use crate::app::state::{BuyWidgetProps, Notice, SubmitStatus, WidgetState};
use shared::{Address, AssetToken, U256};

/// Hint shown in the empty amount field
pub const AMOUNT_PLACEHOLDER: &str = "1";

/// Unit label next to the amount field
pub const AMOUNT_UNIT: &str = "ETH";

/// Account block at the top of the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountSummary {
    pub address: Address,
    pub wei_balance: U256,
    pub token: AssetToken,
    pub token_balance: U256,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuyView {
    pub account: AccountSummary,
    pub selected_token: AssetToken,
    pub tokens: &'static [AssetToken],
    pub amount: Option<U256>,
    /// Spinner on the submit button: no quote yet, or a submit in flight
    pub submit_loading: bool,
    pub status: SubmitStatus,
    pub notice: Option<Notice>,
}

pub fn derive_view(props: &BuyWidgetProps, state: &WidgetState) -> BuyView {
    BuyView {
        account: AccountSummary {
            address: props.address,
            wei_balance: props.wei_balance(),
            token: props.selected_token,
            token_balance: props.selected_token_balance(),
        },
        selected_token: props.selected_token,
        tokens: AssetToken::all(),
        amount: state.amount,
        submit_loading: props.quote.is_none() || state.status.is_busy(),
        status: state.status.clone(),
        notice: state.notice.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{NetworkId, Quote, TokenPair};
    use std::collections::HashMap;

    fn props() -> BuyWidgetProps {
        BuyWidgetProps::new(Address::repeat_byte(0xaa), NetworkId(50), AssetToken::Zrx)
    }

    #[test]
    fn test_loading_without_quote() {
        let view = derive_view(&props(), &WidgetState::default());
        assert!(view.submit_loading);
        assert_eq!(view.account.wei_balance, U256::ZERO);
        assert_eq!(view.account.token_balance, U256::ZERO);
    }

    #[test]
    fn test_ready_with_quote_and_idle() {
        let mut props = props();
        props.quote = Some(Quote {
            pair: TokenPair::new(AssetToken::Zrx, AssetToken::Weth),
            amount: U256::from(1u64),
            orders: Vec::new(),
        });

        let mut state = WidgetState::new(Some(U256::from(2u64)));
        let view = derive_view(&props, &state);
        assert!(!view.submit_loading);
        assert_eq!(view.amount, Some(U256::from(2u64)));

        state.status = SubmitStatus::Submitting;
        assert!(derive_view(&props, &state).submit_loading);
    }

    #[test]
    fn test_account_summary_uses_selected_token() {
        let mut props = props();
        props.wei_balances.insert(props.address, U256::from(100u64));
        props
            .token_balances
            .insert(props.address, HashMap::from([(AssetToken::Zrx, U256::from(40u64))]));

        let view = derive_view(&props, &WidgetState::default());
        assert_eq!(view.account.wei_balance, U256::from(100u64));
        assert_eq!(view.account.token, AssetToken::Zrx);
        assert_eq!(view.account.token_balance, U256::from(40u64));
    }
}
