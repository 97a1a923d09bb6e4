//! # Widget State Types
//!
//! Props supplied by the parent each frame, the widget's own local state,
//! and the submit state machine.

use crate::core::error::{ErrorKind, WidgetError};
use shared::{
    AccountTokenBalances, AccountWeiBalances, Address, AssetToken, NetworkId, Quote, TransactionReceipt, TxHash,
    U256,
};

/// Read-only inputs owned by the surrounding store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuyWidgetProps {
    /// Account the fill is made on behalf of
    pub address: Address,
    pub network_id: NetworkId,
    pub wei_balances: AccountWeiBalances,
    pub token_balances: AccountTokenBalances,
    pub selected_token: AssetToken,
    /// `None` while a quote is being fetched
    pub quote: Option<Quote>,
}

impl BuyWidgetProps {
    pub fn new(address: Address, network_id: NetworkId, selected_token: AssetToken) -> Self {
        Self {
            address,
            network_id,
            wei_balances: AccountWeiBalances::new(),
            token_balances: AccountTokenBalances::new(),
            selected_token,
            quote: None,
        }
    }

    /// Wei balance of the account, zero when unknown
    pub fn wei_balance(&self) -> U256 {
        self.wei_balances.get(&self.address).copied().unwrap_or_default()
    }

    /// Balance of the selected token, zero when unknown
    pub fn selected_token_balance(&self) -> U256 {
        self.token_balances
            .get(&self.address)
            .and_then(|balances| balances.get(&self.selected_token))
            .copied()
            .unwrap_or_default()
    }
}

/// Lifecycle of a fill submission.
///
/// `Confirmed` and `Failed` are resting states: a new submit may start
/// from them just like from `Idle`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    AwaitingConfirmation(TxHash),
    Confirmed(TransactionReceipt),
    Failed(WidgetError),
}

impl SubmitStatus {
    /// A submit is in flight
    pub fn is_busy(&self) -> bool {
        matches!(self, SubmitStatus::Submitting | SubmitStatus::AwaitingConfirmation(_))
    }

    pub fn error(&self) -> Option<&WidgetError> {
        match self {
            SubmitStatus::Failed(err) => Some(err),
            _ => None,
        }
    }
}

/// Non-blocking message shown under the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: ErrorKind,
    pub message: String,
}

impl From<&WidgetError> for Notice {
    fn from(err: &WidgetError) -> Self {
        Self {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

/// Local state of the widget.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WidgetState {
    /// Purchase amount in base units, `None` until the first valid input
    /// when no default is configured
    pub amount: Option<U256>,
    pub status: SubmitStatus,
    /// Last quote-refresh failure, cleared by the next successful refresh
    pub notice: Option<Notice>,
}

impl WidgetState {
    pub fn new(default_amount: Option<U256>) -> Self {
        Self {
            amount: default_amount,
            ..Self::default()
        }
    }
}
