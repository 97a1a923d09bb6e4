//! # Common Error Types
//!
//! Consolidated error handling for the buy widget.
//!
//! Every asynchronous handler resolves to a [`Result`] carrying a
//! [`WidgetError`]. Each error belongs to one [`ErrorKind`], which decides how
//! the widget surfaces it:
//!
//! - **Input**: unparseable or blank amount text. Suppressed silently, the
//!   user simply retypes.
//! - **Transient**: network or dispatcher failures, missing quotes,
//!   confirmation timeouts. Shown in the status indicator; retrying may work.
//! - **Fatal**: the chain or exchange rejected the fill, the receipt reverted,
//!   or the network has no exchange deployment. Shown in the status indicator.
//!
//! ```rust
//! use trade_widget::core::error::{ErrorKind, WidgetError};
//!
//! let err = WidgetError::InvalidAmount("abc".to_string());
//! assert_eq!(err.kind(), ErrorKind::Input);
//! assert!(err.is_silent());
//! ```

use shared::{NetworkId, TxHash};
use thiserror::Error;

/// How an error is surfaced to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Recoverable input error, ignored without feedback
    Input,
    /// Temporary failure, worth retrying
    Transient,
    /// Rejected by the chain or misconfigured
    Fatal,
}

/// Widget-wide error type.
///
/// Variants carry a `String` context so the error can be cloned into state
/// and shown in the UI.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WidgetError {
    /// Amount text is blank, non-numeric, negative or too precise.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Submit was requested before any amount was entered.
    #[error("No purchase amount entered")]
    MissingAmount,

    /// Submit was requested while no quote is available.
    #[error("No quote available for the selected token")]
    QuoteUnavailable,

    /// A previous submit is still in flight.
    #[error("A purchase is already in progress")]
    SubmitInFlight,

    /// The active quote carries no fillable order.
    #[error("Quote has no orders to fill")]
    EmptyQuote,

    /// The dispatcher channel refused a notification.
    #[error("Dispatcher error: {0}")]
    Dispatch(String),

    /// Transport-level failure talking to the node.
    #[error("Network error: {0}")]
    Network(String),

    /// The node did not report the transaction as mined in time.
    #[error("Transaction {0} was not mined before the confirmation timeout")]
    ConfirmationTimeout(TxHash),

    /// No exchange deployment is known for this network.
    #[error("No exchange deployment for network {0}")]
    UnsupportedNetwork(NetworkId),

    /// The node or exchange rejected the request.
    #[error("Chain error: {0}")]
    Chain(String),

    /// The transaction was mined but reverted.
    #[error("Transaction {0} reverted")]
    Reverted(TxHash),

    /// Bug or panic inside the widget.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl WidgetError {
    /// Category deciding how the error is surfaced
    pub fn kind(&self) -> ErrorKind {
        match self {
            WidgetError::InvalidAmount(_) => ErrorKind::Input,
            WidgetError::MissingAmount
            | WidgetError::QuoteUnavailable
            | WidgetError::SubmitInFlight
            | WidgetError::EmptyQuote
            | WidgetError::Dispatch(_)
            | WidgetError::Network(_)
            | WidgetError::ConfirmationTimeout(_) => ErrorKind::Transient,
            WidgetError::UnsupportedNetwork(_)
            | WidgetError::Chain(_)
            | WidgetError::Reverted(_)
            | WidgetError::Internal(_) => ErrorKind::Fatal,
        }
    }

    /// Input errors are the only ones suppressed without feedback
    pub fn is_silent(&self) -> bool {
        self.kind() == ErrorKind::Input
    }
}

/// Convenience type alias for `Result<T, WidgetError>`.
pub type Result<T> = std::result::Result<T, WidgetError>;

impl From<reqwest::Error> for WidgetError {
    fn from(err: reqwest::Error) -> Self {
        WidgetError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for WidgetError {
    fn from(err: serde_json::Error) -> Self {
        WidgetError::Chain(format!("malformed JSON: {}", err))
    }
}
