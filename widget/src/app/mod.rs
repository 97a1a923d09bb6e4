//! # Buy Widget Orchestrator
//!
//! [`BuyWidget`] coordinates the buy form: it owns the local state, runs the
//! synchronous handlers on the UI thread and spawns the fill sequence on the
//! Tokio runtime.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                  UI Thread (egui)                        │
//! │  BuyWidget                                               │
//! │  - on_tick()               drain task results            │
//! │  - handle_amount_change()  parse, store, refresh quote   │
//! │  - handle_token_selected() notify store                  │
//! │  - handle_submit()         guard, spawn fill             │
//! │  State: Arc<RwLock<WidgetState>>                         │
//! └───────────────────────┬──────────────────────────────────┘
//!                         │ async_channel (unbounded)
//! ┌───────────────────────▼──────────────────────────────────┐
//! │                  Tokio Runtime                           │
//! │  tasks::fill  resolve handle → fill → submitted →        │
//! │               await mined → mined                        │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! Props are owned by the store and passed in by reference on every call.
//! The store is only ever changed through the [`Dispatcher`].

pub mod event_handler;
pub mod events;
pub mod handlers;
pub mod state;
pub mod tasks;
pub mod view;

pub use events::WidgetEvent;
pub use state::{BuyWidgetProps, Notice, SubmitStatus, WidgetState};
pub use tasks::quote::{quote_request_for, QuoteRefresh, QUOTE_ASSET};
pub use view::{AccountSummary, BuyView};

use crate::core::error::{Result, WidgetError};
use crate::core::service::{ChainSession, Dispatcher};
use crate::services::forwarder::ForwarderRegistry;
use async_channel::{Receiver, Sender};
use parking_lot::RwLock;
use shared::{AssetToken, TransactionReceipt, U256};
use std::sync::Arc;
use tasks::fill::{FillContext, FillRequest};
use tokio::runtime::Handle;

/// Outcome of an amount-change event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmountChange {
    /// Blank or unparseable input; nothing changed
    Ignored(WidgetError),
    /// Amount stored and one quote refresh attempted
    Updated { amount: U256, quote: QuoteRefresh },
}

/// Outcome of a submit click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Started,
    AlreadyInFlight,
}

/// The buy-tokens form.
pub struct BuyWidget {
    pub(crate) state: Arc<RwLock<WidgetState>>,
    event_rx: Receiver<WidgetEvent>,
    fill: FillContext,
    runtime: Handle,
    /// (selected token, quote base) seen by the last `sync_props`
    last_seen: Option<(AssetToken, Option<AssetToken>)>,
    /// Text buffer behind the amount field
    pub amount_input: String,
}

impl BuyWidget {
    /// Create the widget with its collaborators.
    ///
    /// `default_amount` seeds the purchase amount before the first input.
    pub fn new(
        dispatcher: Arc<dyn Dispatcher>,
        forwarders: Arc<ForwarderRegistry>,
        session: Arc<dyn ChainSession>,
        default_amount: Option<U256>,
        runtime: Handle,
    ) -> Self {
        let (event_tx, event_rx): (Sender<WidgetEvent>, Receiver<WidgetEvent>) = async_channel::unbounded();

        Self {
            state: Arc::new(RwLock::new(WidgetState::new(default_amount))),
            event_rx,
            fill: FillContext {
                dispatcher,
                forwarders,
                session,
                events: event_tx,
            },
            runtime,
            last_seen: None,
            amount_input: String::new(),
        }
    }

    /// Drain task results and apply them to the state.
    ///
    /// Called every frame. Returns the applied events so the host can show
    /// transaction toasts.
    pub fn on_tick(&mut self) -> Vec<WidgetEvent> {
        let mut applied = Vec::new();
        while let Ok(event) = self.event_rx.try_recv() {
            event_handler::apply_event(&self.state, &event);
            applied.push(event);
        }
        applied
    }

    /// User edited the amount field.
    pub fn handle_amount_change(&mut self, raw: &str, props: &BuyWidgetProps) -> AmountChange {
        match handlers::buy::apply_amount_input(&self.state, raw) {
            Ok(amount) => {
                tracing::info!(amount = %amount, "Purchase amount changed");
                let quote = self.refresh_quote(props);
                AmountChange::Updated { amount, quote }
            }
            Err(e) => {
                tracing::trace!(input = raw, "Ignoring amount input");
                AmountChange::Ignored(e)
            }
        }
    }

    /// User picked a token in the selector.
    pub fn handle_token_selected(&self, token: AssetToken) -> Result<()> {
        let result = handlers::buy::select_token(self.fill.dispatcher.as_ref(), token);
        if let Err(e) = &result {
            tracing::warn!(token = %token, error = %e, "Token selection not delivered");
            self.state.write().notice = Some(Notice::from(e));
        }
        result
    }

    /// Request a new quote if the current one is missing or stale.
    pub fn refresh_quote(&self, props: &BuyWidgetProps) -> QuoteRefresh {
        tasks::quote::refresh_quote(
            self.fill.dispatcher.as_ref(),
            &self.state,
            props.selected_token,
            props.quote.as_ref(),
        )
    }

    /// Re-evaluate the quote rule when the selection or the quote's token
    /// changed since the last call. Returns `None` when nothing changed.
    pub fn sync_props(&mut self, props: &BuyWidgetProps) -> Option<QuoteRefresh> {
        let seen = (props.selected_token, props.quote.as_ref().map(|q| q.pair.base));
        if self.last_seen == Some(seen) {
            return None;
        }
        self.last_seen = Some(seen);
        Some(self.refresh_quote(props))
    }

    /// Start the fill sequence in the background.
    ///
    /// The result arrives through [`BuyWidget::on_tick`].
    pub fn handle_submit(&self, props: &BuyWidgetProps) -> SubmitOutcome {
        if !self.begin_submit() {
            return SubmitOutcome::AlreadyInFlight;
        }
        tasks::fill::execute_fill(&self.runtime, self.fill.clone(), self.fill_request(props));
        SubmitOutcome::Started
    }

    /// Run the fill sequence inline and apply its result.
    pub async fn submit(&mut self, props: &BuyWidgetProps) -> Result<TransactionReceipt> {
        if !self.begin_submit() {
            return Err(WidgetError::SubmitInFlight);
        }

        let result = tasks::fill::run_fill(self.fill.clone(), self.fill_request(props)).await;
        if let Err(e) = &result {
            tracing::error!(error = %e, "Submit failed");
        }
        let _ = self.fill.events.send(WidgetEvent::SubmitFinished(result.clone())).await;
        self.on_tick();
        result
    }

    pub fn view_model(&self, props: &BuyWidgetProps) -> BuyView {
        view::derive_view(props, &self.state.read())
    }

    pub fn amount(&self) -> Option<U256> {
        self.state.read().amount
    }

    pub fn status(&self) -> SubmitStatus {
        self.state.read().status.clone()
    }

    pub fn is_busy(&self) -> bool {
        self.state.read().status.is_busy()
    }

    pub fn notice(&self) -> Option<Notice> {
        self.state.read().notice.clone()
    }

    /// Clear the notice shown under the form
    pub fn dismiss_notice(&self) {
        self.state.write().notice = None;
    }

    /// Enter `Submitting` unless a submit is already in flight
    fn begin_submit(&self) -> bool {
        let mut state = self.state.write();
        if state.status.is_busy() {
            tracing::warn!(status = ?state.status, "Submit ignored, purchase in progress");
            return false;
        }
        state.status = SubmitStatus::Submitting;
        true
    }

    fn fill_request(&self, props: &BuyWidgetProps) -> FillRequest {
        FillRequest {
            network_id: props.network_id,
            taker: props.address,
            quote: props.quote.clone(),
            amount: self.amount(),
        }
    }
}
