//! Demo host for the buy widget.
//!
//! Wires the widget to a JSON-RPC node, a static quote book and the
//! in-process store, then opens a single egui window.

use async_channel::{Receiver, Sender};
use serde_json::json;
use shared::{Address, AssetToken, U256};
use std::error::Error;
use std::sync::Arc;
use std::time::Duration;
use trade_widget::app::{BuyWidget, BuyWidgetProps, WidgetEvent};
use trade_widget::config::WidgetConfig;
use trade_widget::debug::{init_logger, LogConfig};
use trade_widget::services::dispatcher::ChannelDispatcher;
use trade_widget::services::forwarder::{ContractArtifacts, ForwarderRegistry};
use trade_widget::services::rpc::{RpcChainSession, RpcClient, RpcConnector};
use trade_widget::services::store::{load_quote_book, TradeStore};
use trade_widget::ui::widgets::NotificationManager;
use trade_widget::ui::{screens, Theme};
use trade_widget::utils::runtime::shared_runtime;

/// Token selected when the window opens
const INITIAL_TOKEN: AssetToken = AssetToken::Zrx;

struct BuyWidgetApp {
    widget: BuyWidget,
    store: TradeStore,
    client: RpcClient,
    runtime: tokio::runtime::Handle,
    balance_tx: Sender<(Address, U256)>,
    balance_rx: Receiver<(Address, U256)>,
    notifications: NotificationManager,
    theme: Theme,
}

impl BuyWidgetApp {
    /// Fetch the account's wei balance in the background
    fn refresh_balance(&self) {
        let account = self.store.props().address;
        let client = self.client.clone();
        let tx = self.balance_tx.clone();
        self.runtime.spawn(async move {
            match client.get_balance(account).await {
                Ok(balance) => {
                    let _ = tx.send((account, balance)).await;
                }
                Err(e) => tracing::warn!(account = %account, error = %e, "Balance fetch failed"),
            }
        });
    }
}

impl eframe::App for BuyWidgetApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for event in self.widget.on_tick() {
            self.notifications.notify(&event);
            if matches!(event, WidgetEvent::SubmitFinished(_)) {
                self.refresh_balance();
            }
        }

        for action in self.store.pump() {
            tracing::debug!(action = action.name(), "Store updated");
        }
        while let Ok((account, balance)) = self.balance_rx.try_recv() {
            self.store.set_wei_balance(account, balance);
        }

        let props = self.store.props().clone();
        self.widget.sync_props(&props);

        egui::CentralPanel::default().show(ctx, |ui| {
            screens::buy::render(ui, &mut self.widget, &props, &self.theme);
        });
        self.notifications.show(ctx);

        ctx.request_repaint_after(Duration::from_millis(100));
    }
}

/// Taker account: configured, or the node's first unlocked account
fn resolve_account(config: &WidgetConfig, client: &RpcClient, runtime: &tokio::runtime::Runtime) -> Address {
    if let Some(account) = config.account {
        return account;
    }

    match runtime.block_on(client.call::<Vec<Address>>("eth_accounts", json!([]))) {
        Ok(Some(accounts)) if !accounts.is_empty() => accounts[0],
        Ok(_) => {
            tracing::warn!("Node reports no accounts, using the zero address");
            Address::ZERO
        }
        Err(e) => {
            tracing::warn!(error = %e, "eth_accounts failed, using the zero address");
            Address::ZERO
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    dotenvy::dotenv().ok();
    let _log_guard = init_logger(&LogConfig::from_env());

    let config = WidgetConfig::from_env()?;
    config.validate()?;
    tracing::info!(
        rpc_url = %config.rpc_url,
        network = %config.network_id,
        artifacts = %config.artifacts_path.display(),
        "Starting buy widget"
    );

    let runtime = shared_runtime()?;
    let client = RpcClient::new(config.rpc_url.clone())?;

    let artifacts = ContractArtifacts::load(&config.artifacts_path)?;
    let forwarders = Arc::new(ForwarderRegistry::new(
        artifacts,
        Arc::new(RpcConnector::new(client.clone())),
    ));
    let session = Arc::new(RpcChainSession::new(
        client.clone(),
        config.poll_interval(),
        config.confirmation_timeout(),
    ));

    let quote_book = load_quote_book(&config.quote_book_path).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Quote book unavailable, quotes will stay pending");
        Vec::new()
    });

    let account = resolve_account(&config, &client, runtime);
    let (dispatcher, actions) = ChannelDispatcher::new();
    let store = TradeStore::new(
        BuyWidgetProps::new(account, config.network_id, INITIAL_TOKEN),
        quote_book,
        actions,
    );

    let widget = BuyWidget::new(
        Arc::new(dispatcher),
        forwarders,
        session,
        config.default_amount,
        runtime.handle().clone(),
    );

    let (balance_tx, balance_rx) = async_channel::unbounded();
    let app = BuyWidgetApp {
        widget,
        store,
        client,
        runtime: runtime.handle().clone(),
        balance_tx,
        balance_rx,
        notifications: NotificationManager::new(),
        theme: Theme::default(),
    };
    app.refresh_balance();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Buy Tokens")
            .with_inner_size([420.0, 380.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Buy Tokens",
        options,
        Box::new(move |cc| {
            app.theme.apply(&cc.egui_ctx);
            Ok(Box::new(app))
        }),
    )?;

    Ok(())
}
