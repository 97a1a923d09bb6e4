//! # Notifications Widget
//!
//! Toasts for the transaction lifecycle, using egui-notify.

use crate::app::events::WidgetEvent;
use egui_notify::Toasts;
use shared::utils::truncate_address;

#[derive(Default)]
pub struct NotificationManager {
    pub toasts: Toasts,
}

impl NotificationManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn success(&mut self, message: String) {
        self.toasts.success(message);
    }

    pub fn error(&mut self, message: String) {
        self.toasts.error(message);
    }

    pub fn warning(&mut self, message: String) {
        self.toasts.warning(message);
    }

    pub fn info(&mut self, message: String) {
        self.toasts.info(message);
    }

    /// Toast for a widget event
    pub fn notify(&mut self, event: &WidgetEvent) {
        match event {
            WidgetEvent::TransactionSubmitted(tx) => {
                self.info(format!("Transaction submitted\n{}", truncate_address(&tx.to_string())));
            }
            WidgetEvent::SubmitFinished(Ok(receipt)) => {
                self.success(format!(
                    "Purchase confirmed\n{}",
                    truncate_address(&receipt.transaction_hash.to_string())
                ));
            }
            WidgetEvent::SubmitFinished(Err(e)) => {
                self.error(format!("Purchase failed\n{}", e));
            }
            WidgetEvent::Notice(notice) => {
                self.warning(notice.message.clone());
            }
        }
    }

    /// Render notifications in the UI context
    pub fn show(&mut self, ctx: &egui::Context) {
        self.toasts.show(ctx);
    }
}
