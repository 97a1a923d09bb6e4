//! # Account Summary
//!
//! Address and balances shown at the top of the buy form.

use crate::app::view::AccountSummary;
use crate::ui::theme::Theme;
use shared::utils::{format_token_amount, truncate_address};

/// Fraction digits shown for balances
const BALANCE_DIGITS: usize = 4;

pub fn render_account_summary(ui: &mut egui::Ui, account: &AccountSummary, theme: &Theme) {
    let address = account.address.to_string();
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(truncate_address(&address)).monospace())
            .on_hover_text(&address);
    });
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("ETH").color(theme.dim));
        ui.label(format_token_amount(account.wei_balance, 18, BALANCE_DIGITS));
        ui.add_space(12.0);
        ui.label(egui::RichText::new(account.token.symbol()).color(theme.dim));
        ui.label(format_token_amount(account.token_balance, account.token.decimals(), BALANCE_DIGITS));
    });
}
