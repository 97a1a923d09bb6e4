//! # Buy Form
//!
//! Account summary, token selector, amount field and submit button. All
//! displayed values come from [`BuyWidget::view_model`]; user input is routed
//! to the widget's handlers.

use crate::app::state::{BuyWidgetProps, SubmitStatus};
use crate::app::view::{BuyView, AMOUNT_PLACEHOLDER, AMOUNT_UNIT};
use crate::app::BuyWidget;
use crate::ui::theme::Theme;
use crate::ui::widgets::{account_summary, forms, layouts, token_selector};
use shared::utils::truncate_address;

/// Render the buy form and dispatch this frame's user input.
pub fn render(ui: &mut egui::Ui, widget: &mut BuyWidget, props: &BuyWidgetProps, theme: &Theme) {
    let view = widget.view_model(props);

    layouts::render_panel(ui, Some("Buy Tokens"), |ui| {
        account_summary::render_account_summary(ui, &view.account, theme);
        ui.add_space(12.0);

        layouts::render_section_label(ui, "SELECT TOKEN", theme.dim);
        if let Some(token) = token_selector::render_token_selector(ui, view.selected_token, view.tokens) {
            // failure is already logged and shown as a notice
            let _ = widget.handle_token_selected(token);
        }
        ui.add_space(8.0);

        layouts::render_section_label(ui, "BUY AMOUNT", theme.dim);
        let response = forms::render_amount_input(ui, &mut widget.amount_input, AMOUNT_PLACEHOLDER, AMOUNT_UNIT, theme);
        if response.changed() {
            let raw = widget.amount_input.clone();
            widget.handle_amount_change(&raw, props);
        }
        ui.add_space(12.0);

        if forms::render_submit_button(ui, "BUY TOKENS", view.submit_loading, theme).clicked() {
            widget.handle_submit(props);
        }

        render_status(ui, &view, theme);
        if render_notice(ui, &view, theme) {
            widget.dismiss_notice();
        }
    });
}

fn render_status(ui: &mut egui::Ui, view: &BuyView, theme: &Theme) {
    match &view.status {
        SubmitStatus::Idle => {}
        SubmitStatus::Submitting => {
            ui.colored_label(theme.info, "Submitting order...");
        }
        SubmitStatus::AwaitingConfirmation(tx) => {
            ui.colored_label(
                theme.info,
                format!("Waiting for confirmation of {}", truncate_address(&tx.to_string())),
            );
        }
        SubmitStatus::Confirmed(receipt) => {
            ui.colored_label(
                theme.success,
                format!("Confirmed {}", truncate_address(&receipt.transaction_hash.to_string())),
            );
        }
        SubmitStatus::Failed(err) => {
            forms::render_error_message(ui, &err.to_string(), theme);
        }
    }
}

/// Returns true when the user dismissed the notice
fn render_notice(ui: &mut egui::Ui, view: &BuyView, theme: &Theme) -> bool {
    let Some(notice) = &view.notice else {
        return false;
    };
    ui.horizontal(|ui| {
        ui.colored_label(theme.warning, &notice.message);
        ui.small_button("x").on_hover_text("Dismiss").clicked()
    })
    .inner
}
