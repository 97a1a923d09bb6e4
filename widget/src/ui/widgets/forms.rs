//! # Form Components

use crate::ui::theme::Theme;

/// Single-line amount field with a hint and a unit label.
///
/// Returns the response of the text edit; `changed()` is set when the user
/// typed into it.
pub fn render_amount_input(ui: &mut egui::Ui, value: &mut String, hint: &str, unit: &str, theme: &Theme) -> egui::Response {
    ui.horizontal(|ui| {
        let response = ui.add(egui::TextEdit::singleline(value).hint_text(hint).desired_width(160.0));
        ui.label(egui::RichText::new(unit).color(theme.dim));
        response
    })
    .inner
}

/// Accent-filled submit button showing a spinner while `loading`.
///
/// The button is disabled while loading.
pub fn render_submit_button(ui: &mut egui::Ui, text: &str, loading: bool, theme: &Theme) -> egui::Response {
    ui.horizontal(|ui| {
        let button = egui::Button::new(egui::RichText::new(text).strong()).fill(theme.selected);
        let response = ui.add_enabled(!loading, button);
        if loading {
            ui.add(egui::Spinner::new());
        }
        response
    })
    .inner
}

/// Render an error message
pub fn render_error_message(ui: &mut egui::Ui, message: &str, theme: &Theme) {
    ui.colored_label(theme.error, message);
}
