//! # Token Selector
//!
//! Drop-down listing the purchasable tokens.

use shared::AssetToken;

/// Render the selector; returns the token the user picked this frame, if it
/// differs from `selected`.
pub fn render_token_selector(ui: &mut egui::Ui, selected: AssetToken, tokens: &[AssetToken]) -> Option<AssetToken> {
    let mut choice = selected;
    egui::ComboBox::from_id_salt("buy_token_selector")
        .selected_text(format!("{} ({})", selected.symbol(), selected.name()))
        .show_ui(ui, |ui| {
            for token in tokens {
                ui.selectable_value(&mut choice, *token, format!("{} ({})", token.symbol(), token.name()));
            }
        });

    (choice != selected).then_some(choice)
}
