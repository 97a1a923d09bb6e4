//! # Layout Components

/// Render a grouped panel with optional heading
pub fn render_panel<F>(ui: &mut egui::Ui, heading: Option<&str>, content: F)
where
    F: FnOnce(&mut egui::Ui),
{
    ui.group(|ui| {
        if let Some(heading_text) = heading {
            ui.heading(heading_text);
            ui.add_space(10.0);
        }
        content(ui);
    });
}

/// Render a small upper-case section label
pub fn render_section_label(ui: &mut egui::Ui, text: &str, color: egui::Color32) {
    ui.label(egui::RichText::new(text).small().strong().color(color));
}
