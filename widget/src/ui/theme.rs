//! # GUI Theme
//!
//! Dark trading theme: black background, white text, red accent.

use egui::{Color32, Context, Stroke, Visuals};

/// Colors used by the buy form
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub background: Color32,
    pub normal: Color32,
    /// Accent (buttons, selection)
    pub selected: Color32,
    pub border: Color32,
    /// Secondary text
    pub dim: Color32,
    pub success: Color32,
    pub error: Color32,
    pub warning: Color32,
    pub info: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color32::from_rgb(0, 0, 0),
            normal: Color32::from_rgb(255, 255, 255),
            selected: Color32::from_rgb(204, 0, 0),
            border: Color32::from_rgb(51, 51, 51),
            dim: Color32::from_rgb(150, 150, 150),
            success: Color32::from_rgb(0, 255, 0),
            error: Color32::from_rgb(255, 0, 0),
            warning: Color32::from_rgb(255, 170, 0),
            info: Color32::from_rgb(100, 150, 255),
        }
    }
}

impl Theme {
    /// egui visuals matching this palette
    pub fn visuals(&self) -> Visuals {
        let mut visuals = Visuals::dark();
        visuals.panel_fill = self.background;
        visuals.window_fill = self.background;
        visuals.override_text_color = Some(self.normal);
        visuals.selection.bg_fill = self.selected;
        visuals.selection.stroke = Stroke::new(1.0, self.normal);
        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, self.border);
        visuals
    }

    pub fn apply(&self, ctx: &Context) {
        ctx.set_visuals(self.visuals());
    }
}
