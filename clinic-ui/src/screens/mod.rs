//! Content panes for the navigation screens.
//!
//! Every screen is still a placeholder card — list views for created
//! records are out of scope until a backing store exists. The card
//! styling (white surface, hairline border) matches the dialogs.

use egui::{RichText, Stroke, Ui};

use crate::app::Screen;
use crate::theme::Theme;

/// Renders the content card for the selected screen.
pub fn show(
    ui: &mut Ui,
    theme: &Theme,
    screen: Screen,
) {
    egui::Frame::new()
        .fill(theme.card)
        .stroke(Stroke::new(1.0, theme.border))
        .corner_radius(4)
        .show(ui, |ui| {
            ui.set_min_size(ui.available_size());
            ui.centered_and_justified(|ui| {
                ui.label(
                    RichText::new(screen.label())
                        .size(24.0)
                        .strong()
                        .color(theme.muted),
                );
            });
        });
}
