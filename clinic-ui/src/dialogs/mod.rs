//! Modal dialogs for creating records.
//!
//! Both dialogs share [`DialogFrame`]: a centered modal surface with a
//! colored header strip and a card-colored body. While a dialog is open
//! the backdrop swallows all pointer input, so the owner window is
//! suspended until Save or Cancel.

pub mod appointment;
pub mod patient;

use clinic_core::FieldError;
use egui::{Color32, Context, Id, Margin, RichText, Stroke, TextEdit, Ui};

use crate::theme::Theme;
use crate::widgets::RoundedButton;

/// What the user did with an open dialog this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogAction {
    /// Still open, nothing decided.
    None,
    /// Save requested; the owner validates and may keep the dialog open.
    Save,
    /// Dismissed via the Cancel button, Escape, or a backdrop click.
    Cancel,
}

/// Shared modal chrome for the record dialogs.
pub struct DialogFrame<'a> {
    id: Id,
    title: &'a str,
    header_fill: Color32,
    width: f32,
}

impl<'a> DialogFrame<'a> {
    pub fn new(
        id_salt: &str,
        title: &'a str,
        header_fill: Color32,
    ) -> Self {
        Self {
            id: Id::new(id_salt.to_string()),
            title,
            header_fill,
            width: 440.0,
        }
    }

    /// Shows the modal and runs the body closure.
    ///
    /// Escape and backdrop clicks are folded into [`DialogAction::Cancel`]
    /// so the owner has a single dismissal path.
    pub fn show(
        self,
        ctx: &Context,
        theme: &Theme,
        body: impl FnOnce(&mut Ui) -> DialogAction,
    ) -> DialogAction {
        let modal = egui::Modal::new(self.id)
            .frame(
                egui::Frame::new()
                    .fill(theme.card)
                    .stroke(Stroke::new(1.0, theme.border))
                    .corner_radius(theme.corner_radius)
                    .inner_margin(Margin::same(0)),
            )
            .show(ctx, |ui| {
                ui.set_width(self.width);

                egui::Frame::new()
                    .fill(self.header_fill)
                    .inner_margin(Margin::symmetric(20, 14))
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.label(
                            RichText::new(self.title)
                                .size(16.0)
                                .strong()
                                .color(Color32::WHITE),
                        );
                    });

                egui::Frame::new()
                    .inner_margin(Margin::same(20))
                    .show(ui, |ui| body(ui))
                    .inner
            });

        if modal.should_close() && modal.inner == DialogAction::None {
            DialogAction::Cancel
        } else {
            modal.inner
        }
    }
}

/// Label + single-line input row inside a form grid.
///
/// `grab_focus` moves the cursor here for one frame; the forms raise it
/// after a failed submit names this field.
fn text_row(
    ui: &mut Ui,
    theme: &Theme,
    label: &str,
    value: &mut String,
    grab_focus: bool,
) {
    ui.label(RichText::new(label).color(theme.text));
    let response = ui.add(TextEdit::singleline(value).desired_width(260.0));
    if grab_focus {
        response.request_focus();
    }
    ui.end_row();
}

/// Inline validation message row; renders nothing when the last submit
/// passed.
fn error_row(
    ui: &mut Ui,
    theme: &Theme,
    error: Option<&FieldError>,
) {
    if let Some(error) = error {
        ui.add_space(8.0);
        ui.colored_label(theme.error, format!("⚠  {error}"));
    }
}

/// Cancel (left) and Save (right) row shared by both dialogs.
fn action_row(
    ui: &mut Ui,
    theme: &Theme,
    save_label: &str,
    save_fill: Color32,
) -> DialogAction {
    let mut action = DialogAction::None;

    ui.add_space(12.0);
    ui.horizontal(|ui| {
        if ui.button("Cancel").clicked() {
            action = DialogAction::Cancel;
        }
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let save = RoundedButton::new(save_label, save_fill)
                .size(egui::vec2(150.0, 36.0))
                .show(ui, theme);
            if save.clicked() {
                action = DialogAction::Save;
            }
        });
    });

    action
}
