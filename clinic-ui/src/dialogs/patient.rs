use clinic_core::Gender;
use egui::{ComboBox, Context, Grid};

use super::{DialogAction, DialogFrame, action_row, error_row, text_row};
use crate::models::{PatientField, PatientForm};
use crate::theme::Theme;

/// Renders the Add Patient modal; returns the action chosen this frame.
pub fn show(
    ctx: &Context,
    theme: &Theme,
    form: &mut PatientForm,
) -> DialogAction {
    let focus_name = form.take_focus(PatientField::Name);
    let focus_age = form.take_focus(PatientField::Age);
    let focus_phone = form.take_focus(PatientField::Phone);
    let focus_email = form.take_focus(PatientField::Email);

    DialogFrame::new("add-patient-dialog", "Add New Patient", theme.accent).show(
        ctx,
        theme,
        |ui| {
            Grid::new("patient-form-grid")
                .num_columns(2)
                .spacing([12.0, 10.0])
                .show(ui, |ui| {
                    text_row(ui, theme, "Full Name *", &mut form.name, focus_name);
                    text_row(ui, theme, "Age *", &mut form.age, focus_age);
                    text_row(ui, theme, "Phone", &mut form.phone, focus_phone);
                    text_row(ui, theme, "Email", &mut form.email, focus_email);

                    ui.label("Gender");
                    ComboBox::from_id_salt("patient-gender")
                        .selected_text(form.gender.label())
                        .show_ui(ui, |ui| {
                            for gender in Gender::choices() {
                                ui.selectable_value(&mut form.gender, *gender, gender.label());
                            }
                        });
                    ui.end_row();
                });

            error_row(ui, theme, form.error.as_ref());
            action_row(ui, theme, "Save Patient", theme.accent)
        },
    )
}
