use clinic_core::AppointmentStatus;
use egui::{ComboBox, Context, Grid};

use super::{DialogAction, DialogFrame, action_row, error_row, text_row};
use crate::models::{AppointmentField, AppointmentForm};
use crate::theme::Theme;

/// Renders the New Appointment modal; returns the action chosen this frame.
pub fn show(
    ctx: &Context,
    theme: &Theme,
    form: &mut AppointmentForm,
) -> DialogAction {
    let focus_patient = form.take_focus(AppointmentField::Patient);
    let focus_doctor = form.take_focus(AppointmentField::Doctor);
    let focus_date = form.take_focus(AppointmentField::Date);
    let focus_time = form.take_focus(AppointmentField::Time);

    DialogFrame::new("new-appointment-dialog", "New Appointment", theme.green).show(
        ctx,
        theme,
        |ui| {
            Grid::new("appointment-form-grid")
                .num_columns(2)
                .spacing([12.0, 10.0])
                .show(ui, |ui| {
                    text_row(ui, theme, "Patient Name *", &mut form.patient, focus_patient);
                    text_row(ui, theme, "Doctor *", &mut form.doctor, focus_doctor);
                    text_row(ui, theme, "Date (YYYY-MM-DD) *", &mut form.date, focus_date);
                    text_row(ui, theme, "Time (HH:MM)", &mut form.time, focus_time);

                    ui.label("Status");
                    ComboBox::from_id_salt("appointment-status")
                        .selected_text(form.status.label())
                        .show_ui(ui, |ui| {
                            for status in AppointmentStatus::all() {
                                ui.selectable_value(&mut form.status, *status, status.label());
                            }
                        });
                    ui.end_row();
                });

            error_row(ui, theme, form.error.as_ref());
            action_row(ui, theme, "Save Appointment", theme.green)
        },
    )
}
