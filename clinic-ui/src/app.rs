use clinic_core::{NewAppointment, NewPatient};
use egui::{Align, Color32, Layout, Margin, RichText};
use tracing::info;

use crate::dialogs::{self, DialogAction};
use crate::models::{AppointmentForm, PatientForm};
use crate::screens;
use crate::theme::Theme;
use crate::widgets::{RoundedButton, SearchBar};

/// Which screen is currently active; drives the sidebar highlight and the
/// content area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Dashboard,
    Patients,
    Appointments,
    Staff,
    Settings,
}

impl Screen {
    /// MAIN-section navigation entries, in sidebar order.
    pub fn main_nav() -> &'static [Screen] {
        &[Screen::Dashboard, Screen::Patients, Screen::Appointments]
    }

    /// ADMIN-section navigation entries.
    pub fn admin_nav() -> &'static [Screen] {
        &[Screen::Staff, Screen::Settings]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Patients => "Patients",
            Self::Appointments => "Appointments",
            Self::Staff => "Staff",
            Self::Settings => "Settings",
        }
    }
}

/// The dialog currently suspending the main window, if any.
///
/// At most one dialog is open; each open starts from a fresh form.
#[derive(Debug)]
pub enum ActiveDialog {
    AddPatient(PatientForm),
    AddAppointment(AppointmentForm),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Info,
    Success,
    Error,
}

/// Called at most once per successful patient submission.
pub type PatientHandler = Box<dyn FnMut(&NewPatient)>;
/// Called at most once per successful appointment submission.
pub type AppointmentHandler = Box<dyn FnMut(&NewAppointment)>;

/// Top-level application state.
///
/// Everything lives on the UI dispatch thread; the completion handlers
/// are the only outward contract. The defaults log the record — there is
/// no persistence layer behind them yet.
pub struct ClinicApp {
    pub current_screen: Screen,
    pub search: SearchBar,
    pub dialog: Option<ActiveDialog>,
    pub status_message: Option<(String, MessageType)>,
    pub theme: Theme,
    on_patient_saved: PatientHandler,
    on_appointment_saved: AppointmentHandler,
}

impl Default for ClinicApp {
    fn default() -> Self {
        Self::new()
    }
}

impl ClinicApp {
    pub fn new() -> Self {
        Self {
            current_screen: Screen::default(),
            search: SearchBar::default(),
            dialog: None,
            status_message: None,
            theme: Theme::default(),
            on_patient_saved: Box::new(|patient| info!(%patient, "patient saved")),
            on_appointment_saved: Box::new(|appointment| info!(%appointment, "appointment saved")),
        }
    }

    /// Replaces the patient completion handler.
    pub fn on_patient_saved(
        mut self,
        handler: impl FnMut(&NewPatient) + 'static,
    ) -> Self {
        self.on_patient_saved = Box::new(handler);
        self
    }

    /// Replaces the appointment completion handler.
    pub fn on_appointment_saved(
        mut self,
        handler: impl FnMut(&NewAppointment) + 'static,
    ) -> Self {
        self.on_appointment_saved = Box::new(handler);
        self
    }

    pub fn show_message(
        &mut self,
        message: impl Into<String>,
        message_type: MessageType,
    ) {
        self.status_message = Some((message.into(), message_type));
    }

    pub fn clear_message(&mut self) {
        self.status_message = None;
    }

    /// Opens the Add Patient dialog with fresh, unpopulated fields.
    pub fn open_patient_dialog(&mut self) {
        self.dialog = Some(ActiveDialog::AddPatient(PatientForm::new()));
    }

    /// Opens the New Appointment dialog with today's date prefilled.
    pub fn open_appointment_dialog(&mut self) {
        self.dialog = Some(ActiveDialog::AddAppointment(AppointmentForm::new()));
    }

    /// Closes the open dialog unconditionally, discarding entered values.
    pub fn cancel_dialog(&mut self) {
        self.dialog = None;
    }

    /// Validates the patient form; on success hands the record to the
    /// completion handler, shows a confirmation, and closes the dialog.
    /// On failure the dialog stays open with the inline message set.
    pub fn submit_patient(&mut self) {
        let Some(ActiveDialog::AddPatient(form)) = &mut self.dialog else {
            return;
        };
        let Some(patient) = form.validate() else {
            return;
        };

        (self.on_patient_saved)(&patient);
        self.show_message(
            format!("Patient '{}' added successfully", patient.name),
            MessageType::Success,
        );
        self.dialog = None;
    }

    /// Appointment counterpart of [`ClinicApp::submit_patient`].
    pub fn submit_appointment(&mut self) {
        let Some(ActiveDialog::AddAppointment(form)) = &mut self.dialog else {
            return;
        };
        let Some(appointment) = form.validate() else {
            return;
        };

        (self.on_appointment_saved)(&appointment);
        self.show_message(
            format!(
                "Appointment for '{}' on {} saved",
                appointment.patient, appointment.date
            ),
            MessageType::Success,
        );
        self.dialog = None;
    }

    /// Enter in the search field. There is no list view to filter yet, so
    /// the query is logged and echoed in the status bar.
    pub fn run_search(&mut self) {
        let query = self.search.query().to_string();
        info!(%query, "search submitted");
        if query.is_empty() {
            self.clear_message();
        } else {
            self.show_message(format!("Search: {query}"), MessageType::Info);
        }
    }

    fn show_sidebar(
        &mut self,
        ctx: &egui::Context,
        theme: &Theme,
    ) {
        egui::SidePanel::left("sidebar")
            .resizable(false)
            .exact_width(210.0)
            .frame(
                egui::Frame::new()
                    .fill(theme.sidebar)
                    .inner_margin(Margin::symmetric(14, 22)),
            )
            .show(ctx, |ui| {
                ui.label(
                    RichText::new("Smart Clinic")
                        .size(16.0)
                        .strong()
                        .color(Color32::WHITE),
                );
                ui.label(RichText::new("Management System").size(11.0).color(theme.muted));
                ui.add_space(12.0);
                ui.separator();

                self.nav_section(ui, theme, "MAIN", Screen::main_nav());
                self.nav_section(ui, theme, "ADMIN", Screen::admin_nav());

                ui.with_layout(Layout::bottom_up(Align::Center), |ui| {
                    ui.add_space(6.0);
                    ui.label(
                        RichText::new("v1.0  ·  Smart Clinic")
                            .size(10.0)
                            .color(theme.muted),
                    );
                });
            });
    }

    fn nav_section(
        &mut self,
        ui: &mut egui::Ui,
        theme: &Theme,
        title: &str,
        entries: &[Screen],
    ) {
        ui.add_space(10.0);
        ui.label(RichText::new(title).size(10.0).strong().color(theme.muted));
        ui.add_space(4.0);

        for screen in entries {
            let selected = self.current_screen == *screen;
            let color = if selected {
                Color32::WHITE
            } else {
                theme.sidebar_text
            };
            let text = RichText::new(screen.label()).size(13.0).color(color);
            if ui.selectable_label(selected, text).clicked() {
                self.current_screen = *screen;
            }
        }
    }

    fn show_top_bar(
        &mut self,
        ui: &mut egui::Ui,
        theme: &Theme,
    ) {
        ui.horizontal(|ui| {
            let button_span = 150.0 + 180.0 + 2.0 * ui.spacing().item_spacing.x;
            let search_width = (ui.available_width() - button_span).max(160.0);

            ui.scope(|ui| {
                ui.set_width(search_width);
                if self.search.show(ui, theme) {
                    self.run_search();
                }
            });

            let add_patient = RoundedButton::new("+  Add Patient", theme.accent)
                .size(egui::vec2(150.0, 36.0))
                .show(ui, theme);
            if add_patient.clicked() {
                self.open_patient_dialog();
            }

            let new_appointment = RoundedButton::new("+  New Appointment", theme.green)
                .size(egui::vec2(180.0, 36.0))
                .show(ui, theme);
            if new_appointment.clicked() {
                self.open_appointment_dialog();
            }
        });
    }

    fn show_status_bar(
        &mut self,
        ctx: &egui::Context,
        theme: &Theme,
    ) {
        let Some((message, message_type)) = self.status_message.clone() else {
            return;
        };

        egui::TopBottomPanel::bottom("status-bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let color = match message_type {
                    MessageType::Info => theme.muted,
                    MessageType::Success => theme.green,
                    MessageType::Error => theme.error,
                };
                ui.colored_label(color, message);
                if ui.small_button("✖").clicked() {
                    self.clear_message();
                }
            });
        });
    }

    fn show_dialog(
        &mut self,
        ctx: &egui::Context,
        theme: &Theme,
    ) {
        let action = match &mut self.dialog {
            None => return,
            Some(ActiveDialog::AddPatient(form)) => dialogs::patient::show(ctx, theme, form),
            Some(ActiveDialog::AddAppointment(form)) => {
                dialogs::appointment::show(ctx, theme, form)
            }
        };

        match action {
            DialogAction::None => {}
            DialogAction::Cancel => self.cancel_dialog(),
            DialogAction::Save => {
                if matches!(self.dialog, Some(ActiveDialog::AddPatient(_))) {
                    self.submit_patient();
                } else {
                    self.submit_appointment();
                }
            }
        }
    }
}

impl eframe::App for ClinicApp {
    fn update(
        &mut self,
        ctx: &egui::Context,
        _frame: &mut eframe::Frame,
    ) {
        let theme = self.theme.clone();

        self.show_sidebar(ctx, &theme);
        self.show_status_bar(ctx, &theme);

        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(theme.bg)
                    .inner_margin(Margin::same(20)),
            )
            .show(ctx, |ui| {
                self.show_top_bar(ui, &theme);
                ui.add_space(12.0);
                screens::show(ui, &theme, self.current_screen);
            });

        self.show_dialog(ctx, &theme);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use pretty_assertions::assert_eq;

    use super::*;

    fn app_with_probes() -> (
        ClinicApp,
        Rc<RefCell<Vec<NewPatient>>>,
        Rc<RefCell<Vec<NewAppointment>>>,
    ) {
        let patients = Rc::new(RefCell::new(Vec::new()));
        let appointments = Rc::new(RefCell::new(Vec::new()));
        let patient_probe = patients.clone();
        let appointment_probe = appointments.clone();

        let app = ClinicApp::new()
            .on_patient_saved(move |p: &NewPatient| patient_probe.borrow_mut().push(p.clone()))
            .on_appointment_saved(move |a: &NewAppointment| {
                appointment_probe.borrow_mut().push(a.clone())
            });

        (app, patients, appointments)
    }

    fn patient_form(app: &mut ClinicApp) -> &mut PatientForm {
        match &mut app.dialog {
            Some(ActiveDialog::AddPatient(form)) => form,
            other => panic!("expected patient dialog, got {other:?}"),
        }
    }

    fn appointment_form(app: &mut ClinicApp) -> &mut AppointmentForm {
        match &mut app.dialog {
            Some(ActiveDialog::AddAppointment(form)) => form,
            other => panic!("expected appointment dialog, got {other:?}"),
        }
    }

    #[test]
    fn valid_patient_submission_invokes_handler_once_and_closes() {
        let (mut app, patients, _) = app_with_probes();
        app.open_patient_dialog();
        let form = patient_form(&mut app);
        form.name = "Jane Doe".to_string();
        form.age = "30".to_string();

        app.submit_patient();

        assert_eq!(patients.borrow().len(), 1);
        let saved = patients.borrow()[0].clone();
        assert_eq!(saved.name, "Jane Doe");
        assert_eq!(saved.age, 30);
        assert_eq!(saved.gender, clinic_core::Gender::Unset);
        assert!(app.dialog.is_none());
        let (message, message_type) = app.status_message.expect("confirmation expected");
        assert_eq!(message, "Patient 'Jane Doe' added successfully");
        assert_eq!(message_type, MessageType::Success);
    }

    #[test]
    fn invalid_patient_submission_keeps_dialog_open_without_handler() {
        let (mut app, patients, _) = app_with_probes();
        app.open_patient_dialog();
        patient_form(&mut app).age = "30".to_string();

        app.submit_patient();

        assert_eq!(patients.borrow().len(), 0);
        let form = patient_form(&mut app);
        assert_eq!(form.error.unwrap().to_string(), "Full Name is required");
        assert_eq!(form.age, "30");
    }

    #[test]
    fn cancel_discards_entries_without_invoking_handler() {
        let (mut app, patients, _) = app_with_probes();
        app.open_patient_dialog();
        let form = patient_form(&mut app);
        form.name = "Jane Doe".to_string();
        form.age = "30".to_string();

        app.cancel_dialog();

        assert!(app.dialog.is_none());
        assert_eq!(patients.borrow().len(), 0);
    }

    #[test]
    fn reopening_a_dialog_starts_from_fresh_fields() {
        let (mut app, _, _) = app_with_probes();
        app.open_patient_dialog();
        patient_form(&mut app).name = "draft".to_string();
        app.cancel_dialog();

        app.open_patient_dialog();

        assert_eq!(patient_form(&mut app).name, "");
    }

    #[test]
    fn bad_appointment_date_never_reaches_the_handler() {
        let (mut app, _, appointments) = app_with_probes();
        app.open_appointment_dialog();
        let form = appointment_form(&mut app);
        form.patient = "Jane Doe".to_string();
        form.doctor = "Dr. Smith".to_string();
        form.date = "2024/01/01".to_string();

        app.submit_appointment();

        assert_eq!(appointments.borrow().len(), 0);
        assert_eq!(
            appointment_form(&mut app).error.unwrap().to_string(),
            "Date must be in YYYY-MM-DD format"
        );
    }

    #[test]
    fn valid_appointment_submission_closes_and_confirms() {
        let (mut app, _, appointments) = app_with_probes();
        app.open_appointment_dialog();
        let form = appointment_form(&mut app);
        form.patient = "Jane Doe".to_string();
        form.doctor = "Dr. Smith".to_string();
        form.date = "2024-01-15".to_string();

        app.submit_appointment();

        assert_eq!(appointments.borrow().len(), 1);
        assert!(app.dialog.is_none());
        let (message, message_type) = app.status_message.expect("confirmation expected");
        assert_eq!(message, "Appointment for 'Jane Doe' on 2024-01-15 saved");
        assert_eq!(message_type, MessageType::Success);
    }

    #[test]
    fn empty_search_clears_the_status_message() {
        let (mut app, _, _) = app_with_probes();
        app.show_message("old", MessageType::Error);

        app.run_search();

        assert_eq!(app.status_message, None);
    }
}
