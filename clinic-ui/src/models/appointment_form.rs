use chrono::{Local, NaiveDate};
use clinic_core::{AppointmentStatus, FieldError, NewAppointment, validate};

/// Appointment dialog fields that can receive a focus redirect after a
/// failed submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppointmentField {
    Patient,
    Doctor,
    Date,
    Time,
}

/// String-backed state for the New Appointment dialog.
#[derive(Debug, Clone)]
pub struct AppointmentForm {
    pub patient: String,
    pub doctor: String,
    pub date: String,
    pub time: String,
    pub status: AppointmentStatus,
    /// First validation failure from the last submit attempt, if any.
    pub error: Option<FieldError>,
    focus: Option<AppointmentField>,
}

impl Default for AppointmentForm {
    fn default() -> Self {
        Self::new()
    }
}

impl AppointmentForm {
    /// Fresh form with today's date and the default 09:00 slot prefilled.
    pub fn new() -> Self {
        Self::with_date(Local::now().date_naive())
    }

    /// Same as [`AppointmentForm::new`] with an explicit prefill date.
    pub fn with_date(today: NaiveDate) -> Self {
        Self {
            patient: String::new(),
            doctor: String::new(),
            date: today.format(validate::DATE_FORMAT).to_string(),
            time: "09:00".to_string(),
            status: AppointmentStatus::default(),
            error: None,
            focus: None,
        }
    }

    /// True exactly once after a failed submit named `field`.
    pub fn take_focus(
        &mut self,
        field: AppointmentField,
    ) -> bool {
        if self.focus == Some(field) {
            self.focus = None;
            true
        } else {
            false
        }
    }

    /// Validates sequentially: patient, doctor, then the date format.
    ///
    /// A date failure leaves every other field exactly as entered.
    pub fn validate(&mut self) -> Option<NewAppointment> {
        self.error = None;

        let patient = match validate::require("Patient Name", &self.patient) {
            Ok(patient) => patient,
            Err(e) => return self.fail(AppointmentField::Patient, e),
        };
        let doctor = match validate::require("Doctor", &self.doctor) {
            Ok(doctor) => doctor,
            Err(e) => return self.fail(AppointmentField::Doctor, e),
        };
        let date = match validate::parse_date("Date", &self.date) {
            Ok(date) => date,
            Err(e) => return self.fail(AppointmentField::Date, e),
        };

        Some(NewAppointment {
            patient,
            doctor,
            date,
            time: self.time.trim().to_string(),
            status: self.status,
        })
    }

    fn fail(
        &mut self,
        field: AppointmentField,
        error: FieldError,
    ) -> Option<NewAppointment> {
        self.error = Some(error);
        self.focus = Some(field);
        None
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn prefill_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).expect("valid date")
    }

    fn valid_form() -> AppointmentForm {
        AppointmentForm {
            patient: "Jane Doe".to_string(),
            doctor: "Dr. Smith".to_string(),
            ..AppointmentForm::with_date(prefill_date())
        }
    }

    #[test]
    fn fresh_form_prefills_date_time_and_status() {
        let form = AppointmentForm::with_date(prefill_date());

        assert_eq!(form.date, "2024-01-15");
        assert_eq!(form.time, "09:00");
        assert_eq!(form.status, AppointmentStatus::Scheduled);
    }

    #[test]
    fn missing_patient_is_reported_first() {
        let mut form = AppointmentForm::with_date(prefill_date());

        assert_eq!(form.validate(), None);
        assert_eq!(form.error.unwrap().to_string(), "Patient Name is required");
        assert!(form.take_focus(AppointmentField::Patient));
    }

    #[test]
    fn missing_doctor_is_reported_after_patient() {
        let mut form = AppointmentForm::with_date(prefill_date());
        form.patient = "Jane Doe".to_string();

        assert_eq!(form.validate(), None);
        assert_eq!(form.error, Some(FieldError::Required("Doctor")));
    }

    #[test]
    fn slash_separated_date_fails_the_format_check() {
        let mut form = valid_form();
        form.date = "2024/01/01".to_string();

        assert_eq!(form.validate(), None);
        assert_eq!(
            form.error.unwrap().to_string(),
            "Date must be in YYYY-MM-DD format"
        );
        assert!(form.take_focus(AppointmentField::Date));
    }

    #[test]
    fn date_failure_keeps_the_other_entries() {
        let mut form = valid_form();
        form.date = "not a date".to_string();
        form.time = "14:30".to_string();

        assert_eq!(form.validate(), None);
        assert_eq!(form.patient, "Jane Doe");
        assert_eq!(form.doctor, "Dr. Smith");
        assert_eq!(form.time, "14:30");
    }

    #[test]
    fn valid_submission_builds_the_record() {
        let mut form = valid_form();
        form.status = AppointmentStatus::Completed;

        let appointment = form.validate().expect("form should validate");

        assert_eq!(appointment.patient, "Jane Doe");
        assert_eq!(appointment.doctor, "Dr. Smith");
        assert_eq!(appointment.date, prefill_date());
        assert_eq!(appointment.time, "09:00");
        assert_eq!(appointment.status, AppointmentStatus::Completed);
    }
}
