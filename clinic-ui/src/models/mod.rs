mod appointment_form;
mod patient_form;

pub use appointment_form::{AppointmentField, AppointmentForm};
pub use patient_form::{PatientField, PatientForm};
