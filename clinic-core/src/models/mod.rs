mod appointment;
mod patient;

pub use appointment::{AppointmentStatus, NewAppointment};
pub use patient::{Gender, NewPatient};
