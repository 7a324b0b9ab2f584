use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AppointmentStatus {
    #[default]
    Scheduled,
    Completed,
    Cancelled,
}

impl AppointmentStatus {
    /// Dropdown choices, in display order.
    pub fn all() -> &'static [AppointmentStatus] {
        &[Self::Scheduled, Self::Completed, Self::Cancelled]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Scheduled => "Scheduled",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }
}

/// A validated appointment record produced by a successful form submission.
///
/// The date has already passed the strict calendar check; the time slot is
/// free text and kept as entered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAppointment {
    pub patient: String,
    pub doctor: String,
    pub date: NaiveDate,
    pub time: String,
    pub status: AppointmentStatus,
}

impl fmt::Display for NewAppointment {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(
            f,
            "{} with {} on {} at {}",
            self.patient, self.doctor, self.date, self.time
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn status_defaults_to_scheduled() {
        assert_eq!(AppointmentStatus::default(), AppointmentStatus::Scheduled);
    }

    #[test]
    fn appointment_display_includes_date_and_time() {
        let appointment = NewAppointment {
            patient: "Jane Doe".to_string(),
            doctor: "Dr. Smith".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 15).expect("valid date"),
            time: "09:00".to_string(),
            status: AppointmentStatus::Scheduled,
        };

        assert_eq!(
            appointment.to_string(),
            "Jane Doe with Dr. Smith on 2024-01-15 at 09:00"
        );
    }
}
