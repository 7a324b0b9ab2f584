use clinic_core::{FieldError, Gender, NewPatient, validate};

/// Patient dialog fields that can receive a focus redirect after a failed
/// submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatientField {
    Name,
    Age,
    Phone,
    Email,
}

/// String-backed state for the Add Patient dialog.
///
/// Every dialog open starts from [`PatientForm::new`]; no draft survives
/// between open/close cycles.
#[derive(Debug, Clone, Default)]
pub struct PatientForm {
    pub name: String,
    pub age: String,
    pub phone: String,
    pub email: String,
    pub gender: Gender,
    /// First validation failure from the last submit attempt, if any.
    pub error: Option<FieldError>,
    focus: Option<PatientField>,
}

impl PatientForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// True exactly once after a failed submit named `field`; the dialog
    /// uses this to move focus to the offending input.
    pub fn take_focus(
        &mut self,
        field: PatientField,
    ) -> bool {
        if self.focus == Some(field) {
            self.focus = None;
            true
        } else {
            false
        }
    }

    /// Validates sequentially, stopping at the first failure.
    ///
    /// On failure the field-specific message is stored, focus is redirected
    /// to the offending field, and every other entry is left untouched.
    pub fn validate(&mut self) -> Option<NewPatient> {
        self.error = None;

        let name = match validate::require("Full Name", &self.name) {
            Ok(name) => name,
            Err(e) => return self.fail(PatientField::Name, e),
        };
        let age = match validate::parse_age("Age", &self.age) {
            Ok(age) => age,
            Err(e) => return self.fail(PatientField::Age, e),
        };

        Some(NewPatient {
            name,
            age,
            phone: validate::optional(&self.phone),
            email: validate::optional(&self.email),
            gender: self.gender,
        })
    }

    fn fail(
        &mut self,
        field: PatientField,
        error: FieldError,
    ) -> Option<NewPatient> {
        self.error = Some(error);
        self.focus = Some(field);
        None
    }
}
