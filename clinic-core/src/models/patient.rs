use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Gender {
    /// Initial dropdown state; shown as "Select" and never offered as a choice.
    #[default]
    Unset,
    Male,
    Female,
    Other,
}

impl Gender {
    /// Dropdown choices, in display order. `Unset` is the placeholder, not a choice.
    pub fn choices() -> &'static [Gender] {
        &[Gender::Male, Gender::Female, Gender::Other]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Unset => "Select",
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
        }
    }
}

/// A validated patient record produced by a successful form submission.
///
/// Handed to the completion handler exactly once and never mutated
/// afterwards; there is no update or delete path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPatient {
    pub name: String,
    pub age: u32,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub gender: Gender,
}

impl fmt::Display for NewPatient {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}, age {}", self.name, self.age)
    }
}
