use crate::pii::Masked;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            "other" => Ok(Gender::Other),
            _ => Err(format!("unknown gender: {s}")),
        }
    }
}

/// Contact details for the lead passenger on a booking.
///
/// Name, email and phone are required by the backend; age is optional.
/// Email and phone are masked in Debug output but serialize verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PassengerDetails {
    pub name: String,
    pub email: Masked<String>,
    pub phone: Masked<String>,
    #[serde(default)]
    pub age: Option<u8>,
    pub gender: Gender,
}

impl PassengerDetails {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        age: Option<u8>,
        gender: Gender,
    ) -> Self {
        Self {
            name: name.into(),
            email: Masked(email.into()),
            phone: Masked(phone.into()),
            age,
            gender,
        }
    }
}
