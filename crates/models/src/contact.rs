use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::validation::{is_valid_email, Validate, Violations};

pub const NAME_MIN_CHARS: usize = 2;
pub const PHONE_MIN_CHARS: usize = 8;
pub const MESSAGE_MIN_CHARS: usize = 10;

/// A message left through the contact form. Append-only.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewContactMessage {
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    pub message: String,
}

impl Validate for NewContactMessage {
    fn normalize(&mut self) {
        self.name = self.name.trim().to_string();
        self.phone = self.phone.trim().to_string();
        self.message = self.message.trim().to_string();
        for opt in [&mut self.email, &mut self.subject] {
            let trimmed = opt.as_deref().map(str::trim).map(str::to_string);
            *opt = trimmed.filter(|s| !s.is_empty());
        }
    }

    fn validate(&self) -> Result<(), ModelError> {
        let mut v = Violations::new();
        v.min_chars("name", &self.name, NAME_MIN_CHARS);
        v.min_chars("phone", &self.phone, PHONE_MIN_CHARS);
        if let Some(email) = self.email.as_deref().map(str::trim).filter(|e| !e.is_empty()) {
            if !is_valid_email(email) {
                v.push("email", "must be a valid email address");
            }
        }
        v.min_chars("message", &self.message, MESSAGE_MIN_CHARS);
        v.finish()
    }
}
