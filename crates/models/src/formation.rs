use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::validation::{Validate, Violations};

/// A training session offered by the workshop.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Formation {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub description: String,
    /// Free text, e.g. "3 jours".
    pub duration: String,
    pub price: u64,
    pub materials: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_session: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFormation {
    pub name: String,
    pub description: String,
    pub duration: String,
    pub price: u64,
    #[serde(default)]
    pub materials: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub next_session: Option<String>,
}

impl Validate for NewFormation {
    fn normalize(&mut self) {
        self.name = self.name.trim().to_string();
        self.duration = self.duration.trim().to_string();
        for opt in [&mut self.image, &mut self.next_session] {
            if opt.as_deref().is_some_and(|s| s.trim().is_empty()) {
                *opt = None;
            }
        }
    }

    fn validate(&self) -> Result<(), ModelError> {
        let mut v = Violations::new();
        v.non_empty("name", &self.name);
        v.non_empty("description", &self.description);
        v.non_empty("duration", &self.duration);
        v.finish()
    }
}
