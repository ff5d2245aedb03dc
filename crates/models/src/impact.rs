use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::validation::{Validate, Violations};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactStory {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub description: String,
    pub images: Vec<String>,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewImpactStory {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub images: Vec<String>,
    pub date: String,
    #[serde(default)]
    pub location: Option<String>,
}

impl Validate for NewImpactStory {
    fn normalize(&mut self) {
        self.name = self.name.trim().to_string();
        self.date = self.date.trim().to_string();
        if self.location.as_deref().is_some_and(|l| l.trim().is_empty()) {
            self.location = None;
        }
    }

    fn validate(&self) -> Result<(), ModelError> {
        let mut v = Violations::new();
        v.non_empty("name", &self.name);
        v.non_empty("description", &self.description);
        v.non_empty_list("images", &self.images);
        v.non_empty("date", &self.date);
        v.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn story_needs_an_image() {
        let s = NewImpactStory {
            name: "Puits".into(),
            description: "Forage à Kaolack".into(),
            images: vec![],
            date: "2024-03-01".into(),
            location: None,
        };
        assert_eq!(s.validate().unwrap_err().violations()[0].field, "images");
    }
}
