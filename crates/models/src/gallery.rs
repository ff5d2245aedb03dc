use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::{ModelError, UnknownCategory};
use crate::validation::{Validate, Violations};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GalleryCategory {
    #[serde(rename = "atelier", alias = "workshop")]
    Workshop,
    #[serde(rename = "creation")]
    Creation,
    #[serde(rename = "humanitaire", alias = "humanitarian")]
    Humanitarian,
    #[serde(rename = "autre", alias = "other")]
    Other,
}

impl GalleryCategory {
    pub const ALL: [GalleryCategory; 4] = [
        GalleryCategory::Workshop,
        GalleryCategory::Creation,
        GalleryCategory::Humanitarian,
        GalleryCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GalleryCategory::Workshop => "atelier",
            GalleryCategory::Creation => "creation",
            GalleryCategory::Humanitarian => "humanitaire",
            GalleryCategory::Other => "autre",
        }
    }

    fn alias(&self) -> &'static str {
        match self {
            GalleryCategory::Workshop => "workshop",
            GalleryCategory::Creation => "creation",
            GalleryCategory::Humanitarian => "humanitarian",
            GalleryCategory::Other => "other",
        }
    }
}

impl fmt::Display for GalleryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GalleryCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == wanted || c.alias() == wanted)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryPhoto {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub category: GalleryCategory,
    pub image_url: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGalleryPhoto {
    #[serde(default)]
    pub name: Option<String>,
    pub category: GalleryCategory,
    pub image_url: String,
}

impl Validate for NewGalleryPhoto {
    fn normalize(&mut self) {
        self.image_url = self.image_url.trim().to_string();
        if self.name.as_deref().is_some_and(|n| n.trim().is_empty()) {
            self.name = None;
        }
    }

    fn validate(&self) -> Result<(), ModelError> {
        let mut v = Violations::new();
        v.non_empty("imageUrl", &self.image_url);
        v.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_aliases_and_renders_wire_name() {
        let p: NewGalleryPhoto =
            serde_json::from_value(json!({"category": "workshop", "imageUrl": "a.jpg"})).unwrap();
        assert_eq!(p.category, GalleryCategory::Workshop);
        assert_eq!(serde_json::to_value(p.category).unwrap(), json!("atelier"));
        assert!(p.name.is_none());
    }

    #[test]
    fn blank_name_becomes_none_and_url_required() {
        let mut p = NewGalleryPhoto {
            name: Some("  ".into()),
            category: GalleryCategory::Other,
            image_url: " ".into(),
        };
        p.normalize();
        assert!(p.name.is_none());
        assert_eq!(p.validate().unwrap_err().violations()[0].field, "imageUrl");
    }

    #[test]
    fn parses_filter_values() {
        assert_eq!("humanitaire".parse::<GalleryCategory>(), Ok(GalleryCategory::Humanitarian));
        assert_eq!("OTHER".parse::<GalleryCategory>(), Ok(GalleryCategory::Other));
        assert!("all".parse::<GalleryCategory>().is_err());
    }
}
