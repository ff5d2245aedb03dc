use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::{ModelError, UnknownCategory};
use crate::validation::{is_valid_slug, slugify, Validate, Violations};

/// Closed set of catalog categories. Wire names are the storefront's slugs;
/// the English names are accepted on input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductCategory {
    #[serde(rename = "sac", alias = "bag")]
    Bag,
    #[serde(rename = "pochette", alias = "pouch")]
    Pouch,
    #[serde(rename = "sandale", alias = "sandal")]
    Sandal,
    #[serde(rename = "accessoire", alias = "accessory")]
    Accessory,
    #[serde(rename = "personnalise", alias = "custom")]
    Custom,
    #[serde(rename = "saisonnier", alias = "seasonal")]
    Seasonal,
}

impl ProductCategory {
    pub const ALL: [ProductCategory; 6] = [
        ProductCategory::Bag,
        ProductCategory::Pouch,
        ProductCategory::Sandal,
        ProductCategory::Accessory,
        ProductCategory::Custom,
        ProductCategory::Seasonal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProductCategory::Bag => "sac",
            ProductCategory::Pouch => "pochette",
            ProductCategory::Sandal => "sandale",
            ProductCategory::Accessory => "accessoire",
            ProductCategory::Custom => "personnalise",
            ProductCategory::Seasonal => "saisonnier",
        }
    }

    fn alias(&self) -> &'static str {
        match self {
            ProductCategory::Bag => "bag",
            ProductCategory::Pouch => "pouch",
            ProductCategory::Sandal => "sandal",
            ProductCategory::Accessory => "accessory",
            ProductCategory::Custom => "custom",
            ProductCategory::Seasonal => "seasonal",
        }
    }
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductCategory {
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
pub struct Product {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub category: ProductCategory,
    pub price: u64,
    pub description: String,
    pub images: Vec<String>,
    pub is_featured: bool,
    pub in_stock: bool,
    pub slug: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    pub category: ProductCategory,
    pub price: u64,
    pub description: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default = "in_stock_default")]
    pub in_stock: bool,
    /// Derived from `name` when left empty.
    #[serde(default)]
    pub slug: String,
}

fn in_stock_default() -> bool { true }

impl Validate for NewProduct {
    fn normalize(&mut self) {
        self.name = self.name.trim().to_string();
        self.slug = self.slug.trim().to_string();
        if self.slug.is_empty() {
            self.slug = slugify(&self.name);
        }
    }

    fn validate(&self) -> Result<(), ModelError> {
        let mut v = Violations::new();
        v.non_empty("name", &self.name);
        v.non_empty("description", &self.description);
        v.non_empty_list("images", &self.images);
        if self.slug.is_empty() {
            v.push("slug", "is required");
        } else if !is_valid_slug(&self.slug) {
            v.push("slug", "must contain only lowercase letters, digits and '-'");
        }
        v.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn input() -> NewProduct {
        NewProduct {
            name: "Sac Test".into(),
            category: ProductCategory::Bag,
            price: 10_000,
            description: "d".into(),
            images: vec!["x.jpg".into()],
            is_featured: false,
            in_stock: true,
            slug: "sac-test".into(),
        }
    }

    #[test]
    fn category_accepts_wire_names_and_aliases() {
        assert_eq!("sac".parse::<ProductCategory>(), Ok(ProductCategory::Bag));
        assert_eq!("Bag".parse::<ProductCategory>(), Ok(ProductCategory::Bag));
        assert_eq!(" saisonnier ".parse::<ProductCategory>(), Ok(ProductCategory::Seasonal));
        assert!("all".parse::<ProductCategory>().is_err());
        let c: ProductCategory = serde_json::from_value(json!("pouch")).unwrap();
        assert_eq!(serde_json::to_value(c).unwrap(), json!("pochette"));
    }

    #[test]
    fn unknown_category_fails_to_decode() {
        let raw = json!({"name": "x", "category": "bijou", "price": 1, "description": "d"});
        assert!(serde_json::from_value::<NewProduct>(raw).is_err());
    }

    #[test]
    fn camel_case_wire_and_underscore_id() {
        let raw = json!({
            "_id": "abc", "name": "Sac", "category": "sac", "price": 5,
            "description": "d", "images": ["a.jpg"], "isFeatured": true,
            "inStock": false, "slug": "sac"
        });
        let p: Product = serde_json::from_value(raw).unwrap();
        assert_eq!(p.id, "abc");
        assert!(p.is_featured);
        let out = serde_json::to_value(&p).unwrap();
        assert_eq!(out["id"], "abc");
        assert!(out.get("_id").is_none());
        assert_eq!(out["inStock"], false);
    }

    #[test]
    fn empty_slug_is_derived_from_name() {
        let mut p = NewProduct { slug: String::new(), name: " Pochette Été ".into(), ..input() };
        p.normalize();
        assert_eq!(p.slug, "pochette-ete");
        assert!(p.validate().is_ok());
    }

    #[test]
    fn rejects_missing_images_and_bad_slug() {
        let p = NewProduct { images: vec![], slug: "Bad Slug".into(), ..input() };
        let err = p.validate().unwrap_err();
        let fields: Vec<_> = err.violations().iter().map(|f| f.field.clone()).collect();
        assert_eq!(fields, ["images", "slug"]);
    }
}
