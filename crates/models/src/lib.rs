//! Storefront content entities.
//!
//! Each kind comes as a pair: the stored record (with its `id`) and the
//! creation input the admin console or contact form submits (without `id`).
//! Field rules live next to each input via [`validation::Validate`].

pub mod contact;
pub mod errors;
pub mod formation;
pub mod gallery;
pub mod impact;
pub mod product;
pub mod validation;

pub use contact::{ContactMessage, NewContactMessage};
pub use errors::{FieldViolation, ModelError, UnknownCategory};
pub use formation::{Formation, NewFormation};
pub use gallery::{GalleryCategory, GalleryPhoto, NewGalleryPhoto};
pub use impact::{ImpactStory, NewImpactStory};
pub use product::{NewProduct, Product, ProductCategory};
pub use validation::Validate;
