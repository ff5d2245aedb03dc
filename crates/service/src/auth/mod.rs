//! Admin console authentication: password login and bearer token checks.
//!
//! The storefront has a single admin identity. Its password arrives through
//! configuration and only an Argon2 hash of it is kept in memory.

pub mod domain;
pub mod errors;
pub mod service;

pub use service::{AdminAuth, AuthConfig};
