//! Service layer for the storefront content.
//! - `storage`: the generic in-memory record store and id generators.
//! - `content`: the five collections, seed data and validated operations.
//! - `auth`: admin console login and bearer token checks.

pub mod auth;
pub mod content;
pub mod errors;
pub mod storage;
