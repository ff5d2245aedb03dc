//! Storage abstractions for the service layer
//!
//! One generic in-memory collection type, instantiated once per content kind,
//! plus the id generators it draws from.

pub mod ids;
pub mod record_store;

pub use ids::{IdGenerator, SequentialIds, UuidIds};
pub use record_store::{Categorized, Record, RecordStore};
