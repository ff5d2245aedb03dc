use std::{str::FromStr, sync::Arc};

use common::metrics::{RECORDS_CREATED_TOTAL, RECORDS_DELETED_TOTAL};
use tokio::sync::RwLock;

use super::ids::IdGenerator;

/// An entity kind the store can hold: a record with a store-assigned `id`,
/// built from its creation input.
pub trait Record: Clone + Send + Sync + 'static {
    /// The record minus its `id`.
    type Input: Send;

    /// Short name used in logs, metrics and not-found messages.
    const KIND: &'static str;

    fn id(&self) -> &str;

    fn from_input(id: String, input: Self::Input) -> Self;
}

/// Records carrying a category from a closed set.
pub trait Categorized: Record {
    type Category: PartialEq + FromStr + Send + Sync;

    fn category(&self) -> &Self::Category;
}

/// In-memory collection of one entity kind.
///
/// Listing follows insertion order. The collection has its own lock, so
/// stores for different kinds never contend.
pub struct RecordStore<E> {
    records: RwLock<Vec<E>>,
    ids: Arc<dyn IdGenerator>,
}

impl<E: Record> RecordStore<E> {
    pub fn new(ids: Arc<dyn IdGenerator>) -> Self {
        Self { records: RwLock::new(Vec::new()), ids }
    }

    /// Assign a fresh id, store and return the record.
    pub async fn create(&self, input: E::Input) -> E {
        let record = E::from_input(self.ids.next_id(), input);
        self.records.write().await.push(record.clone());
        RECORDS_CREATED_TOTAL.with_label_values(&[E::KIND]).inc();
        record
    }

    /// All records, in insertion order.
    pub async fn list(&self) -> Vec<E> {
        self.records.read().await.clone()
    }

    pub async fn get(&self, id: &str) -> Option<E> {
        let records = self.records.read().await;
        records.iter().find(|r| r.id() == id).cloned()
    }

    /// Replace the whole record under `id`, keeping its id and position.
    pub async fn replace(&self, id: &str, input: E::Input) -> Option<E> {
        let mut records = self.records.write().await;
        let slot = records.iter_mut().find(|r| r.id() == id)?;
        *slot = E::from_input(id.to_string(), input);
        Some(slot.clone())
    }

    /// Returns whether the record existed.
    pub async fn delete(&self, id: &str) -> bool {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|r| r.id() != id);
        let existed = records.len() != before;
        drop(records);
        if existed {
            RECORDS_DELETED_TOTAL.with_label_values(&[E::KIND]).inc();
        }
        existed
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

impl<E: Categorized> RecordStore<E> {
    pub async fn list_by_category(&self, category: &E::Category) -> Vec<E> {
        let records = self.records.read().await;
        records.iter().filter(|r| r.category() == category).cloned().collect()
    }
}
