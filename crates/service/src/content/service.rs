use std::sync::Arc;

use common::metrics::VALIDATION_FAILURES_TOTAL;
use models::Validate;
use tracing::{info, warn};

use super::{Collection, ContentStore};
use crate::errors::ServiceError;
use crate::storage::Categorized;

/// Category filter value meaning "no filter".
pub const ALL_CATEGORIES: &str = "all";

/// Validated operations over any content collection.
///
/// Inputs are normalized and validated here, once, before the store sees
/// them; the store itself never rejects a call.
#[derive(Clone)]
pub struct ContentService {
    store: Arc<ContentStore>,
}

impl ContentService {
    pub fn new(store: Arc<ContentStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &ContentStore {
        &self.store
    }

    pub async fn list<E: Collection>(&self) -> Vec<E> {
        E::collection(&self.store).list().await
    }

    /// List with an optional raw category filter.
    ///
    /// Absent, blank or `all` means no filter. A value outside the closed set
    /// matches nothing and yields an empty list rather than an error.
    pub async fn list_filtered<E>(&self, category: Option<&str>) -> Vec<E>
    where
        E: Collection + Categorized,
    {
        let store = E::collection(&self.store);
        let raw = match category.map(str::trim) {
            None | Some("") => return store.list().await,
            Some(raw) if raw.eq_ignore_ascii_case(ALL_CATEGORIES) => return store.list().await,
            Some(raw) => raw,
        };
        match raw.parse::<E::Category>() {
            Ok(c) => store.list_by_category(&c).await,
            Err(_) => Vec::new(),
        }
    }

    pub async fn find<E: Collection>(&self, id: &str) -> Result<E, ServiceError> {
        E::collection(&self.store)
            .get(id)
            .await
            .ok_or_else(|| ServiceError::not_found(E::KIND, id))
    }

    pub async fn create<E>(&self, mut input: E::Input) -> Result<E, ServiceError>
    where
        E: Collection,
        E::Input: Validate,
    {
        check::<E>(&mut input)?;
        let created = E::collection(&self.store).create(input).await;
        info!(kind = E::KIND, id = %created.id(), "record created");
        Ok(created)
    }

    /// Whole-record replacement; the id is kept.
    pub async fn replace<E>(&self, id: &str, mut input: E::Input) -> Result<E, ServiceError>
    where
        E: Collection,
        E::Input: Validate,
    {
        check::<E>(&mut input)?;
        let replaced = E::collection(&self.store)
            .replace(id, input)
            .await
            .ok_or_else(|| ServiceError::not_found(E::KIND, id))?;
        info!(kind = E::KIND, id = %id, "record replaced");
        Ok(replaced)
    }

    pub async fn remove<E: Collection>(&self, id: &str) -> Result<(), ServiceError> {
        if E::collection(&self.store).delete(id).await {
            info!(kind = E::KIND, id = %id, "record deleted");
            Ok(())
        } else {
            Err(ServiceError::not_found(E::KIND, id))
        }
    }
}

fn check<E>(input: &mut E::Input) -> Result<(), ServiceError>
where
    E: Collection,
    E::Input: Validate,
{
    input.normalize();
    input.validate().map_err(|e| {
        VALIDATION_FAILURES_TOTAL.with_label_values(&[E::KIND]).inc();
        warn!(kind = E::KIND, error = %e, "payload rejected");
        ServiceError::from(e)
    })
}
