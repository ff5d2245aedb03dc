//! The storefront's five collections and the operations over them.

pub mod seed;
pub mod service;

use std::sync::Arc;

use models::{
    ContactMessage, Formation, GalleryCategory, GalleryPhoto, ImpactStory, NewContactMessage,
    NewFormation, NewGalleryPhoto, NewImpactStory, NewProduct, Product, ProductCategory,
};

use crate::storage::{Categorized, IdGenerator, Record, RecordStore};

pub use service::ContentService;

/// A record kind that lives in one of the [`ContentStore`] collections.
pub trait Collection: Record {
    fn collection(store: &ContentStore) -> &RecordStore<Self>;
}

/// Holds one [`RecordStore`] per content kind. Built once at startup and
/// shared through the router state.
pub struct ContentStore {
    pub products: RecordStore<Product>,
    pub formations: RecordStore<Formation>,
    pub impact_stories: RecordStore<ImpactStory>,
    pub gallery: RecordStore<GalleryPhoto>,
    pub contacts: RecordStore<ContactMessage>,
}

impl ContentStore {
    /// Empty collections sharing one id generator.
    pub fn empty(ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            products: RecordStore::new(Arc::clone(&ids)),
            formations: RecordStore::new(Arc::clone(&ids)),
            impact_stories: RecordStore::new(Arc::clone(&ids)),
            gallery: RecordStore::new(Arc::clone(&ids)),
            contacts: RecordStore::new(ids),
        }
    }

    /// Collections populated with the example catalog. Contact messages
    /// start empty.
    pub async fn seeded(ids: Arc<dyn IdGenerator>) -> Self {
        let store = Self::empty(ids);
        seed::populate(&store).await;
        store
    }
}

impl Record for Product {
    type Input = NewProduct;
    const KIND: &'static str = "product";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_input(id: String, i: NewProduct) -> Self {
        Product {
            id,
            name: i.name,
            category: i.category,
            price: i.price,
            description: i.description,
            images: i.images,
            is_featured: i.is_featured,
            in_stock: i.in_stock,
            slug: i.slug,
        }
    }
}

impl Categorized for Product {
    type Category = ProductCategory;

    fn category(&self) -> &ProductCategory {
        &self.category
    }
}

impl Collection for Product {
    fn collection(store: &ContentStore) -> &RecordStore<Self> {
        &store.products
    }
}

impl Record for Formation {
    type Input = NewFormation;
    const KIND: &'static str = "formation";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_input(id: String, i: NewFormation) -> Self {
        Formation {
            id,
            name: i.name,
            description: i.description,
            duration: i.duration,
            price: i.price,
            materials: i.materials,
            image: i.image,
            next_session: i.next_session,
        }
    }
}

impl Collection for Formation {
    fn collection(store: &ContentStore) -> &RecordStore<Self> {
        &store.formations
    }
}

impl Record for ImpactStory {
    type Input = NewImpactStory;
    const KIND: &'static str = "impact";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_input(id: String, i: NewImpactStory) -> Self {
        ImpactStory {
            id,
            name: i.name,
            description: i.description,
            images: i.images,
            date: i.date,
            location: i.location,
        }
    }
}

impl Collection for ImpactStory {
    fn collection(store: &ContentStore) -> &RecordStore<Self> {
        &store.impact_stories
    }
}

impl Record for GalleryPhoto {
    type Input = NewGalleryPhoto;
    const KIND: &'static str = "gallery";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_input(id: String, i: NewGalleryPhoto) -> Self {
        GalleryPhoto { id, name: i.name, category: i.category, image_url: i.image_url }
    }
}

impl Categorized for GalleryPhoto {
    type Category = GalleryCategory;

    fn category(&self) -> &GalleryCategory {
        &self.category
    }
}

impl Collection for GalleryPhoto {
    fn collection(store: &ContentStore) -> &RecordStore<Self> {
        &store.gallery
    }
}

impl Record for ContactMessage {
    type Input = NewContactMessage;
    const KIND: &'static str = "contact";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_input(id: String, i: NewContactMessage) -> Self {
        ContactMessage {
            id,
            name: i.name,
            phone: i.phone,
            email: i.email,
            subject: i.subject,
            message: i.message,
        }
    }
}

impl Collection for ContactMessage {
    fn collection(store: &ContentStore) -> &RecordStore<Self> {
        &store.contacts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{SequentialIds, UuidIds};

    #[tokio::test]
    async fn seeded_store_has_catalog_but_no_messages() {
        let store = ContentStore::seeded(Arc::new(UuidIds)).await;
        assert!(!store.products.list().await.is_empty());
        assert!(!store.formations.list().await.is_empty());
        assert!(!store.impact_stories.list().await.is_empty());
        assert!(!store.gallery.list().await.is_empty());
        assert!(store.contacts.list().await.is_empty());
    }

    #[tokio::test]
    async fn seeds_get_ids_from_the_shared_generator() {
        let store = ContentStore::seeded(Arc::new(SequentialIds::new("seed"))).await;
        let mut ids = Vec::new();
        ids.extend(store.products.list().await.into_iter().map(|r| r.id));
        ids.extend(store.formations.list().await.into_iter().map(|r| r.id));
        ids.extend(store.impact_stories.list().await.into_iter().map(|r| r.id));
        ids.extend(store.gallery.list().await.into_iter().map(|r| r.id));
        assert!(ids.iter().all(|id| id.starts_with("seed-")));
        let unique: std::collections::HashSet<_> = ids.iter().collect();
        assert_eq!(unique.len(), ids.len());
    }

    #[tokio::test]
    async fn empty_store_is_empty() {
        let store = ContentStore::empty(Arc::new(UuidIds));
        assert_eq!(store.products.len().await, 0);
        assert_eq!(store.gallery.len().await, 0);
    }

    #[tokio::test]
    async fn every_category_has_seed_coverage_where_expected() {
        let store = ContentStore::seeded(Arc::new(UuidIds)).await;
        assert!(!store.products.list_by_category(&ProductCategory::Bag).await.is_empty());
        assert!(!store.gallery.list_by_category(&GalleryCategory::Workshop).await.is_empty());
    }
}
