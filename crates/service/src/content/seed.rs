//! Example catalog loaded at startup so the storefront never opens empty.

use models::{
    GalleryCategory, NewFormation, NewGalleryPhoto, NewImpactStory, NewProduct, ProductCategory,
};
use tracing::info;

use super::ContentStore;

/// Create every seed record through the regular `create` path.
pub async fn populate(store: &ContentStore) {
    for p in products() {
        store.products.create(p).await;
    }
    for f in formations() {
        store.formations.create(f).await;
    }
    for s in impact_stories() {
        store.impact_stories.create(s).await;
    }
    for g in gallery() {
        store.gallery.create(g).await;
    }
    info!(
        products = store.products.len().await,
        formations = store.formations.len().await,
        impact_stories = store.impact_stories.len().await,
        gallery = store.gallery.len().await,
        "content store seeded"
    );
}

fn product(
    name: &str,
    category: ProductCategory,
    price: u64,
    description: &str,
    images: &[&str],
    is_featured: bool,
    slug: &str,
) -> NewProduct {
    NewProduct {
        name: name.into(),
        category,
        price,
        description: description.into(),
        images: images.iter().map(|s| s.to_string()).collect(),
        is_featured,
        in_stock: true,
        slug: slug.into(),
    }
}

pub fn products() -> Vec<NewProduct> {
    vec![
        product(
            "Sac cabas en wax",
            ProductCategory::Bag,
            25_000,
            "Grand cabas doublé, anses en cuir tanné végétal.",
            &["/images/products/cabas-wax-1.jpg", "/images/products/cabas-wax-2.jpg"],
            true,
            "sac-cabas-en-wax",
        ),
        product(
            "Sac bandoulière Teranga",
            ProductCategory::Bag,
            18_500,
            "Petit sac bandoulière en cuir et bogolan.",
            &["/images/products/teranga.jpg"],
            false,
            "sac-bandouliere-teranga",
        ),
        product(
            "Pochette brodée",
            ProductCategory::Pouch,
            9_000,
            "Pochette zippée brodée à la main.",
            &["/images/products/pochette-brodee.jpg"],
            true,
            "pochette-brodee",
        ),
        product(
            "Sandales en cuir tressé",
            ProductCategory::Sandal,
            15_000,
            "Sandales plates, semelle cousue, cuir tressé.",
            &["/images/products/sandales-tressees.jpg"],
            false,
            "sandales-en-cuir-tresse",
        ),
        product(
            "Porte-clés perlé",
            ProductCategory::Accessory,
            2_500,
            "Porte-clés en perles de verre recyclé.",
            &["/images/products/porte-cles.jpg"],
            false,
            "porte-cles-perle",
        ),
        product(
            "Sac sur mesure",
            ProductCategory::Custom,
            35_000,
            "Modèle réalisé selon vos dimensions et tissus.",
            &["/images/products/sur-mesure.jpg"],
            false,
            "sac-sur-mesure",
        ),
        product(
            "Panier de Tabaski",
            ProductCategory::Seasonal,
            12_000,
            "Édition limitée pour les fêtes.",
            &["/images/products/tabaski.jpg"],
            false,
            "panier-de-tabaski",
        ),
    ]
}

pub fn formations() -> Vec<NewFormation> {
    vec![
        NewFormation {
            name: "Initiation à la maroquinerie".into(),
            description: "Découpe, piquage sellier et finitions d'un premier sac.".into(),
            duration: "3 jours".into(),
            price: 45_000,
            materials: "Cuir, fil ciré, aiguilles fournis".into(),
            image: Some("/images/formations/maroquinerie.jpg".into()),
            next_session: Some("2024-11-04".into()),
        },
        NewFormation {
            name: "Couture de sandales".into(),
            description: "Patronage et montage d'une paire de sandales.".into(),
            duration: "2 jours".into(),
            price: 30_000,
            materials: "Semelles et lanières fournies".into(),
            image: Some("/images/formations/sandales.jpg".into()),
            next_session: None,
        },
        NewFormation {
            name: "Broderie sur tissu wax".into(),
            description: "Points de base et motifs traditionnels.".into(),
            duration: "1 journée".into(),
            price: 15_000,
            materials: "Apporter un coupon de tissu".into(),
            image: None,
            next_session: Some("2024-12-07".into()),
        },
    ]
}

pub fn impact_stories() -> Vec<NewImpactStory> {
    vec![
        NewImpactStory {
            name: "Atelier de femmes à Thiès".into(),
            description: "Douze artisanes formées et salariées depuis l'ouverture.".into(),
            images: vec!["/images/impact/thies-1.jpg".into(), "/images/impact/thies-2.jpg".into()],
            date: "2023-06-15".into(),
            location: Some("Thiès".into()),
        },
        NewImpactStory {
            name: "Fournitures scolaires".into(),
            description: "Une part de chaque vente finance des kits scolaires.".into(),
            images: vec!["/images/impact/kits.jpg".into()],
            date: "2023-10-02".into(),
            location: Some("Kaolack".into()),
        },
        NewImpactStory {
            name: "Recyclage des chutes de cuir".into(),
            description: "Les chutes deviennent porte-clés et bracelets.".into(),
            images: vec!["/images/impact/recyclage.jpg".into()],
            date: "2024-02-20".into(),
            location: None,
        },
    ]
}

pub fn gallery() -> Vec<NewGalleryPhoto> {
    let photo = |name: Option<&str>, category, url: &str| NewGalleryPhoto {
        name: name.map(str::to_string),
        category,
        image_url: url.into(),
    };
    vec![
        photo(Some("Piquage sellier"), GalleryCategory::Workshop, "/images/gallery/piquage.jpg"),
        photo(None, GalleryCategory::Workshop, "/images/gallery/atelier.jpg"),
        photo(Some("Collection saison sèche"), GalleryCategory::Creation, "/images/gallery/collection.jpg"),
        photo(Some("Remise des kits"), GalleryCategory::Humanitarian, "/images/gallery/kits.jpg"),
        photo(None, GalleryCategory::Other, "/images/gallery/marche.jpg"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::Validate;

    fn assert_valid<T: Validate + Clone + std::fmt::Debug>(items: Vec<T>) {
        assert!(!items.is_empty());
        for item in items {
            let mut normalized = item.clone();
            normalized.normalize();
            assert!(normalized.validate().is_ok(), "invalid seed: {item:?}");
        }
    }

    #[test]
    fn seed_records_pass_validation() {
        assert_valid(products());
        assert_valid(formations());
        assert_valid(impact_stories());
        assert_valid(gallery());
    }

    #[test]
    fn seed_slugs_are_distinct() {
        let slugs: std::collections::HashSet<_> = products().into_iter().map(|p| p.slug).collect();
        assert_eq!(slugs.len(), products().len());
    }
}
