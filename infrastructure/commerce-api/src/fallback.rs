//! Fixed sample data returned when the API has no records yet.
//!
//! An empty listing from the server is documented behavior for a fresh
//! deployment, not an error; the storefront renders these samples instead.

use chrono::Utc;

use business::domain::catalog::model::{Banner, BannerCta, Brand, Category, Product};
use business::domain::catalog::value_objects::BrandKind;

pub fn sample_categories() -> Vec<Category> {
    vec![
        Category {
            id: "sample-cat-1".to_string(),
            name: "Action Figures".to_string(),
            slug: "action-figures".to_string(),
        },
        Category {
            id: "sample-cat-2".to_string(),
            name: "Mugs".to_string(),
            slug: "mugs".to_string(),
        },
    ]
}

pub fn sample_brands() -> Vec<Brand> {
    vec![
        Brand {
            id: "sample-brand-1".to_string(),
            name: "Action House".to_string(),
            kind: BrandKind::Own,
        },
        Brand {
            id: "sample-brand-2".to_string(),
            name: "Iron Forge".to_string(),
            kind: BrandKind::ThirdParty,
        },
    ]
}

pub fn sample_products() -> Vec<Product> {
    let categories = sample_categories();
    let brands = sample_brands();

    vec![
        Product {
            id: "sample-prod-1".to_string(),
            name: "Iron Man Figure".to_string(),
            description: "Die-cast collectible figure".to_string(),
            price: 1999,
            discount: 200,
            images: vec!["https://placehold.co/600x600".to_string()],
            brand: brands.get(1).cloned(),
            category: categories.first().cloned(),
            created_at: Utc::now(),
        },
        Product {
            id: "sample-prod-2".to_string(),
            name: "Hero Mug".to_string(),
            description: "Ceramic mug, 330ml".to_string(),
            price: 499,
            discount: 0,
            images: vec!["https://placehold.co/600x600".to_string()],
            brand: brands.first().cloned(),
            category: categories.get(1).cloned(),
            created_at: Utc::now(),
        },
    ]
}

pub fn sample_banners() -> Vec<Banner> {
    vec![Banner {
        id: "sample-banner-1".to_string(),
        title: "New arrivals".to_string(),
        image_url: "https://placehold.co/1200x400".to_string(),
        link: Some("/products".to_string()),
    }]
}

pub fn sample_banner_cta() -> BannerCta {
    BannerCta {
        heading: "Collect your heroes".to_string(),
        subheading: Some("Free shipping above \u{20b9}1999".to_string()),
        button_label: "Shop now".to_string(),
        button_link: "/products".to_string(),
    }
}
