use super::model::Product;
use super::value_objects::{BrandKind, SortOrder};

/// Brand criterion: a specific brand, or every brand of a kind.
#[derive(Debug, Clone, PartialEq)]
pub enum BrandSelector {
    Id(String),
    Kind(BrandKind),
}

/// Composable listing criteria; every field is optional and they AND together.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    /// Matches the category slug or id.
    pub category: Option<String>,
    pub brand: Option<BrandSelector>,
    /// Case-insensitive substring, OR across name, description, brand name
    /// and category name.
    pub query: Option<String>,
}

impl ProductFilter {
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(category) = &self.category {
            let matched = product
                .category
                .as_ref()
                .is_some_and(|c| c.slug == *category || c.id == *category);
            if !matched {
                return false;
            }
        }

        if let Some(brand) = &self.brand {
            let matched = match (brand, product.brand.as_ref()) {
                (BrandSelector::Id(id), Some(b)) => b.id == *id,
                (BrandSelector::Kind(kind), Some(b)) => b.kind == *kind,
                (_, None) => false,
            };
            if !matched {
                return false;
            }
        }

        if let Some(query) = &self.query {
            let needle = query.to_lowercase();
            let mut haystacks = vec![
                product.name.to_lowercase(),
                product.description.to_lowercase(),
            ];
            if let Some(brand) = &product.brand {
                haystacks.push(brand.name.to_lowercase());
            }
            if let Some(category) = &product.category {
                haystacks.push(category.name.to_lowercase());
            }
            if !haystacks.iter().any(|h| h.contains(&needle)) {
                return false;
            }
        }

        true
    }

    /// Returns the matching subset, preserving the input order.
    pub fn apply(&self, products: &[Product]) -> Vec<Product> {
        products
            .iter()
            .filter(|p| self.matches(p))
            .cloned()
            .collect()
    }
}

/// Returns a newly ordered copy of the listing; the input is never mutated.
/// Sorting is stable, so equal keys keep their relative order.
pub fn sort_products(products: &[Product], order: SortOrder) -> Vec<Product> {
    let mut sorted = products.to_vec();
    match order {
        SortOrder::Newest => sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortOrder::PriceLowToHigh => sorted.sort_by_key(Product::effective_price),
        SortOrder::PriceHighToLow => {
            sorted.sort_by(|a, b| b.effective_price().cmp(&a.effective_price()));
        }
    }
    sorted
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};

    use super::*;
    use crate::domain::catalog::model::{Brand, Category};

    fn product(id: &str, name: &str, price: i64, discount: i64) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            description: String::new(),
            price,
            discount,
            images: vec![],
            brand: None,
            category: None,
            created_at: Utc::now(),
        }
    }

    fn toy_category() -> Category {
        Category {
            id: "c1".to_string(),
            name: "Action Figures".to_string(),
            slug: "action-figures".to_string(),
        }
    }

    fn own_brand(name: &str) -> Brand {
        Brand {
            id: "b1".to_string(),
            name: name.to_string(),
            kind: BrandKind::Own,
        }
    }

    #[test]
    fn should_match_everything_with_empty_filter() {
        let products = [product("p1", "Figure", 500, 0), product("p2", "Mug", 300, 0)];

        let filtered = ProductFilter::default().apply(&products);

        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn should_filter_by_category_slug_preserving_order() {
        let mut in_category = product("p1", "Figure", 500, 0);
        in_category.category = Some(toy_category());
        let mut also_in = product("p3", "Statue", 900, 0);
        also_in.category = Some(toy_category());
        let products = [in_category.clone(), product("p2", "Mug", 300, 0), also_in.clone()];

        let filter = ProductFilter {
            category: Some("action-figures".to_string()),
            ..Default::default()
        };
        let filtered = filter.apply(&products);

        assert_eq!(filtered, vec![in_category, also_in]);
    }

    #[test]
    fn should_filter_by_category_id_as_well_as_slug() {
        let mut p = product("p1", "Figure", 500, 0);
        p.category = Some(toy_category());

        let filter = ProductFilter {
            category: Some("c1".to_string()),
            ..Default::default()
        };

        assert!(filter.matches(&p));
    }

    #[test]
    fn should_filter_by_brand_kind() {
        let mut own = product("p1", "Figure", 500, 0);
        own.brand = Some(own_brand("House Brand"));
        let third_party = product("p2", "Mug", 300, 0);

        let filter = ProductFilter {
            brand: Some(BrandSelector::Kind(BrandKind::Own)),
            ..Default::default()
        };
        let filtered = filter.apply(&[own.clone(), third_party]);

        assert_eq!(filtered, vec![own]);
    }

    #[test]
    fn should_match_query_against_name_and_brand_case_insensitively() {
        let named = product("p1", "Iron Man Figure", 500, 0);
        let mut branded = product("p2", "Anvil", 300, 0);
        branded.brand = Some(own_brand("Iron Forge"));
        let unrelated = product("p3", "Mug", 200, 0);

        let filter = ProductFilter {
            query: Some("iron".to_string()),
            ..Default::default()
        };
        let filtered = filter.apply(&[named.clone(), branded.clone(), unrelated]);

        assert_eq!(filtered, vec![named, branded]);
    }

    #[test]
    fn should_not_mutate_input_when_sorting() {
        let products = vec![product("p1", "A", 500, 0), product("p2", "B", 300, 50)];
        let before = products.clone();

        let _ = sort_products(&products, SortOrder::PriceLowToHigh);

        assert_eq!(products, before);
    }

    #[test]
    fn should_sort_by_effective_price_ascending() {
        let products = [product("p1", "A", 500, 0), product("p2", "B", 300, 50)];

        let sorted = sort_products(&products, SortOrder::PriceLowToHigh);

        let prices: Vec<i64> = sorted.iter().map(Product::effective_price).collect();
        assert_eq!(prices, vec![250, 500]);
    }

    #[test]
    fn should_sort_by_effective_price_descending() {
        let products = [product("p1", "A", 500, 100), product("p2", "B", 900, 0)];

        let sorted = sort_products(&products, SortOrder::PriceHighToLow);

        let prices: Vec<i64> = sorted.iter().map(Product::effective_price).collect();
        assert_eq!(prices, vec![900, 400]);
    }

    #[test]
    fn should_sort_newest_first_by_creation_timestamp() {
        let mut older = product("p1", "A", 500, 0);
        older.created_at = Utc::now() - Duration::days(2);
        let newer = product("p2", "B", 300, 0);

        let sorted = sort_products(&[older.clone(), newer.clone()], SortOrder::Newest);

        assert_eq!(sorted[0].id, newer.id);
        assert_eq!(sorted[1].id, older.id);
    }
}
