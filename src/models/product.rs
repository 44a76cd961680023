use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    models::{Category, CategoryWithCount, Page},
    utils::slug::slugify,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: Option<Decimal>,
    pub slug: String,
    pub category_id: i64,
    pub images: Vec<String>,
    pub featured: bool,
    pub available: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    pub fn first_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductWithCategory {
    #[serde(flatten)]
    pub product: Product,
    pub category: Category,
}

/// Entry of the contact form's product selector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct ProductOption {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: Option<Decimal>,
    pub slug: Option<String>,
    pub category_id: i64,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default = "default_available")]
    pub available: bool,
}

fn default_available() -> bool {
    true
}

impl NewProduct {
    pub fn new(name: impl Into<String>, category_id: i64) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            price: None,
            slug: None,
            category_id,
            images: Vec::new(),
            featured: false,
            available: true,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_price(mut self, price: Decimal) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn with_images(mut self, images: Vec<String>) -> Self {
        self.images = images;
        self
    }

    pub fn featured(mut self, featured: bool) -> Self {
        self.featured = featured;
        self
    }

    pub fn available(mut self, available: bool) -> Self {
        self.available = available;
        self
    }

    /// The explicit slug verbatim, or one derived from the name.
    pub fn resolved_slug(&self) -> String {
        match self.slug.as_deref() {
            Some(slug) if !slug.trim().is_empty() => slug.to_string(),
            _ => slugify(&self.name),
        }
    }

    /// Price held to two decimal places, as the column stores it.
    pub fn stored_price(&self) -> Option<Decimal> {
        self.price.map(|price| {
            let mut price = price;
            price.rescale(2);
            price
        })
    }
}

/// Narrowing applied to available-product listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProductFilter {
    pub category_id: Option<i64>,
    pub featured_only: bool,
    pub exclude_id: Option<i64>,
}

impl ProductFilter {
    pub fn in_category(category_id: i64) -> Self {
        Self {
            category_id: Some(category_id),
            ..Self::default()
        }
    }

    pub fn featured() -> Self {
        Self {
            featured_only: true,
            ..Self::default()
        }
    }

    pub fn matches(&self, product: &Product) -> bool {
        product.available
            && self.category_id.is_none_or(|id| product.category_id == id)
            && (!self.featured_only || product.featured)
            && self.exclude_id.is_none_or(|id| product.id != id)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
}

impl PageQuery {
    /// Missing, non-numeric, and sub-1 page numbers all mean page 1.
    pub fn page(&self) -> u32 {
        self.page
            .as_deref()
            .and_then(|p| p.trim().parse::<u32>().ok())
            .filter(|p| *p >= 1)
            .unwrap_or(1)
    }
}

#[derive(Debug, Serialize)]
pub struct HomePage {
    pub featured_products: Vec<ProductWithCategory>,
    pub categories: Vec<CategoryWithCount>,
    pub latest_products: Vec<ProductWithCategory>,
}

#[derive(Debug, Serialize)]
pub struct ProductsPage {
    pub products: Page<ProductWithCategory>,
    pub categories: Vec<CategoryWithCount>,
}

#[derive(Debug, Serialize)]
pub struct ProductPage {
    pub product: ProductWithCategory,
    pub related_products: Vec<ProductWithCategory>,
}

#[derive(Debug, Serialize)]
pub struct CategoryPage {
    pub category: Category,
    pub products: Page<ProductWithCategory>,
    pub categories: Vec<CategoryWithCount>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::dec;

    #[test]
    fn slug_is_derived_from_name_when_absent() {
        let product = NewProduct::new("Bucket Hat - Floral Print", 1);
        assert_eq!(product.resolved_slug(), "bucket-hat-floral-print");
    }

    #[test]
    fn explicit_slug_is_kept_verbatim() {
        let product = NewProduct::new("Bucket Hat", 1).with_slug("Summer_Bucket");
        assert_eq!(product.resolved_slug(), "Summer_Bucket");
    }

    #[test]
    fn price_is_stored_with_two_places() {
        let product = NewProduct::new("Cap", 1).with_price(dec!(15));
        assert_eq!(product.stored_price().map(|p| p.to_string()), Some("15.00".to_string()));

        let product = NewProduct::new("Cap", 1).with_price(dec!(19.999));
        assert_eq!(product.stored_price(), Some(dec!(20.00)));
    }

    #[test]
    fn page_query_falls_back_to_first_page() {
        let q = |p: Option<&str>| PageQuery {
            page: p.map(str::to_string),
        };
        assert_eq!(q(None).page(), 1);
        assert_eq!(q(Some("abc")).page(), 1);
        assert_eq!(q(Some("0")).page(), 1);
        assert_eq!(q(Some("-3")).page(), 1);
        assert_eq!(q(Some("4")).page(), 4);
    }
}
