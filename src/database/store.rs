use async_trait::async_trait;

use crate::{
    error::Result,
    models::{
        Category, CategoryWithCount, Inquiry, NewCategory, NewInquiry, NewProduct, Product,
        ProductFilter, ProductOption, ProductWithCategory,
    },
};

/// Relational operations the storefront needs.
///
/// Uniqueness of slugs and the referential actions (category delete
/// cascades to products, product delete clears `inquiries.product_id`) belong
/// to the store, not to its callers.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    async fn ping(&self) -> Result<()>;

    /// Every category with its available-product count, in id order.
    async fn categories_with_available_count(&self) -> Result<Vec<CategoryWithCount>>;

    async fn find_category_by_slug(&self, slug: &str) -> Result<Option<Category>>;

    async fn count_available_products(&self, filter: ProductFilter) -> Result<i64>;

    /// Available products matching `filter`, newest first.
    async fn available_products(
        &self,
        filter: ProductFilter,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<ProductWithCategory>>;

    async fn find_product_by_slug(&self, slug: &str) -> Result<Option<ProductWithCategory>>;

    async fn product_exists(&self, id: i64) -> Result<bool>;

    async fn available_product_options(&self) -> Result<Vec<ProductOption>>;

    async fn insert_inquiry(&self, inquiry: NewInquiry) -> Result<Inquiry>;

    async fn find_inquiry(&self, id: i64) -> Result<Option<Inquiry>>;

    async fn create_category(&self, category: NewCategory) -> Result<Category>;

    async fn create_product(&self, product: NewProduct) -> Result<Product>;

    async fn delete_category(&self, id: i64) -> Result<bool>;

    async fn delete_product(&self, id: i64) -> Result<bool>;
}
