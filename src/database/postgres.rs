use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    database::{self, CatalogStore},
    error::Result,
    models::{
        Category, CategoryWithCount, Inquiry, NewCategory, NewInquiry, NewProduct, Product,
        ProductFilter, ProductOption, ProductWithCategory,
    },
    queries::{category_queries, inquiry_queries, product_queries},
};

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogStore for PgStore {
    async fn ping(&self) -> Result<()> {
        database::check_health(&self.pool).await
    }

    async fn categories_with_available_count(&self) -> Result<Vec<CategoryWithCount>> {
        category_queries::get_all_with_available_count(&self.pool).await
    }

    async fn find_category_by_slug(&self, slug: &str) -> Result<Option<Category>> {
        category_queries::find_by_slug(&self.pool, slug).await
    }

    async fn count_available_products(&self, filter: ProductFilter) -> Result<i64> {
        product_queries::count_available(&self.pool, filter).await
    }

    async fn available_products(
        &self,
        filter: ProductFilter,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<ProductWithCategory>> {
        product_queries::find_available(&self.pool, filter, limit, offset).await
    }

    async fn find_product_by_slug(&self, slug: &str) -> Result<Option<ProductWithCategory>> {
        product_queries::find_by_slug(&self.pool, slug).await
    }

    async fn product_exists(&self, id: i64) -> Result<bool> {
        product_queries::exists(&self.pool, id).await
    }

    async fn available_product_options(&self) -> Result<Vec<ProductOption>> {
        product_queries::find_available_options(&self.pool).await
    }

    async fn insert_inquiry(&self, inquiry: NewInquiry) -> Result<Inquiry> {
        inquiry_queries::create_inquiry(&self.pool, &inquiry).await
    }

    async fn find_inquiry(&self, id: i64) -> Result<Option<Inquiry>> {
        inquiry_queries::find_by_id(&self.pool, id).await
    }

    async fn create_category(&self, category: NewCategory) -> Result<Category> {
        category_queries::create_category(&self.pool, &category).await
    }

    async fn create_product(&self, product: NewProduct) -> Result<Product> {
        product_queries::create_product(&self.pool, &product).await
    }

    async fn delete_category(&self, id: i64) -> Result<bool> {
        category_queries::delete_category(&self.pool, id).await
    }

    async fn delete_product(&self, id: i64) -> Result<bool> {
        product_queries::delete_product(&self.pool, id).await
    }
}
