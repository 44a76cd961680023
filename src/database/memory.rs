use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::{
    database::CatalogStore,
    error::{AppError, Result},
    models::{
        Category, CategoryWithCount, Inquiry, InquiryStatus, NewCategory, NewInquiry, NewProduct,
        Product, ProductFilter, ProductOption, ProductWithCategory,
    },
};

#[derive(Default)]
struct Tables {
    categories: Vec<Category>,
    products: Vec<Product>,
    inquiries: Vec<Inquiry>,
    last_category_id: i64,
    last_product_id: i64,
    last_inquiry_id: i64,
}

impl Tables {
    fn category(&self, id: i64) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    fn with_category(&self, product: &Product) -> Option<ProductWithCategory> {
        self.category(product.category_id)
            .map(|category| ProductWithCategory {
                product: product.clone(),
                category: category.clone(),
            })
    }

    /// Matching products, newest first.
    fn matching(&self, filter: ProductFilter) -> Vec<&Product> {
        let mut products: Vec<&Product> =
            self.products.iter().filter(|p| filter.matches(p)).collect();
        products.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        products
    }
}

/// Process-local store with the same constraints as the Postgres schema.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CatalogStore for MemoryStore {
    async fn ping(&self) -> Result<()> {
        Ok(())
    }

    async fn categories_with_available_count(&self) -> Result<Vec<CategoryWithCount>> {
        let tables = self.tables.read().await;

        let categories = tables
            .categories
            .iter()
            .map(|category| CategoryWithCount {
                available_products_count: tables
                    .products
                    .iter()
                    .filter(|p| p.category_id == category.id && p.available)
                    .count() as i64,
                category: category.clone(),
            })
            .collect();

        Ok(categories)
    }

    async fn find_category_by_slug(&self, slug: &str) -> Result<Option<Category>> {
        let tables = self.tables.read().await;
        Ok(tables.categories.iter().find(|c| c.slug == slug).cloned())
    }

    async fn count_available_products(&self, filter: ProductFilter) -> Result<i64> {
        let tables = self.tables.read().await;
        Ok(tables.matching(filter).len() as i64)
    }

    async fn available_products(
        &self,
        filter: ProductFilter,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<ProductWithCategory>> {
        let tables = self.tables.read().await;

        let products = tables
            .matching(filter)
            .into_iter()
            .skip(usize::try_from(offset).unwrap_or(0))
            .take(usize::try_from(limit).unwrap_or(0))
            .filter_map(|p| tables.with_category(p))
            .collect();

        Ok(products)
    }

    async fn find_product_by_slug(&self, slug: &str) -> Result<Option<ProductWithCategory>> {
        let tables = self.tables.read().await;

        Ok(tables
            .products
            .iter()
            .find(|p| p.slug == slug)
            .and_then(|p| tables.with_category(p)))
    }

    async fn product_exists(&self, id: i64) -> Result<bool> {
        let tables = self.tables.read().await;
        Ok(tables.products.iter().any(|p| p.id == id))
    }

    async fn available_product_options(&self) -> Result<Vec<ProductOption>> {
        let tables = self.tables.read().await;

        Ok(tables
            .products
            .iter()
            .filter(|p| p.available)
            .map(|p| ProductOption {
                id: p.id,
                name: p.name.clone(),
            })
            .collect())
    }

    async fn insert_inquiry(&self, inquiry: NewInquiry) -> Result<Inquiry> {
        let mut tables = self.tables.write().await;

        if let Some(product_id) = inquiry.product_id {
            if !tables.products.iter().any(|p| p.id == product_id) {
                return Err(AppError::BadRequest(format!(
                    "Product {} does not exist",
                    product_id
                )));
            }
        }

        tables.last_inquiry_id += 1;
        let now = Utc::now();
        let inquiry = Inquiry {
            id: tables.last_inquiry_id,
            name: inquiry.name,
            email: inquiry.email,
            company: inquiry.company,
            country: inquiry.country,
            subject: inquiry.subject,
            message: inquiry.message,
            product_id: inquiry.product_id,
            status: InquiryStatus::New,
            created_at: now,
            updated_at: now,
        };
        tables.inquiries.push(inquiry.clone());

        Ok(inquiry)
    }

    async fn find_inquiry(&self, id: i64) -> Result<Option<Inquiry>> {
        let tables = self.tables.read().await;
        Ok(tables.inquiries.iter().find(|i| i.id == id).cloned())
    }

    async fn create_category(&self, category: NewCategory) -> Result<Category> {
        let mut tables = self.tables.write().await;

        let slug = category.resolved_slug();
        if tables.categories.iter().any(|c| c.slug == slug) {
            return Err(AppError::Conflict(format!(
                "Category slug '{}' already exists",
                slug
            )));
        }

        tables.last_category_id += 1;
        let now = Utc::now();
        let category = Category {
            id: tables.last_category_id,
            name: category.name,
            description: category.description,
            slug,
            created_at: now,
            updated_at: now,
        };
        tables.categories.push(category.clone());

        Ok(category)
    }

    async fn create_product(&self, product: NewProduct) -> Result<Product> {
        let mut tables = self.tables.write().await;

        if tables.category(product.category_id).is_none() {
            return Err(AppError::BadRequest(format!(
                "Category {} does not exist",
                product.category_id
            )));
        }

        let slug = product.resolved_slug();
        if tables.products.iter().any(|p| p.slug == slug) {
            return Err(AppError::Conflict(format!(
                "Product slug '{}' already exists",
                slug
            )));
        }

        tables.last_product_id += 1;
        let now = Utc::now();
        let product = Product {
            id: tables.last_product_id,
            price: product.stored_price(),
            slug,
            name: product.name,
            description: product.description,
            category_id: product.category_id,
            images: product.images,
            featured: product.featured,
            available: product.available,
            created_at: now,
            updated_at: now,
        };
        tables.products.push(product.clone());

        Ok(product)
    }

    async fn delete_category(&self, id: i64) -> Result<bool> {
        let mut tables = self.tables.write().await;

        let before = tables.categories.len();
        tables.categories.retain(|c| c.id != id);
        if tables.categories.len() == before {
            return Ok(false);
        }

        let removed: Vec<i64> = tables
            .products
            .iter()
            .filter(|p| p.category_id == id)
            .map(|p| p.id)
            .collect();
        tables.products.retain(|p| p.category_id != id);
        for inquiry in tables.inquiries.iter_mut() {
            if inquiry.product_id.is_some_and(|pid| removed.contains(&pid)) {
                inquiry.product_id = None;
            }
        }

        Ok(true)
    }

    async fn delete_product(&self, id: i64) -> Result<bool> {
        let mut tables = self.tables.write().await;

        let before = tables.products.len();
        tables.products.retain(|p| p.id != id);
        if tables.products.len() == before {
            return Ok(false);
        }

        for inquiry in tables.inquiries.iter_mut() {
            if inquiry.product_id == Some(id) {
                inquiry.product_id = None;
            }
        }

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewInquiry;

    fn inquiry_for(product_id: Option<i64>) -> NewInquiry {
        NewInquiry {
            name: "Ann".to_string(),
            email: "ann@x.com".to_string(),
            company: None,
            country: None,
            subject: "Bulk".to_string(),
            message: "Need 500 units".to_string(),
            product_id,
        }
    }

    #[tokio::test]
    async fn duplicate_slugs_conflict() {
        let store = MemoryStore::new();
        let hats = store.create_category(NewCategory::new("Hats")).await.unwrap();
        let err = store.create_category(NewCategory::new("Hats")).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));

        store.create_product(NewProduct::new("Fedora", hats.id)).await.unwrap();
        let err = store
            .create_product(NewProduct::new("Fedora", hats.id))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn product_requires_existing_category() {
        let store = MemoryStore::new();
        let err = store.create_product(NewProduct::new("Orphan", 42)).await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[tokio::test]
    async fn deleting_category_cascades_to_products() {
        let store = MemoryStore::new();
        let caps = store.create_category(NewCategory::new("Caps")).await.unwrap();
        let hats = store.create_category(NewCategory::new("Hats")).await.unwrap();
        let cap = store.create_product(NewProduct::new("Snapback", caps.id)).await.unwrap();
        store.create_product(NewProduct::new("Fedora", hats.id)).await.unwrap();
        let inquiry = store.insert_inquiry(inquiry_for(Some(cap.id))).await.unwrap();

        assert!(store.delete_category(caps.id).await.unwrap());

        assert!(!store.product_exists(cap.id).await.unwrap());
        assert!(store.find_product_by_slug("fedora").await.unwrap().is_some());
        let kept = store.find_inquiry(inquiry.id).await.unwrap().unwrap();
        assert_eq!(kept.product_id, None);
    }

    #[tokio::test]
    async fn deleting_product_clears_inquiry_reference() {
        let store = MemoryStore::new();
        let caps = store.create_category(NewCategory::new("Caps")).await.unwrap();
        let cap = store.create_product(NewProduct::new("Snapback", caps.id)).await.unwrap();
        let inquiry = store.insert_inquiry(inquiry_for(Some(cap.id))).await.unwrap();

        assert!(store.delete_product(cap.id).await.unwrap());
        assert!(!store.delete_product(cap.id).await.unwrap());

        let kept = store.find_inquiry(inquiry.id).await.unwrap().unwrap();
        assert_eq!(kept.product_id, None);
        assert_eq!(kept.subject, "Bulk");
    }

    #[tokio::test]
    async fn inquiry_with_unknown_product_is_rejected() {
        let store = MemoryStore::new();
        let err = store.insert_inquiry(inquiry_for(Some(7))).await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }
}
