use chrono::{DateTime, Utc};
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::{
    error::Result,
    models::{Category, NewProduct, Product, ProductFilter, ProductOption, ProductWithCategory},
    queries::map_constraint_error,
};

const PRODUCT_COLUMNS: &str = "p.id, p.name, p.description, p.price, p.slug, p.category_id, \
     p.images, p.featured, p.available, p.created_at, p.updated_at";

const SELECT_WITH_CATEGORY: &str = "SELECT p.id, p.name, p.description, p.price, p.slug, \
     p.category_id, p.images, p.featured, p.available, p.created_at, p.updated_at, \
     c.name AS category_name, c.description AS category_description, \
     c.slug AS category_slug, c.created_at AS category_created_at, \
     c.updated_at AS category_updated_at \
     FROM products p \
     INNER JOIN categories c ON c.id = p.category_id";

#[derive(sqlx::FromRow)]
struct ProductWithCategoryRow {
    #[sqlx(flatten)]
    product: Product,
    category_name: String,
    category_description: Option<String>,
    category_slug: String,
    category_created_at: DateTime<Utc>,
    category_updated_at: DateTime<Utc>,
}

impl From<ProductWithCategoryRow> for ProductWithCategory {
    fn from(row: ProductWithCategoryRow) -> Self {
        let category = Category {
            id: row.product.category_id,
            name: row.category_name,
            description: row.category_description,
            slug: row.category_slug,
            created_at: row.category_created_at,
            updated_at: row.category_updated_at,
        };

        Self {
            product: row.product,
            category,
        }
    }
}

fn push_filter(query: &mut QueryBuilder<'_, Postgres>, filter: ProductFilter) {
    query.push(" WHERE p.available = true");

    if let Some(category_id) = filter.category_id {
        query.push(" AND p.category_id = ");
        query.push_bind(category_id);
    }

    if filter.featured_only {
        query.push(" AND p.featured = true");
    }

    if let Some(exclude_id) = filter.exclude_id {
        query.push(" AND p.id <> ");
        query.push_bind(exclude_id);
    }
}

pub async fn count_available(pool: &PgPool, filter: ProductFilter) -> Result<i64> {
    let mut query: QueryBuilder<Postgres> = QueryBuilder::new("SELECT COUNT(*) FROM products p");
    push_filter(&mut query, filter);

    let total = query.build_query_scalar::<i64>().fetch_one(pool).await?;

    Ok(total)
}

pub async fn find_available(
    pool: &PgPool,
    filter: ProductFilter,
    limit: i64,
    offset: i64,
) -> Result<Vec<ProductWithCategory>> {
    let mut query: QueryBuilder<Postgres> = QueryBuilder::new(SELECT_WITH_CATEGORY);
    push_filter(&mut query, filter);

    query.push(" ORDER BY p.created_at DESC, p.id DESC");
    query.push(" LIMIT ");
    query.push_bind(limit);
    query.push(" OFFSET ");
    query.push_bind(offset);

    let rows = query
        .build_query_as::<ProductWithCategoryRow>()
        .fetch_all(pool)
        .await?;

    Ok(rows.into_iter().map(ProductWithCategory::from).collect())
}

pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<ProductWithCategory>> {
    let row = sqlx::query_as::<_, ProductWithCategoryRow>(&format!(
        "{} WHERE p.slug = $1",
        SELECT_WITH_CATEGORY
    ))
    .bind(slug)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(ProductWithCategory::from))
}

pub async fn exists(pool: &PgPool, id: i64) -> Result<bool> {
    let exists = sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM products WHERE id = $1)")
        .bind(id)
        .fetch_one(pool)
        .await?;

    Ok(exists)
}

pub async fn find_available_options(pool: &PgPool) -> Result<Vec<ProductOption>> {
    let options = sqlx::query_as::<_, ProductOption>(
        "SELECT id, name FROM products WHERE available = true ORDER BY id ASC",
    )
    .fetch_all(pool)
    .await?;

    Ok(options)
}

pub async fn create_product(pool: &PgPool, req: &NewProduct) -> Result<Product> {
    let product = sqlx::query_as::<_, Product>(&format!(
        "INSERT INTO products AS p (
            name, description, price, slug, category_id, images, featured, available
         )
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
         RETURNING {}",
        PRODUCT_COLUMNS
    ))
    .bind(&req.name)
    .bind(&req.description)
    .bind(req.stored_price())
    .bind(req.resolved_slug())
    .bind(req.category_id)
    .bind(&req.images)
    .bind(req.featured)
    .bind(req.available)
    .fetch_one(pool)
    .await
    .map_err(|e| map_constraint_error(e, "Product"))?;

    Ok(product)
}

/// Inquiries keep their row; ON DELETE SET NULL clears the reference
pub async fn delete_product(pool: &PgPool, id: i64) -> Result<bool> {
    let result = sqlx::query("DELETE FROM products WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
