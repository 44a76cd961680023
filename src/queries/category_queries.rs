use sqlx::PgPool;

use crate::{
    error::Result,
    models::{Category, CategoryWithCount, NewCategory},
    queries::map_constraint_error,
};

/// Find category by slug
pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Category>> {
    let category = sqlx::query_as::<_, Category>(
        "SELECT id, name, description, slug, created_at, updated_at
         FROM categories
         WHERE slug = $1",
    )
    .bind(slug)
    .fetch_optional(pool)
    .await?;

    Ok(category)
}

/// All categories with their available-product counts, aggregated in one pass
pub async fn get_all_with_available_count(pool: &PgPool) -> Result<Vec<CategoryWithCount>> {
    let categories = sqlx::query_as::<_, CategoryWithCount>(
        "SELECT
            c.id,
            c.name,
            c.description,
            c.slug,
            c.created_at,
            c.updated_at,
            COUNT(p.id)::bigint AS available_products_count
         FROM categories c
         LEFT JOIN products p ON p.category_id = c.id AND p.available = true
         GROUP BY c.id
         ORDER BY c.id ASC",
    )
    .fetch_all(pool)
    .await?;

    Ok(categories)
}

pub async fn create_category(pool: &PgPool, req: &NewCategory) -> Result<Category> {
    let category = sqlx::query_as::<_, Category>(
        "INSERT INTO categories (name, description, slug)
         VALUES ($1, $2, $3)
         RETURNING id, name, description, slug, created_at, updated_at",
    )
    .bind(&req.name)
    .bind(&req.description)
    .bind(req.resolved_slug())
    .fetch_one(pool)
    .await
    .map_err(|e| map_constraint_error(e, "Category"))?;

    Ok(category)
}

/// Products go with it through ON DELETE CASCADE
pub async fn delete_category(pool: &PgPool, id: i64) -> Result<bool> {
    let result = sqlx::query("DELETE FROM categories WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
