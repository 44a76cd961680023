use sqlx::PgPool;

use crate::{
    error::Result,
    models::{Inquiry, NewInquiry},
    queries::map_constraint_error,
};

const INQUIRY_COLUMNS: &str = "id, name, email, company, country, subject, message, \
     product_id, status, created_at, updated_at";

pub async fn create_inquiry(pool: &PgPool, req: &NewInquiry) -> Result<Inquiry> {
    let inquiry = sqlx::query_as::<_, Inquiry>(&format!(
        "INSERT INTO inquiries (name, email, company, country, subject, message, product_id)
         VALUES ($1, $2, $3, $4, $5, $6, $7)
         RETURNING {}",
        INQUIRY_COLUMNS
    ))
    .bind(&req.name)
    .bind(&req.email)
    .bind(&req.company)
    .bind(&req.country)
    .bind(&req.subject)
    .bind(&req.message)
    .bind(req.product_id)
    .fetch_one(pool)
    .await
    .map_err(|e| map_constraint_error(e, "Inquiry"))?;

    Ok(inquiry)
}

pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<Inquiry>> {
    let inquiry = sqlx::query_as::<_, Inquiry>(&format!(
        "SELECT {} FROM inquiries WHERE id = $1",
        INQUIRY_COLUMNS
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(inquiry)
}
