pub mod category_queries;
pub mod inquiry_queries;
pub mod product_queries;

use crate::error::AppError;

/// Turns constraint violations on insert into client-facing errors.
pub(crate) fn map_constraint_error(err: sqlx::Error, entity: &str) -> AppError {
    if let sqlx::Error::Database(ref db) = err {
        if db.is_unique_violation() {
            return AppError::Conflict(format!("{} slug already exists", entity));
        }
        if db.is_foreign_key_violation() {
            return AppError::BadRequest(format!("{} references a missing record", entity));
        }
    }
    AppError::Database(err)
}
