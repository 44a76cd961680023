mod categories;
mod contact;
mod health;
mod home;
mod products;

use axum::{Router, routing::get};

use crate::AppState;

pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/", get(home::index))
        .route("/products", get(products::index))
        .route("/products/{slug}", get(products::show))
        .route("/categories", get(categories::index))
        .route("/categories/{slug}", get(categories::show))
        .route("/contact", get(contact::create).post(contact::store))
        .route("/health-check", get(health::health_check))
        .route("/health-check/ready", get(health::readiness_check))
}
