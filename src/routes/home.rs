use axum::{Json, extract::State};

use crate::{AppState, error::Result, models::HomePage, services::catalog_service};

pub async fn index(State(state): State<AppState>) -> Result<Json<HomePage>> {
    let page = catalog_service::home_page(state.store.as_ref(), &state.catalog).await?;

    Ok(Json(page))
}
