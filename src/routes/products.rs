use axum::{
    Json,
    extract::{Path, Query, State},
};

use crate::{
    AppState,
    error::Result,
    models::{PageQuery, ProductPage, ProductsPage},
    services::catalog_service,
};

pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<PageQuery>,
) -> Result<Json<ProductsPage>> {
    let page =
        catalog_service::products_page(state.store.as_ref(), &state.catalog, params.page()).await?;

    Ok(Json(page))
}

pub async fn show(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<ProductPage>> {
    let page = catalog_service::product_page(state.store.as_ref(), &state.catalog, &slug).await?;

    Ok(Json(page))
}
