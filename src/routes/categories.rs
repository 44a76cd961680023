use axum::{
    Json,
    extract::{Path, Query, State},
};

use crate::{
    AppState,
    error::Result,
    models::{CategoriesPage, CategoryPage, PageQuery},
    services::catalog_service,
};

pub async fn index(State(state): State<AppState>) -> Result<Json<CategoriesPage>> {
    let page = catalog_service::categories_page(state.store.as_ref()).await?;

    Ok(Json(page))
}

pub async fn show(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(params): Query<PageQuery>,
) -> Result<Json<CategoryPage>> {
    let page = catalog_service::category_page(
        state.store.as_ref(),
        &state.catalog,
        &slug,
        params.page(),
    )
    .await?;

    Ok(Json(page))
}
