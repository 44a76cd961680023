use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};

use crate::{
    AppState,
    error::Result,
    models::{ContactPage, InquiryAcknowledgement, InquiryInput},
    services::{catalog_service, inquiry_service},
};

pub async fn create(State(state): State<AppState>) -> Result<Json<ContactPage>> {
    let page = catalog_service::contact_page(state.store.as_ref()).await?;

    Ok(Json(page))
}

pub async fn store(
    State(state): State<AppState>,
    payload: std::result::Result<Json<InquiryInput>, JsonRejection>,
) -> Result<Json<InquiryAcknowledgement>> {
    let Json(payload) = payload?;
    let ack = inquiry_service::submit_inquiry(state.store.as_ref(), payload).await?;

    Ok(Json(ack))
}
