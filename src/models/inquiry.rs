use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{models::ProductOption, utils::validation::FormValue};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "inquiry_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum InquiryStatus {
    #[default]
    New,
    Replied,
    Closed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Inquiry {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub country: Option<String>,
    pub subject: String,
    pub message: String,
    pub product_id: Option<i64>,
    pub status: InquiryStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Raw contact form submission. Fields hold whatever was sent so that missing
/// or mistyped values surface as field errors rather than a rejected body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InquiryInput {
    pub name: Option<FormValue>,
    pub email: Option<FormValue>,
    pub company: Option<FormValue>,
    pub country: Option<FormValue>,
    pub subject: Option<FormValue>,
    pub message: Option<FormValue>,
    pub product_id: Option<FormValue>,
}

/// A validated inquiry ready to be stored.
#[derive(Debug, Clone, PartialEq)]
pub struct NewInquiry {
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub country: Option<String>,
    pub subject: String,
    pub message: String,
    pub product_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InquiryAcknowledgement {
    pub success: String,
}

#[derive(Debug, Serialize)]
pub struct ContactPage {
    pub products: Vec<ProductOption>,
}
