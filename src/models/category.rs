use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::slug::slugify;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub slug: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A category with the number of its available products.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct CategoryWithCount {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub category: Category,
    pub available_products_count: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewCategory {
    pub name: String,
    pub description: Option<String>,
    pub slug: Option<String>,
}

impl NewCategory {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            slug: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    /// The explicit slug if one was given, otherwise one derived from the name.
    pub fn resolved_slug(&self) -> String {
        match self.slug.as_deref() {
            Some(slug) if !slug.trim().is_empty() => slug.to_string(),
            _ => slugify(&self.name),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CategoriesPage {
    pub categories: Vec<CategoryWithCount>,
}
