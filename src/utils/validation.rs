use std::{collections::BTreeMap, fmt, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)*$")
        .expect("email pattern is valid")
});

/// A form value as submitted. Browsers send text, API clients may send
/// numbers, and anything else is kept so it can be reported and echoed back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FormValue {
    Text(String),
    Number(serde_json::Number),
    Other(serde_json::Value),
}

impl From<&str> for FormValue {
    fn from(text: &str) -> Self {
        FormValue::Text(text.to_string())
    }
}

impl From<i64> for FormValue {
    fn from(number: i64) -> Self {
        FormValue::Number(number.into())
    }
}

/// Field-level validation failures plus the input that produced them, so a
/// form can be re-displayed with the submitted values.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationErrors {
    pub errors: BTreeMap<String, Vec<String>>,
    pub old: serde_json::Value,
}

impl ValidationErrors {
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.errors
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn has(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    pub fn with_old(mut self, old: serde_json::Value) -> Self {
        self.old = old;
        self
    }

    /// First message, with a count of the remaining ones.
    pub fn summary(&self) -> String {
        let total: usize = self.errors.values().map(Vec::len).sum();
        let first = self
            .errors
            .values()
            .flatten()
            .next()
            .cloned()
            .unwrap_or_else(|| "The given data was invalid.".to_string());

        match total {
            0 | 1 => first,
            2 => format!("{} (and 1 more error)", first),
            n => format!("{} (and {} more errors)", first, n - 1),
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())
    }
}

pub fn is_valid_email(email: &str) -> bool {
    email.len() <= 254 && EMAIL_RE.is_match(email)
}

/// Trims the value; blank strings count as absent.
pub fn normalize(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Trimmed text of an optional field. Non-text values are a field error.
pub fn optional_text(
    errors: &mut ValidationErrors,
    field: &str,
    value: Option<&FormValue>,
) -> Option<String> {
    match value {
        None => None,
        Some(FormValue::Text(text)) => normalize(Some(text)),
        Some(_) => {
            errors.add(field, format!("The {} field must be a string.", field));
            None
        }
    }
}

pub fn required_text(
    errors: &mut ValidationErrors,
    field: &str,
    value: Option<&FormValue>,
) -> Option<String> {
    let text = optional_text(errors, field, value);
    if text.is_none() && !errors.has(field) {
        errors.add(field, format!("The {} field is required.", field));
    }
    text
}

/// Record id carried by a form value: an integer or its decimal text.
/// Blank text counts as absent. Anything else records `invalid` on the field.
pub fn optional_id(
    errors: &mut ValidationErrors,
    field: &str,
    value: Option<&FormValue>,
    invalid: &str,
) -> Option<i64> {
    let id = match value {
        None => return None,
        Some(FormValue::Text(text)) if text.trim().is_empty() => return None,
        Some(FormValue::Text(text)) => text.trim().parse().ok(),
        Some(FormValue::Number(number)) => number.as_i64(),
        Some(FormValue::Other(_)) => None,
    };

    if id.is_none() {
        errors.add(field, invalid);
    }
    id
}
