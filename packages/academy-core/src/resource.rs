//! Per-resource configuration
//!
//! Every admin screen is the same list + dialog shell. What differs between
//! packages, teachers, testimonials and the rest is captured here: where the
//! records live on the backend, which operations are allowed, and how the
//! edit form maps onto the record.

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::fmt;

use crate::error::{ApiError, ValidationErrors};

/// Backend resources managed from the admin area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceKind {
    Packages,
    Categories,
    Teachers,
    Testimonials,
    Faqs,
    Applications,
    SiteContent,
}

impl ResourceKind {
    pub fn label(&self) -> &'static str {
        match self {
            ResourceKind::Packages => "Packages",
            ResourceKind::Categories => "Categories",
            ResourceKind::Teachers => "Teachers",
            ResourceKind::Testimonials => "Testimonials",
            ResourceKind::Faqs => "FAQs",
            ResourceKind::Applications => "Applications",
            ResourceKind::SiteContent => "Site Content",
        }
    }

    pub fn variants() -> &'static [ResourceKind] {
        &[
            ResourceKind::Packages,
            ResourceKind::Categories,
            ResourceKind::Teachers,
            ResourceKind::Testimonials,
            ResourceKind::Faqs,
            ResourceKind::Applications,
            ResourceKind::SiteContent,
        ]
    }
}

/// How an update call identifies its record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdPlacement {
    /// `PUT {base}/{id}`
    Path,
    /// `PUT {base}?id={id}`
    Query,
}

/// Backend paths for one resource, relative to the API origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoints {
    /// Create target and prefix for item paths
    pub base: &'static str,
    /// Admin listing, includes inactive records
    pub admin_list: &'static str,
    /// Public listing, active records only
    pub public_list: Option<&'static str>,
    pub update: IdPlacement,
}

impl Endpoints {
    pub fn item(&self, id: i64) -> String {
        format!("{}/{}", self.base, id)
    }

    pub fn update_path(&self, id: i64) -> String {
        match self.update {
            IdPlacement::Path => self.item(id),
            IdPlacement::Query => format!("{}?id={}", self.base, id),
        }
    }
}

/// Which manager actions a resource supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    pub create: bool,
    pub edit: bool,
    pub delete: bool,
}

impl Capabilities {
    pub const FULL: Capabilities = Capabilities {
        create: true,
        edit: true,
        delete: true,
    };

    /// Records created elsewhere (applications come from the public form)
    pub const READ_DELETE: Capabilities = Capabilities {
        create: false,
        edit: false,
        delete: true,
    };

    /// Singletons
    pub const EDIT_ONLY: Capabilities = Capabilities {
        create: false,
        edit: true,
        delete: false,
    };
}

/// Form control used for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    LongText,
    Email,
    /// Decimal typed as text, coerced on save
    Number,
    /// Whole number typed as text, coerced on save
    Integer,
    Toggle,
    /// Relative upload URL; the form offers a file picker next to the text box
    Image,
    /// One entry per line
    List,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSpec {
    pub const fn new(key: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            key,
            label,
            kind,
            required: false,
        }
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// Raw value of a form control. Everything except toggles is edited as text.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Bool(bool),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    pub fn as_text(&self) -> &str {
        match self {
            FieldValue::Text(text) => text,
            FieldValue::Bool(true) => "true",
            FieldValue::Bool(false) => "false",
        }
    }

    pub fn as_bool(&self) -> bool {
        match self {
            FieldValue::Bool(value) => *value,
            FieldValue::Text(text) => matches!(text.trim(), "true" | "on" | "1"),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_text())
    }
}

/// Coerce a decimal field. Blank counts as zero; negatives are rejected.
pub fn parse_number(label: &str, value: &FieldValue) -> Result<f64, String> {
    let text = value.as_text().trim();
    if text.is_empty() {
        return Ok(0.0);
    }
    match text.parse::<f64>() {
        Ok(number) if number.is_finite() && number >= 0.0 => Ok(number),
        _ => Err(format!("{label} must be a non-negative number")),
    }
}

/// Coerce a whole-number field. Blank counts as zero.
pub fn parse_integer(label: &str, value: &FieldValue) -> Result<i32, String> {
    let text = value.as_text().trim();
    if text.is_empty() {
        return Ok(0);
    }
    text.parse::<i32>()
        .map_err(|_| format!("{label} must be a whole number"))
}

/// A backend record managed through the generic admin shell.
pub trait AdminResource:
    Clone + PartialEq + fmt::Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
    const KIND: ResourceKind;
    /// Lower-case noun used in notifications ("package saved successfully")
    const SINGULAR: &'static str;
    const PLURAL: &'static str;
    const ENDPOINTS: Endpoints;
    const CAPABILITIES: Capabilities = Capabilities::FULL;

    /// Edit-buffer contents for a new record
    fn blank() -> Self;

    /// `None` until the backend has assigned one
    fn id(&self) -> Option<i64>;

    fn fields() -> &'static [FieldSpec];

    fn columns() -> &'static [&'static str];

    /// Display text for each column, in `columns()` order
    fn cells(&self) -> Vec<String>;

    fn field_value(&self, key: &str) -> FieldValue;

    /// Write a form value back onto the record. Errors are shown next to the
    /// field.
    fn set_field(&mut self, key: &str, value: &FieldValue) -> Result<(), String>;

    fn validate(&self) -> Result<(), ValidationErrors> {
        validate_required(self)
    }

    /// Short name used in confirmation prompts
    fn title(&self) -> String {
        self.cells().into_iter().next().unwrap_or_default()
    }
}

/// Required text fields must not be blank.
pub fn validate_required<R: AdminResource>(record: &R) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    for field in R::fields().iter().filter(|field| field.required) {
        if let FieldValue::Text(text) = record.field_value(field.key) {
            if text.trim().is_empty() {
                errors.add(field.key, format!("{} is required", field.label));
            }
        }
    }
    errors.into_result()
}

pub(crate) fn yes_no(value: bool) -> String {
    if value { "Yes" } else { "No" }.to_string()
}

/// Capitalize the first letter ("package" -> "Package").
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// The calls every manager needs. Implemented over HTTP by
/// `api::ResourceClient`, and in memory by tests.
#[async_trait]
pub trait ResourceBackend<R: AdminResource>: Send + Sync {
    async fn list(&self) -> Result<Vec<R>, ApiError>;
    async fn create(&self, record: &R) -> Result<(), ApiError>;
    async fn update(&self, id: i64, record: &R) -> Result<(), ApiError>;
    async fn delete(&self, id: i64) -> Result<(), ApiError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_path_placement() {
        let path = Endpoints {
            base: "/api/Teachers",
            admin_list: "/api/Teachers/all",
            public_list: Some("/api/Teachers"),
            update: IdPlacement::Path,
        };
        let query = Endpoints {
            update: IdPlacement::Query,
            ..path
        };

        assert_eq!(path.update_path(7), "/api/Teachers/7");
        assert_eq!(query.update_path(7), "/api/Teachers?id=7");
        assert_eq!(query.item(7), "/api/Teachers/7");
    }

    #[test]
    fn test_number_coercion() {
        assert_eq!(parse_number("Price", &FieldValue::text("10.5")), Ok(10.5));
        assert_eq!(parse_number("Price", &FieldValue::text(" ")), Ok(0.0));
        assert!(parse_number("Price", &FieldValue::text("ten")).is_err());
        assert!(parse_number("Price", &FieldValue::text("-1")).is_err());
        assert_eq!(parse_integer("Order", &FieldValue::text("3")), Ok(3));
        assert!(parse_integer("Order", &FieldValue::text("3.5")).is_err());
    }

    #[test]
    fn test_field_value_bool_from_text() {
        assert!(FieldValue::text("on").as_bool());
        assert!(!FieldValue::text("off").as_bool());
        assert_eq!(FieldValue::Bool(true).as_text(), "true");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("package"), "Package");
        assert_eq!(capitalize(""), "");
    }
}
