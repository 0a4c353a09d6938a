use serde::{Deserialize, Serialize};

use super::{delimited, nullable};
use crate::error::ValidationErrors;
use crate::resource::{
    parse_number, validate_required, yes_no, AdminResource, Endpoints, FieldKind, FieldSpec,
    FieldValue, IdPlacement, ResourceKind,
};

/// A course package offered on the public site.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub description: String,
    #[serde(default, deserialize_with = "nullable")]
    pub price: f64,
    #[serde(default, with = "delimited")]
    pub features: Vec<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub is_most_popular: bool,
    #[serde(default, deserialize_with = "nullable")]
    pub is_active: bool,
}

impl Package {
    pub fn price_label(&self) -> String {
        format!("${:.2}", self.price)
    }
}

static PACKAGE_FIELDS: [FieldSpec; 6] = [
    FieldSpec::new("name", "Name", FieldKind::Text).required(),
    FieldSpec::new("description", "Description", FieldKind::LongText).required(),
    FieldSpec::new("price", "Monthly price", FieldKind::Number).required(),
    FieldSpec::new("features", "Features (one per line)", FieldKind::List),
    FieldSpec::new("is_most_popular", "Most popular", FieldKind::Toggle),
    FieldSpec::new("is_active", "Active", FieldKind::Toggle),
];

impl AdminResource for Package {
    const KIND: ResourceKind = ResourceKind::Packages;
    const SINGULAR: &'static str = "package";
    const PLURAL: &'static str = "packages";
    const ENDPOINTS: Endpoints = Endpoints {
        base: "/api/Packages",
        admin_list: "/api/Packages/admin",
        public_list: Some("/api/Packages"),
        update: IdPlacement::Path,
    };

    fn blank() -> Self {
        Self {
            is_active: true,
            ..Self::default()
        }
    }

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn fields() -> &'static [FieldSpec] {
        &PACKAGE_FIELDS
    }

    fn columns() -> &'static [&'static str] {
        &["Name", "Price", "Features", "Most popular", "Active"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.price_label(),
            self.features.join(", "),
            yes_no(self.is_most_popular),
            yes_no(self.is_active),
        ]
    }

    fn field_value(&self, key: &str) -> FieldValue {
        match key {
            "name" => FieldValue::text(&self.name),
            "description" => FieldValue::text(&self.description),
            "price" => FieldValue::text(self.price.to_string()),
            "features" => FieldValue::text(self.features.join("\n")),
            "is_most_popular" => FieldValue::Bool(self.is_most_popular),
            "is_active" => FieldValue::Bool(self.is_active),
            _ => FieldValue::text(""),
        }
    }

    fn set_field(&mut self, key: &str, value: &FieldValue) -> Result<(), String> {
        match key {
            "name" => self.name = value.as_text().to_string(),
            "description" => self.description = value.as_text().to_string(),
            "price" => self.price = parse_number("Price", value)?,
            "features" => {
                self.features = value
                    .as_text()
                    .lines()
                    .flat_map(delimited::split)
                    .collect()
            }
            "is_most_popular" => self.is_most_popular = value.as_bool(),
            "is_active" => self.is_active = value.as_bool(),
            _ => {}
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = validate_required(self).err().unwrap_or_default();
        if self.price <= 0.0 {
            errors.add("price", "Price must be greater than zero");
        }
        errors.into_result()
    }
}
