use serde::{Deserialize, Serialize};

use super::nullable;
use crate::resource::{
    yes_no, AdminResource, Endpoints, FieldKind, FieldSpec, FieldValue, IdPlacement, ResourceKind,
};

/// Grouping shown above packages on the public site.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageCategory {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub description: String,
    #[serde(default, deserialize_with = "nullable")]
    pub is_active: bool,
}

static CATEGORY_FIELDS: [FieldSpec; 3] = [
    FieldSpec::new("name", "Name", FieldKind::Text).required(),
    FieldSpec::new("description", "Description", FieldKind::LongText),
    FieldSpec::new("is_active", "Active", FieldKind::Toggle),
];

impl AdminResource for PackageCategory {
    const KIND: ResourceKind = ResourceKind::Categories;
    const SINGULAR: &'static str = "category";
    const PLURAL: &'static str = "categories";
    const ENDPOINTS: Endpoints = Endpoints {
        base: "/api/PackageCategories",
        admin_list: "/api/PackageCategories/admin",
        public_list: Some("/api/PackageCategories"),
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
        &CATEGORY_FIELDS
    }

    fn columns() -> &'static [&'static str] {
        &["Name", "Description", "Active"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.description.clone(),
            yes_no(self.is_active),
        ]
    }

    fn field_value(&self, key: &str) -> FieldValue {
        match key {
            "name" => FieldValue::text(&self.name),
            "description" => FieldValue::text(&self.description),
            "is_active" => FieldValue::Bool(self.is_active),
            _ => FieldValue::text(""),
        }
    }

    fn set_field(&mut self, key: &str, value: &FieldValue) -> Result<(), String> {
        match key {
            "name" => self.name = value.as_text().to_string(),
            "description" => self.description = value.as_text().to_string(),
            "is_active" => self.is_active = value.as_bool(),
            _ => {}
        }
        Ok(())
    }
}
