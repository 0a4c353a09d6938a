use serde::{Deserialize, Serialize};

use super::nullable;
use crate::resource::{
    parse_integer, yes_no, AdminResource, Endpoints, FieldKind, FieldSpec, FieldValue,
    IdPlacement, ResourceKind,
};

/// A teacher profile. `image_url` is a path relative to the backend origin.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Teacher {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub title: String,
    #[serde(default, deserialize_with = "nullable")]
    pub bio: String,
    #[serde(default, deserialize_with = "nullable")]
    pub image_url: String,
    #[serde(rename = "order", default, deserialize_with = "nullable")]
    pub display_order: i32,
    #[serde(default, deserialize_with = "nullable")]
    pub is_active: bool,
}

static TEACHER_FIELDS: [FieldSpec; 6] = [
    FieldSpec::new("name", "Name", FieldKind::Text).required(),
    FieldSpec::new("title", "Title", FieldKind::Text).required(),
    FieldSpec::new("bio", "Biography", FieldKind::LongText),
    FieldSpec::new("image_url", "Photo", FieldKind::Image),
    FieldSpec::new("display_order", "Display order", FieldKind::Integer),
    FieldSpec::new("is_active", "Active", FieldKind::Toggle),
];

impl AdminResource for Teacher {
    const KIND: ResourceKind = ResourceKind::Teachers;
    const SINGULAR: &'static str = "teacher";
    const PLURAL: &'static str = "teachers";
    const ENDPOINTS: Endpoints = Endpoints {
        base: "/api/Teachers",
        admin_list: "/api/Teachers/all",
        public_list: Some("/api/Teachers"),
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
        &TEACHER_FIELDS
    }

    fn columns() -> &'static [&'static str] {
        &["Name", "Title", "Order", "Active"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.title.clone(),
            self.display_order.to_string(),
            yes_no(self.is_active),
        ]
    }

    fn field_value(&self, key: &str) -> FieldValue {
        match key {
            "name" => FieldValue::text(&self.name),
            "title" => FieldValue::text(&self.title),
            "bio" => FieldValue::text(&self.bio),
            "image_url" => FieldValue::text(&self.image_url),
            "display_order" => FieldValue::text(self.display_order.to_string()),
            "is_active" => FieldValue::Bool(self.is_active),
            _ => FieldValue::text(""),
        }
    }

    fn set_field(&mut self, key: &str, value: &FieldValue) -> Result<(), String> {
        match key {
            "name" => self.name = value.as_text().to_string(),
            "title" => self.title = value.as_text().to_string(),
            "bio" => self.bio = value.as_text().to_string(),
            "image_url" => self.image_url = value.as_text().trim().to_string(),
            "display_order" => self.display_order = parse_integer("Display order", value)?,
            "is_active" => self.is_active = value.as_bool(),
            _ => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_maps_to_display_order() {
        let teacher: Teacher = serde_json::from_str(
            r#"{"id":1,"name":"Sheikh Ahmad","title":"Hifz teacher","bio":null,"imageUrl":"/uploads/a.png","order":2,"isActive":true}"#,
        )
        .unwrap();

        assert_eq!(teacher.display_order, 2);
        assert_eq!(teacher.image_url, "/uploads/a.png");
        assert_eq!(serde_json::to_value(&teacher).unwrap()["order"], 2);
    }

    #[test]
    fn test_bad_order_is_a_field_error() {
        let mut teacher = Teacher::blank();
        let err = teacher
            .set_field("display_order", &FieldValue::text("first"))
            .unwrap_err();
        assert_eq!(err, "Display order must be a whole number");
        assert_eq!(teacher.display_order, 0);
    }
}
