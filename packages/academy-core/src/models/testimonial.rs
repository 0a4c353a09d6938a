use serde::{Deserialize, Serialize};

use super::nullable;
use crate::resource::{
    parse_integer, yes_no, AdminResource, Endpoints, FieldKind, FieldSpec, FieldValue,
    IdPlacement, ResourceKind,
};

/// A student testimonial shown on the landing page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "nullable")]
    pub student_name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub country: String,
    #[serde(default, deserialize_with = "nullable")]
    pub testimonial_text: String,
    #[serde(default, deserialize_with = "nullable")]
    pub image_url: String,
    #[serde(rename = "order", default, deserialize_with = "nullable")]
    pub display_order: i32,
    #[serde(default, deserialize_with = "nullable")]
    pub is_active: bool,
}

static TESTIMONIAL_FIELDS: [FieldSpec; 6] = [
    FieldSpec::new("student_name", "Student name", FieldKind::Text).required(),
    FieldSpec::new("country", "Country", FieldKind::Text),
    FieldSpec::new("testimonial_text", "Testimonial", FieldKind::LongText).required(),
    FieldSpec::new("image_url", "Photo", FieldKind::Image),
    FieldSpec::new("display_order", "Display order", FieldKind::Integer),
    FieldSpec::new("is_active", "Active", FieldKind::Toggle),
];

impl AdminResource for Testimonial {
    const KIND: ResourceKind = ResourceKind::Testimonials;
    const SINGULAR: &'static str = "testimonial";
    const PLURAL: &'static str = "testimonials";
    // The testimonials controller takes the id as a query parameter on update.
    const ENDPOINTS: Endpoints = Endpoints {
        base: "/api/Testimonials",
        admin_list: "/api/Testimonials/all",
        public_list: Some("/api/Testimonials"),
        update: IdPlacement::Query,
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
        &TESTIMONIAL_FIELDS
    }

    fn columns() -> &'static [&'static str] {
        &["Student", "Country", "Testimonial", "Order", "Active"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.student_name.clone(),
            self.country.clone(),
            excerpt(&self.testimonial_text, 60),
            self.display_order.to_string(),
            yes_no(self.is_active),
        ]
    }

    fn field_value(&self, key: &str) -> FieldValue {
        match key {
            "student_name" => FieldValue::text(&self.student_name),
            "country" => FieldValue::text(&self.country),
            "testimonial_text" => FieldValue::text(&self.testimonial_text),
            "image_url" => FieldValue::text(&self.image_url),
            "display_order" => FieldValue::text(self.display_order.to_string()),
            "is_active" => FieldValue::Bool(self.is_active),
            _ => FieldValue::text(""),
        }
    }

    fn set_field(&mut self, key: &str, value: &FieldValue) -> Result<(), String> {
        match key {
            "student_name" => self.student_name = value.as_text().to_string(),
            "country" => self.country = value.as_text().to_string(),
            "testimonial_text" => self.testimonial_text = value.as_text().to_string(),
            "image_url" => self.image_url = value.as_text().trim().to_string(),
            "display_order" => self.display_order = parse_integer("Display order", value)?,
            "is_active" => self.is_active = value.as_bool(),
            _ => {}
        }
        Ok(())
    }
}

/// First `max` characters of `text`, with an ellipsis when cut.
pub fn excerpt(text: &str, max: usize) -> String {
    let text = text.trim();
    if text.chars().count() <= max {
        return text.to_string();
    }
    let cut: String = text.chars().take(max).collect();
    format!("{}\u{2026}", cut.trim_end())
}
