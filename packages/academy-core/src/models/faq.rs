use serde::{Deserialize, Serialize};

use super::nullable;
use super::testimonial::excerpt;
use crate::resource::{
    parse_integer, yes_no, AdminResource, Endpoints, FieldKind, FieldSpec, FieldValue,
    IdPlacement, ResourceKind,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Faq {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "nullable")]
    pub question: String,
    #[serde(default, deserialize_with = "nullable")]
    pub answer: String,
    #[serde(rename = "order", default, deserialize_with = "nullable")]
    pub display_order: i32,
    #[serde(default, deserialize_with = "nullable")]
    pub is_active: bool,
}

static FAQ_FIELDS: [FieldSpec; 4] = [
    FieldSpec::new("question", "Question", FieldKind::Text).required(),
    FieldSpec::new("answer", "Answer", FieldKind::LongText).required(),
    FieldSpec::new("display_order", "Display order", FieldKind::Integer),
    FieldSpec::new("is_active", "Active", FieldKind::Toggle),
];

impl AdminResource for Faq {
    const KIND: ResourceKind = ResourceKind::Faqs;
    const SINGULAR: &'static str = "FAQ";
    const PLURAL: &'static str = "FAQs";
    const ENDPOINTS: Endpoints = Endpoints {
        base: "/api/Faqs",
        admin_list: "/api/Faqs/all",
        public_list: Some("/api/Faqs"),
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
        &FAQ_FIELDS
    }

    fn columns() -> &'static [&'static str] {
        &["Question", "Answer", "Order", "Active"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.question.clone(),
            excerpt(&self.answer, 60),
            self.display_order.to_string(),
            yes_no(self.is_active),
        ]
    }

    fn field_value(&self, key: &str) -> FieldValue {
        match key {
            "question" => FieldValue::text(&self.question),
            "answer" => FieldValue::text(&self.answer),
            "display_order" => FieldValue::text(self.display_order.to_string()),
            "is_active" => FieldValue::Bool(self.is_active),
            _ => FieldValue::text(""),
        }
    }

    fn set_field(&mut self, key: &str, value: &FieldValue) -> Result<(), String> {
        match key {
            "question" => self.question = value.as_text().to_string(),
            "answer" => self.answer = value.as_text().to_string(),
            "display_order" => self.display_order = parse_integer("Display order", value)?,
            "is_active" => self.is_active = value.as_bool(),
            _ => {}
        }
        Ok(())
    }
}
