use serde::{Deserialize, Serialize};

use super::nullable;
use crate::resource::{
    AdminResource, Capabilities, Endpoints, FieldKind, FieldSpec, FieldValue, IdPlacement,
    ResourceKind,
};

/// Editable site-wide text and contact details. There is one live record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "nullable")]
    pub email: String,
    #[serde(default, deserialize_with = "nullable")]
    pub phone: String,
    #[serde(default, deserialize_with = "nullable")]
    pub whatsapp: String,
    #[serde(default, deserialize_with = "nullable")]
    pub address: String,
    #[serde(default, deserialize_with = "nullable")]
    pub hero_title: String,
    #[serde(default, deserialize_with = "nullable")]
    pub hero_subtitle: String,
    #[serde(default, deserialize_with = "nullable")]
    pub about_text: String,
}

impl SiteContent {
    /// The backend serves site content as a list; the live record is the
    /// one with the highest id.
    pub fn current(records: Vec<SiteContent>) -> Option<SiteContent> {
        records.into_iter().max_by_key(|record| record.id.unwrap_or(i64::MIN))
    }
}

static SITE_CONTENT_FIELDS: [FieldSpec; 7] = [
    FieldSpec::new("email", "Contact email", FieldKind::Email).required(),
    FieldSpec::new("phone", "Contact phone", FieldKind::Text).required(),
    FieldSpec::new("whatsapp", "WhatsApp number", FieldKind::Text),
    FieldSpec::new("address", "Address", FieldKind::Text),
    FieldSpec::new("hero_title", "Landing title", FieldKind::Text),
    FieldSpec::new("hero_subtitle", "Landing subtitle", FieldKind::LongText),
    FieldSpec::new("about_text", "About the academy", FieldKind::LongText),
];

impl AdminResource for SiteContent {
    const KIND: ResourceKind = ResourceKind::SiteContent;
    const SINGULAR: &'static str = "site content";
    const PLURAL: &'static str = "site content";
    const ENDPOINTS: Endpoints = Endpoints {
        base: "/api/SiteContent",
        admin_list: "/api/SiteContent",
        public_list: Some("/api/SiteContent"),
        update: IdPlacement::Path,
    };
    const CAPABILITIES: Capabilities = Capabilities::EDIT_ONLY;

    fn blank() -> Self {
        Self::default()
    }

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn fields() -> &'static [FieldSpec] {
        &SITE_CONTENT_FIELDS
    }

    fn columns() -> &'static [&'static str] {
        &["Email", "Phone", "WhatsApp", "Address"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.email.clone(),
            self.phone.clone(),
            self.whatsapp.clone(),
            self.address.clone(),
        ]
    }

    fn field_value(&self, key: &str) -> FieldValue {
        match key {
            "email" => FieldValue::text(&self.email),
            "phone" => FieldValue::text(&self.phone),
            "whatsapp" => FieldValue::text(&self.whatsapp),
            "address" => FieldValue::text(&self.address),
            "hero_title" => FieldValue::text(&self.hero_title),
            "hero_subtitle" => FieldValue::text(&self.hero_subtitle),
            "about_text" => FieldValue::text(&self.about_text),
            _ => FieldValue::text(""),
        }
    }

    fn set_field(&mut self, key: &str, value: &FieldValue) -> Result<(), String> {
        let text = value.as_text().to_string();
        match key {
            "email" => {
                if !text.trim().is_empty() && !text.contains('@') {
                    return Err("Contact email must be a valid email address".to_string());
                }
                self.email = text.trim().to_string()
            }
            "phone" => self.phone = text,
            "whatsapp" => self.whatsapp = text,
            "address" => self.address = text,
            "hero_title" => self.hero_title = text,
            "hero_subtitle" => self.hero_subtitle = text,
            "about_text" => self.about_text = text,
            _ => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_picks_highest_id() {
        let records = vec![
            SiteContent {
                id: Some(2),
                email: "old@example.com".to_string(),
                ..SiteContent::default()
            },
            SiteContent {
                id: Some(9),
                email: "new@example.com".to_string(),
                ..SiteContent::default()
            },
            SiteContent {
                id: Some(4),
                ..SiteContent::default()
            },
        ];

        let current = SiteContent::current(records).unwrap();
        assert_eq!(current.id, Some(9));
        assert_eq!(current.email, "new@example.com");
        assert!(SiteContent::current(Vec::new()).is_none());
    }

    #[test]
    fn test_email_field_rejects_garbage() {
        let mut content = SiteContent::default();
        assert!(content.set_field("email", &FieldValue::text("not-an-email")).is_err());
        assert!(content.set_field("email", &FieldValue::text(" info@academy.com ")).is_ok());
        assert_eq!(content.email, "info@academy.com");
    }
}
