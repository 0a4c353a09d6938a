use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::nullable;
use crate::resource::{
    AdminResource, Capabilities, Endpoints, FieldSpec, FieldValue, IdPlacement, ResourceKind,
};

/// A registration submitted through the public form. Admins can only read
/// and delete these.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "nullable")]
    pub applicant_name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub applicant_email: String,
    #[serde(default, deserialize_with = "nullable")]
    pub applicant_phone: String,
    #[serde(default, deserialize_with = "nullable")]
    pub user_type: String,
    #[serde(default, deserialize_with = "nullable")]
    pub course: String,
    #[serde(default, deserialize_with = "nullable")]
    pub notes: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submission_date: Option<String>,
}

impl Application {
    /// `YYYY-MM-DD HH:MM`, or the raw value when it is not a timestamp the
    /// backend is known to send.
    pub fn submitted_label(&self) -> String {
        match self.submission_date.as_deref() {
            Some(raw) => format_timestamp(raw),
            None => String::new(),
        }
    }
}

fn format_timestamp(raw: &str) -> String {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed.format("%Y-%m-%d %H:%M").to_string();
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return parsed.format("%Y-%m-%d %H:%M").to_string();
    }
    raw.to_string()
}

/// Payload of the public registration form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewApplication {
    pub applicant_name: String,
    pub applicant_phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applicant_email: Option<String>,
    pub age: u8,
    pub country: String,
    pub gender: String,
    pub package_id: i64,
    /// Package name, kept for the admin list
    pub course: String,
    pub user_type: String,
    pub notes: String,
}

impl AdminResource for Application {
    const KIND: ResourceKind = ResourceKind::Applications;
    const SINGULAR: &'static str = "application";
    const PLURAL: &'static str = "applications";
    const ENDPOINTS: Endpoints = Endpoints {
        base: "/api/Applications",
        admin_list: "/api/Applications",
        public_list: None,
        update: IdPlacement::Path,
    };
    const CAPABILITIES: Capabilities = Capabilities::READ_DELETE;

    fn blank() -> Self {
        Self::default()
    }

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn fields() -> &'static [FieldSpec] {
        &[]
    }

    fn columns() -> &'static [&'static str] {
        &["Applicant", "Email", "Phone", "Type", "Course", "Notes", "Submitted"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.applicant_name.clone(),
            self.applicant_email.clone(),
            self.applicant_phone.clone(),
            self.user_type.clone(),
            self.course.clone(),
            self.notes.clone(),
            self.submitted_label(),
        ]
    }

    fn field_value(&self, key: &str) -> FieldValue {
        match key {
            "applicant_name" => FieldValue::text(&self.applicant_name),
            "applicant_email" => FieldValue::text(&self.applicant_email),
            "applicant_phone" => FieldValue::text(&self.applicant_phone),
            "notes" => FieldValue::text(&self.notes),
            _ => FieldValue::text(""),
        }
    }

    fn set_field(&mut self, _key: &str, _value: &FieldValue) -> Result<(), String> {
        Err("Applications cannot be edited".to_string())
    }
}
