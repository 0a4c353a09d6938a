//! The public registration form

use serde::{Deserialize, Serialize};

use crate::error::ValidationErrors;
use crate::models::{NewApplication, Package};

pub const GENDERS: [&str; 2] = ["Male", "Female"];

pub const MIN_AGE: u8 = 1;
pub const MAX_AGE: u8 = 120;

/// Raw form input. Age is kept as typed so a half-entered value is not lost.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegistrationForm {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub age: String,
    pub country: String,
    pub gender: String,
    pub package_id: Option<i64>,
    pub notes: String,
}

/// Package id from the `?package=` query parameter, if it names one of the
/// currently active packages.
pub fn preselect_package(query: Option<&str>, active: &[Package]) -> Option<i64> {
    let id = query?.trim().parse::<i64>().ok()?;
    active
        .iter()
        .any(|package| package.is_active && package.id == Some(id))
        .then_some(id)
}

impl RegistrationForm {
    pub fn with_package(package_id: Option<i64>) -> Self {
        Self {
            package_id,
            ..Self::default()
        }
    }

    /// Check the input against the packages on offer and build the payload.
    pub fn validate(&self, packages: &[Package]) -> Result<NewApplication, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if self.name.trim().is_empty() {
            errors.add("name", "Please enter your full name");
        }
        if self.phone.trim().is_empty() {
            errors.add("phone", "Please enter a phone number");
        }
        let email = self.email.trim();
        if !email.is_empty() && !email.contains('@') {
            errors.add("email", "Please enter a valid email address");
        }
        if self.country.trim().is_empty() {
            errors.add("country", "Please enter your country");
        }
        if !GENDERS.contains(&self.gender.as_str()) {
            errors.add("gender", "Please select a gender");
        }

        let age = match self.age.trim().parse::<u8>() {
            Ok(age) if (MIN_AGE..=MAX_AGE).contains(&age) => Some(age),
            _ => {
                errors.add(
                    "age",
                    format!("Age must be a number between {MIN_AGE} and {MAX_AGE}"),
                );
                None
            }
        };

        let package = match self.package_id {
            None => {
                errors.add("package_id", "Please choose a package");
                None
            }
            Some(id) => {
                let found = packages.iter().find(|p| p.id == Some(id) && p.is_active);
                if found.is_none() {
                    errors.add("package_id", "The selected package is no longer available");
                }
                found
            }
        };

        errors.into_result()?;

        let (Some(age), Some(package), Some(package_id)) = (age, package, self.package_id) else {
            return Err(ValidationErrors::new());
        };

        Ok(NewApplication {
            applicant_name: self.name.trim().to_string(),
            applicant_phone: self.phone.trim().to_string(),
            applicant_email: (!email.is_empty()).then(|| email.to_string()),
            age,
            country: self.country.trim().to_string(),
            gender: self.gender.clone(),
            package_id,
            course: package.name.clone(),
            user_type: "Student".to_string(),
            notes: self.notes.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::AdminResource;

    fn packages() -> Vec<Package> {
        vec![
            Package {
                id: Some(1),
                name: "Noorani Qaida".to_string(),
                price: 20.0,
                ..Package::blank()
            },
            Package {
                id: Some(2),
                name: "Hifz".to_string(),
                price: 40.0,
                is_active: false,
                ..Package::blank()
            },
        ]
    }

    fn filled(package_id: Option<i64>) -> RegistrationForm {
        RegistrationForm {
            name: "Aisha Rahman".to_string(),
            phone: "+44 7700 900123".to_string(),
            email: String::new(),
            age: "12".to_string(),
            country: "United Kingdom".to_string(),
            gender: "Female".to_string(),
            package_id,
            notes: "Weekend mornings".to_string(),
        }
    }

    #[test]
    fn test_preselect_only_matches_active_packages() {
        let packages = packages();
        assert_eq!(preselect_package(Some("1"), &packages), Some(1));
        assert_eq!(preselect_package(Some("2"), &packages), None);
        assert_eq!(preselect_package(Some("999"), &packages), None);
        assert_eq!(preselect_package(Some("abc"), &packages), None);
        assert_eq!(preselect_package(None, &packages), None);
    }

    #[test]
    fn test_unknown_package_in_url_blocks_submission() {
        let packages = packages();
        let form = RegistrationForm::with_package(preselect_package(Some("999"), &packages));
        assert_eq!(form.package_id, None);

        let errors = filled(form.package_id).validate(&packages).unwrap_err();
        assert_eq!(errors.get("package_id"), Some("Please choose a package"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_valid_form_builds_application() {
        let application = filled(Some(1)).validate(&packages()).unwrap();

        assert_eq!(application.package_id, 1);
        assert_eq!(application.course, "Noorani Qaida");
        assert_eq!(application.age, 12);
        assert_eq!(application.applicant_email, None);
    }

    #[test]
    fn test_field_rules() {
        let form = RegistrationForm {
            age: "0".to_string(),
            gender: "Other".to_string(),
            email: "not-an-email".to_string(),
            package_id: Some(2),
            ..RegistrationForm::default()
        };
        let errors = form.validate(&packages()).unwrap_err();

        for field in ["name", "phone", "email", "country", "gender", "age", "package_id"] {
            assert!(errors.get(field).is_some(), "expected an error for {field}");
        }

        let too_old = RegistrationForm {
            age: "121".to_string(),
            ..filled(Some(1))
        };
        assert!(too_old.validate(&packages()).unwrap_err().get("age").is_some());
    }
}
