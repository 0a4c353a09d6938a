//! Data behind the public pages
//!
//! Public pages never show an error. Each load either arrives or is marked
//! [`PublicData::Unavailable`], and the page renders around whatever is
//! missing. Contact details in the site chrome fall back to fixed values.

use serde::{Deserialize, Serialize};

use crate::models::{Faq, Package, SiteContent, Teacher, Testimonial};

pub const FALLBACK_EMAIL: &str = "info@nooracademy.com";
pub const FALLBACK_PHONE: &str = "+1 (555) 123-4567";

/// Outcome of one public load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PublicData<T> {
    Loaded(Vec<T>),
    Unavailable,
}

impl<T> Default for PublicData<T> {
    fn default() -> Self {
        PublicData::Unavailable
    }
}

impl<T> PublicData<T> {
    /// Records to render; empty when the load failed.
    pub fn items(&self) -> &[T] {
        match self {
            PublicData::Loaded(items) => items,
            PublicData::Unavailable => &[],
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, PublicData::Loaded(_))
    }

    /// Nothing to show, for whatever reason
    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }

    pub fn map<U>(self, f: impl FnOnce(Vec<T>) -> Vec<U>) -> PublicData<U> {
        match self {
            PublicData::Loaded(items) => PublicData::Loaded(f(items)),
            PublicData::Unavailable => PublicData::Unavailable,
        }
    }
}

/// Contact details shown in the header, footer and contact page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    pub whatsapp: Option<String>,
    pub address: Option<String>,
}

impl ContactInfo {
    pub fn fallback() -> Self {
        Self {
            email: FALLBACK_EMAIL.to_string(),
            phone: FALLBACK_PHONE.to_string(),
            whatsapp: None,
            address: None,
        }
    }

    /// Blank fields on the stored record are replaced field by field.
    pub fn from_site_content(content: Option<&SiteContent>) -> Self {
        let Some(content) = content else {
            return Self::fallback();
        };

        Self {
            email: non_blank(&content.email).unwrap_or_else(|| FALLBACK_EMAIL.to_string()),
            phone: non_blank(&content.phone).unwrap_or_else(|| FALLBACK_PHONE.to_string()),
            whatsapp: non_blank(&content.whatsapp),
            address: non_blank(&content.address),
        }
    }

    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    pub fn tel(&self) -> String {
        let digits: String = self
            .phone
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect();
        format!("tel:{digits}")
    }

    /// `https://wa.me/<digits>` when a WhatsApp number is set
    pub fn whatsapp_link(&self) -> Option<String> {
        let number: String = self
            .whatsapp
            .as_deref()?
            .chars()
            .filter(char::is_ascii_digit)
            .collect();
        (!number.is_empty()).then(|| format!("https://wa.me/{number}"))
    }
}

impl Default for ContactInfo {
    fn default() -> Self {
        Self::fallback()
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Hero and about copy, with defaults for when nothing was saved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteCopy {
    pub hero_title: String,
    pub hero_subtitle: String,
    pub about_text: String,
}

impl SiteCopy {
    pub fn from_site_content(content: Option<&SiteContent>) -> Self {
        let pick = |value: Option<&String>, default: &str| {
            value
                .and_then(|v| non_blank(v))
                .unwrap_or_else(|| default.to_string())
        };
        Self {
            hero_title: pick(content.map(|c| &c.hero_title), "Learn the Quran Online"),
            hero_subtitle: pick(
                content.map(|c| &c.hero_subtitle),
                "One-to-one classes with qualified teachers, at times that suit you.",
            ),
            about_text: pick(
                content.map(|c| &c.about_text),
                "We teach Quran recitation, Tajweed and memorization to students of all ages around the world.",
            ),
        }
    }
}

impl Default for SiteCopy {
    fn default() -> Self {
        Self::from_site_content(None)
    }
}

/// Everything the landing page shows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LandingData {
    pub packages: PublicData<Package>,
    pub teachers: PublicData<Teacher>,
    pub testimonials: PublicData<Testimonial>,
    pub faqs: PublicData<Faq>,
    pub copy: SiteCopy,
}

#[cfg(feature = "client")]
pub use loader::PublicSite;

#[cfg(feature = "client")]
mod loader {
    use tracing::warn;

    use super::*;
    use crate::api::{ApiClient, ResourceClient, SiteContentClient};
    use crate::error::Result;
    use crate::models::{by_display_order, NewApplication};
    use crate::resource::AdminResource;

    /// Anonymous reads for the public pages.
    #[derive(Clone)]
    pub struct PublicSite {
        api: ApiClient,
    }

    impl PublicSite {
        pub fn new(api: ApiClient) -> Self {
            Self { api }
        }

        async fn load<R: AdminResource>(&self) -> PublicData<R> {
            match ResourceClient::<R>::new(self.api.clone()).list_public().await {
                Ok(items) => PublicData::Loaded(items),
                Err(err) => {
                    warn!(resource = R::PLURAL, error = %err, "public load failed");
                    PublicData::Unavailable
                }
            }
        }

        pub async fn packages(&self) -> PublicData<Package> {
            self.load::<Package>()
                .await
                .map(|items| items.into_iter().filter(|p| p.is_active).collect())
        }

        pub async fn teachers(&self) -> PublicData<Teacher> {
            self.load::<Teacher>().await.map(|items| {
                by_display_order(items, |t| t.display_order)
                    .into_iter()
                    .filter(|t| t.is_active)
                    .map(|t| Teacher {
                        image_url: self.api.asset_url(&t.image_url),
                        ..t
                    })
                    .collect()
            })
        }

        pub async fn testimonials(&self) -> PublicData<Testimonial> {
            self.load::<Testimonial>().await.map(|items| {
                by_display_order(items, |t| t.display_order)
                    .into_iter()
                    .filter(|t| t.is_active)
                    .map(|t| Testimonial {
                        image_url: self.api.asset_url(&t.image_url),
                        ..t
                    })
                    .collect()
            })
        }

        pub async fn faqs(&self) -> PublicData<Faq> {
            self.load::<Faq>().await.map(|items| {
                by_display_order(items, |f| f.display_order)
                    .into_iter()
                    .filter(|f| f.is_active)
                    .collect()
            })
        }

        pub async fn site_content(&self) -> Option<SiteContent> {
            match SiteContentClient::new(self.api.clone()).get_public().await {
                Ok(content) => content,
                Err(err) => {
                    warn!(error = %err, "site content load failed");
                    None
                }
            }
        }

        pub async fn contact_info(&self) -> ContactInfo {
            ContactInfo::from_site_content(self.site_content().await.as_ref())
        }

        pub async fn site_copy(&self) -> SiteCopy {
            SiteCopy::from_site_content(self.site_content().await.as_ref())
        }

        /// All landing page sections, loaded in parallel.
        pub async fn landing(&self) -> LandingData {
            let (packages, teachers, testimonials, faqs, content) = futures::join!(
                self.packages(),
                self.teachers(),
                self.testimonials(),
                self.faqs(),
                self.site_content(),
            );

            LandingData {
                packages,
                teachers,
                testimonials,
                faqs,
                copy: SiteCopy::from_site_content(content.as_ref()),
            }
        }

        /// Post a registration. Not memoized, not authenticated.
        pub async fn submit_application(&self, application: &NewApplication) -> Result<()> {
            self.api
                .post_public_unit(crate::api::endpoints::APPLICATIONS, application)
                .await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_site_content_uses_fallbacks() {
        let contact = ContactInfo::from_site_content(None);
        assert_eq!(contact.email, FALLBACK_EMAIL);
        assert_eq!(contact.phone, FALLBACK_PHONE);
        assert_eq!(contact.whatsapp_link(), None);
    }

    #[test]
    fn test_blank_fields_fall_back_individually() {
        let content = SiteContent {
            email: "hello@academy.org".to_string(),
            phone: "  ".to_string(),
            whatsapp: "+44 7700 900123".to_string(),
            ..SiteContent::default()
        };
        let contact = ContactInfo::from_site_content(Some(&content));

        assert_eq!(contact.email, "hello@academy.org");
        assert_eq!(contact.phone, FALLBACK_PHONE);
        assert_eq!(
            contact.whatsapp_link().as_deref(),
            Some("https://wa.me/447700900123")
        );
        assert_eq!(contact.tel(), "tel:+15551234567");
    }

    #[test]
    fn test_unavailable_renders_nothing() {
        let data: PublicData<Package> = PublicData::Unavailable;
        assert!(data.is_empty());
        assert!(!data.is_available());
        assert!(data.items().is_empty());

        let loaded = PublicData::Loaded(vec![1, 2, 3]).map(|v| v.into_iter().filter(|n| n % 2 == 1).collect());
        assert_eq!(loaded.items(), &[1, 3]);
    }

    #[test]
    fn test_site_copy_defaults() {
        let copy = SiteCopy::default();
        assert_eq!(copy.hero_title, "Learn the Quran Online");

        let content = SiteContent {
            hero_title: "Welcome".to_string(),
            ..SiteContent::default()
        };
        let copy = SiteCopy::from_site_content(Some(&content));
        assert_eq!(copy.hero_title, "Welcome");
        assert!(!copy.about_text.is_empty());
    }
}
