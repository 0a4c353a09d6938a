use academy_core::models::{Faq, Package, Teacher, Testimonial};
use academy_core::public::{ContactInfo, LandingData, SiteCopy};
use academy_core::registration::RegistrationForm;
use academy_core::PublicData;
use dioxus::prelude::*;

#[server]
pub async fn get_landing() -> Result<LandingData, ServerFnError> {
    let site = crate::backend::backend().public_site()?;
    Ok(site.landing().await)
}

#[server]
pub async fn get_packages() -> Result<PublicData<Package>, ServerFnError> {
    let site = crate::backend::backend().public_site()?;
    Ok(site.packages().await)
}

#[server]
pub async fn get_teachers() -> Result<PublicData<Teacher>, ServerFnError> {
    let site = crate::backend::backend().public_site()?;
    Ok(site.teachers().await)
}

#[server]
pub async fn get_testimonials() -> Result<PublicData<Testimonial>, ServerFnError> {
    let site = crate::backend::backend().public_site()?;
    Ok(site.testimonials().await)
}

#[server]
pub async fn get_faqs() -> Result<PublicData<Faq>, ServerFnError> {
    let site = crate::backend::backend().public_site()?;
    Ok(site.faqs().await)
}

/// Never fails: anything short of a stored record yields the fallbacks.
#[server]
pub async fn get_contact_info() -> Result<ContactInfo, ServerFnError> {
    match crate::backend::backend().public_site() {
        Ok(site) => Ok(site.contact_info().await),
        Err(err) => {
            tracing::warn!(error = %err, "contact info unavailable");
            Ok(ContactInfo::fallback())
        }
    }
}

#[server]
pub async fn get_site_copy() -> Result<SiteCopy, ServerFnError> {
    let site = crate::backend::backend().public_site()?;
    Ok(site.site_copy().await)
}

/// Validate against the packages currently on offer, then post.
#[server]
pub async fn submit_registration(form: RegistrationForm) -> Result<(), ServerFnError> {
    use crate::backend::to_server_error;

    let site = crate::backend::backend().public_site()?;
    let packages = site.packages().await;
    let application = form.validate(packages.items()).map_err(to_server_error)?;

    site.submit_application(&application)
        .await
        .map_err(to_server_error)?;
    tracing::info!(package_id = application.package_id, "registration submitted");
    Ok(())
}
