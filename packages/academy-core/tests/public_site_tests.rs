//! Public page loaders: fallbacks, ordering and memoization

mod common;

use crate::common::MockBackend;
use academy_core::api::ResourceClient;
use academy_core::models::Package;
use academy_core::public::{PublicSite, FALLBACK_EMAIL, FALLBACK_PHONE};
use academy_core::registration::RegistrationForm;
use academy_core::resource::ResourceBackend;
use academy_core::PublicData;
use serde_json::json;

#[tokio::test]
async fn footer_falls_back_when_site_content_fails() {
    let backend = MockBackend::start().await;
    backend.fail("GET", "/api/SiteContent", 500, "database unavailable");

    let contact = PublicSite::new(backend.client()).contact_info().await;

    assert_eq!(contact.email, FALLBACK_EMAIL);
    assert_eq!(contact.phone, FALLBACK_PHONE);
}

#[tokio::test]
async fn footer_uses_latest_site_content() {
    let backend = MockBackend::start().await;
    backend.seed(
        "/api/SiteContent",
        vec![
            json!({ "id": 1, "email": "old@academy.com", "phone": "111" }),
            json!({ "id": 4, "email": "hello@academy.com", "phone": "+1 222 333", "whatsapp": null }),
        ],
    );

    let contact = PublicSite::new(backend.client()).contact_info().await;

    assert_eq!(contact.email, "hello@academy.com");
    assert_eq!(contact.phone, "+1 222 333");
    assert_eq!(contact.whatsapp, None);
}

#[tokio::test]
async fn landing_renders_what_arrived() {
    let backend = MockBackend::start().await;
    backend.seed(
        "/api/Teachers",
        vec![
            json!({ "name": "Second", "order": 2, "imageUrl": "/uploads/b.png", "isActive": true }),
            json!({ "name": "First", "order": 1, "imageUrl": "uploads/a.png", "isActive": true }),
            json!({ "name": "Hidden", "order": 0, "isActive": false }),
        ],
    );
    backend.seed(
        "/api/Faqs",
        vec![json!({ "question": "Is there a free trial?", "answer": "Yes", "order": 1, "isActive": true })],
    );
    backend.fail("GET", "/api/Packages", 503, "");
    backend.fail("GET", "/api/Testimonials", 500, "");

    let landing = PublicSite::new(backend.client()).landing().await;

    assert_eq!(landing.packages, PublicData::Unavailable);
    assert_eq!(landing.testimonials, PublicData::Unavailable);
    assert_eq!(landing.faqs.items().len(), 1);

    let teachers = landing.teachers.items();
    assert_eq!(
        teachers.iter().map(|t| t.name.as_str()).collect::<Vec<_>>(),
        vec!["First", "Second"]
    );
    assert_eq!(teachers[0].image_url, format!("{}/uploads/a.png", backend.url));
    assert_eq!(landing.copy.hero_title, "Learn the Quran Online");
}

#[tokio::test]
async fn public_reads_are_memoized_until_admin_change() {
    let backend = MockBackend::start().await;
    backend.seed(
        "/api/Packages",
        vec![json!({ "id": 1, "name": "Qaida", "price": 20, "isActive": true })],
    );
    let cache = MockBackend::cache();
    let site = PublicSite::new(backend.cached_client(cache.clone()));

    assert_eq!(site.packages().await.items().len(), 1);
    assert_eq!(site.packages().await.items().len(), 1);
    assert_eq!(backend.hits("GET", "/api/Packages"), 1);

    let admin = ResourceClient::<Package>::new(backend.admin_client().with_cache(cache));
    admin.delete(1).await.unwrap();

    assert!(site.packages().await.is_empty());
    assert_eq!(backend.hits("GET", "/api/Packages"), 2);
}

#[tokio::test]
async fn registration_posts_without_credentials() {
    let backend = MockBackend::start().await;
    backend.seed(
        "/api/Packages",
        vec![json!({ "id": 3, "name": "Hifz", "price": 40, "isActive": true })],
    );
    let site = PublicSite::new(backend.client());
    let packages = site.packages().await;

    let form = RegistrationForm {
        name: "Omar Farooq".to_string(),
        phone: "+1 555 0100".to_string(),
        email: "omar@example.com".to_string(),
        age: "34".to_string(),
        country: "Canada".to_string(),
        gender: "Male".to_string(),
        package_id: Some(3),
        notes: String::new(),
    };
    let application = form.validate(packages.items()).unwrap();
    site.submit_application(&application).await.unwrap();

    let post = backend
        .requests()
        .into_iter()
        .find(|r| r.method == "POST")
        .unwrap();
    assert_eq!(post.path, "/api/Applications");
    assert_eq!(post.bearer, None);
    assert_eq!(post.body["packageId"], 3);
    assert_eq!(post.body["course"], "Hifz");
    assert_eq!(post.body["applicantEmail"], "omar@example.com");
}

#[tokio::test]
async fn plain_text_registration_reply_is_success() {
    let backend = MockBackend::start().await;
    backend.seed(
        "/api/Packages",
        vec![json!({ "id": 2, "name": "Qaida", "price": 20, "isActive": true })],
    );
    backend.fail("POST", "/api/Applications", 200, "Application submitted");
    let site = PublicSite::new(backend.client());
    let packages = site.packages().await;

    let form = RegistrationForm {
        name: "Aisha Rahman".to_string(),
        phone: "+44 20 7946 0000".to_string(),
        email: String::new(),
        age: "9".to_string(),
        country: "UK".to_string(),
        gender: "Female".to_string(),
        package_id: Some(2),
        notes: String::new(),
    };
    let application = form.validate(packages.items()).unwrap();

    assert_eq!(site.submit_application(&application).await, Ok(()));
    assert_eq!(backend.hits("POST", "/api/Applications"), 1);
}
