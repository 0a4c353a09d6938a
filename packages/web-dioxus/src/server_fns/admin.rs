use academy_core::models::{AdminProfile, ProfileUpdate, SiteContent};
use academy_core::dashboard::ResourceCount;
use academy_core::ResourceKind;
use dioxus::prelude::*;
use serde_json::Value;

/// Every record of a resource, as JSON in the backend's shape.
#[server]
pub async fn list_records(kind: ResourceKind) -> Result<Vec<Value>, ServerFnError> {
    use super::with_resource;
    use academy_core::api::ResourceClient;
    use academy_core::resource::ResourceBackend;

    crate::backend::admin_call(|api| async move {
        with_resource!(kind, R => {
            let items = ResourceClient::<R>::new(api).list().await?;
            items
                .iter()
                .map(|item| serde_json::to_value(item).map_err(academy_core::ApiError::from))
                .collect::<Result<Vec<_>, _>>()
        })
    })
    .await
}

/// Create when the record has no id, update otherwise.
#[server]
pub async fn save_record(kind: ResourceKind, record: Value) -> Result<(), ServerFnError> {
    use super::with_resource;
    use academy_core::api::ResourceClient;
    use academy_core::resource::{AdminResource, ResourceBackend};

    crate::backend::admin_call(|api| async move {
        with_resource!(kind, R => {
            let record: R = serde_json::from_value(record)?;
            let client = ResourceClient::<R>::new(api);
            match record.id() {
                Some(id) => client.update(id, &record).await,
                None => client.create(&record).await,
            }
        })
    })
    .await
}

#[server]
pub async fn delete_record(kind: ResourceKind, id: i64) -> Result<(), ServerFnError> {
    use super::with_resource;
    use academy_core::api::ResourceClient;
    use academy_core::resource::ResourceBackend;

    crate::backend::admin_call(|api| async move {
        with_resource!(kind, R => ResourceClient::<R>::new(api).delete(id).await)
    })
    .await
}

/// Store an image and return its relative URL.
#[server]
pub async fn upload_image(file_name: String, bytes: Vec<u8>) -> Result<String, ServerFnError> {
    crate::backend::admin_call(|api| async move { api.upload(&file_name, bytes).await }).await
}

/// Record counts for the dashboard, in sidebar order. A listing that fails
/// shows as unavailable without hiding the others.
#[server]
pub async fn dashboard_counts() -> Result<Vec<ResourceCount>, ServerFnError> {
    use super::with_resource;
    use academy_core::api::ResourceClient;
    use academy_core::dashboard::collect_counts;
    use academy_core::resource::ResourceBackend;

    crate::backend::admin_call(|api| async move {
        let counts = ResourceKind::variants().iter().map(|kind| {
            let api = api.clone();
            async move {
                let count = with_resource!(*kind, R => ResourceClient::<R>::new(api).list().await.map(|items| items.len()));
                (*kind, count)
            }
        });
        collect_counts(futures::future::join_all(counts).await)
    })
    .await
}

#[server]
pub async fn get_site_content() -> Result<Option<SiteContent>, ServerFnError> {
    use academy_core::api::SiteContentClient;

    crate::backend::admin_call(|api| async move { SiteContentClient::new(api).get().await }).await
}

#[server]
pub async fn save_site_content(content: SiteContent) -> Result<(), ServerFnError> {
    use academy_core::api::SiteContentClient;

    crate::backend::admin_call(|api| async move { SiteContentClient::new(api).put(&content).await })
        .await
}

#[server]
pub async fn get_profile() -> Result<AdminProfile, ServerFnError> {
    use academy_core::account::AccountClient;

    crate::backend::admin_call(|api| async move { AccountClient::new(api).profile().await }).await
}

#[server]
pub async fn update_profile(update: ProfileUpdate) -> Result<(), ServerFnError> {
    use academy_core::account::AccountClient;

    crate::backend::admin_call(|api| async move { AccountClient::new(api).update_profile(&update).await })
        .await
}

/// Delete the signed-in admin's account and end the session.
#[server]
pub async fn delete_account() -> Result<(), ServerFnError> {
    use crate::backend::{backend, SessionCredentialStore};
    use academy_core::account::AccountClient;

    crate::backend::admin_call(|api| async move { AccountClient::new(api).delete_account().await })
        .await?;

    let store = SessionCredentialStore::current().await?;
    backend().guard().sign_out(&store).await;
    Ok(())
}
