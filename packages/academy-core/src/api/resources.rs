use async_trait::async_trait;
use reqwest::Method;
use std::marker::PhantomData;

use super::{endpoints, ApiClient};
use crate::error::{ApiError, Result};
use crate::models::SiteContent;
use crate::resource::{AdminResource, ResourceBackend};

/// One resource's endpoint table bound to an [`ApiClient`].
pub struct ResourceClient<R> {
    api: ApiClient,
    _resource: PhantomData<fn() -> R>,
}

impl<R> Clone for ResourceClient<R> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            _resource: PhantomData,
        }
    }
}

impl<R: AdminResource> ResourceClient<R> {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            _resource: PhantomData,
        }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Active records only, memoized. Resources without a public listing
    /// have nothing to show.
    pub async fn list_public(&self) -> Result<Vec<R>> {
        match R::ENDPOINTS.public_list {
            Some(path) => self.api.get_public_list(path).await,
            None => Ok(Vec::new()),
        }
    }
}

#[async_trait]
impl<R: AdminResource> ResourceBackend<R> for ResourceClient<R> {
    async fn list(&self) -> Result<Vec<R>> {
        self.api.get_list(R::ENDPOINTS.admin_list).await
    }

    async fn create(&self, record: &R) -> Result<()> {
        if !R::CAPABILITIES.create {
            return Err(ApiError::Forbidden);
        }
        self.api
            .send_unit(Method::POST, R::ENDPOINTS.base, Some(record))
            .await
    }

    async fn update(&self, id: i64, record: &R) -> Result<()> {
        if !R::CAPABILITIES.edit {
            return Err(ApiError::Forbidden);
        }
        self.api
            .send_unit(Method::PUT, &R::ENDPOINTS.update_path(id), Some(record))
            .await
    }

    async fn delete(&self, id: i64) -> Result<()> {
        if !R::CAPABILITIES.delete {
            return Err(ApiError::Forbidden);
        }
        self.api
            .send_unit::<()>(Method::DELETE, &R::ENDPOINTS.item(id), None)
            .await
    }
}

/// The site content singleton: one record, read and overwritten in place.
#[derive(Clone)]
pub struct SiteContentClient {
    api: ApiClient,
}

impl SiteContentClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Memoized public read. `None` when nothing has been saved yet.
    pub async fn get_public(&self) -> Result<Option<SiteContent>> {
        let records: Vec<SiteContent> = self.api.get_public_list(endpoints::SITE_CONTENT).await?;
        Ok(SiteContent::current(records))
    }

    /// Fresh read for the admin editor.
    pub async fn get(&self) -> Result<Option<SiteContent>> {
        let records: Vec<SiteContent> = self.api.get_list(endpoints::SITE_CONTENT).await?;
        Ok(SiteContent::current(records))
    }

    pub async fn put(&self, content: &SiteContent) -> Result<()> {
        let id = content.id.ok_or_else(|| ApiError::Validation {
            message: "Site content has not been created on the backend".to_string(),
            fields: Default::default(),
        })?;
        self.api
            .send_unit(Method::PUT, &format!("{}/{}", endpoints::SITE_CONTENT, id), Some(content))
            .await
    }
}
