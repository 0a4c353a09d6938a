use reqwest::{Method, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::debug;

use super::{endpoints, PublicCache};
use crate::config::{resolve_asset_url, Config};
use crate::error::{ApiError, Result};

/// HTTP client for the academy backend
#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
    auth_token: Option<String>,
    cache: PublicCache,
}

impl ApiClient {
    /// Client without a request timeout or public memoization
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            auth_token: None,
            cache: PublicCache::disabled(),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_url.trim_end_matches('/').to_string(),
            auth_token: None,
            cache: PublicCache::new(config.public_cache_ttl),
        })
    }

    /// Attach a bearer token to admin calls
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    /// Share a memoization cache with other clients
    pub fn with_cache(mut self, cache: PublicCache) -> Self {
        self.cache = cache;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn cache(&self) -> &PublicCache {
        &self.cache
    }

    /// Absolute URL for an upload path stored on a record
    pub fn asset_url(&self, path: &str) -> String {
        resolve_asset_url(&self.base_url, path)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorized(&self, request: RequestBuilder) -> Result<RequestBuilder> {
        let token = self.auth_token.as_deref().ok_or(ApiError::Unauthorized)?;
        Ok(request.bearer_auth(token))
    }

    /// Anonymous GET, memoized per path.
    pub async fn get_public<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let body = self
            .cache
            .get_or_fetch(path, async {
                debug!(path, "GET (public)");
                let response = self.client.get(self.url(path)).send().await?;
                read_body(response).await
            })
            .await?;
        decode(&body)
    }

    /// Anonymous GET of a collection. A 404 means "nothing published yet".
    pub async fn get_public_list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>> {
        empty_on_not_found(self.get_public(path).await)
    }

    /// Authenticated GET. Never memoized.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        debug!(path, "GET");
        let request = self.authorized(self.client.get(self.url(path)))?;
        let body = read_body(request.send().await?).await?;
        decode(&body)
    }

    /// Authenticated GET of a collection. A 404 is an empty list.
    pub async fn get_list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>> {
        empty_on_not_found(self.get(path).await)
    }

    /// Authenticated write. Any 2xx is success whatever the body holds
    /// (the backend often answers with plain text such as "Teacher deleted
    /// successfully"). Every successful mutation empties the public cache.
    pub async fn send_unit<B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        debug!(%method, path, "request");
        let mut request = self.client.request(method.clone(), self.url(path));
        if let Some(body) = body {
            request = request.json(body);
        }
        let request = self.authorized(request)?;
        read_body(request.send().await?).await?;

        if method != Method::GET {
            self.cache.invalidate_all();
        }
        Ok(())
    }

    /// Unauthenticated POST whose 2xx body is ignored.
    pub async fn post_public_unit<B>(&self, path: &str, body: &B) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        self.post_public_text(path, body).await.map(|_| ())
    }

    /// Unauthenticated POST whose response body is returned as text.
    pub async fn post_public_text<B>(&self, path: &str, body: &B) -> Result<String>
    where
        B: Serialize + ?Sized,
    {
        debug!(path, "POST (public)");
        let response = self.client.post(self.url(path)).json(body).send().await?;
        read_body(response).await
    }

    /// Multipart upload of one file. Returns the stored file's relative URL.
    pub async fn upload(&self, file_name: &str, bytes: Vec<u8>) -> Result<String> {
        debug!(file_name, size = bytes.len(), "upload");
        let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name.to_string());
        let form = reqwest::multipart::Form::new().part("file", part);

        let request = self.authorized(self.client.post(self.url(endpoints::UPLOAD)))?;
        let body = read_body(request.multipart(form).send().await?).await?;
        upload_url(&body)
    }
}

/// Status check plus body text.
async fn read_body(response: Response) -> Result<String> {
    let status = response.status();
    let body = response.text().await?;
    if status.is_success() {
        Ok(body)
    } else {
        debug!(status = status.as_u16(), "backend rejected request");
        Err(ApiError::from_status(status.as_u16(), &body))
    }
}

/// Empty bodies decode as JSON `null`, so `()` and `Option<T>` work for
/// 204 responses.
pub(crate) fn decode<T: DeserializeOwned>(body: &str) -> Result<T> {
    let body = if body.trim().is_empty() { "null" } else { body };
    Ok(serde_json::from_str(body)?)
}

fn empty_on_not_found<T>(result: Result<Vec<T>>) -> Result<Vec<T>> {
    match result {
        Err(ApiError::NotFound) => Ok(Vec::new()),
        other => other,
    }
}

/// `"..."`, `{"url": "..."}` or raw text.
fn upload_url(body: &str) -> Result<String> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Uploaded {
        Bare(String),
        Wrapped {
            #[serde(alias = "Url", alias = "fileUrl", alias = "path")]
            url: String,
        },
    }

    let url = match serde_json::from_str::<Uploaded>(body) {
        Ok(Uploaded::Bare(url)) | Ok(Uploaded::Wrapped { url }) => url,
        Err(_) => body.trim().to_string(),
    };

    if url.is_empty() || url.starts_with('{') {
        return Err(ApiError::Decode(format!("no file URL in upload response: {body}")));
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_url_shapes() {
        assert_eq!(upload_url(r#""/uploads/a.png""#).unwrap(), "/uploads/a.png");
        assert_eq!(upload_url(r#"{"url":"/uploads/b.png"}"#).unwrap(), "/uploads/b.png");
        assert_eq!(upload_url("/uploads/c.png\n").unwrap(), "/uploads/c.png");
        assert!(upload_url(r#"{"size":12}"#).is_err());
        assert!(upload_url("").is_err());
    }

    #[test]
    fn test_empty_body_decodes_as_unit() {
        decode::<()>("").unwrap();
        assert_eq!(decode::<Option<i64>>(" ").unwrap(), None);
        assert!(matches!(decode::<Vec<i64>>("{"), Err(ApiError::Decode(_))));
    }

    #[test]
    fn test_base_url_is_normalized() {
        let client = ApiClient::new("http://localhost:5000/");
        assert_eq!(client.base_url(), "http://localhost:5000");
        assert_eq!(
            client.asset_url("uploads/t.png"),
            "http://localhost:5000/uploads/t.png"
        );
    }
}
