//! HTTP plumbing shared by every service module.

use std::sync::Arc;

use reqwest::{Method, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use rentroll_auth::{AccessToken, SessionStore};

use crate::error::ApiError;

/// Generic `{"message": ...}` acknowledgement the backend returns for
/// actions without a meaningful body (pay, terminate, delete).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acknowledgement {
    pub message: String,
}

/// One backend API, addressed by base URL, with the active session's bearer
/// token injected on every request.
#[derive(Clone)]
pub struct ApiClient {
    base: Url,
    http: reqwest::Client,
    session: Arc<dyn SessionStore>,
}

impl ApiClient {
    pub fn new(base_url: &str, session: Arc<dyn SessionStore>) -> Result<Self, ApiError> {
        let base = normalize_base(base_url)?;
        Ok(Self {
            base,
            http: reqwest::Client::new(),
            session,
        })
    }

    pub fn session(&self) -> &Arc<dyn SessionStore> {
        &self.session
    }

    fn url(&self, path: &str) -> Result<Url, ApiError> {
        self.base
            .join(path)
            .map_err(|e| ApiError::InvalidBaseUrl(format!("{path}: {e}")))
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        let request_id = Uuid::now_v7();
        debug!(%request_id, %method, %url, "api request");
        let mut builder = self
            .http
            .request(method, url)
            .header("x-request-id", request_id.to_string());
        if let Some(session) = self.session.get() {
            builder = builder.bearer_auth(session.token.as_str());
        }
        builder
    }

    /// Same as [`request`](Self::request) but with an explicit token, for
    /// the window during login before a session exists.
    pub(crate) fn request_with_token(
        &self,
        method: Method,
        path: &str,
        token: &AccessToken,
    ) -> Result<RequestBuilder, ApiError> {
        let url = self.url(path)?;
        let request_id = Uuid::now_v7();
        debug!(%request_id, %method, %url, "api request");
        Ok(self
            .http
            .request(method, url)
            .header("x-request-id", request_id.to_string())
            .bearer_auth(token.as_str()))
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.request(Method::GET, self.url(path)?).send().await?;
        decode(response).await
    }

    pub(crate) async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self
            .request(Method::POST, self.url(path)?)
            .json(body)
            .send()
            .await?;
        decode(response).await
    }

    pub(crate) async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.request(Method::POST, self.url(path)?).send().await?;
        decode(response).await
    }

    pub(crate) async fn post_form<T: DeserializeOwned>(
        &self,
        path: &str,
        form: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let response = self
            .request(Method::POST, self.url(path)?)
            .form(form)
            .send()
            .await?;
        decode(response).await
    }

    pub(crate) async fn put_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self
            .request(Method::PUT, self.url(path)?)
            .json(body)
            .send()
            .await?;
        decode(response).await
    }

    pub(crate) async fn delete_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.request(Method::DELETE, self.url(path)?).send().await?;
        decode(response).await
    }
}

/// Resolve the backend's error body into our taxonomy and decode successes.
pub(crate) async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    if !status.is_success() {
        let message = error_detail(status, response).await;
        return Err(ApiError::from_status(status.as_u16(), message));
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// FastAPI-style errors carry `{"detail": "..."}`; fall back to raw text.
async fn error_detail(status: StatusCode, response: Response) -> String {
    #[derive(Deserialize)]
    struct Detail {
        detail: String,
    }

    let body = response.text().await.unwrap_or_default();
    match serde_json::from_str::<Detail>(&body) {
        Ok(d) => d.detail,
        Err(_) if !body.is_empty() => body,
        Err(_) => status.to_string(),
    }
}

fn normalize_base(base_url: &str) -> Result<Url, ApiError> {
    // Relative endpoint paths only join correctly under a trailing slash.
    let with_slash = if base_url.ends_with('/') {
        base_url.to_string()
    } else {
        format!("{base_url}/")
    };
    Url::parse(&with_slash).map_err(|e| ApiError::InvalidBaseUrl(e.to_string()))
}
