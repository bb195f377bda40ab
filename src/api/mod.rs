//! Recipe API Client
//!
//! Typed wrappers around the recipe service's REST endpoints, organized by
//! resource. Transport and credentials are injected so pages can run against
//! the browser `fetch` backend and tests against an in-memory one.

mod http;
mod recipes;
mod posts;
mod session;

#[cfg(test)]
pub(crate) mod mock;

use std::rc::Rc;

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;

use crate::config::AppConfig;
use crate::credentials::{CredentialProvider, LocalStorageCredentials};
use crate::error::{ApiError, ApiResult};

pub use http::ReqwestBackend;

/// Characters left untouched in path segments and query values
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-encode an id for use in a path segment or query value
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub url: String,
    /// Sent as `Authorization: Bearer <token>`
    pub bearer: String,
    pub body: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: DeserializeOwned>(&self) -> ApiResult<T> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

/// Transport seam: one request in, one response (any status) out.
///
/// Only transport failures are errors here; status handling lives in
/// [`ApiClient`].
#[async_trait(?Send)]
pub trait HttpBackend {
    async fn send(&self, request: ApiRequest) -> ApiResult<ApiResponse>;
}

#[derive(Clone)]
pub struct ApiClient {
    config: AppConfig,
    backend: Rc<dyn HttpBackend>,
    credentials: Rc<dyn CredentialProvider>,
}

impl ApiClient {
    pub fn new(
        config: AppConfig,
        backend: Rc<dyn HttpBackend>,
        credentials: Rc<dyn CredentialProvider>,
    ) -> Self {
        Self { config, backend, credentials }
    }

    /// Client using `fetch` and `localStorage`
    pub fn browser(config: AppConfig) -> Self {
        Self::new(
            config,
            Rc::new(ReqwestBackend::default()),
            Rc::new(LocalStorageCredentials),
        )
    }

    pub fn credentials(&self) -> Rc<dyn CredentialProvider> {
        Rc::clone(&self.credentials)
    }

    /// Send an authenticated request and reject non-2xx statuses
    async fn send(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> ApiResult<ApiResponse> {
        let bearer = self
            .credentials
            .access_token()
            .ok_or_else(|| ApiError::Auth("no access token stored".to_string()))?;

        let request = ApiRequest {
            method,
            url: self.config.endpoint(path),
            bearer,
            body,
        };
        log::debug!("[API] {:?} {}", request.method, request.url);

        let response = self.backend.send(request).await.map_err(|e| {
            log::error!("[API] {:?} {} failed: {}", method, path, e);
            e
        })?;

        if !response.is_success() {
            log::warn!("[API] {:?} {} -> {}", method, path, response.status);
            return Err(ApiError::from_status(response.status));
        }
        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let response = self.send(HttpMethod::Get, path, None).await?;
        response.json().map_err(|e| {
            log::error!("[API] GET {} returned an unexpected body: {}", path, e);
            e
        })
    }
}
