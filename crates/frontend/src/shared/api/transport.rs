//! HTTP seam between the API client and the browser
//!
//! [`HttpTransport`] takes a fully described request and returns the raw
//! response. The browser implementation uses `gloo-net`; tests plug in an
//! in-memory fake.

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde_json::Value;

use super::error::RequestError;
use crate::shared::api_utils::api_url;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// A request relative to the API base, e.g. `GET /productos`
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub body: Option<Value>,
}

impl HttpRequest {
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
        }
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// Raw response; the body has already been read exactly once
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait(?Send)]
pub trait HttpTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, RequestError>;
}

/// Browser fetch through `gloo-net`
#[derive(Debug, Clone, Default)]
pub struct GlooTransport;

impl GlooTransport {
    pub fn new() -> Self {
        Self
    }

    fn builder(method: HttpMethod, url: &str) -> RequestBuilder {
        let builder = match method {
            HttpMethod::Get => Request::get(url),
            HttpMethod::Post => Request::post(url),
            HttpMethod::Put => Request::put(url),
            HttpMethod::Patch => Request::patch(url),
            HttpMethod::Delete => Request::delete(url),
        };
        builder.header("Accept", "application/json")
    }

    async fn read(response: Response) -> Result<HttpResponse, RequestError> {
        let status = response.status();
        let status_text = response.status_text();
        let body = response
            .text()
            .await
            .map_err(|e| RequestError::Network(format!("Failed to read response: {}", e)))?;
        Ok(HttpResponse {
            status,
            status_text,
            body,
        })
    }
}

#[async_trait(?Send)]
impl HttpTransport for GlooTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, RequestError> {
        let url = api_url(&request.path);
        log::debug!("{} {}", request.method.as_str(), url);

        let builder = Self::builder(request.method, &url);
        let response = match request.body {
            Some(body) => {
                let text = serde_json::to_string(&body)
                    .map_err(|e| RequestError::Network(format!("Failed to serialize request: {}", e)))?;
                builder
                    .header("Content-Type", "application/json")
                    .body(text)
                    .map_err(|e| RequestError::Network(format!("Failed to build request: {}", e)))?
                    .send()
                    .await
            }
            None => builder.send().await,
        }
        .map_err(|e| RequestError::Network(format!("Failed to send request: {}", e)))?;

        Self::read(response).await
    }
}
