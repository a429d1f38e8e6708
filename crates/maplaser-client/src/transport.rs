//! HTTP transport seam.
//!
//! The submission and polling clients only need two calls: post a JSON body
//! and get a URL. [`HttpTransport`] captures exactly that, so the clients can
//! run against [`ReqwestTransport`] in production and a scripted transport in
//! tests.

use crate::{ClientConfig, Result};
use reqwest::header::CONTENT_TYPE;

/// The parts of an HTTP response the clients inspect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Value of the `Content-Type` header, if present.
    pub content_type: Option<String>,
    /// Response body as text.
    pub body: String,
}

impl HttpResponse {
    /// Whether the status is 2xx.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Minimal HTTP client interface.
pub trait HttpTransport {
    /// POST `body` to `url` with `Content-Type: application/json`.
    fn post_json(&self, url: &str, body: &str) -> Result<HttpResponse>;

    /// GET `url`.
    fn get(&self, url: &str) -> Result<HttpResponse>;
}

impl<T: HttpTransport + ?Sized> HttpTransport for &T {
    fn post_json(&self, url: &str, body: &str) -> Result<HttpResponse> {
        (**self).post_json(url, body)
    }

    fn get(&self, url: &str) -> Result<HttpResponse> {
        (**self).get(url)
    }
}

/// Blocking `reqwest` transport.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

impl ReqwestTransport {
    /// Build a transport using the configured request timeout.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.request_timeout())
            .build()?;
        Ok(Self { client })
    }

    fn read(response: reqwest::blocking::Response) -> Result<HttpResponse> {
        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response.text()?;
        Ok(HttpResponse {
            status,
            content_type,
            body,
        })
    }
}

impl HttpTransport for ReqwestTransport {
    fn post_json(&self, url: &str, body: &str) -> Result<HttpResponse> {
        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body.to_string())
            .send()?;
        Self::read(response)
    }

    fn get(&self, url: &str) -> Result<HttpResponse> {
        let response = self.client.get(url).send()?;
        Self::read(response)
    }
}
