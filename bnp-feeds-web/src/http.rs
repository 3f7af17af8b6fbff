//! Fetch API transport

use async_trait::async_trait;
use bnp_feeds::{Endpoint, FetchError, FetchResult, HttpGet};
use gloo_net::http::Request;

/// [`HttpGet`] over the browser's fetch
pub struct FetchHttp {
    base_url: String,
}

impl FetchHttp {
    /// Requests relative to the page's origin
    pub fn same_origin() -> Self {
        Self::new("")
    }

    pub fn new(base_url: &str) -> Self {
        // Normalize: remove trailing slash
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn url(&self, endpoint: &Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }
}

#[async_trait(?Send)]
impl HttpGet for FetchHttp {
    async fn get(&self, endpoint: &Endpoint) -> FetchResult<String> {
        let response = Request::get(&self.url(endpoint))
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(FetchError::Status {
                status: response.status(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))
    }
}
