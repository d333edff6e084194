//! gloo-net transport

use ami_dashboard::transport::{join_url, HttpResponse, Transport};
use ami_dashboard::TransportError;
use async_trait::async_trait;
use gloo_net::http::Request;

/// GETs endpoint paths, page-relative unless a base URL is given
#[derive(Debug, Clone)]
pub struct GlooTransport {
    base_url: String,
}

impl GlooTransport {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn get(&self, path: &str) -> Result<HttpResponse, TransportError> {
        let url = join_url(&self.base_url, path);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| TransportError::Request(format!("Network error: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Body(e.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}
