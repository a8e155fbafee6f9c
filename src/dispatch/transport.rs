use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::Value;

/// JSON-over-HTTP seam so tests can run the dispatch pipeline without a
/// network.
#[async_trait]
pub trait Transport: Send + Sync {
    /// POST a JSON body; returns the status code and the parsed body.
    async fn post_json(&self, url: &str, body: &Value) -> Result<(u16, Value)>;
}

/// reqwest-backed transport used outside of tests
pub struct HttpTransport {
    http: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
        }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post_json(&self, url: &str, body: &Value) -> Result<(u16, Value)> {
        let response = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .context("Request failed")?;

        let status = response.status().as_u16();

        // Error responses still carry a JSON body worth surfacing; a body
        // that fails to parse becomes null rather than a transport error.
        let body = match response.json::<Value>().await {
            Ok(value) => value,
            Err(_) => Value::Null,
        };

        Ok((status, body))
    }
}
