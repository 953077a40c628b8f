//! HttpHashClient -- concrete [`HashClient`] talking to the hash service.
//!
//! Sends `{"input": ...}` to `POST {base_url}/api/hash` and maps the
//! response onto [`HashResult`] or [`RequestError`]. One call is one request;
//! there is no retry.

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;

use hashgen_core::client::HashClient;
use hashgen_types::config::ClientConfig;
use hashgen_types::error::RequestError;
use hashgen_types::hash::{ErrorBody, HashRequest, HashResult};

pub struct HttpHashClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpHashClient {
    const HASH_PATH: &'static str = "/api/hash";

    /// Build a client from configuration.
    ///
    /// A timeout is only installed when `request_timeout_secs` is set.
    pub fn new(config: &ClientConfig) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self) -> String {
        format!("{}{}", self.base_url, Self::HASH_PATH)
    }
}

impl HashClient for HttpHashClient {
    async fn generate_hash(&self, input: &str) -> Result<HashResult, RequestError> {
        let response = self
            .client
            .post(self.url())
            .header(CONTENT_TYPE, "application/json")
            .json(&HashRequest::new(input))
            .send()
            .await
            .map_err(|e| RequestError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            // Any body shape is tolerated; only a string `error` field is used.
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.error);
            tracing::debug!(
                status = status.as_u16(),
                has_message = message.is_some(),
                "hash service rejected request"
            );
            return Err(RequestError::rejected(status.as_u16(), message));
        }

        response
            .json::<HashResult>()
            .await
            .map_err(|e| RequestError::Malformed(e.to_string()))
    }
}
