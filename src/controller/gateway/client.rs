use crate::error::FetchError;
use reqwest::{Client, StatusCode, Url};
use serde_json::Value;
use std::time::Duration;

/// Transport seam for the upstream API.
#[async_trait::async_trait]
pub trait GameApi: Send + Sync {
    /// `Ok(None)` when upstream answers 404 or a JSON `null`.
    async fn get_json(&self, url: &Url) -> Result<Option<Value>, FetchError>;
}

pub struct ReqwestGameApi {
    client: Client,
}

impl ReqwestGameApi {
    /// # Errors
    ///
    /// Will return `Err` if the http client cannot be built
    pub fn new(timeout: Option<Duration>) -> Result<Self, FetchError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }
}

#[async_trait::async_trait]
impl GameApi for ReqwestGameApi {
    async fn get_json(&self, url: &Url) -> Result<Option<Value>, FetchError> {
        let resp = self.client.get(url.clone()).send().await?;
        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(FetchError::new(format!("upstream returned {status} for {url}")));
        }

        let body = resp.bytes().await?;
        let json: Value = serde_json::from_slice(&body)?;
        if json.is_null() {
            Ok(None)
        } else {
            Ok(Some(json))
        }
    }
}
