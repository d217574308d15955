pub mod cache;
pub mod client;

pub use cache::*;
pub use client::*;

use crate::error::FetchError;
use crate::model::GameRecord;
use reqwest::Url;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

pub const DEFAULT_REVALIDATE: chrono::Duration = chrono::Duration::seconds(60);

/// Logical upstream operation. Each one maps onto `/next-api/?api=<kind>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApiRequest {
    Game(String),
    GameDay,
}

impl ApiRequest {
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            ApiRequest::Game(_) => "game",
            ApiRequest::GameDay => "game_day",
        }
    }

    #[must_use]
    pub fn cache_key(&self) -> String {
        match self {
            ApiRequest::Game(id) => format!("{}:{id}", self.kind()),
            ApiRequest::GameDay => self.kind().to_string(),
        }
    }

    /// # Errors
    ///
    /// Will return `Err` if `base_url` is not a valid absolute url
    pub fn url(&self, base_url: &str) -> Result<Url, FetchError> {
        let endpoint = format!("{}/next-api/", base_url.trim_end_matches('/'));
        let mut url = Url::parse(&endpoint).map_err(|e| FetchError::new(e.to_string()))?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("api", self.kind());
            if let ApiRequest::Game(id) = self {
                query.append_pair("id", id);
            }
        }
        Ok(url)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CachePolicy {
    /// Serve a stored response while it is younger than the given age.
    Revalidate(chrono::Duration),
    /// Always hit upstream, never read or write the cache.
    NoStore,
}

#[derive(Clone)]
pub struct FetchGateway {
    base_url: String,
    api: Arc<dyn GameApi>,
    cache: ResponseCache,
    revalidate: chrono::Duration,
}

impl FetchGateway {
    #[must_use]
    pub fn new(base_url: impl Into<String>, api: Arc<dyn GameApi>) -> Self {
        Self {
            base_url: base_url.into(),
            api,
            cache: ResponseCache::new(),
            revalidate: DEFAULT_REVALIDATE,
        }
    }

    #[must_use]
    pub fn with_revalidate(mut self, revalidate: chrono::Duration) -> Self {
        self.revalidate = revalidate;
        self
    }

    #[must_use]
    pub fn revalidating(&self) -> CachePolicy {
        CachePolicy::Revalidate(self.revalidate)
    }

    #[must_use]
    pub fn cache(&self) -> &ResponseCache {
        &self.cache
    }

    /// Fetch the raw JSON body for `request`. `Ok(None)` means upstream had no record.
    ///
    /// # Errors
    ///
    /// Will return `Err` on any transport failure, non-success status or malformed body
    pub async fn fetch(
        &self,
        request: &ApiRequest,
        policy: CachePolicy,
    ) -> Result<Option<Value>, FetchError> {
        let url = request.url(&self.base_url)?;

        let max_age = match policy {
            CachePolicy::NoStore => {
                debug!(%url, "live fetch");
                return self.api.get_json(&url).await;
            }
            CachePolicy::Revalidate(max_age) => max_age,
        };

        let key = request.cache_key();
        if let Some(value) = self.cache.get_fresh(&key, max_age).await {
            debug!(key = %key, "cache hit");
            return Ok(Some(value));
        }

        // One upstream call per key; whoever waited on the lock re-reads the cache
        let key_mutex = self.cache.key_lock(&key).await;
        let fetched = {
            let _guard = key_mutex.lock().await;
            self.fetch_and_store(&key, &url, max_age).await
        };
        self.cache.release_key_lock(&key, key_mutex).await;
        fetched
    }

    async fn fetch_and_store(
        &self,
        key: &str,
        url: &Url,
        max_age: chrono::Duration,
    ) -> Result<Option<Value>, FetchError> {
        if let Some(value) = self.cache.get_fresh(key, max_age).await {
            debug!(key, "cache hit after wait");
            return Ok(Some(value));
        }

        debug!(key, %url, "cache miss");
        let fetched = self.api.get_json(url).await?;
        if let Some(value) = &fetched {
            self.cache.store(key, value.clone(), max_age).await;
        }
        Ok(fetched)
    }

    /// # Errors
    ///
    /// Will return `Err` if the fetch fails or the body is not a game record
    pub async fn fetch_game(
        &self,
        request: &ApiRequest,
        policy: CachePolicy,
    ) -> Result<Option<GameRecord>, FetchError> {
        match self.fetch(request, policy).await? {
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
            None => Ok(None),
        }
    }
}
