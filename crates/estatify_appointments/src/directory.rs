//! Directory resolvers.
//!
//! Implementations of the `DirectoryService` collaborator trait: an HTTP
//! resolver against the platform API that owns property and user records,
//! and a static resolver used when the directory is disabled and as a test
//! fixture.

use estatify_common::error::{Context, EstatifyError};
use estatify_common::models::{PropertySummary, UserSummary};
use estatify_common::services::{BoxFuture, BoxedError, DirectoryService};
use estatify_config::DirectoryConfig;
use std::collections::HashMap;
use tracing::debug;

/// Directory resolver backed by the platform's property/user API.
pub struct HttpDirectoryService {
    base_url: String,
    client: reqwest::Client,
}

impl HttpDirectoryService {
    /// Create a resolver from the directory configuration.
    pub fn from_config(config: &DirectoryConfig) -> Result<Self, EstatifyError> {
        let client = match config.request_timeout_secs {
            Some(secs) => estatify_common::http::client::create_client(secs)
                .map_err(|e| EstatifyError::HttpError(e.to_string()))?,
            None => estatify_common::http::client::HTTP_CLIENT.clone(),
        };

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    async fn fetch_json<T: serde::de::DeserializeOwned>(
        &self,
        url: String,
    ) -> Result<T, EstatifyError> {
        debug!("Directory lookup: {}", url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(EstatifyError::from)?
            .error_for_status()
            .map_err(EstatifyError::from)?;

        response
            .json::<T>()
            .await
            .context("failed to decode directory response")
    }
}

impl DirectoryService for HttpDirectoryService {
    fn get_property(&self, property_id: &str) -> BoxFuture<'_, PropertySummary, BoxedError> {
        let url = format!("{}/properties/{}", self.base_url, property_id);
        Box::pin(async move {
            self.fetch_json(url)
                .await
                .map_err(|e| BoxedError(Box::new(e)))
        })
    }

    fn get_user(&self, user_id: &str) -> BoxFuture<'_, UserSummary, BoxedError> {
        let url = format!("{}/users/{}", self.base_url, user_id);
        Box::pin(async move {
            self.fetch_json(url)
                .await
                .map_err(|e| BoxedError(Box::new(e)))
        })
    }
}

/// Directory resolver over a fixed set of records.
///
/// Unknown references resolve to placeholder summaries, matching how the
/// listing degrades when the real directory cannot resolve a reference.
#[derive(Debug, Clone, Default)]
pub struct StaticDirectoryService {
    properties: HashMap<String, PropertySummary>,
    users: HashMap<String, UserSummary>,
}

impl StaticDirectoryService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_property(mut self, property: PropertySummary) -> Self {
        self.properties.insert(property.id.clone(), property);
        self
    }

    pub fn with_user(mut self, user: UserSummary) -> Self {
        self.users.insert(user.id.clone(), user);
        self
    }
}

impl DirectoryService for StaticDirectoryService {
    fn get_property(&self, property_id: &str) -> BoxFuture<'_, PropertySummary, BoxedError> {
        let summary = self
            .properties
            .get(property_id)
            .cloned()
            .unwrap_or_else(|| PropertySummary::unresolved(property_id));
        Box::pin(async move { Ok(summary) })
    }

    fn get_user(&self, user_id: &str) -> BoxFuture<'_, UserSummary, BoxedError> {
        let summary = self
            .users
            .get(user_id)
            .cloned()
            .unwrap_or_else(|| UserSummary::unresolved(user_id));
        Box::pin(async move { Ok(summary) })
    }
}
