//! `reqwest`-backed access to the remote commerce backend.

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::domain::product::Product;
use crate::domain::search::SearchResult;
use crate::dto::api::{ApiResponse, CatalogPage, ProductDetail};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{CatalogReader, ProductIndex, ProductQuery};

const PRODUCTS_PATH: [&str; 2] = ["api", "products"];

/// Backend client implementing every repository trait over HTTP.
#[derive(Debug, Clone)]
pub struct BackendRepository {
    base_url: Url,
    http: reqwest::Client,
}

impl BackendRepository {
    /// Creates a client for `base_url`. Every request is bounded by `timeout`.
    pub fn new(base_url: &str, timeout: Duration) -> RepositoryResult<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| RepositoryError::Unexpected(format!("Invalid backend url: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(RepositoryError::Unexpected(format!(
                "Backend url cannot be a base: {base_url}"
            )));
        }

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(RepositoryError::from)?;

        Ok(Self { base_url, http })
    }

    fn endpoint(&self, extra: Option<&str>) -> RepositoryResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| RepositoryError::Unexpected("Backend url cannot be a base".to_string()))?
            .pop_if_empty()
            .extend(PRODUCTS_PATH)
            .extend(extra);
        Ok(url)
    }

    /// Sends a GET and decodes the 2xx body.
    async fn get_json<T>(&self, url: Url, params: &[(&'static str, String)]) -> RepositoryResult<T>
    where
        T: DeserializeOwned,
    {
        debug!("GET {url} {params:?}");

        let response = self
            .http
            .get(url)
            .query(params)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json().await?)
    }

    /// Sends a GET and unwraps the `{ success, data }` envelope.
    async fn get_envelope<T>(
        &self,
        url: Url,
        params: &[(&'static str, String)],
    ) -> RepositoryResult<T>
    where
        T: DeserializeOwned,
    {
        let envelope: ApiResponse<T> = self.get_json(url, params).await?;
        if !envelope.success {
            return Err(RepositoryError::Unsuccessful(
                envelope
                    .message
                    .unwrap_or_else(|| "no message".to_string()),
            ));
        }

        envelope
            .data
            .ok_or_else(|| RepositoryError::Malformed("missing data".to_string()))
    }
}

#[async_trait]
impl ProductIndex for BackendRepository {
    async fn query_products(&self, query: &ProductQuery) -> RepositoryResult<SearchResult> {
        let url = self.endpoint(None)?;
        self.get_envelope(url, &query.to_params()).await
    }

    async fn search_index(&self, query: &ProductQuery) -> RepositoryResult<Value> {
        let url = self.endpoint(None)?;
        self.get_json(url, &query.to_params()).await
    }
}

#[async_trait]
impl CatalogReader for BackendRepository {
    async fn list_catalog(&self) -> RepositoryResult<Vec<Product>> {
        let url = self.endpoint(None)?;
        let page: CatalogPage = self.get_envelope(url, &[]).await?;
        page.items
            .ok_or_else(|| RepositoryError::Malformed("catalog without items".to_string()))
    }

    async fn get_product(&self, id: &str) -> RepositoryResult<Option<Product>> {
        let url = self.endpoint(Some(id))?;
        match self.get_envelope::<ProductDetail>(url, &[]).await {
            Ok(detail) => Ok(detail.product),
            Err(RepositoryError::UnexpectedStatus(status))
                if status == StatusCode::NOT_FOUND.as_u16() =>
            {
                Ok(None)
            }
            Err(RepositoryError::Unsuccessful(_)) => Ok(None),
            Err(err) => Err(err),
        }
    }
}
