//! Mock repository implementations for isolating services in tests.

use async_trait::async_trait;
use mockall::mock;
use serde_json::Value;

use crate::domain::product::Product;
use crate::domain::search::SearchResult;
use crate::repository::errors::RepositoryResult;
use crate::repository::{CatalogReader, ProductIndex, ProductQuery};

mock! {
    pub Repository {}

    #[async_trait]
    impl ProductIndex for Repository {
        async fn query_products(&self, query: &ProductQuery) -> RepositoryResult<SearchResult>;
        async fn search_index(&self, query: &ProductQuery) -> RepositoryResult<Value>;
    }

    #[async_trait]
    impl CatalogReader for Repository {
        async fn list_catalog(&self) -> RepositoryResult<Vec<Product>>;
        async fn get_product(&self, id: &str) -> RepositoryResult<Option<Product>>;
    }
}
