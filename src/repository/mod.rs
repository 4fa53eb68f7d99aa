use async_trait::async_trait;
use serde_json::Value;

use crate::{
    domain::{
        product::Product,
        search::{BrowseRequest, SearchRequest, SearchResult, SortKey},
    },
    repository::errors::RepositoryResult,
};

pub mod errors;
pub mod http;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

pub use http::BackendRepository;

#[derive(Debug, Clone, PartialEq)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

/// Parameters forwarded to the backend's product listing endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductQuery {
    pub search: Option<String>,
    pub sort: SortKey,
    pub category: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub in_stock: bool,
    pub pagination: Option<Pagination>,
}

impl ProductQuery {
    pub fn new() -> Self {
        Self {
            search: None,
            sort: SortKey::default(),
            category: None,
            min_price: None,
            max_price: None,
            in_stock: false,
            pagination: None,
        }
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    pub fn category(mut self, category: Option<String>) -> Self {
        self.category = category;
        self
    }

    pub fn price_range(mut self, min_price: Option<f64>, max_price: Option<f64>) -> Self {
        self.min_price = min_price;
        self.max_price = max_price;
        self
    }

    pub fn in_stock(mut self, in_stock: bool) -> Self {
        self.in_stock = in_stock;
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }

    /// Query-string pairs in the backend vocabulary. Optional filters are
    /// only sent when set.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();

        if let Some(search) = &self.search {
            params.push(("q", search.clone()));
        }
        if let Some(pagination) = &self.pagination {
            params.push(("page", pagination.page.to_string()));
            params.push(("limit", pagination.per_page.to_string()));
        }
        params.push(("sort", self.sort.backend_value().to_string()));
        if let Some(category) = &self.category {
            params.push(("category", category.clone()));
        }
        if let Some(min_price) = self.min_price {
            params.push(("minPrice", min_price.to_string()));
        }
        if let Some(max_price) = self.max_price {
            params.push(("maxPrice", max_price.to_string()));
        }
        if self.in_stock {
            params.push(("inStock", "true".to_string()));
        }

        params
    }
}

impl Default for ProductQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&SearchRequest> for ProductQuery {
    fn from(request: &SearchRequest) -> Self {
        ProductQuery::new()
            .search(request.query.clone())
            .paginate(request.page, request.limit)
            .sort(request.sort)
            .category(request.category.clone())
            .price_range(request.min_price, request.max_price)
            .in_stock(request.in_stock)
    }
}

impl From<&BrowseRequest> for ProductQuery {
    fn from(request: &BrowseRequest) -> Self {
        ProductQuery::new()
            .paginate(request.page, request.limit)
            .sort(request.sort)
            .category(request.category.clone())
    }
}

/// Remote product index answering filtered, sorted, paginated queries.
#[async_trait]
pub trait ProductIndex: Send + Sync {
    async fn query_products(&self, query: &ProductQuery) -> RepositoryResult<SearchResult>;

    /// Body of an index query exactly as the backend sent it. Any 2xx JSON
    /// body counts as an answer, including `{ success: false }`.
    async fn search_index(&self, query: &ProductQuery) -> RepositoryResult<Value>;
}

/// Raw catalog access used by the local fallback and product lookups.
#[async_trait]
pub trait CatalogReader: Send + Sync {
    /// The complete, unfiltered catalog in backend order.
    async fn list_catalog(&self) -> RepositoryResult<Vec<Product>>;
    async fn get_product(&self, id: &str) -> RepositoryResult<Option<Product>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_request_maps_to_backend_params() {
        let request = SearchRequest::new("red vest")
            .paginate(2, 24)
            .sort(SortKey::PriceAsc)
            .category("BOXY_VESTS")
            .price_range(Some(10.0), Some(49.5))
            .in_stock(true);

        let params = ProductQuery::from(&request).to_params();

        assert_eq!(
            params,
            vec![
                ("q", "red vest".to_string()),
                ("page", "2".to_string()),
                ("limit", "24".to_string()),
                ("sort", "price_asc".to_string()),
                ("category", "BOXY_VESTS".to_string()),
                ("minPrice", "10".to_string()),
                ("maxPrice", "49.5".to_string()),
                ("inStock", "true".to_string()),
            ]
        );
    }

    #[test]
    fn unset_filters_are_not_sent() {
        let params = ProductQuery::from(&SearchRequest::new("vest")).to_params();
        let keys: Vec<_> = params.iter().map(|(key, _)| *key).collect();

        assert_eq!(keys, vec!["q", "page", "limit", "sort"]);
    }

    #[test]
    fn browse_request_has_no_text_query() {
        let params = ProductQuery::from(&BrowseRequest::default()).to_params();

        assert!(params.iter().all(|(key, _)| *key != "q"));
        assert!(params.contains(&("sort", "newest".to_string())));
    }
}
