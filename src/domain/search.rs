//! Typed search/browse requests and the paginated result they produce.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::product::Product;

/// Page size used when the caller does not ask for one.
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// Sort orders understood by the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum SortKey {
    #[default]
    Relevance,
    PriceAsc,
    PriceDesc,
    NameAsc,
    NameDesc,
    Newest,
    Popularity,
    Rating,
}

/// Caller-facing value and backend value for every [`SortKey`].
///
/// Both the remote delegation and the local fallback resolve sort keys
/// through this table only.
const SORT_MAPPINGS: [(SortKey, &str, &str); 8] = [
    (SortKey::Relevance, "relevance", "relevance"),
    (SortKey::PriceAsc, "price-asc", "price_asc"),
    (SortKey::PriceDesc, "price-desc", "price_desc"),
    (SortKey::NameAsc, "name-asc", "name_asc"),
    (SortKey::NameDesc, "name-desc", "name_desc"),
    (SortKey::Newest, "newest", "newest"),
    (SortKey::Popularity, "popularity", "popularity"),
    (SortKey::Rating, "rating", "rating"),
];

impl SortKey {
    /// Resolves a caller-facing sort value. Unknown values mean relevance.
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        SORT_MAPPINGS
            .iter()
            .find(|(_, caller, _)| *caller == value)
            .map(|(key, _, _)| *key)
            .unwrap_or_default()
    }

    /// Value sent to the UI and accepted by [`SortKey::parse`].
    pub fn as_str(self) -> &'static str {
        Self::mapping(self).1
    }

    /// Value in the remote product-index vocabulary.
    pub fn backend_value(self) -> &'static str {
        Self::mapping(self).2
    }

    fn mapping(self) -> (SortKey, &'static str, &'static str) {
        SORT_MAPPINGS
            .iter()
            .copied()
            .find(|(key, _, _)| *key == self)
            .unwrap_or(SORT_MAPPINGS[0])
    }
}

/// Validated free-text search over the catalog.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchRequest {
    /// Trimmed, non-empty query text.
    pub query: String,
    pub page: usize,
    pub limit: usize,
    pub sort: SortKey,
    pub category: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub in_stock: bool,
}

impl SearchRequest {
    /// Request for `query` with every other parameter at its default.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
            sort: SortKey::default(),
            category: None,
            min_price: None,
            max_price: None,
            in_stock: false,
        }
    }

    pub fn sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    pub fn paginate(mut self, page: usize, limit: usize) -> Self {
        self.page = page;
        self.limit = limit;
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
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

    /// Whitespace-separated, lowercased query terms.
    pub fn terms(&self) -> Vec<String> {
        self.query
            .split_whitespace()
            .map(str::to_lowercase)
            .collect()
    }
}

/// Catalog listing without a text query, as used by the product pages.
#[derive(Clone, Debug, PartialEq)]
pub struct BrowseRequest {
    pub page: usize,
    pub limit: usize,
    pub sort: SortKey,
    pub category: Option<String>,
}

impl Default for BrowseRequest {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
            sort: SortKey::Newest,
            category: None,
        }
    }
}

/// One page of products plus the counts needed to render pagination.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    #[serde(default)]
    pub items: Vec<Product>,
    #[serde(default)]
    pub total: usize,
    #[serde(default)]
    pub page: usize,
    #[serde(default)]
    pub total_pages: usize,
    #[serde(default)]
    pub limit: usize,
    /// Extra listing metadata from the backend (facets, page flags, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// What a search answers with.
#[derive(Clone, Debug, PartialEq)]
pub enum SearchOutcome {
    /// The product index's response body, untouched.
    Index(Value),
    /// A page computed locally from the full catalog.
    Local(SearchResult),
}
