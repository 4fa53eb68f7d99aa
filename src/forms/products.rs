//! Product listing query-string form.

use serde::Deserialize;
use validator::Validate;

use crate::domain::search::{BrowseRequest, DEFAULT_PAGE_SIZE, SortKey};
use crate::forms::{non_blank, parse_positive};

/// Raw `/api/products` parameters.
#[derive(Debug, Default, Deserialize)]
pub struct BrowseQueryForm {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub sort: Option<String>,
    pub category: Option<String>,
}

impl From<BrowseQueryForm> for BrowseRequest {
    fn from(form: BrowseQueryForm) -> Self {
        Self {
            page: parse_positive(form.page.as_deref()).unwrap_or(1),
            limit: parse_positive(form.limit.as_deref()).unwrap_or(DEFAULT_PAGE_SIZE),
            sort: form
                .sort
                .as_deref()
                .map(SortKey::parse)
                .unwrap_or(SortKey::Newest),
            // `all` is the listing page's "no category" option.
            category: non_blank(form.category)
                .filter(|category| !category.eq_ignore_ascii_case("all")),
        }
    }
}

/// JSON body of a batch product lookup (cart and wishlist hydration).
#[derive(Debug, Deserialize, Validate)]
pub struct ProductLookupForm {
    #[validate(length(min = 1, max = 100, message = "between 1 and 100 ids are required"))]
    pub ids: Vec<String>,
}
