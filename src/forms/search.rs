//! Search query-string form.

use serde::Deserialize;
use validator::Validate;

use crate::domain::search::{DEFAULT_PAGE_SIZE, SearchRequest, SortKey};
use crate::forms::{FormError, non_blank, parse_number, parse_positive};

/// Raw `/api/search` parameters. Every field arrives as text and is typed in
/// [`SearchRequest::try_from`].
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SearchQueryForm {
    #[validate(length(max = 256, message = "search query is too long"))]
    pub q: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
    pub sort: Option<String>,
    pub category: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub in_stock: Option<String>,
}

impl TryFrom<SearchQueryForm> for SearchRequest {
    type Error = FormError;

    fn try_from(form: SearchQueryForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let query = non_blank(form.q).ok_or(FormError::MissingQuery)?;

        Ok(SearchRequest {
            query,
            page: parse_positive(form.page.as_deref()).unwrap_or(1),
            limit: parse_positive(form.limit.as_deref()).unwrap_or(DEFAULT_PAGE_SIZE),
            sort: form
                .sort
                .as_deref()
                .map(SortKey::parse)
                .unwrap_or_default(),
            category: non_blank(form.category),
            // Malformed bounds disable the filter rather than rejecting the request.
            min_price: parse_number(form.min_price.as_deref()),
            max_price: parse_number(form.max_price.as_deref()),
            in_stock: form.in_stock.as_deref().map(str::trim) == Some("true"),
        })
    }
}
