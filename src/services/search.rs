//! Catalog search with graceful degradation.

use crate::domain::search::{SearchOutcome, SearchRequest};
use crate::repository::{CatalogReader, ProductIndex, ProductQuery};
use crate::services::fallback::search_catalog;
use crate::services::{ServiceError, ServiceResult};

/// Searches the catalog for `request`.
///
/// The remote product index is asked first and any JSON body it answers with
/// on a 2xx is returned untouched, including an empty result or
/// `{ success: false }`. Only an error status, a transport failure or an
/// unreadable body sends the request to the local search over the whole
/// catalog; if that fails too the request ends with
/// [`ServiceError::UpstreamUnavailable`].
pub async fn search<R>(repo: &R, request: SearchRequest) -> ServiceResult<SearchOutcome>
where
    R: ProductIndex + CatalogReader + ?Sized,
{
    if request.query.trim().is_empty() {
        return Err(ServiceError::InvalidRequest(
            "Search query is required".to_string(),
        ));
    }
    if request.page == 0 || request.limit == 0 {
        return Err(ServiceError::InvalidRequest(
            "Page and limit must be at least 1".to_string(),
        ));
    }

    match repo.search_index(&ProductQuery::from(&request)).await {
        Ok(body) => return Ok(SearchOutcome::Index(body)),
        Err(err) => {
            log::warn!(
                "Product index failed for query {:?}, searching catalog locally: {err}",
                request.query
            );
        }
    }

    let catalog = repo.list_catalog().await.map_err(|err| {
        log::error!("Failed to load catalog for local search: {err}");
        ServiceError::UpstreamUnavailable
    })?;

    Ok(SearchOutcome::Local(search_catalog(catalog, &request)))
}
