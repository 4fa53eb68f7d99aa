//! Product listing and lookups backing the browse and cart pages.

use futures::{StreamExt, future, stream};

use crate::domain::product::Product;
use crate::domain::search::{BrowseRequest, SearchResult};
use crate::pagination::total_pages;
use crate::repository::{CatalogReader, ProductIndex, ProductQuery};
use crate::services::{ServiceError, ServiceResult};

/// Lists one page of the catalog, optionally restricted to a category.
///
/// Counts the backend leaves out are derived from the page itself.
pub async fn browse<R>(repo: &R, request: BrowseRequest) -> ServiceResult<SearchResult>
where
    R: ProductIndex + ?Sized,
{
    let mut result = repo
        .query_products(&ProductQuery::from(&request))
        .await
        .map_err(|err| {
            log::error!("Failed to list products: {err}");
            ServiceError::UpstreamUnavailable
        })?;

    if result.total == 0 {
        result.total = result.items.len();
    }
    if result.limit == 0 {
        result.limit = request.limit;
    }
    if result.page == 0 {
        result.page = request.page;
    }
    if result.total_pages == 0 {
        result.total_pages = total_pages(result.total, result.limit);
    }

    Ok(result)
}

/// Loads a single product by id.
pub async fn get_product<R>(repo: &R, id: &str) -> ServiceResult<Product>
where
    R: CatalogReader + ?Sized,
{
    let id = id.trim();
    if id.is_empty() {
        return Err(ServiceError::InvalidRequest(
            "Product id is required".to_string(),
        ));
    }

    match repo.get_product(id).await {
        Ok(Some(product)) => Ok(product),
        Ok(None) => Err(ServiceError::NotFound),
        Err(err) => {
            log::error!("Failed to load product {id}: {err}");
            Err(ServiceError::UpstreamUnavailable)
        }
    }
}

/// Loads the products for `ids`, keeping input order.
///
/// At most `concurrency` lookups run at once. Ids that are missing or whose
/// lookup fails are dropped instead of failing the batch.
pub async fn get_products<R>(repo: &R, ids: &[String], concurrency: usize) -> Vec<Product>
where
    R: CatalogReader + ?Sized,
{
    stream::iter(ids)
        .map(|id| async move {
            match repo.get_product(id).await {
                Ok(product) => product,
                Err(err) => {
                    log::warn!("Skipping product {id}: {err}");
                    None
                }
            }
        })
        .buffered(concurrency.max(1))
        .filter_map(future::ready)
        .collect()
        .await
}
