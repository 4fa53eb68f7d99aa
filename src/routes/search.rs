use actix_web::{HttpResponse, Responder, get, web};

use crate::domain::search::{SearchOutcome, SearchRequest};
use crate::dto::api::ApiResponse;
use crate::forms::search::SearchQueryForm;
use crate::repository::BackendRepository;
use crate::routes::error_response;
use crate::services::{ServiceError, search as search_service};

const SEARCH_UNAVAILABLE: &str = "Search service temporarily unavailable";

#[get("/search")]
/// Search the catalog, degrading to a local search when the index is down.
pub async fn search_products(
    params: web::Query<SearchQueryForm>,
    repo: web::Data<BackendRepository>,
) -> impl Responder {
    let result = match SearchRequest::try_from(params.into_inner()) {
        Ok(request) => search_service::search(repo.get_ref(), request).await,
        Err(err) => Err(ServiceError::from(err)),
    };

    match result {
        Ok(SearchOutcome::Index(body)) => HttpResponse::Ok().json(body),
        Ok(SearchOutcome::Local(result)) => HttpResponse::Ok().json(ApiResponse::ok(result)),
        Err(err) => error_response(err, SEARCH_UNAVAILABLE),
    }
}
