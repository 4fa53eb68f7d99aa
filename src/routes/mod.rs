//! JSON routes consumed by the storefront pages.

use actix_web::{HttpResponse, Responder, get, web};
use serde_json::json;

use crate::dto::api::ApiResponse;
use crate::services::ServiceError;

pub mod products;
pub mod search;

/// Registers every catalog route on `cfg`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health).service(
        web::scope("/api")
            .service(search::search_products)
            .service(products::list_products)
            .service(products::lookup_products)
            .service(products::show_product),
    );
}

#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(json!({ "success": true }))
}

/// Maps a service error to a `{ success: false, message }` response.
///
/// Upstream failures are reported with `unavailable` only; their cause stays
/// in the logs.
pub(crate) fn error_response(err: ServiceError, unavailable: &str) -> HttpResponse {
    match err {
        ServiceError::InvalidRequest(message) => {
            HttpResponse::BadRequest().json(ApiResponse::<()>::error(message))
        }
        ServiceError::NotFound => {
            HttpResponse::NotFound().json(ApiResponse::<()>::error("Product not found"))
        }
        ServiceError::UpstreamUnavailable => {
            HttpResponse::InternalServerError().json(ApiResponse::<()>::error(unavailable))
        }
    }
}
