use actix_web::{HttpResponse, Responder, get, post, web};
use validator::Validate;

use crate::domain::search::BrowseRequest;
use crate::dto::api::{ApiResponse, CatalogPage, ProductDetail};
use crate::forms::products::{BrowseQueryForm, ProductLookupForm};
use crate::models::config::ServerConfig;
use crate::repository::BackendRepository;
use crate::routes::error_response;
use crate::services::{ServiceError, products as products_service};

const PRODUCTS_UNAVAILABLE: &str = "Product service temporarily unavailable";

#[get("/products")]
/// One page of the catalog for the product listing pages.
pub async fn list_products(
    params: web::Query<BrowseQueryForm>,
    repo: web::Data<BackendRepository>,
) -> impl Responder {
    let request = BrowseRequest::from(params.into_inner());

    match products_service::browse(repo.get_ref(), request).await {
        Ok(result) => HttpResponse::Ok().json(ApiResponse::ok(result)),
        Err(err) => error_response(err, PRODUCTS_UNAVAILABLE),
    }
}

#[get("/products/{id}")]
pub async fn show_product(
    id: web::Path<String>,
    repo: web::Data<BackendRepository>,
) -> impl Responder {
    match products_service::get_product(repo.get_ref(), &id).await {
        Ok(product) => HttpResponse::Ok().json(ApiResponse::ok(ProductDetail {
            product: Some(product),
        })),
        Err(err) => error_response(err, PRODUCTS_UNAVAILABLE),
    }
}

#[post("/products/lookup")]
/// Resolve a list of product ids, skipping the ones that cannot be loaded.
pub async fn lookup_products(
    form: web::Json<ProductLookupForm>,
    repo: web::Data<BackendRepository>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    let form = form.into_inner();
    if let Err(err) = form.validate() {
        log::info!("Rejected product lookup: {err}");
        return error_response(
            ServiceError::InvalidRequest(format!("Invalid parameters: {err}")),
            PRODUCTS_UNAVAILABLE,
        );
    }

    let items = products_service::get_products(
        repo.get_ref(),
        &form.ids,
        server_config.detail_concurrency,
    )
    .await;

    HttpResponse::Ok().json(ApiResponse::ok(CatalogPage { items: Some(items) }))
}
