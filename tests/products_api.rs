use actix_web::http::StatusCode;
use actix_web::{App, test};
use httpmock::prelude::*;
use serde_json::{Value, json};
use storefront_catalog::routes::configure;

mod common;

#[actix_web::test]
async fn test_health() {
    let app = test::init_service(App::new().configure(configure)).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "success": true }));
}

#[actix_web::test]
async fn test_list_products_fills_missing_counts() {
    let backend = MockServer::start_async().await;
    let listing = backend.mock(|when, then| {
        when.method(GET)
            .path("/api/products")
            .query_param("sort", "newest")
            .query_param("page", "1")
            .query_param("limit", "12")
            .query_param("category", "VESTS");
        then.status(200).json_body(common::ok(json!({
            "items": common::catalog()[..2].to_vec()
        })));
    });

    let (repo, config) = common::app_data(&backend.base_url());
    let app = test::init_service(
        App::new()
            .app_data(repo)
            .app_data(config)
            .configure(configure),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/products?category=VESTS")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["items"].as_array().map(Vec::len), Some(2));
    assert_eq!(body["data"]["total"], 2);
    assert_eq!(body["data"]["page"], 1);
    assert_eq!(body["data"]["limit"], 12);
    assert_eq!(body["data"]["totalPages"], 1);
    listing.assert_hits(1);
}

#[actix_web::test]
async fn test_list_products_reports_unavailable_backend() {
    let backend = MockServer::start_async().await;
    backend.mock(|when, then| {
        when.method(GET).path("/api/products");
        then.status(502);
    });

    let (repo, config) = common::app_data(&backend.base_url());
    let app = test::init_service(
        App::new()
            .app_data(repo)
            .app_data(config)
            .configure(configure),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/products").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Product service temporarily unavailable");
}

#[actix_web::test]
async fn test_show_product() {
    let backend = MockServer::start_async().await;
    let detail = backend.mock(|when, then| {
        when.method(GET).path("/api/products/p-blue-vest");
        then.status(200)
            .json_body(common::ok(json!({ "product": common::catalog()[1].clone() })));
    });

    let (repo, config) = common::app_data(&backend.base_url());
    let app = test::init_service(
        App::new()
            .app_data(repo)
            .app_data(config)
            .configure(configure),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/products/p-blue-vest")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["product"]["_id"], "p-blue-vest");
    assert_eq!(body["data"]["product"]["name"], "Blue Vest");
    detail.assert_hits(1);
}

#[actix_web::test]
async fn test_show_missing_product_is_not_found() {
    let backend = MockServer::start_async().await;
    backend.mock(|when, then| {
        when.method(GET).path("/api/products/nope");
        then.status(404)
            .json_body(json!({ "success": false, "message": "Product not found" }));
    });

    let (repo, config) = common::app_data(&backend.base_url());
    let app = test::init_service(
        App::new()
            .app_data(repo)
            .app_data(config)
            .configure(configure),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/products/nope").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Product not found");
}

#[actix_web::test]
async fn test_lookup_products_keeps_order_and_drops_failures() {
    let backend = MockServer::start_async().await;
    let catalog = common::catalog();
    let red_vest = catalog[0].clone();
    let red_shirt = catalog[2].clone();
    backend.mock(|when, then| {
        when.method(GET).path("/api/products/p-red-vest");
        then.status(200)
            .json_body(common::ok(json!({ "product": red_vest })));
    });
    backend.mock(|when, then| {
        when.method(GET).path("/api/products/p-red-shirt");
        then.status(200)
            .json_body(common::ok(json!({ "product": red_shirt })));
    });
    backend.mock(|when, then| {
        when.method(GET).path("/api/products/p-gone");
        then.status(404);
    });
    backend.mock(|when, then| {
        when.method(GET).path("/api/products/p-broken");
        then.status(500);
    });

    let (repo, config) = common::app_data(&backend.base_url());
    let app = test::init_service(
        App::new()
            .app_data(repo)
            .app_data(config)
            .configure(configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/products/lookup")
        .set_json(json!({
            "ids": ["p-red-shirt", "p-gone", "p-broken", "p-red-vest"]
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    let ids: Vec<&str> = body["data"]["items"]
        .as_array()
        .expect("items array")
        .iter()
        .map(|item| item["_id"].as_str().expect("id"))
        .collect();
    assert_eq!(ids, vec!["p-red-shirt", "p-red-vest"]);
}

#[actix_web::test]
async fn test_lookup_products_rejects_empty_batch() {
    let backend = MockServer::start_async().await;
    let (repo, config) = common::app_data(&backend.base_url());
    let app = test::init_service(
        App::new()
            .app_data(repo)
            .app_data(config)
            .configure(configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/products/lookup")
        .set_json(json!({ "ids": [] }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
}
