//! Shared fixtures for the integration tests.
#![allow(dead_code)]

use std::time::Duration;

use actix_web::web;
use serde_json::{Value, json};
use storefront_catalog::models::config::ServerConfig;
use storefront_catalog::repository::BackendRepository;

/// The three-product catalog used across the search scenarios.
pub fn catalog() -> Vec<Value> {
    vec![
        json!({
            "_id": "p-red-vest",
            "name": "Red Vest",
            "description": "Boxy knit vest",
            "category": "VESTS",
            "price": 20.0,
            "stock": 0,
            "createdAt": "2024-03-01T10:00:00Z",
            "slug": "red-vest"
        }),
        json!({
            "_id": "p-blue-vest",
            "name": "Blue Vest",
            "description": "Cropped denim vest",
            "category": "VESTS",
            "price": 30.0,
            "stock": 5,
            "createdAt": "2024-04-01T10:00:00Z",
            "slug": "blue-vest"
        }),
        json!({
            "_id": "p-red-shirt",
            "name": "Red Shirt",
            "description": "Cotton tee",
            "category": "SHIRTS",
            "price": 10.0,
            "stock": 2,
            "createdAt": "2024-02-01T10:00:00Z",
            "slug": "red-shirt"
        }),
    ]
}

/// Backend envelope for a successful payload.
pub fn ok(data: Value) -> Value {
    json!({ "success": true, "data": data })
}

pub fn server_config(backend_url: &str) -> ServerConfig {
    ServerConfig {
        address: "127.0.0.1".to_string(),
        port: 0,
        backend_url: backend_url.to_string(),
        request_timeout_secs: 2,
        detail_concurrency: 2,
    }
}

/// Application data pointing at `backend_url`.
pub fn app_data(
    backend_url: &str,
) -> (web::Data<BackendRepository>, web::Data<ServerConfig>) {
    let config = server_config(backend_url);
    let repo = BackendRepository::new(
        &config.backend_url,
        Duration::from_secs(config.request_timeout_secs),
    )
    .expect("valid backend url");
    (web::Data::new(repo), web::Data::new(config))
}
