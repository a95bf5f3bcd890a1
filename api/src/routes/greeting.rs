//! Public greeting and health endpoints

use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;
use serde_json::json;

use crate::dto::MessageResponse;

/// Handler for GET /
pub async fn root() -> impl Responder {
    HttpResponse::Ok().json(MessageResponse::new("Hello World"))
}

/// Handler for GET /hello/{name}
pub async fn say_hello(name: web::Path<String>) -> impl Responder {
    HttpResponse::Ok().json(MessageResponse::new(format!("Hello {}", name.into_inner())))
}

/// Health check endpoint
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "authgate",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": Utc::now().to_rfc3339(),
    }))
}
