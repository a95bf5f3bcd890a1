use actix_web::{HttpResponse, Responder};

use crate::middleware::AuthContext;

/// Handler for GET /me
///
/// Only reachable through `JwtAuth`; returns the verified claims.
pub async fn me(auth: AuthContext) -> impl Responder {
    log::debug!("Serving claims for {}", auth.subject());
    HttpResponse::Ok().json(auth.claims)
}
