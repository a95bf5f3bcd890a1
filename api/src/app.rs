//! Application factory
//!
//! Builds the Actix-web application around shared, already-initialized
//! services. The binary adds request logging on top.

use std::sync::Arc;

use actix_web::{
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    web, App, HttpResponse,
};

use crate::handlers::{json_error_handler, not_found_response};
use crate::middleware::JwtAuth;
use crate::routes::auth::{me::me, token::issue_token, AppState};
use crate::routes::greeting::{health_check, root, say_hello};

use ag_core::services::auth::Authenticator;

/// Create and configure the application with all dependencies
pub fn create_app<A>(
    app_state: web::Data<AppState<A>>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    A: Authenticator + 'static,
{
    let token_service = Arc::clone(app_state.auth_service.token_service());

    App::new()
        .app_data(app_state)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        // Public routes
        .route("/", web::get().to(root))
        .route("/hello/{name}", web::get().to(say_hello))
        .route("/health", web::get().to(health_check))
        .route("/token", web::post().to(issue_token::<A>))
        // Bearer-protected routes
        .service(
            web::resource("/me")
                .route(web::get().to(me))
                .wrap(JwtAuth::new(token_service)),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

async fn not_found() -> HttpResponse {
    not_found_response()
}
