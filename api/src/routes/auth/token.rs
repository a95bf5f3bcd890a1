use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::auth::{TokenRequest, TokenResponse};
use crate::handlers::{handle_domain_error, handle_validation_errors};

use super::AppState;
use ag_core::services::auth::Authenticator;

/// Handler for POST /token
///
/// Authenticates the principal named in the body and returns a signed
/// bearer token for it.
///
/// # Request Body
///
/// ```json
/// { "subject": "Max Den", "role": "Customer" }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// { "access_token": "eyJ...", "token_type": "bearer" }
/// ```
///
/// ## Errors
/// - 400 Bad Request: empty or oversized `subject`/`role`
/// - 401 Unauthorized: unknown principal or role mismatch
pub async fn issue_token<A>(
    state: web::Data<AppState<A>>,
    request: web::Json<TokenRequest>,
) -> HttpResponse
where
    A: Authenticator + 'static,
{
    let request = request.into_inner();
    if let Err(errors) = request.validate() {
        log::debug!("Rejected token request: {}", errors);
        return handle_validation_errors(errors);
    }

    let credentials = request.into_credentials();
    match state.auth_service.login(&credentials).await {
        Ok(token) => {
            log::info!("Issued access token");
            HttpResponse::Ok().json(TokenResponse::from(token))
        }
        Err(e) => handle_domain_error(e),
    }
}
