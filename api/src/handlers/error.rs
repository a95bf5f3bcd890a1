use crate::dto::{ErrorResponse, ErrorResponseExt};
use actix_web::{error::InternalError, error::JsonPayloadError, http::StatusCode, HttpRequest, HttpResponse};
use ag_core::errors::{DomainError, TokenError};
use ag_shared::error_codes;
use validator::ValidationErrors;

/// Message shared by every 401; callers cannot tell failures apart
pub const UNAUTHORIZED_MESSAGE: &str = "Authentication required";

/// Generic 401 body for any authentication or token failure
pub fn unauthorized_response() -> HttpResponse {
    ErrorResponse::new(error_codes::UNAUTHORIZED, UNAUTHORIZED_MESSAGE)
        .to_response(StatusCode::UNAUTHORIZED)
}

pub fn not_found_response() -> HttpResponse {
    ErrorResponse::new(error_codes::NOT_FOUND, "Resource not found")
        .to_response(StatusCode::NOT_FOUND)
}

fn internal_error_response() -> HttpResponse {
    ErrorResponse::new(error_codes::INTERNAL_ERROR, "An internal error occurred")
        .to_response(StatusCode::INTERNAL_SERVER_ERROR)
}

/// Handle domain errors and convert them to appropriate HTTP responses
///
/// Authentication and token rejections are logged with their reason and
/// answered with the same generic 401.
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    match error {
        DomainError::Auth(auth_error) => {
            log::info!("Authentication rejected: {}", auth_error);
            unauthorized_response()
        }
        DomainError::Token(TokenError::TokenGenerationFailed) => {
            log::error!("Token generation failed");
            internal_error_response()
        }
        DomainError::Token(token_error) => {
            log::debug!("Token rejected: {}", token_error.kind());
            unauthorized_response()
        }
        DomainError::Validation { message } => {
            ErrorResponse::new(error_codes::VALIDATION_ERROR, message)
                .to_response(StatusCode::BAD_REQUEST)
        }
        DomainError::Configuration { message } | DomainError::Internal { message } => {
            log::error!("Domain Error: {}", message);
            internal_error_response()
        }
    }
}

/// Converts request validation failures into a 400 with per-field details
pub fn handle_validation_errors(errors: ValidationErrors) -> HttpResponse {
    let mut response = ErrorResponse::new(error_codes::VALIDATION_ERROR, "Invalid request body");
    for (field, field_errors) in errors.field_errors() {
        let codes: Vec<String> = field_errors.iter().map(|e| e.code.to_string()).collect();
        response = response.add_detail(field.to_string(), codes);
    }
    response.to_response(StatusCode::BAD_REQUEST)
}

/// `JsonConfig` error handler: unreadable bodies become a 400 in the standard shape
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    log::debug!("Rejected JSON payload: {}", err);
    let response = ErrorResponse::new(error_codes::VALIDATION_ERROR, "Malformed JSON body")
        .to_response(StatusCode::BAD_REQUEST);
    InternalError::from_response(err, response).into()
}
