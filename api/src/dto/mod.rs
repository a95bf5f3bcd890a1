pub mod auth;
pub mod error;

pub use auth::{MessageResponse, TokenRequest, TokenResponse};
pub use error::{ErrorResponse, ErrorResponseExt};
