//! Token service module for JWT management
//!
//! This module handles all token-related operations:
//! - Access token issuance with a computed expiry
//! - Signature and expiry verification
//!
//! The service is stateless: nothing about issued tokens is stored, so there
//! is no revocation or refresh.

mod config;
mod service;


pub use config::TokenServiceConfig;
pub use service::TokenService;
