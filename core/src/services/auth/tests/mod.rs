//! Tests for authentication service

mod authenticator_tests;
mod service_tests;
