//! Domain entities representing core business objects.

pub mod principal;
pub mod token;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use principal::Principal;
pub use token::{ClaimSet, IssuedClaims, RESERVED_CLAIMS};
