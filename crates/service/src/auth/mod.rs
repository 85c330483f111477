//! Caller identity from bearer tokens.
//!
//! Tokens are issued elsewhere; this module only reads the `email` claim.

pub mod errors;
pub mod token;

pub use errors::TokenError;
pub use token::{TokenConfig, TokenDecoder};
