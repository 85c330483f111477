//! Users acting on activities, resolved from the email in their bearer token.

pub mod repository;
pub mod service;

pub use service::UserService;
