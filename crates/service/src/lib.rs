//! Service layer for ONG activities on top of `models`.
//! - Domain inputs as received over the wire (camelCase JSON).
//! - Repository traits with SeaORM and in-memory implementations.
//! - Services holding the assignment/completion rules.
//! - Bearer token decoding for caller identity.

pub mod errors;
pub mod validation;
pub mod auth;
pub mod activity;
pub mod ong;
pub mod user;
#[cfg(test)]
pub mod test_support;
