//! Activities: creation, partial updates, assignment to a user and completion.

pub mod domain;
pub mod repository;
pub mod service;

pub use service::ActivityService;
