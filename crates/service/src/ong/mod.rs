//! Organizations ("ONGs") publishing activities.

pub mod domain;
pub mod repository;
pub mod service;

pub use service::OngService;
