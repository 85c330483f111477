//! Types and helpers shared by every crate of the workspace.

pub mod types;
pub mod utils;
