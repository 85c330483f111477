//! Shape checks run on request payloads before they reach a service.

use crate::errors::ServiceError;

/// Implemented by inputs that can be checked without touching storage.
pub trait Validate {
    fn validate(&self) -> Result<(), ServiceError>;
}
