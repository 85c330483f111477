use thiserror::Error;

/// Failures while reading a bearer token
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("invalid token: {0}")]
    Invalid(String),
    #[error("token has no email claim")]
    MissingEmail,
    #[error("token configuration error: {0}")]
    Config(String),
}

impl TokenError {
    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            TokenError::Invalid(_) => 1101,
            TokenError::MissingEmail => 1102,
            TokenError::Config(_) => 1200,
        }
    }
}
