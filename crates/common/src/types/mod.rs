use serde::{Deserialize, Serialize};

/// Message used when a failure carries no usable description.
pub const UNMAPPED_ERROR_MESSAGE: &str = "Erro não mapeado";

#[derive(Serialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// Body of every failed API response: `{ "erro": true, "message": "..." }`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ErrorEnvelope {
    pub erro: bool,
    pub message: String,
}

impl ErrorEnvelope {
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            return Self::unmapped();
        }
        Self { erro: true, message }
    }

    pub fn unmapped() -> Self {
        Self { erro: true, message: UNMAPPED_ERROR_MESSAGE.to_string() }
    }
}
