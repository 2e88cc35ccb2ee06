//! Error type shared by `CardStore` implementations.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The backend rejected or failed the request: constraint violation,
    /// network failure, permission check. The message is backend-specific.
    #[error("Backend error: {message}")]
    Backend { message: String },
    #[error("Card not found: '{id}'")]
    NotFound { id: String },
}

impl StoreError {
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend {
            message: message.into(),
        }
    }
}
