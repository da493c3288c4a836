//! Error types for the SimplyNu admin core
//!
//! All errors use thiserror for structured error handling.
//! These errors can be serialized to the frontend.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Quote not found: {0}")]
    QuoteNotFound(String),

    #[error("Client not found: {0}")]
    ClientNotFound(String),

    #[error("Client already onboarded: {0}")]
    ClientAlreadyOnboarded(String),

    #[error("{0}")]
    Generic(String),
}

impl serde::Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
