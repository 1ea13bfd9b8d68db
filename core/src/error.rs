//! Error types for the hero API client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because a missing hero is the most
//! common non-2xx answer. All other non-2xx responses land in `Http` with the
//! raw status code and body. `HeroService` never returns these; it logs them
//! and substitutes a fallback.

use thiserror::Error;

/// Errors produced by `HeroClient` and `Transport` implementations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// The request never produced a response (connection refused, DNS, ...).
    #[error("transport failed: {0}")]
    Transport(String),
}
