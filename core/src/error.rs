//! Error types for the registry client.
//!
//! # Design
//! One variant per failure class so callers can tell a dead network from a
//! rejected request from a garbled response. `Remote` keeps the raw status
//! code and body text the registry actually sent. "No results" is not an
//! error anywhere in this crate — it is an empty record set.

use std::fmt;

/// Errors returned by `RegistryClient` operations.
#[derive(Debug)]
pub enum RegistryError {
    /// The request never completed: DNS, connect, timeout, reset.
    Transport(String),

    /// The registry answered with a non-2xx status.
    Remote { status: u16, body: String },

    /// The response body was not valid JSON, or a record did not match the
    /// expected field layout.
    Parse(String),

    /// The request payload could not be serialized to JSON.
    Serialize(String),

    /// Search criteria were missing or blank; no request was issued.
    Validation(String),
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::Transport(msg) => write!(f, "transport failure: {msg}"),
            RegistryError::Remote { status, body } => {
                write!(f, "HTTP {status}: {body}")
            }
            RegistryError::Parse(msg) => write!(f, "parse failed: {msg}"),
            RegistryError::Serialize(msg) => write!(f, "serialization failed: {msg}"),
            RegistryError::Validation(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for RegistryError {}
