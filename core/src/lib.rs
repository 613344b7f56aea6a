//! Client core for a pet-adoption registry's JSON search API.
//!
//! # Overview
//! Everything the registry's `publicSearch` endpoint needs and nothing a
//! rendering layer does: `payload` builds the three request envelopes,
//! `transport` performs exactly one POST per call, `extract` normalizes the
//! registry's response shapes into ordered records, `sanitize` turns
//! HTML-bearing free text into plain text, and `types` gives the records
//! names. `RegistryClient` wires the pipeline together.
//!
//! # Design
//! - Configuration is an injected value (`RegistryConfig`), so tests run
//!   against the in-workspace mock registry instead of the live endpoint.
//! - Response shape is resolved exactly once, in `extract`; no other
//!   module branches on it.
//! - Errors carry what the wire said (`RegistryError::Remote` keeps the
//!   status and body); "no results" is empty data, never an error.

pub mod client;
pub mod config;
pub mod error;
pub mod extract;
pub mod payload;
pub mod sanitize;
pub mod transport;
pub mod types;

pub use client::{RegistryClient, SearchGeneration};
pub use config::RegistryConfig;
pub use error::RegistryError;
pub use extract::ResultPage;
pub use payload::{ObjectKind, SearchRequest};
pub use sanitize::{sanitize, split_list_field};
pub use transport::Transport;
pub use types::{AnimalDetail, AnimalProfile, AnimalSummary, Organization, SearchCriteria};
