//! Single-shot JSON POST against the registry endpoint.
//!
//! # Design
//! One outbound call per `send`; no retries, no caching, no deduplication
//! of concurrent identical calls. The agent is built with
//! `http_status_as_error(false)` so non-2xx responses come back as data and
//! status interpretation happens here, in one place. `send` returns the
//! parsed body untouched — shape normalization belongs to `extract`, not
//! the wire layer.

use serde::Serialize;
use serde_json::Value;

use crate::error::RegistryError;

/// Executes one request/response cycle per call.
#[derive(Clone)]
pub struct Transport {
    endpoint: String,
    agent: ureq::Agent,
}

impl Transport {
    /// Transport bound to `endpoint`.
    pub fn new(endpoint: &str) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self {
            endpoint: endpoint.to_string(),
            agent,
        }
    }

    /// POST `payload` as JSON and return the parsed response body.
    pub fn send<T: Serialize>(&self, payload: &T) -> Result<Value, RegistryError> {
        let body = serde_json::to_string(payload)
            .map_err(|e| RegistryError::Serialize(e.to_string()))?;

        log::debug!("POST {}", self.endpoint);
        let mut response = self
            .agent
            .post(&self.endpoint)
            .content_type("application/json")
            .send(body.as_bytes())
            .map_err(|e| RegistryError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .body_mut()
            .read_to_string()
            .map_err(|e| RegistryError::Transport(e.to_string()))?;

        if !(200..300).contains(&status) {
            return Err(RegistryError::Remote { status, body: text });
        }

        serde_json::from_str(&text).map_err(|e| RegistryError::Parse(e.to_string()))
    }
}
