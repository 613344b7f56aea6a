//! Orchestration: build, send, extract, deserialize.
//!
//! # Design
//! `RegistryClient` owns the injected config and a transport; each
//! operation is one build → send → extract pass over the shared envelope.
//! Record deserialization failures surface as `Parse`, the same class as a
//! garbled body — the caller cannot tell them apart and should not need
//! to. `SearchGeneration` carries the stale-response guard: a new search
//! bumps the counter, and a late response tagged with an older value is
//! dropped instead of rendered.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::RegistryConfig;
use crate::error::RegistryError;
use crate::extract::ResultPage;
use crate::payload::{self, ObjectKind};
use crate::transport::Transport;
use crate::types::{AnimalDetail, AnimalProfile, AnimalSummary, Organization, SearchCriteria};

/// Client for one registry deployment.
#[derive(Clone)]
pub struct RegistryClient {
    config: RegistryConfig,
    transport: Transport,
}

impl RegistryClient {
    pub fn new(config: RegistryConfig) -> Self {
        let transport = Transport::new(&config.endpoint);
        Self { config, transport }
    }

    /// Available animals around the criteria's postal code. An empty list
    /// is the "no results" terminal case, never an error.
    pub fn search(&self, criteria: &SearchCriteria) -> Result<Vec<AnimalSummary>, RegistryError> {
        criteria.validate()?;
        let payload =
            payload::animal_search(&self.config, &criteria.postal_code, &criteria.radius);
        let response = self.transport.send(&payload)?;
        let page = ResultPage::from_response(&response, ObjectKind::Animals);
        page.into_records().into_iter().map(decode).collect()
    }

    /// Extended attributes for one animal; `None` when the registry does
    /// not know the id.
    pub fn animal_detail(&self, animal_id: u64) -> Result<Option<AnimalDetail>, RegistryError> {
        let payload = payload::animal_detail(&self.config, animal_id);
        let response = self.transport.send(&payload)?;
        let page = ResultPage::from_response(&response, ObjectKind::Animals);
        first(page.into_records())
    }

    /// Contact record for one organization.
    pub fn organization(&self, org_id: u64) -> Result<Option<Organization>, RegistryError> {
        let payload = payload::org_lookup(&self.config, org_id);
        let response = self.transport.send(&payload)?;
        let page = ResultPage::from_response(&response, ObjectKind::Orgs);
        first(page.into_records())
    }

    /// Detail plus its sponsoring organization. The org lookup failing —
    /// or the record naming no org — degrades to a profile without one; it
    /// never takes an already-fetched detail down with it.
    pub fn animal_profile(&self, animal_id: u64) -> Result<Option<AnimalProfile>, RegistryError> {
        let Some(animal) = self.animal_detail(animal_id)? else {
            return Ok(None);
        };
        let organization = match animal.org_id {
            Some(org_id) => match self.organization(org_id) {
                Ok(org) => org,
                Err(err) => {
                    log::warn!("org lookup {org_id} failed, rendering without contact: {err}");
                    None
                }
            },
            None => None,
        };
        Ok(Some(AnimalProfile {
            animal,
            organization,
        }))
    }
}

fn decode<T: DeserializeOwned>(record: Value) -> Result<T, RegistryError> {
    serde_json::from_value(record).map_err(|e| RegistryError::Parse(e.to_string()))
}

fn first<T: DeserializeOwned>(records: Vec<Value>) -> Result<Option<T>, RegistryError> {
    match records.into_iter().next() {
        Some(record) => decode(record).map(Some),
        None => Ok(None),
    }
}

/// Stale-response guard for superseded searches. Each new search takes a
/// tag from `begin`; a response is rendered only while its tag
/// `is_current`. Nothing is cancelled mid-flight — late responses are
/// simply dropped.
#[derive(Debug, Default)]
pub struct SearchGeneration {
    current: u64,
}

impl SearchGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new search; everything tagged earlier becomes stale.
    pub fn begin(&mut self) -> u64 {
        self.current += 1;
        self.current
    }

    pub fn is_current(&self, tag: u64) -> bool {
        tag == self.current
    }
}
