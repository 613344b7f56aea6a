//! Typed records for the registry's object kinds.
//!
//! # Design
//! Field names follow the registry's wire names via serde renames, and the
//! structs here are defined independently of the mock registry's seed data
//! so integration tests catch schema drift. Ids deserialize leniently —
//! the live registry stringifies every number while fixtures and some
//! deployments send real JSON numbers. Display helpers reproduce what the
//! original card and detail views derived from raw records, so a rendering
//! layer consumes plain data.

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::RegistryError;
use crate::sanitize::sanitize;

/// What a search needs before a request may be issued: a postal code and a
/// radius. Region cascading (country → state → city) happens upstream; by
/// the time criteria reach this crate only the resolved postal code
/// matters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCriteria {
    pub postal_code: String,
    pub radius: String,
}

impl SearchCriteria {
    pub fn new(postal_code: &str, radius: &str) -> Self {
        Self {
            postal_code: postal_code.trim().to_string(),
            radius: radius.trim().to_string(),
        }
    }

    /// Both fields must be non-blank. Messages match the search form's
    /// user-facing prompts.
    pub fn validate(&self) -> Result<(), RegistryError> {
        match (self.postal_code.is_empty(), self.radius.is_empty()) {
            (true, true) => Err(RegistryError::Validation(
                "Please enter postal code and distance.".to_string(),
            )),
            (true, false) => Err(RegistryError::Validation(
                "Please enter a postal code.".to_string(),
            )),
            (false, true) => Err(RegistryError::Validation(
                "Please select a radius.".to_string(),
            )),
            (false, false) => Ok(()),
        }
    }
}

/// Registry ids arrive as JSON numbers or numeric strings.
fn id_from_any<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Number(n) => n
            .as_u64()
            .ok_or_else(|| DeError::custom("id is not a non-negative integer")),
        Value::String(s) => s.trim().parse().map_err(DeError::custom),
        other => Err(DeError::custom(format!("id has unexpected type: {other}"))),
    }
}

fn opt_id_from_any<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::Number(n) => n
            .as_u64()
            .map(Some)
            .ok_or_else(|| DeError::custom("id is not a non-negative integer")),
        Value::String(s) if s.trim().is_empty() => Ok(None),
        Value::String(s) => s.trim().parse().map(Some).map_err(DeError::custom),
        other => Err(DeError::custom(format!("id has unexpected type: {other}"))),
    }
}

fn strip_query(url: &str) -> &str {
    match url.split_once('?') {
        Some((base, _)) => base,
        None => url,
    }
}

/// One search result, enough to render a card.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnimalSummary {
    #[serde(rename = "animalID", deserialize_with = "id_from_any")]
    pub id: u64,
    #[serde(rename = "animalOrgID", default, deserialize_with = "opt_id_from_any")]
    pub org_id: Option<u64>,
    #[serde(rename = "animalName", default)]
    pub name: Option<String>,
    #[serde(rename = "animalSpecies", default)]
    pub species: Option<String>,
    #[serde(rename = "animalBreed", default)]
    pub breed: Option<String>,
    #[serde(rename = "animalThumbnailUrl", default)]
    pub thumbnail_url: Option<String>,
    #[serde(rename = "animalLocationCitystate", default)]
    pub location: Option<String>,
    #[serde(rename = "animalAge", default)]
    pub age: Option<String>,
    #[serde(rename = "animalSex", default)]
    pub sex: Option<String>,
    #[serde(rename = "fosterEmail", default)]
    pub foster_email: Option<String>,
    #[serde(rename = "animalDescription", default)]
    pub description: Option<String>,
}

impl AnimalSummary {
    /// Thumbnail with the registry's cache-busting query string removed.
    pub fn thumbnail(&self) -> Option<&str> {
        self.thumbnail_url.as_deref().map(strip_query)
    }
}

/// Extended attributes for the detail view. `id` is the identity; at most
/// one detail record exists per lookup.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnimalDetail {
    #[serde(rename = "animalID", deserialize_with = "id_from_any")]
    pub id: u64,
    #[serde(rename = "animalOrgID", default, deserialize_with = "opt_id_from_any")]
    pub org_id: Option<u64>,
    #[serde(rename = "animalName", default)]
    pub name: Option<String>,
    #[serde(rename = "animalSpecies", default)]
    pub species: Option<String>,
    #[serde(rename = "animalBreed", default)]
    pub breed: Option<String>,
    #[serde(rename = "animalThumbnailUrl", default)]
    pub thumbnail_url: Option<String>,
    #[serde(rename = "animalLocationCitystate", default)]
    pub location: Option<String>,
    #[serde(rename = "animalAge", default)]
    pub age: Option<String>,
    #[serde(rename = "animalSex", default)]
    pub sex: Option<String>,
    #[serde(rename = "fosterEmail", default)]
    pub foster_email: Option<String>,
    #[serde(rename = "animalWeight", default)]
    pub weight: Option<String>,
    #[serde(rename = "animalColor", default)]
    pub color: Option<String>,
    #[serde(rename = "animalCoatLength", default)]
    pub coat_length: Option<String>,
    #[serde(rename = "animalCoatType", default)]
    pub coat_type: Option<String>,
    #[serde(rename = "animalStatus", default)]
    pub status: Option<String>,
    #[serde(rename = "animalDateAvailable", default)]
    pub date_available: Option<String>,
    #[serde(rename = "animalAltered", default)]
    pub altered: Option<Value>,
    #[serde(rename = "animalDescription", default)]
    pub description: Option<String>,
}

impl AnimalDetail {
    /// Thumbnail with the registry's cache-busting query string removed.
    pub fn thumbnail(&self) -> Option<&str> {
        self.thumbnail_url.as_deref().map(strip_query)
    }

    /// `Yes`/`No` across the registry's boolean-ish spellings; any other
    /// non-blank answer passes through as-is.
    pub fn altered_label(&self) -> Option<String> {
        match self.altered.as_ref()? {
            Value::Bool(b) => Some(if *b { "Yes" } else { "No" }.to_string()),
            Value::String(s) => {
                let s = s.trim();
                if s.is_empty() {
                    None
                } else if s.eq_ignore_ascii_case("yes") || s.eq_ignore_ascii_case("true") {
                    Some("Yes".to_string())
                } else if s.eq_ignore_ascii_case("no") || s.eq_ignore_ascii_case("false") {
                    Some("No".to_string())
                } else {
                    Some(s.to_string())
                }
            }
            _ => None,
        }
    }

    /// Coat length and type joined for display, when either is present.
    pub fn coat(&self) -> Option<String> {
        let parts: Vec<&str> = [self.coat_length.as_deref(), self.coat_type.as_deref()]
            .into_iter()
            .flatten()
            .filter(|s| !s.is_empty())
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" / "))
        }
    }

    /// Description reduced to safe plain text.
    pub fn description_text(&self) -> String {
        sanitize(self.description.as_deref())
    }
}

/// Sponsoring organization's contact record.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Organization {
    #[serde(rename = "orgID", deserialize_with = "id_from_any")]
    pub id: u64,
    #[serde(rename = "orgName", default)]
    pub name: Option<String>,
    #[serde(rename = "orgPhone", default)]
    pub phone: Option<String>,
    #[serde(rename = "orgEmail", default)]
    pub email: Option<String>,
    #[serde(rename = "orgCity", default)]
    pub city: Option<String>,
    #[serde(rename = "orgState", default)]
    pub state: Option<String>,
}

/// A detail record paired with its sponsoring organization, when the org
/// lookup succeeded. The organization half may be absent: org lookups are
/// allowed to fail without taking the detail view down.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimalProfile {
    pub animal: AnimalDetail,
    pub organization: Option<Organization>,
}

impl AnimalProfile {
    /// Foster email first, then the organization's.
    pub fn contact_email(&self) -> Option<&str> {
        nonblank(self.animal.foster_email.as_deref())
            .or_else(|| nonblank(self.organization.as_ref().and_then(|o| o.email.as_deref())))
    }
}

fn nonblank(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}
