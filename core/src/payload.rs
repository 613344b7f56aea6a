//! Request payloads for the registry's `publicSearch` API.
//!
//! # Design
//! All three operations share one envelope shape — a named action, a field
//! list and a filter list — so the transport never knows which operation it
//! carries. Builders are pure: no I/O, no validation. The caller checks its
//! criteria before building; a payload built from blank input is the
//! caller's bug, not ours to detect.

use serde::Serialize;

use crate::config::RegistryConfig;

/// Fields requested for summary cards.
pub const SUMMARY_FIELDS: [&str; 10] = [
    "animalID",
    "animalOrgID",
    "animalName",
    "animalSpecies",
    "animalBreed",
    "animalThumbnailUrl",
    "animalLocationCitystate",
    "fosterEmail",
    "animalAge",
    "animalSex",
];

/// Fields requested for the detail view.
pub const DETAIL_FIELDS: [&str; 18] = [
    "animalID",
    "animalOrgID",
    "animalName",
    "animalSpecies",
    "animalBreed",
    "animalThumbnailUrl",
    "animalLocationCitystate",
    "fosterEmail",
    "animalAge",
    "animalSex",
    "animalWeight",
    "animalColor",
    "animalCoatLength",
    "animalCoatType",
    "animalStatus",
    "animalDateAvailable",
    "animalDescription",
    "animalAltered",
];

/// Fields requested for an organization lookup.
pub const ORG_FIELDS: [&str; 6] = [
    "orgID", "orgName", "orgPhone", "orgEmail", "orgCity", "orgState",
];

const PUBLIC_SEARCH: &str = "publicSearch";

/// Which registry object table a request addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectKind {
    Animals,
    Orgs,
}

impl ObjectKind {
    /// Key the registry uses when it nests a record list inside `data`.
    pub fn nested_key(self) -> &'static str {
        match self {
            ObjectKind::Animals => "animals",
            ObjectKind::Orgs => "orgs",
        }
    }
}

/// Comparison operators accepted by the filter list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterOp {
    Equals,
    Radius,
}

/// One comparison in the envelope's filter list.
#[derive(Debug, Clone, Serialize)]
pub struct Filter {
    #[serde(rename = "fieldName")]
    pub field_name: &'static str,
    pub operation: FilterOp,
    pub criteria: String,
}

/// The `search` section of the envelope.
#[derive(Debug, Clone, Serialize)]
pub struct SearchSpec {
    #[serde(rename = "calcFoundRows", skip_serializing_if = "Option::is_none")]
    pub calc_found_rows: Option<&'static str>,
    #[serde(rename = "resultStart")]
    pub result_start: u32,
    #[serde(rename = "resultLimit")]
    pub result_limit: u32,
    #[serde(rename = "resultSort", skip_serializing_if = "Option::is_none")]
    pub result_sort: Option<&'static str>,
    #[serde(rename = "resultOrder", skip_serializing_if = "Option::is_none")]
    pub result_order: Option<&'static str>,
    pub fields: Vec<&'static str>,
    pub filters: Vec<Filter>,
}

/// Complete request body for one `publicSearch` call.
#[derive(Debug, Clone, Serialize)]
pub struct SearchRequest {
    pub apikey: String,
    #[serde(rename = "objectType")]
    pub object_type: ObjectKind,
    #[serde(rename = "objectAction")]
    pub object_action: &'static str,
    pub search: SearchSpec,
}

fn envelope(cfg: &RegistryConfig, object_type: ObjectKind, search: SearchSpec) -> SearchRequest {
    SearchRequest {
        apikey: cfg.api_key.clone(),
        object_type,
        object_action: PUBLIC_SEARCH,
        search,
    }
}

/// Available animals within `radius` of `postal_code`: one summary page,
/// sorted by id ascending so card order is stable across refreshes.
pub fn animal_search(cfg: &RegistryConfig, postal_code: &str, radius: &str) -> SearchRequest {
    envelope(
        cfg,
        ObjectKind::Animals,
        SearchSpec {
            calc_found_rows: Some("Yes"),
            result_start: 0,
            result_limit: cfg.page_size,
            result_sort: Some("animalID"),
            result_order: None,
            fields: SUMMARY_FIELDS.to_vec(),
            filters: vec![
                Filter {
                    field_name: "animalStatus",
                    operation: FilterOp::Equals,
                    criteria: "Available".to_string(),
                },
                Filter {
                    field_name: "animalLocationDistance",
                    operation: FilterOp::Radius,
                    criteria: radius.to_string(),
                },
                Filter {
                    field_name: "animalLocation",
                    operation: FilterOp::Equals,
                    criteria: postal_code.to_string(),
                },
            ],
        },
    )
}

/// Full field set for exactly one animal.
pub fn animal_detail(cfg: &RegistryConfig, animal_id: u64) -> SearchRequest {
    envelope(
        cfg,
        ObjectKind::Animals,
        SearchSpec {
            calc_found_rows: None,
            result_start: 0,
            result_limit: 1,
            result_sort: None,
            result_order: None,
            fields: DETAIL_FIELDS.to_vec(),
            filters: vec![Filter {
                field_name: "animalID",
                operation: FilterOp::Equals,
                criteria: animal_id.to_string(),
            }],
        },
    )
}

/// Contact record for exactly one organization.
pub fn org_lookup(cfg: &RegistryConfig, org_id: u64) -> SearchRequest {
    envelope(
        cfg,
        ObjectKind::Orgs,
        SearchSpec {
            calc_found_rows: None,
            result_start: 0,
            result_limit: 1,
            result_sort: Some("orgID"),
            result_order: Some("asc"),
            fields: ORG_FIELDS.to_vec(),
            filters: vec![Filter {
                field_name: "orgID",
                operation: FilterOp::Equals,
                criteria: org_id.to_string(),
            }],
        },
    )
}
