//! In-workspace stand-in for the registry's `publicSearch` endpoint.
//!
//! # Design
//! A fixed seed set served through the registry's real response shapes:
//! animal pages as numeric-string-keyed mappings with `foundRows`, org
//! pages nested under `"orgs"`. Envelope DTOs are defined here rather than
//! imported from `rescue-core` — integration tests should catch schema
//! drift between the two crates, not paper over it. Radius filters match
//! every seeded record; the mock carries no geodata.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde::Deserialize;
use serde_json::{json, Map, Value};
use tokio::net::TcpListener;

/// Incoming request envelope, matching the wire contract.
#[derive(Debug, Deserialize)]
pub struct SearchEnvelope {
    pub apikey: String,
    #[serde(rename = "objectType")]
    pub object_type: String,
    #[serde(rename = "objectAction")]
    pub object_action: String,
    pub search: SearchSpec,
}

#[derive(Debug, Deserialize)]
pub struct SearchSpec {
    #[serde(rename = "calcFoundRows", default)]
    pub calc_found_rows: Option<String>,
    #[serde(rename = "resultStart", default)]
    pub result_start: u64,
    #[serde(rename = "resultLimit", default = "default_limit")]
    pub result_limit: u64,
    #[serde(rename = "resultSort", default)]
    pub result_sort: Option<String>,
    #[serde(rename = "resultOrder", default)]
    pub result_order: Option<String>,
    #[serde(default)]
    pub fields: Vec<String>,
    #[serde(default)]
    pub filters: Vec<FilterSpec>,
}

fn default_limit() -> u64 {
    25
}

#[derive(Debug, Deserialize)]
pub struct FilterSpec {
    #[serde(rename = "fieldName")]
    pub field_name: String,
    pub operation: String,
    pub criteria: Value,
}

/// Seeded record tables served by the mock.
pub struct Registry {
    animals: Vec<Value>,
    orgs: Vec<Value>,
}

pub type Db = Arc<Registry>;

impl Registry {
    /// Three available animals across two postal codes, one pending animal
    /// that status filtering must hide, and two organizations.
    pub fn seeded() -> Self {
        let animals = vec![
            json!({
                "animalID": "5",
                "animalOrgID": "77",
                "animalName": "Rex",
                "animalSpecies": "Dog",
                "animalBreed": "Terrier / Mixed",
                "animalThumbnailUrl": "https://cdn.example.org/rex.jpg?ts=1712",
                "animalLocationCitystate": "Chicago, IL",
                "animalLocation": "60601",
                "animalAge": "Adult",
                "animalSex": "Male",
                "fosterEmail": "rex.foster@pawsloop.org",
                "animalWeight": "38",
                "animalColor": "Brindle",
                "animalCoatLength": "Short",
                "animalCoatType": "Smooth",
                "animalStatus": "Available",
                "animalDateAvailable": "2026-05-02",
                "animalAltered": "Yes",
                "animalDescription": "<p>Good boy&nbsp;&nbsp;loves fetch</p><script>track()</script>"
            }),
            json!({
                "animalID": "9",
                "animalOrgID": "77",
                "animalName": "Daisy",
                "animalSpecies": "Cat",
                "animalBreed": "Domestic Short Hair",
                "animalThumbnailUrl": "https://cdn.example.org/daisy.jpg",
                "animalLocationCitystate": "Chicago, IL",
                "animalLocation": "60601",
                "animalAge": "Young",
                "animalSex": "Female",
                "fosterEmail": "",
                "animalWeight": "8",
                "animalColor": "Calico",
                "animalCoatLength": "Short",
                "animalCoatType": "",
                "animalStatus": "Available",
                "animalDateAvailable": "2026-06-14",
                "animalAltered": "No",
                "animalDescription": "Sweet lap cat."
            }),
            json!({
                "animalID": "12",
                "animalOrgID": "81",
                "animalName": "Mozart",
                "animalSpecies": "Dog",
                "animalBreed": "Husky",
                "animalThumbnailUrl": "https://cdn.example.org/mozart.jpg",
                "animalLocationCitystate": "Seattle, WA",
                "animalLocation": "98101",
                "animalAge": "Senior",
                "animalSex": "Male",
                "fosterEmail": "",
                "animalWeight": "52",
                "animalColor": "Gray",
                "animalCoatLength": "Long",
                "animalCoatType": "Double",
                "animalStatus": "Available",
                "animalDateAvailable": "2026-04-20",
                "animalAltered": "true",
                "animalDescription": "Sings along with sirens."
            }),
            json!({
                "animalID": "15",
                "animalOrgID": "77",
                "animalName": "Biscuit",
                "animalSpecies": "Dog",
                "animalBreed": "Beagle",
                "animalLocationCitystate": "Chicago, IL",
                "animalLocation": "60601",
                "animalAge": "Young",
                "animalSex": "Male",
                "animalStatus": "Pending",
                "animalDescription": "Adoption already in progress."
            }),
        ];
        let orgs = vec![
            json!({
                "orgID": "77",
                "orgName": "Paws of the Loop",
                "orgPhone": "(312) 555-0144",
                "orgEmail": "adopt@pawsloop.org",
                "orgCity": "Chicago",
                "orgState": "IL"
            }),
            json!({
                "orgID": "81",
                "orgName": "Rainier Rescue",
                "orgPhone": "(206) 555-0117",
                "orgEmail": "hello@rainierrescue.org",
                "orgCity": "Seattle",
                "orgState": "WA"
            }),
        ];
        Self { animals, orgs }
    }
}

pub fn app() -> Router {
    let db: Db = Arc::new(Registry::seeded());
    Router::new()
        .route("/http/v2.json", post(public_search))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn public_search(
    State(db): State<Db>,
    Json(envelope): Json<SearchEnvelope>,
) -> Result<Json<Value>, StatusCode> {
    if envelope.apikey.trim().is_empty() {
        return Err(StatusCode::UNAUTHORIZED);
    }
    if envelope.object_action != "publicSearch" {
        return Err(StatusCode::BAD_REQUEST);
    }

    let spec = &envelope.search;
    match envelope.object_type.as_str() {
        "animals" => {
            let matches = select(&db.animals, spec);
            let total = matches.len() as u64;
            let mut keyed = Map::new();
            for (i, record) in paginate(matches, spec).into_iter().enumerate() {
                keyed.insert(i.to_string(), record);
            }
            let mut response = json!({ "data": keyed });
            if spec.calc_found_rows.as_deref() == Some("Yes") {
                response["foundRows"] = json!(total);
            }
            Ok(Json(response))
        }
        "orgs" => {
            let matches = select(&db.orgs, spec);
            let page = paginate(matches, spec);
            Ok(Json(json!({ "data": { "orgs": page } })))
        }
        _ => Err(StatusCode::BAD_REQUEST),
    }
}

/// Filter and sort one record table per the request's search spec.
fn select(records: &[Value], spec: &SearchSpec) -> Vec<Value> {
    let mut matches: Vec<Value> = records
        .iter()
        .filter(|record| spec.filters.iter().all(|f| filter_matches(record, f)))
        .cloned()
        .collect();

    if let Some(sort_field) = &spec.result_sort {
        matches.sort_by_key(|record| sort_key(record, sort_field));
        if spec.result_order.as_deref() == Some("desc") {
            matches.reverse();
        }
    }
    matches
}

fn filter_matches(record: &Value, filter: &FilterSpec) -> bool {
    match filter.operation.as_str() {
        "radius" => true,
        "equals" => {
            text_of(record.get(&filter.field_name)) == text_of(Some(&filter.criteria))
        }
        _ => false,
    }
}

/// Numeric when the field parses as a number, lexicographic otherwise.
fn sort_key(record: &Value, field: &str) -> (u64, String) {
    let raw = text_of(record.get(field));
    match raw.parse::<u64>() {
        Ok(n) => (n, String::new()),
        Err(_) => (u64::MAX, raw),
    }
}

/// Scalar as comparable text, so numbers and numeric strings compare alike.
fn text_of(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

fn paginate(matches: Vec<Value>, spec: &SearchSpec) -> Vec<Value> {
    matches
        .into_iter()
        .skip(spec.result_start as usize)
        .take(spec.result_limit as usize)
        .map(|record| project(record, &spec.fields))
        .collect()
}

/// Keep only the requested fields, like the live registry does.
fn project(record: Value, fields: &[String]) -> Value {
    if fields.is_empty() {
        return record;
    }
    match record {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .filter(|(key, _)| fields.iter().any(|f| f == key))
                .collect(),
        ),
        other => other,
    }
}
