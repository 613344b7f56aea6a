//! Normalizes the registry's response shapes into an ordered record list.
//!
//! # Design
//! The registry returns its result set three ways: a mapping keyed by small
//! numeric-looking strings (the common case), a genuine array, or a list
//! nested under the object type's name. The shape is resolved exactly once,
//! here; every other module sees a plain ordered `Vec`. A reported
//! `foundRows` of zero means "no results" even when `data` is populated.

use serde_json::{Map, Value};

use crate::payload::ObjectKind;

/// One page of records plus the registry's reported total match count.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultPage {
    records: Vec<Value>,
    found_rows: Option<u64>,
}

/// The shapes `data` arrives in, resolved before any record is read.
enum DataShape<'a> {
    Rows(&'a [Value]),
    Keyed(&'a Map<String, Value>),
    Absent,
}

fn shape_of(data: Option<&Value>) -> DataShape<'_> {
    match data {
        Some(Value::Array(rows)) => DataShape::Rows(rows),
        Some(Value::Object(map)) => DataShape::Keyed(map),
        _ => DataShape::Absent,
    }
}

impl ResultPage {
    /// Resolve `response.data` into ordered records. `kind` names the key
    /// used when the registry nests the list under the object type.
    pub fn from_response(response: &Value, kind: ObjectKind) -> Self {
        let found_rows = response.get("foundRows").and_then(Value::as_u64);
        let records = match shape_of(response.get("data")) {
            DataShape::Rows(rows) => rows.to_vec(),
            DataShape::Keyed(map) => keyed_records(map, kind),
            DataShape::Absent => Vec::new(),
        };
        Self {
            records,
            found_rows,
        }
    }

    /// The registry's reported total match count, when it calculated one.
    pub fn found_rows(&self) -> Option<u64> {
        self.found_rows
    }

    /// True when this page carries nothing to render.
    pub fn is_empty(&self) -> bool {
        self.found_rows == Some(0) || self.records.is_empty()
    }

    /// The ordered records. Empty when `foundRows` reported zero matches,
    /// regardless of what `data` contained.
    pub fn into_records(self) -> Vec<Value> {
        if self.found_rows == Some(0) {
            Vec::new()
        } else {
            self.records
        }
    }
}

/// Values of keys that parse as non-negative integers, in numeric order.
/// Numeric-string keys do not order lexicographically ("10" sorts before
/// "2"), so keys are parsed before sorting. When no numeric keys exist,
/// falls back to a list nested under the kind's key.
fn keyed_records(map: &Map<String, Value>, kind: ObjectKind) -> Vec<Value> {
    let mut indexed: Vec<(u64, &Value)> = map
        .iter()
        .filter_map(|(key, value)| key.parse::<u64>().ok().map(|n| (n, value)))
        .collect();

    if indexed.is_empty() {
        return match map.get(kind.nested_key()) {
            Some(Value::Array(rows)) => rows.clone(),
            _ => Vec::new(),
        };
    }

    indexed.sort_by_key(|(n, _)| *n);
    indexed.into_iter().map(|(_, value)| value.clone()).collect()
}
