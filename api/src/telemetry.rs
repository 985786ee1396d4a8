//! Player telemetry as stored in the remote JSON document.
//!
//! The store returns one JSON object keyed by an opaque player id. Records are
//! kept as raw JSON and interpreted lazily so that one malformed record never
//! prevents the others from being read.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::error::{FetchError, FieldError};

pub const LEVEL_FIELD: &str = "level";

/// All player records of one fetch, ordered by player id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    players: BTreeMap<String, Value>,
}

impl Snapshot {
    /// Interpret a decoded payload. `null` (an empty store) yields an empty snapshot.
    pub fn from_value(value: Value) -> Result<Self, FetchError> {
        match value {
            Value::Null => Ok(Self::default()),
            Value::Object(map) => Ok(Self {
                players: map.into_iter().collect(),
            }),
            other => Err(FetchError::Shape {
                found: json_kind(&other),
            }),
        }
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self, FetchError> {
        let value: Value = serde_json::from_slice(bytes)?;
        Self::from_value(value)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Every entry, with the ones that are not JSON objects reported as errors.
    pub fn records(&self) -> impl Iterator<Item = (&str, Result<PlayerRecord<'_>, FieldError>)> {
        self.players
            .iter()
            .map(|(id, value)| (id.as_str(), PlayerRecord::new(id, value)))
    }
}

/// Borrowed view of one player's fields.
#[derive(Debug, Clone, Copy)]
pub struct PlayerRecord<'a> {
    id: &'a str,
    fields: &'a Map<String, Value>,
}

impl<'a> PlayerRecord<'a> {
    pub fn new(id: &'a str, value: &'a Value) -> Result<Self, FieldError> {
        match value {
            Value::Object(fields) => Ok(Self { id, fields }),
            _ => Err(FieldError::NotAnObject),
        }
    }

    pub fn id(&self) -> &'a str {
        self.id
    }

    pub fn field(&self, name: &str) -> Result<&'a Value, FieldError> {
        self.fields
            .get(name)
            .ok_or_else(|| FieldError::Missing(name.to_string()))
    }

    /// The level this record belongs to.
    ///
    /// Accepts integers, floats (truncated toward zero) and strings holding an
    /// integer.
    pub fn level(&self) -> Result<i64, FieldError> {
        let value = self.field(LEVEL_FIELD)?;
        coerce_level(value).ok_or_else(|| malformed(LEVEL_FIELD, "an integer level", value))
    }

    /// A numeric metric. Accepts JSON numbers and strings holding a finite number.
    pub fn number(&self, name: &str) -> Result<f64, FieldError> {
        let value = self.field(name)?;
        coerce_number(value).ok_or_else(|| malformed(name, "a number", value))
    }
}

fn coerce_level(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number.as_i64().or_else(|| {
            // Floats truncate toward zero; anything outside i64 is malformed, not saturated.
            number
                .as_f64()
                .map(f64::trunc)
                .filter(|raw| (i64::MIN as f64..i64::MAX as f64).contains(raw))
                .map(|raw| raw as i64)
        }),
        Value::String(text) => text.trim().parse::<i64>().ok(),
        _ => None,
    }
}

fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|parsed| parsed.is_finite()),
        _ => None,
    }
}

fn malformed(field: &str, expected: &'static str, value: &Value) -> FieldError {
    FieldError::Malformed {
        field: field.to_string(),
        expected,
        found: value.to_string(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
