// src/github/validate.rs
// =============================================================================
// This module checks that untrusted JSON has the shape of a User or a
// Repository before anything else gets to see it.
//
// How it works:
// 1. Each record type has a table of (field name, expected kind, nullable)
// 2. We walk the table and look the field up in the JSON object
// 3. The first missing or wrong-typed field becomes a ValidationError
// 4. Only then do we let serde build the typed struct
//
// Why not just call serde_json::from_value?
// - serde errors are strings; we want to say exactly which field was bad
// - The fetcher has to tell "GitHub sent junk" apart from "the network broke",
//   and a dedicated error type makes that a simple match
// =============================================================================

use chrono::DateTime;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use super::models::{Repository, User};

// The primitive type a field must have
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Any JSON string
    String,
    /// A non-negative integer (ids and counts)
    Integer,
    Boolean,
    /// A string that parses as an RFC 3339 date-time
    Timestamp,
}

impl FieldKind {
    fn matches(self, value: &Value) -> bool {
        match self {
            FieldKind::String => value.is_string(),
            FieldKind::Integer => value.is_u64(),
            FieldKind::Boolean => value.is_boolean(),
            FieldKind::Timestamp => value
                .as_str()
                .is_some_and(|s| DateTime::parse_from_rfc3339(s).is_ok()),
        }
    }

    fn describe(self) -> &'static str {
        match self {
            FieldKind::String => "a string",
            FieldKind::Integer => "a non-negative integer",
            FieldKind::Boolean => "a boolean",
            FieldKind::Timestamp => "an RFC 3339 timestamp",
        }
    }
}

// (field name, kind, nullable)
type FieldSpec = (&'static str, FieldKind, bool);

const USER_FIELDS: &[FieldSpec] = &[
    ("login", FieldKind::String, false),
    ("id", FieldKind::Integer, false),
    ("avatar_url", FieldKind::String, false),
    ("html_url", FieldKind::String, false),
    ("name", FieldKind::String, true),
    ("public_repos", FieldKind::Integer, false),
];

const REPOSITORY_FIELDS: &[FieldSpec] = &[
    ("id", FieldKind::Integer, false),
    ("name", FieldKind::String, false),
    ("full_name", FieldKind::String, false),
    ("html_url", FieldKind::String, false),
    ("description", FieldKind::String, true),
    ("created_at", FieldKind::Timestamp, false),
    ("updated_at", FieldKind::Timestamp, false),
    ("pushed_at", FieldKind::Timestamp, false),
    ("language", FieldKind::String, true),
    ("fork", FieldKind::Boolean, false),
    ("archived", FieldKind::Boolean, false),
    ("disabled", FieldKind::Boolean, false),
    ("private", FieldKind::Boolean, false),
];

/// Why a JSON value was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{record}: expected a JSON object")]
    NotAnObject { record: &'static str },

    #[error("{record}: expected a JSON array")]
    NotAnArray { record: &'static str },

    #[error("{record}: missing required field `{field}`")]
    MissingField {
        record: &'static str,
        field: &'static str,
    },

    #[error("{record}: field `{field}` should be {expected}")]
    WrongType {
        record: &'static str,
        field: &'static str,
        expected: &'static str,
    },

    // Only reachable if the tables above drift from the structs in models.rs
    #[error("{record}: {message}")]
    Decode {
        record: &'static str,
        message: String,
    },
}

/// Checks `value` against the User shape and returns the typed record.
pub fn validate_user(value: &Value) -> Result<User, ValidationError> {
    validate_shape(value, "user", USER_FIELDS)
}

/// Checks `value` against the Repository shape and returns the typed record.
pub fn validate_repository(value: &Value) -> Result<Repository, ValidationError> {
    validate_shape(value, "repository", REPOSITORY_FIELDS)
}

fn validate_shape<T: DeserializeOwned>(
    value: &Value,
    record: &'static str,
    fields: &[FieldSpec],
) -> Result<T, ValidationError> {
    let object = value
        .as_object()
        .ok_or(ValidationError::NotAnObject { record })?;

    for &(field, kind, nullable) in fields {
        match object.get(field) {
            None => return Err(ValidationError::MissingField { record, field }),
            Some(Value::Null) if nullable => {}
            Some(v) if kind.matches(v) => {}
            Some(_) => {
                return Err(ValidationError::WrongType {
                    record,
                    field,
                    expected: if nullable {
                        match kind {
                            FieldKind::String => "a string or null",
                            other => other.describe(),
                        }
                    } else {
                        kind.describe()
                    },
                })
            }
        }
    }

    T::deserialize(value).map_err(|e| ValidationError::Decode {
        record,
        message: e.to_string(),
    })
}
