//! Field validators and the field-keyed error map they report into.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use serde_json::Value;

use super::fields::is_truthy;
use super::tags::DELIM;

pub const REQUIRED: &str = "This field is required.";
pub const NOT_A_STRING: &str = "Not a valid string.";
pub const TAG_NOT_A_STRING: &str = "Tag must be a string.";
pub const LIST_OF_TAGS_EXPECTED: &str = "List of tags expected.";
pub const SPECIFY_A_TAG: &str = "Please specify a tag.";
pub const INPUT_NOT_VALID: &str = "Input data not valid.";

/// Errors reported for one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldError {
    /// Single message, used when the field could not be read at all.
    Message(String),
    /// Messages of a scalar field.
    Messages(Vec<String>),
    /// Messages of a list field, one list per entry in input order.
    Entries(Vec<Vec<String>>),
}

/// Field name to its errors, in name order.
pub type FieldErrors = BTreeMap<String, FieldError>;

/// Failure of a form to process its input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// A field was supplied with the wrong shape of value.
    TypeMismatch {
        field: &'static str,
        message: &'static str,
    },
    /// One or more fields failed their rules.
    Invalid(FieldErrors),
}

impl FormError {
    /// Field-keyed description of the failure.
    pub fn errors(&self) -> FieldErrors {
        match self {
            FormError::TypeMismatch { field, message } => {
                FieldErrors::from([(field.to_string(), FieldError::Message(message.to_string()))])
            }
            FormError::Invalid(errors) => errors.clone(),
        }
    }

    /// Turn collected errors into a result.
    pub(crate) fn check(errors: FieldErrors) -> Result<(), FormError> {
        if errors.is_empty() {
            Ok(())
        } else {
            Err(FormError::Invalid(errors))
        }
    }
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::TypeMismatch { field, message } => write!(f, "{}: {}", field, message),
            FormError::Invalid(errors) => {
                let fields: Vec<&str> = errors.keys().map(String::as_str).collect();
                write!(f, "{} ({})", INPUT_NOT_VALID, fields.join(", "))
            }
        }
    }
}

impl std::error::Error for FormError {}

/// A single tag must be a string and must not contain the delimiter.
pub fn validate_tag(value: &Value) -> Result<(), String> {
    let Some(tag) = value.as_str() else {
        return Err(TAG_NOT_A_STRING.to_string());
    };
    if tag.contains(DELIM) {
        return Err(format!("Tag must not contain delimiter \"{}\".", DELIM));
    }
    Ok(())
}

/// The value must be present and truthy; strings must not be blank.
pub fn data_required(value: Option<&Value>) -> Result<(), String> {
    match value {
        Some(Value::String(s)) if !s.trim().is_empty() => Ok(()),
        Some(Value::String(_)) | None => Err(REQUIRED.to_string()),
        Some(other) if is_truthy(other) => Ok(()),
        Some(_) => Err(REQUIRED.to_string()),
    }
}

/// The raw submitted input must be present and non-empty.
pub fn input_required(raw: Option<&str>) -> Result<(), String> {
    match raw {
        Some(value) if !value.is_empty() => Ok(()),
        _ => Err(REQUIRED.to_string()),
    }
}

/// Read an optional text field from JSON input.
///
/// `null` reads as unset; numbers and booleans are taken in their JSON
/// spelling; lists and objects are rejected.
pub fn text_value(value: Option<&Value>) -> Result<Option<String>, String> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(scalar @ (Value::Bool(_) | Value::Number(_))) => Ok(Some(scalar.to_string())),
        Some(Value::Array(_) | Value::Object(_)) => Err(NOT_A_STRING.to_string()),
    }
}
