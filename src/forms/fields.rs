//! Field metadata, submitted form data and value coercions shared by the forms.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Widget a field is rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Single-line text input.
    Text,
    TextArea,
    Boolean,
    Hidden,
    /// Repeatable text inputs submitted as `name-0`, `name-1`, ...
    List,
}

/// Display metadata of a single form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldMeta {
    /// Name the field is submitted under.
    pub name: &'static str,
    pub kind: FieldKind,
    pub label: &'static str,
    /// Help text shown next to the field.
    #[serde(skip_serializing_if = "str::is_empty")]
    pub description: &'static str,
}

/// Raw urlencoded form submission, in submission order.
///
/// List fields are submitted as `name-0`, `name-1`, ...
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct FormData(Vec<(String, String)>);

impl FormData {
    /// First value submitted under `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Entries of the list field `name`, ordered by their index suffix.
    pub fn entries(&self, name: &str) -> Vec<String> {
        let mut indexed = BTreeMap::new();
        for (key, value) in &self.0 {
            let index = key
                .strip_prefix(name)
                .and_then(|rest| rest.strip_prefix('-'))
                .and_then(|index| index.parse::<usize>().ok());
            if let Some(index) = index {
                indexed.entry(index).or_insert_with(|| value.clone());
            }
        }
        indexed.into_values().collect()
    }
}

impl<K, V> FromIterator<(K, V)> for FormData
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

/// Truthiness of a JSON value: `false`, `0`, `""`, `null` and empty
/// collections are false.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// Checkbox state of a submitted form: unchecked boxes are omitted by the
/// browser, and `false` or an empty value also count as unchecked.
pub fn checkbox_value(raw: Option<&str>) -> bool {
    !matches!(raw, None | Some("") | Some("false"))
}

/// Hidden text field coerced to a flag: any non-empty value sets it.
pub fn hidden_flag(raw: Option<&str>) -> bool {
    raw.is_some_and(|value| !value.is_empty())
}
