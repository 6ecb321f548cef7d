//! Adapts raw ingredient payloads into [`IngredientEntry`] values.
//!
//! Recipes store their ingredients in one of three shapes: a structured
//! array, the same array JSON-encoded into a string, or a legacy list of bare
//! names (either a string array or newline-separated text). Everything is
//! brought to a single shape here so aggregation never has to care.

use larder_shared::recipe::{IngredientEntry, IngredientUnit};
use serde::Deserialize;
use serde_json::Value;

use crate::quantity::parse_quantity;

#[derive(Debug, thiserror::Error)]
pub enum PayloadError {
    #[error("ingredients are not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("ingredients must be a list, got {0}")]
    UnexpectedShape(&'static str),

    #[error("ingredient #{index} is malformed: {reason}")]
    InvalidEntry { index: usize, reason: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum IngredientPayload {
    Structured(Vec<IngredientEntry>),
    LegacyNameOnly(Vec<String>),
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawEntry {
    name: String,
    #[serde(default)]
    quantity: Option<RawQuantity>,
    #[serde(default)]
    unit: Option<String>,
    #[serde(default, alias = "is_optional")]
    is_optional: bool,
    #[serde(default)]
    position: Option<i32>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawQuantity {
    Number(f64),
    Text(String),
}

impl RawEntry {
    fn into_entry(self, index: usize) -> IngredientEntry {
        let quantity = match self.quantity {
            Some(RawQuantity::Number(value)) => Some(value),
            Some(RawQuantity::Text(text)) => parse_quantity(&text),
            None => None,
        };

        let unit = match self.unit.as_deref().map(IngredientUnit::parse) {
            Some(Ok(unit)) => unit,
            Some(Err(unknown)) => {
                tracing::warn!(
                    ingredient = %self.name,
                    unit = %unknown,
                    "unrecognized unit, using other"
                );
                Some(IngredientUnit::Other)
            }
            None => None,
        };

        IngredientEntry {
            name: self.name,
            quantity,
            unit,
            is_optional: self.is_optional,
            position: self.position.unwrap_or(index as i32),
        }
    }
}

impl IngredientPayload {
    pub fn from_value(value: &Value) -> Result<Self, PayloadError> {
        match value {
            Value::Null => Ok(Self::Structured(Vec::new())),
            Value::String(text) => Self::from_text(text),
            Value::Array(items) => Self::from_array(items),
            other => Err(PayloadError::UnexpectedShape(kind(other))),
        }
    }

    fn from_text(text: &str) -> Result<Self, PayloadError> {
        let trimmed = text.trim();

        if trimmed.starts_with('[') {
            let items = serde_json::from_str::<Vec<Value>>(trimmed)?;
            return Self::from_array(&items);
        }

        Ok(Self::LegacyNameOnly(
            trimmed.lines().map(str::to_owned).collect(),
        ))
    }

    fn from_array(items: &[Value]) -> Result<Self, PayloadError> {
        if !items.is_empty() && items.iter().all(Value::is_string) {
            let names = items
                .iter()
                .filter_map(|item| item.as_str().map(str::to_owned))
                .collect();

            return Ok(Self::LegacyNameOnly(names));
        }

        let entries = items
            .iter()
            .enumerate()
            .map(|(index, item)| match item {
                Value::String(name) => Ok(IngredientEntry::new(name.trim()).at(index as i32)),
                Value::Object(_) => RawEntry::deserialize(item)
                    .map(|raw| raw.into_entry(index))
                    .map_err(|err| PayloadError::InvalidEntry {
                        index,
                        reason: err.to_string(),
                    }),
                other => Err(PayloadError::InvalidEntry {
                    index,
                    reason: format!("expected an object, got {}", kind(other)),
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::Structured(entries))
    }

    /// Flattens the payload into entries, dropping lines with a blank name.
    pub fn into_entries(self) -> Vec<IngredientEntry> {
        let entries = match self {
            Self::Structured(entries) => entries,
            Self::LegacyNameOnly(names) => names
                .into_iter()
                .enumerate()
                .map(|(index, name)| IngredientEntry::new(name.trim()).at(index as i32))
                .collect(),
        };

        entries
            .into_iter()
            .filter(|entry| !entry.name.trim().is_empty())
            .collect()
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
