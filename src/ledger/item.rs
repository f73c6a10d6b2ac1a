//! Single line entries and their number-or-text values.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::text::format_number;

/// An item's value: a numeric quantity, or the raw text when the input
/// could not be read as a finite number.
///
/// Serialized untagged so JSON projections carry a bare number or string,
/// matching the text form the value came from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Value {
    Numeric(f64),
    Text(String),
}

impl Value {
    /// Coerces edit-time input through the numeric-or-text policy: a
    /// non-blank string that parses to a finite number becomes
    /// [`Value::Numeric`], anything else is kept verbatim as text.
    ///
    /// Numeral normalization is not applied here; it belongs to the parser.
    pub fn coerce(input: &str) -> Self {
        let trimmed = input.trim();
        match trimmed.parse::<f64>() {
            Ok(number) if number.is_finite() && !trimmed.is_empty() => Value::Numeric(number),
            _ => Value::Text(input.to_string()),
        }
    }

    /// Returns the numeric quantity, if this value is numeric.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Numeric(number) => Some(*number),
            Value::Text(_) => None,
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Value::Numeric(_))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Numeric(number) => f.write_str(&format_number(*number)),
            Value::Text(text) => f.write_str(text),
        }
    }
}

impl From<f64> for Value {
    fn from(number: f64) -> Self {
        Value::Numeric(number)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Text(text.to_string())
    }
}

/// A single `name: value` entry, optionally excluded from totals.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Item {
    pub name: String,
    pub value: Value,
    pub excluded: bool,
}

impl Item {
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            excluded: false,
        }
    }

    /// The amount this item contributes to its section total: the numeric
    /// value when present and not excluded, zero otherwise.
    pub fn counted_amount(&self) -> f64 {
        match (&self.value, self.excluded) {
            (Value::Numeric(number), false) => *number,
            _ => 0.0,
        }
    }
}
