//! Comparison of JSON-encoded strings

use crate::comparator::{Comparator, EqualityComparator};
use crate::error::{CompareError, CompareResult};
use serde_json::Value;

/// Decodes two JSON strings and compares the decoded values with a delegate
pub struct JsonComparator {
    delegate: Box<dyn Comparator>,
}

impl JsonComparator {
    /// Create a comparator that compares decoded values structurally
    pub fn new() -> Self {
        Self::with_delegate(EqualityComparator::new())
    }

    /// Create a comparator that hands decoded values to `delegate`
    pub fn with_delegate(delegate: impl Comparator + 'static) -> Self {
        Self {
            delegate: Box::new(delegate),
        }
    }
}

impl Default for JsonComparator {
    fn default() -> Self {
        Self::new()
    }
}

impl Comparator for JsonComparator {
    fn equals(&self, a: &Value, b: &Value) -> CompareResult<bool> {
        let a = json_str(a)?;
        let b = json_str(b)?;

        let a = decode(a)?;
        let b = decode(b)?;

        self.delegate.equals(&a, &b)
    }
}

fn json_str(value: &Value) -> CompareResult<&str> {
    match value {
        Value::String(s) => Ok(s),
        Value::Null => Err(CompareError::invalid_input(
            "expected a JSON string, got nothing",
        )),
        other => Err(CompareError::invalid_input(format!(
            "expected a JSON string, got {other}"
        ))),
    }
}

fn decode(text: &str) -> CompareResult<Value> {
    serde_json::from_str(text)
        .map_err(|e| CompareError::invalid_input(format!("not a valid JSON string: {e}")))
}
