// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Upstream cells are loosely typed. Strings and numbers survive as text;
/// null, blank strings, zero, booleans and nested values count as absent.
/// Numbers print the way the service's own web client shows them, so `1.0`
/// reads as `1`.
pub mod loose_text {
    use super::*;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(value.as_ref().and_then(from_value))
    }

    #[must_use]
    pub fn from_value(value: &Value) -> Option<String> {
        match value {
            Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
            Value::Number(n) => number_text(n),
            _ => None,
        }
    }

    fn number_text(n: &serde_json::Number) -> Option<String> {
        if let Some(i) = n.as_i64() {
            return (i != 0).then(|| i.to_string());
        }
        if let Some(u) = n.as_u64() {
            return Some(u.to_string());
        }
        let f = n.as_f64()?;
        if f == 0.0 || f.is_nan() {
            None
        } else if f.fract() == 0.0 && f.abs() < 1e21 {
            Some(format!("{f:.0}"))
        } else {
            Some(f.to_string())
        }
    }
}
