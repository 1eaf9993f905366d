//! Typed lookups over raw cloud properties
//!
//! Raw properties arrive as an untyped JSON object. Several rules key off
//! whether a field was *present* rather than whether it is truthy, so the
//! helpers here keep the two apart:
//!
//! - presence: the key exists, even if it maps to `null` or `false`
//! - truthiness: the value is anything other than `null` or `false`
//!
//! Values of an unexpected shape resolve to absent (or the default) and are
//! reported with `tracing::warn!`; they never fail construction.

use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Untyped cloud properties as supplied by the caller
pub type RawProperties = Map<String, Value>;

/// Whether a value counts as set (anything but `null` or `false`)
pub fn is_truthy(value: &Value) -> bool {
    !matches!(value, Value::Null | Value::Bool(false))
}

/// Overlay `overrides` onto `base`
///
/// Keys from `overrides` win on collision; keys only in `base` are kept.
pub fn overlay(base: &RawProperties, overrides: &RawProperties) -> RawProperties {
    let mut merged = base.clone();
    for (key, value) in overrides {
        merged.insert(key.clone(), value.clone());
    }
    merged
}

/// Read-only typed projection over [`RawProperties`]
#[derive(Debug, Clone, Copy)]
pub struct PropertyView<'a> {
    raw: &'a RawProperties,
}

impl<'a> PropertyView<'a> {
    pub fn new(raw: &'a RawProperties) -> Self {
        Self { raw }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.raw.contains_key(key)
    }

    /// Value for `key`, treating an explicit `null` as absent
    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.raw.get(key).filter(|value| !value.is_null())
    }

    pub fn is_truthy(&self, key: &str) -> bool {
        self.raw.get(key).is_some_and(is_truthy)
    }

    /// `default` unless `key` is present, in which case its truthiness wins
    pub fn flag_or(&self, key: &str, default: bool) -> bool {
        match self.raw.get(key) {
            Some(value) => is_truthy(value),
            None => default,
        }
    }

    /// `default` unless `key` is present, in which case its value wins
    ///
    /// An explicit `null` clears the default.
    pub fn optional_string_or(&self, key: &str, default: Option<&str>) -> Option<String> {
        if self.contains(key) {
            self.string(key)
        } else {
            default.map(str::to_string)
        }
    }

    pub fn string(&self, key: &str) -> Option<String> {
        match self.get(key)? {
            Value::String(s) => Some(s.clone()),
            other => {
                warn_shape(key, "string", other);
                None
            }
        }
    }

    /// String value when truthy, otherwise `default`
    pub fn string_or(&self, key: &str, default: &str) -> String {
        self.is_truthy(key)
            .then(|| self.string(key))
            .flatten()
            .unwrap_or_else(|| default.to_string())
    }

    pub fn integer(&self, key: &str) -> Option<u64> {
        let value = self.get(key)?;
        match value.as_u64() {
            Some(n) => Some(n),
            None => {
                warn_shape(key, "non-negative integer", value);
                None
            }
        }
    }

    /// Integer value when truthy, otherwise `default`
    pub fn integer_or(&self, key: &str, default: u64) -> u64 {
        if self.is_truthy(key) {
            self.integer(key).unwrap_or(default)
        } else {
            default
        }
    }

    /// List of strings; absent or falsy yields an empty list
    pub fn string_list(&self, key: &str) -> Vec<String> {
        if !self.is_truthy(key) {
            return Vec::new();
        }
        match self.get(key) {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|item| match item {
                    Value::String(s) => Some(s.clone()),
                    other => {
                        warn_shape(key, "string element", other);
                        None
                    }
                })
                .collect(),
            Some(other) => {
                warn_shape(key, "array of strings", other);
                Vec::new()
            }
            None => Vec::new(),
        }
    }

    /// Object of string values; absent or falsy yields an empty map
    pub fn string_map(&self, key: &str) -> BTreeMap<String, String> {
        if !self.is_truthy(key) {
            return BTreeMap::new();
        }
        match self.get(key) {
            Some(Value::Object(entries)) => entries
                .iter()
                .filter_map(|(k, v)| match v {
                    Value::String(s) => Some((k.clone(), s.clone())),
                    other => {
                        warn_shape(&format!("{}.{}", key, k), "string", other);
                        None
                    }
                })
                .collect(),
            Some(other) => {
                warn_shape(key, "object of strings", other);
                BTreeMap::new()
            }
            None => BTreeMap::new(),
        }
    }
}

fn warn_shape(key: &str, expected: &str, actual: &Value) {
    tracing::warn!(
        "Ignoring cloud property '{}': expected {}, got {}",
        key,
        expected,
        actual
    );
}
