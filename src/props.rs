//! Normalized prop view over one component instance.
//!
//! Classifiers never look at raw JSX. They see a [`PropsMap`] where every
//! attribute has been reduced to a literal or marked [`PropValue::Unresolved`].
//! Presence of an unresolved prop is still observable; its content never is.

use serde_json::Value as JsonValue;
use std::collections::HashMap;

// ═══════════════════════════════════════════════════════════════════════════════
// PROP VALUES
// ═══════════════════════════════════════════════════════════════════════════════

/// A prop value as far as static analysis can determine it.
#[derive(Debug, Clone, PartialEq)]
pub enum PropValue {
    Str(String),
    Bool(bool),
    Num(f64),
    /// Written in the source but not a literal: identifier references,
    /// call results, member accesses, conditional expressions.
    Unresolved,
}

/// Name to value lookup for one component instance. Built fresh per
/// classification and thrown away afterwards. Duplicate attribute names
/// resolve last-wins, matching source declaration order.
#[derive(Debug, Clone, Default)]
pub struct PropsMap {
    entries: HashMap<String, PropValue>,
}

impl PropsMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: &str, value: PropValue) {
        self.entries.insert(name.to_string(), value);
    }

    /// The prop was written at all, with any value.
    pub fn has(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Literal `true`, whether written as bare shorthand or `{true}`.
    pub fn is_true(&self, name: &str) -> bool {
        matches!(self.entries.get(name), Some(PropValue::Bool(true)))
    }

    /// Literal `false`. Distinct from absent for direction-sensitive props
    /// (`isExpanded={false}` means collapsed, missing means unknown).
    pub fn is_explicit_false(&self, name: &str) -> bool {
        matches!(self.entries.get(name), Some(PropValue::Bool(false)))
    }

    /// Present and not explicitly `false`. Unresolved values count as
    /// enabled; writing the prop at all signals the capability.
    pub fn is_enabled(&self, name: &str) -> bool {
        self.has(name) && !self.is_explicit_false(name)
    }

    /// String literal content, or None for anything else.
    pub fn str_value(&self, name: &str) -> Option<&str> {
        match self.entries.get(name) {
            Some(PropValue::Str(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn get(&self, name: &str) -> Option<&PropValue> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Bridge for props arriving from the wrapper layer as JSON. Scalars
    /// map to literals; objects, arrays and null map to
    /// [`PropValue::Unresolved`], mirroring how non-literal JSX
    /// expressions are treated statically.
    pub fn from_json(value: &JsonValue) -> Self {
        let mut map = PropsMap::new();
        if let JsonValue::Object(object) = value {
            for (name, raw) in object {
                let prop = match raw {
                    JsonValue::String(s) => PropValue::Str(s.clone()),
                    JsonValue::Bool(b) => PropValue::Bool(*b),
                    JsonValue::Number(n) => PropValue::Num(n.as_f64().unwrap_or(0.0)),
                    _ => PropValue::Unresolved,
                };
                map.insert(name, prop);
            }
        }
        map
    }
}
