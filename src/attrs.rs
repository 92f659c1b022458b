//! Canonical vocabulary of emitted semantic attributes.
//!
//! Every attribute the annotator writes or recognizes is named here, once.
//! Downstream tooling matches on these exact strings, so the catalog is an
//! explicit value handed through the pipeline instead of string literals
//! scattered across the classifiers.

#[cfg(feature = "napi")]
use napi_derive::napi;
use serde::{Deserialize, Serialize};

// ═══════════════════════════════════════════════════════════════════════════════
// ATTRIBUTE CATALOG
// The data-* attribute set owned by the annotator
// ═══════════════════════════════════════════════════════════════════════════════

/// The attribute names the annotator emits, plus the prefix used by
/// pre-1.0 releases. Legacy attributes are recognized when deciding
/// whether a node is already annotated but are never emitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "napi", napi(object))]
#[serde(rename_all = "camelCase")]
pub struct AttrCatalog {
    pub role: String,
    pub purpose: String,
    pub variant: String,
    pub context: String,
    pub state: String,
    pub action_type: String,
    pub size: String,
    pub legacy_prefix: String,
}

impl Default for AttrCatalog {
    fn default() -> Self {
        AttrCatalog {
            role: "data-role".to_string(),
            purpose: "data-purpose".to_string(),
            variant: "data-variant".to_string(),
            context: "data-context".to_string(),
            state: "data-state".to_string(),
            action_type: "data-action-type".to_string(),
            size: "data-size".to_string(),
            legacy_prefix: "data-ai-".to_string(),
        }
    }
}

impl AttrCatalog {
    /// Attribute names in emission order.
    pub fn names(&self) -> [&str; 7] {
        [
            self.role.as_str(),
            self.purpose.as_str(),
            self.variant.as_str(),
            self.context.as_str(),
            self.state.as_str(),
            self.action_type.as_str(),
            self.size.as_str(),
        ]
    }

    /// True when `name` is an attribute this tool owns: an exact match on
    /// a canonical name or anything carrying the legacy prefix. Nodes with
    /// a semantic marker are left untouched by later passes.
    pub fn is_semantic_marker(&self, name: &str) -> bool {
        self.names().contains(&name) || name.starts_with(self.legacy_prefix.as_str())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// NAPI BINDINGS
// ═══════════════════════════════════════════════════════════════════════════════

/// Marker probe for the wrapper layer: whether `name` is an attribute the
/// annotator owns under the canonical vocabulary.
#[cfg(feature = "napi")]
#[napi]
pub fn is_semantic_marker_native(name: String) -> bool {
    AttrCatalog::default().is_semantic_marker(&name)
}
