//! Ancestor context resolution over the static tree.
//!
//! A node can inherit its `context` from the nearest ancestor whose
//! purpose marks it as a context source. The walk is bounded and purely
//! structural: unrecognized ancestors cost a level but contribute nothing.

use crate::classify::{classify_component, classify_purpose};
use crate::family::ComponentFamily;
use crate::parse::is_component_name;
use crate::provenance::{ImportProvenance, LibraryCatalog};
use crate::tree::{JsxArena, NodeId};

/// Upper bound on ancestor checks per walk. Keeps worst-case work linear
/// in tree depth even for degenerate deeply nested markup.
pub const MAX_ANCESTOR_DEPTH: usize = 10;

/// Purposes whose carriers hand their context down to descendants.
pub const CONTEXT_SOURCE_PURPOSES: [&str; 2] = ["form-container", "overlay"];

/// Find the context a node inherits from its ancestor chain, if any.
///
/// The first recognized ancestor whose purpose is a context source
/// decides: its own context, resolved against its own parent chain, is
/// the answer even when that context is empty. Nothing from the starting
/// node is forwarded upward.
pub fn resolve_parent_context(
    arena: &JsxArena,
    id: NodeId,
    provenance: &ImportProvenance,
    library: &LibraryCatalog,
) -> Option<String> {
    for (depth, ancestor_id) in arena.ancestors(id).enumerate() {
        if depth >= MAX_ANCESTOR_DEPTH {
            return None;
        }
        let node = arena.get(ancestor_id);
        if !node.identifier || !is_component_name(&node.name) {
            continue;
        }
        let exported = match library.resolve(provenance, &node.name) {
            Some(exported) => exported,
            None => continue,
        };
        let props = node.props();
        let family = ComponentFamily::resolve(&exported);
        let purpose = classify_purpose(family, &props);
        if !CONTEXT_SOURCE_PURPOSES.contains(&purpose.as_str()) {
            continue;
        }
        let ancestor_context = resolve_parent_context(arena, ancestor_id, provenance, library);
        return classify_component(&exported, &props, ancestor_context.as_deref()).context;
    }
    None
}
