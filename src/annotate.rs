//! The annotation pass.
//!
//! Walks every element of a parsed tree, decides which nodes are eligible,
//! classifies them, and appends the resulting attributes. Decisions are
//! computed against the tree exactly as parsed, then applied in a second
//! phase, so no node's outcome can depend on a sibling's fresh annotations.

#[cfg(feature = "napi")]
use napi_derive::napi;
use serde::{Deserialize, Serialize};

use crate::attrs::AttrCatalog;
use crate::classify::classify_component;
use crate::context::resolve_parent_context;
use crate::emit::{apply_insertions, render_attrs, Insertion};
use crate::parse::{is_component_name, parse_source, AnnotateError, SourceTree};
use crate::props::PropValue;
use crate::provenance::LibraryCatalog;
use crate::tree::{JsxAttr, NodeId};

// ═══════════════════════════════════════════════════════════════════════════════
// PASS RESULTS
// ═══════════════════════════════════════════════════════════════════════════════

/// Attributes to append to one node, in emission order.
#[derive(Debug, Clone)]
pub struct AttrEdit {
    pub node: NodeId,
    pub insert_offset: u32,
    pub attrs: Vec<(String, String)>,
}

/// Per-file outcome counters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "napi", napi(object))]
#[serde(rename_all = "camelCase")]
pub struct AnnotationSummary {
    /// Every element seen, host elements included.
    pub visited: u32,
    pub annotated: u32,
    /// Nodes skipped because they already carried a semantic marker.
    pub skipped_annotated: u32,
    /// Component nodes skipped because provenance did not resolve.
    pub skipped_foreign: u32,
}

/// Decisions of one pass over one tree.
#[derive(Debug, Default)]
pub struct AnnotationPass {
    pub edits: Vec<AttrEdit>,
    pub summary: AnnotationSummary,
}

// ═══════════════════════════════════════════════════════════════════════════════
// TREE ANNOTATION
// ═══════════════════════════════════════════════════════════════════════════════

/// Annotate every eligible node in `tree`.
///
/// Eligibility gates, in order: the tag must be a plain identifier with a
/// component-shaped name, provenance must resolve it to a recognized
/// library export, and it must not already carry any semantic marker.
/// Appending never removes, rewrites or reorders existing attributes.
pub fn annotate_tree(
    tree: &mut SourceTree,
    catalog: &AttrCatalog,
    library: &LibraryCatalog,
) -> AnnotationPass {
    let mut pass = AnnotationPass::default();

    for id in tree.arena.ids() {
        let node = tree.arena.get(id);
        pass.summary.visited += 1;

        if !node.identifier || !is_component_name(&node.name) {
            continue;
        }
        let exported = match library.resolve(&tree.provenance, &node.name) {
            Some(exported) => exported,
            None => {
                pass.summary.skipped_foreign += 1;
                continue;
            }
        };
        if node.attrs.iter().any(|attr| catalog.is_semantic_marker(&attr.name)) {
            pass.summary.skipped_annotated += 1;
            continue;
        }

        let parent_context = resolve_parent_context(&tree.arena, id, &tree.provenance, library);
        let props = node.props();
        let result = classify_component(&exported, &props, parent_context.as_deref());

        let mut attrs: Vec<(String, String)> = Vec::new();
        attrs.push((catalog.role.clone(), result.role));
        attrs.push((catalog.purpose.clone(), result.purpose));
        if let Some(variant) = result.variant {
            attrs.push((catalog.variant.clone(), variant));
        }
        if let Some(context) = result.context {
            attrs.push((catalog.context.clone(), context));
        }
        if let Some(state) = result.state {
            attrs.push((catalog.state.clone(), state));
        }
        if let Some(action_type) = result.action_type {
            attrs.push((catalog.action_type.clone(), action_type));
        }
        if let Some(size) = result.size {
            attrs.push((catalog.size.clone(), size));
        }

        pass.edits.push(AttrEdit {
            node: id,
            insert_offset: node.insert_offset,
            attrs,
        });
        pass.summary.annotated += 1;
    }

    // Apply phase: append after everything already present.
    for edit in &pass.edits {
        let node = tree.arena.get_mut(edit.node);
        for (name, value) in &edit.attrs {
            node.attrs.push(JsxAttr {
                name: name.clone(),
                value: PropValue::Str(value.clone()),
            });
        }
    }

    pass
}

// ═══════════════════════════════════════════════════════════════════════════════
// SOURCE PIPELINE
// ═══════════════════════════════════════════════════════════════════════════════

/// Outcome of the one-shot parse, annotate, splice pipeline.
#[derive(Debug, Clone)]
pub struct AnnotatedSource {
    pub code: String,
    pub changed: bool,
    pub summary: AnnotationSummary,
}

/// Annotate one module's source text. When nothing is eligible the input
/// comes back verbatim with `changed: false`.
pub fn annotate_source(
    source: &str,
    file_path: &str,
    catalog: &AttrCatalog,
    library: &LibraryCatalog,
) -> Result<AnnotatedSource, AnnotateError> {
    let mut tree = parse_source(source, file_path)?;
    let pass = annotate_tree(&mut tree, catalog, library);

    if pass.edits.is_empty() {
        return Ok(AnnotatedSource {
            code: source.to_string(),
            changed: false,
            summary: pass.summary,
        });
    }

    let insertions = pass
        .edits
        .iter()
        .map(|edit| Insertion {
            offset: edit.insert_offset,
            text: render_attrs(&edit.attrs),
        })
        .collect();
    Ok(AnnotatedSource {
        code: apply_insertions(source, insertions),
        changed: true,
        summary: pass.summary,
    })
}

// ═══════════════════════════════════════════════════════════════════════════════
// NAPI BINDINGS
// ═══════════════════════════════════════════════════════════════════════════════

#[cfg(feature = "napi")]
#[napi(object)]
pub struct AnnotateSourceOutput {
    pub code: String,
    pub changed: bool,
    pub summary: AnnotationSummary,
    pub error: Option<AnnotateError>,
}

/// Never throws into JS; failures ride back in the `error` field with the
/// source returned untouched.
#[cfg(feature = "napi")]
#[napi]
pub fn annotate_source_native(source: String, file_path: String) -> AnnotateSourceOutput {
    match annotate_source(
        &source,
        &file_path,
        &AttrCatalog::default(),
        &LibraryCatalog::default(),
    ) {
        Ok(out) => AnnotateSourceOutput {
            code: out.code,
            changed: out.changed,
            summary: out.summary,
            error: None,
        },
        Err(error) => AnnotateSourceOutput {
            code: source,
            changed: false,
            summary: AnnotationSummary::default(),
            error: Some(error),
        },
    }
}
