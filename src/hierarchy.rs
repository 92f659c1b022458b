//! Runtime ancestor chains for the wrapper layer.
//!
//! Wrapper components cannot see the syntax tree while rendering; they
//! push their component names onto a per-render stack instead. Resolution
//! applies the same purpose and context rules as the static resolver,
//! under the same depth bound, but never touches any parse artifacts.
//! Depth here is measured in wrapper components, since only those push.

#[cfg(feature = "napi")]
use napi_derive::napi;
use serde::{Deserialize, Serialize};

use crate::classify::{classify_component, classify_purpose};
use crate::context::{CONTEXT_SOURCE_PURPOSES, MAX_ANCESTOR_DEPTH};
use crate::family::ComponentFamily;
use crate::props::PropsMap;

/// Ordered ancestor component names, outermost first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextStack {
    names: Vec<String>,
}

impl ContextStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_names(names: Vec<String>) -> Self {
        ContextStack { names }
    }

    /// Entering a component during render.
    pub fn push(&mut self, name: &str) {
        self.names.push(name.to_string());
    }

    /// Leaving it again.
    pub fn pop(&mut self) -> Option<String> {
        self.names.pop()
    }

    pub fn depth(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Context inherited by a component rendered under this stack.
    pub fn resolve(&self) -> Option<String> {
        resolve_chain(&self.names)
    }
}

/// Innermost entries are checked first. Runtime ancestors carry no
/// statically known props, so purpose and context run with an empty map.
fn resolve_chain(chain: &[String]) -> Option<String> {
    let len = chain.len();
    for steps in 1..=MAX_ANCESTOR_DEPTH.min(len) {
        let index = len - steps;
        let name = &chain[index];
        let family = ComponentFamily::resolve(name);
        let props = PropsMap::new();
        let purpose = classify_purpose(family, &props);
        if !CONTEXT_SOURCE_PURPOSES.contains(&purpose.as_str()) {
            continue;
        }
        let ancestor_context = resolve_chain(&chain[..index]);
        return classify_component(name, &props, ancestor_context.as_deref()).context;
    }
    None
}

// ═══════════════════════════════════════════════════════════════════════════════
// NAPI BINDINGS
// ═══════════════════════════════════════════════════════════════════════════════

#[cfg(feature = "napi")]
#[napi]
pub fn resolve_context_stack_native(ancestors: Vec<String>) -> Option<String> {
    ContextStack::from_names(ancestors).resolve()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stack(names: &[&str]) -> ContextStack {
        ContextStack::from_names(names.iter().map(|n| n.to_string()).collect())
    }

    #[test]
    fn form_wrappers_donate_form_context() {
        assert_eq!(stack(&["App", "Form"]).resolve().as_deref(), Some("form"));
        assert_eq!(stack(&["App", "Card"]).resolve(), None);
        assert_eq!(stack(&[]).resolve(), None);
    }

    #[test]
    fn the_nearest_source_answers() {
        // The drawer is the nearest source, and its own context resolves
        // to "form" because it renders inside the form.
        let s = stack(&["Form", "Drawer"]);
        assert_eq!(s.resolve().as_deref(), Some("form"));
    }

    #[test]
    fn nested_sources_chain_like_the_static_walk() {
        assert_eq!(
            stack(&["Modal", "Form"]).resolve().as_deref(),
            Some("modal")
        );
        assert_eq!(stack(&["Form"]).resolve().as_deref(), Some("form"));
    }

    #[test]
    fn push_and_pop_track_the_render_path() {
        let mut s = ContextStack::new();
        s.push("Modal");
        s.push("Form");
        assert_eq!(s.depth(), 2);
        assert_eq!(s.resolve().as_deref(), Some("modal"));
        assert_eq!(s.pop().as_deref(), Some("Form"));
        assert_eq!(s.resolve().as_deref(), Some("modal"));
        assert_eq!(s.pop().as_deref(), Some("Modal"));
        assert!(s.is_empty());
        assert_eq!(s.resolve(), None);
    }

    #[test]
    fn resolution_respects_the_depth_bound() {
        let mut names = vec!["Form".to_string()];
        for _ in 0..MAX_ANCESTOR_DEPTH {
            names.push("Section".to_string());
        }
        assert_eq!(ContextStack::from_names(names.clone()).resolve(), None);

        names.pop();
        assert_eq!(
            ContextStack::from_names(names).resolve().as_deref(),
            Some("form")
        );
    }
}
