//! Arena-backed element tree for one parsed source file.
//!
//! Nodes live in a flat vector and point at each other by index. Parent
//! back-references make upward walks cheap during context resolution, and
//! the whole tree drops with the file pass.

use crate::props::{PropsMap, PropValue};

// ═══════════════════════════════════════════════════════════════════════════════
// NODES
// ═══════════════════════════════════════════════════════════════════════════════

/// Index of a node in its [`JsxArena`]. Ids are only minted by
/// [`JsxArena::push`], so an id is always valid for the arena it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// One attribute as written in the source.
#[derive(Debug, Clone)]
pub struct JsxAttr {
    pub name: String,
    pub value: PropValue,
}

/// One element in the tree. `insert_offset` is the byte position where
/// appended attributes belong: after the last written attribute, or after
/// the tag name when there are none.
#[derive(Debug, Clone)]
pub struct JsxNode {
    pub name: String,
    /// False for member and namespaced tags (`Lib.Button`, `svg:use`).
    /// Those are never classified but still count as ancestors.
    pub identifier: bool,
    pub attrs: Vec<JsxAttr>,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    pub span_start: u32,
    pub span_end: u32,
    pub insert_offset: u32,
}

impl JsxNode {
    /// Ephemeral props view over the written attributes. Duplicate names
    /// resolve last-wins.
    pub fn props(&self) -> PropsMap {
        let mut map = PropsMap::new();
        for attr in &self.attrs {
            map.insert(&attr.name, attr.value.clone());
        }
        map
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// ARENA
// ═══════════════════════════════════════════════════════════════════════════════

/// Flat node storage for one file's tree, in document order.
#[derive(Debug, Default)]
pub struct JsxArena {
    nodes: Vec<JsxNode>,
}

impl JsxArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, node: JsxNode) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    pub fn get(&self, id: NodeId) -> &JsxNode {
        &self.nodes[id.index()]
    }

    pub fn get_mut(&mut self, id: NodeId) -> &mut JsxNode {
        &mut self.nodes[id.index()]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Node ids in document order (push order during the parse).
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len() as u32).map(NodeId)
    }

    /// Walk upward from `id`: parent first, then grandparent, toward the
    /// root. The starting node itself is not yielded.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            arena: self,
            next: self.get(id).parent,
        }
    }
}

pub struct Ancestors<'a> {
    arena: &'a JsxArena,
    next: Option<NodeId>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.arena.get(current).parent;
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(name: &str, parent: Option<NodeId>) -> JsxNode {
        JsxNode {
            name: name.to_string(),
            identifier: true,
            attrs: Vec::new(),
            parent,
            children: Vec::new(),
            span_start: 0,
            span_end: 0,
            insert_offset: 0,
        }
    }

    #[test]
    fn ancestors_walk_parent_links_to_the_root() {
        let mut arena = JsxArena::new();
        let root = arena.push(node("Form", None));
        let middle = arena.push(node("div", Some(root)));
        let leaf = arena.push(node("Button", Some(middle)));

        let chain: Vec<String> = arena
            .ancestors(leaf)
            .map(|id| arena.get(id).name.clone())
            .collect();
        assert_eq!(chain, vec!["div".to_string(), "Form".to_string()]);
        assert_eq!(arena.ancestors(root).count(), 0);
    }

    #[test]
    fn props_view_resolves_duplicates_last_wins() {
        let mut arena = JsxArena::new();
        let id = arena.push(node("Button", None));
        arena.get_mut(id).attrs.push(JsxAttr {
            name: "variant".to_string(),
            value: PropValue::Str("primary".to_string()),
        });
        arena.get_mut(id).attrs.push(JsxAttr {
            name: "variant".to_string(),
            value: PropValue::Str("danger".to_string()),
        });

        let props = arena.get(id).props();
        assert_eq!(props.str_value("variant"), Some("danger"));
    }
}
