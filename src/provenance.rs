//! Import provenance for annotation eligibility.
//!
//! Only components that trace back to a recognized package are annotated;
//! everything else is someone else's API surface and stays untouched.
//! Aliased named imports classify under their original exported name, so
//! `import { Button as Btn }` still reads as a button.

use lazy_static::lazy_static;
use std::collections::{HashMap, HashSet};

// ═══════════════════════════════════════════════════════════════════════════════
// IMPORT TABLE
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportKind {
    Named,
    Default,
    Namespace,
}

/// Where one local identifier came from.
#[derive(Debug, Clone)]
pub struct ImportRecord {
    pub package: String,
    /// Original exported name. Equal to the local name for default and
    /// namespace imports, which have no rename to undo.
    pub exported: String,
    pub kind: ImportKind,
}

/// Per-file table of imported identifiers, keyed by local name. Built
/// while the file's import declarations are collected, read-only after.
#[derive(Debug, Clone, Default)]
pub struct ImportProvenance {
    by_local: HashMap<String, ImportRecord>,
}

impl ImportProvenance {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_named(&mut self, local: &str, exported: &str, package: &str) {
        self.by_local.insert(
            local.to_string(),
            ImportRecord {
                package: package.to_string(),
                exported: exported.to_string(),
                kind: ImportKind::Named,
            },
        );
    }

    pub fn record_default(&mut self, local: &str, package: &str) {
        self.by_local.insert(
            local.to_string(),
            ImportRecord {
                package: package.to_string(),
                exported: local.to_string(),
                kind: ImportKind::Default,
            },
        );
    }

    pub fn record_namespace(&mut self, local: &str, package: &str) {
        self.by_local.insert(
            local.to_string(),
            ImportRecord {
                package: package.to_string(),
                exported: local.to_string(),
                kind: ImportKind::Namespace,
            },
        );
    }

    pub fn lookup(&self, local: &str) -> Option<&ImportRecord> {
        self.by_local.get(local)
    }

    pub fn len(&self) -> usize {
        self.by_local.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_local.is_empty()
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// LIBRARY CATALOG
// ═══════════════════════════════════════════════════════════════════════════════

lazy_static! {
    /// Bare component names accepted by the default-import heuristic
    /// (`import Button from "./Button"` local wrapper modules). Matching
    /// is case-insensitive and deliberately best-effort: a name outside
    /// this set is simply not annotated.
    static ref COMMON_COMPONENT_NAMES: HashSet<&'static str> = {
        let mut s = HashSet::new();
        for name in [
            "accordion", "alert", "avatar", "badge", "breadcrumb", "button",
            "card", "checkbox", "drawer", "dropdown", "form", "link", "menu",
            "modal", "popover", "progressbar", "radio", "select", "spinner",
            "switch", "table", "tabs", "textinput", "toolbar", "tooltip",
            "wizard",
        ] {
            s.insert(name);
        }
        s
    };
}

/// The recognized package set. Swappable in tests and by hosts that
/// publish the design system under a different scope.
#[derive(Debug, Clone)]
pub struct LibraryCatalog {
    pub packages: Vec<String>,
}

impl Default for LibraryCatalog {
    fn default() -> Self {
        LibraryCatalog {
            packages: vec!["@quill-ui/react".to_string(), "@quill-ui/core".to_string()],
        }
    }
}

impl LibraryCatalog {
    pub fn with_packages(packages: Vec<String>) -> Self {
        LibraryCatalog { packages }
    }

    /// Substring match, so deep imports ("@quill-ui/react/button") and
    /// mono-repo relative paths that embed the package name keep their
    /// provenance.
    pub fn is_recognized_package(&self, source: &str) -> bool {
        self.packages.iter().any(|package| source.contains(package.as_str()))
    }

    /// Resolve a local tag name to the exported name it classifies under,
    /// or None when the component is not ours.
    pub fn resolve(&self, provenance: &ImportProvenance, local: &str) -> Option<String> {
        let record = provenance.lookup(local)?;
        if self.is_recognized_package(&record.package) {
            return Some(record.exported.clone());
        }
        if record.kind == ImportKind::Default
            && COMMON_COMPONENT_NAMES.contains(local.to_lowercase().as_str())
        {
            return Some(local.to_string());
        }
        None
    }
}
