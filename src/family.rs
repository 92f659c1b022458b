//! Component family resolution and the role catalog.
//!
//! A component name is resolved to a [`ComponentFamily`] exactly once per
//! node; every classifier then matches on the family instead of re-probing
//! the name. Keeps the recognized set auditable and the match arms
//! exhaustiveness-checked by the compiler.

use lazy_static::lazy_static;
use std::collections::HashMap;

// ═══════════════════════════════════════════════════════════════════════════════
// COMPONENT FAMILIES
// ═══════════════════════════════════════════════════════════════════════════════

/// Closed set of families with dedicated classification rules. Names that
/// match nothing land in `Other`, which still gets a role and a purpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentFamily {
    Accordion,
    AccordionSection,
    Card,
    CardSection,
    Button,
    Link,
    Table,
    Menu,
    Toolbar,
    Form,
    TextInput,
    Selection,
    Alert,
    Status,
    Avatar,
    Modal,
    Drawer,
    Popover,
    Wizard,
    Other,
}

const CARD_SECTION_MARKERS: [&str; 6] = ["body", "header", "footer", "title", "media", "section"];
const ACCORDION_SECTION_MARKERS: [&str; 4] = ["item", "header", "panel", "content"];

impl ComponentFamily {
    /// Resolve a component name to its family. Matching is case-insensitive
    /// and ordered: earlier checks win when a name contains several
    /// keywords, so "ToolbarButton" is a button and "DataTableTabs" is a
    /// table rather than tab navigation.
    pub fn resolve(name: &str) -> ComponentFamily {
        let lower = name.to_lowercase();

        if lower.contains("accordion") {
            if ACCORDION_SECTION_MARKERS.iter().any(|m| lower.contains(m)) {
                return ComponentFamily::AccordionSection;
            }
            return ComponentFamily::Accordion;
        }
        if lower.contains("card") {
            if CARD_SECTION_MARKERS.iter().any(|m| lower.contains(m)) {
                return ComponentFamily::CardSection;
            }
            return ComponentFamily::Card;
        }
        if lower.contains("button") {
            return ComponentFamily::Button;
        }
        if lower.contains("link") {
            return ComponentFamily::Link;
        }
        // "table" must precede "tab": every table name contains it.
        if lower.contains("table") {
            return ComponentFamily::Table;
        }
        if lower.contains("menu")
            || lower.contains("nav")
            || lower.contains("breadcrumb")
            || lower.contains("tab")
            || lower.contains("pagination")
        {
            return ComponentFamily::Menu;
        }
        if lower.contains("toolbar") {
            return ComponentFamily::Toolbar;
        }
        if lower.contains("form") || lower.contains("fieldset") {
            return ComponentFamily::Form;
        }
        if lower.contains("input") || lower.contains("textarea") {
            return ComponentFamily::TextInput;
        }
        if lower.contains("checkbox")
            || lower.contains("radio")
            || lower.contains("switch")
            || lower.contains("select")
            || lower.contains("dropdown")
        {
            return ComponentFamily::Selection;
        }
        if lower.contains("alert") || lower.contains("toast") {
            return ComponentFamily::Alert;
        }
        if lower.contains("badge")
            || lower.contains("progress")
            || lower.contains("spinner")
            || lower.contains("skeleton")
        {
            return ComponentFamily::Status;
        }
        if lower.contains("avatar") {
            return ComponentFamily::Avatar;
        }
        if lower.contains("modal") || lower.contains("dialog") {
            return ComponentFamily::Modal;
        }
        if lower.contains("drawer") {
            return ComponentFamily::Drawer;
        }
        if lower.contains("popover") || lower.contains("tooltip") {
            return ComponentFamily::Popover;
        }
        if lower.contains("wizard") {
            return ComponentFamily::Wizard;
        }
        ComponentFamily::Other
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// ROLE CATALOG
// Lower-cased component name -> emitted role
// ═══════════════════════════════════════════════════════════════════════════════

lazy_static! {
    static ref ROLE_CATALOG: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert("button", "button");
        m.insert("iconbutton", "icon-button");
        m.insert("togglebutton", "toggle-button");
        m.insert("buttongroup", "button-group");
        m.insert("link", "link");
        m.insert("navlink", "nav-link");
        m.insert("card", "card");
        m.insert("cardheader", "card-header");
        m.insert("cardbody", "card-body");
        m.insert("cardfooter", "card-footer");
        m.insert("cardtitle", "card-title");
        m.insert("cardmedia", "card-media");
        m.insert("accordion", "accordion");
        m.insert("accordionitem", "accordion-item");
        m.insert("accordionheader", "accordion-header");
        m.insert("accordionpanel", "accordion-panel");
        m.insert("form", "form");
        m.insert("formgroup", "form-group");
        m.insert("formfield", "form-field");
        m.insert("formlabel", "form-label");
        m.insert("fieldset", "fieldset");
        m.insert("textinput", "text-input");
        m.insert("textarea", "text-area");
        m.insert("searchinput", "search-input");
        m.insert("numberinput", "number-input");
        m.insert("checkbox", "checkbox");
        m.insert("radio", "radio");
        m.insert("radiogroup", "radio-group");
        m.insert("switch", "switch");
        m.insert("select", "select");
        m.insert("multiselect", "multi-select");
        m.insert("dropdown", "dropdown");
        m.insert("dropdownitem", "dropdown-item");
        m.insert("menu", "menu");
        m.insert("menuitem", "menu-item");
        m.insert("navbar", "navbar");
        m.insert("navitem", "nav-item");
        m.insert("breadcrumb", "breadcrumb");
        m.insert("breadcrumbitem", "breadcrumb-item");
        m.insert("tabs", "tabs");
        m.insert("tab", "tab");
        m.insert("tabpanel", "tab-panel");
        m.insert("pagination", "pagination");
        m.insert("table", "table");
        m.insert("datatable", "data-table");
        m.insert("tablerow", "table-row");
        m.insert("tablecell", "table-cell");
        m.insert("tableheader", "table-header");
        m.insert("toolbar", "toolbar");
        m.insert("toolbarbutton", "toolbar-button");
        m.insert("alert", "alert");
        m.insert("toast", "toast");
        m.insert("badge", "badge");
        m.insert("progressbar", "progress-bar");
        m.insert("spinner", "spinner");
        m.insert("skeleton", "skeleton");
        m.insert("avatar", "avatar");
        m.insert("avatargroup", "avatar-group");
        m.insert("modal", "modal");
        m.insert("dialog", "dialog");
        m.insert("drawer", "drawer");
        m.insert("popover", "popover");
        m.insert("tooltip", "tooltip");
        m.insert("wizard", "wizard");
        m.insert("wizardstep", "wizard-step");
        m
    };
}

/// Role for a component name. Total: names missing from the catalog fall
/// back to the lower-cased name itself.
pub fn role_for(name: &str) -> String {
    let lower = name.to_lowercase();
    match ROLE_CATALOG.get(lower.as_str()) {
        Some(role) => (*role).to_string(),
        None => lower,
    }
}

/// Context inferred from the component's own name. Ordered like family
/// resolution: "table" before "tab", "toolbar" checked before the
/// navigation keywords so toolbar children read as toolbar content.
pub fn context_keyword(name: &str) -> Option<&'static str> {
    let lower = name.to_lowercase();
    if lower.contains("table") {
        return Some("table");
    }
    if lower.contains("form") || lower.contains("fieldset") {
        return Some("form");
    }
    if lower.contains("modal") || lower.contains("dialog") {
        return Some("modal");
    }
    if lower.contains("toolbar") {
        return Some("toolbar");
    }
    if lower.contains("nav")
        || lower.contains("menu")
        || lower.contains("breadcrumb")
        || lower.contains("tab")
        || lower.contains("pagination")
    {
        return Some("navigation");
    }
    None
}
