//! Semantic classification rules.
//!
//! Seven classifiers, one per emitted dimension. Each is a total pure
//! function of `(family or name, props, parent context)`: a defined
//! default or None, never an error, never any state shared between calls.
//! Rules inside a classifier are first-match-wins decision lists.

#[cfg(feature = "napi")]
use napi_derive::napi;
use serde::{Deserialize, Serialize};

use crate::family::{self, ComponentFamily};
use crate::props::PropsMap;

// ═══════════════════════════════════════════════════════════════════════════════
// CLASSIFICATION RESULT
// ═══════════════════════════════════════════════════════════════════════════════

/// Semantic labels for one component instance. `role` and `purpose` are
/// always present; the rest are attached only when a rule produced them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "napi", napi(object))]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    pub role: String,
    pub purpose: String,
    pub variant: Option<String>,
    pub context: Option<String>,
    pub state: Option<String>,
    pub action_type: Option<String>,
    pub size: Option<String>,
}

/// Classify one component instance.
///
/// `name` is the library's exported component name, already resolved
/// through import provenance. `parent_context` is the context inherited
/// from the nearest qualifying ancestor, if any.
pub fn classify_component(
    name: &str,
    props: &PropsMap,
    parent_context: Option<&str>,
) -> ClassificationResult {
    let family = ComponentFamily::resolve(name);
    ClassificationResult {
        role: family::role_for(name),
        purpose: classify_purpose(family, props),
        variant: classify_variant(family, props),
        context: classify_context(name, props, parent_context),
        state: classify_state(family, props),
        action_type: classify_action_type(family, props),
        size: classify_size(family, props),
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// PURPOSE
// ═══════════════════════════════════════════════════════════════════════════════

/// Interaction props are consulted before family defaults; the final
/// fallback is "display", so every component gets a purpose.
pub fn classify_purpose(family: ComponentFamily, props: &PropsMap) -> String {
    match family {
        ComponentFamily::Button => {
            if props.has("href") {
                "navigation".to_string()
            } else {
                "action".to_string()
            }
        }
        ComponentFamily::Link => {
            // A link with a click handler and no destination acts as a button.
            if props.has("onClick") && !props.has("href") {
                "action".to_string()
            } else {
                "navigation".to_string()
            }
        }
        ComponentFamily::Card => {
            let clickable = card_is_clickable(props);
            let selectable = card_is_selectable(props);
            match (clickable, selectable) {
                (true, true) => "clickable and selectable".to_string(),
                (false, true) => "selectable".to_string(),
                (true, false) => "clickable".to_string(),
                (false, false) => "display".to_string(),
            }
        }
        ComponentFamily::Accordion => "disclosure".to_string(),
        ComponentFamily::Form => "form-container".to_string(),
        ComponentFamily::TextInput => "input".to_string(),
        ComponentFamily::Selection => "selection".to_string(),
        ComponentFamily::Menu => "navigation".to_string(),
        ComponentFamily::Table => "data-display".to_string(),
        ComponentFamily::Toolbar => "actions".to_string(),
        ComponentFamily::Alert => "notification".to_string(),
        ComponentFamily::Status => "status".to_string(),
        ComponentFamily::Modal
        | ComponentFamily::Drawer
        | ComponentFamily::Popover
        | ComponentFamily::Wizard => "overlay".to_string(),
        ComponentFamily::CardSection
        | ComponentFamily::AccordionSection
        | ComponentFamily::Avatar
        | ComponentFamily::Other => "display".to_string(),
    }
}

fn card_is_clickable(props: &PropsMap) -> bool {
    props.is_enabled("isClickable") || props.has("onClick")
}

fn card_is_selectable(props: &PropsMap) -> bool {
    props.is_enabled("isSelectable") || props.is_enabled("isSelected")
}

// ═══════════════════════════════════════════════════════════════════════════════
// VARIANT
// ═══════════════════════════════════════════════════════════════════════════════

/// Compound families assemble qualifier lists joined with `-`; everyone
/// else passes the literal `variant` prop through. Buttons with no
/// variant-bearing prop default to "primary".
pub fn classify_variant(family: ComponentFamily, props: &PropsMap) -> Option<String> {
    match family {
        ComponentFamily::Accordion => Some(accordion_variant(props)),
        ComponentFamily::Table => table_variant(props).or_else(|| pass_through_variant(family, props)),
        ComponentFamily::Drawer => drawer_variant(props).or_else(|| pass_through_variant(family, props)),
        _ => pass_through_variant(family, props),
    }
}

/// Accordions always carry a variant: expand mode first, then the border
/// qualifier, then the heading level when one is written as a literal.
fn accordion_variant(props: &PropsMap) -> String {
    let mut parts: Vec<&str> = Vec::new();
    if props.is_enabled("isSingleExpand") {
        parts.push("single-expand");
    } else {
        parts.push("multiple-expand");
    }
    if props.is_enabled("isBordered") {
        parts.push("bordered");
    }
    if let Some(level) = props.str_value("headingLevel") {
        parts.push(level);
    }
    parts.join("-")
}

fn table_variant(props: &PropsMap) -> Option<String> {
    let mut parts: Vec<&str> = Vec::new();
    if props.is_enabled("isStriped") {
        parts.push("striped");
    }
    if props.is_enabled("isBordered") {
        parts.push("bordered");
    }
    if props.is_enabled("isCompact") {
        parts.push("compact");
    }
    if parts.is_empty() {
        None
    } else {
        Some(parts.join("-"))
    }
}

fn drawer_variant(props: &PropsMap) -> Option<String> {
    let mut parts: Vec<&str> = Vec::new();
    if let Some(position) = props.str_value("position") {
        parts.push(position);
    }
    if props.is_enabled("isInline") {
        parts.push("inline");
    }
    if parts.is_empty() {
        None
    } else {
        Some(parts.join("-"))
    }
}

/// Literal `variant` pass-through with the link refinement. An unresolved
/// `variant` suppresses both pass-through and the button default; emitting
/// a guess would mislabel the rendered variant.
fn pass_through_variant(family: ComponentFamily, props: &PropsMap) -> Option<String> {
    if props.has("variant") {
        let value = props.str_value("variant")?;
        if value == "link" {
            if props.is_enabled("isInline") {
                return Some("inline-link".to_string());
            }
            if props.is_enabled("isDanger") {
                return Some("danger-link".to_string());
            }
        }
        return Some(value.to_string());
    }
    if family == ComponentFamily::Button {
        return Some("primary".to_string());
    }
    None
}

// ═══════════════════════════════════════════════════════════════════════════════
// CONTEXT
// ═══════════════════════════════════════════════════════════════════════════════

/// Explicit `context` prop, then the caller-supplied parent context, then
/// keywords in the component's own name. A supplied parent context always
/// beats keyword inference.
pub fn classify_context(
    name: &str,
    props: &PropsMap,
    parent_context: Option<&str>,
) -> Option<String> {
    if let Some(value) = props.str_value("context") {
        return Some(value.to_string());
    }
    if let Some(parent) = parent_context {
        return Some(parent.to_string());
    }
    family::context_keyword(name).map(|keyword| keyword.to_string())
}

// ═══════════════════════════════════════════════════════════════════════════════
// STATE
// ═══════════════════════════════════════════════════════════════════════════════

/// Explicit boolean props win over family defaults. Direction-sensitive
/// props (expanded, open, checked) require a literal polarity; an
/// unresolved value on those falls through to the next rule.
pub fn classify_state(family: ComponentFamily, props: &PropsMap) -> Option<String> {
    if props.is_enabled("isDisabled") || props.is_enabled("disabled") {
        return Some("disabled".to_string());
    }
    if props.is_enabled("isReadOnly") || props.is_enabled("readOnly") {
        return Some("readonly".to_string());
    }
    if props.is_enabled("isSelected") {
        return Some("selected".to_string());
    }
    if props.is_true("isExpanded") {
        return Some("expanded".to_string());
    }
    if props.is_explicit_false("isExpanded") {
        return Some("collapsed".to_string());
    }
    if props.is_true("isOpen") {
        return Some("open".to_string());
    }
    if props.is_explicit_false("isOpen") {
        return Some("closed".to_string());
    }
    if props.is_true("isChecked") {
        return Some("checked".to_string());
    }
    if props.is_explicit_false("isChecked") {
        return Some("unchecked".to_string());
    }

    match family {
        // A button that cannot be activated is effectively disabled.
        ComponentFamily::Button => {
            if props.has("onClick") || props.has("onPress") {
                Some("active".to_string())
            } else {
                Some("disabled".to_string())
            }
        }
        ComponentFamily::Card => {
            if card_is_clickable(props) || card_is_selectable(props) {
                None
            } else {
                Some("readonly".to_string())
            }
        }
        _ => None,
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// ACTION TYPE
// ═══════════════════════════════════════════════════════════════════════════════

/// Destructive intent is checked before navigation, which is checked
/// before per-family signals.
pub fn classify_action_type(family: ComponentFamily, props: &PropsMap) -> Option<String> {
    let danger_variant = matches!(props.str_value("variant"), Some("danger" | "destructive"));
    if danger_variant || props.is_enabled("isDanger") || props.is_enabled("isDestructive") {
        return Some("destructive".to_string());
    }
    if props.has("href") {
        return Some("navigation".to_string());
    }
    match family {
        ComponentFamily::Button => match props.str_value("type") {
            Some("submit") => Some("submit".to_string()),
            Some("reset") => Some("reset".to_string()),
            _ => None,
        },
        ComponentFamily::Alert => {
            if props.has("actionLinks") || props.has("onAction") {
                Some("actionable".to_string())
            } else {
                None
            }
        }
        _ => None,
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// SIZE
// ═══════════════════════════════════════════════════════════════════════════════

/// Avatar short codes normalize to full words; then the generic `size` and
/// `displaySize` literals pass through; then the density flags.
pub fn classify_size(family: ComponentFamily, props: &PropsMap) -> Option<String> {
    if family == ComponentFamily::Avatar {
        if let Some(size) = props.str_value("size") {
            let normalized = match size {
                "sm" => "small",
                "md" => "medium",
                "lg" => "large",
                "xl" => "extra-large",
                other => other,
            };
            return Some(normalized.to_string());
        }
    }
    if let Some(size) = props.str_value("size") {
        return Some(size.to_string());
    }
    if let Some(size) = props.str_value("displaySize") {
        return Some(size.to_string());
    }
    if props.is_enabled("isCompact") {
        return Some("compact".to_string());
    }
    if props.is_enabled("isLarge") {
        return Some("large".to_string());
    }
    None
}

// ═══════════════════════════════════════════════════════════════════════════════
// NAPI BINDINGS
// ═══════════════════════════════════════════════════════════════════════════════

#[cfg(feature = "napi")]
#[napi]
pub fn classify_component_native(
    name: String,
    props_json: String,
    parent_context: Option<String>,
) -> ClassificationResult {
    let props = match serde_json::from_str::<serde_json::Value>(&props_json) {
        Ok(value) => PropsMap::from_json(&value),
        Err(_) => PropsMap::new(),
    };
    classify_component(&name, &props, parent_context.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::props::PropValue;

    fn props(pairs: &[(&str, PropValue)]) -> PropsMap {
        let mut map = PropsMap::new();
        for (name, value) in pairs {
            map.insert(name, value.clone());
        }
        map
    }

    fn str_prop(value: &str) -> PropValue {
        PropValue::Str(value.to_string())
    }

    // ─── Purpose ───

    #[test]
    fn button_purpose_follows_interaction_props() {
        assert_eq!(classify_purpose(ComponentFamily::Button, &PropsMap::new()), "action");
        assert_eq!(
            classify_purpose(
                ComponentFamily::Button,
                &props(&[("href", str_prop("/docs"))])
            ),
            "navigation"
        );
    }

    #[test]
    fn link_with_handler_but_no_destination_is_an_action() {
        assert_eq!(
            classify_purpose(ComponentFamily::Link, &props(&[("onClick", PropValue::Unresolved)])),
            "action"
        );
        assert_eq!(
            classify_purpose(
                ComponentFamily::Link,
                &props(&[("onClick", PropValue::Unresolved), ("href", str_prop("/a"))])
            ),
            "navigation"
        );
        assert_eq!(classify_purpose(ComponentFamily::Link, &PropsMap::new()), "navigation");
    }

    #[test]
    fn card_purpose_covers_the_interaction_grid() {
        assert_eq!(classify_purpose(ComponentFamily::Card, &PropsMap::new()), "display");
        assert_eq!(
            classify_purpose(ComponentFamily::Card, &props(&[("isClickable", PropValue::Bool(true))])),
            "clickable"
        );
        assert_eq!(
            classify_purpose(ComponentFamily::Card, &props(&[("isSelectable", PropValue::Bool(true))])),
            "selectable"
        );
        assert_eq!(
            classify_purpose(
                ComponentFamily::Card,
                &props(&[
                    ("isClickable", PropValue::Bool(true)),
                    ("isSelectable", PropValue::Bool(true)),
                ])
            ),
            "clickable and selectable"
        );
        // Explicit false disables the capability.
        assert_eq!(
            classify_purpose(ComponentFamily::Card, &props(&[("isClickable", PropValue::Bool(false))])),
            "display"
        );
        // Unresolved still counts as enabled.
        assert_eq!(
            classify_purpose(ComponentFamily::Card, &props(&[("isClickable", PropValue::Unresolved)])),
            "clickable"
        );
    }

    #[test]
    fn family_purposes_are_total() {
        assert_eq!(classify_purpose(ComponentFamily::Form, &PropsMap::new()), "form-container");
        assert_eq!(classify_purpose(ComponentFamily::Modal, &PropsMap::new()), "overlay");
        assert_eq!(classify_purpose(ComponentFamily::Drawer, &PropsMap::new()), "overlay");
        assert_eq!(classify_purpose(ComponentFamily::Table, &PropsMap::new()), "data-display");
        assert_eq!(classify_purpose(ComponentFamily::Other, &PropsMap::new()), "display");
    }

    // ─── Variant ───

    #[test]
    fn variant_literal_passes_through() {
        let result = classify_component("Button", &props(&[("variant", str_prop("danger"))]), None);
        assert_eq!(result.variant.as_deref(), Some("danger"));
    }

    #[test]
    fn button_without_variant_defaults_to_primary() {
        let result = classify_component("Button", &PropsMap::new(), None);
        assert_eq!(result.variant.as_deref(), Some("primary"));
    }

    #[test]
    fn unresolved_variant_suppresses_the_button_default() {
        let result = classify_component("Button", &props(&[("variant", PropValue::Unresolved)]), None);
        assert_eq!(result.variant, None);
    }

    #[test]
    fn link_variant_refines_with_companion_props() {
        assert_eq!(
            classify_variant(
                ComponentFamily::Button,
                &props(&[("variant", str_prop("link")), ("isInline", PropValue::Bool(true))])
            )
            .as_deref(),
            Some("inline-link")
        );
        assert_eq!(
            classify_variant(
                ComponentFamily::Button,
                &props(&[("variant", str_prop("link")), ("isDanger", PropValue::Bool(true))])
            )
            .as_deref(),
            Some("danger-link")
        );
        assert_eq!(
            classify_variant(ComponentFamily::Button, &props(&[("variant", str_prop("link"))]))
                .as_deref(),
            Some("link")
        );
    }

    #[test]
    fn accordion_variant_is_always_compound() {
        assert_eq!(
            classify_variant(ComponentFamily::Accordion, &PropsMap::new()).as_deref(),
            Some("multiple-expand")
        );
        assert_eq!(
            classify_variant(
                ComponentFamily::Accordion,
                &props(&[("isSingleExpand", PropValue::Bool(true))])
            )
            .as_deref(),
            Some("single-expand")
        );
        assert_eq!(
            classify_variant(
                ComponentFamily::Accordion,
                &props(&[
                    ("isBordered", PropValue::Bool(true)),
                    ("headingLevel", str_prop("h3")),
                ])
            )
            .as_deref(),
            Some("multiple-expand-bordered-h3")
        );
    }

    #[test]
    fn table_and_drawer_build_their_own_compounds() {
        assert_eq!(
            classify_variant(
                ComponentFamily::Table,
                &props(&[
                    ("isStriped", PropValue::Bool(true)),
                    ("isCompact", PropValue::Bool(true)),
                ])
            )
            .as_deref(),
            Some("striped-compact")
        );
        assert_eq!(classify_variant(ComponentFamily::Table, &PropsMap::new()), None);
        assert_eq!(
            classify_variant(
                ComponentFamily::Drawer,
                &props(&[("position", str_prop("left")), ("isInline", PropValue::Bool(true))])
            )
            .as_deref(),
            Some("left-inline")
        );
    }

    // ─── Context ───

    #[test]
    fn context_prop_beats_parent_beats_name() {
        let explicit = props(&[("context", str_prop("sidebar"))]);
        assert_eq!(
            classify_context("TableRow", &explicit, Some("form")).as_deref(),
            Some("sidebar")
        );
        assert_eq!(
            classify_context("TableRow", &PropsMap::new(), Some("form")).as_deref(),
            Some("form")
        );
        assert_eq!(
            classify_context("TableRow", &PropsMap::new(), None).as_deref(),
            Some("table")
        );
        assert_eq!(classify_context("Button", &PropsMap::new(), None), None);
    }

    // ─── State ───

    #[test]
    fn explicit_state_props_win_over_family_defaults() {
        assert_eq!(
            classify_state(
                ComponentFamily::Button,
                &props(&[
                    ("isDisabled", PropValue::Bool(true)),
                    ("onClick", PropValue::Unresolved),
                ])
            )
            .as_deref(),
            Some("disabled")
        );
    }

    #[test]
    fn direction_sensitive_props_respect_polarity() {
        assert_eq!(
            classify_state(ComponentFamily::Other, &props(&[("isExpanded", PropValue::Bool(true))]))
                .as_deref(),
            Some("expanded")
        );
        assert_eq!(
            classify_state(ComponentFamily::Other, &props(&[("isExpanded", PropValue::Bool(false))]))
                .as_deref(),
            Some("collapsed")
        );
        // Unresolved polarity emits nothing rather than a guess.
        assert_eq!(
            classify_state(ComponentFamily::Other, &props(&[("isExpanded", PropValue::Unresolved)])),
            None
        );
        assert_eq!(
            classify_state(ComponentFamily::Other, &props(&[("isOpen", PropValue::Bool(false))]))
                .as_deref(),
            Some("closed")
        );
        assert_eq!(
            classify_state(ComponentFamily::Other, &props(&[("isChecked", PropValue::Bool(true))]))
                .as_deref(),
            Some("checked")
        );
    }

    #[test]
    fn button_state_depends_on_handlers() {
        assert_eq!(
            classify_state(ComponentFamily::Button, &props(&[("onClick", PropValue::Unresolved)]))
                .as_deref(),
            Some("active")
        );
        assert_eq!(
            classify_state(ComponentFamily::Button, &PropsMap::new()).as_deref(),
            Some("disabled")
        );
    }

    #[test]
    fn card_state_reflects_interactivity() {
        assert_eq!(
            classify_state(ComponentFamily::Card, &PropsMap::new()).as_deref(),
            Some("readonly")
        );
        assert_eq!(
            classify_state(ComponentFamily::Card, &props(&[("isClickable", PropValue::Bool(true))])),
            None
        );
    }

    // ─── Action type ───

    #[test]
    fn destructive_wins_over_navigation() {
        let both = props(&[("variant", str_prop("danger")), ("href", str_prop("/rm"))]);
        assert_eq!(
            classify_action_type(ComponentFamily::Button, &both).as_deref(),
            Some("destructive")
        );
        assert_eq!(
            classify_action_type(ComponentFamily::Button, &props(&[("href", str_prop("/a"))]))
                .as_deref(),
            Some("navigation")
        );
        assert_eq!(
            classify_action_type(
                ComponentFamily::Link,
                &props(&[("isDanger", PropValue::Bool(true))])
            )
            .as_deref(),
            Some("destructive")
        );
    }

    #[test]
    fn form_buttons_and_alert_links_have_action_types() {
        assert_eq!(
            classify_action_type(ComponentFamily::Button, &props(&[("type", str_prop("submit"))]))
                .as_deref(),
            Some("submit")
        );
        assert_eq!(
            classify_action_type(ComponentFamily::Button, &props(&[("type", str_prop("reset"))]))
                .as_deref(),
            Some("reset")
        );
        assert_eq!(
            classify_action_type(
                ComponentFamily::Alert,
                &props(&[("actionLinks", PropValue::Unresolved)])
            )
            .as_deref(),
            Some("actionable")
        );
        assert_eq!(classify_action_type(ComponentFamily::Alert, &PropsMap::new()), None);
    }

    // ─── Size ───

    #[test]
    fn avatar_short_codes_expand_to_words() {
        for (code, word) in [("sm", "small"), ("md", "medium"), ("lg", "large"), ("xl", "extra-large")] {
            assert_eq!(
                classify_size(ComponentFamily::Avatar, &props(&[("size", str_prop(code))]))
                    .as_deref(),
                Some(word)
            );
        }
        // Unknown literals pass through untouched.
        assert_eq!(
            classify_size(ComponentFamily::Avatar, &props(&[("size", str_prop("xxl"))]))
                .as_deref(),
            Some("xxl")
        );
    }

    #[test]
    fn generic_size_props_and_density_flags() {
        assert_eq!(
            classify_size(ComponentFamily::Button, &props(&[("size", str_prop("small"))]))
                .as_deref(),
            Some("small")
        );
        assert_eq!(
            classify_size(ComponentFamily::Modal, &props(&[("displaySize", str_prop("wide"))]))
                .as_deref(),
            Some("wide")
        );
        assert_eq!(
            classify_size(ComponentFamily::Table, &props(&[("isCompact", PropValue::Bool(true))]))
                .as_deref(),
            Some("compact")
        );
        assert_eq!(
            classify_size(ComponentFamily::Button, &props(&[("isLarge", PropValue::Bool(true))]))
                .as_deref(),
            Some("large")
        );
        assert_eq!(classify_size(ComponentFamily::Button, &PropsMap::new()), None);
    }

    // ─── Whole-result properties ───

    #[test]
    fn classification_is_deterministic() {
        let p = props(&[
            ("variant", str_prop("danger")),
            ("onClick", PropValue::Unresolved),
            ("size", str_prop("small")),
        ]);
        let first = classify_component("Button", &p, Some("toolbar"));
        let second = classify_component("Button", &p, Some("toolbar"));
        assert_eq!(first, second);
    }

    #[test]
    fn every_name_gets_a_role_and_purpose() {
        for name in ["Button", "Zorb", "QuantumFlux", "X"] {
            let result = classify_component(name, &PropsMap::new(), None);
            assert!(!result.role.is_empty());
            assert!(!result.purpose.is_empty());
        }
    }
}
