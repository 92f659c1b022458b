//! Attribute splicing into the original source text.
//!
//! Edits are insertion-only and keyed by byte offset into the unmodified
//! input. Applying them back-to-front keeps every offset valid, and
//! nothing outside the inserted spans is touched. Zero insertions returns
//! the input unchanged, which is what makes a second pass byte-identical.

// ═══════════════════════════════════════════════════════════════════════════════
// INSERTIONS
// ═══════════════════════════════════════════════════════════════════════════════

/// One pending text insertion at a byte offset of the original source.
#[derive(Debug, Clone)]
pub struct Insertion {
    pub offset: u32,
    pub text: String,
}

/// Render appended attributes as ` name="value"` runs, ready to splice
/// directly after an existing attribute or tag name.
pub fn render_attrs(attrs: &[(String, String)]) -> String {
    let mut out = String::new();
    for (name, value) in attrs {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&escape_attr_value(value));
        out.push('"');
    }
    out
}

/// Minimal escaping for double-quoted JSX attribute values. Values pass
/// through otherwise untouched so emitted literals match classifier
/// output exactly.
fn escape_attr_value(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Apply insertions to `source`. Offsets always refer to the original
/// text; sorting descending keeps them stable while splicing.
pub fn apply_insertions(source: &str, mut insertions: Vec<Insertion>) -> String {
    if insertions.is_empty() {
        return source.to_string();
    }
    insertions.sort_by(|a, b| b.offset.cmp(&a.offset));
    let mut result = source.to_string();
    for insertion in insertions {
        let at = insertion.offset as usize;
        result.replace_range(at..at, &insertion.text);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(n, v)| (n.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn attrs_render_space_separated_and_quoted() {
        let rendered = render_attrs(&pairs(&[
            ("data-role", "button"),
            ("data-purpose", "action"),
        ]));
        assert_eq!(rendered, r#" data-role="button" data-purpose="action""#);
    }

    #[test]
    fn quotes_and_ampersands_are_escaped() {
        let rendered = render_attrs(&pairs(&[("data-context", r#"a "b" & c"#)]));
        assert_eq!(rendered, r#" data-context="a &quot;b&quot; &amp; c""#);
    }

    #[test]
    fn insertions_apply_at_original_offsets() {
        let source = "<Button><Card>";
        let out = apply_insertions(
            source,
            vec![
                Insertion {
                    offset: 7,
                    text: " data-role=\"button\"".to_string(),
                },
                Insertion {
                    offset: 13,
                    text: " data-role=\"card\"".to_string(),
                },
            ],
        );
        assert_eq!(out, "<Button data-role=\"button\"><Card data-role=\"card\">");
    }

    #[test]
    fn application_order_does_not_matter() {
        let source = "abcdef";
        let forward = vec![
            Insertion { offset: 1, text: "X".to_string() },
            Insertion { offset: 4, text: "Y".to_string() },
        ];
        let reverse = vec![
            Insertion { offset: 4, text: "Y".to_string() },
            Insertion { offset: 1, text: "X".to_string() },
        ];
        assert_eq!(apply_insertions(source, forward), "aXbcdYef");
        assert_eq!(apply_insertions(source, reverse), "aXbcdYef");
    }

    #[test]
    fn no_insertions_returns_the_source_verbatim() {
        let source = "const x = <div/>;\n";
        assert_eq!(apply_insertions(source, Vec::new()), source);
    }
}
