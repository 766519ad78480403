//! Structural context analyzer for XML changelogs
//!
//! Scans the tag tokens preceding the cursor (`<name ...>`, `</name>`,
//! `<name ... />`) and maintains a stack of open element names. This is not
//! an XML parser: it tolerates mismatched and unterminated tags, which are
//! the normal state of a document mid-edit.

use std::collections::BTreeMap;

use crate::context::{
    ContextSnapshot, HierarchyEntry, ROOT_ELEMENT, StructuralAnalyzer, indentation_of_line,
};
use crate::cursor::{ResolvedCursor, leading_whitespace_width};

pub struct XmlAnalyzer;

impl StructuralAnalyzer for XmlAnalyzer {
    fn analyze(&self, text: &str, cursor: &ResolvedCursor) -> ContextSnapshot {
        let current_indentation = indentation_of_line(text, cursor.line);
        // Probed over the full document, not just the text before the
        // cursor: the root must not be offered again even when the cursor
        // sits above the existing root element.
        let has_root_element = text.contains(&format!("<{ROOT_ELEMENT}"));

        let before = blank_comments(&text[..cursor.offset]);

        if in_open_token(&before) {
            let mut snapshot = ContextSnapshot::at_root(has_root_element, current_indentation);
            snapshot.in_open_token = true;
            return snapshot;
        }

        let (active_tags, tag_indentations) = scan_tags(&before);

        ContextSnapshot {
            active_tags,
            tag_indentations,
            has_root_element,
            current_indentation,
            in_open_token: false,
        }
    }
}

/// Overwrite the interior of every terminated `<!-- -->` comment with
/// spaces, preserving newlines so line numbers and indentation are
/// unaffected. An unterminated trailing comment is left alone; its `<` then
/// reads as an open token and suppresses suggestions.
fn blank_comments(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find("<!--") {
        match rest[start..].find("-->") {
            Some(rel_end) => {
                let end = start + rel_end + 3;
                out.push_str(&rest[..start]);
                for c in rest[start..end].chars() {
                    out.push(if c == '\n' { '\n' } else { ' ' });
                }
                rest = &rest[end..];
            }
            None => break,
        }
    }
    out.push_str(rest);
    out
}

/// True if the text ends inside an unterminated `<...` token.
fn in_open_token(before: &str) -> bool {
    match before.rfind('<') {
        Some(i) => !before[i..].contains('>'),
        None => false,
    }
}

/// Scan all tag tokens left to right, maintaining the open-element stack.
fn scan_tags(before: &str) -> (Vec<String>, BTreeMap<String, HierarchyEntry>) {
    let mut stack: Vec<String> = Vec::new();
    let mut indentations: BTreeMap<String, HierarchyEntry> = BTreeMap::new();

    let mut pos = 0;
    while let Some(rel_open) = before[pos..].find('<') {
        let open = pos + rel_open;
        let Some(rel_close) = before[open..].find('>') else {
            break;
        };
        let close = open + rel_close;
        let token = &before[open + 1..close];
        pos = close + 1;

        // Declarations and processing instructions carry no structure.
        if token.starts_with('!') || token.starts_with('?') {
            continue;
        }

        if let Some(closing) = token.strip_prefix('/') {
            // Pop the most recently opened tag with this name; not
            // necessarily the top, to tolerate minor malformation. A failed
            // pop is a no-op. Recorded indentation is left untouched.
            let name = local_name(closing.trim());
            if let Some(idx) = stack.iter().rposition(|t| t == &name) {
                stack.remove(idx);
            }
            continue;
        }

        let self_closing = token.trim_end().ends_with('/');
        let name = local_name(tag_name(token));
        if name.is_empty() {
            continue;
        }

        let line_start = before[..open].rfind('\n').map(|i| i + 1).unwrap_or(0);
        let entry = HierarchyEntry {
            name: name.clone(),
            indentation: leading_whitespace_width(&before[line_start..]),
            line_number: before[..open].matches('\n').count(),
            is_list_item: false,
        };
        // Last write wins per name, so later siblings see the most recent
        // occurrence. Self-closing tags record indentation but never
        // enclose anything.
        indentations.insert(name.clone(), entry);
        if !self_closing {
            stack.push(name);
        }
    }

    (stack, indentations)
}

/// The element name of an opening-tag token: everything up to the first
/// whitespace or `/`.
fn tag_name(token: &str) -> &str {
    token
        .split(|c: char| c.is_whitespace() || c == '/')
        .next()
        .unwrap_or("")
}

/// Strip a namespace prefix: `dbchangelog:changeSet` becomes `changeSet`.
fn local_name(name: &str) -> String {
    match name.rsplit_once(':') {
        Some((_, local)) => local.to_string(),
        None => name.to_string(),
    }
}
