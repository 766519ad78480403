//! Structural context analyzer for YAML changelogs
//!
//! YAML has no closing delimiter, so ancestry is inferred purely from
//! relative indentation. The analyzer works in two phases: first it builds
//! the hierarchy of keys seen from the top of the document through the
//! cursor's line, then it keeps only the entries indented strictly less
//! than the cursor — the cursor's own (still being typed) indentation
//! decides which of the already-seen keys still contain it.

use std::collections::BTreeMap;

use crate::context::{
    ContextSnapshot, HierarchyEntry, ROOT_ELEMENT, StructuralAnalyzer, indentation_of_line,
};
use crate::cursor::{ResolvedCursor, leading_whitespace_width};

pub struct YamlAnalyzer;

impl StructuralAnalyzer for YamlAnalyzer {
    fn analyze(&self, text: &str, cursor: &ResolvedCursor) -> ContextSnapshot {
        let current_indentation = indentation_of_line(text, cursor.line);
        let has_root_element = text.contains(&format!("{ROOT_ELEMENT}:"));

        let hierarchy = build_hierarchy(text, cursor.line);

        let mut active_tags = Vec::new();
        let mut tag_indentations = BTreeMap::new();
        for entry in hierarchy {
            // An entry at the same or deeper indentation than the cursor is
            // a sibling or descendant, not an ancestor.
            if entry.indentation < current_indentation {
                active_tags.push(entry.name.clone());
                tag_indentations.insert(entry.name.clone(), entry);
            }
        }

        ContextSnapshot {
            active_tags,
            tag_indentations,
            has_root_element,
            current_indentation,
            in_open_token: false,
        }
    }
}

/// Walk every line from the document start through `cursor_line`
/// (inclusive), keeping the key hierarchy consistent with indentation:
/// before a new key is pushed, every trailing entry at the same or deeper
/// indentation is popped, since it cannot be the new key's ancestor.
fn build_hierarchy(text: &str, cursor_line: usize) -> Vec<HierarchyEntry> {
    let mut hierarchy: Vec<HierarchyEntry> = Vec::new();

    for (line_number, line) in text.split('\n').enumerate().take(cursor_line + 1) {
        let trimmed = line.trim_start_matches([' ', '\t']);
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let Some((name, is_list_item)) = detect_key(trimmed) else {
            continue;
        };

        let indentation = leading_whitespace_width(line);
        while hierarchy
            .last()
            .is_some_and(|e| e.indentation >= indentation)
        {
            hierarchy.pop();
        }
        hierarchy.push(HierarchyEntry {
            name,
            indentation,
            line_number,
            is_list_item,
        });
    }

    hierarchy
}

/// Detect a mapping key on an already-trimmed line: a plain `key:` or a
/// sequence entry `- key:`. The key must be a bare scalar and the colon
/// must end the line or be followed by whitespace, so URLs and flow values
/// like `a:b` do not register.
fn detect_key(trimmed: &str) -> Option<(String, bool)> {
    let (rest, is_list_item) = match trimmed.strip_prefix('-') {
        Some(after_dash) => (after_dash.trim_start_matches([' ', '\t']), true),
        None => (trimmed, false),
    };

    let colon = rest.find(':')?;
    let name = &rest[..colon];
    if name.is_empty() || !name.chars().all(is_bare_key_char) {
        return None;
    }
    let after = &rest[colon + 1..];
    if !(after.is_empty() || after.starts_with(' ') || after.starts_with('\t')) {
        return None;
    }

    Some((name.to_string(), is_list_item))
}

fn is_bare_key_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::CursorTarget;

    fn analyze_at(text: &str, line: usize, character: usize) -> ContextSnapshot {
        let cursor = CursorTarget::LineColumn { line, character }.resolve(text);
        YamlAnalyzer.analyze(text, &cursor)
    }

    #[test]
    fn test_empty_document_is_root() {
        let snapshot = analyze_at("", 0, 0);
        assert!(snapshot.is_root());
        assert!(!snapshot.has_root_element);
    }

    #[test]
    fn test_changeset_hierarchy() {
        let text = "databaseChangeLog:\n  - changeSet:\n      id: 1\n      ";
        let snapshot = analyze_at(text, 3, 6);
        assert_eq!(snapshot.active_tags, vec!["databaseChangeLog", "changeSet"]);
        assert_eq!(snapshot.current_indentation, 6);
        let change_set = &snapshot.tag_indentations["changeSet"];
        assert_eq!(change_set.indentation, 2);
        assert!(change_set.is_list_item);
        assert!(!snapshot.tag_indentations["databaseChangeLog"].is_list_item);
    }

    #[test]
    fn test_sibling_at_same_indentation_not_ancestor() {
        // Cursor at indentation 2: the changeSet at 2 is a sibling.
        let text = "databaseChangeLog:\n  - changeSet:\n      id: 1\n  ";
        let snapshot = analyze_at(text, 3, 2);
        assert_eq!(snapshot.active_tags, vec!["databaseChangeLog"]);
    }

    #[test]
    fn test_dedent_pops_deeper_keys() {
        let text = "databaseChangeLog:\n  - changeSet:\n      id: 1\n  - changeSet:\n      ";
        let snapshot = analyze_at(text, 4, 6);
        assert_eq!(snapshot.active_tags, vec!["databaseChangeLog", "changeSet"]);
        assert_eq!(snapshot.tag_indentations["changeSet"].line_number, 3);
    }

    #[test]
    fn test_comment_lines_skipped() {
        let text = "databaseChangeLog:\n  # changeSet: not real\n  ";
        let snapshot = analyze_at(text, 2, 2);
        assert_eq!(snapshot.active_tags, vec!["databaseChangeLog"]);
        assert!(!snapshot.tag_indentations.contains_key("changeSet"));
    }

    #[test]
    fn test_blank_lines_skipped() {
        let text = "databaseChangeLog:\n\n\n  ";
        let snapshot = analyze_at(text, 3, 2);
        assert_eq!(snapshot.active_tags, vec!["databaseChangeLog"]);
    }

    #[test]
    fn test_lines_after_cursor_ignored() {
        let text = "databaseChangeLog:\n  \n  - changeSet:\n      id: 1\n";
        let snapshot = analyze_at(text, 1, 2);
        assert_eq!(snapshot.active_tags, vec!["databaseChangeLog"]);
        assert!(!snapshot.tag_indentations.contains_key("changeSet"));
    }

    #[test]
    fn test_has_root_element_document_wide() {
        let text = "\ndatabaseChangeLog:\n";
        let snapshot = analyze_at(text, 0, 0);
        assert!(snapshot.is_root());
        assert!(snapshot.has_root_element);
    }

    #[test]
    fn test_detect_key_plain() {
        assert_eq!(detect_key("createTable:"), Some(("createTable".to_string(), false)));
        assert_eq!(detect_key("id: 1"), Some(("id".to_string(), false)));
    }

    #[test]
    fn test_detect_key_list_item() {
        assert_eq!(detect_key("- changeSet:"), Some(("changeSet".to_string(), true)));
        assert_eq!(detect_key("-   column:"), Some(("column".to_string(), true)));
    }

    #[test]
    fn test_detect_key_rejects_non_keys() {
        assert_eq!(detect_key("- plain scalar"), None);
        assert_eq!(detect_key("http://example.com"), None);
        assert_eq!(detect_key(": nothing"), None);
        assert_eq!(detect_key("\"quoted\": 1"), None);
        assert_eq!(detect_key("a:b"), None);
    }

    #[test]
    fn test_key_on_cursor_line_is_not_own_ancestor() {
        // The cursor sits at the end of the key it is typing; the key's
        // indentation equals the cursor's, so it is filtered out.
        let text = "databaseChangeLog:\n  - changeSet:";
        let snapshot = analyze_at(text, 1, 15);
        assert_eq!(snapshot.active_tags, vec!["databaseChangeLog"]);
    }

    #[test]
    fn test_deeper_descendant_not_ancestor() {
        // id at 6 is deeper than the cursor at 4 and must not appear.
        let text = "databaseChangeLog:\n  - changeSet:\n      id: 1\n    ";
        let snapshot = analyze_at(text, 3, 4);
        assert_eq!(snapshot.active_tags, vec!["databaseChangeLog", "changeSet"]);
        assert!(!snapshot.tag_indentations.contains_key("id"));
    }
}
