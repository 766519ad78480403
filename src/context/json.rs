//! Structural context analyzer for JSON changelogs
//!
//! Uses the same two-phase indentation algorithm as the YAML analyzer, with
//! keys recognized by the quoted-string-colon pattern (`"key":`) and no
//! list-item concept — array membership is not distinguished in the
//! hierarchy.
//!
//! This is intentionally approximate rather than a real JSON tokenizer: a
//! multi-line string value containing a `":` sequence can be misjudged as a
//! key. That is a documented limitation of the line-scan approach, accepted
//! for the sake of tolerating incomplete documents.

use std::collections::BTreeMap;

use crate::context::{
    ContextSnapshot, HierarchyEntry, ROOT_ELEMENT, StructuralAnalyzer, indentation_of_line,
};
use crate::cursor::{ResolvedCursor, leading_whitespace_width};

pub struct JsonAnalyzer;

impl StructuralAnalyzer for JsonAnalyzer {
    fn analyze(&self, text: &str, cursor: &ResolvedCursor) -> ContextSnapshot {
        let current_indentation = indentation_of_line(text, cursor.line);
        let has_root_element = text.contains(&format!("\"{ROOT_ELEMENT}\""));

        let mut hierarchy: Vec<HierarchyEntry> = Vec::new();
        for (line_number, line) in text.split('\n').enumerate().take(cursor.line + 1) {
            let Some(name) = detect_key(line) else {
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
                is_list_item: false,
            });
        }

        let mut active_tags = Vec::new();
        let mut tag_indentations = BTreeMap::new();
        for entry in hierarchy {
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

/// Detect a `"key":` pattern at the start of a line, skipping any leading
/// object/array punctuation (`{`, `[`, `,`), so `{ "changeSet": {` on one
/// line still registers.
fn detect_key(line: &str) -> Option<String> {
    let mut rest = line.trim_start_matches([' ', '\t']);
    while let Some(stripped) = rest.strip_prefix(['{', '[', ',']) {
        rest = stripped.trim_start_matches([' ', '\t']);
    }

    let body = rest.strip_prefix('"')?;
    let quote = body.find('"')?;
    let name = &body[..quote];
    if name.is_empty() {
        return None;
    }
    let after = body[quote + 1..].trim_start_matches([' ', '\t']);
    if !after.starts_with(':') {
        return None;
    }

    Some(name.to_string())
}
