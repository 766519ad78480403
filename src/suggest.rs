//! Suggestion filter
//!
//! Decides which rule-table elements are admissible at a structural
//! context. Pure function of its inputs: singleton-root, ancestor-allow,
//! ancestor-forbid, and exact-indentation constraints, applied to every
//! rule in declaration order. There is no ranking beyond admit/reject.

use tracing::debug;

use crate::context::{ContextSnapshot, HierarchyEntry};
use crate::rules::{IndentationRule, Rule};

/// Width of the `- ` sequence-entry marker in YAML documents.
const LIST_ITEM_MARKER_WIDTH: usize = 2;

/// An admitted rule, projected for the host editor's completion list.
#[derive(Debug, Clone, Copy)]
pub struct Suggestion<'r> {
    pub rule: &'r Rule,
}

impl Suggestion<'_> {
    /// Completion label.
    pub fn label(&self) -> &'static str {
        self.rule.name
    }

    /// Documentation line shown next to the label.
    pub fn documentation(&self) -> &'static str {
        self.rule.documentation
    }

    /// Snippet body inserted on acceptance.
    pub fn insert_text(&self) -> &'static str {
        self.rule.template
    }
}

/// Admissible elements at `snapshot`, in rule declaration order.
///
/// A cursor inside an unterminated XML tag gets no suggestions at all.
pub fn get_suggestions<'r>(snapshot: &ContextSnapshot, rules: &'r [Rule]) -> Vec<Suggestion<'r>> {
    if snapshot.in_open_token {
        return Vec::new();
    }

    let admitted: Vec<Suggestion<'r>> = rules
        .iter()
        .filter(|rule| admits(snapshot, rule))
        .map(|rule| Suggestion { rule })
        .collect();
    debug!(
        admitted = admitted.len(),
        candidates = rules.len(),
        "filtered suggestions"
    );
    admitted
}

fn admits(snapshot: &ContextSnapshot, rule: &Rule) -> bool {
    // A rule with no declared parents is misconfigured; fail closed.
    if rule.allowed_in.is_empty() {
        return false;
    }

    // The singleton root is never offered twice, wherever the cursor is.
    if rule.is_root_rule() && snapshot.has_root_element {
        return false;
    }

    if snapshot.is_root() {
        if !rule.is_root_rule() {
            return false;
        }
    } else if !rule
        .allowed_in
        .iter()
        .any(|parent| snapshot.active_tags.iter().any(|tag| tag == parent))
    {
        // A declared parent anywhere in the ancestor stack suffices; the
        // element may be legal several levels below it.
        return false;
    }

    if rule
        .disallowed_in
        .iter()
        .any(|name| snapshot.active_tags.iter().any(|tag| tag == name))
    {
        return false;
    }

    indentation_admits(snapshot, rule)
}

/// Boundary-exact indentation check: the cursor must sit at exactly the
/// required column, not "at least".
fn indentation_admits(snapshot: &ContextSnapshot, rule: &Rule) -> bool {
    match rule.indentation {
        IndentationRule::Absolute { spaces } => snapshot.current_indentation == spaces,
        IndentationRule::Relative { delta, .. } => {
            // A missing parent measures as 0 rather than failing the lookup.
            let parent_indentation = snapshot.innermost().map(effective_indentation).unwrap_or(0);
            snapshot.current_indentation == parent_indentation + delta
        }
    }
}

/// A sequence entry's children sit past its `- ` marker as well as its own
/// leading whitespace.
fn effective_indentation(entry: &HierarchyEntry) -> usize {
    if entry.is_list_item {
        entry.indentation + LIST_ITEM_MARKER_WIDTH
    } else {
        entry.indentation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{IndentationRule, ROOT, Rule};
    use std::collections::BTreeMap;

    // The filter is exercised against a hand-built table so the builtin
    // tables can evolve without touching these tests.
    static TABLE: &[Rule] = &[
        Rule {
            name: "root-element",
            template: "root-element:",
            documentation: "the singleton root",
            allowed_in: &[ROOT],
            disallowed_in: &[],
            indentation: IndentationRule::Absolute { spaces: 0 },
        },
        Rule {
            name: "child",
            template: "child:",
            documentation: "plain child",
            allowed_in: &["root-element"],
            disallowed_in: &["child"],
            indentation: IndentationRule::Relative { delta: 4, list_item: false },
        },
        Rule {
            name: "grandchild",
            template: "grandchild:",
            documentation: "nested under child, any depth",
            allowed_in: &["child"],
            disallowed_in: &[],
            indentation: IndentationRule::Relative { delta: 4, list_item: false },
        },
        Rule {
            name: "misconfigured",
            template: "misconfigured:",
            documentation: "no declared parents",
            allowed_in: &[],
            disallowed_in: &[],
            indentation: IndentationRule::Absolute { spaces: 0 },
        },
    ];

    fn entry(name: &str, indentation: usize, is_list_item: bool) -> HierarchyEntry {
        HierarchyEntry {
            name: name.to_string(),
            indentation,
            line_number: 0,
            is_list_item,
        }
    }

    fn snapshot(tags: &[(&str, usize, bool)], current_indentation: usize) -> ContextSnapshot {
        let mut tag_indentations = BTreeMap::new();
        let mut active_tags = Vec::new();
        for (name, indentation, is_list_item) in tags {
            active_tags.push(name.to_string());
            tag_indentations.insert(name.to_string(), entry(name, *indentation, *is_list_item));
        }
        ContextSnapshot {
            active_tags,
            tag_indentations,
            has_root_element: !tags.is_empty(),
            current_indentation,
            in_open_token: false,
        }
    }

    fn admitted_names(snapshot: &ContextSnapshot) -> Vec<&'static str> {
        get_suggestions(snapshot, TABLE)
            .iter()
            .map(|s| s.label())
            .collect()
    }

    #[test]
    fn test_empty_document_offers_only_root() {
        let snapshot = ContextSnapshot {
            active_tags: vec![],
            tag_indentations: BTreeMap::new(),
            has_root_element: false,
            current_indentation: 0,
            in_open_token: false,
        };
        assert_eq!(admitted_names(&snapshot), vec!["root-element"]);
    }

    #[test]
    fn test_root_rule_excluded_once_root_exists() {
        // Cursor above the existing root: still at root context, but the
        // document-wide probe wins.
        let snapshot = ContextSnapshot {
            active_tags: vec![],
            tag_indentations: BTreeMap::new(),
            has_root_element: true,
            current_indentation: 0,
            in_open_token: false,
        };
        assert!(admitted_names(&snapshot).is_empty());
    }

    #[test]
    fn test_child_admitted_at_exact_indentation() {
        let snapshot = snapshot(&[("root-element", 0, false)], 4);
        assert_eq!(admitted_names(&snapshot), vec!["child"]);
    }

    #[test]
    fn test_indentation_is_boundary_exact() {
        // delta 4 under a parent at indentation 2: admitted at 6 only.
        let parent = [("root-element", 0, false), ("child", 2, false)];
        assert_eq!(admitted_names(&snapshot(&parent, 6)), vec!["grandchild"]);
        assert!(admitted_names(&snapshot(&parent, 5)).is_empty());
        assert!(admitted_names(&snapshot(&parent, 7)).is_empty());
    }

    #[test]
    fn test_ancestor_allow_matches_any_level() {
        // "grandchild" declares "child" as parent; child is two levels up.
        let snapshot = snapshot(
            &[
                ("root-element", 0, false),
                ("child", 4, false),
                ("grandchild", 8, false),
            ],
            12,
        );
        // grandchild's parent lookup uses the innermost entry (itself at 8).
        assert_eq!(admitted_names(&snapshot), vec!["grandchild"]);
    }

    #[test]
    fn test_ancestor_forbid_matches_any_level() {
        // "child" forbids itself anywhere in the stack, even non-innermost.
        let snapshot = snapshot(
            &[
                ("root-element", 0, false),
                ("child", 4, false),
                ("grandchild", 8, false),
            ],
            12,
        );
        assert!(!admitted_names(&snapshot).contains(&"child"));
    }

    #[test]
    fn test_list_item_parent_adds_marker_width() {
        // Parent is a sequence entry at indentation 2: children sit at
        // 2 (own) + 2 (marker) + 4 (delta) = 8.
        let parent = [("root-element", 0, false), ("child", 2, true)];
        assert_eq!(admitted_names(&snapshot(&parent, 8)), vec!["grandchild"]);
        assert!(admitted_names(&snapshot(&parent, 6)).is_empty());
    }

    #[test]
    fn test_misconfigured_rule_fails_closed() {
        let snapshot = ContextSnapshot {
            active_tags: vec![],
            tag_indentations: BTreeMap::new(),
            has_root_element: false,
            current_indentation: 0,
            in_open_token: false,
        };
        assert!(!admitted_names(&snapshot).contains(&"misconfigured"));
    }

    #[test]
    fn test_open_token_suppresses_all_suggestions() {
        let mut snapshot = snapshot(&[("root-element", 0, false)], 4);
        snapshot.in_open_token = true;
        assert!(get_suggestions(&snapshot, TABLE).is_empty());
    }

    #[test]
    fn test_declaration_order_preserved() {
        static PAIR: &[Rule] = &[
            Rule {
                name: "b",
                template: "b:",
                documentation: "declared first",
                allowed_in: &["root-element"],
                disallowed_in: &[],
                indentation: IndentationRule::Relative { delta: 4, list_item: false },
            },
            Rule {
                name: "a",
                template: "a:",
                documentation: "declared second",
                allowed_in: &["root-element"],
                disallowed_in: &[],
                indentation: IndentationRule::Relative { delta: 4, list_item: false },
            },
        ];
        let snapshot = snapshot(&[("root-element", 0, false)], 4);
        let names: Vec<_> = get_suggestions(&snapshot, PAIR)
            .iter()
            .map(|s| s.label())
            .collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn test_suggestion_projects_its_rule() {
        let snapshot = snapshot(&[("root-element", 0, false)], 4);
        let suggestions = get_suggestions(&snapshot, TABLE);
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].label(), "child");
        assert_eq!(suggestions[0].insert_text(), "child:");
        assert_eq!(suggestions[0].documentation(), "plain child");
    }

    #[test]
    fn test_relative_rule_with_no_parent_measures_from_zero() {
        // A relative rule admitted at root context (allowed_in includes the
        // sentinel) must not panic on the missing parent lookup.
        static LOOSE: &[Rule] = &[Rule {
            name: "loose",
            template: "loose:",
            documentation: "relative at root",
            allowed_in: &[ROOT],
            disallowed_in: &[],
            indentation: IndentationRule::Relative { delta: 2, list_item: false },
        }];
        let snapshot = ContextSnapshot {
            active_tags: vec![],
            tag_indentations: BTreeMap::new(),
            has_root_element: false,
            current_indentation: 2,
            in_open_token: false,
        };
        let names: Vec<_> = get_suggestions(&snapshot, LOOSE)
            .iter()
            .map(|s| s.label())
            .collect();
        assert_eq!(names, vec!["loose"]);
    }
}
