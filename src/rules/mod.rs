//! Insertable-element rule tables
//!
//! One declarative table per changelog format. Each rule names a structural
//! element, carries the snippet inserted when the completion is accepted,
//! and declares where the element may and may not appear together with its
//! required indentation. The tables are compiled-in constants; the
//! suggestion filter receives them as plain slices, so tests can substitute
//! their own.

use serde::Serialize;

use crate::context::ChangelogFormat;

pub mod json;
pub mod xml;
pub mod yaml;

/// Sentinel parent name admitting an element at the document root.
///
/// The rule carrying it is the singleton root rule: it is probed
/// document-wide rather than against the ancestor stack, and is never
/// offered once the root element exists anywhere in the document.
pub const ROOT: &str = "root";

/// Required indentation for an element, in whitespace characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum IndentationRule {
    /// A fixed column, independent of context.
    Absolute { spaces: usize },
    /// An offset from the innermost enclosing element's indentation.
    /// `list_item` marks templates that are themselves sequence entries
    /// (`- key:`); only the YAML table sets it.
    Relative { delta: usize, list_item: bool },
}

/// One insertable structural element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rule {
    /// Element name as it appears in the document.
    pub name: &'static str,
    /// Snippet body handed to the host editor on acceptance.
    pub template: &'static str,
    /// Documentation line shown next to the completion.
    pub documentation: &'static str,
    /// Names of elements this one may appear under ([`ROOT`] for the
    /// document root). An empty set is a configuration defect; the filter
    /// fails closed and never offers such a rule.
    pub allowed_in: &'static [&'static str],
    /// Names of elements under which this one must never be offered.
    pub disallowed_in: &'static [&'static str],
    pub indentation: IndentationRule,
}

impl Rule {
    /// True for the singleton root-element rule.
    pub fn is_root_rule(&self) -> bool {
        self.allowed_in.contains(&ROOT)
    }
}

/// The builtin rule table for `format`.
pub fn builtin(format: ChangelogFormat) -> &'static [Rule] {
    match format {
        ChangelogFormat::Xml => xml::RULES,
        ChangelogFormat::Yaml => yaml::RULES,
        ChangelogFormat::Json => json::RULES,
    }
}

/// True if `name` is an element in any builtin table. Used to validate
/// configured element exclusions.
pub fn is_known_element(name: &str) -> bool {
    use strum::IntoEnumIterator;
    ChangelogFormat::iter().any(|format| builtin(format).iter().any(|rule| rule.name == name))
}

/// Completion-list documentation lines, shared by all three format tables.
pub(crate) mod docs {
    pub const DATABASE_CHANGE_LOG: &str =
        "Root container every changelog declares exactly once.";
    pub const INCLUDE: &str = "Pulls another changelog file into this one.";
    pub const CHANGE_SET: &str = "Unit of change tracked and executed by Liquibase.";
    pub const SQL: &str = "Runs a raw SQL statement.";
    pub const CREATE_TABLE: &str = "Creates a new table.";
    pub const ADD_COLUMN: &str = "Adds columns to an existing table.";
    pub const CREATE_INDEX: &str = "Creates an index on an existing table.";
    pub const DROP_TABLE: &str = "Drops an existing table.";
    pub const DROP_INDEX: &str = "Drops an existing index.";
    pub const ADD_FOREIGN_KEY_CONSTRAINT: &str =
        "Adds a foreign key constraint between two tables.";
    pub const ADD_PRIMARY_KEY: &str = "Adds a primary key to an existing table.";
    pub const ADD_UNIQUE_CONSTRAINT: &str = "Adds a unique constraint to existing columns.";
    pub const ROLLBACK: &str = "Statements that undo this change set.";
    pub const COLUMN: &str = "Column definition inside a table change.";
    pub const CONSTRAINTS: &str = "Column constraints such as nullability and keys.";
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use strum::IntoEnumIterator;

    fn names(rules: &[Rule]) -> BTreeSet<&'static str> {
        rules.iter().map(|r| r.name).collect()
    }

    #[test]
    fn test_all_tables_share_the_element_vocabulary() {
        let xml = names(xml::RULES);
        assert_eq!(xml, names(yaml::RULES));
        assert_eq!(xml, names(json::RULES));
    }

    #[test]
    fn test_exactly_one_root_rule_per_table() {
        for format in ChangelogFormat::iter() {
            let roots: Vec<_> = builtin(format)
                .iter()
                .filter(|r| r.is_root_rule())
                .collect();
            assert_eq!(roots.len(), 1, "{format}: expected a single root rule");
            assert_eq!(roots[0].name, crate::context::ROOT_ELEMENT);
        }
    }

    #[test]
    fn test_names_unique_within_each_table() {
        for format in ChangelogFormat::iter() {
            let table = builtin(format);
            assert_eq!(
                names(table).len(),
                table.len(),
                "{format}: duplicate element names"
            );
        }
    }

    #[test]
    fn test_every_non_root_rule_declares_a_parent() {
        for format in ChangelogFormat::iter() {
            let table = builtin(format);
            for rule in table.iter().filter(|r| !r.is_root_rule()) {
                assert!(
                    !rule.allowed_in.is_empty(),
                    "{format}/{}: empty allowed_in",
                    rule.name
                );
                for parent in rule.allowed_in {
                    assert!(
                        table.iter().any(|r| r.name == *parent),
                        "{format}/{}: unknown parent '{parent}'",
                        rule.name
                    );
                }
            }
        }
    }

    #[test]
    fn test_recursive_self_nesting_is_forbidden() {
        for format in ChangelogFormat::iter() {
            for name in ["changeSet", "rollback", "constraints"] {
                let rule = builtin(format)
                    .iter()
                    .find(|r| r.name == name)
                    .unwrap_or_else(|| panic!("{format}: missing {name}"));
                assert!(
                    rule.disallowed_in.contains(&name),
                    "{format}/{name}: should disallow itself"
                );
            }
        }
    }

    #[test]
    fn test_only_yaml_marks_list_items() {
        for format in [ChangelogFormat::Xml, ChangelogFormat::Json] {
            for rule in builtin(format) {
                assert!(
                    !matches!(
                        rule.indentation,
                        IndentationRule::Relative { list_item: true, .. }
                    ),
                    "{format}/{}: list_item outside YAML",
                    rule.name
                );
            }
        }
        assert!(yaml::RULES.iter().any(|r| matches!(
            r.indentation,
            IndentationRule::Relative { list_item: true, .. }
        )));
    }

    #[test]
    fn test_is_known_element() {
        assert!(is_known_element("createTable"));
        assert!(is_known_element("databaseChangeLog"));
        assert!(!is_known_element("createtable"));
        assert!(!is_known_element("dropEverything"));
    }

    #[test]
    fn test_templates_mention_their_element() {
        for format in ChangelogFormat::iter() {
            for rule in builtin(format) {
                assert!(
                    rule.template.contains(rule.name),
                    "{format}/{}: template does not mention the element",
                    rule.name
                );
                assert!(
                    rule.documentation.len() > 10,
                    "{format}/{}: documentation too short",
                    rule.name
                );
            }
        }
    }
}
