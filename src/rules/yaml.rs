//! YAML rule table
//!
//! Two-space indentation step. `changeSet`, `include`, and `column` are
//! sequence entries; their children sit past the `- ` marker as well as the
//! two-space step, which the suggestion filter accounts for via the parent
//! entry's `is_list_item` flag.

use super::{IndentationRule, ROOT, Rule, docs};

pub static RULES: &[Rule] = &[
    Rule {
        name: "databaseChangeLog",
        template: "databaseChangeLog:\n  $0",
        documentation: docs::DATABASE_CHANGE_LOG,
        allowed_in: &[ROOT],
        disallowed_in: &[],
        indentation: IndentationRule::Absolute { spaces: 0 },
    },
    Rule {
        name: "include",
        template: "- include:\n    file: ${1:changelog.yaml}",
        documentation: docs::INCLUDE,
        allowed_in: &["databaseChangeLog"],
        disallowed_in: &["changeSet"],
        indentation: IndentationRule::Relative { delta: 2, list_item: true },
    },
    Rule {
        name: "changeSet",
        template: "- changeSet:\n    id: ${1:id}\n    author: ${2:author}\n    $0",
        documentation: docs::CHANGE_SET,
        allowed_in: &["databaseChangeLog"],
        disallowed_in: &["changeSet"],
        indentation: IndentationRule::Relative { delta: 2, list_item: true },
    },
    Rule {
        name: "sql",
        template: "sql: ${1:statement}",
        documentation: docs::SQL,
        allowed_in: &["changeSet", "rollback"],
        disallowed_in: &["sql"],
        indentation: IndentationRule::Relative { delta: 2, list_item: false },
    },
    Rule {
        name: "createTable",
        template: "createTable:\n  tableName: ${1:table}\n  $0",
        documentation: docs::CREATE_TABLE,
        allowed_in: &["changeSet"],
        disallowed_in: &["createTable"],
        indentation: IndentationRule::Relative { delta: 2, list_item: false },
    },
    Rule {
        name: "addColumn",
        template: "addColumn:\n  tableName: ${1:table}\n  $0",
        documentation: docs::ADD_COLUMN,
        allowed_in: &["changeSet"],
        disallowed_in: &["addColumn"],
        indentation: IndentationRule::Relative { delta: 2, list_item: false },
    },
    Rule {
        name: "createIndex",
        template: "createIndex:\n  indexName: ${1:idx}\n  tableName: ${2:table}\n  $0",
        documentation: docs::CREATE_INDEX,
        allowed_in: &["changeSet"],
        disallowed_in: &["createIndex"],
        indentation: IndentationRule::Relative { delta: 2, list_item: false },
    },
    Rule {
        name: "dropTable",
        template: "dropTable:\n  tableName: ${1:table}",
        documentation: docs::DROP_TABLE,
        allowed_in: &["changeSet"],
        disallowed_in: &["dropTable"],
        indentation: IndentationRule::Relative { delta: 2, list_item: false },
    },
    Rule {
        name: "dropIndex",
        template: "dropIndex:\n  indexName: ${1:idx}\n  tableName: ${2:table}",
        documentation: docs::DROP_INDEX,
        allowed_in: &["changeSet"],
        disallowed_in: &["dropIndex"],
        indentation: IndentationRule::Relative { delta: 2, list_item: false },
    },
    Rule {
        name: "addForeignKeyConstraint",
        template: "addForeignKeyConstraint:\n  constraintName: ${1:fk_name}\n  baseTableName: ${2:table}\n  baseColumnNames: ${3:columns}\n  referencedTableName: ${4:table}\n  referencedColumnNames: ${5:columns}",
        documentation: docs::ADD_FOREIGN_KEY_CONSTRAINT,
        allowed_in: &["changeSet"],
        disallowed_in: &["addForeignKeyConstraint"],
        indentation: IndentationRule::Relative { delta: 2, list_item: false },
    },
    Rule {
        name: "addPrimaryKey",
        template: "addPrimaryKey:\n  tableName: ${1:table}\n  columnNames: ${2:columns}",
        documentation: docs::ADD_PRIMARY_KEY,
        allowed_in: &["changeSet"],
        disallowed_in: &["addPrimaryKey"],
        indentation: IndentationRule::Relative { delta: 2, list_item: false },
    },
    Rule {
        name: "addUniqueConstraint",
        template: "addUniqueConstraint:\n  tableName: ${1:table}\n  columnNames: ${2:columns}",
        documentation: docs::ADD_UNIQUE_CONSTRAINT,
        allowed_in: &["changeSet"],
        disallowed_in: &["addUniqueConstraint"],
        indentation: IndentationRule::Relative { delta: 2, list_item: false },
    },
    Rule {
        name: "rollback",
        template: "rollback:\n  $0",
        documentation: docs::ROLLBACK,
        allowed_in: &["changeSet"],
        disallowed_in: &["rollback"],
        indentation: IndentationRule::Relative { delta: 2, list_item: false },
    },
    Rule {
        name: "column",
        template: "- column:\n    name: ${1:name}\n    type: ${2:type}\n    $0",
        documentation: docs::COLUMN,
        allowed_in: &["createTable", "addColumn", "createIndex"],
        disallowed_in: &["column"],
        indentation: IndentationRule::Relative { delta: 2, list_item: true },
    },
    Rule {
        name: "constraints",
        template: "constraints:\n  nullable: ${1:false}",
        documentation: docs::CONSTRAINTS,
        allowed_in: &["column"],
        disallowed_in: &["constraints"],
        indentation: IndentationRule::Relative { delta: 2, list_item: false },
    },
];
