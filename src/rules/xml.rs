//! XML rule table
//!
//! Four-space indentation step: the root element sits at column 0 and every
//! nested element sits exactly four spaces deeper than its parent.

use super::{IndentationRule, ROOT, Rule, docs};

pub static RULES: &[Rule] = &[
    Rule {
        name: "databaseChangeLog",
        template: "<databaseChangeLog\n    xmlns=\"http://www.liquibase.org/xml/ns/dbchangelog\">\n    $0\n</databaseChangeLog>",
        documentation: docs::DATABASE_CHANGE_LOG,
        allowed_in: &[ROOT],
        disallowed_in: &[],
        indentation: IndentationRule::Absolute { spaces: 0 },
    },
    Rule {
        name: "include",
        template: "<include file=\"${1:changelog.xml}\"/>",
        documentation: docs::INCLUDE,
        allowed_in: &["databaseChangeLog"],
        disallowed_in: &["changeSet"],
        indentation: IndentationRule::Relative { delta: 4, list_item: false },
    },
    Rule {
        name: "changeSet",
        template: "<changeSet id=\"${1:id}\" author=\"${2:author}\">\n    $0\n</changeSet>",
        documentation: docs::CHANGE_SET,
        allowed_in: &["databaseChangeLog"],
        disallowed_in: &["changeSet"],
        indentation: IndentationRule::Relative { delta: 4, list_item: false },
    },
    Rule {
        name: "sql",
        template: "<sql>${1:statement}</sql>",
        documentation: docs::SQL,
        allowed_in: &["changeSet", "rollback"],
        disallowed_in: &["sql"],
        indentation: IndentationRule::Relative { delta: 4, list_item: false },
    },
    Rule {
        name: "createTable",
        template: "<createTable tableName=\"${1:table}\">\n    $0\n</createTable>",
        documentation: docs::CREATE_TABLE,
        allowed_in: &["changeSet"],
        disallowed_in: &["createTable"],
        indentation: IndentationRule::Relative { delta: 4, list_item: false },
    },
    Rule {
        name: "addColumn",
        template: "<addColumn tableName=\"${1:table}\">\n    $0\n</addColumn>",
        documentation: docs::ADD_COLUMN,
        allowed_in: &["changeSet"],
        disallowed_in: &["addColumn"],
        indentation: IndentationRule::Relative { delta: 4, list_item: false },
    },
    Rule {
        name: "createIndex",
        template: "<createIndex indexName=\"${1:idx}\" tableName=\"${2:table}\">\n    $0\n</createIndex>",
        documentation: docs::CREATE_INDEX,
        allowed_in: &["changeSet"],
        disallowed_in: &["createIndex"],
        indentation: IndentationRule::Relative { delta: 4, list_item: false },
    },
    Rule {
        name: "dropTable",
        template: "<dropTable tableName=\"${1:table}\"/>",
        documentation: docs::DROP_TABLE,
        allowed_in: &["changeSet"],
        disallowed_in: &["dropTable"],
        indentation: IndentationRule::Relative { delta: 4, list_item: false },
    },
    Rule {
        name: "dropIndex",
        template: "<dropIndex indexName=\"${1:idx}\" tableName=\"${2:table}\"/>",
        documentation: docs::DROP_INDEX,
        allowed_in: &["changeSet"],
        disallowed_in: &["dropIndex"],
        indentation: IndentationRule::Relative { delta: 4, list_item: false },
    },
    Rule {
        name: "addForeignKeyConstraint",
        template: "<addForeignKeyConstraint constraintName=\"${1:fk_name}\" baseTableName=\"${2:table}\" baseColumnNames=\"${3:columns}\" referencedTableName=\"${4:table}\" referencedColumnNames=\"${5:columns}\"/>",
        documentation: docs::ADD_FOREIGN_KEY_CONSTRAINT,
        allowed_in: &["changeSet"],
        disallowed_in: &["addForeignKeyConstraint"],
        indentation: IndentationRule::Relative { delta: 4, list_item: false },
    },
    Rule {
        name: "addPrimaryKey",
        template: "<addPrimaryKey tableName=\"${1:table}\" columnNames=\"${2:columns}\"/>",
        documentation: docs::ADD_PRIMARY_KEY,
        allowed_in: &["changeSet"],
        disallowed_in: &["addPrimaryKey"],
        indentation: IndentationRule::Relative { delta: 4, list_item: false },
    },
    Rule {
        name: "addUniqueConstraint",
        template: "<addUniqueConstraint tableName=\"${1:table}\" columnNames=\"${2:columns}\"/>",
        documentation: docs::ADD_UNIQUE_CONSTRAINT,
        allowed_in: &["changeSet"],
        disallowed_in: &["addUniqueConstraint"],
        indentation: IndentationRule::Relative { delta: 4, list_item: false },
    },
    Rule {
        name: "rollback",
        template: "<rollback>\n    $0\n</rollback>",
        documentation: docs::ROLLBACK,
        allowed_in: &["changeSet"],
        disallowed_in: &["rollback"],
        indentation: IndentationRule::Relative { delta: 4, list_item: false },
    },
    Rule {
        name: "column",
        template: "<column name=\"${1:name}\" type=\"${2:type}\">\n    $0\n</column>",
        documentation: docs::COLUMN,
        allowed_in: &["createTable", "addColumn", "createIndex"],
        disallowed_in: &["column"],
        indentation: IndentationRule::Relative { delta: 4, list_item: false },
    },
    Rule {
        name: "constraints",
        template: "<constraints nullable=\"${1:false}\"/>",
        documentation: docs::CONSTRAINTS,
        allowed_in: &["column"],
        disallowed_in: &["constraints"],
        indentation: IndentationRule::Relative { delta: 4, list_item: false },
    },
];
