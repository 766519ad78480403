//! changelog-complete: Structure-aware completion for Liquibase changelogs
//!
//! This library provides the core of a changelog authoring assistant. Given
//! the full text of a partially-written changelog (XML, YAML, or JSON) and
//! a cursor position, it reconstructs the stack of structural elements
//! enclosing the cursor and filters a declarative rule table down to the
//! elements that are legal to insert there.
//!
//! Data flows one way: raw text + cursor → [`ContextSnapshot`] → filtered
//! suggestion set. Every operation is a pure, synchronous computation;
//! nothing is cached between completion requests.

pub mod config;
pub mod context;
pub mod cursor;
pub mod output;
pub mod rules;
pub mod suggest;

// Re-export commonly used types
pub use config::Config;
pub use context::{
    ChangelogFormat, ContextSnapshot, HierarchyEntry, StructuralAnalyzer, analyze_context,
};
pub use cursor::{CursorTarget, ResolvedCursor, leading_whitespace_width};
pub use rules::{IndentationRule, Rule};
pub use suggest::{Suggestion, get_suggestions};
