//! Document structure context analysis
//!
//! Given the full text of a partially-written changelog and a cursor
//! position, each analyzer reconstructs the stack of structural elements
//! that enclose the cursor, together with their indentation. The result is
//! a [`ContextSnapshot`] the suggestion filter decides admissibility from.
//!
//! Analyzers are deliberately tolerant: the user is mid-edit, so the
//! document is routinely incomplete or malformed. They never fail; in the
//! worst case the snapshot degrades to an empty ancestor stack, which makes
//! the filter offer only root-level elements.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Serialize;
use strum_macros::{Display, EnumIter, EnumString};
use tracing::debug;

use crate::cursor::{CursorTarget, ResolvedCursor, leading_whitespace_width};

pub mod json;
pub mod xml;
pub mod yaml;

pub use json::JsonAnalyzer;
pub use xml::XmlAnalyzer;
pub use yaml::YamlAnalyzer;

/// The singleton top-level container every changelog declares exactly once.
pub const ROOT_ELEMENT: &str = "databaseChangeLog";

/// Markup format of a changelog document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ChangelogFormat {
    Xml,
    Yaml,
    Json,
}

impl ChangelogFormat {
    /// Detect the format from a file extension (`.yml` counts as YAML).
    pub fn from_extension(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "xml" => Some(Self::Xml),
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// One structural element opened before the cursor.
///
/// `is_list_item` is set for YAML sequence entries (`- key:`), whose
/// children sit one extra level deeper than the entry's own indentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HierarchyEntry {
    pub name: String,
    pub indentation: usize,
    pub line_number: usize,
    pub is_list_item: bool,
}

/// The structural context at a cursor position.
///
/// `active_tags` lists the enclosing element names from outermost to
/// innermost; every name in it has an entry in `tag_indentations` (the map
/// may also retain elements that have since been closed, so later siblings
/// can still look up their indentation).
#[derive(Debug, Clone, Serialize)]
pub struct ContextSnapshot {
    pub active_tags: Vec<String>,
    pub tag_indentations: BTreeMap<String, HierarchyEntry>,
    pub has_root_element: bool,
    pub current_indentation: usize,
    /// XML only: the cursor lies inside an unterminated `<...` token.
    pub in_open_token: bool,
}

impl ContextSnapshot {
    /// True iff no element encloses the cursor.
    pub fn is_root(&self) -> bool {
        self.active_tags.is_empty()
    }

    /// The innermost enclosing element, if any.
    pub fn innermost(&self) -> Option<&HierarchyEntry> {
        self.active_tags
            .last()
            .and_then(|name| self.tag_indentations.get(name))
    }

    /// A snapshot with no enclosing elements.
    pub(crate) fn at_root(has_root_element: bool, current_indentation: usize) -> Self {
        Self {
            active_tags: Vec::new(),
            tag_indentations: BTreeMap::new(),
            has_root_element,
            current_indentation,
            in_open_token: false,
        }
    }
}

/// One structural analyzer per changelog format.
pub trait StructuralAnalyzer {
    /// Reconstruct the structural context at `cursor`. Never fails:
    /// malformed input degrades to a best-effort (possibly empty) hierarchy.
    fn analyze(&self, text: &str, cursor: &ResolvedCursor) -> ContextSnapshot;
}

/// Format-dispatch table.
pub fn analyzer_for(format: ChangelogFormat) -> &'static dyn StructuralAnalyzer {
    match format {
        ChangelogFormat::Xml => &XmlAnalyzer,
        ChangelogFormat::Yaml => &YamlAnalyzer,
        ChangelogFormat::Json => &JsonAnalyzer,
    }
}

/// Resolve `cursor` against `text` and analyze the structural context there.
///
/// This is the primary entry point consumed by completion facades.
pub fn analyze_context(format: ChangelogFormat, text: &str, cursor: CursorTarget) -> ContextSnapshot {
    let resolved = cursor.resolve(text);
    let snapshot = analyzer_for(format).analyze(text, &resolved);
    debug!(
        %format,
        line = resolved.line,
        character = resolved.character,
        active_tags = ?snapshot.active_tags,
        indentation = snapshot.current_indentation,
        "resolved completion context"
    );
    snapshot
}

/// Leading-whitespace width of the `line`-th line of `text`.
///
/// Lines past the end of the document measure as 0.
pub(crate) fn indentation_of_line(text: &str, line: usize) -> usize {
    text.split('\n')
        .nth(line)
        .map(leading_whitespace_width)
        .unwrap_or(0)
}
