//! Suggestion writers for different output formats
//!
//! Supports human-readable text and a JSON projection of the full
//! completion result, so editor glue can consume the engine over stdio.

use serde::Serialize;
use std::io::Write;
use thiserror::Error;

use crate::context::{ChangelogFormat, ContextSnapshot};
use crate::cursor::ResolvedCursor;
use crate::suggest::Suggestion;

#[derive(Debug, Error)]
pub enum WriteError {
    #[error("IO error writing suggestions: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Trait for output format writers.
pub trait SuggestionWriter {
    /// Write the completion result to `out`.
    fn emit(&self, report: &CompletionReport, out: &mut dyn Write) -> Result<(), WriteError>;
}

/// A completion result assembled for emission.
#[derive(Debug, Clone, Serialize)]
pub struct CompletionReport {
    pub file: String,
    pub format: String,
    /// 1-based cursor coordinates, as shown to the user.
    pub line: usize,
    pub column: usize,
    pub context: ContextReport,
    pub suggestions: Vec<SuggestionEntry>,
}

/// The snapshot fields worth surfacing to consumers.
#[derive(Debug, Clone, Serialize)]
pub struct ContextReport {
    pub active_tags: Vec<String>,
    pub current_indentation: usize,
    pub has_root_element: bool,
    pub in_open_token: bool,
}

/// One admitted element, projected for display.
#[derive(Debug, Clone, Serialize)]
pub struct SuggestionEntry {
    pub label: String,
    pub documentation: String,
    pub template: String,
}

impl CompletionReport {
    pub fn new(
        file: &str,
        format: ChangelogFormat,
        cursor: &ResolvedCursor,
        snapshot: &ContextSnapshot,
        suggestions: &[Suggestion<'_>],
    ) -> Self {
        Self {
            file: file.to_string(),
            format: format.to_string(),
            line: cursor.line + 1,
            column: cursor.character + 1,
            context: ContextReport {
                active_tags: snapshot.active_tags.clone(),
                current_indentation: snapshot.current_indentation,
                has_root_element: snapshot.has_root_element,
                in_open_token: snapshot.in_open_token,
            },
            suggestions: suggestions
                .iter()
                .map(|s| SuggestionEntry {
                    label: s.label().to_string(),
                    documentation: s.documentation().to_string(),
                    template: s.insert_text().to_string(),
                })
                .collect(),
        }
    }
}

/// Human-readable writer for terminal use.
pub struct TextWriter;

/// Machine-readable writer emitting the report as pretty-printed JSON.
pub struct JsonWriter;

pub mod json;
pub mod text;
