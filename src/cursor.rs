//! Cursor position resolution and clamping
//!
//! Completion requests arrive either as a `(line, character)` pair or as a
//! flat byte offset. Both are resolved into a [`ResolvedCursor`] that carries
//! all three coordinates in agreement, clamped to the document bounds so the
//! analyzers never index out of range.

/// Width of a line's leading whitespace, in characters.
///
/// Tabs count as one unit each; no tab-width normalization is applied. This
/// is the shared indentation-measurement primitive also used by consumers
/// outside the context engine.
pub fn leading_whitespace_width(line: &str) -> usize {
    line.chars().take_while(|c| *c == ' ' || *c == '\t').count()
}

/// A cursor location as supplied by the caller, before resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorTarget {
    /// Zero-based line and character-within-line.
    LineColumn { line: usize, character: usize },
    /// Flat byte offset into the document text.
    Offset(usize),
}

/// A cursor location resolved against a concrete document.
///
/// `offset` is a byte offset on a UTF-8 character boundary; `line` and
/// `character` are the zero-based coordinates it corresponds to.
/// The representations agree by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedCursor {
    pub offset: usize,
    pub line: usize,
    pub character: usize,
}

impl CursorTarget {
    /// Resolve this target against `text`, clamping to the nearest valid
    /// position.
    ///
    /// A line past the end of the document clamps to the last line; a
    /// character past the end of its line clamps to the line end; an offset
    /// past the end of the text clamps to `text.len()` and is snapped down
    /// to a character boundary.
    pub fn resolve(self, text: &str) -> ResolvedCursor {
        match self {
            CursorTarget::LineColumn { line, character } => resolve_line_column(text, line, character),
            CursorTarget::Offset(offset) => resolve_offset(text, offset),
        }
    }
}

/// Byte offsets at which each line starts. Always non-empty: a document with
/// no newlines has a single line starting at 0.
fn line_starts(text: &str) -> Vec<usize> {
    let mut starts = vec![0];
    for (i, b) in text.bytes().enumerate() {
        if b == b'\n' {
            starts.push(i + 1);
        }
    }
    starts
}

/// The byte length of line `line` excluding its trailing newline.
fn line_len(text: &str, starts: &[usize], line: usize) -> usize {
    let start = starts[line];
    match starts.get(line + 1) {
        Some(next) => next - start - 1,
        None => text.len() - start,
    }
}

fn resolve_line_column(text: &str, line: usize, character: usize) -> ResolvedCursor {
    let starts = line_starts(text);
    let line = line.min(starts.len() - 1);
    let start = starts[line];
    let content = &text[start..start + line_len(text, &starts, line)];

    let character = character.min(content.chars().count());
    let byte_in_line = content
        .char_indices()
        .nth(character)
        .map(|(i, _)| i)
        .unwrap_or(content.len());

    ResolvedCursor {
        offset: start + byte_in_line,
        line,
        character,
    }
}

fn resolve_offset(text: &str, offset: usize) -> ResolvedCursor {
    let mut offset = offset.min(text.len());
    while !text.is_char_boundary(offset) {
        offset -= 1;
    }

    let before = &text[..offset];
    let line = before.matches('\n').count();
    let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
    let character = before[line_start..].chars().count();

    ResolvedCursor {
        offset,
        line,
        character,
    }
}
