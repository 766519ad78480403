//! JSON output writer
//!
//! Emits the full [`CompletionReport`] as pretty-printed JSON, terminated by
//! a newline. This is the interface editor glue consumes over stdio.

use std::io::Write;

use crate::output::{CompletionReport, JsonWriter, SuggestionWriter, WriteError};

impl JsonWriter {
    /// Render the report to a JSON string.
    pub fn render(&self, report: &CompletionReport) -> Result<String, WriteError> {
        serde_json::to_string_pretty(report).map_err(|e| WriteError::Serialization(e.to_string()))
    }
}

impl SuggestionWriter for JsonWriter {
    fn emit(&self, report: &CompletionReport, out: &mut dyn Write) -> Result<(), WriteError> {
        let json = self.render(report)?;
        out.write_all(json.as_bytes())?;
        out.write_all(b"\n")?;
        out.flush()?;
        Ok(())
    }
}
