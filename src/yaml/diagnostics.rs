//! Source-located diagnostics for quote and rate documents

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Parse error in a YAML or JSON document, pointing at the offending line
#[derive(Debug, Error, Diagnostic)]
#[error("Failed to parse {document}: {message}")]
#[diagnostic(code(partval::yaml::syntax))]
pub struct YamlSyntaxError {
    #[source_code]
    src: NamedSource<String>,

    #[label("here")]
    span: SourceSpan,

    #[help]
    help: Option<String>,

    /// Name of the document being parsed (e.g. "quote inputs")
    document: String,

    /// The underlying parser message
    message: String,
}

impl YamlSyntaxError {
    /// Build a diagnostic from a serde_yml error
    pub fn from_serde_error(err: &serde_yml::Error, source: &str, document: &str) -> Self {
        let (line, column) = err
            .location()
            .map(|loc| (loc.line(), loc.column()))
            .unwrap_or((1, 1));
        Self::at_location(err.to_string(), source, document, line, column)
    }

    /// Build a diagnostic from a serde_json error
    pub fn from_json_error(err: &serde_json::Error, source: &str, document: &str) -> Self {
        Self::at_location(
            err.to_string(),
            source,
            document,
            err.line().max(1),
            err.column().max(1),
        )
    }

    fn at_location(
        message: String,
        source: &str,
        document: &str,
        line: usize,
        column: usize,
    ) -> Self {
        let offset = line_col_to_offset(source, line, column);
        let help = generate_help(&message);

        Self {
            src: NamedSource::new(document, source.to_string()),
            span: SourceSpan::from(offset..offset.saturating_add(1)),
            help,
            document: document.to_string(),
            message,
        }
    }

    /// The underlying parser message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Byte offset of the reported location
    pub fn offset(&self) -> usize {
        self.span.offset()
    }
}

/// Convert a 1-based line/column pair to a byte offset, clamped to the source
fn line_col_to_offset(source: &str, line: usize, column: usize) -> usize {
    let mut line_start = 0;
    for (index, text) in source.split_inclusive('\n').enumerate() {
        if index + 1 == line {
            let within = text
                .char_indices()
                .nth(column.saturating_sub(1))
                .map(|(i, _)| i)
                .unwrap_or_else(|| text.trim_end_matches('\n').len());
            return line_start + within;
        }
        line_start += text.len();
    }
    source.len().saturating_sub(1)
}

/// Suggest a fix for the common mistakes in quote documents
fn generate_help(message: &str) -> Option<String> {
    let msg_lower = message.to_lowercase();

    if msg_lower.contains("unknown field") {
        return Some("Check the field name for typos; field names use snake_case".to_string());
    }

    if msg_lower.contains("unknown variant") {
        return Some(
            "Shipping must be one of: none, economy, three_day, overnight".to_string(),
        );
    }

    if msg_lower.contains("rating") {
        return Some("Ratings must be 1, 3, or 5".to_string());
    }

    if msg_lower.contains("invalid value: integer") || msg_lower.contains("invalid type") {
        return Some(
            "Times, masses, and rates are numbers; n_parts and discount_cutoff are non-negative whole numbers"
                .to_string(),
        );
    }

    if msg_lower.contains("tab") {
        return Some(
            "YAML requires spaces for indentation, not tabs. Replace tabs with spaces.".to_string(),
        );
    }

    if msg_lower.contains("duplicate") {
        return Some("Each key can only appear once. Remove the duplicate key.".to_string());
    }

    None
}
