//! Error types for reading chart and deck documents

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

/// A document that could not be decoded, with the offending location
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SourceError {
    #[error("Syntax error at line {line}, column {column}: {message}")]
    Syntax {
        span: Span,
        line: usize,
        column: usize,
        message: String,
    },

    #[error("Invalid document at line {line}, column {column}: {message}")]
    Data {
        span: Span,
        line: usize,
        column: usize,
        message: String,
    },
}

impl SourceError {
    /// Map a serde_json error onto a span in `source`
    pub fn from_json(err: &serde_json::Error, source: &str) -> Self {
        let line = err.line();
        let column = err.column();
        let start = offset_of(source, line, column);
        let span = start..(start + 1).min(source.len());
        let message = strip_location(&err.to_string());

        if err.is_data() {
            SourceError::Data {
                span,
                line,
                column,
                message,
            }
        } else {
            SourceError::Syntax {
                span,
                line,
                column,
                message,
            }
        }
    }

    pub fn span(&self) -> &Span {
        match self {
            SourceError::Syntax { span, .. } | SourceError::Data { span, .. } => span,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            SourceError::Syntax { message, .. } | SourceError::Data { message, .. } => message,
        }
    }

    /// Format the error with source context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        let mut buf = Vec::new();
        // ariadne counts chars, the span counts bytes
        let span = char_offset(source, self.span().start)..char_offset(source, self.span().end);
        let written = Report::build(ReportKind::Error, filename, span.start)
            .with_message(self.message())
            .with_label(
                Label::new((filename, span))
                    .with_message(self.message())
                    .with_color(Color::Red),
            )
            .finish()
            .write((filename, Source::from(source)), &mut buf);

        match written {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => self.to_string(),
        }
    }
}

/// Byte offset of a 1-based line/column position, clamped to the source
fn offset_of(source: &str, line: usize, column: usize) -> usize {
    let line_start: usize = source
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum();
    (line_start + column.saturating_sub(1)).min(source.len())
}

/// Number of chars that start before byte offset `byte`
fn char_offset(source: &str, byte: usize) -> usize {
    source.char_indices().take_while(|(i, _)| *i < byte).count()
}

/// serde_json appends " at line L column C"; the span already carries that
fn strip_location(message: &str) -> String {
    match message.rfind(" at line ") {
        Some(idx) => message[..idx].to_string(),
        None => message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn json_error(source: &str) -> SourceError {
        let err = serde_json::from_str::<serde_json::Value>(source).unwrap_err();
        SourceError::from_json(&err, source)
    }

    #[test]
    fn test_offset_of_first_line() {
        assert_eq!(offset_of("abc", 1, 1), 0);
        assert_eq!(offset_of("abc", 1, 3), 2);
    }

    #[test]
    fn test_offset_of_later_line() {
        assert_eq!(offset_of("ab\ncd\nef", 3, 2), 7);
    }

    #[test]
    fn test_offset_clamped() {
        assert_eq!(offset_of("ab", 9, 9), 2);
    }

    #[test]
    fn test_syntax_error_span() {
        let err = json_error("{\n  \"a\": ,\n}");
        assert!(matches!(err, SourceError::Syntax { line: 2, .. }));
        assert!(!err.message().contains(" at line "));
    }

    #[test]
    fn test_format_mentions_filename() {
        let source = "[1, 2";
        let err = json_error(source);
        let report = err.format(source, "deck.json");
        assert!(report.contains("deck.json"));
    }

    #[test]
    fn test_char_offset() {
        assert_eq!(char_offset("abc", 2), 2);
        assert_eq!(char_offset("éé,x", 5), 3);
        assert_eq!(char_offset("é", 1), 1);
        assert_eq!(char_offset("ab", 9), 2);
    }

    #[test]
    fn test_format_after_multibyte_labels() {
        let label = "é".repeat(40);
        let source = format!(r#"{{"type":"bar","labels":["{}"],"data":[1,}}"#, label);
        let err = serde_json::from_str::<crate::chart::Chart>(&source).unwrap_err();
        let err = SourceError::from_json(&err, &source);
        assert!(err.span().end > source.chars().count());

        let report = err.format(&source, "c.json");
        assert!(report.contains("c.json"), "report lost its location: {}", report);
        assert!(report.contains("data"));
    }

    #[test]
    fn test_data_error() {
        let source = r#"{"type": "bar", "data": "nope"}"#;
        let err = serde_json::from_str::<crate::chart::Chart>(source).unwrap_err();
        let err = SourceError::from_json(&err, source);
        assert!(matches!(err, SourceError::Data { .. }));
    }
}
