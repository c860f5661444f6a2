//! Output formatting for CLI commands.
//!
//! Supports text and JSON output formats.

use crate::error::Error;
use crate::primitives::ErrorReport;
use serde::Serialize;
use std::error::Error as StdError;
use std::fmt::Write;

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// JSON output.
    Json,
}

impl OutputFormat {
    /// Parses format from string.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Formats a digest.
#[must_use]
pub fn format_digest(algorithm: &str, digest: &str, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format!("{digest}\n"),
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct Digest<'a> {
                algorithm: &'a str,
                digest: &'a str,
            }
            format_json(&Digest { algorithm, digest })
        }
    }
}

/// Formats the result of an encode or decode.
#[must_use]
pub fn format_encoded(encoding: &str, decoded: bool, value: &str, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format!("{value}\n"),
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct Encoded<'a> {
                encoding: &'a str,
                operation: &'a str,
                value: &'a str,
            }
            format_json(&Encoded {
                encoding,
                operation: if decoded { "decode" } else { "encode" },
                value,
            })
        }
    }
}

/// Summary of a compression run.
#[derive(Debug, Clone, Serialize)]
pub struct GzipSummary {
    /// `compress` or `decompress`.
    pub operation: &'static str,
    /// Input size in bytes.
    pub input_bytes: usize,
    /// Output size in bytes.
    pub output_bytes: usize,
    /// Where the output was written.
    pub output: String,
}

/// Formats a compression summary.
#[must_use]
pub fn format_gzip_summary(summary: &GzipSummary, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format!(
            "{}: {} -> {} ({})\n",
            summary.operation,
            format_size(summary.input_bytes),
            format_size(summary.output_bytes),
            summary.output
        ),
        OutputFormat::Json => format_json(summary),
    }
}

/// Formats line chunks.
#[must_use]
pub fn format_chunks(chunks: &[Vec<&str>], format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format_chunks_text(chunks),
        OutputFormat::Json => format_json(&chunks),
    }
}

fn format_chunks_text(chunks: &[Vec<&str>]) -> String {
    if chunks.is_empty() {
        return "No chunks.\n".to_string();
    }

    let mut output = String::new();
    let mut first_line = 1;
    for (index, chunk) in chunks.iter().enumerate() {
        let last_line = first_line + chunk.len() - 1;
        let _ = writeln!(
            output,
            "--- chunk {} (lines {first_line}-{last_line}) ---",
            index + 1
        );
        for line in chunk {
            output.push_str(line);
            output.push('\n');
        }
        first_line = last_line + 1;
    }
    output
}

/// A line that matched (or, inverted, did not match) a pattern.
#[derive(Debug, Clone, Serialize)]
pub struct LineMatch {
    /// One-based line number.
    pub line: usize,
    /// The line text.
    pub text: String,
}

/// Formats matching lines.
#[must_use]
pub fn format_matches(matches: &[LineMatch], pattern: &str, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => {
            if matches.is_empty() {
                return format!("No lines match '{pattern}'.\n");
            }
            let mut output = String::new();
            for m in matches {
                let _ = writeln!(output, "{:>6}: {}", m.line, m.text);
            }
            output
        }
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct Matches<'a> {
                pattern: &'a str,
                count: usize,
                matches: &'a [LineMatch],
            }
            format_json(&Matches {
                pattern,
                count: matches.len(),
                matches,
            })
        }
    }
}

/// Formats an error for display.
///
/// Text output is the full error report; JSON output carries the message
/// and the messages of its causes.
#[must_use]
pub fn format_error(error: &Error, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => error.report(),
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct ErrorOutput {
                error: String,
                causes: Vec<String>,
            }
            let mut causes = Vec::new();
            let mut source = StdError::source(error);
            while let Some(cause) = source {
                causes.push(cause.to_string());
                source = cause.source();
            }
            format_json(&ErrorOutput {
                error: error.to_string(),
                causes,
            })
        }
    }
}

/// Formats a value as JSON.
fn format_json<T: Serialize + ?Sized>(value: &T) -> String {
    let mut json = serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string());
    json.push('\n');
    json
}

/// Formats a byte size as human-readable.
#[allow(clippy::cast_precision_loss)]
fn format_size(bytes: usize) -> String {
    if bytes < 1024 {
        format!("{bytes} B")
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else if bytes < 1024 * 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    } else {
        format!("{:.1} GB", bytes as f64 / (1024.0 * 1024.0 * 1024.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CodecError;

    #[test]
    fn test_output_format_from_str() {
        assert_eq!(OutputFormat::parse("json"), OutputFormat::Json);
        assert_eq!(OutputFormat::parse("JSON"), OutputFormat::Json);
        assert_eq!(OutputFormat::parse("text"), OutputFormat::Text);
        assert_eq!(OutputFormat::parse("unknown"), OutputFormat::Text);
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(100), "100 B");
        assert_eq!(format_size(1024), "1.0 KB");
        assert_eq!(format_size(1024 * 1024), "1.0 MB");
    }

    #[test]
    fn test_format_digest() {
        assert_eq!(format_digest("md5", "abc", OutputFormat::Text), "abc\n");
        let json = format_digest("md5", "abc", OutputFormat::Json);
        assert!(json.contains("\"algorithm\": \"md5\""));
        assert!(json.contains("\"digest\": \"abc\""));
    }

    #[test]
    fn test_format_chunks_text() {
        let chunks = vec![vec!["a", "b"], vec!["c"]];
        let text = format_chunks(&chunks, OutputFormat::Text);
        assert!(text.contains("--- chunk 1 (lines 1-2) ---\na\nb\n"));
        assert!(text.contains("--- chunk 2 (lines 3-3) ---\nc\n"));
        assert_eq!(format_chunks(&[], OutputFormat::Text), "No chunks.\n");
    }

    #[test]
    fn test_format_chunks_json() {
        let chunks = vec![vec!["a", "b"], vec!["c"]];
        let json = format_chunks(&chunks, OutputFormat::Json);
        let parsed: Vec<Vec<String>> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, vec![vec!["a", "b"], vec!["c"]]);
    }

    #[test]
    fn test_format_matches() {
        let matches = vec![LineMatch {
            line: 3,
            text: "error: disk full".to_string(),
        }];
        let text = format_matches(&matches, "error", OutputFormat::Text);
        assert_eq!(text, "     3: error: disk full\n");
        assert_eq!(
            format_matches(&[], "x", OutputFormat::Text),
            "No lines match 'x'.\n"
        );
        let json = format_matches(&matches, "error", OutputFormat::Json);
        assert!(json.contains("\"count\": 1"));
    }

    #[test]
    fn test_format_error() {
        let err = Error::from(CodecError::Hex("odd length".to_string()));
        let text = format_error(&err, OutputFormat::Text);
        assert!(text.contains("Error Message: codec error: invalid hex: odd length."));

        let json = format_error(&err, OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["error"], "codec error: invalid hex: odd length");
        assert_eq!(value["causes"][0], "invalid hex: odd length");
    }
}
