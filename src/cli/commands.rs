//! CLI command implementations.
//!
//! Contains the business logic for each CLI command.

use crate::cli::output::{
    GzipSummary, LineMatch, OutputFormat, format_chunks, format_digest, format_encoded,
    format_gzip_summary, format_matches,
};
use crate::cli::parser::{Cli, Commands, HashAlgorithm};
use crate::collections::SequenceExt;
use crate::error::{CodecError, CommandError, Result};
use crate::io::{read_input, read_input_text, write_output};
use crate::primitives::{BytesExt, StrExt};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use regex::Regex;
use std::path::{Path, PathBuf};

/// Executes the CLI command.
///
/// # Arguments
///
/// * `cli` - Parsed CLI arguments.
///
/// # Returns
///
/// Result with output string on success.
///
/// # Errors
///
/// Returns an error if the command fails to execute.
pub fn execute(cli: &Cli) -> Result<String> {
    let format = OutputFormat::parse(&cli.format);

    match &cli.command {
        Commands::Hash {
            input,
            algorithm,
            text,
        } => cmd_hash(input.as_deref(), *algorithm, text.as_deref(), format),
        Commands::Base64 { input, decode } => cmd_base64(input.as_deref(), *decode, format),
        Commands::Hex { input, decode } => cmd_hex(input.as_deref(), *decode, format),
        Commands::Gzip {
            input,
            output,
            decompress,
        } => cmd_gzip(input.as_deref(), output, *decompress, format),
        Commands::Split { input, size } => cmd_split(input.as_deref(), *size, format),
        Commands::Matches {
            pattern,
            input,
            invert,
        } => cmd_matches(pattern, input.as_deref(), *invert, format),
    }
}

fn cmd_hash(
    input: Option<&Path>,
    algorithm: HashAlgorithm,
    text: Option<&str>,
    format: OutputFormat,
) -> Result<String> {
    let digest = match text {
        Some(text) => match algorithm {
            HashAlgorithm::Sha1 => text.to_sha1_hash(),
            HashAlgorithm::Md5 => text.to_md5_hash(),
        },
        None => {
            let bytes = read_input(input)?;
            match algorithm {
                HashAlgorithm::Sha1 => bytes.sha1_hash(),
                HashAlgorithm::Md5 => bytes.md5_hash(),
            }
        }
    };

    let digest = digest
        .ok_or_else(|| CommandError::InvalidArgument("cannot hash empty input".to_string()))?;
    Ok(format_digest(algorithm.name(), &digest, format))
}

fn cmd_base64(input: Option<&Path>, decode: bool, format: OutputFormat) -> Result<String> {
    let value = if decode {
        read_input_text(input)?.trim().from_base64()?
    } else {
        STANDARD.encode(read_input(input)?)
    };
    Ok(format_encoded("base64", decode, &value, format))
}

fn cmd_hex(input: Option<&Path>, decode: bool, format: OutputFormat) -> Result<String> {
    let value = if decode {
        read_input_text(input)?.trim().from_hex()?
    } else {
        hex::encode(read_input(input)?)
    };
    Ok(format_encoded("hex", decode, &value, format))
}

fn cmd_gzip(
    input: Option<&Path>,
    output: &PathBuf,
    decompress: bool,
    format: OutputFormat,
) -> Result<String> {
    let bytes = read_input(input)?;
    let (operation, result) = if decompress {
        ("decompress", bytes.gzip_decompress()?)
    } else {
        ("compress", bytes.gzip_compress()?)
    };
    write_output(output, &result)?;

    let summary = GzipSummary {
        operation,
        input_bytes: bytes.len(),
        output_bytes: result.len(),
        output: output.to_string_lossy().to_string(),
    };
    Ok(format_gzip_summary(&summary, format))
}

fn cmd_split(input: Option<&Path>, size: usize, format: OutputFormat) -> Result<String> {
    let text = read_input_text(input)?;
    let chunks = text.lines().split(size)?;
    Ok(format_chunks(&chunks, format))
}

fn cmd_matches(
    pattern: &str,
    input: Option<&Path>,
    invert: bool,
    format: OutputFormat,
) -> Result<String> {
    if pattern.is_empty() {
        return Err(CommandError::MissingArgument("pattern".to_string()).into());
    }
    let regex = Regex::new(pattern).map_err(CodecError::from)?;
    let text = read_input_text(input)?;

    let matches: Vec<LineMatch> = text
        .lines()
        .enumerate()
        .filter(|(_, line)| regex.is_match(line) != invert)
        .map(|(index, line)| LineMatch {
            line: index + 1,
            text: line.to_string(),
        })
        .collect();

    Ok(format_matches(&matches, pattern, format))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CollectionError, Error};
    use tempfile::TempDir;

    fn write_input(dir: &TempDir, name: &str, content: &[u8]) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_cmd_hash_text() {
        let output = cmd_hash(None, HashAlgorithm::Sha1, Some("abc"), OutputFormat::Text).unwrap();
        assert_eq!(output, "a9993e364706816aba3e25717850c26c9cd0d89d\n");

        let output = cmd_hash(None, HashAlgorithm::Md5, Some("abc"), OutputFormat::Json).unwrap();
        assert!(output.contains("900150983cd24fb0d6963f7d28e17f72"));
        assert!(output.contains("\"algorithm\": \"md5\""));
    }

    #[test]
    fn test_cmd_hash_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_input(&temp_dir, "abc.txt", b"abc");
        let output = cmd_hash(Some(&path), HashAlgorithm::Md5, None, OutputFormat::Text).unwrap();
        assert_eq!(output, "900150983cd24fb0d6963f7d28e17f72\n");
    }

    #[test]
    fn test_cmd_hash_empty_input() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_input(&temp_dir, "empty.txt", b"");
        let err = cmd_hash(Some(&path), HashAlgorithm::Sha1, None, OutputFormat::Text).unwrap_err();
        assert!(matches!(err, Error::Command(CommandError::InvalidArgument(_))));
    }

    #[test]
    fn test_cmd_base64_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let plain = write_input(&temp_dir, "plain.txt", b"hello");
        let encoded = cmd_base64(Some(&plain), false, OutputFormat::Text).unwrap();
        assert_eq!(encoded, "aGVsbG8=\n");

        let packed = write_input(&temp_dir, "packed.txt", encoded.as_bytes());
        let decoded = cmd_base64(Some(&packed), true, OutputFormat::Text).unwrap();
        assert_eq!(decoded, "hello\n");
    }

    #[test]
    fn test_cmd_hex_decode_invalid() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_input(&temp_dir, "bad.txt", b"abc");
        let err = cmd_hex(Some(&path), true, OutputFormat::Text).unwrap_err();
        assert!(matches!(err, Error::Codec(CodecError::Hex(_))));
    }

    #[test]
    fn test_cmd_hex_encode() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_input(&temp_dir, "hi.txt", b"hi");
        let output = cmd_hex(Some(&path), false, OutputFormat::Json).unwrap();
        assert!(output.contains("\"value\": \"6869\""));
        assert!(output.contains("\"operation\": \"encode\""));
    }

    #[test]
    fn test_cmd_gzip_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let content = "line of text\n".repeat(100);
        let plain = write_input(&temp_dir, "plain.txt", content.as_bytes());
        let packed = temp_dir.path().join("out").join("plain.txt.gz");
        let restored = temp_dir.path().join("restored.txt");

        let summary = cmd_gzip(Some(&plain), &packed, false, OutputFormat::Text).unwrap();
        assert!(summary.starts_with("compress: 1.3 KB -> "));

        cmd_gzip(Some(&packed), &restored, true, OutputFormat::Json).unwrap();
        assert_eq!(std::fs::read_to_string(&restored).unwrap(), content);
    }

    #[test]
    fn test_cmd_split() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_input(&temp_dir, "lines.txt", b"1\n2\n3\n4\n5\n");
        let output = cmd_split(Some(&path), 2, OutputFormat::Json).unwrap();
        let chunks: Vec<Vec<String>> = serde_json::from_str(&output).unwrap();
        assert_eq!(chunks, vec![vec!["1", "2"], vec!["3", "4"], vec!["5"]]);
    }

    #[test]
    fn test_cmd_split_zero_size() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_input(&temp_dir, "lines.txt", b"a\nb\n");
        let err = cmd_split(Some(&path), 0, OutputFormat::Text).unwrap_err();
        assert!(matches!(
            err,
            Error::Collection(CollectionError::InvalidArgument { name: "size", .. })
        ));
    }

    #[test]
    fn test_cmd_matches() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_input(&temp_dir, "log.txt", b"ok\nerror: one\nok\nerror: two\n");

        let output = cmd_matches("^error", Some(&path), false, OutputFormat::Text).unwrap();
        assert_eq!(output, "     2: error: one\n     4: error: two\n");

        let output = cmd_matches("^error", Some(&path), true, OutputFormat::Text).unwrap();
        assert_eq!(output, "     1: ok\n     3: ok\n");
    }

    #[test]
    fn test_cmd_matches_invalid_pattern() {
        let err = cmd_matches("(unclosed", None, false, OutputFormat::Text).unwrap_err();
        assert!(matches!(err, Error::Codec(CodecError::Regex(_))));
    }
}
