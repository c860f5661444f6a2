//! Command-line argument parsing.
//!
//! Defines the CLI structure using clap derive macros.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::collections::DEFAULT_CHUNK_SIZE;

/// extkit: hashing, encoding, compression, chunking and matching helpers.
///
/// Every command reads a file, or standard input when the path is omitted
/// or `-`.
#[derive(Parser, Debug)]
#[command(name = "extkit")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output (diagnostics on stderr).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (text, json).
    #[arg(long, default_value = "text", global = true, env = "EXTKIT_FORMAT")]
    pub format: String,

    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the digest of the input.
    Hash {
        /// Input file (default: stdin).
        input: Option<PathBuf>,

        /// Digest algorithm.
        #[arg(short, long, value_enum, default_value_t = HashAlgorithm::Sha1)]
        algorithm: HashAlgorithm,

        /// Hash this text (ASCII encoded) instead of reading input.
        #[arg(short, long, conflicts_with = "input")]
        text: Option<String>,
    },

    /// Encode the input as base64, or decode base64 text.
    Base64 {
        /// Input file (default: stdin).
        input: Option<PathBuf>,

        /// Decode instead of encode.
        #[arg(short, long)]
        decode: bool,
    },

    /// Encode the input as hex, or decode hex text.
    Hex {
        /// Input file (default: stdin).
        input: Option<PathBuf>,

        /// Decode instead of encode.
        #[arg(short, long)]
        decode: bool,
    },

    /// GZip-compress the input into a file.
    Gzip {
        /// Input file (default: stdin).
        input: Option<PathBuf>,

        /// Output file.
        #[arg(short, long)]
        output: PathBuf,

        /// Decompress instead of compress.
        #[arg(short, long)]
        decompress: bool,
    },

    /// Split the input's lines into chunks.
    Split {
        /// Input file (default: stdin).
        input: Option<PathBuf>,

        /// Maximum number of lines per chunk.
        #[arg(short, long, default_value_t = DEFAULT_CHUNK_SIZE)]
        size: usize,
    },

    /// Print the input lines matching a regular expression.
    Matches {
        /// Regular expression to match.
        pattern: String,

        /// Input file (default: stdin).
        input: Option<PathBuf>,

        /// Print the lines that do not match instead.
        #[arg(long)]
        invert: bool,
    },
}

/// Digest algorithms for the `hash` command.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashAlgorithm {
    /// SHA-1 (40 hex digits).
    Sha1,
    /// MD5 (32 hex digits).
    Md5,
}

impl HashAlgorithm {
    /// Lowercase algorithm name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sha1 => "sha1",
            Self::Md5 => "md5",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_parse_matches_invert_with_verbose() {
        let cli = Cli::try_parse_from(["extkit", "matches", "^ok", "-v", "--invert"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Commands::Matches { invert: true, ref pattern, input: None } if pattern == "^ok"
        ));
    }

    #[test]
    fn test_cli_parse_hash() {
        let cli = Cli::try_parse_from(["extkit", "hash", "--algorithm", "md5", "input.txt"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Hash {
                algorithm: HashAlgorithm::Md5,
                ref input,
                text: None,
            } if input.as_deref() == Some(std::path::Path::new("input.txt"))
        ));
    }

    #[test]
    fn test_cli_parse_split_default_size() {
        let cli = Cli::try_parse_from(["extkit", "split"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Split { size: DEFAULT_CHUNK_SIZE, input: None }
        ));
    }

    #[test]
    fn test_cli_global_flags() {
        let cli = Cli::try_parse_from(["extkit", "hex", "--format", "json", "-v"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.format, "json");
    }

    #[test]
    fn test_cli_gzip_requires_output() {
        assert!(Cli::try_parse_from(["extkit", "gzip", "in.txt"]).is_err());
    }

    #[test]
    fn test_hash_text_conflicts_with_input() {
        assert!(Cli::try_parse_from(["extkit", "hash", "file", "--text", "abc"]).is_err());
    }
}
