//! CLI layer for extkit.
//!
//! Provides the command-line interface using clap, with commands for
//! hashing, encoding, compressing, chunking and matching input.

pub mod commands;
pub mod output;
pub mod parser;

pub use commands::execute;
pub use output::OutputFormat;
pub use parser::{Cli, Commands, HashAlgorithm};
