//! I/O utilities for the command-line front end.
//!
//! Reads input files (memory mapped when large) or standard input, and
//! writes output files.

pub mod reader;

pub use reader::{InputReader, MMAP_THRESHOLD, STDIN_PATH, read_input, read_input_text, write_output};
