//! # extkit
//!
//! Extension helpers for everyday collections, strings, byte buffers and
//! `SQLite` result rows.
//!
//! ## Features
//!
//! - **Lists**: move elements up or down, swap by index or value
//! - **Sequences**: fixed-size chunking, closure-based equality for set operations
//! - **Maps**: default-value lookup and duplicate-checked merging
//! - **Strings and bytes**: token trimming, base64/hex, SHA-1/MD5, `GZip`
//! - **Data rows**: typed getters by column name, named-parameter binding
//!
//! Absent collections are modelled as `None` receivers and reported as
//! [`CollectionError::MissingCollection`](error::CollectionError).

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
// Note: unsafe is needed for memory-mapped I/O (memmap2)
#![warn(unsafe_code)]

pub mod cli;
pub mod collections;
pub mod data;
pub mod error;
pub mod io;
pub mod primitives;

// Re-export commonly used types at crate root
pub use error::{Error, Result};

// Re-export collection traits
pub use collections::{
    DictionaryExt, DictionaryMergeExt, LambdaComparer, ListExt, OptionalSequenceExt, SequenceExt,
};

// Re-export primitive helpers
pub use primitives::{
    BytesExt, Comparison, DeepClone, EnumDescription, ErrorReport, OptionalStrExt, StrExt,
    StringBufExt,
};

// Re-export data-access traits
pub use data::{ConnectionExt, DataRowExt, StatementExt};

// Re-export CLI types
pub use cli::{Cli, Commands, OutputFormat};
