//! Collection extension traits.
//!
//! Reordering helpers for mutable lists, chunking and closure-equality
//! helpers for sequences, and safe lookup and merge helpers for maps.
//!
//! Every trait is implemented for the standard collection, for mutable
//! references to it and for `Option` of it. A `None` receiver stands in for
//! an absent collection and fails with
//! [`CollectionError::MissingCollection`](crate::error::CollectionError)
//! before any other validation runs.

pub mod comparer;
pub mod dictionary;
pub mod list;
pub mod sequence;

pub use comparer::LambdaComparer;
pub use dictionary::{DictionaryExt, DictionaryMergeExt, Mapping};
pub use list::ListExt;
pub use sequence::{OptionalSequenceExt, SequenceExt, split};

/// Default chunk size used by the CLI `split` command.
pub const DEFAULT_CHUNK_SIZE: usize = 10;
