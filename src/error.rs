//! Error types for extkit operations.
//!
//! This module provides the error hierarchy using `thiserror` for all
//! extension helpers: collection reordering and merging, encoding and
//! compression, data-row access, and CLI commands.

use thiserror::Error;

/// Result type alias for extkit operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Comprehensive error types for extkit operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Collection-related errors (lists, sequences, maps).
    #[error("collection error: {0}")]
    Collection(#[from] CollectionError),

    /// Encoding, hashing, compression and serialization errors.
    #[error("codec error: {0}")]
    Codec(#[from] CodecError),

    /// Data-access errors (rows, statements).
    #[error("data error: {0}")]
    Data(#[from] DataError),

    /// CLI command errors.
    #[error("command error: {0}")]
    Command(#[from] CommandError),
}

/// Collection-specific errors.
///
/// Missing-collection, index-out-of-range and value-not-found are kept as
/// separate variants so callers can tell them apart.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CollectionError {
    /// The collection argument was absent.
    #[error("missing collection: {name}")]
    MissingCollection {
        /// Name of the absent argument.
        name: &'static str,
    },

    /// A required argument was absent or outside its valid range.
    #[error("invalid argument {name}: {reason}")]
    InvalidArgument {
        /// Name of the offending argument.
        name: &'static str,
        /// Why the argument was rejected.
        reason: String,
    },

    /// An index fell outside the collection bounds.
    #[error("index {index} out of range for {name} (length {len})")]
    IndexOutOfRange {
        /// Name of the index argument that failed.
        name: &'static str,
        /// The supplied index.
        index: usize,
        /// Length of the collection.
        len: usize,
    },

    /// A value-based lookup found no matching element.
    #[error("{name} is not part of this list")]
    ValueNotFound {
        /// Name of the value argument that was not found.
        name: &'static str,
    },

    /// The operation is not valid for the current collection contents.
    #[error("invalid operation: {reason}")]
    InvalidOperation {
        /// Why the operation was rejected.
        reason: String,
    },

    /// A key being inserted already exists in the destination map.
    #[error("an item with the same key has already been added: {key}")]
    DuplicateKey {
        /// Debug rendering of the duplicate key.
        key: String,
    },
}

/// Encoding, hashing, compression and serialization errors.
#[derive(Error, Debug)]
pub enum CodecError {
    /// Base64 decoding error.
    #[error("invalid base64: {0}")]
    Base64(String),

    /// Hex decoding error.
    #[error("invalid hex: {0}")]
    Hex(String),

    /// Invalid UTF-8 encountered at specific byte offset.
    #[error("invalid UTF-8 at byte offset {offset}")]
    Utf8 {
        /// Byte offset where invalid UTF-8 was found.
        offset: usize,
    },

    /// Regex compilation error.
    #[error("regex error: {0}")]
    Regex(String),

    /// GZip compression or decompression failure.
    #[error("compression error: {0}")]
    Compression(String),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// A string could not be parsed into an enum variant.
    #[error("the specified string value {value} cannot be converted to an enum value of type: {type_name}")]
    InvalidEnum {
        /// The string that failed to parse.
        value: String,
        /// The target enum type.
        type_name: &'static str,
    },
}

/// Data-access errors for row and statement helpers.
#[derive(Error, Debug)]
pub enum DataError {
    /// Column name not present in the result set.
    #[error("the specified column: \"{column}\" does not exist in the returned result set")]
    ColumnNotFound {
        /// Name of the missing column.
        column: String,
    },

    /// A required column holds `NULL`.
    #[error("unable to read a {data_type} value from column {column} because it's null")]
    RequiredValue {
        /// Name of the column.
        column: String,
        /// Type the caller asked for.
        data_type: &'static str,
    },

    /// Named parameter not present in the statement.
    #[error("parameter not found: {name}")]
    ParameterNotFound {
        /// Normalized parameter name.
        name: String,
    },

    /// Column value could not be converted to the requested type.
    #[error("cannot convert column {column} to {data_type}: {reason}")]
    Conversion {
        /// Name of the column.
        column: String,
        /// Type the caller asked for.
        data_type: &'static str,
        /// Reason for failure.
        reason: String,
    },

    /// Database error passed through from the driver.
    #[error("database error: {0}")]
    Database(String),
}

/// CLI command-specific errors.
#[derive(Error, Debug)]
pub enum CommandError {
    /// Invalid argument provided.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Missing required argument.
    #[error("missing required argument: {0}")]
    MissingArgument(String),

    /// Failed to read input.
    #[error("failed to read input: {path}: {reason}")]
    ReadFailed {
        /// Path of the input (or `-` for stdin).
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// Failed to write output.
    #[error("failed to write output: {path}: {reason}")]
    WriteFailed {
        /// Path of the output.
        path: String,
        /// Reason for failure.
        reason: String,
    },
}

// Implement From traits for library errors

impl From<rusqlite::Error> for Error {
    fn from(err: rusqlite::Error) -> Self {
        Self::Data(DataError::from(err))
    }
}

impl From<rusqlite::Error> for DataError {
    fn from(err: rusqlite::Error) -> Self {
        match err {
            rusqlite::Error::InvalidColumnName(column) => Self::ColumnNotFound { column },
            other => Self::Database(other.to_string()),
        }
    }
}

impl From<regex::Error> for CodecError {
    fn from(err: regex::Error) -> Self {
        Self::Regex(err.to_string())
    }
}

impl From<serde_json::Error> for CodecError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<base64::DecodeError> for CodecError {
    fn from(err: base64::DecodeError) -> Self {
        Self::Base64(err.to_string())
    }
}

impl From<hex::FromHexError> for CodecError {
    fn from(err: hex::FromHexError) -> Self {
        Self::Hex(err.to_string())
    }
}

impl From<std::string::FromUtf8Error> for CodecError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        Self::Utf8 {
            offset: err.utf8_error().valid_up_to(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::from(CommandError::MissingArgument("pattern".to_string()));
        assert_eq!(err.to_string(), "command error: missing required argument: pattern");
    }

    #[test]
    fn test_collection_error_display() {
        let err = CollectionError::MissingCollection { name: "list" };
        assert_eq!(err.to_string(), "missing collection: list");

        let err = CollectionError::IndexOutOfRange {
            name: "to_index",
            index: 7,
            len: 3,
        };
        assert_eq!(err.to_string(), "index 7 out of range for to_index (length 3)");

        let err = CollectionError::ValueNotFound { name: "element" };
        assert_eq!(err.to_string(), "element is not part of this list");
    }

    #[test]
    fn test_collection_error_kinds_are_distinct() {
        let missing = CollectionError::MissingCollection { name: "list" };
        let range = CollectionError::IndexOutOfRange {
            name: "index",
            index: 1,
            len: 0,
        };
        let absent = CollectionError::ValueNotFound { name: "element" };
        assert_ne!(missing, range);
        assert_ne!(range, absent);
        assert_ne!(missing, absent);
    }

    #[test]
    fn test_data_error_display() {
        let err = DataError::ColumnNotFound {
            column: "age".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "the specified column: \"age\" does not exist in the returned result set"
        );

        let err = DataError::RequiredValue {
            column: "age".to_string(),
            data_type: "i32",
        };
        assert_eq!(
            err.to_string(),
            "unable to read a i32 value from column age because it's null"
        );
    }

    #[test]
    fn test_codec_error_display() {
        let err = CodecError::Utf8 { offset: 42 };
        assert_eq!(err.to_string(), "invalid UTF-8 at byte offset 42");

        let err = CodecError::InvalidEnum {
            value: "Purple".to_string(),
            type_name: "Color",
        };
        assert!(err.to_string().contains("Purple"));
        assert!(err.to_string().contains("Color"));
    }

    #[test]
    fn test_command_error_display() {
        let err = CommandError::MissingArgument("--size".to_string());
        assert_eq!(err.to_string(), "missing required argument: --size");
    }

    #[test]
    fn test_error_from_collection() {
        let err: Error = CollectionError::MissingCollection { name: "list" }.into();
        assert!(matches!(err, Error::Collection(_)));
    }

    #[test]
    fn test_from_rusqlite_invalid_column_name() {
        let rusqlite_err = rusqlite::Error::InvalidColumnName("missing".to_string());
        let err: DataError = rusqlite_err.into();
        assert!(matches!(err, DataError::ColumnNotFound { ref column } if column == "missing"));
    }

    #[test]
    fn test_from_rusqlite_error_to_error() {
        let rusqlite_err = rusqlite::Error::InvalidQuery;
        let err: Error = rusqlite_err.into();
        assert!(matches!(err, Error::Data(DataError::Database(_))));
    }

    #[test]
    #[allow(clippy::invalid_regex)]
    fn test_from_regex_error_to_codec_error() {
        let regex_err = regex::Regex::new("[invalid").unwrap_err();
        let err: CodecError = regex_err.into();
        assert!(matches!(err, CodecError::Regex(_)));
    }

    #[test]
    fn test_from_serde_json_error_to_codec_error() {
        let json_err: serde_json::Error = serde_json::from_str::<i32>("invalid").unwrap_err();
        let err: CodecError = json_err.into();
        assert!(matches!(err, CodecError::Serialization(_)));
    }

    #[test]
    fn test_from_hex_error() {
        let hex_err = hex::decode("zz").unwrap_err();
        let err: CodecError = hex_err.into();
        assert!(matches!(err, CodecError::Hex(_)));
    }

    #[test]
    fn test_from_string_utf8_error_to_codec_error() {
        let invalid_bytes = vec![0x61, 0xff, 0xfe];
        let utf8_err = String::from_utf8(invalid_bytes).unwrap_err();
        let err: CodecError = utf8_err.into();
        assert!(matches!(err, CodecError::Utf8 { offset: 1 }));
    }
}
