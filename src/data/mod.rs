//! Data-access helpers over `rusqlite`.
//!
//! Typed, name-based getters for result rows and named-parameter binding
//! for prepared statements.

pub mod row;
pub mod statement;

pub use row::DataRowExt;
pub use statement::{ConnectionExt, PARAMETER_PREFIX, StatementExt, normalize_parameter_name};
