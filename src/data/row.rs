//! Typed, name-based column access for `SQLite` result rows.
//!
//! Every getter resolves the column by name first, so a misspelled column
//! fails with [`DataError::ColumnNotFound`] regardless of its value. Required
//! getters turn `NULL` into [`DataError::RequiredValue`]; the `try_get_*`
//! variants return the caller's default instead.

use std::any::type_name;
use std::str::FromStr;

use chrono::NaiveDateTime;
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ValueRef};
use rusqlite::{Row, Statement};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::error::{DataError, Result};

/// Name-based getters for a result row.
///
/// Implementors supply [`DataRowExt::column_ordinal`] and
/// [`DataRowExt::read_with`]; the typed getters are built on them.
///
/// # Examples
///
/// ```
/// use extkit::data::DataRowExt;
/// use rusqlite::Connection;
///
/// let conn = Connection::open_in_memory().unwrap();
/// let age = conn
///     .query_row("SELECT 42 AS age, NULL AS nickname", [], |row| {
///         Ok((row.get_i32("age"), row.get_string("nickname", false)))
///     })
///     .unwrap();
/// assert_eq!(age.0.unwrap(), 42);
/// assert_eq!(age.1.unwrap(), None);
/// ```
pub trait DataRowExt {
    /// Zero-based position of `column` in the result set.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::ColumnNotFound`] when no column has that name.
    fn column_ordinal(&self, column: &str) -> Result<usize>;

    /// Reads `column` with a custom converter; `NULL` yields `None`.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::ColumnNotFound`] for an unknown column and
    /// [`DataError::Conversion`] when `convert` rejects the value.
    fn read_with<T, C>(&self, column: &str, convert: C) -> Result<Option<T>>
    where
        C: FnOnce(ValueRef<'_>) -> FromSqlResult<T>;

    /// Reads a non-null value of any [`FromSql`] type.
    fn get_required<T: FromSql>(&self, column: &str) -> Result<T> {
        required(column, self.read_with(column, T::column_result)?)
    }

    /// Reads a value of any [`FromSql`] type, substituting `default` for
    /// `NULL`.
    fn get_optional<T: FromSql>(&self, column: &str, default: Option<T>) -> Result<Option<T>> {
        Ok(self.read_with(column, T::column_result)?.or(default))
    }

    /// Reads a boolean stored as an integer.
    fn get_bool(&self, column: &str) -> Result<bool> {
        self.get_required(column)
    }

    /// Nullable form of [`DataRowExt::get_bool`].
    fn try_get_bool(&self, column: &str, default: Option<bool>) -> Result<Option<bool>> {
        self.get_optional(column, default)
    }

    /// Reads an unsigned byte.
    fn get_u8(&self, column: &str) -> Result<u8> {
        self.get_required(column)
    }

    /// Nullable form of [`DataRowExt::get_u8`].
    fn try_get_u8(&self, column: &str, default: Option<u8>) -> Result<Option<u8>> {
        self.get_optional(column, default)
    }

    /// Reads a 16-bit signed integer.
    fn get_i16(&self, column: &str) -> Result<i16> {
        self.get_required(column)
    }

    /// Nullable form of [`DataRowExt::get_i16`].
    fn try_get_i16(&self, column: &str, default: Option<i16>) -> Result<Option<i16>> {
        self.get_optional(column, default)
    }

    /// Reads a 16-bit unsigned integer.
    fn get_u16(&self, column: &str) -> Result<u16> {
        self.get_required(column)
    }

    /// Nullable form of [`DataRowExt::get_u16`].
    fn try_get_u16(&self, column: &str, default: Option<u16>) -> Result<Option<u16>> {
        self.get_optional(column, default)
    }

    /// Reads a 32-bit signed integer.
    fn get_i32(&self, column: &str) -> Result<i32> {
        self.get_required(column)
    }

    /// Nullable form of [`DataRowExt::get_i32`].
    fn try_get_i32(&self, column: &str, default: Option<i32>) -> Result<Option<i32>> {
        self.get_optional(column, default)
    }

    /// Reads a 32-bit unsigned integer.
    fn get_u32(&self, column: &str) -> Result<u32> {
        self.get_required(column)
    }

    /// Nullable form of [`DataRowExt::get_u32`].
    fn try_get_u32(&self, column: &str, default: Option<u32>) -> Result<Option<u32>> {
        self.get_optional(column, default)
    }

    /// Reads a 64-bit signed integer.
    fn get_i64(&self, column: &str) -> Result<i64> {
        self.get_required(column)
    }

    /// Nullable form of [`DataRowExt::get_i64`].
    fn try_get_i64(&self, column: &str, default: Option<i64>) -> Result<Option<i64>> {
        self.get_optional(column, default)
    }

    /// Reads a 64-bit unsigned integer.
    ///
    /// `SQLite` integers are signed, so negative values fail to convert.
    fn get_u64(&self, column: &str) -> Result<u64> {
        required(column, self.read_with(column, u64_from_sql)?)
    }

    /// Nullable form of [`DataRowExt::get_u64`].
    fn try_get_u64(&self, column: &str, default: Option<u64>) -> Result<Option<u64>> {
        Ok(self.read_with(column, u64_from_sql)?.or(default))
    }

    /// Reads a single-precision float.
    fn get_f32(&self, column: &str) -> Result<f32> {
        self.get_required(column)
    }

    /// Nullable form of [`DataRowExt::get_f32`].
    fn try_get_f32(&self, column: &str, default: Option<f32>) -> Result<Option<f32>> {
        self.get_optional(column, default)
    }

    /// Reads a double-precision float.
    fn get_f64(&self, column: &str) -> Result<f64> {
        self.get_required(column)
    }

    /// Nullable form of [`DataRowExt::get_f64`].
    fn try_get_f64(&self, column: &str, default: Option<f64>) -> Result<Option<f64>> {
        self.get_optional(column, default)
    }

    /// Reads a decimal stored as integer, real or text.
    fn get_decimal(&self, column: &str) -> Result<Decimal> {
        required(column, self.read_with(column, decimal_from_sql)?)
    }

    /// Nullable form of [`DataRowExt::get_decimal`].
    fn try_get_decimal(&self, column: &str, default: Option<Decimal>) -> Result<Option<Decimal>> {
        Ok(self.read_with(column, decimal_from_sql)?.or(default))
    }

    /// Reads a timestamp stored as ISO-8601 text.
    fn get_datetime(&self, column: &str) -> Result<NaiveDateTime> {
        self.get_required(column)
    }

    /// Nullable form of [`DataRowExt::get_datetime`].
    fn try_get_datetime(
        &self,
        column: &str,
        default: Option<NaiveDateTime>,
    ) -> Result<Option<NaiveDateTime>> {
        self.get_optional(column, default)
    }

    /// Reads a UUID stored as a 16-byte blob.
    fn get_uuid(&self, column: &str) -> Result<Uuid> {
        self.get_required(column)
    }

    /// Nullable form of [`DataRowExt::get_uuid`].
    fn try_get_uuid(&self, column: &str, default: Option<Uuid>) -> Result<Option<Uuid>> {
        self.get_optional(column, default)
    }

    /// Reads text. `NULL` is `None` unless `required` is set, in which case
    /// it is an error.
    fn get_string(&self, column: &str, required: bool) -> Result<Option<String>> {
        let value = self.read_with(column, String::column_result)?;
        if required && value.is_none() {
            return Err(required_value::<String>(column));
        }
        Ok(value)
    }
}

impl DataRowExt for Row<'_> {
    fn column_ordinal(&self, column: &str) -> Result<usize> {
        let statement: &Statement<'_> = self.as_ref();
        statement.column_index(column).map_err(|_| {
            DataError::ColumnNotFound {
                column: column.to_string(),
            }
            .into()
        })
    }

    fn read_with<T, C>(&self, column: &str, convert: C) -> Result<Option<T>>
    where
        C: FnOnce(ValueRef<'_>) -> FromSqlResult<T>,
    {
        let ordinal = self.column_ordinal(column)?;
        let value = self.get_ref(ordinal)?;
        if matches!(value, ValueRef::Null) {
            return Ok(None);
        }
        convert(value).map(Some).map_err(|e| {
            DataError::Conversion {
                column: column.to_string(),
                data_type: type_name::<T>(),
                reason: e.to_string(),
            }
            .into()
        })
    }
}

fn required<T>(column: &str, value: Option<T>) -> Result<T> {
    value.ok_or_else(|| required_value::<T>(column))
}

fn required_value<T>(column: &str) -> crate::error::Error {
    DataError::RequiredValue {
        column: column.to_string(),
        data_type: type_name::<T>(),
    }
    .into()
}

fn u64_from_sql(value: ValueRef<'_>) -> FromSqlResult<u64> {
    let signed = i64::column_result(value)?;
    u64::try_from(signed).map_err(|_| FromSqlError::OutOfRange(signed))
}

fn decimal_from_sql(value: ValueRef<'_>) -> FromSqlResult<Decimal> {
    match value {
        ValueRef::Integer(i) => Ok(Decimal::from(i)),
        ValueRef::Real(f) => Decimal::try_from(f).map_err(|e| FromSqlError::Other(Box::new(e))),
        ValueRef::Text(text) => {
            let text = std::str::from_utf8(text).map_err(|e| FromSqlError::Other(Box::new(e)))?;
            Decimal::from_str(text.trim()).map_err(|e| FromSqlError::Other(Box::new(e)))
        }
        _ => Err(FromSqlError::InvalidType),
    }
}
