//! Named-parameter binding and command preparation.

use std::borrow::Cow;

use rusqlite::types::ToSql;
use rusqlite::{CachedStatement, Connection, Statement};

use crate::error::{DataError, Result};

/// Prefix added to parameter names that carry none.
pub const PARAMETER_PREFIX: char = '@';

/// Prefixes `SQLite` accepts for named parameters.
const NAMED_PREFIXES: [char; 3] = [':', '@', '$'];

/// Adds [`PARAMETER_PREFIX`] to `name` unless it already has a `SQLite`
/// parameter prefix.
///
/// # Examples
///
/// ```
/// use extkit::data::normalize_parameter_name;
///
/// assert_eq!(normalize_parameter_name("id"), "@id");
/// assert_eq!(normalize_parameter_name(":id"), ":id");
/// ```
pub fn normalize_parameter_name(name: &str) -> Cow<'_, str> {
    if name.starts_with(&NAMED_PREFIXES[..]) {
        Cow::Borrowed(name)
    } else {
        Cow::Owned(format!("{PARAMETER_PREFIX}{name}"))
    }
}

/// Binding helpers for prepared statements.
pub trait StatementExt {
    /// Binds `value` to the parameter called `name` and returns its one-based
    /// index.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::ParameterNotFound`] when the statement has no
    /// parameter with that name.
    fn bind_parameter<T: ToSql>(&mut self, name: &str, value: T) -> Result<usize>;

    /// Binds several named parameters in order.
    ///
    /// # Errors
    ///
    /// Stops at the first parameter that fails to bind.
    fn bind_parameters(&mut self, parameters: &[(&str, &dyn ToSql)]) -> Result<()> {
        for (name, value) in parameters {
            self.bind_parameter(name, value)?;
        }
        Ok(())
    }
}

impl StatementExt for Statement<'_> {
    fn bind_parameter<T: ToSql>(&mut self, name: &str, value: T) -> Result<usize> {
        let name = normalize_parameter_name(name);
        let index = self
            .parameter_index(&name)?
            .ok_or_else(|| DataError::ParameterNotFound {
                name: name.to_string(),
            })?;
        self.raw_bind_parameter(index, value)?;
        tracing::trace!(parameter = %name, index, "bound parameter");
        Ok(index)
    }
}

/// Command helpers for a connection.
pub trait ConnectionExt {
    /// Prepares `sql` through the connection's statement cache.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::Database`] when the SQL does not compile.
    fn prepare_command(&self, sql: &str) -> Result<CachedStatement<'_>>;
}

impl ConnectionExt for Connection {
    fn prepare_command(&self, sql: &str) -> Result<CachedStatement<'_>> {
        Ok(self.prepare_cached(sql)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DataRowExt;
    use crate::error::Error;

    #[test]
    fn test_normalize_parameter_name() {
        assert_eq!(normalize_parameter_name("name"), "@name");
        assert_eq!(normalize_parameter_name("@name"), "@name");
        assert_eq!(normalize_parameter_name(":name"), ":name");
        assert_eq!(normalize_parameter_name("$name"), "$name");
    }

    #[test]
    fn test_bind_parameter_adds_prefix() {
        let conn = Connection::open_in_memory().unwrap();
        let mut stmt = conn.prepare_command("SELECT @name || '!' AS greeting").unwrap();
        assert_eq!(stmt.bind_parameter("name", "hi").unwrap(), 1);

        let mut rows = stmt.raw_query();
        let row = rows.next().unwrap().unwrap();
        assert_eq!(row.get_string("greeting", true).unwrap().as_deref(), Some("hi!"));
    }

    #[test]
    fn test_bind_parameter_keeps_sqlite_prefix() {
        let conn = Connection::open_in_memory().unwrap();
        let mut stmt = conn.prepare_command("SELECT :a + $b AS total").unwrap();
        assert_eq!(stmt.bind_parameter(":a", 2).unwrap(), 1);
        assert_eq!(stmt.bind_parameter("$b", 3).unwrap(), 2);

        let mut rows = stmt.raw_query();
        let row = rows.next().unwrap().unwrap();
        assert_eq!(row.get_i64("total").unwrap(), 5);
    }

    #[test]
    fn test_bind_parameters() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch("CREATE TABLE people (name TEXT NOT NULL, age INTEGER)")
            .unwrap();

        let mut insert = conn
            .prepare_command("INSERT INTO people (name, age) VALUES (@name, @age)")
            .unwrap();
        let parameters: [(&str, &dyn ToSql); 2] = [("name", &"Grace"), ("age", &85)];
        insert.bind_parameters(&parameters).unwrap();
        assert_eq!(insert.raw_execute().unwrap(), 1);

        let age = conn
            .query_row("SELECT age FROM people WHERE name = 'Grace'", [], |row| {
                Ok(row.get_i32("age"))
            })
            .unwrap()
            .unwrap();
        assert_eq!(age, 85);
    }

    #[test]
    fn test_unknown_parameter() {
        let conn = Connection::open_in_memory().unwrap();
        let mut stmt = conn.prepare_command("SELECT @known").unwrap();
        let err = stmt.bind_parameter("unknown", 1).unwrap_err();
        assert!(matches!(
            err,
            Error::Data(DataError::ParameterNotFound { ref name }) if name == "@unknown"
        ));
    }

    #[test]
    fn test_prepare_command_invalid_sql() {
        let conn = Connection::open_in_memory().unwrap();
        assert!(matches!(
            conn.prepare_command("SELEC nonsense"),
            Err(Error::Data(DataError::Database(_)))
        ));
    }
}
