use crate::connection::{Connection, acquire, release, scheme};
use crate::drivers::{postgres, sqlite};
use crate::error::DatabaseError;
use core_types::{Param, Table, Value};
use std::fmt;

/// The data access layer.
///
/// Holds nothing but the connection descriptor. Each operation acquires a
/// connection, runs one statement with its parameters bound positionally, and
/// releases the connection before returning, whether the statement succeeded
/// or not.
#[derive(Clone)]
pub struct Database {
    url: String,
}

impl fmt::Debug for Database {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The URL may carry credentials.
        f.debug_struct("Database")
            .field("driver", &scheme(&self.url))
            .finish()
    }
}

impl Database {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// Runs a statement and returns every row, with the column names of its
    /// SELECT list. An empty result still carries its columns.
    pub async fn query(&self, sql: &str, params: &[Param]) -> Result<Table, DatabaseError> {
        let mut conn = acquire(&self.url).await.map_err(|e| fail(sql, e))?;
        let outcome = match &mut conn {
            Connection::Postgres(conn) => postgres::fetch_table(conn, sql, params).await,
            Connection::Sqlite(conn) => sqlite::fetch_table(conn, sql, params).await,
        };
        release(conn).await;

        let table = outcome.map_err(|e| fail(sql, e))?;
        tracing::debug!(rows = table.len(), columns = table.columns().len(), "Query completed.");
        Ok(table)
    }

    /// Runs a statement and returns the number of rows it affected.
    pub async fn execute(&self, sql: &str, params: &[Param]) -> Result<u64, DatabaseError> {
        let mut conn = acquire(&self.url).await.map_err(|e| fail(sql, e))?;
        let outcome = match &mut conn {
            Connection::Postgres(conn) => postgres::execute(conn, sql, params).await,
            Connection::Sqlite(conn) => sqlite::execute(conn, sql, params).await,
        };
        release(conn).await;

        let rows_affected = outcome.map_err(|e| fail(sql, e))?;
        tracing::debug!(rows_affected, "Statement executed.");
        Ok(rows_affected)
    }

    /// Runs a statement and returns the first column of its first row,
    /// or `None` when it produced no rows.
    pub async fn scalar(&self, sql: &str, params: &[Param]) -> Result<Option<Value>, DatabaseError> {
        let mut conn = acquire(&self.url).await.map_err(|e| fail(sql, e))?;
        let outcome = match &mut conn {
            Connection::Postgres(conn) => postgres::fetch_scalar(conn, sql, params).await,
            Connection::Sqlite(conn) => sqlite::fetch_scalar(conn, sql, params).await,
        };
        release(conn).await;

        outcome.map_err(|e| fail(sql, e))
    }
}

/// The one place database failures are logged and converted.
fn fail(sql: &str, err: impl fmt::Display) -> DatabaseError {
    tracing::error!(error = %err, statement = sql.trim(), "Database error.");
    DatabaseError::new(err.to_string())
}
