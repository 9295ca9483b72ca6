use super::{build_table, column_names};
use core_types::{Param, Table, Value};
use sqlx::query::Query;
use sqlx::sqlite::{SqliteArguments, SqliteConnection, SqliteRow};
use sqlx::{Executor, Row, Sqlite, Statement};

pub async fn fetch_table(
    conn: &mut SqliteConnection,
    sql: &str,
    params: &[Param],
) -> Result<Table, sqlx::Error> {
    let statement = (&mut *conn).prepare(sql).await?;
    let columns = column_names(statement.columns());
    let rows = bind(statement.query(), params).fetch_all(&mut *conn).await?;
    build_table(columns, &rows, decode_cell)
}

pub async fn execute(
    conn: &mut SqliteConnection,
    sql: &str,
    params: &[Param],
) -> Result<u64, sqlx::Error> {
    let result = bind(sqlx::query(sql), params).execute(conn).await?;
    Ok(result.rows_affected())
}

pub async fn fetch_scalar(
    conn: &mut SqliteConnection,
    sql: &str,
    params: &[Param],
) -> Result<Option<Value>, sqlx::Error> {
    let row = bind(sqlx::query(sql), params).fetch_optional(conn).await?;
    row.map(|row| decode_cell(&row, 0)).transpose()
}

fn bind<'q>(
    mut query: Query<'q, Sqlite, SqliteArguments<'q>>,
    params: &[Param],
) -> Query<'q, Sqlite, SqliteArguments<'q>> {
    for param in params {
        query = match param {
            Param::Bool(v) => query.bind(*v),
            Param::Int(v) => query.bind(*v),
            Param::Float(v) => query.bind(*v),
            Param::Text(v) => query.bind(v.clone()),
        };
    }
    query
}

/// Decodes one cell.
///
/// SQLite types belong to values, not columns, so each storage class is tried
/// in turn. A NULL decodes as `None` on the first attempt.
fn decode_cell(row: &SqliteRow, index: usize) -> Result<Value, sqlx::Error> {
    if let Ok(v) = row.try_get::<Option<i64>, _>(index) {
        return Ok(v.map_or(Value::Null, Value::Int));
    }
    if let Ok(v) = row.try_get::<Option<f64>, _>(index) {
        return Ok(v.map_or(Value::Null, Value::Float));
    }
    let v = row.try_get::<Option<String>, _>(index)?;
    Ok(v.map_or(Value::Null, Value::Text))
}
