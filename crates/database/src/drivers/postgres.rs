use super::{build_table, column_names};
use core_types::{Param, Table, Value};
use sqlx::postgres::{PgArguments, PgConnection, PgRow, PgTypeInfo};
use sqlx::query::Query;
use sqlx::{Column, Executor, Postgres, Row, Statement, Type, TypeInfo, ValueRef};

pub async fn fetch_table(
    conn: &mut PgConnection,
    sql: &str,
    params: &[Param],
) -> Result<Table, sqlx::Error> {
    // Prepared first so the column names are known even when no row comes back.
    // The parameter types are declared up front; left to the server, `$1` could
    // be inferred narrower than the value bound to it.
    let types: Vec<PgTypeInfo> = params.iter().map(param_type).collect();
    let statement = (&mut *conn).prepare_with(sql, &types).await?;
    let columns = column_names(statement.columns());
    let rows = bind(statement.query(), params).fetch_all(&mut *conn).await?;
    build_table(columns, &rows, decode_cell)
}

pub async fn execute(
    conn: &mut PgConnection,
    sql: &str,
    params: &[Param],
) -> Result<u64, sqlx::Error> {
    let result = bind(sqlx::query(sql), params).execute(conn).await?;
    Ok(result.rows_affected())
}

pub async fn fetch_scalar(
    conn: &mut PgConnection,
    sql: &str,
    params: &[Param],
) -> Result<Option<Value>, sqlx::Error> {
    let row = bind(sqlx::query(sql), params).fetch_optional(conn).await?;
    row.map(|row| decode_cell(&row, 0)).transpose()
}

fn bind<'q>(
    mut query: Query<'q, Postgres, PgArguments>,
    params: &[Param],
) -> Query<'q, Postgres, PgArguments> {
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

fn param_type(param: &Param) -> PgTypeInfo {
    match param {
        Param::Bool(_) => <bool as Type<Postgres>>::type_info(),
        Param::Int(_) => <i64 as Type<Postgres>>::type_info(),
        Param::Float(_) => <f64 as Type<Postgres>>::type_info(),
        Param::Text(_) => <String as Type<Postgres>>::type_info(),
    }
}

/// Decodes one cell by the column's declared type.
///
/// `CHAR(n)` comes back blank-padded; the padding is dropped. Types without a dedicated `Value` are read as
/// text, which fails for binary-only types.
fn decode_cell(row: &PgRow, index: usize) -> Result<Value, sqlx::Error> {
    if row.try_get_raw(index)?.is_null() {
        return Ok(Value::Null);
    }
    let value = match row.try_column(index)?.type_info().name() {
        "BOOL" => Value::Bool(row.try_get(index)?),
        "INT2" => Value::Int(row.try_get::<i16, _>(index)?.into()),
        "INT4" => Value::Int(row.try_get::<i32, _>(index)?.into()),
        "INT8" => Value::Int(row.try_get(index)?),
        "FLOAT4" => Value::Float(row.try_get::<f32, _>(index)?.into()),
        "FLOAT8" => Value::Float(row.try_get(index)?),
        "NUMERIC" => Value::Decimal(row.try_get(index)?),
        "BPCHAR" => Value::Text(row.try_get::<String, _>(index)?.trim_end().to_string()),
        _ => Value::Text(row.try_get(index)?),
    };
    Ok(value)
}
