//! Per-driver statement execution and cell decoding.
//!
//! Both drivers expose the same three functions; `repository` picks one by the
//! kind of connection it acquired.

pub mod postgres;
pub mod sqlite;

use core_types::{Table, Value};
use sqlx::{Column, Row};

fn column_names<C: Column>(columns: &[C]) -> Vec<String> {
    columns.iter().map(|column| column.name().to_string()).collect()
}

fn build_table<R: Row>(
    columns: Vec<String>,
    rows: &[R],
    decode: fn(&R, usize) -> Result<Value, sqlx::Error>,
) -> Result<Table, sqlx::Error> {
    let mut table = Table::new(columns);
    for row in rows {
        let values = (0..row.len())
            .map(|index| decode(row, index))
            .collect::<Result<Vec<_>, _>>()?;
        table
            .push_row(values)
            .map_err(|e| sqlx::Error::Decode(Box::new(e)))?;
    }
    Ok(table)
}
