use crate::enums::Value;
use crate::error::CoreError;
use std::sync::Arc;

/// One row of a `Table`. Cells are aligned with the table's columns.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    columns: Arc<[String]>,
    values: Vec<Value>,
}

impl Row {
    /// Looks a cell up by column name.
    pub fn get(&self, column: &str) -> Option<&Value> {
        let index = self.columns.iter().position(|c| c == column)?;
        self.values.get(index)
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }
}

/// An ordered sequence of rows sharing one column schema.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    columns: Arc<[String]>,
    rows: Vec<Row>,
}

impl Table {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns: columns.into(),
            rows: Vec::new(),
        }
    }

    /// Appends a row. The number of cells must match the number of columns.
    pub fn push_row(&mut self, values: Vec<Value>) -> Result<(), CoreError> {
        if values.len() != self.columns.len() {
            return Err(CoreError::RowWidth {
                expected: self.columns.len(),
                found: values.len(),
            });
        }
        self.rows.push(Row {
            columns: Arc::clone(&self.columns),
            values,
        });
        Ok(())
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Returns the position of the named column.
    pub fn column(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
