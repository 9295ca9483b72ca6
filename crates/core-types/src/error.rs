use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Row has {found} cells but the table has {expected} columns")]
    RowWidth { expected: usize, found: usize },
}
