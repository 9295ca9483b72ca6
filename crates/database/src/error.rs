use thiserror::Error;

/// The single failure kind of the data access layer.
///
/// Raised for anything that goes wrong talking to the database: connectivity,
/// authentication, malformed SQL, constraint violations or cells that cannot be
/// decoded. It carries the driver's message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Database error: {message}")]
pub struct DatabaseError {
    pub message: String,
}

impl DatabaseError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
