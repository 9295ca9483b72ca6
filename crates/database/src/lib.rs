//! # Population Database Crate
//!
//! The data access layer. It turns a SQL text plus bound parameters into a
//! `Table`, an affected-row count, or a single value, and nothing more.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Adapter:** Encapsulates all driver-specific logic behind three calls.
//!   Callers never see a connection or a driver type.
//! - **Scoped Connections:** There is no pool. Every call acquires its own connection
//!   and releases it on every exit path, so calls share no state.
//! - **Runtime Driver Selection:** The URL scheme picks PostgreSQL or SQLite. Each
//!   driver decodes cells natively, so `CHAR(n)` and `NUMERIC` columns read as-is.
//! - **Single Error Boundary:** Every failure is logged once and surfaces as
//!   `DatabaseError`.
//!
//! ## Public API
//!
//! - `Database`: holds the connection descriptor and provides `query`, `execute`
//!   and `scalar`.
//! - `DatabaseError`: the only error this crate returns.

// Declare the modules that constitute this crate.
pub mod connection;
mod drivers;
pub mod error;
pub mod repository;

// Re-export the key components to create a clean, public-facing API.
pub use core_types::{Param, Table, Value};
pub use error::DatabaseError;
pub use repository::Database;
