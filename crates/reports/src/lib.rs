//! # Population Report Catalog
//!
//! The fixed set of analytical reports over the `countries`, `cities` and
//! `country_languages` tables.
//!
//! ## Public API
//!
//! - `PopulationReporter`: one method per report, each returning a `Table`.
//! - `Report`: names every report so callers can select them at runtime.
//! - `TRACKED_LANGUAGES`: the languages covered by the language report.

pub mod catalog;
pub mod queries;
pub mod report;

pub use catalog::{PopulationReporter, TRACKED_LANGUAGES};
pub use report::Report;
