//! Domain models and types for Veil.
//!
//! This module contains the core domain types: the in-memory tabular
//! container, column assignments, and the error hierarchy shared across the
//! crate.
//!
//! # Modules
//!
//! - [`assignment`] - Column-to-field-kind assignments and pair parsing
//! - [`errors`] - Domain error types
//! - [`result`] - Result type alias
//! - [`table`] - Tabular container (columns of string-convertible cells)

pub mod assignment;
pub mod errors;
pub mod result;
pub mod table;

pub use assignment::{parse_assignments, ColumnAssignment};
pub use errors::{AssignmentError, VeilError};
pub use result::Result;
pub use table::{Cell, Column, Table};
