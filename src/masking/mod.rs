//! Column masking for sensitive data
//!
//! This module implements the masking-policy core:
//! - [`field_kind`] - The closed set of field-type tags (the rule registry)
//! - [`rules`] - Per-kind masking transforms with the passthrough contract
//! - [`engine`] - The column masker applying assignments to a table
//! - [`report`] - Per-run summaries of masked and passed-through values
//! - [`audit`] - Hash-only audit trail of masking operations
//! - [`config`] - Masking and audit configuration

pub mod audit;
pub mod config;
pub mod engine;
pub mod field_kind;
pub mod report;
pub mod rules;

pub use config::{AuditConfig, MaskingConfig};
pub use engine::MaskingEngine;
pub use field_kind::FieldKind;
pub use report::{ColumnSummary, MaskingReport};
pub use rules::{MaskFailure, MaskOutcome};
