// Veil - Column-Level Data Masking Tool
// Copyright (c) 2025 Veil Contributors
// Licensed under the MIT License

//! # Veil - Column-Level Data Masking
//!
//! Veil anonymizes sensitive columns in tabular datasets by replacing values
//! with randomized or partially-redacted substitutes: names, emails, phone
//! numbers, national ID numbers, card numbers, addresses and dates.
//!
//! Masking is best-effort by design: a malformed value (an email without a
//! separator, an unparseable date) is reported and passed through unmasked
//! rather than aborting the run. Strict mode inverts that trade-off.
//! Masked values are not cryptographically irreversible and carry no
//! referential integrity across columns.
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`masking`] - Field kinds, masking rules, the column engine, reports
//!   and the audit trail
//! - [`adapters`] - File-format I/O around the in-memory table
//! - [`domain`] - Tabular container, column assignments, error types
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust
//! use veil::domain::{Column, ColumnAssignment, Table};
//! use veil::masking::{FieldKind, MaskingConfig, MaskingEngine};
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut table = Table::from_columns(vec![Column::new(
//!     "email",
//!     vec!["ada@example.com".into(), "not-an-email".into()],
//! )])?;
//!
//! let engine = MaskingEngine::new(MaskingConfig::default())?;
//! let assignments = vec![ColumnAssignment::new("email", FieldKind::Email)];
//! let report = engine.mask_table(&mut table, &assignments, &mut rand::thread_rng())?;
//!
//! assert_eq!(report.total_masked, 1);
//! assert_eq!(report.total_passed_through, 1);
//! # Ok(())
//! # }
//! ```
//!
//! ## Determinism
//!
//! Every rule and engine entry point takes a caller-supplied `rand::Rng`, so
//! tests can pass a seeded `StdRng` and replay a masking pass exactly.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod domain;
pub mod logging;
pub mod masking;
