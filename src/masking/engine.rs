//! Column masking engine
//!
//! The [`MaskingEngine`] is the orchestration core: given a [`Table`], an
//! ordered list of [`ColumnAssignment`]s, and a randomness source, it
//! rewrites each assigned column in place. Failures stay local: a missing
//! column skips that assignment with a warning, and a value-level rule
//! failure passes the original value through (unless strict mode is on).
//! A run always completes with a report of exactly what was and was not
//! masked.

use crate::domain::{Cell, ColumnAssignment, Table, VeilError};
use crate::masking::{
    audit::{AuditLogger, AuditValue},
    config::MaskingConfig,
    report::{ColumnSummary, MaskingReport},
    rules::MaskOutcome,
    FieldKind,
};
use anyhow::{Context, Result};
use rand::Rng;
use std::time::Instant;

/// Column masking engine
///
/// Stateless across runs: the only mutable state is the caller-supplied
/// randomness source, so independent columns could be processed in any
/// order (or in parallel) without affecting correctness.
pub struct MaskingEngine {
    config: MaskingConfig,
    audit_logger: Option<AuditLogger>,
}

impl MaskingEngine {
    /// Create a new masking engine
    ///
    /// # Errors
    ///
    /// Returns an error if configuration validation or audit logger
    /// initialization fails.
    pub fn new(config: MaskingConfig) -> Result<Self> {
        config
            .validate()
            .context("Invalid masking configuration")?;

        let audit_logger = if config.audit.enabled {
            Some(AuditLogger::new(
                config.audit.log_path.clone(),
                config.audit.json_format,
                true,
            )?)
        } else {
            None
        };

        Ok(Self {
            config,
            audit_logger,
        })
    }

    /// Check if strict mode is enabled
    pub fn is_strict(&self) -> bool {
        self.config.strict
    }

    /// Apply all assignments to the table, in caller order
    ///
    /// Each assigned column is rewritten value by value. Assignments whose
    /// column does not exist are skipped with a warning and recorded in the
    /// report; the run continues with the remaining assignments.
    ///
    /// # Errors
    ///
    /// In default (best-effort) mode only audit I/O failures surface as
    /// errors. In strict mode the first value-level rule failure aborts the
    /// run.
    pub fn mask_table<R: Rng + ?Sized>(
        &self,
        table: &mut Table,
        assignments: &[ColumnAssignment],
        rng: &mut R,
    ) -> Result<MaskingReport> {
        let mut report = MaskingReport::new();

        for assignment in assignments {
            if !table.has_column(&assignment.column) {
                tracing::warn!(
                    column = %assignment.column,
                    "Column not found in dataset, skipping assignment"
                );
                report.add_skipped_column(&assignment.column);
                continue;
            }

            let summary = self.apply_column(table, &assignment.column, assignment.kind, rng)?;
            report.add_column(summary);
        }

        tracing::info!(
            masked = report.total_masked,
            passed_through = report.total_passed_through,
            skipped = report.skipped_columns.len(),
            "Masking pass complete"
        );

        Ok(report)
    }

    /// Apply one rule to every value of one column
    fn apply_column<R: Rng + ?Sized>(
        &self,
        table: &mut Table,
        column_name: &str,
        kind: FieldKind,
        rng: &mut R,
    ) -> Result<ColumnSummary> {
        tracing::info!(column = %column_name, kind = %kind, "Start masking column");
        let start = Instant::now();

        // Presence is checked by the caller.
        let column = table
            .column_mut(column_name)
            .ok_or_else(|| VeilError::Masking(format!("Column '{column_name}' disappeared")))?;

        let mut masked = 0usize;
        let mut passed_through = 0usize;
        let mut audit_values = Vec::with_capacity(column.cells.len());

        for (row, cell) in column.cells.iter_mut().enumerate() {
            let original = cell.to_text();
            match kind.mask(&original, rng) {
                MaskOutcome::Masked(replacement) => {
                    tracing::debug!(
                        column = %column_name,
                        row,
                        original_len = original.chars().count(),
                        masked_len = replacement.chars().count(),
                        "Masked value"
                    );
                    audit_values.push(AuditValue {
                        row,
                        original_hash: AuditLogger::hash_value(&original),
                        masked: Some(replacement.clone()),
                    });
                    *cell = Cell::Text(replacement);
                    masked += 1;
                }
                MaskOutcome::Passthrough(failure) => {
                    if self.config.strict {
                        return Err(VeilError::StrictValueFailure {
                            column: column_name.to_string(),
                            row,
                            reason: failure.to_string(),
                        }
                        .into());
                    }
                    tracing::error!(
                        column = %column_name,
                        row,
                        reason = %failure,
                        "Value passed through unmasked"
                    );
                    audit_values.push(AuditValue {
                        row,
                        original_hash: AuditLogger::hash_value(&original),
                        masked: None,
                    });
                    // A masked column becomes all-text, passthrough values
                    // included.
                    *cell = Cell::Text(original);
                    passed_through += 1;
                }
            }
        }

        let processing_time_ms = start.elapsed().as_millis() as u64;
        tracing::info!(
            column = %column_name,
            masked,
            passed_through,
            duration_ms = processing_time_ms,
            "Finished masking column"
        );

        if let Some(ref logger) = self.audit_logger {
            logger.log_column(column_name, kind, masked, passed_through, &audit_values)?;
        }

        Ok(ColumnSummary {
            column: column_name.to_string(),
            kind,
            rows: masked + passed_through,
            masked,
            passed_through,
            processing_time_ms,
        })
    }
}
