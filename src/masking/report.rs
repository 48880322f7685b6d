//! Masking run reports
//!
//! A [`MaskingReport`] summarizes one masking pass: which columns were
//! rewritten, how many values passed through unmasked, and which assignments
//! were skipped because their column does not exist. Passthrough counts are
//! surfaced prominently since every passthrough is a potentially unmasked
//! sensitive value.

use crate::masking::FieldKind;
use serde::{Deserialize, Serialize};

/// Summary for one masked column
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnSummary {
    /// Column name
    pub column: String,

    /// Field kind applied
    pub kind: FieldKind,

    /// Number of rows in the column
    pub rows: usize,

    /// Values successfully masked
    pub masked: usize,

    /// Values passed through unmasked after a rule failure
    pub passed_through: usize,

    /// Processing time for this column (ms)
    pub processing_time_ms: u64,
}

/// Report for a whole masking pass
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MaskingReport {
    /// Per-column summaries, in assignment order
    pub columns: Vec<ColumnSummary>,

    /// Assignments skipped because the column does not exist in the table
    pub skipped_columns: Vec<String>,

    /// Total values masked across all columns
    pub total_masked: usize,

    /// Total values passed through unmasked
    pub total_passed_through: usize,

    /// Total processing time (ms)
    pub total_processing_time_ms: u64,
}

impl MaskingReport {
    /// Create a new empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a masked column
    pub fn add_column(&mut self, summary: ColumnSummary) {
        self.total_masked += summary.masked;
        self.total_passed_through += summary.passed_through;
        self.total_processing_time_ms += summary.processing_time_ms;
        self.columns.push(summary);
    }

    /// Record an assignment skipped because its column is missing
    pub fn add_skipped_column(&mut self, column: impl Into<String>) {
        self.skipped_columns.push(column.into());
    }

    /// True if any value passed through unmasked
    pub fn has_passthroughs(&self) -> bool {
        self.total_passed_through > 0
    }

    /// Format report for console output
    pub fn format_console(&self) -> String {
        let mut output = String::new();

        output.push_str("\nMasking summary\n");
        output.push_str("───────────────────────────────────────────────\n");
        for summary in &self.columns {
            output.push_str(&format!(
                "  {:<20} {:<12} {:>6} rows  {:>6} masked  {:>4} passed through\n",
                summary.column,
                summary.kind.tag(),
                summary.rows,
                summary.masked,
                summary.passed_through
            ));
        }
        for column in &self.skipped_columns {
            output.push_str(&format!("  {column:<20} skipped (column not found)\n"));
        }
        output.push_str("───────────────────────────────────────────────\n");
        output.push_str(&format!(
            "  Total: {} masked, {} passed through, {} column(s) skipped, {} ms\n",
            self.total_masked,
            self.total_passed_through,
            self.skipped_columns.len(),
            self.total_processing_time_ms
        ));
        if self.has_passthroughs() {
            output.push_str(
                "  ⚠️  Passed-through values remain UNMASKED in the output dataset.\n",
            );
        }

        output
    }

    /// Format report as JSON
    pub fn format_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(column: &str, masked: usize, passed_through: usize) -> ColumnSummary {
        ColumnSummary {
            column: column.to_string(),
            kind: FieldKind::Email,
            rows: masked + passed_through,
            masked,
            passed_through,
            processing_time_ms: 1,
        }
    }

    #[test]
    fn test_empty_report() {
        let report = MaskingReport::new();
        assert!(report.columns.is_empty());
        assert!(report.skipped_columns.is_empty());
        assert!(!report.has_passthroughs());
    }

    #[test]
    fn test_totals_accumulate() {
        let mut report = MaskingReport::new();
        report.add_column(summary("email", 8, 2));
        report.add_column(summary("backup_email", 5, 0));

        assert_eq!(report.total_masked, 13);
        assert_eq!(report.total_passed_through, 2);
        assert!(report.has_passthroughs());
    }

    #[test]
    fn test_format_console() {
        let mut report = MaskingReport::new();
        report.add_column(summary("email", 8, 2));
        report.add_skipped_column("missing");

        let output = report.format_console();
        assert!(output.contains("email"));
        assert!(output.contains("skipped (column not found)"));
        assert!(output.contains("UNMASKED"));
    }
}
