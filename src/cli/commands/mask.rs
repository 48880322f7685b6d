//! Mask command implementation
//!
//! Reads a CSV dataset, applies the configured column assignments, and
//! writes the masked copy. Command-line `--columns` pairs override the
//! assignments from the configuration file.

use crate::adapters::csv::{read_table, write_table};
use crate::config::load_config_or_default;
use crate::domain::{parse_assignments, ColumnAssignment};
use crate::masking::MaskingEngine;
use anyhow::Context;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the mask command
#[derive(Args, Debug)]
pub struct MaskArgs {
    /// Path to the input CSV file
    pub input: PathBuf,

    /// Path to the output CSV file (not written in dry-run mode)
    #[arg(required_unless_present = "dry_run")]
    pub output: Option<PathBuf>,

    /// Columns to mask as column:function pairs (e.g. email:email dob:date),
    /// overriding the configuration file
    #[arg(long, num_args = 1..)]
    pub columns: Vec<String>,

    /// Abort on the first value that cannot be masked instead of passing the
    /// original through
    #[arg(long)]
    pub strict: bool,

    /// Run the masking pass and print the report without writing output
    #[arg(long)]
    pub dry_run: bool,

    /// Write the masking report as JSON to this path
    #[arg(long)]
    pub report_json: Option<PathBuf>,
}

impl MaskArgs {
    /// Execute the mask command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let mut config = load_config_or_default(config_path)
            .with_context(|| format!("Failed to load configuration from {config_path}"))?;
        config.masking.strict |= self.strict;
        config.masking.dry_run |= self.dry_run;

        let assignments = self.resolve_assignments(&config);
        if assignments.is_empty() {
            tracing::warn!("No column assignments; the output will be an unmasked copy");
        }

        let engine = MaskingEngine::new(config.masking.clone())
            .context("Failed to create masking engine")?;

        let mut table = read_table(&self.input)
            .with_context(|| format!("Failed to read input: {}", self.input.display()))?;

        let mut rng = rand::thread_rng();
        let report = engine.mask_table(&mut table, &assignments, &mut rng)?;

        print!("{}", report.format_console());

        if let Some(ref path) = self.report_json {
            let json = report.format_json().context("Failed to serialize report")?;
            std::fs::write(path, json)
                .with_context(|| format!("Failed to write report: {}", path.display()))?;
        }

        if config.masking.dry_run {
            println!("Dry run: no output written.");
        } else {
            // required_unless_present guarantees output is set here
            let output = self
                .output
                .as_ref()
                .context("Output path required unless --dry-run")?;
            write_table(&table, output)
                .with_context(|| format!("Failed to write output: {}", output.display()))?;
            println!("Masked dataset written to {}", output.display());
        }

        Ok(0)
    }

    /// CLI pairs override the configuration file's assignments
    fn resolve_assignments(
        &self,
        config: &crate::config::VeilConfig,
    ) -> Vec<ColumnAssignment> {
        if !self.columns.is_empty() {
            let (assignments, rejected) = parse_assignments(&self.columns);
            for err in &rejected {
                eprintln!("Warning: {err}");
            }
            assignments
        } else {
            config
                .columns
                .iter()
                .map(|entry| ColumnAssignment::new(entry.column.clone(), entry.kind))
                .collect()
        }
    }
}
