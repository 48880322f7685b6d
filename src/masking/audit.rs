//! Audit trail for masking operations
//!
//! Each masked column produces one audit entry listing, per value, a SHA-256
//! hash of the original and the masked replacement. Plaintext originals never
//! reach the audit log.

use crate::masking::FieldKind;
use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

/// Audit log entry for one masked column
#[derive(Debug, Serialize)]
struct AuditLogEntry<'a> {
    timestamp: String,
    column: &'a str,
    field_kind: String,
    rows: usize,
    masked: usize,
    passed_through: usize,
    values: &'a [AuditValue],
}

/// Per-value audit record (original value hashed, never plaintext)
#[derive(Debug, Serialize)]
pub struct AuditValue {
    /// Row index within the column
    pub row: usize,
    /// SHA-256 hash of the original value
    pub original_hash: String,
    /// Masked replacement, or `null` when the original passed through
    pub masked: Option<String>,
}

/// Audit logger for masking operations
pub struct AuditLogger {
    log_path: PathBuf,
    json_format: bool,
    enabled: bool,
}

impl AuditLogger {
    /// Create a new audit logger
    pub fn new(log_path: PathBuf, json_format: bool, enabled: bool) -> Result<Self> {
        if enabled {
            if let Some(parent) = log_path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent).with_context(|| {
                        format!(
                            "Failed to create audit log directory: {}",
                            parent.display()
                        )
                    })?;
                }
            }
        }

        Ok(Self {
            log_path,
            json_format,
            enabled,
        })
    }

    /// Hash a sensitive value using SHA-256
    pub fn hash_value(value: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(value.as_bytes());
        let result = hasher.finalize();
        format!("{result:x}")
    }

    /// Log the masking of one column
    pub fn log_column(
        &self,
        column: &str,
        kind: FieldKind,
        masked: usize,
        passed_through: usize,
        values: &[AuditValue],
    ) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }

        let entry = AuditLogEntry {
            timestamp: Utc::now().to_rfc3339(),
            column,
            field_kind: kind.tag().to_string(),
            rows: values.len(),
            masked,
            passed_through,
            values,
        };

        self.write_entry(&entry)
    }

    /// Write an audit entry to the log file
    fn write_entry(&self, entry: &AuditLogEntry<'_>) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .with_context(|| format!("Failed to open audit log: {}", self.log_path.display()))?;

        if self.json_format {
            let json_line =
                serde_json::to_string(entry).context("Failed to serialize audit entry")?;
            writeln!(file, "{json_line}").context("Failed to write audit entry")?;
        } else {
            writeln!(
                file,
                "[{}] Column: {} | Kind: {} | Rows: {} | Masked: {} | Passed through: {}",
                entry.timestamp,
                entry.column,
                entry.field_kind,
                entry.rows,
                entry.masked,
                entry.passed_through
            )
            .context("Failed to write audit entry")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_audit_logger_creation() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("test_audit.log");

        let logger = AuditLogger::new(log_path, true, true).unwrap();
        assert!(logger.enabled);
    }

    #[test]
    fn test_hash_value() {
        let hash1 = AuditLogger::hash_value("test@example.com");
        let hash2 = AuditLogger::hash_value("test@example.com");
        let hash3 = AuditLogger::hash_value("different@example.com");

        assert_eq!(hash1, hash2);
        assert_ne!(hash1, hash3);
    }

    #[test]
    fn test_log_column_never_contains_plaintext() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("test_audit.log");
        let logger = AuditLogger::new(log_path.clone(), true, true).unwrap();

        let values = vec![AuditValue {
            row: 0,
            original_hash: AuditLogger::hash_value("test@example.com"),
            masked: Some("ab3kz9q0r2c4efgh@example.com".to_string()),
        }];
        logger
            .log_column("email", FieldKind::Email, 1, 0, &values)
            .unwrap();

        assert!(log_path.exists());
        let content = std::fs::read_to_string(&log_path).unwrap();
        assert!(content.contains("\"column\":\"email\""));
        assert!(!content.contains("test@example.com"));
    }

    #[test]
    fn test_disabled_logger_writes_nothing() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("test_audit.log");
        let logger = AuditLogger::new(log_path.clone(), true, false).unwrap();

        logger
            .log_column("email", FieldKind::Email, 0, 0, &[])
            .unwrap();
        assert!(!log_path.exists());
    }

    #[test]
    fn test_plain_text_format() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("test_audit.log");
        let logger = AuditLogger::new(log_path.clone(), false, true).unwrap();

        logger
            .log_column("phone", FieldKind::Phone, 2, 0, &[])
            .unwrap();
        let content = std::fs::read_to_string(&log_path).unwrap();
        assert!(content.contains("Column: phone"));
        assert!(content.contains("Kind: phone"));
    }
}
