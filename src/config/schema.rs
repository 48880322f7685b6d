//! Configuration schema
//!
//! Top-level TOML configuration for Veil. Every section has serde defaults so
//! a minimal file (or none at all, via [`VeilConfig::default`]) still yields
//! a runnable configuration.

use crate::domain::Result;
use crate::domain::VeilError;
use crate::masking::{FieldKind, MaskingConfig};
use serde::{Deserialize, Serialize};

/// Top-level Veil configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VeilConfig {
    /// Application-wide settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Masking engine settings
    #[serde(default)]
    pub masking: MaskingConfig,

    /// Column assignments, applied in file order
    ///
    /// Command-line `--columns` pairs override this list entirely.
    #[serde(default)]
    pub columns: Vec<AssignmentEntry>,
}

/// One configured column assignment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignmentEntry {
    /// Target column name
    pub column: String,
    /// Field kind selecting the masking rule
    pub kind: FieldKind,
}

/// Application-wide settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable JSON file logging in addition to console output
    #[serde(default)]
    pub file_enabled: bool,

    /// Directory for log files
    #[serde(default = "default_log_directory")]
    pub directory: String,

    /// Rotation policy: daily, hourly or never
    #[serde(default = "default_log_rotation")]
    pub rotation: String,
}

fn default_log_directory() -> String {
    "./logs".to_string()
}

fn default_log_rotation() -> String {
    "daily".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file_enabled: false,
            directory: default_log_directory(),
            rotation: default_log_rotation(),
        }
    }
}

impl VeilConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        match self.application.log_level.to_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            other => {
                return Err(VeilError::Configuration(format!(
                    "Invalid log level: {other}. Must be one of: trace, debug, info, warn, error"
                )))
            }
        }

        match self.logging.rotation.as_str() {
            "daily" | "hourly" | "never" => {}
            other => {
                return Err(VeilError::Configuration(format!(
                    "Invalid log rotation: {other}. Must be one of: daily, hourly, never"
                )))
            }
        }

        self.masking
            .validate()
            .map_err(|e| VeilError::Configuration(e.to_string()))?;

        for (idx, entry) in self.columns.iter().enumerate() {
            if entry.column.trim().is_empty() {
                return Err(VeilError::Configuration(format!(
                    "Column assignment #{} has an empty column name",
                    idx + 1
                )));
            }
        }

        Ok(())
    }

    /// Apply environment variable overrides (`VEIL_*` prefix)
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("VEIL_LOG_LEVEL") {
            self.application.log_level = val;
        }

        if let Ok(val) = std::env::var("VEIL_LOG_FILE_ENABLED") {
            self.logging.file_enabled = val.parse().map_err(|_| {
                VeilError::Configuration("Invalid VEIL_LOG_FILE_ENABLED value".to_string())
            })?;
        }

        self.masking
            .apply_env_overrides()
            .map_err(|e| VeilError::Configuration(e.to_string()))?;

        Ok(())
    }
}

/// Starter configuration file written by `veil init`
pub const SAMPLE_CONFIG: &str = r#"# Veil configuration

[application]
log_level = "info"

[logging]
file_enabled = false
directory = "./logs"
rotation = "daily"

[masking]
# Abort on the first value that cannot be masked instead of passing the
# original through unmasked.
strict = false

[masking.audit]
enabled = false
log_path = "./audit/masking.log"
json_format = true

# Column assignments, applied in order. Valid kinds: name, email, phone,
# national_id, credit_card, address, date.
[[columns]]
column = "email"
kind = "email"

[[columns]]
column = "phone"
kind = "phone"
"#;
