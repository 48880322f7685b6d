//! Masking configuration

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Masking engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaskingConfig {
    /// Abort the run on the first value-level failure instead of passing the
    /// original value through unmasked
    #[serde(default)]
    pub strict: bool,

    /// Dry-run mode (mask and report, but the caller skips writing output)
    #[serde(default)]
    pub dry_run: bool,

    /// Audit logging configuration
    #[serde(default)]
    pub audit: AuditConfig,
}

impl Default for MaskingConfig {
    fn default() -> Self {
        Self {
            strict: false,
            dry_run: false,
            audit: AuditConfig::default(),
        }
    }
}

impl MaskingConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.audit
            .validate()
            .context("Invalid audit configuration")?;
        Ok(())
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("VEIL_MASKING_STRICT") {
            self.strict = val.parse().context("Invalid VEIL_MASKING_STRICT value")?;
        }

        if let Ok(val) = std::env::var("VEIL_MASKING_DRY_RUN") {
            self.dry_run = val.parse().context("Invalid VEIL_MASKING_DRY_RUN value")?;
        }

        self.audit.apply_env_overrides()?;

        Ok(())
    }
}

/// Audit logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Enable audit logging
    #[serde(default = "default_audit_enabled")]
    pub enabled: bool,

    /// Audit log file path
    #[serde(default = "default_audit_log_path")]
    pub log_path: PathBuf,

    /// Use JSON format for audit logs
    #[serde(default = "default_audit_json_format")]
    pub json_format: bool,
}

fn default_audit_enabled() -> bool {
    false
}

fn default_audit_log_path() -> PathBuf {
    PathBuf::from("./audit/masking.log")
}

fn default_audit_json_format() -> bool {
    true
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            enabled: default_audit_enabled(),
            log_path: default_audit_log_path(),
            json_format: default_audit_json_format(),
        }
    }
}

impl AuditConfig {
    /// Validate audit configuration
    pub fn validate(&self) -> Result<()> {
        if self.enabled {
            if let Some(parent) = self.log_path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    std::fs::create_dir_all(parent).with_context(|| {
                        format!(
                            "Failed to create audit log directory: {}",
                            parent.display()
                        )
                    })?;
                }
            }
        }
        Ok(())
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("VEIL_AUDIT_ENABLED") {
            self.enabled = val.parse().context("Invalid VEIL_AUDIT_ENABLED value")?;
        }

        if let Ok(val) = std::env::var("VEIL_AUDIT_LOG_PATH") {
            self.log_path = PathBuf::from(val);
        }

        if let Ok(val) = std::env::var("VEIL_AUDIT_JSON_FORMAT") {
            self.json_format = val
                .parse()
                .context("Invalid VEIL_AUDIT_JSON_FORMAT value")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MaskingConfig::default();
        assert!(!config.strict);
        assert!(!config.dry_run);
        assert!(!config.audit.enabled);
        assert!(config.audit.json_format);
    }

    #[test]
    fn test_config_validation() {
        let config = MaskingConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_deserialize_partial_toml() {
        let config: MaskingConfig = toml::from_str("strict = true").unwrap();
        assert!(config.strict);
        assert!(!config.dry_run);
        assert!(!config.audit.enabled);
    }
}
