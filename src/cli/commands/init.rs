//! Init command implementation
//!
//! Writes a starter configuration file.

use crate::config::SAMPLE_CONFIG;
use anyhow::Context;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path for the new configuration file
    #[arg(short, long, default_value = "veil.toml")]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub fn execute(&self) -> anyhow::Result<i32> {
        if self.output.exists() && !self.force {
            println!(
                "❌ {} already exists (use --force to overwrite)",
                self.output.display()
            );
            return Ok(2);
        }

        std::fs::write(&self.output, SAMPLE_CONFIG)
            .with_context(|| format!("Failed to write {}", self.output.display()))?;

        println!("✅ Wrote starter configuration to {}", self.output.display());
        println!("   Edit the [[columns]] entries to match your dataset, then run:");
        println!("   veil mask input.csv output.csv");
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_init_writes_valid_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("veil.toml");
        let args = InitArgs {
            output: path.clone(),
            force: false,
        };

        assert_eq!(args.execute().unwrap(), 0);
        let config = crate::config::load_config(&path).unwrap();
        assert_eq!(config.columns.len(), 2);
    }

    #[test]
    fn test_init_refuses_overwrite_without_force() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("veil.toml");
        std::fs::write(&path, "existing").unwrap();

        let args = InitArgs {
            output: path.clone(),
            force: false,
        };
        assert_eq!(args.execute().unwrap(), 2);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "existing");
    }

    #[test]
    fn test_init_overwrites_with_force() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("veil.toml");
        std::fs::write(&path, "existing").unwrap();

        let args = InitArgs {
            output: path,
            force: true,
        };
        assert_eq!(args.execute().unwrap(), 0);
    }
}
