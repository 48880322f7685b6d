//! Rules command implementation
//!
//! Lists every field kind and its masking transform.

use crate::masking::FieldKind;
use clap::Args;

/// Arguments for the rules command
#[derive(Args, Debug)]
pub struct RulesArgs {}

impl RulesArgs {
    /// Execute the rules command
    pub fn execute(&self) -> anyhow::Result<i32> {
        println!("Available masking rules:");
        println!();
        for kind in FieldKind::ALL {
            println!("  {:<14} {}", kind.tag(), kind.describe());
        }
        println!();
        println!("Aliases: ssn, aadhaar -> national_id");
        Ok(0)
    }
}
