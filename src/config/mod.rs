//! Configuration management for Veil.
//!
//! This module provides TOML-based configuration loading, parsing, and
//! validation, plus `VEIL_*` environment variable overrides.

pub mod loader;
pub mod schema;

pub use loader::{load_config, load_config_or_default};
pub use schema::{ApplicationConfig, AssignmentEntry, LoggingConfig, VeilConfig, SAMPLE_CONFIG};
