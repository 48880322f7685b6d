//! CLI command implementations

pub mod init;
pub mod mask;
pub mod rules;
pub mod validate;
