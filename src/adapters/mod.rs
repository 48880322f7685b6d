//! External integrations
//!
//! File-format adapters sit here, outside the masking core. The core only
//! sees an in-memory [`Table`](crate::domain::Table); adapters load it before
//! masking and persist it afterwards.

pub mod csv;
