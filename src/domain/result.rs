//! Result type alias for Veil

use super::errors::VeilError;

/// Result type alias for Veil operations
///
/// This is a convenience type alias that uses `VeilError` as the error type.
/// Use this throughout the codebase for fallible operations.
pub type Result<T> = std::result::Result<T, VeilError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::VeilError;

    #[test]
    fn test_result_ok() {
        let result: Result<i32> = Ok(42);
        assert!(result.is_ok());
    }

    #[test]
    fn test_result_err() {
        let result: Result<i32> = Err(VeilError::Masking("test error".to_string()));
        assert!(result.is_err());
    }
}
