//! Result type alias for Showroom
//!
//! This module provides a convenient Result type alias that uses
//! ShowroomError as the error type.

use super::errors::ShowroomError;

/// Result type alias for Showroom operations
///
/// This is a convenience type alias that uses `ShowroomError` as the error
/// type. Use this throughout the codebase for fallible operations.
pub type Result<T> = std::result::Result<T, ShowroomError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::ShowroomError;

    #[test]
    fn test_result_ok() {
        let result: Result<i32> = Ok(42);
        assert!(result.is_ok());
    }

    #[test]
    fn test_result_err() {
        let result: Result<i32> = Err(ShowroomError::EmptyDataset);
        assert!(result.is_err());
    }

    #[test]
    fn test_result_with_question_mark() -> Result<()> {
        fn inner() -> Result<i32> {
            Ok(42)
        }

        let value = inner()?;
        assert_eq!(value, 42);
        Ok(())
    }
}
