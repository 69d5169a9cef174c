//! Contract errors.
//!
//! These are raised for malformed input only. An allocation that cannot be
//! satisfied is reported through [`crate::allocator::Feasibility`], never
//! through this type.

use thiserror::Error;

/// A violated input contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AllocError {
    /// Activity start time is zero or negative.
    #[error("activity start must be positive, got {start}")]
    NonPositiveStart {
        /// Offending start time.
        start: i64,
    },
    /// Activity does not end strictly after it starts.
    #[error("activity must end after it starts, got {start}-{end}")]
    EmptyInterval {
        /// Start time.
        start: i64,
        /// End time.
        end: i64,
    },
    /// Item pool is empty.
    #[error("capacity must be at least 1")]
    ZeroCapacity,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            AllocError::NonPositiveStart { start: 0 }.to_string(),
            "activity start must be positive, got 0"
        );
        assert_eq!(
            AllocError::EmptyInterval { start: 5, end: 5 }.to_string(),
            "activity must end after it starts, got 5-5"
        );
        assert_eq!(
            AllocError::ZeroCapacity.to_string(),
            "capacity must be at least 1"
        );
    }
}
