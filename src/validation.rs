//! Input validation for feasibility requests.
//!
//! Checks a raw request before any activity is built and reports every
//! problem at once rather than stopping at the first. Detects:
//! - Zero capacity
//! - Non-positive start times
//! - Intervals that do not end after they start

use std::fmt;
use thiserror::Error;

use crate::error::AllocError;
use crate::models::{Activity, Capacity};
use crate::request::CheckRequest;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// What part of a request a validation error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subject {
    /// The item pool size.
    Capacity,
    /// An existing rental, by position.
    Existing(usize),
    /// The candidate rental.
    Candidate,
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Capacity => write!(f, "capacity"),
            Self::Existing(i) => write!(f, "existing rental #{i}"),
            Self::Candidate => write!(f, "candidate"),
        }
    }
}

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{subject}: {error}")]
pub struct ValidationError {
    /// Offending part of the request.
    pub subject: Subject,
    /// Violated contract.
    pub error: AllocError,
}

impl ValidationError {
    fn new(subject: Subject, error: AllocError) -> Self {
        Self { subject, error }
    }
}

/// Validates a raw request.
///
/// Checks:
/// 1. Capacity is at least 1
/// 2. Every existing rental has `0 < start < end`
/// 3. The candidate has `0 < start < end`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_request(request: &CheckRequest) -> ValidationResult {
    request_parts(request).map(|_| ())
}

/// Builds the capacity, existing activities and candidate of a request.
///
/// Runs the same checks as [`validate_request`]; `Err` always holds at least
/// one error.
pub(crate) fn request_parts(
    request: &CheckRequest,
) -> Result<(Capacity, Vec<Activity>, Activity), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let capacity = match Capacity::new(request.capacity) {
        Ok(capacity) => Some(capacity),
        Err(e) => {
            errors.push(ValidationError::new(Subject::Capacity, e));
            None
        }
    };

    let existing = match validate_intervals(&request.existing) {
        Ok(existing) => Some(existing),
        Err(mut interval_errors) => {
            errors.append(&mut interval_errors);
            None
        }
    };

    let candidate = match Activity::try_from(request.candidate) {
        Ok(candidate) => Some(candidate),
        Err(e) => {
            errors.push(ValidationError::new(Subject::Candidate, e));
            None
        }
    };

    match (capacity, existing, candidate) {
        (Some(capacity), Some(existing), Some(candidate)) => Ok((capacity, existing, candidate)),
        _ => Err(errors),
    }
}

/// Builds activities from raw existing-rental intervals.
///
/// # Returns
/// All activities if every interval is valid, otherwise every error, each
/// tagged with [`Subject::Existing`] and the interval's position.
pub fn validate_intervals(intervals: &[(i64, i64)]) -> Result<Vec<Activity>, Vec<ValidationError>> {
    let mut activities = Vec::with_capacity(intervals.len());
    let mut errors = Vec::new();

    for (i, &interval) in intervals.iter().enumerate() {
        match Activity::try_from(interval) {
            Ok(a) => activities.push(a),
            Err(e) => errors.push(ValidationError::new(Subject::Existing(i), e)),
        }
    }

    if errors.is_empty() {
        Ok(activities)
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_request() {
        let request = CheckRequest::new(2, (3, 5)).with_rental(1, 3).with_rental(2, 4);
        assert!(validate_request(&request).is_ok());
    }

    #[test]
    fn test_zero_capacity() {
        let request = CheckRequest::new(0, (3, 5));
        let errors = validate_request(&request).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::new(Subject::Capacity, AllocError::ZeroCapacity)]
        );
    }

    #[test]
    fn test_bad_existing_interval() {
        let request = CheckRequest::new(1, (3, 5)).with_rental(1, 3).with_rental(0, 2);
        let errors = validate_request(&request).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].subject, Subject::Existing(1));
        assert_eq!(errors[0].error, AllocError::NonPositiveStart { start: 0 });
    }

    #[test]
    fn test_bad_candidate() {
        let request = CheckRequest::new(1, (5, 5));
        let errors = validate_request(&request).unwrap_err();
        assert_eq!(errors[0].subject, Subject::Candidate);
        assert_eq!(
            errors[0].to_string(),
            "candidate: activity must end after it starts, got 5-5"
        );
    }

    #[test]
    fn test_multiple_errors() {
        let request = CheckRequest::new(0, (-1, 4))
            .with_rental(4, 2)
            .with_rental(1, 2)
            .with_rental(0, 0);
        let errors = validate_request(&request).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert_eq!(errors[0].subject, Subject::Capacity);
        assert_eq!(errors[1].subject, Subject::Existing(0));
        assert_eq!(errors[2].subject, Subject::Existing(2));
        assert_eq!(errors[3].subject, Subject::Candidate);
    }

    #[test]
    fn test_request_parts() {
        let request = CheckRequest::new(2, (3, 5)).with_rental(1, 3);
        let (capacity, existing, candidate) = request_parts(&request).unwrap();
        assert_eq!(capacity.get(), 2);
        assert_eq!(existing, vec![Activity::new(1, 3).unwrap()]);
        assert_eq!(candidate, Activity::new(3, 5).unwrap());

        for request in [
            CheckRequest::new(0, (3, 5)),
            CheckRequest::new(1, (3, 5)).with_rental(2, 1),
            CheckRequest::new(1, (0, 5)),
        ] {
            let errors = request_parts(&request).unwrap_err();
            assert_eq!(errors.len(), 1);
            assert_eq!(Err(errors), validate_request(&request));
        }
    }

    #[test]
    fn test_validate_intervals() {
        let activities = validate_intervals(&[(1, 2), (2, 3)]).unwrap();
        assert_eq!(activities.len(), 2);
        assert!(validate_intervals(&[]).unwrap().is_empty());

        let errors = validate_intervals(&[(1, 2), (3, 1)]).unwrap_err();
        assert_eq!(
            errors[0].to_string(),
            "existing rental #1: activity must end after it starts, got 3-1"
        );
    }
}
