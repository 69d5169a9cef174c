//! Feasibility request input.
//!
//! A request is the serializable form of one check: a capacity, the raw
//! intervals of the rentals already accepted, and the candidate interval.
//!
//! ```json
//! { "capacity": 2, "existing": [[1, 3], [5, 7]], "candidate": [2, 6] }
//! ```

use serde::{Deserialize, Serialize};

use crate::book::RentalBook;
use crate::models::Activity;
use crate::validation::{request_parts, ValidationError};

/// Input container for one feasibility check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckRequest {
    /// Number of items.
    pub capacity: usize,
    /// Already accepted rentals as `[start, end]`.
    #[serde(default)]
    pub existing: Vec<(i64, i64)>,
    /// Rental to check, as `[start, end]`.
    pub candidate: (i64, i64),
}

impl CheckRequest {
    /// Creates a request with no existing rentals.
    pub fn new(capacity: usize, candidate: (i64, i64)) -> Self {
        Self {
            capacity,
            existing: Vec::new(),
            candidate,
        }
    }

    /// Adds an existing rental.
    pub fn with_rental(mut self, start: i64, end: i64) -> Self {
        self.existing.push((start, end));
        self
    }

    /// Sets all existing rentals.
    pub fn with_existing(mut self, existing: Vec<(i64, i64)>) -> Self {
        self.existing = existing;
        self
    }

    /// Parses a request from JSON.
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    /// Validates the request and builds a book of the existing rentals plus
    /// the candidate to offer it.
    ///
    /// # Errors
    /// Every problem found by
    /// [`validate_request`](crate::validation::validate_request), never an
    /// empty list.
    pub fn into_book(self) -> Result<(RentalBook, Activity), Vec<ValidationError>> {
        let (capacity, rentals, candidate) = request_parts(&self)?;
        Ok((RentalBook::with_rentals(capacity, rentals), candidate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::Subject;

    #[test]
    fn test_parse_json() {
        let request = CheckRequest::from_json(
            r#"{ "capacity": 2, "existing": [[1, 3], [5, 7]], "candidate": [2, 6] }"#,
        )
        .unwrap();
        assert_eq!(
            request,
            CheckRequest::new(2, (2, 6)).with_rental(1, 3).with_rental(5, 7)
        );
    }

    #[test]
    fn test_existing_defaults_to_empty() {
        let request = CheckRequest::from_json(r#"{ "capacity": 1, "candidate": [1, 2] }"#).unwrap();
        assert!(request.existing.is_empty());
    }

    #[test]
    fn test_malformed_json() {
        assert!(CheckRequest::from_json(r#"{ "capacity": 1 }"#).is_err());
        assert!(CheckRequest::from_json(r#"{ "capacity": -1, "candidate": [1, 2] }"#).is_err());
    }

    #[test]
    fn test_into_book() {
        let request = CheckRequest::new(2, (2, 6)).with_existing(vec![(1, 3), (5, 7)]);
        let (mut book, candidate) = request.into_book().unwrap();
        assert_eq!(book.capacity().get(), 2);
        assert_eq!(book.len(), 2);
        assert!(book.try_add(candidate).is_accepted());
    }

    #[test]
    fn test_into_book_rejects_invalid() {
        let request = CheckRequest::new(0, (2, 6)).with_rental(3, 3);
        let errors = request.into_book().unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[1].subject, Subject::Existing(0));
    }

    #[test]
    fn test_into_book_reports_single_candidate_error() {
        let errors = CheckRequest::new(1, (4, 4)).into_book().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].subject, Subject::Candidate);
    }

    #[test]
    fn test_serialize_round_trip_shape() {
        let request = CheckRequest::new(3, (4, 9)).with_rental(1, 2);
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "capacity": 3, "existing": [[1, 2]], "candidate": [4, 9] })
        );
    }
}
