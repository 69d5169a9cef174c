//! Activity (rental) model.
//!
//! An activity is a closed-open demand `[start, end)` that needs exclusive
//! use of one item for its whole duration. Besides its interval it carries
//! check-scoped state: the items it is forbidden from using and the item it
//! was finally assigned to.
//!
//! # Overlap
//! Two activities overlap iff their intervals share more than an endpoint.
//! `1-3` and `3-5` touch but do not overlap.

use serde::Serialize;
use std::fmt;

use crate::error::AllocError;

use super::ItemIndex;

/// A time-bounded demand for one item.
///
/// The interval invariant `0 < start < end` is checked by [`Activity::new`]
/// and holds for the lifetime of the value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Activity {
    start: i64,
    end: i64,
    /// Items occupied by overlapping activities, ascending.
    forbidden_items: Vec<ItemIndex>,
    /// Item recorded by the last feasible check.
    assigned_item: Option<ItemIndex>,
}

impl Activity {
    /// Creates an unassigned activity.
    ///
    /// # Errors
    /// [`AllocError::NonPositiveStart`] if `start <= 0`,
    /// [`AllocError::EmptyInterval`] if `end <= start`.
    ///
    /// # Example
    /// ```
    /// use u_rental::models::Activity;
    ///
    /// let a = Activity::new(1, 3).unwrap();
    /// assert_eq!(a.duration(), 2);
    /// assert!(Activity::new(0, 3).is_err());
    /// assert!(Activity::new(4, 4).is_err());
    /// ```
    pub fn new(start: i64, end: i64) -> Result<Self, AllocError> {
        if start <= 0 {
            return Err(AllocError::NonPositiveStart { start });
        }
        if end <= start {
            return Err(AllocError::EmptyInterval { start, end });
        }
        Ok(Self::from_valid(start, end))
    }

    /// Builds an activity from bounds the caller already guarantees.
    pub(crate) fn from_valid(start: i64, end: i64) -> Self {
        debug_assert!(0 < start && start < end);
        Self {
            start,
            end,
            forbidden_items: Vec::new(),
            assigned_item: None,
        }
    }

    /// Start time (inclusive).
    #[inline]
    pub fn start(&self) -> i64 {
        self.start
    }

    /// End time (exclusive).
    #[inline]
    pub fn end(&self) -> i64 {
        self.end
    }

    /// `end - start`.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }

    /// Items this activity may not use, ascending.
    pub fn forbidden_items(&self) -> &[ItemIndex] {
        &self.forbidden_items
    }

    /// Item assigned by the last feasible check, if any.
    #[inline]
    pub fn assigned_item(&self) -> Option<ItemIndex> {
        self.assigned_item
    }

    /// Whether the two intervals share more than an endpoint.
    ///
    /// Symmetric; does not require any ordering between `self` and `other`.
    pub fn overlaps(&self, other: &Activity) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Clears the check-scoped state (forbidden items and assignment).
    pub fn reset(&mut self) {
        self.forbidden_items.clear();
        self.assigned_item = None;
    }

    /// Overwrites the check-scoped state with the outcome of a feasible check.
    pub(crate) fn commit(&mut self, item: ItemIndex, forbidden: Vec<ItemIndex>) {
        self.assigned_item = Some(item);
        self.forbidden_items = forbidden;
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

impl TryFrom<(i64, i64)> for Activity {
    type Error = AllocError;

    fn try_from((start, end): (i64, i64)) -> Result<Self, Self::Error> {
        Self::new(start, end)
    }
}
