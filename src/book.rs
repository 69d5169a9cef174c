//! Rental book: the accepted rentals of one item pool.
//!
//! A book grows one candidate at a time. Each candidate is checked against
//! every rental already in the book; it is appended only if the whole set
//! still fits, and every rental then carries its item from that check.
//!
//! # Example
//!
//! ```
//! use u_rental::book::RentalBook;
//! use u_rental::models::{Activity, Capacity};
//!
//! let mut book = RentalBook::new(Capacity::new(2).unwrap());
//! for (start, end) in [(1, 3), (5, 7), (2, 6)] {
//!     let outcome = book.try_add(Activity::new(start, end).unwrap());
//!     assert!(outcome.is_accepted());
//! }
//!
//! // A third overlapping rental does not fit on two items.
//! let outcome = book.try_add(Activity::new(2, 4).unwrap());
//! assert!(!outcome.is_accepted());
//! assert_eq!(book.len(), 3);
//!
//! let report = book.report().unwrap();
//! assert_eq!(report.to_string(), "Assignment:\nItem 0: 1-3 5-7\nItem 1: 2-6\n");
//! ```

use serde::Serialize;
use tracing::{debug, info};

use crate::allocator::{Feasibility, GreedyAllocator, Infeasibility};
use crate::models::{Activity, Allocation, Capacity};
use crate::report::ItemReport;

/// Result of offering a candidate to a [`RentalBook`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum AddOutcome {
    /// The candidate was appended.
    Accepted {
        /// Position of the new rental in [`RentalBook::rentals`].
        position: usize,
        /// Allocation of every rental, candidate included.
        allocation: Allocation,
    },
    /// The candidate does not fit; the book is unchanged.
    Rejected {
        /// The candidate, handed back.
        candidate: Activity,
        /// Where the check ran out of items.
        reason: Infeasibility,
    },
}

impl AddOutcome {
    /// Whether the candidate was appended.
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }
}

/// Accepted rentals of a fixed item pool.
#[derive(Debug, Clone, Serialize)]
pub struct RentalBook {
    #[serde(rename = "capacity")]
    allocator: GreedyAllocator,
    rentals: Vec<Activity>,
}

impl RentalBook {
    /// Creates an empty book.
    pub fn new(capacity: Capacity) -> Self {
        Self {
            allocator: GreedyAllocator::new(capacity),
            rentals: Vec::new(),
        }
    }

    /// Creates a book holding `rentals` as already accepted.
    ///
    /// The rentals are taken as given; they receive items on the next
    /// successful [`try_add`](Self::try_add) or [`assign`](Self::assign).
    pub fn with_rentals(capacity: Capacity, rentals: Vec<Activity>) -> Self {
        Self {
            allocator: GreedyAllocator::new(capacity),
            rentals,
        }
    }

    /// Item pool size.
    pub fn capacity(&self) -> Capacity {
        self.allocator.capacity()
    }

    /// Accepted rentals, in acceptance order.
    pub fn rentals(&self) -> &[Activity] {
        &self.rentals
    }

    /// Number of accepted rentals.
    pub fn len(&self) -> usize {
        self.rentals.len()
    }

    /// Whether the book holds no rentals.
    pub fn is_empty(&self) -> bool {
        self.rentals.is_empty()
    }

    /// Rentals sorted by `(start, end)`.
    pub fn listing(&self) -> Vec<&Activity> {
        let mut listing: Vec<&Activity> = self.rentals.iter().collect();
        listing.sort_by_key(|a| (a.start(), a.end()));
        listing
    }

    /// Whether `candidate` would be accepted, without changing anything.
    pub fn can_add(&self, candidate: &Activity) -> bool {
        self.allocator
            .evaluate(&self.rentals, candidate)
            .is_feasible()
    }

    /// Offers a candidate rental.
    ///
    /// On acceptance the candidate is appended and every rental's item is
    /// updated. On rejection the book is unchanged and the candidate is
    /// returned inside [`AddOutcome::Rejected`].
    pub fn try_add(&mut self, mut candidate: Activity) -> AddOutcome {
        match self.allocator.check(&mut self.rentals, &mut candidate) {
            Feasibility::Feasible(allocation) => {
                let position = self.rentals.len();
                info!(%candidate, position, "rental accepted");
                self.rentals.push(candidate);
                AddOutcome::Accepted {
                    position,
                    allocation,
                }
            }
            Feasibility::Infeasible(reason) => {
                debug!(%candidate, ?reason, "rental rejected");
                AddOutcome::Rejected { candidate, reason }
            }
        }
    }

    /// Recomputes items for the rentals currently in the book.
    pub fn assign(&mut self) -> Feasibility {
        self.allocator.assign(&mut self.rentals)
    }

    /// Clears every rental's forbidden items and assignment.
    pub fn reset_assignments(&mut self) {
        for rental in &mut self.rentals {
            rental.reset();
        }
    }

    /// Per-item report of the current assignment.
    ///
    /// `None` while some rental has no item.
    pub fn report(&self) -> Option<ItemReport> {
        ItemReport::from_assigned(&self.rentals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn act(start: i64, end: i64) -> Activity {
        Activity::new(start, end).unwrap()
    }

    fn book(capacity: usize, intervals: &[(i64, i64)]) -> RentalBook {
        RentalBook::with_rentals(
            Capacity::new(capacity).unwrap(),
            intervals.iter().map(|&(s, e)| act(s, e)).collect(),
        )
    }

    #[test]
    fn test_accept_appends_and_assigns() {
        let mut b = book(1, &[(1, 3)]);
        let outcome = b.try_add(act(3, 5));

        match outcome {
            AddOutcome::Accepted {
                position,
                allocation,
            } => {
                assert_eq!(position, 1);
                assert_eq!(allocation.items(), &[0, 0]);
            }
            AddOutcome::Rejected { .. } => panic!("expected acceptance"),
        }
        assert_eq!(b.len(), 2);
        assert!(b.rentals().iter().all(|r| r.assigned_item() == Some(0)));
    }

    #[test]
    fn test_reject_returns_candidate() {
        let mut b = book(1, &[(1, 3)]);
        let outcome = b.try_add(act(2, 5));

        assert_eq!(
            outcome,
            AddOutcome::Rejected {
                candidate: act(2, 5),
                reason: Infeasibility {
                    position: 1,
                    step: 1
                },
            }
        );
        assert_eq!(b.len(), 1);
        assert_eq!(b.rentals()[0].assigned_item(), None);
    }

    #[test]
    fn test_can_add_does_not_mutate() {
        let b = book(2, &[(1, 4), (2, 6)]);
        assert!(!b.can_add(&act(3, 5)));
        assert!(b.can_add(&act(6, 8)));
        assert!(b.rentals().iter().all(|r| r.assigned_item().is_none()));
    }

    #[test]
    fn test_report_requires_assignment() {
        let mut b = book(2, &[(1, 4), (2, 6)]);
        assert!(b.report().is_none());

        assert!(b.assign().is_feasible());
        let report = b.report().unwrap();
        assert_eq!(report.to_string(), "Assignment:\nItem 0: 1-4\nItem 1: 2-6\n");

        b.reset_assignments();
        assert!(b.report().is_none());
        assert!(b.rentals().iter().all(|r| r.forbidden_items().is_empty()));
    }

    #[test]
    fn test_serializes_capacity_once() {
        let mut b = RentalBook::new(Capacity::new(3).unwrap());
        assert!(b.try_add(act(1, 2)).is_accepted());
        assert_eq!(b.capacity().get(), 3);

        let json = serde_json::to_value(&b).unwrap();
        let fields: Vec<&String> = json.as_object().unwrap().keys().collect();
        assert_eq!(fields, vec!["capacity", "rentals"]);
        assert_eq!(json["capacity"], 3);
        assert_eq!(json["rentals"][0]["assigned_item"], 0);
    }

    #[test]
    fn test_listing_sorted_by_start() {
        let b = book(3, &[(5, 7), (1, 9), (1, 3)]);
        let listing: Vec<String> = b.listing().iter().map(|a| a.to_string()).collect();
        assert_eq!(listing, vec!["1-3", "1-9", "5-7"]);
    }

    #[test]
    fn test_sequential_adds_reassign_existing() {
        let mut b = RentalBook::new(Capacity::new(2).unwrap());
        assert!(b.try_add(act(1, 3)).is_accepted());
        assert!(b.try_add(act(5, 7)).is_accepted());
        assert!(b.try_add(act(2, 6)).is_accepted());
        assert!(!b.try_add(act(2, 4)).is_accepted());
        assert!(b.try_add(act(7, 9)).is_accepted());
        assert_eq!(b.len(), 4);

        let report = b.report().unwrap();
        for row in report.rows() {
            for pair in row.activities.windows(2) {
                assert!(!pair[0].overlaps(&pair[1]));
            }
        }
    }
}
