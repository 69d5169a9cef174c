//! Greedy best-fit item allocator.
//!
//! # Algorithm
//!
//! 1. Order all activities by `(end, start)` ascending.
//! 2. For each activity in that order:
//!    - if every item is forbidden for it, stop: the check is infeasible;
//!    - otherwise take the eligible item with the largest last end time
//!      (lowest index on ties) and record the activity's end on that item.
//! 3. After each assignment, forbid the chosen item for every later activity
//!    that starts before the assigned one ends.
//!
//! The best-fit rule keeps the most recently used items busy and leaves
//! long-idle items free for activities that start early. It is a greedy
//! rule: there is no backtracking and no activity is processed twice.
//!
//! # Complexity
//! O(a * (a + u)) where a = activities, u = items actually used (at most
//! `min(a, capacity)`). Propagation scans all later activities after every
//! assignment. Nothing is sized by the capacity itself.
//!
//! # Reference
//! Kleinberg & Tardos (2005), "Algorithm Design", Ch. 4.1: Interval Partitioning

use serde::Serialize;
use std::iter;
use tracing::{debug, instrument, trace};

use super::eligibility::Eligibility;
use super::ordering::processing_order;
use crate::error::AllocError;
use crate::models::{Activity, Allocation, Capacity, ItemIndex};

/// Outcome of a feasibility check.
///
/// Infeasibility is an expected answer, not an error; malformed input is
/// rejected before a check can run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum Feasibility {
    /// Every activity received an item.
    Feasible(Allocation),
    /// Some activity ran out of eligible items.
    Infeasible(Infeasibility),
}

impl Feasibility {
    /// Whether every activity could be placed.
    pub fn is_feasible(&self) -> bool {
        matches!(self, Self::Feasible(_))
    }

    /// The allocation, if feasible.
    pub fn allocation(&self) -> Option<&Allocation> {
        match self {
            Self::Feasible(allocation) => Some(allocation),
            Self::Infeasible(_) => None,
        }
    }

    /// Consumes the outcome, returning the allocation if feasible.
    pub fn into_allocation(self) -> Option<Allocation> {
        match self {
            Self::Feasible(allocation) => Some(allocation),
            Self::Infeasible(_) => None,
        }
    }
}

/// Where a check ran out of items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Infeasibility {
    /// Input position of the activity that found every item forbidden.
    pub position: usize,
    /// Its index in processing order; equals the number of activities that
    /// had been assigned when the check stopped.
    pub step: usize,
}

/// Greedy best-fit allocator over a fixed item pool.
///
/// # Example
///
/// ```
/// use u_rental::allocator::GreedyAllocator;
/// use u_rental::models::Activity;
///
/// let allocator = GreedyAllocator::with_capacity(1).unwrap();
/// let mut existing = vec![Activity::new(1, 3).unwrap()];
///
/// let mut touching = Activity::new(3, 5).unwrap();
/// assert!(allocator.check(&mut existing, &mut touching).is_feasible());
/// assert_eq!(touching.assigned_item(), Some(0));
///
/// let mut overlapping = Activity::new(2, 5).unwrap();
/// assert!(!allocator.check(&mut existing, &mut overlapping).is_feasible());
/// assert_eq!(overlapping.assigned_item(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct GreedyAllocator {
    capacity: Capacity,
}

impl GreedyAllocator {
    /// Creates an allocator for `capacity` items.
    pub fn new(capacity: Capacity) -> Self {
        Self { capacity }
    }

    /// Creates an allocator for `n` items.
    ///
    /// # Errors
    /// [`AllocError::ZeroCapacity`] if `n == 0`.
    pub fn with_capacity(n: usize) -> Result<Self, AllocError> {
        Capacity::new(n).map(Self::new)
    }

    /// Item pool size.
    pub fn capacity(&self) -> Capacity {
        self.capacity
    }

    /// Checks whether `candidate` fits next to `existing`, recording the
    /// assignment on success.
    ///
    /// On [`Feasibility::Feasible`], every activity (existing and candidate)
    /// has its assigned item and forbidden items overwritten with the outcome
    /// of this check. On [`Feasibility::Infeasible`] no activity is touched.
    ///
    /// State left over from earlier checks is ignored: every check starts
    /// with no forbidden items and all items idle.
    pub fn check(&self, existing: &mut [Activity], candidate: &mut Activity) -> Feasibility {
        let feasibility = self.evaluate(existing, candidate);
        if let Feasibility::Feasible(allocation) = &feasibility {
            commit(existing.iter_mut().chain(iter::once(candidate)), allocation);
        }
        feasibility
    }

    /// Allocates a whole set of activities, recording the assignment on
    /// success. Same state policy as [`check`](Self::check).
    pub fn assign(&self, activities: &mut [Activity]) -> Feasibility {
        let feasibility = self.allocate(activities);
        if let Feasibility::Feasible(allocation) = &feasibility {
            commit(activities.iter_mut(), allocation);
        }
        feasibility
    }

    /// Like [`check`](Self::check), without recording anything.
    ///
    /// The candidate takes input position `existing.len()`.
    pub fn evaluate(&self, existing: &[Activity], candidate: &Activity) -> Feasibility {
        let activities: Vec<&Activity> = existing.iter().chain(iter::once(candidate)).collect();
        self.run(&activities)
    }

    /// Allocates a whole set of activities, without recording anything.
    pub fn allocate(&self, activities: &[Activity]) -> Feasibility {
        let activities: Vec<&Activity> = activities.iter().collect();
        self.run(&activities)
    }

    #[instrument(
        level = "debug",
        skip_all,
        fields(activities = activities.len(), capacity = self.capacity.get())
    )]
    fn run(&self, activities: &[&Activity]) -> Feasibility {
        let order = processing_order(activities);
        let mut eligibility = Eligibility::new(activities.len(), self.capacity.get());
        let mut items: Vec<ItemIndex> = vec![0; activities.len()];
        // End time of every item used so far. Unused items all end at 0.
        let mut last_end: Vec<i64> = Vec::new();

        for (step, &position) in order.iter().enumerate() {
            let activity = activities[position];

            let Some(item) = best_fit(&eligibility, position, &last_end, self.capacity.get())
            else {
                debug!(step, position, %activity, "every item is forbidden");
                return Feasibility::Infeasible(Infeasibility { position, step });
            };

            trace!(step, position, item, %activity, "assigned");
            items[position] = item;
            if item == last_end.len() {
                last_end.push(activity.end());
            } else {
                last_end[item] = activity.end();
            }

            // Later activities end no earlier than this one, so starting
            // before its end is enough to overlap.
            for &later in &order[step + 1..] {
                if activities[later].start() < activity.end() {
                    eligibility.forbid(later, item);
                }
            }
        }

        debug!(items_used = last_end.len(), "feasible");
        Feasibility::Feasible(Allocation::new(
            self.capacity,
            items,
            eligibility.into_sets(),
            order,
        ))
    }
}

fn commit<'a>(activities: impl Iterator<Item = &'a mut Activity>, allocation: &Allocation) {
    for (position, activity) in activities.enumerate() {
        if let Some(item) = allocation.item_of(position) {
            let forbidden = allocation.forbidden_of(position).unwrap_or_default();
            activity.commit(item, forbidden.to_vec());
        }
    }
}

/// Picks the eligible item with the largest last end time.
///
/// Used items are scanned in ascending order and only a strictly larger end
/// time replaces the current pick, so the lowest index wins ties. Items are
/// taken into use lowest index first and only used items are ever forbidden,
/// so used items form the prefix `0..last_end.len()`. Any eligible used item
/// ends after 0 and beats every unused one; otherwise the lowest unused item
/// is the pick.
fn best_fit(
    eligibility: &Eligibility,
    position: usize,
    last_end: &[i64],
    capacity: usize,
) -> Option<ItemIndex> {
    if eligibility.is_exhausted(position) {
        return None;
    }

    let mut best: Option<ItemIndex> = None;
    for (item, &end) in last_end.iter().enumerate() {
        if eligibility.is_forbidden(position, item) {
            continue;
        }
        match best {
            Some(b) if end <= last_end[b] => {}
            _ => best = Some(item),
        }
    }
    best.or_else(|| (last_end.len() < capacity).then_some(last_end.len()))
}

/// Checks whether `candidate` fits next to `existing` on `capacity` items.
///
/// Convenience wrapper around [`GreedyAllocator::check`].
///
/// # Errors
/// [`AllocError::ZeroCapacity`] if `capacity == 0`. Infeasibility is not an
/// error; it is returned as [`Feasibility::Infeasible`].
pub fn check(
    existing: &mut [Activity],
    candidate: &mut Activity,
    capacity: usize,
) -> Result<Feasibility, AllocError> {
    let allocator = GreedyAllocator::with_capacity(capacity)?;
    Ok(allocator.check(existing, candidate))
}
