//! Processing order for a feasibility check.
//!
//! Activities are processed by ascending `end`, then ascending `start`.
//! Ordering by end time guarantees that when an activity is reached, every
//! activity already placed on an item ends no later than it does, so an
//! item's latest end time is always the end of its most recent occupant.

use crate::models::Activity;

/// Sort key: `(end, start)`.
#[inline]
pub fn sort_key(activity: &Activity) -> (i64, i64) {
    (activity.end(), activity.start())
}

/// Returns input positions sorted by [`sort_key`].
///
/// The sort is stable, so activities with identical intervals keep their
/// input order. The input slice itself is left untouched.
pub fn processing_order(activities: &[&Activity]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..activities.len()).collect();
    order.sort_by_key(|&p| sort_key(activities[p]));
    order
}

#[cfg(test)]
mod tests {
    use super::*;

    fn acts(intervals: &[(i64, i64)]) -> Vec<Activity> {
        intervals
            .iter()
            .map(|&(s, e)| Activity::new(s, e).unwrap())
            .collect()
    }

    #[test]
    fn test_orders_by_end_then_start() {
        let a = acts(&[(2, 6), (1, 4), (3, 6), (5, 7)]);
        let refs: Vec<&Activity> = a.iter().collect();
        // (1,4) (2,6) (3,6) (5,7)
        assert_eq!(processing_order(&refs), vec![1, 0, 2, 3]);
    }

    #[test]
    fn test_identical_intervals_keep_input_order() {
        let a = acts(&[(1, 3), (1, 3), (1, 2)]);
        let refs: Vec<&Activity> = a.iter().collect();
        assert_eq!(processing_order(&refs), vec![2, 0, 1]);
    }

    #[test]
    fn test_empty() {
        assert!(processing_order(&[]).is_empty());
    }
}
