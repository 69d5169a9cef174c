//! Allocation quality metrics (KPIs).
//!
//! Computes item usage indicators from a feasible allocation and the
//! activities it was computed for.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Horizon | Earliest start to latest end |
//! | Items Used | Items holding at least one activity |
//! | Busy Time | Sum of activity durations per item |
//! | Utilization | Busy time / horizon, per item |
//! | Peak Concurrency | Largest number of activities overlapping one instant |
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 1.2: Performance Measures

use serde::Serialize;

use crate::models::{Activity, Allocation};

/// Item usage indicators.
///
/// `activities` passed to [`AllocationKpi::calculate`] must be in the same
/// input order the allocation was computed for.
#[derive(Debug, Clone, Serialize)]
pub struct AllocationKpi {
    /// Earliest start across all activities.
    pub horizon_start: i64,
    /// Latest end across all activities.
    pub horizon_end: i64,
    /// Items holding at least one activity.
    pub items_used: usize,
    /// Items left without any activity.
    pub idle_items: usize,
    /// Busy time per item, by item index, up to the highest used item.
    /// Items past the end are idle.
    pub busy_by_item: Vec<i64>,
    /// Busy time / horizon per item (0.0..1.0), indexed like `busy_by_item`.
    pub utilization_by_item: Vec<f64>,
    /// Mean utilization over the whole pool, idle items included.
    pub avg_utilization: f64,
    /// Largest number of simultaneously running activities.
    pub peak_concurrency: usize,
}

impl AllocationKpi {
    /// Computes KPIs for a feasible allocation.
    pub fn calculate(allocation: &Allocation, activities: &[Activity]) -> Self {
        let capacity = allocation.capacity().get();
        let horizon_start = activities.iter().map(Activity::start).min().unwrap_or(0);
        let horizon_end = activities.iter().map(Activity::end).max().unwrap_or(0);
        let horizon = horizon_end - horizon_start;

        let span = allocation.items().iter().max().map_or(0, |&item| item + 1);
        let mut busy_by_item = vec![0_i64; span];
        for (position, item) in allocation.pairs() {
            if let Some(activity) = activities.get(position) {
                busy_by_item[item] += activity.duration();
            }
        }

        let utilization_by_item: Vec<f64> = busy_by_item
            .iter()
            .map(|&busy| {
                if horizon <= 0 {
                    0.0
                } else {
                    busy as f64 / horizon as f64
                }
            })
            .collect();
        let avg_utilization = utilization_by_item.iter().sum::<f64>() / capacity as f64;

        let items_used = allocation.items_used();

        Self {
            horizon_start,
            horizon_end,
            items_used,
            idle_items: capacity - items_used,
            busy_by_item,
            utilization_by_item,
            avg_utilization,
            peak_concurrency: peak_concurrency(activities),
        }
    }
}

/// Largest number of activities running at the same instant.
///
/// Touching activities (`1-3`, `3-5`) do not count as simultaneous. No
/// allocation can use fewer items than this.
pub fn peak_concurrency(activities: &[Activity]) -> usize {
    let mut events: Vec<(i64, i32)> = activities
        .iter()
        .flat_map(|a| [(a.start(), 1), (a.end(), -1)])
        .collect();
    // Ends sort before starts at the same instant.
    events.sort_unstable();

    let mut running: i32 = 0;
    let mut peak: i32 = 0;
    for (_, delta) in events {
        running += delta;
        peak = peak.max(running);
    }
    peak as usize
}
