//! Greedy item allocation and allocation KPIs.
//!
//! Decides whether a set of activities fits on a pool of interchangeable
//! items and, if so, which item each activity gets.
//!
//! # Algorithm
//!
//! `GreedyAllocator` orders activities by end time and places each on the
//! eligible item that was busy most recently. Items taken by an activity are
//! forbidden for every later activity it overlaps. The first activity with no
//! eligible item makes the whole check infeasible.
//!
//! # KPI
//!
//! `AllocationKpi` computes item usage metrics: busy time, utilization,
//! idle items and peak concurrency.
//!
//! # References
//!
//! - Kleinberg & Tardos (2005), "Algorithm Design", Ch. 4.1
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 1.2

mod eligibility;
mod greedy;
mod kpi;
mod ordering;

pub use greedy::{check, Feasibility, GreedyAllocator, Infeasibility};
pub use kpi::{peak_concurrency, AllocationKpi};
pub use ordering::{processing_order, sort_key};
