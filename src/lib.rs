//! Rental feasibility for the U-Engine ecosystem.
//!
//! Decides whether a new rental can be accepted by a pool of `N`
//! interchangeable items given the rentals already accepted, so that no two
//! overlapping rentals ever hold the same item, and computes which item each
//! rental gets.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Activity`, `Capacity`, `Allocation`
//! - **`allocator`**: Greedy best-fit allocation and allocation KPIs
//! - **`book`**: `RentalBook`, accepted rentals grown one candidate at a time
//! - **`report`**: Per-item assignment report
//! - **`request`** / **`validation`**: Serializable check requests and their
//!   integrity checks
//! - **`generator`**: Seeded synthetic instances
//!
//! # Example
//!
//! ```
//! use u_rental::allocator::check;
//! use u_rental::models::Activity;
//!
//! let mut existing = vec![Activity::new(1, 3).unwrap(), Activity::new(5, 7).unwrap()];
//! let mut candidate = Activity::new(2, 6).unwrap();
//!
//! let result = check(&mut existing, &mut candidate, 2).unwrap();
//! assert!(result.is_feasible());
//! assert_eq!(candidate.assigned_item(), Some(1));
//! ```
//!
//! # References
//!
//! - Kleinberg & Tardos (2005), "Algorithm Design", Ch. 4.1
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod allocator;
pub mod book;
pub mod error;
pub mod generator;
pub mod models;
pub mod report;
pub mod request;
pub mod validation;

pub use error::AllocError;
