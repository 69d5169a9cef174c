//! Rental domain models.
//!
//! Provides the data types for representing a feasibility check and its
//! outcome.
//!
//! # Domain Mappings
//!
//! | u-rental | Equipment rental | Parking | Meeting rooms |
//! |----------|------------------|---------|---------------|
//! | Activity | Rental period | Reservation | Booking |
//! | Item | Unit of stock | Bay | Room |
//! | Capacity | Units owned | Bays in lot | Rooms on floor |
//! | Allocation | Unit roster | Bay plan | Room plan |

mod activity;
mod allocation;
mod capacity;

pub use activity::Activity;
pub use allocation::Allocation;
pub use capacity::Capacity;

/// Index of an item in `[0, capacity)`.
pub type ItemIndex = usize;
