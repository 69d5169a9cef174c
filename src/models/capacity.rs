//! Item pool size.
//!
//! Items are not stored entities; an item is just an index in
//! `[0, capacity)`. The pool is fully described by its size.

use serde::Serialize;
use std::fmt;
use std::num::NonZeroUsize;

use crate::error::AllocError;

use super::ItemIndex;

/// Number of interchangeable items, always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Capacity(NonZeroUsize);

impl Capacity {
    /// Creates a capacity of `n` items.
    ///
    /// # Errors
    /// [`AllocError::ZeroCapacity`] if `n == 0`.
    pub fn new(n: usize) -> Result<Self, AllocError> {
        NonZeroUsize::new(n).map(Self).ok_or(AllocError::ZeroCapacity)
    }

    /// Number of items.
    #[inline]
    pub fn get(self) -> usize {
        self.0.get()
    }

    /// Whether `item` names an item of this pool.
    #[inline]
    pub fn contains(self, item: ItemIndex) -> bool {
        item < self.get()
    }

    /// Item indices in ascending order.
    pub fn items(self) -> std::ops::Range<ItemIndex> {
        0..self.get()
    }
}

impl From<NonZeroUsize> for Capacity {
    fn from(n: NonZeroUsize) -> Self {
        Self(n)
    }
}

impl TryFrom<usize> for Capacity {
    type Error = AllocError;

    fn try_from(n: usize) -> Result<Self, Self::Error> {
        Self::new(n)
    }
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
