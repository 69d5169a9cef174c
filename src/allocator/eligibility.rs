//! Per-activity forbidden-item sets for one check.

use fixedbitset::FixedBitSet;

use crate::models::ItemIndex;

/// Forbidden items of every activity, addressed by input position.
///
/// Sets start empty and grow only as far as the highest forbidden item, so
/// memory follows the overlaps found rather than the pool size. Sets only
/// grow during a check.
#[derive(Debug, Clone)]
pub(crate) struct Eligibility {
    forbidden: Vec<FixedBitSet>,
    counts: Vec<usize>,
    capacity: usize,
}

impl Eligibility {
    /// Fresh state: nothing forbidden for anyone.
    pub(crate) fn new(activities: usize, capacity: usize) -> Self {
        Self {
            forbidden: vec![FixedBitSet::new(); activities],
            counts: vec![0; activities],
            capacity,
        }
    }

    /// Forbids `item` for the activity at `position`. Idempotent.
    #[inline]
    pub(crate) fn forbid(&mut self, position: usize, item: ItemIndex) {
        let bits = &mut self.forbidden[position];
        if item >= bits.len() {
            bits.grow(item + 1);
        }
        if !bits.put(item) {
            self.counts[position] += 1;
        }
    }

    #[inline]
    pub(crate) fn is_forbidden(&self, position: usize, item: ItemIndex) -> bool {
        self.forbidden[position].contains(item)
    }

    /// Whether every item is forbidden for the activity at `position`.
    #[inline]
    pub(crate) fn is_exhausted(&self, position: usize) -> bool {
        self.counts[position] == self.capacity
    }

    /// Forbidden items of every position, ascending.
    pub(crate) fn into_sets(self) -> Vec<Vec<ItemIndex>> {
        self.forbidden
            .into_iter()
            .map(|bits| bits.ones().collect())
            .collect()
    }
}
