//! Allocation (solution) model.
//!
//! An allocation is the complete outcome of a feasible check: one item per
//! activity, plus the forbidden-item sets discovered while computing it.
//! Activities are addressed by their *input position*: existing activities
//! first, in the order they were passed, then the candidate.

use serde::Serialize;

use super::{Capacity, ItemIndex};

/// Item assignment for every activity of a feasible check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Allocation {
    capacity: Capacity,
    /// Assigned item, by input position.
    items: Vec<ItemIndex>,
    /// Forbidden items (ascending), by input position.
    forbidden: Vec<Vec<ItemIndex>>,
    /// Input positions in processing order.
    order: Vec<usize>,
}

impl Allocation {
    pub(crate) fn new(
        capacity: Capacity,
        items: Vec<ItemIndex>,
        forbidden: Vec<Vec<ItemIndex>>,
        order: Vec<usize>,
    ) -> Self {
        debug_assert_eq!(items.len(), forbidden.len());
        debug_assert_eq!(items.len(), order.len());
        Self {
            capacity,
            items,
            forbidden,
            order,
        }
    }

    /// Capacity the allocation was computed for.
    pub fn capacity(&self) -> Capacity {
        self.capacity
    }

    /// Number of allocated activities.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether no activity was allocated.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Assigned items, by input position.
    pub fn items(&self) -> &[ItemIndex] {
        &self.items
    }

    /// Item of the activity at `position`.
    pub fn item_of(&self, position: usize) -> Option<ItemIndex> {
        self.items.get(position).copied()
    }

    /// Forbidden items of the activity at `position`.
    pub fn forbidden_of(&self, position: usize) -> Option<&[ItemIndex]> {
        self.forbidden.get(position).map(Vec::as_slice)
    }

    /// Input positions in the order they were processed.
    pub fn processing_order(&self) -> &[usize] {
        &self.order
    }

    /// Input positions of the activities assigned to `item`, in processing order.
    pub fn positions_on_item(&self, item: ItemIndex) -> Vec<usize> {
        self.order
            .iter()
            .copied()
            .filter(|&p| self.items[p] == item)
            .collect()
    }

    /// Number of distinct items that received at least one activity.
    pub fn items_used(&self) -> usize {
        let mut used = self.items.clone();
        used.sort_unstable();
        used.dedup();
        used.len()
    }

    /// `(position, item)` pairs in input order.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, ItemIndex)> + '_ {
        self.items.iter().copied().enumerate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Allocation {
        // positions: 0 -> item 0, 1 -> item 1, 2 -> item 0
        Allocation::new(
            Capacity::new(3).unwrap(),
            vec![0, 1, 0],
            vec![vec![], vec![0], vec![1]],
            vec![0, 1, 2],
        )
    }

    #[test]
    fn test_item_lookup() {
        let a = sample();
        assert_eq!(a.len(), 3);
        assert!(!a.is_empty());
        assert_eq!(a.item_of(1), Some(1));
        assert_eq!(a.item_of(9), None);
        assert_eq!(a.forbidden_of(2), Some(&[1][..]));
        assert_eq!(a.forbidden_of(9), None);
    }

    #[test]
    fn test_positions_on_item() {
        let a = sample();
        assert_eq!(a.positions_on_item(0), vec![0, 2]);
        assert_eq!(a.positions_on_item(1), vec![1]);
        assert!(a.positions_on_item(2).is_empty());
    }

    #[test]
    fn test_items_used() {
        assert_eq!(sample().items_used(), 2);
    }

    #[test]
    fn test_pairs() {
        let pairs: Vec<_> = sample().pairs().collect();
        assert_eq!(pairs, vec![(0, 0), (1, 1), (2, 0)]);
    }
}
