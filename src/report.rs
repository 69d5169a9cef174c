//! Per-item assignment report.
//!
//! Groups activities by the item they were assigned to, for human
//! inspection. A report can only be built from a complete assignment: either
//! a feasible [`Allocation`] or a set of activities that all carry an item.
//!
//! ```text
//! Assignment:
//! Item 0: 1-3 5-7
//! Item 1: 2-6
//! ```

use serde::Serialize;
use std::fmt;

use crate::models::{Activity, Allocation, ItemIndex};

/// Activities of one item, sorted by `(start, end)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemRow {
    /// Item index.
    pub item: ItemIndex,
    /// Activities on this item.
    pub activities: Vec<Activity>,
}

/// Activities grouped by item, ascending item index. Items without
/// activities are omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemReport {
    rows: Vec<ItemRow>,
}

impl ItemReport {
    /// Builds a report from a feasible allocation and the activities it was
    /// computed for, in the same input order.
    pub fn new(activities: &[Activity], allocation: &Allocation) -> Self {
        Self::group(
            activities
                .iter()
                .enumerate()
                .filter_map(|(p, a)| allocation.item_of(p).map(|item| (item, a))),
        )
    }

    /// Builds a report from each activity's recorded item.
    ///
    /// Returns `None` if any activity is unassigned, since a partial
    /// assignment is not a valid roster.
    pub fn from_assigned(activities: &[Activity]) -> Option<Self> {
        let assigned: Option<Vec<_>> = activities
            .iter()
            .map(|a| a.assigned_item().map(|item| (item, a)))
            .collect();
        assigned.map(|pairs| Self::group(pairs.into_iter()))
    }

    fn group<'a>(pairs: impl Iterator<Item = (ItemIndex, &'a Activity)>) -> Self {
        let mut pairs: Vec<(ItemIndex, &Activity)> = pairs.collect();
        pairs.sort_by_key(|&(item, a)| (item, a.start(), a.end()));

        let mut rows: Vec<ItemRow> = Vec::new();
        for (item, activity) in pairs {
            if let Some(row) = rows.last_mut().filter(|r| r.item == item) {
                row.activities.push(activity.clone());
                continue;
            }
            rows.push(ItemRow {
                item,
                activities: vec![activity.clone()],
            });
        }
        Self { rows }
    }

    /// Rows in ascending item order.
    pub fn rows(&self) -> &[ItemRow] {
        &self.rows
    }

    /// Activities on `item`, if it has any.
    pub fn row(&self, item: ItemIndex) -> Option<&ItemRow> {
        self.rows.iter().find(|r| r.item == item)
    }
}

impl fmt::Display for ItemReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Assignment:")?;
        for row in &self.rows {
            write!(f, "Item {}:", row.item)?;
            for activity in &row.activities {
                write!(f, " {activity}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
