/*
[INPUT]:  Host-owned selected tab index
[OUTPUT]: SelectionBinding shared read/write handle
[POS]:    Selection state bridge between host and tab bar
[UPDATE]: When changing how selection is shared or observed
*/

use std::cell::Cell;
use std::rc::Rc;

/// Shared, observable cell holding the selected tab index.
///
/// The host creates the binding and hands a clone to the tab bar. Both sides
/// read and write the same value; the tab bar notices host writes by comparing
/// against the last value it rendered.
#[derive(Debug, Clone, Default)]
pub struct SelectionBinding {
    cell: Rc<Cell<usize>>,
}

impl SelectionBinding {
    pub fn new(initial: usize) -> Self {
        Self {
            cell: Rc::new(Cell::new(initial)),
        }
    }

    pub fn get(&self) -> usize {
        self.cell.get()
    }

    pub fn set(&self, index: usize) {
        self.cell.set(index);
    }

    /// Returns `true` when both handles point at the same cell.
    pub fn same_cell(&self, other: &SelectionBinding) -> bool {
        Rc::ptr_eq(&self.cell, &other.cell)
    }
}
