//! Heap-owned grid storage.
//!
//! [`OwnedGrid`] owns a contiguous block of `extents.area()` cells in
//! column-major linear order (`index = x + extents.x * y`). Resizing always
//! drops the old cells and reconstructs (there is no partial copy), except
//! when the target extents already match, which is guaranteed not to
//! reallocate.
use std::iter;

use tracing::trace;

use crate::coord::{Extents, Indices};
use crate::grid::Grid;

/// Dynamically-sized grid owning its cell storage.
#[derive(Clone, Debug)]
pub struct OwnedGrid<C> {
    extents: Extents,
    data: Vec<C>,
}

impl<C> OwnedGrid<C> {
    /// An empty grid with zero extents and no storage.
    pub fn new() -> Self {
        Self {
            extents: Extents::ZERO,
            data: Vec::new(),
        }
    }

    /// A grid of default-constructed cells.
    pub fn with_extents(extents: Extents) -> Self
    where
        C: Default,
    {
        Self {
            extents,
            data: iter::repeat_with(C::default).take(cell_count(extents)).collect(),
        }
    }

    /// A grid with every cell set to `value`.
    pub fn filled(extents: Extents, value: C) -> Self
    where
        C: Clone,
    {
        Self {
            extents,
            data: vec![value; cell_count(extents)],
        }
    }

    /// Change extents, default-constructing every cell. No-op when the extents
    /// already match; frees all storage when the target area is zero.
    pub fn resize(&mut self, extents: Extents)
    where
        C: Default,
    {
        if extents == self.extents {
            return;
        }
        trace!(from = %self.extents, to = %extents, "resizing owned grid");
        self.data = iter::repeat_with(C::default).take(cell_count(extents)).collect();
        self.extents = extents;
    }

    /// Change extents, setting every cell to `value`. When the extents already
    /// match, refills in place without reallocating.
    pub fn resize_with(&mut self, extents: Extents, value: C)
    where
        C: Clone,
    {
        if extents == self.extents {
            self.fill(value);
            return;
        }
        trace!(from = %self.extents, to = %extents, "resizing owned grid");
        self.data = vec![value; cell_count(extents)];
        self.extents = extents;
    }

    /// Drop all cells and reset to zero extents. Idempotent.
    pub fn clear(&mut self) {
        self.extents = Extents::ZERO;
        self.data = Vec::new();
    }

    /// Move the grid out, leaving a valid empty grid behind.
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    /// Cells in linear storage order.
    pub fn data(&self) -> &[C] {
        &self.data
    }

    /// Cells in linear storage order, mutable.
    pub fn data_mut(&mut self) -> &mut [C] {
        &mut self.data
    }

    fn linear(&self, pt: Indices) -> usize {
        debug_assert!(
            pt.all_ge(Indices::ZERO) && pt.all_lt(self.extents),
            "cell index {pt} outside extents {}",
            self.extents
        );
        (pt.x + self.extents.x * pt.y) as usize
    }
}

fn cell_count(extents: Extents) -> usize {
    extents.area().max(0) as usize
}

impl<C> Default for OwnedGrid<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Grid for OwnedGrid<C> {
    type Cell = C;

    fn extents(&self) -> Extents {
        self.extents
    }

    fn access(&self, pt: Indices) -> &C {
        &self.data[self.linear(pt)]
    }

    fn access_mut(&mut self, pt: Indices) -> &mut C {
        let index = self.linear(pt);
        &mut self.data[index]
    }

    fn iter(&self) -> impl Iterator<Item = &C> {
        self.data.iter()
    }
}

impl<C: PartialEq> PartialEq for OwnedGrid<C> {
    fn eq(&self, other: &Self) -> bool {
        self.eq_grid(other)
    }
}
