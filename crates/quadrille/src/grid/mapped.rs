//! Grid storage mapped over caller-provided memory.
//!
//! [`MappedGrid`] borrows a mutable slice for the lifetime of the grid; it
//! never allocates or frees. The slice must hold at least `extents.area()`
//! cells. Ownership, and any aliasing discipline beyond what the borrow
//! checker enforces, stays with the caller.
use std::mem;

use crate::coord::{Extents, Indices};
use crate::grid::Grid;

/// Non-owning grid over external storage.
#[derive(Debug)]
pub struct MappedGrid<'m, C> {
    extents: Extents,
    data: &'m mut [C],
}

impl<'m, C> MappedGrid<'m, C> {
    /// Bind `extents` over `data`, which must hold at least `extents.area()`
    /// cells in column-major linear order.
    pub fn new(extents: Extents, data: &'m mut [C]) -> Self {
        debug_assert!(
            cell_count(extents) <= data.len(),
            "extents {extents} exceed mapped storage of {} cells",
            data.len()
        );
        Self { extents, data }
    }

    /// Re-extent over the same memory; the new extents must still fit.
    pub fn resize(&mut self, extents: Extents) {
        debug_assert!(
            cell_count(extents) <= self.data.len(),
            "extents {extents} exceed mapped storage of {} cells",
            self.data.len()
        );
        self.extents = extents;
    }

    /// Re-extent over the same memory and set every covered cell to
    /// `initial_value`.
    pub fn resize_with(&mut self, extents: Extents, initial_value: C)
    where
        C: Clone,
    {
        self.resize(extents);
        self.fill(initial_value);
    }

    /// Exchange the two grids' bindings (extents and mapped memory). The
    /// memory itself stays owned by the original callers on both sides.
    pub fn swap(&mut self, other: &mut MappedGrid<'m, C>) {
        mem::swap(&mut self.extents, &mut other.extents);
        mem::swap(&mut self.data, &mut other.data);
    }

    /// The covered cells in linear storage order.
    pub fn data(&self) -> &[C] {
        &self.data[..cell_count(self.extents)]
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

impl<C> Grid for MappedGrid<'_, C> {
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
        self.data().iter()
    }
}

impl<C: PartialEq> PartialEq for MappedGrid<'_, C> {
    fn eq(&self, other: &Self) -> bool {
        self.eq_grid(other)
    }
}

/// Non-owning grid over external storage with compile-time extents `(W, H)`.
///
/// The fixed-extent counterpart of [`MappedGrid`]: the slice binding is the
/// only runtime state, and there is no resize.
#[derive(Debug)]
pub struct FixedMappedGrid<'m, C, const W: usize, const H: usize> {
    data: &'m mut [C],
}

impl<'m, C, const W: usize, const H: usize> FixedMappedGrid<'m, C, W, H> {
    pub const EXTENTS: Extents = Extents::new(W as i32, H as i32);

    /// Bind over `data`, which must hold at least `W * H` cells in
    /// column-major linear order.
    pub fn new(data: &'m mut [C]) -> Self {
        debug_assert!(
            W * H <= data.len(),
            "extents {} exceed mapped storage of {} cells",
            Self::EXTENTS,
            data.len()
        );
        Self { data }
    }

    /// The covered cells in linear storage order.
    pub fn data(&self) -> &[C] {
        &self.data[..W * H]
    }
}

impl<C, const W: usize, const H: usize> Grid for FixedMappedGrid<'_, C, W, H> {
    type Cell = C;

    fn extents(&self) -> Extents {
        Self::EXTENTS
    }

    fn access(&self, pt: Indices) -> &C {
        debug_assert!(self.in_bounds(pt), "cell index {pt} outside extents {}", Self::EXTENTS);
        &self.data[(pt.x + W as i32 * pt.y) as usize]
    }

    fn access_mut(&mut self, pt: Indices) -> &mut C {
        debug_assert!(self.in_bounds(pt), "cell index {pt} outside extents {}", Self::EXTENTS);
        &mut self.data[(pt.x + W as i32 * pt.y) as usize]
    }

    fn iter(&self) -> impl Iterator<Item = &C> {
        self.data().iter()
    }
}

impl<C: PartialEq, const W: usize, const H: usize> PartialEq for FixedMappedGrid<'_, C, W, H> {
    fn eq(&self, other: &Self) -> bool {
        self.eq_grid(other)
    }
}
