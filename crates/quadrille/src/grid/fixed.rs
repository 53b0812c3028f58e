//! Inline, compile-time-sized grid storage.
//!
//! [`FixedGrid`] keeps its cells in a nested `[[C; W]; H]` array: no heap
//! allocation, extents fixed at the type level, no resize operation.
use std::array;

use crate::coord::{Extents, Indices};
use crate::grid::Grid;

/// Grid with inline storage and compile-time extents `(W, H)`.
#[derive(Clone, Debug)]
pub struct FixedGrid<C, const W: usize, const H: usize> {
    data: [[C; W]; H],
}

impl<C, const W: usize, const H: usize> FixedGrid<C, W, H> {
    pub const EXTENTS: Extents = Extents::new(W as i32, H as i32);

    /// A grid of default-constructed cells.
    pub fn new() -> Self
    where
        C: Default,
    {
        Self {
            data: array::from_fn(|_| array::from_fn(|_| C::default())),
        }
    }

    /// A grid with every cell set to `initial_value`.
    pub fn filled(initial_value: C) -> Self
    where
        C: Clone,
    {
        Self {
            data: array::from_fn(|_| array::from_fn(|_| initial_value.clone())),
        }
    }
}

impl<C: Default, const W: usize, const H: usize> Default for FixedGrid<C, W, H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C, const W: usize, const H: usize> Grid for FixedGrid<C, W, H> {
    type Cell = C;

    fn extents(&self) -> Extents {
        Self::EXTENTS
    }

    fn access(&self, pt: Indices) -> &C {
        debug_assert!(self.in_bounds(pt), "cell index {pt} outside extents {}", Self::EXTENTS);
        &self.data[pt.y as usize][pt.x as usize]
    }

    fn access_mut(&mut self, pt: Indices) -> &mut C {
        debug_assert!(self.in_bounds(pt), "cell index {pt} outside extents {}", Self::EXTENTS);
        &mut self.data[pt.y as usize][pt.x as usize]
    }

    fn iter(&self) -> impl Iterator<Item = &C> {
        self.data.iter().flatten()
    }
}

impl<C: PartialEq, const W: usize, const H: usize> PartialEq for FixedGrid<C, W, H> {
    fn eq(&self, other: &Self) -> bool {
        self.eq_grid(other)
    }
}
