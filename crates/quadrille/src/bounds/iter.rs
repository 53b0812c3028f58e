//! Row- and column-major iteration over the index space of a bounds object.
//!
//! These iterators yield [`Indices`] values, not cell references; they are pure
//! index generators and drive any grid or view (or nothing at all). Both keep
//! the current point, the origin, and the past-corner value, wrapping the fast
//! axis when it reaches the corner.
use std::iter::FusedIterator;

use crate::bounds::GridBounds;
use crate::coord::Indices;

/// Column-major traversal: x increments fastest, wrapping to the next y.
#[derive(Clone, Copy, Debug)]
pub struct ColMajorPoints {
    pt: Indices,
    origin: Indices,
    past_corner: Indices,
    remaining: usize,
}

/// Row-major traversal: y increments fastest, wrapping to the next x.
#[derive(Clone, Copy, Debug)]
pub struct RowMajorPoints {
    pt: Indices,
    origin: Indices,
    past_corner: Indices,
    remaining: usize,
}

/// Column-major iterator over `[origin, origin + extents)`.
pub fn col_major_points<B: GridBounds + ?Sized>(bounds: &B) -> ColMajorPoints {
    ColMajorPoints {
        pt: bounds.origin(),
        origin: bounds.origin(),
        past_corner: bounds.corner(),
        remaining: bounds.extents().area().max(0) as usize,
    }
}

/// Row-major iterator over `[origin, origin + extents)`.
pub fn row_major_points<B: GridBounds + ?Sized>(bounds: &B) -> RowMajorPoints {
    RowMajorPoints {
        pt: bounds.origin(),
        origin: bounds.origin(),
        past_corner: bounds.corner(),
        remaining: bounds.extents().area().max(0) as usize,
    }
}

impl Iterator for ColMajorPoints {
    type Item = Indices;

    fn next(&mut self) -> Option<Indices> {
        if self.remaining == 0 {
            return None;
        }
        let out = self.pt;
        self.remaining -= 1;
        self.pt.x += 1;
        if self.pt.x == self.past_corner.x {
            self.pt.x = self.origin.x;
            self.pt.y += 1;
        }
        Some(out)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for ColMajorPoints {}
impl FusedIterator for ColMajorPoints {}

impl Iterator for RowMajorPoints {
    type Item = Indices;

    fn next(&mut self) -> Option<Indices> {
        if self.remaining == 0 {
            return None;
        }
        let out = self.pt;
        self.remaining -= 1;
        self.pt.y += 1;
        if self.pt.y == self.past_corner.y {
            self.pt.y = self.origin.y;
            self.pt.x += 1;
        }
        Some(out)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for RowMajorPoints {}
impl FusedIterator for RowMajorPoints {}
