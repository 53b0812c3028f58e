//! The shared grid contract and the concrete storage strategies.
//!
//! Every storage strategy (heap-owned, inline-fixed, externally-mapped,
//! lazily-tiled) and every [`View`] satisfies the single [`Grid`] trait. The
//! trait is consumed through generics only, so every call site monomorphizes;
//! there is no dynamic dispatch.
use std::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

use crate::bounds::iter::{col_major_points, row_major_points, ColMajorPoints, RowMajorPoints};
use crate::bounds::{Bounds, GridBounds};
use crate::coord::{Extents, Indices};
use crate::error::{Error, Result};

pub mod fixed;
pub mod mapped;
pub mod owned;
pub mod tiled;
pub mod view;

pub use fixed::FixedGrid;
pub use mapped::{FixedMappedGrid, MappedGrid};
pub use owned::OwnedGrid;
pub use tiled::TiledGrid;
pub use view::View;

/// Contract satisfied by every grid and view.
///
/// Implementors provide their origin/extents and the storage-frame accessors
/// [`access`](Grid::access)/[`access_mut`](Grid::access_mut); everything else
/// is derived. Access through [`cell`](Grid::cell) is expressed in the type's
/// *local* frame: the implementation adds the type's own origin before
/// delegating, which is what lets a chain of views compose by repeated origin
/// addition.
///
/// The plain access path is unchecked by contract: the caller must have
/// validated [`in_bounds`](Grid::in_bounds) first. Out-of-bounds access panics
/// in debug builds and is not meaningful in release builds. Use
/// [`get`](Grid::get)/[`get_mut`](Grid::get_mut) for checked access.
pub trait Grid {
    type Cell;

    /// Width/height of this grid's cell array.
    fn extents(&self) -> Extents;

    /// Storage-frame read accessor. Implementation detail; call
    /// [`cell`](Grid::cell) instead.
    fn access(&self, pt: Indices) -> &Self::Cell;

    /// Storage-frame write accessor. Implementation detail; call
    /// [`cell_mut`](Grid::cell_mut) instead.
    fn access_mut(&mut self, pt: Indices) -> &mut Self::Cell;

    /// Origin of this grid's local frame. Concrete storage starts at zero;
    /// views override this with their bounds' origin.
    fn origin(&self) -> Indices {
        Indices::ZERO
    }

    /// Reference to the cell at local position `pt`. Unchecked by contract.
    fn cell(&self, pt: Indices) -> &Self::Cell {
        self.access(pt + self.origin())
    }

    /// Mutable reference to the cell at local position `pt`. Unchecked by
    /// contract.
    fn cell_mut(&mut self, pt: Indices) -> &mut Self::Cell {
        self.access_mut(pt + self.origin())
    }

    /// Checked read access; `None` when `pt` is outside the local index space.
    fn get(&self, pt: Indices) -> Option<&Self::Cell> {
        self.in_bounds(pt).then(|| self.cell(pt))
    }

    /// Checked write access; `None` when `pt` is outside the local index space.
    fn get_mut(&mut self, pt: Indices) -> Option<&mut Self::Cell> {
        if self.in_bounds(pt) {
            Some(self.cell_mut(pt))
        } else {
            None
        }
    }

    /// Checked read access reporting the failing index as an error.
    fn try_cell(&self, pt: Indices) -> Result<&Self::Cell> {
        self.get(pt).ok_or(Error::OutOfBounds {
            index: pt,
            extents: self.extents(),
        })
    }

    /// Checked write access reporting the failing index as an error.
    fn try_cell_mut(&mut self, pt: Indices) -> Result<&mut Self::Cell> {
        let extents = self.extents();
        self.get_mut(pt).ok_or(Error::OutOfBounds { index: pt, extents })
    }

    /// Whether local position `pt` addresses a cell: `(0, 0) <= pt < extents`.
    fn in_bounds(&self, pt: Indices) -> bool {
        pt.all_ge(Indices::ZERO) && pt.all_lt(self.extents())
    }

    /// This grid's region as a dynamic [`Bounds`], in the parent frame.
    fn bounds(&self) -> Bounds {
        Bounds::new(self.origin(), self.extents())
    }

    fn is_empty(&self) -> bool {
        self.extents() == Extents::ZERO
    }

    /// Column-major iterator over the local index space `[0, extents)`.
    fn points(&self) -> ColMajorPoints {
        col_major_points(&Bounds::new(Indices::ZERO, self.extents()))
    }

    /// Row-major iterator over the local index space `[0, extents)`.
    fn row_points(&self) -> RowMajorPoints {
        row_major_points(&Bounds::new(Indices::ZERO, self.extents()))
    }

    /// Iterate cell references. The default order is column-major; storage
    /// strategies with a natural linear order may override this with it.
    fn iter(&self) -> impl Iterator<Item = &Self::Cell> {
        self.points().map(move |pt| self.cell(pt))
    }

    /// Visit every cell mutably along with its local position.
    fn for_each_cell_mut(&mut self, mut f: impl FnMut(Indices, &mut Self::Cell)) {
        for pt in self.points() {
            f(pt, self.cell_mut(pt));
        }
    }

    /// Set every cell to `value`.
    fn fill(&mut self, value: Self::Cell)
    where
        Self::Cell: Clone,
    {
        for pt in self.points() {
            *self.cell_mut(pt) = value.clone();
        }
    }

    /// Cell-wise copy from another grid of equal extents. Does not resize.
    fn assign_from<O>(&mut self, other: &O)
    where
        O: Grid<Cell = Self::Cell>,
        Self::Cell: Clone,
    {
        debug_assert_eq!(self.extents(), other.extents(), "assign_from extents");
        for pt in self.points() {
            *self.cell_mut(pt) = other.cell(pt).clone();
        }
    }

    /// Checked [`assign_from`](Grid::assign_from).
    fn try_assign_from<O>(&mut self, other: &O) -> Result<()>
    where
        O: Grid<Cell = Self::Cell>,
        Self::Cell: Clone,
    {
        check_extents(self, other)?;
        self.assign_from(other);
        Ok(())
    }

    /// Cell-wise `+=` from another grid of equal extents.
    fn add_from<O>(&mut self, other: &O)
    where
        O: Grid<Cell = Self::Cell>,
        Self::Cell: AddAssign + Clone,
    {
        debug_assert_eq!(self.extents(), other.extents(), "add_from extents");
        for pt in self.points() {
            *self.cell_mut(pt) += other.cell(pt).clone();
        }
    }

    /// Checked [`add_from`](Grid::add_from).
    fn try_add_from<O>(&mut self, other: &O) -> Result<()>
    where
        O: Grid<Cell = Self::Cell>,
        Self::Cell: AddAssign + Clone,
    {
        check_extents(self, other)?;
        self.add_from(other);
        Ok(())
    }

    /// Cell-wise `-=` from another grid of equal extents.
    fn sub_from<O>(&mut self, other: &O)
    where
        O: Grid<Cell = Self::Cell>,
        Self::Cell: SubAssign + Clone,
    {
        debug_assert_eq!(self.extents(), other.extents(), "sub_from extents");
        for pt in self.points() {
            *self.cell_mut(pt) -= other.cell(pt).clone();
        }
    }

    /// Checked [`sub_from`](Grid::sub_from).
    fn try_sub_from<O>(&mut self, other: &O) -> Result<()>
    where
        O: Grid<Cell = Self::Cell>,
        Self::Cell: SubAssign + Clone,
    {
        check_extents(self, other)?;
        self.sub_from(other);
        Ok(())
    }

    /// Scale every cell by `s`.
    fn scale<S>(&mut self, s: S)
    where
        Self::Cell: MulAssign<S>,
        S: Copy,
    {
        for pt in self.points() {
            *self.cell_mut(pt) *= s;
        }
    }

    /// Divide every cell by `s`.
    fn scale_div<S>(&mut self, s: S)
    where
        Self::Cell: DivAssign<S>,
        S: Copy,
    {
        for pt in self.points() {
            *self.cell_mut(pt) /= s;
        }
    }

    /// Cell-wise equality with any other grid; extents are compared first.
    fn eq_grid<O>(&self, other: &O) -> bool
    where
        O: Grid<Cell = Self::Cell>,
        Self::Cell: PartialEq,
    {
        self.extents() == other.extents()
            && self.points().all(|pt| self.cell(pt) == other.cell(pt))
    }

    /// A mutable view over the sub-region described by `bounds`, expressed in
    /// this grid's local frame.
    fn view<B: GridBounds>(&mut self, bounds: B) -> View<'_, Self, B>
    where
        Self: Sized,
    {
        View::new(self, bounds)
    }

    /// Checked [`view`](Grid::view): the bounds must lie inside this grid's
    /// local index space.
    fn try_view<B: GridBounds>(&mut self, bounds: B) -> Result<View<'_, Self, B>>
    where
        Self: Sized,
    {
        let local = Bounds::new(Indices::ZERO, self.extents());
        if !local.contains(&bounds) {
            return Err(Error::ViewOutOfBounds {
                bounds: bounds.to_bounds(),
                extents: self.extents(),
            });
        }
        Ok(View::new(self, bounds))
    }

    /// A view spanning the whole grid.
    fn view_all(&mut self) -> View<'_, Self, Bounds>
    where
        Self: Sized,
    {
        let bounds = Bounds::new(Indices::ZERO, self.extents());
        View::new(self, bounds)
    }

    /// Materialize this grid (or view, or tiled grid) into an owned snapshot.
    fn to_owned_grid(&self) -> OwnedGrid<Self::Cell>
    where
        Self: Sized,
        Self::Cell: Clone + Default,
    {
        let mut out = OwnedGrid::with_extents(self.extents());
        out.assign_from(self);
        out
    }
}

fn check_extents<A, B>(a: &A, b: &B) -> Result<()>
where
    A: Grid + ?Sized,
    B: Grid + ?Sized,
{
    if a.extents() == b.extents() {
        Ok(())
    } else {
        Err(Error::ExtentsMismatch {
            expected: a.extents(),
            actual: b.extents(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_and_iterate() {
        let mut grid = OwnedGrid::filled(Extents::new(4, 3), 0);
        grid.fill(7);
        assert!(grid.iter().all(|&c| c == 7));
        assert_eq!(grid.iter().count(), 12);
    }

    #[test]
    fn checked_access() {
        let mut grid = OwnedGrid::filled(Extents::new(2, 2), 1);
        assert_eq!(grid.get(Indices::new(1, 1)), Some(&1));
        assert_eq!(grid.get(Indices::new(2, 0)), None);
        assert_eq!(grid.get(Indices::new(-1, 0)), None);
        *grid.get_mut(Indices::new(0, 1)).unwrap() = 9;
        assert_eq!(grid.cell(Indices::new(0, 1)), &9);
    }

    #[test]
    fn try_cell_reports_the_failing_index() {
        let mut grid = OwnedGrid::filled(Extents::new(2, 2), 1);
        assert_eq!(grid.try_cell(Indices::new(1, 0)), Ok(&1));
        let err = grid.try_cell(Indices::new(3, 0)).unwrap_err();
        assert_eq!(
            err,
            Error::OutOfBounds {
                index: Indices::new(3, 0),
                extents: Extents::new(2, 2),
            }
        );
        *grid.try_cell_mut(Indices::new(0, 0)).unwrap() = 4;
        assert_eq!(grid.cell(Indices::new(0, 0)), &4);
    }

    #[test]
    fn assignment_between_strategies() {
        let fixed = FixedGrid::<i32, 3, 2>::filled(5);
        let mut owned = OwnedGrid::filled(Extents::new(3, 2), 0);
        owned.assign_from(&fixed);
        assert!(owned.eq_grid(&fixed));
    }

    #[test]
    fn try_assign_reports_extents_mismatch() {
        let source = OwnedGrid::filled(Extents::new(2, 2), 1);
        let mut target = OwnedGrid::filled(Extents::new(3, 3), 0);
        let err = target.try_assign_from(&source).unwrap_err();
        assert_eq!(
            err,
            Error::ExtentsMismatch {
                expected: Extents::new(3, 3),
                actual: Extents::new(2, 2),
            }
        );
    }

    #[test]
    fn cell_wise_arithmetic() {
        let mut grid = OwnedGrid::filled(Extents::new(2, 2), 10);
        let other = OwnedGrid::filled(Extents::new(2, 2), 4);
        grid.add_from(&other);
        assert!(grid.iter().all(|&c| c == 14));
        grid.sub_from(&other);
        assert!(grid.iter().all(|&c| c == 10));
        grid.scale(3);
        assert!(grid.iter().all(|&c| c == 30));
        grid.scale_div(2);
        assert!(grid.iter().all(|&c| c == 15));
    }

    #[test]
    fn equality_requires_matching_extents() {
        let a = OwnedGrid::filled(Extents::new(4, 2), 1);
        let b = OwnedGrid::filled(Extents::new(2, 4), 1);
        assert!(!a.eq_grid(&b));
        let c = OwnedGrid::filled(Extents::new(4, 2), 1);
        assert!(a.eq_grid(&c));
    }

    #[test]
    fn equality_compares_every_cell() {
        let a = OwnedGrid::filled(Extents::new(3, 3), 1);
        let mut b = OwnedGrid::filled(Extents::new(3, 3), 1);
        assert!(a.eq_grid(&b));
        *b.cell_mut(Indices::new(2, 2)) = 0;
        assert!(!a.eq_grid(&b));
    }

    #[test]
    fn try_view_rejects_oversized_bounds() {
        let mut grid = OwnedGrid::filled(Extents::new(4, 4), 0);
        assert!(grid.try_view(Bounds::new(Indices::new(1, 1), Extents::new(3, 3))).is_ok());
        let err = grid
            .try_view(Bounds::new(Indices::new(2, 2), Extents::new(3, 3)))
            .unwrap_err();
        assert!(matches!(err, Error::ViewOutOfBounds { .. }));
    }

    #[test]
    fn to_owned_grid_snapshots_a_view() {
        let mut grid = OwnedGrid::filled(Extents::new(4, 4), 1);
        grid.view(Bounds::new(Indices::new(1, 1), Extents::new(2, 2))).fill(8);
        let snapshot = grid
            .view(Bounds::new(Indices::new(1, 1), Extents::new(2, 2)))
            .to_owned_grid();
        assert_eq!(snapshot.extents(), Extents::new(2, 2));
        assert!(snapshot.iter().all(|&c| c == 8));
    }
}
