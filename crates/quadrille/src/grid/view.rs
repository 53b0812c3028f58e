//! Non-owning, bounds-restricted aliases over a parent grid.
//!
//! A [`View`] borrows its parent mutably for its own lifetime, so the
//! dangling-view hazard of a pointer-based design becomes a compile error
//! here. Every access translates the view-local position through the view's
//! bounds into the parent's local frame, which makes chains of views compose
//! by repeated origin addition.
use crate::bounds::GridBounds;
use crate::coord::{Extents, Indices};
use crate::grid::Grid;

/// Bounds-restricted alias over a parent grid; satisfies [`Grid`] itself.
#[derive(Debug)]
pub struct View<'p, P, B> {
    parent: &'p mut P,
    bounds: B,
}

impl<'p, P: Grid, B: GridBounds> View<'p, P, B> {
    /// A view of `parent` restricted to `bounds` (parent-local frame).
    pub fn new(parent: &'p mut P, bounds: B) -> Self {
        Self { parent, bounds }
    }

    /// The view's bounds object.
    pub fn view_bounds(&self) -> &B {
        &self.bounds
    }
}

impl<'p, P: Grid, B: GridBounds + Default> View<'p, P, B> {
    /// A view whose bounds type carries all of its state at compile time; no
    /// runtime bounds argument is needed.
    pub fn with_static(parent: &'p mut P) -> Self {
        Self::new(parent, B::default())
    }
}

impl<P: Grid, B: GridBounds> Grid for View<'_, P, B> {
    type Cell = P::Cell;

    fn origin(&self) -> Indices {
        self.bounds.origin()
    }

    fn extents(&self) -> Extents {
        self.bounds.extents()
    }

    fn access(&self, pt: Indices) -> &P::Cell {
        self.parent.cell(pt)
    }

    fn access_mut(&mut self, pt: Indices) -> &mut P::Cell {
        self.parent.cell_mut(pt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bounds::{Bounds, FixedExtentsBounds, FixedOriginBounds, StaticBounds};
    use crate::grid::owned::OwnedGrid;

    #[test]
    fn writes_through_a_view_alias_the_parent() {
        let mut grid = OwnedGrid::filled(Extents::new(20, 10), 1);
        {
            let mut view = grid.view(Bounds::new(Indices::new(2, 2), Extents::new(5, 5)));
            *view.cell_mut(Indices::new(0, 0)) = 5;
        }
        assert_eq!(grid.cell(Indices::new(2, 2)), &5);

        *grid.cell_mut(Indices::new(3, 3)) = 8;
        let view = grid.view(Bounds::new(Indices::new(2, 2), Extents::new(5, 5)));
        assert_eq!(view.cell(Indices::new(1, 1)), &8);
    }

    #[test]
    fn fill_through_a_view_is_confined_to_its_bounds() {
        let mut grid = OwnedGrid::filled(Extents::new(20, 10), 1);
        grid.view(Bounds::new(Indices::new(2, 2), Extents::new(5, 5))).fill(5);

        let mut fives = 0;
        for pt in grid.points() {
            let expected = if pt.all_ge(Indices::new(2, 2)) && pt.all_lt(Indices::new(7, 7)) {
                5
            } else {
                1
            };
            assert_eq!(grid.cell(pt), &expected);
            if expected == 5 {
                fives += 1;
            }
        }
        assert_eq!(fives, 25);
    }

    #[test]
    fn every_bounds_variant_drives_a_view() {
        let mut grid = OwnedGrid::filled(Extents::new(20, 10), 1);

        grid.view(Bounds::new(Indices::new(2, 2), Extents::new(3, 3))).fill(5);
        grid.view(FixedOriginBounds::<5, 5>::new(Extents::new(3, 3))).fill(6);
        grid.view(FixedExtentsBounds::<3, 3>::new(Indices::new(8, 2))).fill(7);
        grid.view(StaticBounds::<11, 2, 3, 3>).fill(8);

        assert_eq!(grid.cell(Indices::new(2, 2)), &5);
        assert_eq!(grid.cell(Indices::new(5, 5)), &6);
        assert_eq!(grid.cell(Indices::new(8, 2)), &7);
        assert_eq!(grid.cell(Indices::new(11, 2)), &8);
        assert_eq!(grid.cell(Indices::new(0, 0)), &1);
    }

    #[test]
    fn static_bounds_views_need_no_runtime_argument() {
        let mut grid = OwnedGrid::filled(Extents::new(10, 10), 0);
        let mut view = View::<_, StaticBounds<4, 4, 2, 2>>::with_static(&mut grid);
        view.fill(3);
        assert_eq!(grid.cell(Indices::new(4, 4)), &3);
        assert_eq!(grid.cell(Indices::new(5, 5)), &3);
        assert_eq!(grid.cell(Indices::new(6, 6)), &0);
    }

    #[test]
    fn nested_views_compose_origins() {
        let mut grid = OwnedGrid::filled(Extents::new(10, 10), 0);
        {
            let mut outer = grid.view(Bounds::new(Indices::new(2, 2), Extents::new(6, 6)));
            let mut inner = outer.view(Bounds::new(Indices::new(1, 1), Extents::new(2, 2)));
            inner.fill(9);
        }
        assert_eq!(grid.cell(Indices::new(3, 3)), &9);
        assert_eq!(grid.cell(Indices::new(4, 4)), &9);
        assert_eq!(grid.cell(Indices::new(2, 2)), &0);
        assert_eq!(grid.cell(Indices::new(5, 5)), &0);
    }

    #[test]
    fn view_iteration_covers_its_extents() {
        let mut grid = OwnedGrid::filled(Extents::new(20, 10), 1);
        let view = grid.view(Bounds::new(Indices::new(2, 2), Extents::new(5, 5)));
        assert_eq!(view.iter().count(), 25);
        assert!(view.iter().all(|&c| c == 1));
    }

    #[test]
    fn view_assignment_copies_into_parent_storage() {
        let mut source = OwnedGrid::filled(Extents::new(2, 2), 4);
        *source.cell_mut(Indices::new(1, 0)) = 6;

        let mut grid = OwnedGrid::filled(Extents::new(5, 5), 0);
        grid.view(Bounds::new(Indices::new(1, 1), Extents::new(2, 2))).assign_from(&source);

        assert_eq!(grid.cell(Indices::new(1, 1)), &4);
        assert_eq!(grid.cell(Indices::new(2, 1)), &6);
        assert_eq!(grid.cell(Indices::new(0, 0)), &0);
    }

    #[test]
    fn view_equality_against_a_plain_grid() {
        let mut grid = OwnedGrid::filled(Extents::new(6, 6), 2);
        let view = grid.view(Bounds::new(Indices::new(1, 1), Extents::new(3, 3)));
        let other = OwnedGrid::filled(Extents::new(3, 3), 2);
        assert!(view.eq_grid(&other));
    }
}
