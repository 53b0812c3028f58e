//! Lazily-tiled grid storage.
//!
//! [`TiledGrid`] partitions a compile-time `(W, H)` extent into `(TW, TH)`
//! tiles. A tile allocates nothing until the first write lands inside it:
//! reads of an unmaterialized tile return the grid's shared default value, and
//! the first write allocates a tile-sized owned sub-grid filled with that
//! default. Once materialized, a tile lives for the rest of the grid's
//! lifetime; there is no eviction.
use tracing::trace;

use crate::coord::{Extents, Indices};
use crate::grid::owned::OwnedGrid;
use crate::grid::Grid;

/// One lazily-materialized sub-block of a [`TiledGrid`].
#[derive(Clone, Debug)]
pub struct Tile<C> {
    data: Option<OwnedGrid<C>>,
    origin: Indices,
}

impl<C> Default for Tile<C> {
    fn default() -> Self {
        Self {
            data: None,
            origin: Indices::ZERO,
        }
    }
}

impl<C> Tile<C> {
    /// Whether this tile has been materialized by a write.
    pub fn is_active(&self) -> bool {
        self.data.is_some()
    }

    /// Top-left corner of this tile within the parent grid. Meaningful once
    /// the tile is active.
    pub fn origin(&self) -> Indices {
        self.origin
    }

    /// The tile's storage, if materialized.
    pub fn data(&self) -> Option<&OwnedGrid<C>> {
        self.data.as_ref()
    }
}

/// Grid of `(W, H)` cells stored as lazily-allocated `(TW, TH)` tiles.
#[derive(Clone, Debug)]
pub struct TiledGrid<C, const W: usize, const H: usize, const TW: usize, const TH: usize> {
    default_value: C,
    tiles: Vec<Tile<C>>,
}

impl<C, const W: usize, const H: usize, const TW: usize, const TH: usize>
    TiledGrid<C, W, H, TW, TH>
{
    pub const TILE_COLS: usize = (W + TW - 1) / TW;
    pub const TILE_ROWS: usize = (H + TH - 1) / TH;
    pub const TILE_COUNT: usize = Self::TILE_COLS * Self::TILE_ROWS;
    pub const TILE_EXTENTS: Extents = Extents::new(TW as i32, TH as i32);

    const VALID: () = assert!(
        TW > 0 && TH > 0 && TW <= W && TH <= H,
        "tile extents must be non-zero and no larger than the grid extents"
    );

    /// A grid whose every cell reads as `default_value` until written.
    pub fn new(default_value: C) -> Self {
        let () = Self::VALID;
        let tiles = (0..Self::TILE_COUNT).map(|_| Tile::default()).collect();
        Self {
            default_value,
            tiles,
        }
    }

    /// The value returned for cells in unmaterialized tiles.
    pub fn default_value(&self) -> &C {
        &self.default_value
    }

    /// Number of materialized tiles.
    pub fn active(&self) -> usize {
        self.tiles.iter().filter(|t| t.is_active()).count()
    }

    /// Per-tile materialization map, extents `(TILE_COLS, TILE_ROWS)`.
    pub fn mask(&self) -> OwnedGrid<bool> {
        let mut mask = OwnedGrid::filled(
            Extents::new(Self::TILE_COLS as i32, Self::TILE_ROWS as i32),
            false,
        );
        for (slot, tile) in mask.data_mut().iter_mut().zip(&self.tiles) {
            *slot = tile.is_active();
        }
        mask
    }

    /// The tile at tile-grid position `pt` (not cell position).
    pub fn tile(&self, pt: Indices) -> &Tile<C> {
        &self.tiles[pt.y as usize * Self::TILE_COLS + pt.x as usize]
    }

    pub const fn tile_rows() -> usize {
        Self::TILE_ROWS
    }

    pub const fn tile_cols() -> usize {
        Self::TILE_COLS
    }

    fn tile_index(pt: Indices) -> usize {
        (pt.y as usize / TH) * Self::TILE_COLS + pt.x as usize / TW
    }

    fn tile_origin(pt: Indices) -> Indices {
        Indices::new(
            (pt.x / TW as i32) * TW as i32,
            (pt.y / TH as i32) * TH as i32,
        )
    }
}

impl<C: Clone, const W: usize, const H: usize, const TW: usize, const TH: usize> Grid
    for TiledGrid<C, W, H, TW, TH>
{
    type Cell = C;

    fn extents(&self) -> Extents {
        Extents::new(W as i32, H as i32)
    }

    fn access(&self, pt: Indices) -> &C {
        debug_assert!(self.in_bounds(pt), "cell index {pt} outside extents {}", self.extents());
        let tile = &self.tiles[Self::tile_index(pt)];
        match tile.data() {
            Some(data) => data.cell(pt - tile.origin),
            None => &self.default_value,
        }
    }

    fn access_mut(&mut self, pt: Indices) -> &mut C {
        debug_assert!(self.in_bounds(pt), "cell index {pt} outside extents {}", self.extents());
        let origin = Self::tile_origin(pt);
        let tile = &mut self.tiles[Self::tile_index(pt)];
        if tile.data.is_none() {
            trace!(x = origin.x, y = origin.y, "materializing tile");
            tile.origin = origin;
        }
        let data = tile
            .data
            .get_or_insert_with(|| OwnedGrid::filled(Self::TILE_EXTENTS, self.default_value.clone()));
        data.cell_mut(pt - origin)
    }
}

impl<C: Clone + PartialEq, const W: usize, const H: usize, const TW: usize, const TH: usize>
    PartialEq for TiledGrid<C, W, H, TW, TH>
{
    fn eq(&self, other: &Self) -> bool {
        self.eq_grid(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type SmallTiled = TiledGrid<i32, 20, 20, 10, 10>;

    #[test]
    fn reads_return_default_without_materializing() {
        let grid = SmallTiled::new(9);
        for pt in grid.points() {
            assert_eq!(grid.cell(pt), &9);
        }
        assert_eq!(grid.active(), 0);
        assert!(grid.mask().iter().all(|&active| !active));
    }

    #[test]
    fn first_write_materializes_exactly_one_tile() {
        let mut grid = SmallTiled::new(0);
        *grid.cell_mut(Indices::new(2, 3)) = 5;
        assert_eq!(grid.active(), 1);
        assert!(grid.tile(Indices::new(0, 0)).is_active());
        assert_eq!(grid.tile(Indices::new(0, 0)).origin(), Indices::ZERO);

        // Another write in the same tile allocates nothing new.
        *grid.cell_mut(Indices::new(4, 4)) = 6;
        assert_eq!(grid.active(), 1);
    }

    #[test]
    fn materialized_tile_starts_from_the_default() {
        let mut grid = SmallTiled::new(7);
        *grid.cell_mut(Indices::new(1, 1)) = 5;
        assert_eq!(grid.cell(Indices::new(1, 1)), &5);
        // Untouched neighbors in the same tile keep the default.
        assert_eq!(grid.cell(Indices::new(0, 0)), &7);
        assert_eq!(grid.cell(Indices::new(9, 9)), &7);
    }

    #[test]
    fn writes_land_in_the_owning_tile() {
        let mut grid = SmallTiled::new(0);
        *grid.cell_mut(Indices::new(15, 4)) = 1;
        assert_eq!(grid.active(), 1);
        let tile = grid.tile(Indices::new(1, 0));
        assert!(tile.is_active());
        assert_eq!(tile.origin(), Indices::new(10, 0));

        *grid.cell_mut(Indices::new(4, 15)) = 2;
        *grid.cell_mut(Indices::new(15, 15)) = 3;
        assert_eq!(grid.active(), 3);

        let mask = grid.mask();
        assert_eq!(mask.extents(), Extents::new(2, 2));
        assert_eq!(mask.cell(Indices::new(0, 0)), &false);
        assert_eq!(mask.cell(Indices::new(1, 0)), &true);
        assert_eq!(mask.cell(Indices::new(0, 1)), &true);
        assert_eq!(mask.cell(Indices::new(1, 1)), &true);
    }

    #[test]
    fn behaves_like_any_other_grid() {
        let mut grid = TiledGrid::<i32, 8, 8, 4, 4>::new(0);
        grid.fill(2);
        assert_eq!(grid.active(), 4);
        assert!(grid.iter().all(|&c| c == 2));

        let flat = grid.to_owned_grid();
        assert!(flat.eq_grid(&grid));
    }

    #[test]
    fn uneven_tile_division_rounds_up() {
        assert_eq!(TiledGrid::<i32, 10, 10, 4, 4>::TILE_COLS, 3);
        assert_eq!(TiledGrid::<i32, 10, 10, 4, 4>::TILE_ROWS, 3);
        let mut grid = TiledGrid::<i32, 10, 10, 4, 4>::new(0);
        *grid.cell_mut(Indices::new(9, 9)) = 1;
        assert_eq!(grid.active(), 1);
        assert_eq!(grid.tile(Indices::new(2, 2)).origin(), Indices::new(8, 8));
    }
}
