#![forbid(unsafe_code)]
//! quadrille: Generic 2D grid storage with composable bounds, views, and priority flood fill.
//!
//! Modules:
//! - coord: integer coordinate pairs with component-wise arithmetic and ordering predicates
//! - bounds: origin/extent rectangles in four static/dynamic variants, plus index-space iterators
//! - grid: the shared grid contract and the storage strategies (owned, fixed, mapped, tiled, view)
//! - fill: priority-ordered flood-fill propagation over any grid
//!
//! Every storage strategy and every view satisfies the same [`Grid`](crate::grid::Grid)
//! contract through monomorphization; there is no dynamic dispatch anywhere in the crate.
pub mod bounds;
pub mod coord;
pub mod error;
pub mod fill;
pub mod grid;

/// Convenient re-exports for common types. Import with `use quadrille::prelude::*;`.
pub mod prelude {
    pub use crate::bounds::iter::{col_major_points, row_major_points, ColMajorPoints, RowMajorPoints};
    pub use crate::bounds::{
        bounds_eq, intersection, Bounds, FixedExtentsBounds, FixedOriginBounds, GridBounds,
        StaticBounds,
    };
    pub use crate::coord::{Coordinates, Extents, Indices};
    pub use crate::error::{Error, Result};
    pub use crate::fill::{
        flood_fill, flood_fill_by, flood_fill_seeded, flood_fill_seeded_by, SparseCell,
    };
    pub use crate::grid::fixed::FixedGrid;
    pub use crate::grid::mapped::{FixedMappedGrid, MappedGrid};
    pub use crate::grid::owned::OwnedGrid;
    pub use crate::grid::tiled::{Tile, TiledGrid};
    pub use crate::grid::view::View;
    pub use crate::grid::Grid;
}
