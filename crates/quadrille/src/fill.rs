//! Priority-ordered flood fill over any [`Grid`].
//!
//! The fill maintains a frontier of [`SparseCell`]s in a max-ordered priority
//! queue. Each iteration pops the largest frontier cell, derives the next
//! wavefront value from it, then expands into every in-bounds cell of the 3x3
//! neighborhood (center included) that the validator accepts, writing the new
//! value and pushing the cell back onto the frontier.
//!
//! This is a greedy wavefront, not a shortest-path search: a cell can be
//! written more than once if the validator keeps accepting it, and a validator
//! that never rejects makes the fill non-terminating. Fill runs in the grid's
//! local frame, so filling through a [`View`](crate::grid::View) stays
//! confined to the view.
use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tracing::debug;

use crate::bounds::iter::col_major_points;
use crate::bounds::StaticBounds;
use crate::coord::Indices;
use crate::grid::Grid;

/// A cell value paired with its grid position; the unit of flood-fill
/// frontier bookkeeping.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SparseCell<C> {
    pub value: C,
    pub position: Indices,
}

impl<C> SparseCell<C> {
    pub const fn new(value: C, position: Indices) -> Self {
        Self { value, position }
    }
}

/// Frontier entry ordered by the fill's comparator; position never
/// participates in the ordering.
struct FrontierEntry<'c, C, F> {
    cell: SparseCell<C>,
    compare: &'c F,
}

impl<C, F> PartialEq for FrontierEntry<'_, C, F>
where
    F: Fn(&SparseCell<C>, &SparseCell<C>) -> Ordering,
{
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<C, F> Eq for FrontierEntry<'_, C, F> where F: Fn(&SparseCell<C>, &SparseCell<C>) -> Ordering {}

impl<C, F> PartialOrd for FrontierEntry<'_, C, F>
where
    F: Fn(&SparseCell<C>, &SparseCell<C>) -> Ordering,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<C, F> Ord for FrontierEntry<'_, C, F>
where
    F: Fn(&SparseCell<C>, &SparseCell<C>) -> Ordering,
{
    fn cmp(&self, other: &Self) -> Ordering {
        (self.compare)(&self.cell, &other.cell)
    }
}

/// Ascending by value; `BinaryHeap` is a max-heap, so the largest value pops
/// first. Incomparable values (float NaN) compare as equal.
fn ascending_by_value<C: PartialOrd>(a: &SparseCell<C>, b: &SparseCell<C>) -> Ordering {
    a.value.partial_cmp(&b.value).unwrap_or(Ordering::Equal)
}

/// Flood fill from the seed cells yielded by `seeds`.
///
/// `update` derives the value written into each expansion from the popped
/// frontier cell; `validate` decides, per candidate cell, whether the
/// wavefront may expand into it. Largest-valued frontier cells expand first.
pub fn flood_fill_seeded<G, S, U, V>(grid: &mut G, seeds: S, update: U, validate: V)
where
    G: Grid,
    G::Cell: Clone + PartialOrd,
    S: IntoIterator<Item = SparseCell<G::Cell>>,
    U: Fn(&SparseCell<G::Cell>) -> G::Cell,
    V: Fn(&SparseCell<G::Cell>) -> bool,
{
    flood_fill_seeded_by(grid, seeds, update, validate, ascending_by_value);
}

/// [`flood_fill_seeded`] with an explicit frontier ordering.
pub fn flood_fill_seeded_by<G, S, U, V, F>(grid: &mut G, seeds: S, update: U, validate: V, compare: F)
where
    G: Grid,
    G::Cell: Clone,
    S: IntoIterator<Item = SparseCell<G::Cell>>,
    U: Fn(&SparseCell<G::Cell>) -> G::Cell,
    V: Fn(&SparseCell<G::Cell>) -> bool,
    F: Fn(&SparseCell<G::Cell>, &SparseCell<G::Cell>) -> Ordering,
{
    let compare = &compare;
    let mut frontier: BinaryHeap<FrontierEntry<'_, G::Cell, F>> = seeds
        .into_iter()
        .map(|cell| FrontierEntry { cell, compare })
        .collect();
    debug!(seeds = frontier.len(), "starting flood fill");

    let mut expansions = 0usize;
    while let Some(entry) = frontier.pop() {
        let next = update(&entry.cell);
        for offset in col_major_points(&StaticBounds::<{ -1 }, { -1 }, 3, 3>) {
            let position = entry.cell.position + offset;
            if !grid.in_bounds(position) {
                continue;
            }
            if !validate(&SparseCell::new(grid.cell(position).clone(), position)) {
                continue;
            }
            *grid.cell_mut(position) = next.clone();
            frontier.push(FrontierEntry {
                cell: SparseCell::new(next.clone(), position),
                compare,
            });
            expansions += 1;
        }
    }
    debug!(expansions, "flood fill finished");
}

/// Flood fill seeded by every cell the predicate accepts, harvested in a
/// column-major scan of the whole grid.
pub fn flood_fill<G, P, U, V>(grid: &mut G, seed: P, update: U, validate: V)
where
    G: Grid,
    G::Cell: Clone + PartialOrd,
    P: Fn(&G::Cell) -> bool,
    U: Fn(&SparseCell<G::Cell>) -> G::Cell,
    V: Fn(&SparseCell<G::Cell>) -> bool,
{
    flood_fill_by(grid, seed, update, validate, ascending_by_value);
}

/// [`flood_fill`] with an explicit frontier ordering.
pub fn flood_fill_by<G, P, U, V, F>(grid: &mut G, seed: P, update: U, validate: V, compare: F)
where
    G: Grid,
    G::Cell: Clone,
    P: Fn(&G::Cell) -> bool,
    U: Fn(&SparseCell<G::Cell>) -> G::Cell,
    V: Fn(&SparseCell<G::Cell>) -> bool,
    F: Fn(&SparseCell<G::Cell>, &SparseCell<G::Cell>) -> Ordering,
{
    let mut seeds = Vec::new();
    for pt in grid.points() {
        let cell = grid.cell(pt);
        if seed(cell) {
            seeds.push(SparseCell::new(cell.clone(), pt));
        }
    }
    flood_fill_seeded_by(grid, seeds, update, validate, compare);
}
