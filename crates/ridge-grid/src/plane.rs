//! 4-connected graph view over a 2D grid.

use crate::graph::Graph;
use crate::grid2::{Coords2, Grid2};
use crate::rule::AdjacencyRule;
use ridge_core::Coord2;

/// `(d_row, d_col)` step offsets in neighbour order: up, right, down, left.
pub const PLANE_OFFSETS: [(i32, i32); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

/// A [`Grid2`] seen as a graph with 4-connected neighbourhood.
///
/// Vertices are the grid's coordinates in row-major order; the vertex
/// index is the row-major buffer index. A step to an orthogonally adjacent
/// cell is an edge iff it stays in bounds and `rule` allows it. Edges at
/// the border are simply absent.
///
/// # Examples
///
/// ```
/// use ridge_core::Coord2;
/// use ridge_grid::{ClimbRule, Graph, Grid2, PlaneView};
///
/// let grid = Grid2::parse("abc\nbcd\n").unwrap();
/// let view = PlaneView::new(&grid, ClimbRule::ascending());
/// let next: Vec<_> = view.neighbours(Coord2::new(0, 0)).collect();
/// assert_eq!(next, vec![Coord2::new(0, 1), Coord2::new(1, 0)]);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct PlaneView<'g, T, R> {
    grid: &'g Grid2<T>,
    rule: R,
}

impl<'g, T, R: AdjacencyRule<T>> PlaneView<'g, T, R> {
    /// Wrap `grid` with `rule`.
    pub fn new(grid: &'g Grid2<T>, rule: R) -> Self {
        Self { grid, rule }
    }

    /// The underlying grid.
    pub fn grid(&self) -> &'g Grid2<T> {
        self.grid
    }

    /// The adjacency rule.
    pub fn rule(&self) -> &R {
        &self.rule
    }
}

impl<'g, T, R: AdjacencyRule<T>> Graph for PlaneView<'g, T, R> {
    type Vertex = Coord2;
    type Vertices<'a>
        = Coords2
    where
        Self: 'a;
    type Neighbours<'a>
        = PlaneSteps<'a, T, R>
    where
        Self: 'a;

    fn vertex_count(&self) -> usize {
        self.grid.cell_count()
    }

    fn vertices(&self) -> Coords2 {
        self.grid.coords()
    }

    fn neighbours(&self, v: Coord2) -> PlaneSteps<'_, T, R> {
        PlaneSteps {
            grid: self.grid,
            rule: &self.rule,
            origin: v,
            label: self.grid.get(v),
            next: 0,
        }
    }

    fn vertex_index(&self, v: Coord2) -> Option<usize> {
        self.grid.index_of(v)
    }

    fn vertex_at(&self, index: usize) -> Option<Coord2> {
        self.grid.coord_of(index)
    }
}

/// Lazy neighbour sequence of one vertex of a [`PlaneView`].
///
/// Walks [`PLANE_OFFSETS`] in order and yields each in-bounds, legal step.
#[derive(Debug)]
pub struct PlaneSteps<'a, T, R> {
    grid: &'a Grid2<T>,
    rule: &'a R,
    origin: Coord2,
    label: Option<&'a T>,
    next: usize,
}

impl<T, R: AdjacencyRule<T>> Iterator for PlaneSteps<'_, T, R> {
    type Item = Coord2;

    fn next(&mut self) -> Option<Coord2> {
        let src = self.label?;
        while let Some(&(dr, dc)) = PLANE_OFFSETS.get(self.next) {
            self.next += 1;
            let Some(to) = self.origin.offset(dr, dc) else {
                continue;
            };
            if let Some(dst) = self.grid.get(to) {
                if self.rule.legal(src, dst) {
                    return Some(to);
                }
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = match self.label {
            Some(_) => PLANE_OFFSETS.len().saturating_sub(self.next),
            None => 0,
        };
        (0, Some(left))
    }
}
