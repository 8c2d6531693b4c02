//! 6-connected graph view over a 3D grid.

use crate::graph::Graph;
use crate::grid3::{Coords3, Grid3};
use crate::rule::AdjacencyRule;
use ridge_core::Coord3;

/// `(dx, dy, dz)` step offsets in neighbour order: -x, +x, -y, +y, -z, +z.
pub const VOLUME_OFFSETS: [(i32, i32, i32); 6] = [
    (-1, 0, 0),
    (1, 0, 0),
    (0, -1, 0),
    (0, 1, 0),
    (0, 0, -1),
    (0, 0, 1),
];

/// A [`Grid3`] seen as a graph with 6-connected (face-sharing)
/// neighbourhood.
///
/// Vertices are the grid's coordinates in x-major order and the vertex
/// index is the grid's linear index. Out-of-bounds steps are absent.
#[derive(Clone, Copy, Debug)]
pub struct VolumeView<'g, T, R> {
    grid: &'g Grid3<T>,
    rule: R,
}

impl<'g, T, R: AdjacencyRule<T>> VolumeView<'g, T, R> {
    /// Wrap `grid` with `rule`.
    pub fn new(grid: &'g Grid3<T>, rule: R) -> Self {
        Self { grid, rule }
    }

    /// The underlying grid.
    pub fn grid(&self) -> &'g Grid3<T> {
        self.grid
    }
}

impl<'g, T, R: AdjacencyRule<T>> Graph for VolumeView<'g, T, R> {
    type Vertex = Coord3;
    type Vertices<'a>
        = Coords3
    where
        Self: 'a;
    type Neighbours<'a>
        = VolumeSteps<'a, T, R>
    where
        Self: 'a;

    fn vertex_count(&self) -> usize {
        self.grid.cell_count()
    }

    fn vertices(&self) -> Coords3 {
        self.grid.coords()
    }

    fn neighbours(&self, v: Coord3) -> VolumeSteps<'_, T, R> {
        VolumeSteps {
            grid: self.grid,
            rule: &self.rule,
            origin: v,
            label: self.grid.get(v),
            next: 0,
        }
    }

    fn vertex_index(&self, v: Coord3) -> Option<usize> {
        self.grid.index_of(v)
    }

    fn vertex_at(&self, index: usize) -> Option<Coord3> {
        self.grid.coord_of(index)
    }
}

/// Lazy neighbour sequence of one vertex of a [`VolumeView`].
#[derive(Debug)]
pub struct VolumeSteps<'a, T, R> {
    grid: &'a Grid3<T>,
    rule: &'a R,
    origin: Coord3,
    label: Option<&'a T>,
    next: usize,
}

impl<T, R: AdjacencyRule<T>> Iterator for VolumeSteps<'_, T, R> {
    type Item = Coord3;

    fn next(&mut self) -> Option<Coord3> {
        let src = self.label?;
        while let Some(&(dx, dy, dz)) = VOLUME_OFFSETS.get(self.next) {
            self.next += 1;
            let Some(to) = self.origin.offset(dx, dy, dz) else {
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
            Some(_) => VOLUME_OFFSETS.len().saturating_sub(self.next),
            None => 0,
        };
        (0, Some(left))
    }
}
