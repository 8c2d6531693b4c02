//! The `Graph` trait: a grid seen as vertices and legal steps.

use ridge_core::Point;
use smallvec::SmallVec;
use std::fmt;
use std::hash::Hash;

/// Read-only graph over the cells of a grid.
///
/// Vertices are coordinates; edges are the legal steps between adjacent
/// cells. No edge list exists: [`neighbours`](Self::neighbours) derives
/// each vertex's out-edges on demand.
///
/// # Contract
///
/// - [`vertices`](Self::vertices) yields every vertex exactly once, in a
///   fixed order, and can be called any number of times.
/// - [`neighbours`](Self::neighbours) yields, in a fixed order, only
///   vertices of this graph. Each call starts a fresh sequence.
/// - [`vertex_index`](Self::vertex_index) is a bijection from vertices onto
///   `0..vertex_count()`, inverted by [`vertex_at`](Self::vertex_at). It
///   returns `None` for coordinates outside the graph.
///
/// The lazy sequences are associated types, so the trait is used through
/// generics rather than `dyn Graph`.
pub trait Graph {
    /// Vertex identity: a coordinate value.
    type Vertex: Copy + Eq + Hash + fmt::Debug + Into<Point>;

    /// Iterator returned by [`vertices`](Self::vertices).
    type Vertices<'a>: Iterator<Item = Self::Vertex>
    where
        Self: 'a;

    /// Iterator returned by [`neighbours`](Self::neighbours).
    type Neighbours<'a>: Iterator<Item = Self::Vertex>
    where
        Self: 'a;

    /// Total number of vertices.
    fn vertex_count(&self) -> usize;

    /// Every vertex, in canonical order.
    fn vertices(&self) -> Self::Vertices<'_>;

    /// Out-neighbours of `v`: adjacent, in bounds, and legal to step to.
    ///
    /// A coordinate outside the graph has no neighbours.
    fn neighbours(&self, v: Self::Vertex) -> Self::Neighbours<'_>;

    /// Dense index of `v` in `0..vertex_count()`.
    fn vertex_index(&self, v: Self::Vertex) -> Option<usize>;

    /// The vertex with dense index `index`.
    fn vertex_at(&self, index: usize) -> Option<Self::Vertex>;

    /// Number of out-neighbours of `v`.
    fn out_degree(&self, v: Self::Vertex) -> usize {
        self.neighbours(v).count()
    }

    /// Out-neighbours of `v` collected without heap allocation for
    /// degrees up to six.
    fn neighbour_vec(&self, v: Self::Vertex) -> SmallVec<[Self::Vertex; 6]> {
        self.neighbours(v).collect()
    }
}
