//! Breadth-first traversal and shortest-path queries.

use crate::color::Color;
use crate::distance::DistanceMap;
use crate::visitor::{BfsVisitor, NullVisitor};
use ridge_core::{GridError, SearchError};
use ridge_grid::Graph;
use smallvec::SmallVec;
use std::collections::VecDeque;
use std::fmt;
use tracing::{debug, trace};

/// Outcome of one breadth-first traversal.
///
/// Owns the distance and colour arrays of the run and borrows the graph
/// they index, so lookups take vertices rather than raw indices.
pub struct BfsResult<'g, G: Graph> {
    graph: &'g G,
    sources: SmallVec<[G::Vertex; 4]>,
    distances: DistanceMap,
    colors: Vec<Color>,
}

impl<'g, G: Graph> BfsResult<'g, G> {
    /// The graph that was searched.
    pub fn graph(&self) -> &'g G {
        self.graph
    }

    /// The distinct sources, in seeding order.
    pub fn sources(&self) -> &[G::Vertex] {
        &self.sources
    }

    /// Length of a shortest path from the nearest source to `v`, or
    /// `None` if `v` was not reached or is not a vertex.
    pub fn distance(&self, v: G::Vertex) -> Option<usize> {
        self.graph
            .vertex_index(v)
            .and_then(|i| self.distances.get(i))
    }

    /// Final traversal state of `v`, or `None` if `v` is not a vertex.
    pub fn color(&self, v: G::Vertex) -> Option<Color> {
        self.graph
            .vertex_index(v)
            .and_then(|i| self.colors.get(i).copied())
    }

    /// `true` if `v` was reached from some source.
    pub fn is_reached(&self, v: G::Vertex) -> bool {
        self.distance(v).is_some()
    }

    /// Number of reached vertices, sources included.
    pub fn reached_count(&self) -> usize {
        self.distances.reached_count()
    }

    /// Reached vertices with their distances, in vertex-index order.
    pub fn reached(&self) -> impl Iterator<Item = (G::Vertex, usize)> + '_ {
        (0..self.distances.len())
            .filter_map(move |i| Some((self.graph.vertex_at(i)?, self.distances.get(i)?)))
    }

    /// Raw distances in vertex-index order.
    pub fn distances(&self) -> &DistanceMap {
        &self.distances
    }

    /// Raw colours in vertex-index order.
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }
}

impl<G: Graph> fmt::Debug for BfsResult<'_, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BfsResult")
            .field("sources", &self.sources)
            .field("vertices", &self.distances.len())
            .field("reached", &self.reached_count())
            .finish()
    }
}

/// Breadth-first search from a single source.
///
/// See [`breadth_first_search_multi`] for the traversal rules.
///
/// # Examples
///
/// ```
/// use ridge_core::Coord2;
/// use ridge_grid::{ClimbRule, Grid2, PlaneView};
/// use ridge_search::{breadth_first_search, NullVisitor};
///
/// let grid = Grid2::parse("Sbc\nfed\n").unwrap();
/// let view = PlaneView::new(&grid, ClimbRule::ascending());
/// let result = breadth_first_search(&view, Coord2::new(0, 0), NullVisitor).unwrap();
/// assert_eq!(result.distance(Coord2::new(1, 0)), Some(5));
/// assert_eq!(result.distance(Coord2::new(1, 1)), Some(4));
/// ```
pub fn breadth_first_search<'g, G, V>(
    graph: &'g G,
    source: G::Vertex,
    visitor: V,
) -> Result<BfsResult<'g, G>, SearchError>
where
    G: Graph,
    V: BfsVisitor<G::Vertex>,
{
    breadth_first_search_multi(graph, [source], visitor)
}

/// Breadth-first search seeded from every vertex in `sources`.
///
/// Each source starts `Frontier` at distance 0; repeated sources are
/// seeded once. Vertices are expanded in FIFO order: on dequeue a vertex
/// becomes `Finished` and every `Unvisited` out-neighbour receives the
/// vertex's distance plus one, turns `Frontier`, and is queued. The run
/// ends when the queue is empty; vertices never discovered stay
/// `Unvisited` with no distance.
///
/// Returns [`SearchError::Grid`] if a source is not a vertex, or if the
/// graph yields a neighbour it cannot index.
pub fn breadth_first_search_multi<'g, G, I, V>(
    graph: &'g G,
    sources: I,
    mut visitor: V,
) -> Result<BfsResult<'g, G>, SearchError>
where
    G: Graph,
    I: IntoIterator<Item = G::Vertex>,
    V: BfsVisitor<G::Vertex>,
{
    let n = graph.vertex_count();
    let mut distances = DistanceMap::new(n);
    let mut colors = vec![Color::Unvisited; n];
    let mut queue: VecDeque<(G::Vertex, usize, usize)> = VecDeque::new();
    let mut seeds: SmallVec<[G::Vertex; 4]> = SmallVec::new();

    for source in sources {
        let i = index_of(graph, source)?;
        if colors[i] != Color::Unvisited {
            continue;
        }
        colors[i] = Color::Frontier;
        distances.set(i, 0);
        visitor.discover_vertex(source);
        queue.push_back((source, i, 0));
        seeds.push(source);
    }

    while let Some((v, vi, d)) = queue.pop_front() {
        colors[vi] = Color::Finished;
        for w in graph.neighbours(v) {
            visitor.examine_edge(v, w);
            let wi = index_of(graph, w)?;
            if colors[wi] == Color::Unvisited {
                colors[wi] = Color::Frontier;
                distances.set(wi, d + 1);
                visitor.discover_vertex(w);
                queue.push_back((w, wi, d + 1));
            }
        }
        trace!(vertex = ?v, distance = d, "finished");
        visitor.finish_vertex(v);
    }

    debug!(
        vertices = n,
        sources = seeds.len(),
        reached = distances.reached_count(),
        max_distance = ?distances.max(),
        "breadth-first search complete"
    );

    Ok(BfsResult {
        graph,
        sources: seeds,
        distances,
        colors,
    })
}

/// Length of a shortest path from `source` to `target`.
///
/// Returns 0 without traversing when `source == target`, and
/// [`SearchError::Unreachable`] when the traversal never discovers
/// `target`. Both endpoints must be vertices of `graph`.
pub fn shortest_path_len<G: Graph>(
    graph: &G,
    source: G::Vertex,
    target: G::Vertex,
) -> Result<usize, SearchError> {
    index_of(graph, source)?;
    index_of(graph, target)?;
    if source == target {
        return Ok(0);
    }
    let result = breadth_first_search(graph, source, NullVisitor)?;
    result.distance(target).ok_or(SearchError::Unreachable {
        from: source.into(),
        to: target.into(),
    })
}

fn index_of<G: Graph>(graph: &G, v: G::Vertex) -> Result<usize, SearchError> {
    let n = graph.vertex_count();
    graph.vertex_index(v).filter(|&i| i < n).ok_or_else(|| {
        SearchError::Grid(GridError::OutOfRange {
            point: v.into(),
            bounds: format!("not one of the {n} graph vertices"),
        })
    })
}
