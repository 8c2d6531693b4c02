//! Graph trait compliance test helpers.
//!
//! These functions verify that a `Graph` implementation satisfies the
//! contract documented on the trait. Reused across the view test modules
//! (PlaneView, VolumeView) with different grids and rules.

use crate::graph::Graph;
use indexmap::IndexSet;

/// Assert that `vertices()` yields exactly `vertex_count()` unique vertices.
pub fn assert_vertices_complete<G: Graph>(graph: &G) {
    let all: Vec<_> = graph.vertices().collect();
    assert_eq!(
        all.len(),
        graph.vertex_count(),
        "vertices() length ({}) != vertex_count ({})",
        all.len(),
        graph.vertex_count()
    );
    let unique: IndexSet<_> = all.iter().collect();
    assert_eq!(unique.len(), all.len(), "vertices() has duplicates");
}

/// Assert that two calls to `vertices()` return the same sequence.
pub fn assert_vertices_deterministic<G: Graph>(graph: &G) {
    let a: Vec<_> = graph.vertices().collect();
    let b: Vec<_> = graph.vertices().collect();
    assert_eq!(a, b, "vertices() is non-deterministic");
}

/// Assert that `vertex_index` maps the i-th vertex to `i` and that
/// `vertex_at` inverts it.
pub fn assert_vertex_index_bijective<G: Graph>(graph: &G) {
    for (i, v) in graph.vertices().enumerate() {
        assert_eq!(
            graph.vertex_index(v),
            Some(i),
            "vertex_index({v:?}) != position {i} in vertices()"
        );
        assert_eq!(graph.vertex_at(i), Some(v), "vertex_at({i}) != {v:?}");
    }
    assert_eq!(
        graph.vertex_at(graph.vertex_count()),
        None,
        "vertex_at(vertex_count) should be None"
    );
}

/// Assert that every neighbour is itself a vertex of the graph.
pub fn assert_neighbours_are_vertices<G: Graph>(graph: &G) {
    for v in graph.vertices() {
        for w in graph.neighbours(v) {
            assert!(
                graph.vertex_index(w).is_some(),
                "neighbour {w:?} of {v:?} is not a vertex"
            );
            assert_ne!(w, v, "{v:?} lists itself as a neighbour");
        }
    }
}

/// Assert that repeated `neighbours(v)` calls yield the same sequence.
pub fn assert_neighbours_restartable<G: Graph>(graph: &G) {
    for v in graph.vertices() {
        let a: Vec<_> = graph.neighbours(v).collect();
        let b = graph.neighbour_vec(v);
        assert_eq!(a.as_slice(), b.as_slice(), "neighbours({v:?}) not restartable");
        assert_eq!(graph.out_degree(v), a.len());
    }
}

/// Assert that no vertex has more than `max` neighbours or repeats one.
pub fn assert_degree_at_most<G: Graph>(graph: &G, max: usize) {
    for v in graph.vertices() {
        let n = graph.neighbour_vec(v);
        assert!(n.len() <= max, "{v:?} has {} neighbours, max {max}", n.len());
        let unique: IndexSet<_> = n.iter().collect();
        assert_eq!(unique.len(), n.len(), "{v:?} has duplicate neighbours");
    }
}

/// Assert that `w in neighbours(v)` implies `v in neighbours(w)`.
///
/// Only meaningful for symmetric rules.
pub fn assert_neighbours_symmetric<G: Graph>(graph: &G) {
    for v in graph.vertices() {
        for w in graph.neighbours(v) {
            assert!(
                graph.neighbours(w).any(|x| x == v),
                "neighbour symmetry violated: {w:?} in N({v:?}) but {v:?} not in N({w:?})"
            );
        }
    }
}

/// Run every rule-independent compliance check on a graph.
pub fn run_full_compliance<G: Graph>(graph: &G, max_degree: usize) {
    assert_vertices_complete(graph);
    assert_vertices_deterministic(graph);
    assert_vertex_index_bijective(graph);
    assert_neighbours_are_vertices(graph);
    assert_neighbours_restartable(graph);
    assert_degree_at_most(graph, max_degree);
}
