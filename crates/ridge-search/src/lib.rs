//! Breadth-first search over implicit grid graphs.
//!
//! The engine consumes any [`ridge_grid::Graph`] and computes unit-weight
//! shortest distances (or plain reachability) from one or more sources.
//! Per-vertex state lives in dense side arrays indexed by
//! [`Graph::vertex_index`](ridge_grid::Graph::vertex_index) and is owned by
//! the returned [`BfsResult`].
//!
//! Callers observe the traversal through a [`BfsVisitor`]; the
//! [`shortest_path_len`] helper turns an unreached target into
//! [`SearchError::Unreachable`](ridge_core::SearchError::Unreachable)
//! instead of a sentinel distance.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bfs;
pub mod color;
pub mod distance;
pub mod visitor;

pub use bfs::{breadth_first_search, breadth_first_search_multi, shortest_path_len, BfsResult};
pub use color::Color;
pub use distance::DistanceMap;
pub use visitor::{BfsVisitor, NullVisitor};
