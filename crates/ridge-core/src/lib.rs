//! Core types for the ridge grid-search workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! coordinate value types used as graph vertices and the error taxonomy
//! shared by grid construction, graph views, and breadth-first search.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod coord;
pub mod error;

pub use coord::{Coord2, Coord3, Point};
pub use error::{GridError, SearchError};
