//! Dense grids and the graph views that search them.
//!
//! This crate defines the [`Graph`] trait, the abstraction through which
//! the breadth-first search engine sees a grid, along with the dense
//! storage it reads and the rules that decide which steps are legal.
//!
//! # Storage
//!
//! - [`Grid2`]: row-major 2D buffer, parsed from equal-length text lines
//! - [`Grid3`]: x-major 3D buffer, built from occupied coordinates
//!
//! # Views
//!
//! - [`PlaneView`]: 4-connected view over a [`Grid2`]
//! - [`VolumeView`]: 6-connected view over a [`Grid3`]
//!
//! Views borrow their grid and never materialize an edge list: neighbour
//! sequences are computed on demand from a fixed offset table and filtered
//! through an [`AdjacencyRule`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod graph;
pub mod grid2;
pub mod grid3;
pub mod parse;
pub mod plane;
pub mod rule;
pub mod volume;

#[cfg(test)]
pub(crate) mod compliance;

pub use graph::Graph;
pub use grid2::{Coords2, Grid2};
pub use grid3::{Coords3, Grid3, Voxel};
pub use plane::{PlaneSteps, PlaneView, PLANE_OFFSETS};
pub use rule::{elevation, AdjacencyRule, ClimbRule, Direction, OpenAir};
pub use volume::{VolumeSteps, VolumeView, VOLUME_OFFSETS};
