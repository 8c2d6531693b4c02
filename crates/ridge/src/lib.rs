//! Ridge: breadth-first search over implicit grid graphs.
//!
//! This is the top-level facade crate. It re-exports the public API of the
//! grid, search and puzzle crates and hosts the command-line front end.
//!
//! # Quick start
//!
//! ```
//! use ridge::{shortest_path_len, ClimbRule, Coord2, Grid2, PlaneView};
//!
//! let grid = Grid2::parse("abc\nbcd\n").unwrap();
//! let view = PlaneView::new(&grid, ClimbRule::ascending());
//! let steps = shortest_path_len(&view, Coord2::new(0, 0), Coord2::new(1, 2)).unwrap();
//! assert_eq!(steps, 3);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod logging;

pub use ridge_core::{Coord2, Coord3, GridError, Point, SearchError};
pub use ridge_grid::{
    elevation, AdjacencyRule, ClimbRule, Direction, Graph, Grid2, Grid3, OpenAir, PlaneView,
    VolumeView, Voxel,
};
pub use ridge_puzzles::{solve, HillClimb, LavaDroplet, Part, Puzzle, PuzzleError};
pub use ridge_search::{
    breadth_first_search, breadth_first_search_multi, shortest_path_len, BfsResult, BfsVisitor,
    Color, DistanceMap, NullVisitor,
};
