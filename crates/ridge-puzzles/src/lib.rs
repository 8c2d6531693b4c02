//! Grid puzzles answered by breadth-first search.
//!
//! - [`HillClimb`]: fewest steps up a heightmap, from `S` or from any
//!   lowest cell, to `E`
//! - [`LavaDroplet`]: total and exterior surface area of a cube droplet
//!
//! [`solve`] dispatches a [`Puzzle`] and [`Part`] over raw input text.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod hill;
pub mod lava;
pub mod solve;

pub use error::PuzzleError;
pub use hill::HillClimb;
pub use lava::LavaDroplet;
pub use solve::{solve, Part, Puzzle};
