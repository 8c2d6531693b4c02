//! Test fixtures for ridge development.
//!
//! Puzzle samples with known answers, small walled mazes, and ready-made
//! grids shared by the integration tests of every ridge crate.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::*;
