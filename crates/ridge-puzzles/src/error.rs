//! Puzzle-level errors.

use ridge_core::{GridError, SearchError};
use std::error::Error;
use std::fmt;

/// Failure to parse or answer a puzzle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PuzzleError {
    /// The input does not describe a valid puzzle.
    Grid(GridError),
    /// The search could not produce an answer.
    Search(SearchError),
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(_) => f.write_str("invalid puzzle input"),
            Self::Search(_) => f.write_str("no answer"),
        }
    }
}

impl Error for PuzzleError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            Self::Search(e) => Some(e),
        }
    }
}

impl From<GridError> for PuzzleError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl From<SearchError> for PuzzleError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}
