//! Error types for grid construction and graph search.
//!
//! Organized by subsystem: [`GridError`] covers parsing and coordinate
//! access, [`SearchError`] covers breadth-first search outcomes.

use crate::coord::Point;
use std::error::Error;
use std::fmt;

/// Errors arising from grid construction or cell access.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// The input text does not describe a valid grid: rows of unequal
    /// length, a missing or duplicated sentinel, an unparsable token.
    Malformed {
        /// 1-based input line, when the failure is tied to one.
        line: Option<usize>,
        /// What went wrong.
        reason: String,
    },
    /// A coordinate lies outside the grid's extents.
    ///
    /// Raised for user queries and, during search, for a graph view that
    /// yields a neighbour it cannot index (a logic defect in the view).
    OutOfRange {
        /// The offending coordinate.
        point: Point,
        /// Human-readable description of the valid range.
        bounds: String,
    },
    /// Attempted to build a grid with zero cells.
    EmptyGrid,
    /// A grid dimension exceeds what coordinates or memory can address.
    DimensionTooLarge {
        /// Name of the offending dimension.
        name: &'static str,
        /// The requested size.
        value: u64,
        /// Maximum allowed size.
        max: u64,
    },
}

impl GridError {
    /// A [`Malformed`](Self::Malformed) error not tied to one line.
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::Malformed {
            line: None,
            reason: reason.into(),
        }
    }

    /// A [`Malformed`](Self::Malformed) error at a 1-based input line.
    pub fn malformed_at(line: usize, reason: impl Into<String>) -> Self {
        Self::Malformed {
            line: Some(line),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed {
                line: Some(line),
                reason,
            } => write!(f, "malformed input at line {line}: {reason}"),
            Self::Malformed { line: None, reason } => write!(f, "malformed input: {reason}"),
            Self::OutOfRange { point, bounds } => {
                write!(f, "coordinate {point} out of range: {bounds}")
            }
            Self::EmptyGrid => write!(f, "grid must have at least one cell"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} = {value} exceeds maximum {max}")
            }
        }
    }
}

impl Error for GridError {}

/// Errors from a breadth-first search query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchError {
    /// The search finished without ever reaching the target.
    Unreachable {
        /// Where the search started.
        from: Point,
        /// The target that was never discovered.
        to: Point,
    },
    /// A multi-target query found none of its candidates reachable.
    NoneReachable {
        /// Where the search started.
        from: Point,
        /// Description of the candidate set.
        what: &'static str,
    },
    /// A coordinate handed to or produced during the search is not a
    /// vertex of the graph.
    Grid(GridError),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unreachable { from, to } => write!(f, "{to} is unreachable from {from}"),
            Self::NoneReachable { from, what } => {
                write!(f, "no {what} is reachable from {from}")
            }
            Self::Grid(_) => f.write_str("invalid vertex"),
        }
    }
}

impl Error for SearchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for SearchError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}
