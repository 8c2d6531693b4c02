//! Hill climbing over a letter heightmap.

use crate::error::PuzzleError;
use ridge_core::{Coord2, GridError, SearchError};
use ridge_grid::{elevation, ClimbRule, Grid2, PlaneView};
use ridge_search::{breadth_first_search, shortest_path_len, NullVisitor};
use tracing::{debug, info, info_span};

/// A parsed heightmap with its start and end cells.
///
/// Labels are `a..=z`, plus exactly one `S` (elevation `a`) and one `E`
/// (elevation `z`). A step may climb at most one level and descend any
/// number.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HillClimb {
    grid: Grid2<u8>,
    start: Coord2,
    end: Coord2,
}

impl HillClimb {
    /// Parse puzzle text into a validated heightmap.
    ///
    /// # Examples
    ///
    /// ```
    /// use ridge_puzzles::HillClimb;
    ///
    /// let hill = HillClimb::parse("Sabcdefghijklm\nEzyxwvutsrqpon\n").unwrap();
    /// assert_eq!(hill.part_one(), Ok(27));
    /// assert_eq!(hill.part_two(), Ok(26));
    /// ```
    pub fn parse(text: &str) -> Result<Self, PuzzleError> {
        Self::from_grid(Grid2::parse(text)?)
    }

    /// Validate an already-built grid of labels.
    pub fn from_grid(grid: Grid2<u8>) -> Result<Self, PuzzleError> {
        if let Some((at, &label)) = grid
            .iter()
            .find(|(_, &b)| !matches!(b, b'a'..=b'z' | b'S' | b'E'))
        {
            return Err(GridError::malformed(format!(
                "unexpected label {:?} at {at}",
                char::from(label)
            ))
            .into());
        }
        let start = sole(&grid, b'S')?;
        let end = sole(&grid, b'E')?;
        debug!(
            rows = grid.rows(),
            cols = grid.cols(),
            %start,
            %end,
            "parsed heightmap"
        );
        Ok(Self { grid, start, end })
    }

    /// The heightmap.
    pub fn grid(&self) -> &Grid2<u8> {
        &self.grid
    }

    /// Position of `S`.
    pub fn start(&self) -> Coord2 {
        self.start
    }

    /// Position of `E`.
    pub fn end(&self) -> Coord2 {
        self.end
    }

    /// Fewest steps from `S` to `E`.
    pub fn part_one(&self) -> Result<usize, PuzzleError> {
        let _span = info_span!("hill_climbing", part = 1).entered();
        let view = PlaneView::new(&self.grid, ClimbRule::ascending());
        debug!(direction = ?view.rule().direction(), from = %self.start, "searching");
        let steps = shortest_path_len(&view, self.start, self.end)?;
        info!(steps, "reached the summit");
        Ok(steps)
    }

    /// Fewest steps to `E` from any cell of elevation `a`.
    ///
    /// Runs one search backwards from `E`, so every candidate start is
    /// answered by the same traversal.
    pub fn part_two(&self) -> Result<usize, PuzzleError> {
        let _span = info_span!("hill_climbing", part = 2).entered();
        let view = PlaneView::new(&self.grid, ClimbRule::descending());
        debug!(direction = ?view.rule().direction(), from = %self.end, "searching");
        let result = breadth_first_search(&view, self.end, NullVisitor)?;
        let best = self
            .grid
            .positions(|&b| elevation(b) == b'a')
            .filter_map(|p| result.distance(p))
            .min()
            .ok_or(SearchError::NoneReachable {
                from: self.end.into(),
                what: "cell of elevation 'a'",
            })?;
        info!(steps = best, reached = result.reached_count(), "best trail found");
        Ok(best)
    }
}

fn sole(grid: &Grid2<u8>, label: u8) -> Result<Coord2, GridError> {
    let mut found = grid.positions(move |&b| b == label);
    let first = found
        .next()
        .ok_or_else(|| GridError::malformed(format!("no '{}' cell", char::from(label))))?;
    if let Some(second) = found.next() {
        return Err(GridError::malformed(format!(
            "more than one '{}' cell: {first} and {second}",
            char::from(label)
        )));
    }
    Ok(first)
}
