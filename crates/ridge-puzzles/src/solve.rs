//! Puzzle dispatch.

use crate::error::PuzzleError;
use crate::hill::HillClimb;
use crate::lava::LavaDroplet;
use std::fmt;

/// The puzzles this crate answers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Puzzle {
    /// Fewest steps up a letter heightmap.
    HillClimbing,
    /// Surface area of a cube droplet.
    LavaDroplet,
}

impl Puzzle {
    /// Every puzzle, in declaration order.
    pub const ALL: [Puzzle; 2] = [Puzzle::HillClimbing, Puzzle::LavaDroplet];

    /// Kebab-case name, as accepted on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Self::HillClimbing => "hill-climbing",
            Self::LavaDroplet => "lava-droplet",
        }
    }
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which question of a puzzle to answer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Part {
    /// The first question.
    #[default]
    One,
    /// The second question.
    Two,
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::One => f.write_str("one"),
            Self::Two => f.write_str("two"),
        }
    }
}

/// Parse `text` as `puzzle` input and answer `part`.
///
/// # Examples
///
/// ```
/// use ridge_puzzles::{solve, Part, Puzzle};
///
/// assert_eq!(solve(Puzzle::LavaDroplet, Part::One, "1,1,1\n2,1,1\n"), Ok(10));
/// ```
pub fn solve(puzzle: Puzzle, part: Part, text: &str) -> Result<usize, PuzzleError> {
    match (puzzle, part) {
        (Puzzle::HillClimbing, Part::One) => HillClimb::parse(text)?.part_one(),
        (Puzzle::HillClimbing, Part::Two) => HillClimb::parse(text)?.part_two(),
        (Puzzle::LavaDroplet, Part::One) => LavaDroplet::parse(text)?.part_one(),
        (Puzzle::LavaDroplet, Part::Two) => LavaDroplet::parse(text)?.part_two(),
    }
}
