//! Step-legality rules between adjacent cells.

use crate::grid3::Voxel;

/// Decides whether a directed step between two grid-adjacent cells is
/// legal, given only their labels.
///
/// Rules must be pure and total over the label domain. Any
/// `Fn(&T, &T) -> bool` closure is a rule.
///
/// # Examples
///
/// ```
/// use ridge_grid::{AdjacencyRule, ClimbRule};
///
/// let rule = ClimbRule::ascending();
/// assert!(rule.legal(&b'a', &b'b'));
/// assert!(!rule.legal(&b'a', &b'c'));
/// assert!(rule.legal(&b'z', &b'a'));
///
/// let walls = |_: &u8, dst: &u8| *dst != b'#';
/// assert!(!walls.legal(&b'.', &b'#'));
/// ```
pub trait AdjacencyRule<T: ?Sized> {
    /// `true` if a step from a cell labelled `src` to an adjacent cell
    /// labelled `dst` is allowed.
    fn legal(&self, src: &T, dst: &T) -> bool;
}

impl<T: ?Sized, F> AdjacencyRule<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    fn legal(&self, src: &T, dst: &T) -> bool {
        self(src, dst)
    }
}

/// Elevation of a heightmap label.
///
/// The start sentinel `S` sits at elevation `a` and the end sentinel `E`
/// at elevation `z`; every other label is its own elevation.
pub const fn elevation(label: u8) -> u8 {
    match label {
        b'S' => b'a',
        b'E' => b'z',
        other => other,
    }
}

/// Which way a [`ClimbRule`] walks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Forward search from the start: climb at most one, drop any amount.
    Ascending,
    /// Reverse search from the end: the mirror image of `Ascending`.
    Descending,
}

/// Heightmap rule: a step may climb by at most one elevation level.
///
/// [`ascending`](Self::ascending) allows `src -> dst` iff
/// `elevation(dst) <= elevation(src) + 1`. [`descending`](Self::descending)
/// allows exactly the reversed edges, so a search from the end cell finds
/// the cells that can reach it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ClimbRule {
    direction: Direction,
}

impl ClimbRule {
    /// Forward rule.
    pub const fn ascending() -> Self {
        Self {
            direction: Direction::Ascending,
        }
    }

    /// Reversed rule.
    pub const fn descending() -> Self {
        Self {
            direction: Direction::Descending,
        }
    }

    /// The walking direction.
    pub fn direction(&self) -> Direction {
        self.direction
    }
}

impl Default for ClimbRule {
    fn default() -> Self {
        Self::ascending()
    }
}

impl AdjacencyRule<u8> for ClimbRule {
    fn legal(&self, src: &u8, dst: &u8) -> bool {
        let (from, to) = match self.direction {
            Direction::Ascending => (*src, *dst),
            Direction::Descending => (*dst, *src),
        };
        u16::from(elevation(to)) <= u16::from(elevation(from)) + 1
    }
}

/// Volume rule: a step is legal iff the destination is empty.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct OpenAir;

impl AdjacencyRule<Voxel> for OpenAir {
    fn legal(&self, _src: &Voxel, dst: &Voxel) -> bool {
        *dst == Voxel::Empty
    }
}
