//! Cell coordinates for 2D and 3D grids.

use std::fmt;

/// A cell address in a two-dimensional grid.
///
/// Components are signed so that neighbour arithmetic may step one cell
/// past an edge; whether a coordinate is inside a grid is decided by the
/// grid, never by the coordinate.
///
/// Ordering is row-major, matching the vertex order of planar views.
///
/// # Examples
///
/// ```
/// use ridge_core::Coord2;
///
/// let c = Coord2::new(2, 3);
/// assert_eq!(c.offset(-1, 0), Some(Coord2::new(1, 3)));
/// assert_eq!(c.to_string(), "(2, 3)");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord2 {
    /// Row index, growing downwards.
    pub row: i32,
    /// Column index, growing rightwards.
    pub col: i32,
}

impl Coord2 {
    /// The top-left cell.
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a coordinate from a row and a column.
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Shift by `(dr, dc)`. Returns `None` if either axis overflows `i32`.
    pub fn offset(self, dr: i32, dc: i32) -> Option<Self> {
        Some(Self {
            row: self.row.checked_add(dr)?,
            col: self.col.checked_add(dc)?,
        })
    }
}

impl From<(i32, i32)> for Coord2 {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Coord2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A cell address in a three-dimensional grid.
///
/// Ordering is x-major (`x`, then `y`, then `z`), matching the vertex
/// order of volume views.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord3 {
    /// First axis.
    pub x: i32,
    /// Second axis.
    pub y: i32,
    /// Third axis.
    pub z: i32,
}

impl Coord3 {
    /// The corner cell `(0, 0, 0)`.
    pub const ORIGIN: Self = Self::new(0, 0, 0);

    /// Create a coordinate from its three components.
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Shift by `(dx, dy, dz)`. Returns `None` if any axis overflows `i32`.
    pub fn offset(self, dx: i32, dy: i32, dz: i32) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
            z: self.z.checked_add(dz)?,
        })
    }

    /// `true` if no component is negative.
    pub fn is_non_negative(self) -> bool {
        self.x >= 0 && self.y >= 0 && self.z >= 0
    }
}

impl From<(i32, i32, i32)> for Coord3 {
    fn from((x, y, z): (i32, i32, i32)) -> Self {
        Self::new(x, y, z)
    }
}

impl fmt::Display for Coord3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{})", self.x, self.y, self.z)
    }
}

/// A coordinate of either dimensionality.
///
/// Used in error values so that one error type can describe failures in
/// planar and volume grids alike.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Point {
    /// A 2D coordinate.
    Plane(Coord2),
    /// A 3D coordinate.
    Space(Coord3),
}

impl From<Coord2> for Point {
    fn from(c: Coord2) -> Self {
        Self::Plane(c)
    }
}

impl From<Coord3> for Point {
    fn from(c: Coord3) -> Self {
        Self::Space(c)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plane(c) => c.fmt(f),
            Self::Space(c) => c.fmt(f),
        }
    }
}
