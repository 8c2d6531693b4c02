//! Dense two-dimensional grid of cell labels.

use crate::parse::numbered_lines;
use ridge_core::{Coord2, GridError};

/// A fixed-size, row-major 2D array of cell labels.
///
/// Built once and read-only afterwards. Every cell access is
/// bounds-checked: [`get`](Self::get) returns `None` outside the grid,
/// [`at`](Self::at) returns [`GridError::OutOfRange`].
///
/// # Examples
///
/// ```
/// use ridge_core::Coord2;
/// use ridge_grid::Grid2;
///
/// let grid = Grid2::parse("Sab\ncdE\n").unwrap();
/// assert_eq!(grid.extents(), (2, 3));
/// assert_eq!(grid.at(Coord2::new(1, 2)), Ok(&b'E'));
/// assert!(grid.at(Coord2::new(2, 0)).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid2<T> {
    rows: u32,
    cols: u32,
    cells: Vec<T>,
}

impl<T> Grid2<T> {
    /// Maximum dimension size: coordinates use `i32`, so each axis must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Upper bound on the total cell count of one grid.
    pub const MAX_CELLS: u64 = 1 << 32;

    /// Wrap an existing row-major buffer.
    ///
    /// Fails with [`GridError::EmptyGrid`] if either extent is zero and
    /// with [`GridError::Malformed`] if `cells.len() != rows * cols`.
    pub fn from_vec(rows: u32, cols: u32, cells: Vec<T>) -> Result<Self, GridError> {
        check_extents(rows, cols)?;
        let expected = rows as usize * cols as usize;
        if cells.len() != expected {
            return Err(GridError::malformed(format!(
                "buffer holds {} cells, extents {rows}x{cols} need {expected}",
                cells.len()
            )));
        }
        Ok(Self { rows, cols, cells })
    }

    /// Build a grid by evaluating `f` at every coordinate in row-major order.
    pub fn from_fn(rows: u32, cols: u32, f: impl FnMut(Coord2) -> T) -> Result<Self, GridError> {
        check_extents(rows, cols)?;
        let cells = Coords2::new(rows, cols).map(f).collect();
        Ok(Self { rows, cols, cells })
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// `(rows, cols)`.
    pub fn extents(&self) -> (u32, u32) {
        (self.rows, self.cols)
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// `true` if `coord` addresses a cell of this grid.
    pub fn contains(&self, coord: Coord2) -> bool {
        self.index_of(coord).is_some()
    }

    /// Row-major linear index of `coord`, or `None` outside the grid.
    pub fn index_of(&self, coord: Coord2) -> Option<usize> {
        let r = u32::try_from(coord.row).ok().filter(|&r| r < self.rows)?;
        let c = u32::try_from(coord.col).ok().filter(|&c| c < self.cols)?;
        Some(r as usize * self.cols as usize + c as usize)
    }

    /// Inverse of [`index_of`](Self::index_of).
    pub fn coord_of(&self, index: usize) -> Option<Coord2> {
        if index >= self.cells.len() {
            return None;
        }
        let cols = self.cols as usize;
        Some(Coord2::new((index / cols) as i32, (index % cols) as i32))
    }

    /// The label at `coord`, or `None` outside the grid.
    pub fn get(&self, coord: Coord2) -> Option<&T> {
        self.index_of(coord).map(|i| &self.cells[i])
    }

    /// The label at `coord`.
    ///
    /// Returns `Err(GridError::OutOfRange)` outside the grid.
    pub fn at(&self, coord: Coord2) -> Result<&T, GridError> {
        self.get(coord).ok_or_else(|| GridError::OutOfRange {
            point: coord.into(),
            bounds: self.bounds(),
        })
    }

    /// Human-readable description of the valid coordinate range.
    pub fn bounds(&self) -> String {
        format!("[0, {}) x [0, {})", self.rows, self.cols)
    }

    /// All coordinates in row-major order.
    pub fn coords(&self) -> Coords2 {
        Coords2::new(self.rows, self.cols)
    }

    /// The backing buffer in row-major order.
    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    /// `(coord, label)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord2, &T)> + '_ {
        self.coords().zip(self.cells.iter())
    }

    /// First coordinate (row-major) whose label satisfies `pred`.
    pub fn position(&self, mut pred: impl FnMut(&T) -> bool) -> Option<Coord2> {
        self.iter().find(|(_, label)| pred(label)).map(|(c, _)| c)
    }

    /// Every coordinate whose label satisfies `pred`, in row-major order.
    pub fn positions<'a>(
        &'a self,
        mut pred: impl 'a + FnMut(&T) -> bool,
    ) -> impl Iterator<Item = Coord2> + 'a {
        self.iter()
            .filter(move |(_, label)| pred(label))
            .map(|(c, _)| c)
    }
}

impl Grid2<u8> {
    /// Parse a grid of single-byte labels, one row per line.
    ///
    /// Trailing blank lines are ignored. Rows of unequal length are
    /// [`GridError::Malformed`], naming the first offending line.
    pub fn parse(text: &str) -> Result<Self, GridError> {
        let mut rows: Vec<(usize, &str)> = numbered_lines(text).collect();
        while rows.last().is_some_and(|(_, line)| line.trim().is_empty()) {
            rows.pop();
        }
        Self::from_numbered_rows(rows)
    }

    /// Build a grid from pre-split rows.
    ///
    /// Unlike [`parse`](Self::parse), every item counts as a row.
    pub fn from_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Result<Self, GridError> {
        Self::from_numbered_rows(lines.into_iter().enumerate().map(|(i, l)| (i + 1, l)))
    }

    fn from_numbered_rows<'a>(
        rows: impl IntoIterator<Item = (usize, &'a str)>,
    ) -> Result<Self, GridError> {
        let mut cells = Vec::new();
        let mut cols: Option<usize> = None;
        let mut row_count = 0usize;
        for (line, row) in rows {
            match cols {
                None if row.is_empty() => {
                    return Err(GridError::malformed_at(line, "first row is empty"));
                }
                None => cols = Some(row.len()),
                Some(width) if width != row.len() => {
                    return Err(GridError::malformed_at(
                        line,
                        format!("row has {} cells, expected {width}", row.len()),
                    ));
                }
                Some(_) => {}
            }
            cells.extend_from_slice(row.as_bytes());
            row_count += 1;
        }
        let Some(cols) = cols else {
            return Err(GridError::malformed("no rows"));
        };
        let rows = dim_u32("rows", row_count)?;
        let cols = dim_u32("cols", cols)?;
        Self::from_vec(rows, cols, cells)
    }
}

fn check_extents(rows: u32, cols: u32) -> Result<(), GridError> {
    if rows == 0 || cols == 0 {
        return Err(GridError::EmptyGrid);
    }
    for (name, value) in [("rows", rows), ("cols", cols)] {
        if value > Grid2::<()>::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name,
                value: value.into(),
                max: Grid2::<()>::MAX_DIM.into(),
            });
        }
    }
    let total = u64::from(rows) * u64::from(cols);
    if total > Grid2::<()>::MAX_CELLS {
        return Err(GridError::DimensionTooLarge {
            name: "cells",
            value: total,
            max: Grid2::<()>::MAX_CELLS,
        });
    }
    Ok(())
}

fn dim_u32(name: &'static str, value: usize) -> Result<u32, GridError> {
    u32::try_from(value)
        .ok()
        .filter(|&v| v <= Grid2::<()>::MAX_DIM)
        .ok_or(GridError::DimensionTooLarge {
            name,
            value: value as u64,
            max: Grid2::<()>::MAX_DIM.into(),
        })
}

/// Row-major iterator over the coordinates of a 2D extent.
///
/// Cheap to construct and restartable: each call to
/// [`Grid2::coords`] starts a fresh sequence.
#[derive(Clone, Debug)]
pub struct Coords2 {
    cols: usize,
    next: usize,
    end: usize,
}

impl Coords2 {
    /// Iterate `[0, rows) x [0, cols)`.
    pub fn new(rows: u32, cols: u32) -> Self {
        Self {
            cols: cols as usize,
            next: 0,
            end: rows as usize * cols as usize,
        }
    }
}

impl Iterator for Coords2 {
    type Item = Coord2;

    fn next(&mut self) -> Option<Coord2> {
        if self.next >= self.end {
            return None;
        }
        let i = self.next;
        self.next += 1;
        Some(Coord2::new((i / self.cols) as i32, (i % self.cols) as i32))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.end - self.next;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Coords2 {}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const SAMPLE: &str = "Sabqponm\nabcryxxl\naccszExk\nacctuvwj\nabdefghi\n";

    fn c(row: i32, col: i32) -> Coord2 {
        Coord2::new(row, col)
    }

    // ── Parsing ─────────────────────────────────────────────────

    #[test]
    fn parse_sample_extents() {
        let g = Grid2::parse(SAMPLE).unwrap();
        assert_eq!(g.extents(), (5, 8));
        assert_eq!(g.cell_count(), 40);
        assert_eq!(g.at(c(0, 0)), Ok(&b'S'));
        assert_eq!(g.at(c(2, 5)), Ok(&b'E'));
    }

    #[test]
    fn parse_ignores_trailing_blank_lines() {
        let g = Grid2::parse("ab\ncd\n\n\n").unwrap();
        assert_eq!(g.extents(), (2, 2));
    }

    #[test]
    fn parse_handles_crlf() {
        let g = Grid2::parse("ab\r\ncd\r\n").unwrap();
        assert_eq!(g, Grid2::parse("ab\ncd\n").unwrap());
    }

    #[test]
    fn parse_rejects_ragged_rows() {
        let err = Grid2::parse("abc\nab\nabc\n").unwrap_err();
        assert_eq!(
            err,
            GridError::malformed_at(2, "row has 2 cells, expected 3")
        );
    }

    #[test]
    fn parse_rejects_interior_blank_line() {
        assert!(matches!(
            Grid2::parse("ab\n\nab\n"),
            Err(GridError::Malformed { line: Some(2), .. })
        ));
    }

    #[test]
    fn parse_rejects_empty_input() {
        assert!(matches!(
            Grid2::parse(""),
            Err(GridError::Malformed { line: None, .. })
        ));
        assert!(matches!(
            Grid2::parse("\n\n"),
            Err(GridError::Malformed { .. })
        ));
    }

    #[test]
    fn from_lines_counts_every_item() {
        let g = Grid2::from_lines(["xy", "zw"]).unwrap();
        assert_eq!(g.cells(), b"xyzw");
        assert!(Grid2::from_lines(["xy", ""]).is_err());
    }

    // ── Construction ────────────────────────────────────────────

    #[test]
    fn from_vec_checks_length() {
        assert!(Grid2::from_vec(2, 2, vec![0u8; 4]).is_ok());
        assert!(matches!(
            Grid2::from_vec(2, 2, vec![0u8; 3]),
            Err(GridError::Malformed { .. })
        ));
    }

    #[test]
    fn zero_extent_is_empty_grid() {
        assert_eq!(Grid2::<u8>::from_vec(0, 3, vec![]), Err(GridError::EmptyGrid));
        assert_eq!(Grid2::from_fn(3, 0, |_| 0u8), Err(GridError::EmptyGrid));
    }

    #[test]
    fn extents_beyond_i32_are_rejected() {
        let big = i32::MAX as u32 + 1;
        assert!(matches!(
            Grid2::from_fn(big, 1, |_| ()),
            Err(GridError::DimensionTooLarge { name: "rows", .. })
        ));
    }

    #[test]
    fn from_fn_visits_row_major() {
        let g = Grid2::from_fn(2, 3, |p| p.row * 10 + p.col).unwrap();
        assert_eq!(g.cells(), &[0, 1, 2, 10, 11, 12]);
    }

    // ── Access ──────────────────────────────────────────────────

    #[test]
    fn at_out_of_range_reports_bounds() {
        let g = Grid2::parse("ab\ncd").unwrap();
        assert_eq!(
            g.at(c(-1, 0)),
            Err(GridError::OutOfRange {
                point: c(-1, 0).into(),
                bounds: "[0, 2) x [0, 2)".into(),
            })
        );
        assert!(g.at(c(0, 2)).is_err());
        assert!(g.get(c(2, 0)).is_none());
    }

    #[test]
    fn index_round_trip() {
        let g = Grid2::from_fn(3, 4, |_| 0u8).unwrap();
        for (i, coord) in g.coords().enumerate() {
            assert_eq!(g.index_of(coord), Some(i));
            assert_eq!(g.coord_of(i), Some(coord));
        }
        assert_eq!(g.coord_of(12), None);
    }

    #[test]
    fn positions_find_sentinels() {
        let g = Grid2::parse(SAMPLE).unwrap();
        assert_eq!(g.position(|&l| l == b'S'), Some(c(0, 0)));
        assert_eq!(g.position(|&l| l == b'E'), Some(c(2, 5)));
        assert_eq!(g.positions(|&l| l == b'a' || l == b'S').count(), 6);
    }

    #[test]
    fn coords_is_exact_size() {
        let coords = Coords2::new(3, 5);
        assert_eq!(coords.len(), 15);
        assert_eq!(coords.last(), Some(c(2, 4)));
    }

    // ── Property tests ──────────────────────────────────────────

    fn arb_rows() -> impl Strategy<Value = Vec<String>> {
        (1usize..8, 1usize..8).prop_flat_map(|(rows, cols)| {
            prop::collection::vec(
                prop::collection::vec(prop::char::range('a', 'z'), cols)
                    .prop_map(|cs| cs.into_iter().collect::<String>()),
                rows,
            )
        })
    }

    proptest! {
        #[test]
        fn parse_is_idempotent(rows in arb_rows()) {
            let text = rows.join("\n");
            let a = Grid2::parse(&text).unwrap();
            let b = Grid2::parse(&text).unwrap();
            prop_assert_eq!(&a, &b);
            for coord in a.coords() {
                prop_assert_eq!(a.at(coord), b.at(coord));
            }
        }

        #[test]
        fn parse_preserves_every_label(rows in arb_rows()) {
            let g = Grid2::parse(&rows.join("\n")).unwrap();
            for (r, row) in rows.iter().enumerate() {
                for (col, byte) in row.bytes().enumerate() {
                    prop_assert_eq!(g.at(c(r as i32, col as i32)), Ok(&byte));
                }
            }
        }
    }
}
