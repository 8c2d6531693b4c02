//! Dense three-dimensional grid.

use ridge_core::{Coord3, GridError};

/// Occupancy of a volume cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Voxel {
    /// Open space.
    #[default]
    Empty,
    /// Occupied by a unit cube.
    Solid,
}

/// A fixed-size 3D array, stored x-major: the linear index of
/// `(x, y, z)` is `(x * ny + y) * nz + z`.
///
/// Built once and read-only afterwards; all access is bounds-checked.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid3<T> {
    extents: (u32, u32, u32),
    cells: Vec<T>,
}

impl<T> Grid3<T> {
    /// Maximum dimension size: coordinates use `i32`, so each axis must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Upper bound on the total cell count of one grid.
    ///
    /// Searches allocate dense per-cell side arrays, so a volume is capped
    /// well below what a few scattered cube coordinates could describe.
    pub const MAX_CELLS: u64 = 1 << 26;

    /// Build a grid by evaluating `f` at every coordinate in x-major order.
    ///
    /// Fails with [`GridError::EmptyGrid`] if any extent is zero and with
    /// [`GridError::DimensionTooLarge`] if an extent or the total cell
    /// count is out of range.
    pub fn from_fn(
        extents: (u32, u32, u32),
        f: impl FnMut(Coord3) -> T,
    ) -> Result<Self, GridError> {
        check_extents(extents)?;
        let cells = Coords3::new(extents).map(f).collect();
        Ok(Self { extents, cells })
    }

    /// `(nx, ny, nz)`.
    pub fn extents(&self) -> (u32, u32, u32) {
        self.extents
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// `true` if `coord` addresses a cell of this grid.
    pub fn contains(&self, coord: Coord3) -> bool {
        self.index_of(coord).is_some()
    }

    /// Linear index of `coord`, or `None` outside the grid.
    pub fn index_of(&self, coord: Coord3) -> Option<usize> {
        linear_index(self.extents, coord)
    }

    /// Inverse of [`index_of`](Self::index_of).
    pub fn coord_of(&self, index: usize) -> Option<Coord3> {
        if index >= self.cells.len() {
            return None;
        }
        Some(Coords3::coord_at(self.extents, index))
    }

    /// The cell at `coord`, or `None` outside the grid.
    pub fn get(&self, coord: Coord3) -> Option<&T> {
        self.index_of(coord).map(|i| &self.cells[i])
    }

    /// The cell at `coord`.
    ///
    /// Returns `Err(GridError::OutOfRange)` outside the grid.
    pub fn at(&self, coord: Coord3) -> Result<&T, GridError> {
        self.get(coord).ok_or_else(|| GridError::OutOfRange {
            point: coord.into(),
            bounds: self.bounds(),
        })
    }

    /// Human-readable description of the valid coordinate range.
    pub fn bounds(&self) -> String {
        let (nx, ny, nz) = self.extents;
        format!("[0, {nx}) x [0, {ny}) x [0, {nz})")
    }

    /// All coordinates in x-major order.
    pub fn coords(&self) -> Coords3 {
        Coords3::new(self.extents)
    }

    /// The backing buffer in x-major order.
    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    /// `(coord, cell)` pairs in x-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord3, &T)> + '_ {
        self.coords().zip(self.cells.iter())
    }

    /// First coordinate (x-major) whose cell satisfies `pred`.
    pub fn position(&self, mut pred: impl FnMut(&T) -> bool) -> Option<Coord3> {
        self.iter().find(|(_, cell)| pred(cell)).map(|(c, _)| c)
    }

    /// Every coordinate whose cell satisfies `pred`, in x-major order.
    pub fn positions<'a>(
        &'a self,
        mut pred: impl 'a + FnMut(&T) -> bool,
    ) -> impl Iterator<Item = Coord3> + 'a {
        self.iter()
            .filter(move |(_, cell)| pred(cell))
            .map(|(c, _)| c)
    }
}

impl Grid3<Voxel> {
    /// Build an occupancy grid from the coordinates of unit cubes.
    ///
    /// Each extent is `max + 1 + 2 * padding` and every cube is shifted by
    /// `padding` on all axes, leaving a shell of empty cells at least
    /// `padding` thick around the occupied region. Duplicate cubes are
    /// harmless. Negative coordinates are [`GridError::Malformed`]; an
    /// empty cube list is [`GridError::EmptyGrid`].
    ///
    /// # Examples
    ///
    /// ```
    /// use ridge_core::Coord3;
    /// use ridge_grid::{Grid3, Voxel};
    ///
    /// let g = Grid3::from_cubes([Coord3::new(0, 0, 0)], 1).unwrap();
    /// assert_eq!(g.extents(), (3, 3, 3));
    /// assert_eq!(g.at(Coord3::new(1, 1, 1)), Ok(&Voxel::Solid));
    /// assert_eq!(g.at(Coord3::new(0, 0, 0)), Ok(&Voxel::Empty));
    /// ```
    pub fn from_cubes(
        cubes: impl IntoIterator<Item = Coord3>,
        padding: u32,
    ) -> Result<Self, GridError> {
        let cubes: Vec<Coord3> = cubes.into_iter().collect();
        if let Some(bad) = cubes.iter().find(|c| !c.is_non_negative()) {
            return Err(GridError::malformed(format!(
                "negative coordinate {bad} is not supported"
            )));
        }
        let max = cubes
            .iter()
            .copied()
            .reduce(|a, b| Coord3::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z)))
            .ok_or(GridError::EmptyGrid)?;

        let extent = |name: &'static str, m: i32| -> Result<u32, GridError> {
            let value = m as u64 + 1 + 2 * u64::from(padding);
            if value > u64::from(Self::MAX_DIM) {
                return Err(GridError::DimensionTooLarge {
                    name,
                    value,
                    max: Self::MAX_DIM.into(),
                });
            }
            Ok(value as u32)
        };
        let extents = (extent("x", max.x)?, extent("y", max.y)?, extent("z", max.z)?);
        check_extents(extents)?;

        let mut cells = vec![Voxel::Empty; Coords3::new(extents).len()];
        let shift = padding as i32;
        for cube in &cubes {
            // Every axis was checked against `max + 1 + 2 * padding` above.
            let at = Coord3::new(cube.x + shift, cube.y + shift, cube.z + shift);
            if let Some(index) = linear_index(extents, at) {
                cells[index] = Voxel::Solid;
            }
        }
        Ok(Self { extents, cells })
    }
}

fn linear_index((nx, ny, nz): (u32, u32, u32), coord: Coord3) -> Option<usize> {
    let axis = |v: i32, n: u32| u32::try_from(v).ok().filter(|&v| v < n);
    let x = axis(coord.x, nx)? as usize;
    let y = axis(coord.y, ny)? as usize;
    let z = axis(coord.z, nz)? as usize;
    Some((x * ny as usize + y) * nz as usize + z)
}

fn check_extents((nx, ny, nz): (u32, u32, u32)) -> Result<(), GridError> {
    if nx == 0 || ny == 0 || nz == 0 {
        return Err(GridError::EmptyGrid);
    }
    for (name, value) in [("x", nx), ("y", ny), ("z", nz)] {
        if value > Grid3::<()>::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name,
                value: value.into(),
                max: Grid3::<()>::MAX_DIM.into(),
            });
        }
    }
    let total = u64::from(nx) * u64::from(ny) * u64::from(nz);
    if total > Grid3::<()>::MAX_CELLS {
        return Err(GridError::DimensionTooLarge {
            name: "cells",
            value: total,
            max: Grid3::<()>::MAX_CELLS,
        });
    }
    Ok(())
}

/// X-major iterator over the coordinates of a 3D extent.
#[derive(Clone, Debug)]
pub struct Coords3 {
    extents: (u32, u32, u32),
    next: usize,
    end: usize,
}

impl Coords3 {
    /// Iterate `[0, nx) x [0, ny) x [0, nz)`.
    pub fn new(extents: (u32, u32, u32)) -> Self {
        let (nx, ny, nz) = extents;
        Self {
            extents,
            next: 0,
            end: nx as usize * ny as usize * nz as usize,
        }
    }

    fn coord_at((_, ny, nz): (u32, u32, u32), index: usize) -> Coord3 {
        let (ny, nz) = (ny as usize, nz as usize);
        let z = index % nz;
        let y = (index / nz) % ny;
        let x = index / (nz * ny);
        Coord3::new(x as i32, y as i32, z as i32)
    }
}

impl Iterator for Coords3 {
    type Item = Coord3;

    fn next(&mut self) -> Option<Coord3> {
        if self.next >= self.end {
            return None;
        }
        let c = Self::coord_at(self.extents, self.next);
        self.next += 1;
        Some(c)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.end - self.next;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Coords3 {}
