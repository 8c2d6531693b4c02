//! Surface area of a droplet of unit cubes.

use crate::error::PuzzleError;
use indexmap::IndexSet;
use ridge_core::{Coord3, GridError};
use ridge_grid::parse::{content_lines, parse_triple};
use ridge_grid::{Graph, Grid3, OpenAir, VolumeView, Voxel};
use ridge_search::{breadth_first_search, NullVisitor};
use tracing::{debug, info, info_span};

/// Thickness of the air shell added around the droplet's bounding box.
pub const SHELL: u32 = 1;

/// A droplet: distinct cube positions and their occupancy grid.
///
/// The grid is shifted by [`SHELL`] on every axis so that air surrounds
/// the droplet on all six sides and the corner `(0,0,0)` is always
/// outside it.
#[derive(Clone, Debug)]
pub struct LavaDroplet {
    cubes: IndexSet<Coord3>,
    grid: Grid3<Voxel>,
}

impl LavaDroplet {
    /// Parse one `x,y,z` cube per line. Blank lines are skipped and
    /// repeated cubes count once.
    pub fn parse(text: &str) -> Result<Self, PuzzleError> {
        let mut cubes = IndexSet::new();
        for (line, row) in content_lines(text) {
            let cube = parse_triple(line, row)?;
            if !cube.is_non_negative() {
                return Err(GridError::malformed_at(
                    line,
                    format!("negative coordinate {cube} is not supported"),
                )
                .into());
            }
            cubes.insert(cube);
        }
        Self::from_cubes(cubes)
    }

    /// Build a droplet from cube positions.
    pub fn from_cubes(cubes: impl IntoIterator<Item = Coord3>) -> Result<Self, PuzzleError> {
        let cubes: IndexSet<Coord3> = cubes.into_iter().collect();
        let grid = Grid3::from_cubes(cubes.iter().copied(), SHELL)?;
        debug!(
            cubes = cubes.len(),
            extents = ?grid.extents(),
            "built droplet grid"
        );
        Ok(Self { cubes, grid })
    }

    /// Distinct cubes in input order, unshifted.
    pub fn cubes(&self) -> &IndexSet<Coord3> {
        &self.cubes
    }

    /// Occupancy grid, shifted by [`SHELL`].
    pub fn grid(&self) -> &Grid3<Voxel> {
        &self.grid
    }

    /// Faces of any cube that touch air, trapped pockets included.
    pub fn part_one(&self) -> Result<usize, PuzzleError> {
        let _span = info_span!("lava_droplet", part = 1).entered();
        let view = VolumeView::new(&self.grid, OpenAir);
        let faces: usize = self
            .grid
            .positions(|&v| v == Voxel::Solid)
            .map(|p| view.out_degree(p))
            .sum();
        info!(faces, "measured surface");
        Ok(faces)
    }

    /// Faces of any cube that touch air connected to the outside.
    pub fn part_two(&self) -> Result<usize, PuzzleError> {
        let _span = info_span!("lava_droplet", part = 2).entered();
        let view = VolumeView::new(&self.grid, OpenAir);
        let outside = breadth_first_search(&view, Coord3::ORIGIN, NullVisitor)?;
        let faces: usize = self
            .grid
            .positions(|&v| v == Voxel::Solid)
            .flat_map(|p| view.neighbours(p))
            .filter(|&n| outside.is_reached(n))
            .count();
        info!(
            faces,
            exterior_air = outside.reached_count(),
            "measured exterior surface"
        );
        Ok(faces)
    }

    /// Air cells reachable from the outer shell, on the shifted grid.
    pub fn exterior_air(&self) -> Result<Grid3<bool>, PuzzleError> {
        let view = VolumeView::new(&self.grid, OpenAir);
        let outside = breadth_first_search(&view, Coord3::ORIGIN, NullVisitor)?;
        Ok(Grid3::from_fn(self.grid.extents(), |p| outside.is_reached(p))?)
    }
}
