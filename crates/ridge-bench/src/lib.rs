//! Synthetic inputs for benchmarking ridge search.
//!
//! - [`synthetic_heightmap`]: a noisy diagonal ramp from `S` to `E`
//! - [`synthetic_droplet`]: a pitted ball of cubes with internal pockets
//!
//! Both are deterministic in their seed so benchmark runs are comparable.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use ridge_core::{Coord3, GridError};
use ridge_grid::Grid2;

fn mix(seed: u64, i: u64) -> u64 {
    (seed ^ i)
        .wrapping_mul(6364136223846793007)
        .wrapping_add(1442695040888963407)
        .rotate_right(29)
}

/// A `rows x cols` heightmap rising from `S` at the top-left to `E` at the
/// bottom-right.
///
/// Elevation follows the anti-diagonal, one level per step at most, with
/// roughly one cell in seven sunk two levels deeper.
pub fn synthetic_heightmap(rows: u32, cols: u32, seed: u64) -> Result<Grid2<u8>, GridError> {
    let span = u64::from(rows + cols).saturating_sub(2).max(25);
    let last = (rows as i32 - 1, cols as i32 - 1);
    Grid2::from_fn(rows, cols, |p| {
        if (p.row, p.col) == (0, 0) {
            return b'S';
        }
        if (p.row, p.col) == last {
            return b'E';
        }
        let along = (p.row + p.col) as u64;
        let mut level = (along * 25 / span) as u8;
        let i = p.row as u64 * u64::from(cols) + p.col as u64;
        if mix(seed, i) % 7 == 0 {
            level = level.saturating_sub(2);
        }
        b'a' + level
    })
}

/// Cubes of a ball of radius `radius`, with about a third of the interior
/// left as air.
pub fn synthetic_droplet(radius: i32, seed: u64) -> Vec<Coord3> {
    let d = 2 * radius;
    let mut cubes = Vec::new();
    for x in 0..=d {
        for y in 0..=d {
            for z in 0..=d {
                let (dx, dy, dz) = (x - radius, y - radius, z - radius);
                if dx * dx + dy * dy + dz * dz > radius * radius {
                    continue;
                }
                let i = ((x * (d + 1) + y) * (d + 1) + z) as u64;
                if mix(seed, i) % 3 != 0 {
                    cubes.push(Coord3::new(x, y, z));
                }
            }
        }
    }
    cubes
}
