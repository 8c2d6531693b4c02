//! Reusable inputs with known answers.
//!
//! - [`HILL_SAMPLE`]: the 5x8 heightmap; 31 steps from `S`, 29 from the
//!   best `a`.
//! - [`LAVA_PAIR`]: two touching cubes; 10 exposed faces.
//! - [`LAVA_SAMPLE`]: 13 cubes with one trapped air cell; 64 faces, 58 of
//!   them exterior.
//! - [`WALLED_ONE_ROUTE`] / [`WALLED_TWO_ROUTES`]: flat mazes that differ
//!   by one wall cell.

use ridge_core::{Coord2, Coord3};
use ridge_grid::{Grid2, Grid3, Voxel};

pub const HILL_SAMPLE: &str = "\
Sabqponm
abcryxxl
accszExk
acctuvwj
abdefghi
";

pub const HILL_SAMPLE_START: Coord2 = Coord2::new(0, 0);
pub const HILL_SAMPLE_END: Coord2 = Coord2::new(2, 5);
pub const HILL_SAMPLE_PART_ONE: usize = 31;
pub const HILL_SAMPLE_PART_TWO: usize = 29;

pub const LAVA_PAIR: &str = "1,1,1\n2,1,1\n";
pub const LAVA_PAIR_SURFACE: usize = 10;

pub const LAVA_SAMPLE: &str = "\
2,2,2
1,2,2
3,2,2
2,1,2
2,3,2
2,2,1
2,2,3
2,2,4
2,2,6
1,2,5
3,2,5
2,1,5
2,3,5
";

pub const LAVA_SAMPLE_PART_ONE: usize = 64;
pub const LAVA_SAMPLE_PART_TWO: usize = 58;

/// Flat floor with a wall forcing the long way round: `S` to `E` is 10.
pub const WALLED_ONE_ROUTE: &str = "\
S....
####.
E....
";

/// Same floor with the left wall cell open: `S` to `E` is 2.
pub const WALLED_TWO_ROUTES: &str = "\
S....
.###.
E....
";

/// [`HILL_SAMPLE`] parsed.
pub fn hill_sample_grid() -> Grid2<u8> {
    Grid2::parse(HILL_SAMPLE).expect("HILL_SAMPLE parses")
}

/// 3x3x3 grid whose only solid cell is the centre.
pub fn single_cube_volume() -> Grid3<Voxel> {
    Grid3::from_cubes([Coord3::new(0, 0, 0)], 1).expect("single cube builds")
}

/// The 26 cubes of a 3x3x3 block with its centre removed.
///
/// 60 exposed faces, 54 of them exterior.
pub fn hollow_block() -> Vec<Coord3> {
    let mut cubes = Vec::with_capacity(26);
    for x in 0..3 {
        for y in 0..3 {
            for z in 0..3 {
                if (x, y, z) != (1, 1, 1) {
                    cubes.push(Coord3::new(x, y, z));
                }
            }
        }
    }
    cubes
}

/// Render cubes as puzzle input, one `x,y,z` line each.
pub fn cubes_to_text(cubes: &[Coord3]) -> String {
    cubes
        .iter()
        .map(|c| format!("{},{},{}\n", c.x, c.y, c.z))
        .collect()
}
