//! End-to-end traversal scenarios over the shared fixtures.

use proptest::prelude::*;
use ridge_core::{Coord2, Coord3, SearchError};
use ridge_grid::{ClimbRule, Graph, Grid2, Grid3, OpenAir, PlaneView, Voxel, VolumeView};
use ridge_search::{
    breadth_first_search, breadth_first_search_multi, shortest_path_len, BfsVisitor, NullVisitor,
};
use ridge_test_utils::*;

fn floor(_: &u8, dst: &u8) -> bool {
    *dst != b'#'
}

fn endpoints(g: &Grid2<u8>) -> (Coord2, Coord2) {
    (
        g.position(|&b| b == b'S').unwrap(),
        g.position(|&b| b == b'E').unwrap(),
    )
}

#[derive(Default)]
struct Discoveries(Vec<Coord3>);

impl BfsVisitor<Coord3> for Discoveries {
    fn discover_vertex(&mut self, v: Coord3) {
        self.0.push(v);
    }
}

// ── Heightmap ───────────────────────────────────────────────────

#[test]
fn hill_sample_shortest_climb() {
    let g = hill_sample_grid();
    let view = PlaneView::new(&g, ClimbRule::ascending());
    assert_eq!(
        shortest_path_len(&view, HILL_SAMPLE_START, HILL_SAMPLE_END),
        Ok(HILL_SAMPLE_PART_ONE)
    );
}

#[test]
fn hill_sample_descent_matches_best_start() {
    let g = hill_sample_grid();
    let view = PlaneView::new(&g, ClimbRule::descending());
    let r = breadth_first_search(&view, HILL_SAMPLE_END, NullVisitor).unwrap();
    let best = g
        .positions(|&b| b == b'a' || b == b'S')
        .filter_map(|p| r.distance(p))
        .min();
    assert_eq!(best, Some(HILL_SAMPLE_PART_TWO));
    assert_eq!(r.distance(HILL_SAMPLE_START), Some(HILL_SAMPLE_PART_ONE));
}

#[test]
fn sentinels_side_by_side_are_unreachable() {
    let g = Grid2::parse("SE").unwrap();
    let view = PlaneView::new(&g, ClimbRule::ascending());
    let err = shortest_path_len(&view, Coord2::new(0, 0), Coord2::new(0, 1)).unwrap_err();
    assert!(matches!(err, SearchError::Unreachable { .. }));
    assert_eq!(err.to_string(), "(0, 1) is unreachable from (0, 0)");
}

// ── Walls ───────────────────────────────────────────────────────

#[test]
fn walled_mazes() {
    let one = Grid2::parse(WALLED_ONE_ROUTE).unwrap();
    let two = Grid2::parse(WALLED_TWO_ROUTES).unwrap();
    let (s, e) = endpoints(&one);
    assert_eq!(shortest_path_len(&PlaneView::new(&one, floor), s, e), Ok(10));
    assert_eq!(shortest_path_len(&PlaneView::new(&two, floor), s, e), Ok(2));
}

#[test]
fn opening_a_wall_never_lengthens_paths() {
    let one = Grid2::parse(WALLED_ONE_ROUTE).unwrap();
    let two = Grid2::parse(WALLED_TWO_ROUTES).unwrap();
    let (s, _) = endpoints(&one);
    let closed = PlaneView::new(&one, floor);
    let opened = PlaneView::new(&two, floor);
    let a = breadth_first_search(&closed, s, NullVisitor).unwrap();
    let b = breadth_first_search(&opened, s, NullVisitor).unwrap();
    for v in closed.vertices() {
        if let Some(d) = a.distance(v) {
            let shorter = b.distance(v).unwrap();
            assert!(shorter <= d, "{v}: {shorter} > {d}");
        }
    }
}

// ── Volume ──────────────────────────────────────────────────────

#[test]
fn single_cube_reaches_all_air() {
    let g = single_cube_volume();
    let view = VolumeView::new(&g, OpenAir);
    let mut seen = Discoveries::default();
    let r = breadth_first_search(&view, Coord3::ORIGIN, &mut seen).unwrap();
    assert_eq!(r.reached_count(), 26);
    assert!(!r.is_reached(Coord3::new(1, 1, 1)));
    assert_eq!(seen.0.len(), 26);
    assert_eq!(seen.0[0], Coord3::ORIGIN);

    let surface: usize = g
        .positions(|&v| v == Voxel::Solid)
        .flat_map(|p| view.neighbours(p))
        .filter(|&n| r.is_reached(n))
        .count();
    assert_eq!(surface, 6);
}

#[test]
fn hollow_block_seals_its_centre() {
    let g = Grid3::from_cubes(hollow_block(), 1).unwrap();
    let view = VolumeView::new(&g, OpenAir);
    let r = breadth_first_search(&view, Coord3::ORIGIN, NullVisitor).unwrap();
    assert!(!r.is_reached(Coord3::new(2, 2, 2)));
    assert_eq!(r.reached_count(), 125 - 27);
}

#[test]
fn multi_source_volume_distances() {
    let g = Grid3::from_fn((1, 1, 5), |_| Voxel::Empty).unwrap();
    let view = VolumeView::new(&g, OpenAir);
    let r = breadth_first_search_multi(
        &view,
        [Coord3::new(0, 0, 0), Coord3::new(0, 0, 4)],
        NullVisitor,
    )
    .unwrap();
    assert_eq!(r.distance(Coord3::new(0, 0, 2)), Some(2));
    assert_eq!(r.distance(Coord3::new(0, 0, 3)), Some(1));
}

// ── Properties ──────────────────────────────────────────────────

proptest! {
    #[test]
    fn random_walls_keep_manhattan_lower_bound(
        walls in prop::collection::vec(any::<bool>(), 49),
    ) {
        let g = Grid2::from_fn(7, 7, |p| {
            let i = (p.row * 7 + p.col) as usize;
            if i != 0 && walls[i] { b'#' } else { b'.' }
        })
        .unwrap();
        let view = PlaneView::new(&g, floor);
        let r = breadth_first_search(&view, Coord2::ORIGIN, NullVisitor).unwrap();
        for (v, d) in r.reached() {
            let manhattan = (v.row.unsigned_abs() + v.col.unsigned_abs()) as usize;
            prop_assert!(d >= manhattan);
            prop_assert_eq!(d % 2, manhattan % 2);
        }
    }

    #[test]
    fn shortest_path_agrees_with_traversal(
        walls in prop::collection::vec(any::<bool>(), 36),
        target in 0usize..36,
    ) {
        let g = Grid2::from_fn(6, 6, |p| {
            let i = (p.row * 6 + p.col) as usize;
            if i != 0 && walls[i] { b'#' } else { b'.' }
        })
        .unwrap();
        let view = PlaneView::new(&g, floor);
        let t = view.vertex_at(target).unwrap();
        let r = breadth_first_search(&view, Coord2::ORIGIN, NullVisitor).unwrap();
        match shortest_path_len(&view, Coord2::ORIGIN, t) {
            Ok(d) => prop_assert_eq!(r.distance(t), Some(d)),
            Err(SearchError::Unreachable { .. }) => prop_assert_eq!(r.distance(t), None),
            Err(e) => prop_assert!(false, "unexpected error {}", e),
        }
    }
}
