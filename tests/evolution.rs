//! Properties of the two-phase update, checked over random grids.

use gridlife::{Algorithm, CellKind, Dimensions, Edges, Game, Grid, LifeError};
use proptest::prelude::*;

fn kind_strategy() -> impl Strategy<Value = CellKind> {
    prop_oneof![Just(CellKind::Conway), Just(CellKind::HighLife)]
}

fn edges_strategy() -> impl Strategy<Value = Edges> {
    prop_oneof![Just(Edges::Bounded), Just(Edges::Wrapping)]
}

fn dims_strategy() -> impl Strategy<Value = Dimensions> {
    prop_oneof![
        (1..40_i64).prop_map(Dimensions::Line),
        (1..16_i64, 1..16_i64).prop_map(|(r, c)| Dimensions::Plane(r, c)),
    ]
}

fn random_grid(dims: Dimensions, kind: CellKind, edges: Edges, density: f64, seed: u64) -> Grid {
    let mut grid = Grid::new(dims, kind).unwrap().with_edges(edges);
    grid.randomize(density, seed);
    grid
}

proptest! {
    /// Population after a step matches the rule applied to the pre-step snapshot.
    #[test]
    fn population_follows_pre_step_snapshot(
        dims in dims_strategy(),
        kind in kind_strategy(),
        edges in edges_strategy(),
        density in 0.0..=1.0_f64,
        seed in any::<u64>(),
    ) {
        let grid = random_grid(dims, kind, edges, density, seed);
        let expected: Vec<bool> = grid
            .iter_cells()
            .map(|cell| kind.next_state(cell.is_alive(), cell.count_live_neighbors()))
            .collect();

        let mut game = Game::new(grid);
        game.step().unwrap();

        let actual: Vec<bool> = game.grid().cells().iter().map(|c| c.is_alive()).collect();
        prop_assert_eq!(&actual, &expected);
        prop_assert_eq!(game.population(), expected.iter().filter(|&&alive| alive).count());
        prop_assert_eq!(game.generation(), 1);
    }

    /// Visiting cells forwards, backwards or in parallel gives the same grid.
    #[test]
    fn visit_order_does_not_matter(
        dims in dims_strategy(),
        kind in kind_strategy(),
        edges in edges_strategy(),
        density in 0.1..0.6_f64,
        seed in any::<u64>(),
        generations in 1..6_u64,
    ) {
        let grid = random_grid(dims, kind, edges, density, seed);
        let mut forward = Game::new(grid.clone());
        let mut backward = Game::new(grid.clone()).with_algorithm(Algorithm::ReverseRaster);
        let mut parallel = Game::new(grid).with_algorithm(Algorithm::Parallel);

        forward.run(generations).unwrap();
        backward.run(generations).unwrap();
        parallel.run(generations).unwrap();

        prop_assert_eq!(forward.grid(), backward.grid());
        prop_assert_eq!(forward.grid(), parallel.grid());
    }

    /// One past any edge is absent, never a panic.
    #[test]
    fn lookups_past_the_edge_are_absent(dims in dims_strategy()) {
        let grid = Grid::new(dims, CellKind::Conway).unwrap();
        let rows = grid.rows() as i64;
        match grid.columns() {
            None => {
                prop_assert!(grid.get_cell(rows - 1).is_some());
                prop_assert!(grid.get_cell(rows).is_none());
                prop_assert!(grid.get_cell(-1).is_none());
            }
            Some(columns) => {
                let columns = columns as i64;
                prop_assert!(grid.get_cell((rows - 1, columns - 1)).is_some());
                prop_assert!(grid.get_cell((rows, 0)).is_none());
                prop_assert!(grid.get_cell((0, columns)).is_none());
                prop_assert!(grid.get_cell((-1, 0)).is_none());
                prop_assert!(grid.get_cell((0, -1)).is_none());
            }
        }
    }

    /// Non-positive sizes never produce a grid.
    #[test]
    fn non_positive_sizes_are_rejected(bad in -5..=0_i64, good in 1..10_i64) {
        for dims in [
            Dimensions::Line(bad),
            Dimensions::Plane(bad, good),
            Dimensions::Plane(good, bad),
        ] {
            prop_assert_eq!(Grid::new(dims, CellKind::HighLife), Err(LifeError::Dimension(dims)));
        }
    }
}

#[test]
fn empty_grid_is_a_fixed_point() {
    for kind in CellKind::all() {
        let mut game = Game::new(Grid::plane(12, 9, kind).unwrap());
        game.run(25).unwrap();
        assert_eq!(game.population(), 0);
    }
}

#[test]
fn block_is_a_still_life_indefinitely() {
    let mut grid = Grid::plane(10, 10, CellKind::Conway).unwrap();
    gridlife::presets::block().place_on(&mut grid, 4, 4).unwrap();
    let start = grid.clone();

    let mut game = Game::new(grid);
    for _ in 0..50 {
        game.step().unwrap();
        assert_eq!(game.grid(), &start);
    }
}

#[test]
fn replicator_grows_under_highlife_only() {
    let pattern = gridlife::presets::replicator();

    let mut populations = Vec::new();
    for kind in [CellKind::Conway, CellKind::HighLife] {
        let mut grid = Grid::plane(40, 40, kind).unwrap();
        pattern.place_centered(&mut grid).unwrap();
        let mut game = Game::new(grid);
        game.run(12).unwrap();
        populations.push(game.population());
    }

    // After one period HighLife holds two copies of the 12-cell replicator
    assert_eq!(populations[1], 24);
    assert_ne!(populations[0], populations[1]);
}
