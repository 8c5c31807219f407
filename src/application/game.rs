use std::time::Instant;

use log::{debug, trace};

use crate::domain::{Algorithm, CellRef, Coord, Grid, LifeError};

/// Game drives the simulation one generation at a time.
/// This is the application layer that coordinates domain logic.
pub struct Game {
    grid: Grid,
    algorithm: Algorithm,
    generation: u64,
}

impl Game {
    /// Start a game at generation 0
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            algorithm: Algorithm::default(),
            generation: 0,
        }
    }

    /// Set the stepping algorithm (builder pattern)
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Advance the whole grid by one generation.
    ///
    /// Every cell stages its next state before any cell commits. An error
    /// means a rule invariant broke; the generation counter is left as it
    /// was and the run should stop.
    pub fn step(&mut self) -> Result<(), LifeError> {
        let start = Instant::now();
        self.algorithm.step(&mut self.grid)?;
        self.generation += 1;

        debug!(
            "Generation {} computed in {:.3} ms ({})",
            self.generation,
            start.elapsed().as_secs_f64() * 1000.0,
            self.algorithm
        );
        trace!("Generation {} population {}", self.generation, self.population());
        Ok(())
    }

    /// Step `generations` times, stopping at the first failure
    pub fn run(&mut self, generations: u64) -> Result<(), LifeError> {
        (0..generations).try_for_each(|_| self.step())
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of live cells, recounted from the grid
    pub fn population(&self) -> usize {
        self.grid.population()
    }

    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    pub fn columns(&self) -> Option<usize> {
        self.grid.columns()
    }

    pub fn cell_at(&self, coord: impl Into<Coord>) -> Option<CellRef<'_>> {
        self.grid.get_cell(coord)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CellKind, Edges, Position, presets};

    fn game_with(kind: CellKind, rows: i64, columns: i64) -> Game {
        Game::new(Grid::plane(rows, columns, kind).unwrap())
    }

    #[test]
    fn test_new_game_starts_at_generation_zero() {
        let game = game_with(CellKind::Conway, 4, 4);
        assert_eq!(game.generation(), 0);
        assert_eq!(game.population(), 0);
        assert_eq!(game.rows(), 4);
        assert_eq!(game.columns(), Some(4));
    }

    #[test]
    fn test_empty_grid_stays_empty() {
        let mut game = game_with(CellKind::Conway, 8, 8);
        game.run(10).unwrap();
        assert_eq!(game.generation(), 10);
        assert_eq!(game.population(), 0);
    }

    #[test]
    fn test_block_still_life() {
        let mut game = game_with(CellKind::Conway, 6, 6);
        presets::block().place_on(game.grid_mut(), 2, 2).unwrap();
        let before = game.grid().clone();

        game.run(5).unwrap();
        assert_eq!(game.grid(), &before);
        assert_eq!(game.population(), 4);
    }

    #[test]
    fn test_blinker_oscillates() {
        let mut game = game_with(CellKind::Conway, 5, 5);
        presets::blinker().place_centered(game.grid_mut()).unwrap();

        game.step().unwrap();
        for row in 1..=3 {
            assert!(game.cell_at((row, 2)).unwrap().is_alive());
        }
        assert!(!game.cell_at((2, 1)).unwrap().is_alive());
        assert_eq!(game.population(), 3);

        game.step().unwrap();
        for column in 1..=3 {
            assert!(game.cell_at((2, column)).unwrap().is_alive());
        }
        assert_eq!(game.population(), 3);
    }

    #[test]
    fn test_glider_wraps_around_torus() {
        let mut grid = Grid::plane(8, 8, CellKind::Conway)
            .unwrap()
            .with_edges(Edges::Wrapping);
        let glider = presets::glider();
        glider.place_on(&mut grid, 3, 5).unwrap();
        let mut game = Game::new(grid);

        game.run(4).unwrap();

        // Moved one cell down and right, wrapping past the corner
        for &(dr, dc) in &glider.cells {
            let row = (4 + dr) % 8;
            let column = (6 + dc) % 8;
            let cell = game.cell_at(Position::new(row, column)).unwrap();
            assert!(cell.is_alive(), "expected live cell at ({row}, {column})");
        }
        assert_eq!(game.population(), 5);
    }

    #[test]
    fn test_highlife_births_on_six() {
        // Six live cells around (2, 2), the centre starts dead
        let neighbors = [(1, 1), (1, 2), (1, 3), (3, 1), (3, 2), (3, 3)];

        let mut births = Vec::new();
        for kind in [CellKind::Conway, CellKind::HighLife] {
            let mut game = game_with(kind, 5, 5);
            for &n in &neighbors {
                game.grid_mut().set_alive(n).unwrap();
            }
            assert_eq!(game.cell_at((2, 2)).unwrap().count_live_neighbors(), 6);
            game.step().unwrap();
            births.push(game.cell_at((2, 2)).unwrap().is_alive());
        }
        assert_eq!(births, vec![false, true]);
    }

    #[test]
    fn test_inert_cell_alive_aborts_step() {
        let mut game = game_with(CellKind::Inert, 3, 3);
        game.step().unwrap();
        assert_eq!(game.generation(), 1);

        game.grid_mut().set_alive((1, 1)).unwrap();
        let err = game.step().unwrap_err();
        assert!(matches!(err, LifeError::InvariantViolation { .. }));
        assert_eq!(game.generation(), 1);
    }

    #[test]
    fn test_line_grid_steps() {
        // 1-D neighborhoods hold at most 2 cells, so Conway cannot sustain life
        let mut line = Grid::line(5, CellKind::Conway).unwrap();
        for row in 1..=3 {
            line.set_alive(row).unwrap();
        }
        let mut game = Game::new(line);
        assert_eq!(game.columns(), None);

        game.step().unwrap();
        assert_eq!(game.population(), 1);
        assert!(game.cell_at(2).unwrap().is_alive());

        game.step().unwrap();
        assert_eq!(game.population(), 0);
    }

    #[test]
    fn test_parallel_game_matches_serial() {
        let mut grid = Grid::plane(40, 25, CellKind::Conway).unwrap();
        grid.randomize(0.35, 99);

        let mut serial = Game::new(grid.clone());
        let mut parallel = Game::new(grid).with_algorithm(Algorithm::Parallel);
        assert_eq!(serial.algorithm(), Algorithm::Raster);
        assert_eq!(parallel.algorithm(), Algorithm::Parallel);
        serial.run(8).unwrap();
        parallel.run(8).unwrap();

        assert_eq!(serial.grid(), parallel.grid());
        assert_eq!(serial.generation(), parallel.generation());
    }
}
