use super::{Grid, LifeError};

/// Represents a pattern that can be placed on the grid
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub rows: usize,
    pub columns: usize,
    pub cells: Vec<(usize, usize)>, // Relative (row, column) of alive cells
}

impl Pattern {
    /// Create a new pattern from alive cell coordinates
    pub fn new(name: &'static str, description: &'static str, cells: Vec<(usize, usize)>) -> Self {
        let rows = cells.iter().map(|(r, _)| *r).max().unwrap_or(0) + 1;
        let columns = cells.iter().map(|(_, c)| *c).max().unwrap_or(0) + 1;
        Self { name, description, rows, columns, cells }
    }

    /// Place pattern on grid with its top-left corner at (row, column).
    /// Fails without a partial placement if any cell would land off the grid.
    pub fn place_on(&self, grid: &mut Grid, row: i64, column: i64) -> Result<(), LifeError> {
        let targets: Vec<(i64, i64)> = self
            .cells
            .iter()
            .map(|&(dr, dc)| (row + dr as i64, column + dc as i64))
            .collect();

        if let Some(&(r, c)) = targets.iter().find(|&&t| grid.get_cell(t).is_none()) {
            return Err(LifeError::OutOfRange { row: r, column: c });
        }
        for target in targets {
            grid.set_alive(target)?;
        }
        Ok(())
    }

    /// Place pattern in the middle of the grid
    pub fn place_centered(&self, grid: &mut Grid) -> Result<(), LifeError> {
        let rows = grid.rows() as i64;
        let columns = grid.columns().unwrap_or(1) as i64;
        let row = (rows - self.rows as i64) / 2;
        let column = (columns - self.columns as i64) / 2;
        self.place_on(grid, row, column)
    }
}

/// Classic patterns library
pub mod presets {
    use super::*;

    /// Glider - simplest spaceship, moves diagonally
    #[rustfmt::skip]
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            "Moves diagonally (period 4)",
            vec![
                         (0, 1),
                                 (1, 2),
                (2, 0), (2, 1), (2, 2),
            ],
        )
    }

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::new(
            "Blinker",
            "Oscillator (period 2)",
            vec![(1, 0), (1, 1), (1, 2)],
        )
    }

    /// Toad - period 2 oscillator
    #[rustfmt::skip]
    pub fn toad() -> Pattern {
        Pattern::new(
            "Toad",
            "Oscillator (period 2)",
            vec![
                        (0, 1), (0, 2), (0, 3),
                (1, 0), (1, 1), (1, 2),
            ],
        )
    }

    /// Beacon - period 2 oscillator
    #[rustfmt::skip]
    pub fn beacon() -> Pattern {
        Pattern::new(
            "Beacon",
            "Oscillator (period 2)",
            vec![
                (0, 0), (0, 1),
                (1, 0),
                                        (2, 3),
                                (3, 2), (3, 3),
            ],
        )
    }

    /// Lightweight Spaceship (LWSS)
    #[rustfmt::skip]
    pub fn lwss() -> Pattern {
        Pattern::new(
            "LWSS",
            "Lightweight Spaceship (period 4)",
            vec![
                        (0, 1),                 (0, 4),
                (1, 0),
                (2, 0),                         (2, 4),
                (3, 0), (3, 1), (3, 2), (3, 3),
            ],
        )
    }

    /// R-pentomino - classic methuselah (stabilizes after 1103 generations)
    #[rustfmt::skip]
    pub fn r_pentomino() -> Pattern {
        Pattern::new(
            "R-pentomino",
            "Methuselah - stabilizes at gen 1103",
            vec![
                        (0, 1), (0, 2),
                (1, 0), (1, 1),
                        (2, 1),
            ],
        )
    }

    /// HighLife replicator - copies itself every 12 generations
    #[rustfmt::skip]
    pub fn replicator() -> Pattern {
        Pattern::new(
            "Replicator",
            "HighLife only - self-copying (period 12)",
            vec![
                                (0, 2), (0, 3), (0, 4),
                        (1, 1),                 (1, 4),
                (2, 0),                         (2, 4),
                (3, 0),                 (3, 3),
                (4, 0), (4, 1), (4, 2),
            ],
        )
    }

    /// Block - simple still life
    #[rustfmt::skip]
    pub fn block() -> Pattern {
        Pattern::new(
            "Block",
            "Still life",
            vec![
                (0, 0), (0, 1),
                (1, 0), (1, 1),
            ],
        )
    }

    /// Get all available patterns
    pub fn all_patterns() -> Vec<Pattern> {
        vec![
            glider(),
            blinker(),
            toad(),
            beacon(),
            lwss(),
            r_pentomino(),
            replicator(),
            block(),
        ]
    }

    /// Look a pattern up by name, ignoring case
    pub fn find(name: &str) -> Option<Pattern> {
        all_patterns()
            .into_iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }
}
