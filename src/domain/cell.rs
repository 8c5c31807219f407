use std::fmt;

use super::{CellKind, LifeError};

/// Where a cell sits in its grid. One-dimensional grids use column 0.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub column: usize,
}

impl Position {
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// Cell is the unit of the automaton: a committed liveness plus the
/// liveness staged for the next generation.
///
/// Staging and committing are separate calls so that every cell of a
/// generation decides from the same snapshot. `evolve` never touches the
/// committed state, and `advance` refuses to run before `evolve`.
#[derive(Clone, PartialEq, Debug)]
pub struct Cell {
    alive: bool,
    staged: Option<bool>,
    position: Position,
    kind: CellKind,
}

impl Cell {
    /// Create a dead cell
    pub const fn new(kind: CellKind, position: Position) -> Self {
        Self {
            alive: false,
            staged: None,
            position,
            kind,
        }
    }

    /// Check if the cell is currently alive
    pub const fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn make_alive(&mut self) {
        self.alive = true;
    }

    pub fn make_dead(&mut self) {
        self.alive = false;
    }

    pub const fn kind(&self) -> CellKind {
        self.kind
    }

    pub const fn position(&self) -> Position {
        self.position
    }

    /// Liveness staged by `evolve`, or `None` if this generation has not
    /// been evolved yet
    pub const fn will_be_alive(&self) -> Option<bool> {
        self.staged
    }

    pub const fn glyph(&self) -> char {
        self.kind.glyph(self.alive)
    }

    /// Stage the next state from the number of live neighbors.
    pub fn evolve(&mut self, live_neighbors: u8) -> Result<(), LifeError> {
        if self.kind == CellKind::Inert && self.alive {
            return Err(LifeError::InvariantViolation {
                position: self.position,
                reason: "inert cell found alive",
            });
        }
        self.staged = Some(self.kind.next_state(self.alive, live_neighbors));
        Ok(())
    }

    /// Adopt the staged state as the current one.
    pub fn advance(&mut self) -> Result<(), LifeError> {
        match self.staged.take() {
            Some(next) => {
                self.alive = next;
                Ok(())
            }
            None => Err(LifeError::InvariantViolation {
                position: self.position,
                reason: "advanced before evolving",
            }),
        }
    }
}
