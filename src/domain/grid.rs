use std::fmt;

use log::warn;
use rand::{Rng, SeedableRng, rngs::StdRng};

use super::{Cell, CellKind, LifeError, Position};

/// Requested grid size. Signed so that bad sizes coming from a loader can be
/// rejected here rather than wrapping around.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Dimensions {
    /// A single row of cells
    Line(i64),
    /// Rows by columns
    Plane(i64, i64),
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimensions::Line(len) => write!(f, "{len}"),
            Dimensions::Plane(rows, columns) => write!(f, "{rows}, {columns}"),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Dimensionality {
    One,
    Two,
}

/// What happens to neighbor lookups that fall off the grid.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Edges {
    /// Off-grid neighbors do not exist
    #[default]
    Bounded,
    /// Opposite edges are adjacent (ring in 1-D, torus in 2-D)
    Wrapping,
}

/// A possibly out-of-range coordinate used for lookups.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Coord {
    pub row: i64,
    pub column: i64,
}

impl From<i64> for Coord {
    fn from(row: i64) -> Self {
        Self { row, column: 0 }
    }
}

impl From<(i64, i64)> for Coord {
    fn from((row, column): (i64, i64)) -> Self {
        Self { row, column }
    }
}

impl From<i32> for Coord {
    fn from(row: i32) -> Self {
        Self::from(i64::from(row))
    }
}

impl From<(i32, i32)> for Coord {
    fn from((row, column): (i32, i32)) -> Self {
        Self::from((i64::from(row), i64::from(column)))
    }
}

impl From<Position> for Coord {
    fn from(p: Position) -> Self {
        Self {
            row: p.row as i64,
            column: p.column as i64,
        }
    }
}

/// Moore neighborhood
#[rustfmt::skip]
const PLANE_OFFSETS: [(i64, i64); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// Left and right along the line
const LINE_OFFSETS: [(i64, i64); 2] = [(-1, 0), (1, 0)];

/// Grid owns every cell of the automaton in a dense row-major array.
/// Cells refer back to the grid only through their position, so the grid is
/// the single owner and a cell never outlives it.
#[derive(Clone, PartialEq, Debug)]
pub struct Grid {
    dimensionality: Dimensionality,
    edges: Edges,
    rows: usize,
    columns: usize,
    kind: CellKind,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid with all cells initially dead
    pub fn new(dimensions: Dimensions, kind: CellKind) -> Result<Self, LifeError> {
        let invalid = || LifeError::Dimension(dimensions);
        let positive = |n: i64| {
            (n > 0)
                .then(|| usize::try_from(n).ok())
                .flatten()
                .ok_or_else(invalid)
        };

        let (dimensionality, rows, columns) = match dimensions {
            Dimensions::Line(len) => (Dimensionality::One, positive(len)?, 1),
            Dimensions::Plane(rows, columns) => {
                (Dimensionality::Two, positive(rows)?, positive(columns)?)
            }
        };
        let total = rows.checked_mul(columns).ok_or_else(invalid)?;

        // Sizes that fit in usize can still be far too large to allocate
        let mut cells = Vec::new();
        cells.try_reserve_exact(total).map_err(|_| invalid())?;
        for row in 0..rows {
            for column in 0..columns {
                cells.push(Cell::new(kind, Position::new(row, column)));
            }
        }

        Ok(Self {
            dimensionality,
            edges: Edges::default(),
            rows,
            columns,
            kind,
            cells,
        })
    }

    /// One-dimensional grid of `len` cells
    pub fn line(len: i64, kind: CellKind) -> Result<Self, LifeError> {
        Self::new(Dimensions::Line(len), kind)
    }

    /// Two-dimensional grid
    pub fn plane(rows: i64, columns: i64, kind: CellKind) -> Result<Self, LifeError> {
        Self::new(Dimensions::Plane(rows, columns), kind)
    }

    /// Switch edge handling (builder pattern)
    pub fn with_edges(mut self, edges: Edges) -> Self {
        self.edges = edges;
        self
    }

    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns, `None` for one-dimensional grids
    pub const fn columns(&self) -> Option<usize> {
        match self.dimensionality {
            Dimensionality::One => None,
            Dimensionality::Two => Some(self.columns),
        }
    }

    pub const fn dimensions(&self) -> Dimensions {
        match self.dimensionality {
            Dimensionality::One => Dimensions::Line(self.rows as i64),
            Dimensionality::Two => Dimensions::Plane(self.rows as i64, self.columns as i64),
        }
    }

    pub const fn dimensionality(&self) -> Dimensionality {
        self.dimensionality
    }

    pub const fn edges(&self) -> Edges {
        self.edges
    }

    pub const fn kind(&self) -> CellKind {
        self.kind
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false, construction rejects empty grids
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Convert a coordinate to an index into the cell array, if it is on the grid
    fn index_of(&self, coord: Coord) -> Option<usize> {
        let row = usize::try_from(coord.row).ok()?;
        let column = usize::try_from(coord.column).ok()?;
        (row < self.rows && column < self.columns).then(|| row * self.columns + column)
    }

    /// Get cell at a coordinate; anything off the grid is `None`
    pub fn get_cell(&self, coord: impl Into<Coord>) -> Option<CellRef<'_>> {
        let index = self.index_of(coord.into())?;
        Some(CellRef {
            grid: self,
            cell: &self.cells[index],
        })
    }

    pub fn get_cell_mut(&mut self, coord: impl Into<Coord>) -> Option<&mut Cell> {
        let index = self.index_of(coord.into())?;
        self.cells.get_mut(index)
    }

    /// Mark a cell alive, failing if it is off the grid
    pub fn set_alive(&mut self, coord: impl Into<Coord>) -> Result<(), LifeError> {
        let coord = coord.into();
        match self.get_cell_mut(coord) {
            Some(cell) => {
                cell.make_alive();
                Ok(())
            }
            None => Err(LifeError::OutOfRange {
                row: coord.row,
                column: coord.column,
            }),
        }
    }

    /// Positions adjacent to `position` under this grid's shape and edge mode
    pub fn neighbor_positions(&self, position: Position) -> impl Iterator<Item = Position> + '_ {
        let offsets: &'static [(i64, i64)] = match self.dimensionality {
            Dimensionality::One => &LINE_OFFSETS,
            Dimensionality::Two => &PLANE_OFFSETS,
        };
        let rows = self.rows as i64;
        let columns = self.columns as i64;

        offsets.iter().filter_map(move |&(dr, dc)| {
            let row = position.row as i64 + dr;
            let column = position.column as i64 + dc;
            let neighbor = match self.edges {
                Edges::Bounded => {
                    let index = self.index_of(Coord { row, column })?;
                    self.cells[index].position()
                }
                Edges::Wrapping => Position::new(
                    row.rem_euclid(rows) as usize,
                    column.rem_euclid(columns) as usize,
                ),
            };
            // Wrapping on a tiny grid can land back on the cell itself
            (neighbor != position).then_some(neighbor)
        })
    }

    /// Count neighbors whose committed state is alive
    pub fn count_live_neighbors(&self, position: Position) -> u8 {
        self.neighbor_positions(position)
            .filter(|&p| self.cells[p.row * self.columns + p.column].is_alive())
            .count() as u8
    }

    /// Every cell in row-major order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// Every position in row-major order
    pub fn positions(&self) -> impl DoubleEndedIterator<Item = Position> + '_ {
        self.cells.iter().map(Cell::position)
    }

    /// Iterate over all cells together with their grid
    pub fn iter_cells(&self) -> impl Iterator<Item = CellRef<'_>> + '_ {
        self.cells.iter().map(move |cell| CellRef { grid: self, cell })
    }

    /// Number of live cells, counted fresh every call
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Clear all cells to dead state
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(Cell::make_dead);
    }

    /// Fill the grid at random, reproducibly for a given seed.
    /// Each cell is alive with probability `density`.
    pub fn randomize(&mut self, density: f64, seed: u64) {
        let density = if (0.0..=1.0).contains(&density) {
            density
        } else {
            warn!("Random density {density} outside [0, 1], clamping");
            if density.is_nan() { 0.0 } else { density.clamp(0.0, 1.0) }
        };

        let mut rng = StdRng::seed_from_u64(seed);
        for cell in &mut self.cells {
            if rng.random_bool(density) {
                cell.make_alive();
            } else {
                cell.make_dead();
            }
        }
    }
}

/// A cell viewed through the grid that owns it, so it can look at its
/// neighbors.
#[derive(Clone, Copy, Debug)]
pub struct CellRef<'a> {
    grid: &'a Grid,
    cell: &'a Cell,
}

impl<'a> CellRef<'a> {
    pub const fn is_alive(&self) -> bool {
        self.cell.is_alive()
    }

    pub const fn kind(&self) -> CellKind {
        self.cell.kind()
    }

    pub const fn position(&self) -> Position {
        self.cell.position()
    }

    pub const fn glyph(&self) -> char {
        self.cell.glyph()
    }

    pub const fn will_be_alive(&self) -> Option<bool> {
        self.cell.will_be_alive()
    }

    pub fn count_live_neighbors(&self) -> u8 {
        self.grid.count_live_neighbors(self.cell.position())
    }
}
