//! Algorithm enum for selecting how a generation visits its cells.
//!
//! Every algorithm runs the same two phases: all cells stage their next
//! state from the committed snapshot, then all cells commit. The order in
//! which cells are visited inside a phase never changes the result.

use std::fmt;
use std::str::FromStr;

use rayon::prelude::*;

use super::{Cell, Grid, LifeError};

/// Available stepping strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Row-major order, serial processing
    #[default]
    Raster,
    /// Row-major order reversed, serial processing
    ReverseRaster,
    /// Both phases spread over the rayon pool
    Parallel,
}

impl Algorithm {
    /// Get all available algorithms
    pub fn all() -> Vec<Algorithm> {
        vec![Algorithm::Raster, Algorithm::ReverseRaster, Algorithm::Parallel]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Raster => "raster",
            Algorithm::ReverseRaster => "reverse",
            Algorithm::Parallel => "parallel",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Algorithm::Raster => "Row by row, serial",
            Algorithm::ReverseRaster => "Last cell first, serial",
            Algorithm::Parallel => "Rayon work-stealing, joined between phases",
        }
    }

    /// Run one generation over the grid: evolve every cell, then advance
    /// every cell.
    pub fn step(&self, grid: &mut Grid) -> Result<(), LifeError> {
        match self {
            Algorithm::Raster => {
                let order: Vec<usize> = (0..grid.len()).collect();
                step_serial(grid, &order)
            }
            Algorithm::ReverseRaster => {
                let order: Vec<usize> = (0..grid.len()).rev().collect();
                step_serial(grid, &order)
            }
            Algorithm::Parallel => step_parallel(grid),
        }
    }
}

fn step_serial(grid: &mut Grid, order: &[usize]) -> Result<(), LifeError> {
    for &index in order {
        let neighbors = grid.count_live_neighbors(grid.cells()[index].position());
        grid.cells_mut()[index].evolve(neighbors)?;
    }
    for &index in order {
        grid.cells_mut()[index].advance()?;
    }
    Ok(())
}

fn step_parallel(grid: &mut Grid) -> Result<(), LifeError> {
    // Reads only committed liveness, so it can share the grid
    let snapshot: &Grid = grid;
    let counts: Vec<u8> = snapshot
        .cells()
        .par_iter()
        .map(|cell| snapshot.count_live_neighbors(cell.position()))
        .collect();

    // Each worker writes only the staged slot of its own cell
    grid.cells_mut()
        .par_iter_mut()
        .zip(counts.par_iter())
        .try_for_each(|(cell, &n)| cell.evolve(n))?;

    grid.cells_mut().par_iter_mut().try_for_each(Cell::advance)
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = LifeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::all()
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| LifeError::UnknownAlgorithm(s.to_owned()))
    }
}
