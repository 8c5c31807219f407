//! Initial-state files.
//!
//! The first line holds the grid size: `rows columns` for a plane or a single
//! length for a line. Every following line names one live cell, `row column`
//! (or just `row` on a line). Blank lines and lines starting with `#` are
//! skipped.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;
use thiserror::Error;

use crate::domain::{CellKind, Coord, Dimensions, Grid, LifeError};

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("seed is empty, expected dimensions on the first line")]
    Empty,

    #[error("invalid dimensions at line {line}")]
    Dimensions { line: usize },

    #[error("could not read coordinates at line {line}")]
    Coordinates { line: usize },

    #[error("cannot read seed file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Grid(#[from] LifeError),
}

/// A parsed initial state: the grid size and the cells that start alive.
#[derive(Clone, Debug, PartialEq)]
pub struct Seed {
    pub dimensions: Dimensions,
    pub live: Vec<Coord>,
}

/// Parse every whitespace-separated field of a line as an integer
fn integers(line: &str) -> Option<Vec<i64>> {
    line.split_whitespace().map(|t| t.parse().ok()).collect()
}

impl Seed {
    pub fn parse(text: &str) -> Result<Self, SeedError> {
        let mut lines = text
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'));

        let (line, header) = lines.next().ok_or(SeedError::Empty)?;
        let dimensions = match integers(header).as_deref() {
            Some(&[len]) => Dimensions::Line(len),
            Some(&[rows, columns]) => Dimensions::Plane(rows, columns),
            _ => return Err(SeedError::Dimensions { line }),
        };

        let live = lines
            .map(|(line, text)| match (dimensions, integers(text).as_deref()) {
                (Dimensions::Line(_), Some(&[row])) => Ok(Coord::from(row)),
                (Dimensions::Plane(..), Some(&[row, column])) => Ok(Coord { row, column }),
                _ => Err(SeedError::Coordinates { line }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { dimensions, live })
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SeedError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| SeedError::Io {
            path: path.to_owned(),
            source,
        })?;
        Self::parse(&text)
    }

    /// Construct the grid and bring the listed cells to life
    pub fn build(&self, kind: CellKind) -> Result<Grid, LifeError> {
        let mut grid = Grid::new(self.dimensions, kind)?;
        for &coord in &self.live {
            debug!("Setting initially live cell at {}, {}", coord.row, coord.column);
            grid.set_alive(coord)?;
        }
        Ok(grid)
    }

    /// Read a seed file and build its grid in one go
    pub fn load(path: impl AsRef<Path>, kind: CellKind) -> Result<Grid, SeedError> {
        Ok(Self::from_path(path)?.build(kind)?)
    }
}
