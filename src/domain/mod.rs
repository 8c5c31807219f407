mod algorithm;
mod cell;
mod error;
mod grid;
mod patterns;
mod rules;

pub use algorithm::Algorithm;
pub use cell::{Cell, Position};
pub use error::LifeError;
pub use grid::{CellRef, Coord, Dimensionality, Dimensions, Edges, Grid};
pub use patterns::{Pattern, presets};
pub use rules::CellKind;
