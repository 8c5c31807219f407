// Domain layer - Cells, rules, grids and the stepping algorithms
pub mod domain;

// Application layer - Generation driver
pub mod application;

// Infrastructure layer - Seed files, text display, command line
pub mod config;
pub mod input;
pub mod rendering;

// Re-exports for convenience
pub use application::Game;
pub use config::Config;
pub use domain::{Algorithm, Cell, CellKind, Dimensions, Edges, Grid, LifeError, Pattern, presets};
pub use input::{Seed, SeedError};
pub use rendering::{Renderer, SummaryRenderer, TextRenderer};
