//! Command-line configuration.

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use log::LevelFilter;

use crate::domain::{Algorithm, CellKind, Dimensions, Edges, Grid, Pattern, presets};
use crate::input::{Seed, SeedError};

#[derive(Parser, Debug)]
#[command(name = "gridlife", version, about = "Cellular automaton simulator")]
pub struct Config {
    /// Initial-state file: dimensions on the first line, then one live cell per line
    #[arg(
        required_unless_present_any = ["pattern", "random", "list"],
        conflicts_with_all = ["pattern", "random"]
    )]
    pub seed: Option<PathBuf>,

    /// Rule every cell evolves by, by name or glyph tag (see --list)
    #[arg(short, long, default_value_t = CellKind::Conway)]
    pub rule: CellKind,

    /// Number of generations to run
    #[arg(short, long, default_value_t = 10)]
    pub generations: u64,

    /// Stepping strategy (see --list)
    #[arg(short, long, default_value_t = Algorithm::Raster)]
    pub algorithm: Algorithm,

    /// Join opposite edges (ring / torus) instead of treating them as walls
    #[arg(long)]
    pub wrap: bool,

    /// Start from a preset pattern placed in the middle of the grid
    #[arg(short, long, value_parser = parse_pattern, conflicts_with = "random")]
    pub pattern: Option<Pattern>,

    /// Fill the grid at random with this density in [0, 1]
    #[arg(long)]
    pub random: Option<f64>,

    /// Grid size for pattern and random runs, ROWSxCOLUMNS or LENGTH
    #[arg(long, value_parser = parse_size, default_value = "20x40")]
    pub size: Dimensions,

    /// Seed for the random fill
    #[arg(long, default_value_t = 0)]
    pub rng_seed: u64,

    /// Print only the generation and population lines
    #[arg(short, long)]
    pub quiet: bool,

    /// Show the available rules, algorithms and patterns, then exit
    #[arg(long)]
    pub list: bool,

    /// More logging, repeat for more (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

fn parse_size(s: &str) -> Result<Dimensions, String> {
    let number = |t: &str| {
        t.trim()
            .parse::<i64>()
            .map_err(|e| format!("invalid size {s:?}: {e}"))
    };
    match s.split_once(['x', 'X']) {
        Some((rows, columns)) => Ok(Dimensions::Plane(number(rows)?, number(columns)?)),
        None => Ok(Dimensions::Line(number(s)?)),
    }
}

fn parse_pattern(s: &str) -> Result<Pattern, String> {
    presets::find(s).ok_or_else(|| {
        let names: Vec<_> = presets::all_patterns()
            .iter()
            .map(|p| format!("{} ({})", p.name, p.description))
            .collect();
        format!("unknown pattern {s:?}, expected one of: {}", names.join(", "))
    })
}

/// Everything selectable from the command line, with descriptions
pub fn catalog() -> String {
    let mut out = String::from("Rules:\n");
    for kind in CellKind::all() {
        out += &format!(
            "  {:<12} {}  [{} {}]\n",
            kind.name(),
            kind.description(),
            kind.glyph(true),
            kind.glyph(false)
        );
    }
    out += "Algorithms:\n";
    for algorithm in Algorithm::all() {
        out += &format!("  {:<12} {}\n", algorithm.name(), algorithm.description());
    }
    out += "Patterns:\n";
    for pattern in presets::all_patterns() {
        out += &format!("  {:<12} {}\n", pattern.name, pattern.description);
    }
    out
}

impl Config {
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    pub fn edges(&self) -> Edges {
        if self.wrap { Edges::Wrapping } else { Edges::Bounded }
    }

    /// Build the starting grid from whichever source was chosen
    pub fn build_grid(&self) -> Result<Grid, SeedError> {
        let grid = match (&self.seed, &self.pattern, self.random) {
            (Some(path), _, _) => Seed::load(path, self.rule)?,
            (None, Some(pattern), _) => {
                let mut grid = Grid::new(self.size, self.rule)?;
                pattern.place_centered(&mut grid)?;
                grid
            }
            (None, None, density) => {
                let mut grid = Grid::new(self.size, self.rule)?;
                grid.randomize(density.unwrap_or(0.0), self.rng_seed);
                grid
            }
        };
        Ok(grid.with_edges(self.edges()))
    }
}
