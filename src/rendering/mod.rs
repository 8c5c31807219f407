use std::io::{self, Write};

use crate::application::Game;
use crate::domain::{Dimensionality, Grid};

/// Something that shows the game between generations.
pub trait Renderer {
    /// Show the current state of the game
    fn render(&mut self, game: &Game) -> io::Result<()>;

    /// Called before every step; may block until the next move is wanted.
    /// Does nothing by default, so the game advances as fast as it can.
    fn trigger_move(&mut self, _game: &Game) {}
}

/// Draw the grid as text, one glyph per cell.
/// A line grid is drawn on a single row.
pub fn render_grid(grid: &Grid) -> String {
    let glyphs: Vec<char> = grid.cells().iter().map(|cell| cell.glyph()).collect();
    let width = match grid.dimensionality() {
        Dimensionality::One => glyphs.len(),
        Dimensionality::Two => grid.columns().unwrap_or(glyphs.len()),
    };

    let mut out = String::with_capacity(glyphs.len() + glyphs.len() / width + 1);
    for row in glyphs.chunks(width) {
        out.extend(row);
        out.push('\n');
    }
    out
}

/// Plain text display: a status line followed by the grid.
pub struct TextRenderer<W: Write> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render(&mut self, game: &Game) -> io::Result<()> {
        writeln!(
            self.out,
            "Generation = {}, Population = {}",
            game.generation(),
            game.population()
        )?;
        write!(self.out, "{}", render_grid(game.grid()))?;
        writeln!(self.out)?;
        self.out.flush()
    }
}

/// Status line only, for long runs where the grid would flood the terminal.
pub struct SummaryRenderer<W: Write> {
    out: W,
}

impl<W: Write> SummaryRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Renderer for SummaryRenderer<W> {
    fn render(&mut self, game: &Game) -> io::Result<()> {
        writeln!(
            self.out,
            "Generation = {}, Population = {}",
            game.generation(),
            game.population()
        )
    }
}
