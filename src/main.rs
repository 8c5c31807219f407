use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use gridlife::config::catalog;
use gridlife::{Config, Game, Renderer, SummaryRenderer, TextRenderer};
use log::info;
use simple_logger::SimpleLogger;

fn main() -> Result<()> {
    let config = Config::parse();
    if config.list {
        print!("{}", catalog());
        return Ok(());
    }
    SimpleLogger::new().with_level(config.log_level()).init()?;
    info!("Starting gridlife v{} ...", env!("CARGO_PKG_VERSION"));

    let grid = config
        .build_grid()
        .context("failed to set up the initial grid")?;
    let mut game = Game::new(grid).with_algorithm(config.algorithm);
    info!(
        "{} ({}) grid of size {}, {:?} edges, {} algorithm",
        game.grid().kind(),
        game.grid().kind().description(),
        game.grid().dimensions(),
        game.grid().edges(),
        game.algorithm()
    );
    let stdout = io::stdout().lock();
    let mut renderer: Box<dyn Renderer> = if config.quiet {
        Box::new(SummaryRenderer::new(stdout))
    } else {
        Box::new(TextRenderer::new(stdout))
    };

    play(&mut game, renderer.as_mut(), config.generations)
}

/// Show the initial state, then step and show each generation
fn play(game: &mut Game, renderer: &mut dyn Renderer, generations: u64) -> Result<()> {
    renderer.render(game)?;
    for _ in 0..generations {
        renderer.trigger_move(game);
        game.step()
            .with_context(|| format!("generation {} aborted", game.generation() + 1))?;
        renderer.render(game)?;
    }
    info!("Finished at generation {} with population {}", game.generation(), game.population());
    Ok(())
}
