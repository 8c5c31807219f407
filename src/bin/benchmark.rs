//! Performance benchmark comparing serial and parallel stepping

use std::time::Instant;

use anyhow::Result;
use gridlife::{Algorithm, CellKind, Game, Grid};

fn benchmark(algorithm: Algorithm, size: i64, iterations: u64) -> Result<f64> {
    let mut grid = Grid::plane(size, size, CellKind::Conway)?;
    grid.randomize(0.3, 42);
    let mut game = Game::new(grid).with_algorithm(algorithm);

    let start = Instant::now();
    game.run(iterations)?;
    Ok(start.elapsed().as_secs_f64() * 1000.0 / iterations as f64)
}

fn main() -> Result<()> {
    println!("=== Cellular Automaton Step Benchmark ===\n");

    let sizes = [50, 100, 250, 500, 1000];
    let iterations = 20;

    println!("{:>10} {:>12} {:>12} {:>12} {:>10}", "Size", "Raster", "Reverse", "Parallel", "Speedup");
    println!("{:-<60}", "");

    for size in sizes {
        let raster_ms = benchmark(Algorithm::Raster, size, iterations)?;
        let reverse_ms = benchmark(Algorithm::ReverseRaster, size, iterations)?;
        let parallel_ms = benchmark(Algorithm::Parallel, size, iterations)?;

        println!(
            "{:>10} {:>12.2} {:>12.2} {:>12.2} {:>9.1}x",
            format!("{}x{}", size, size),
            raster_ms,
            reverse_ms,
            parallel_ms,
            raster_ms / parallel_ms
        );
    }

    let size = 1000;
    let cells = (size * size) as f64;
    let parallel_ms = benchmark(Algorithm::Parallel, size, iterations)?;
    println!(
        "\nParallel at {size}x{size}: {:.2} ms/gen, {:.1}M cells/sec",
        parallel_ms,
        cells / (parallel_ms / 1000.0) / 1_000_000.0
    );
    Ok(())
}
