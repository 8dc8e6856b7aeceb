//! Command-line maze explorer.
//!
//! Loads a maze file, runs the selected engine, renders the walk, and
//! maps the outcome to a process exit code: 0 when the exit was found,
//! 1 when no exit is reachable, 2 on load or configuration errors.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use tracing::{error, info};

use bhulbhulaiya::config::Config;
use bhulbhulaiya::engine::{parallel, sequential, ExplorationReport};
use bhulbhulaiya::io::loader;
use bhulbhulaiya::render::{format_grid, AsciiRenderer, Render, SilentRenderer};
use bhulbhulaiya::{Grid, Position, Result};

/// Depth-first maze explorer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Maze file: a `rows cols` header, then `#`/`x`/`e`/`s` cells
    maze: PathBuf,

    /// Explore sibling branches on concurrent tasks
    #[arg(long)]
    parallel: bool,

    /// Suppress frame-by-frame rendering
    #[arg(long)]
    quiet: bool,

    /// Frame delay in milliseconds (overrides the config file)
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Spawned task cap for --parallel (overrides the config file)
    #[arg(long)]
    max_tasks: Option<usize>,

    /// Configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("bhulbhulaiya=info".parse().unwrap()),
        )
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            error!("{}", err);
            ExitCode::from(2)
        }
    }
}

fn run(args: &Args) -> Result<bool> {
    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(delay_ms) = args.delay_ms {
        config.render.frame_delay_ms = delay_ms;
    }
    if let Some(max_tasks) = args.max_tasks {
        config.engine.max_tasks = max_tasks;
    }

    let (grid, start) = loader::load(&args.maze)?;
    info!(
        "Loaded {}x{} maze from {}, start at ({}, {})",
        grid.rows(),
        grid.cols(),
        args.maze.display(),
        start.row,
        start.col
    );

    let report = if args.quiet {
        run_engine(args, &config, &grid, start, &SilentRenderer)
    } else {
        let renderer = AsciiRenderer::new(
            Duration::from_millis(config.render.frame_delay_ms),
            config.render.clear_screen,
        );
        run_engine(args, &config, &grid, start, &renderer)
    };

    if !args.quiet {
        print!("{}", format_grid(&grid));
    }
    if report.found {
        println!("Exit found!");
    } else {
        println!("No exit reachable.");
    }
    info!(
        "{} engine finished in {:.2?}: {} steps, {} cells visited, {} tasks spawned, {} dead ends, {} cancelled",
        if args.parallel { "Parallel" } else { "Sequential" },
        report.elapsed,
        report.steps,
        report.cells_visited,
        report.tasks_spawned,
        report.dead_ends,
        report.cancelled
    );

    Ok(report.found)
}

fn run_engine(
    args: &Args,
    config: &Config,
    grid: &Grid,
    start: Position,
    renderer: &dyn Render,
) -> ExplorationReport {
    if args.parallel {
        parallel::explore(grid, start, renderer, config.engine.max_tasks)
    } else {
        sequential::explore(grid, start, renderer)
    }
}
