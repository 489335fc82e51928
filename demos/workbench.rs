//! Interactive A* workbench in the terminal, using crossterm.
//!
//! Run: cargo run --bin workbench

use clap::Parser;
use gridway_core::app::{App, AppConfig};
use gridway_crossterm::CrosstermDriver;
use gridway_demos::Workbench;
use gridway_search::Heuristic;
use rand::{SeedableRng, rngs::StdRng};

/// Interactive A* pathfinding workbench.
#[derive(Parser)]
#[command(name = "workbench")]
#[command(author, version, about)]
struct Cli {
    /// Board height in cells
    #[arg(long, default_value = "30")]
    rows: i32,

    /// Board width in cells
    #[arg(long, default_value = "30")]
    cols: i32,

    /// Obstacle density used by the randomize key (0.0 - 1.0)
    #[arg(long, default_value = "0.2")]
    ratio: f64,

    /// Distance estimator: manhattan or euclidean
    #[arg(long, default_value = "manhattan")]
    heuristic: Heuristic,

    /// Seed for reproducible wall layouts
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if cli.cols < 2 || cli.rows < 1 {
        eprintln!("Error: the board needs at least 2 columns and 1 row");
        std::process::exit(2);
    }

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let model = Workbench::new(cli.cols, cli.rows, cli.ratio, cli.heuristic, rng);
    let width = model.screen_width();
    let height = model.screen_height();
    let driver = CrosstermDriver::new();
    let mut app = App::new(AppConfig {
        model,
        driver,
        width,
        height,
    });

    if let Err(e) = app.run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
