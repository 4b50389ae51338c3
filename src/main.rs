//! Dominoes-Rust: command line front end for the search engine.
//!
//! ## Usage
//!
//! - `dominoes-rust` - Show the demo position
//! - `dominoes-rust search` - Search a position built from options
//! - `dominoes-rust selfplay` - Play a full game between two engines
//!
//! Set `RUST_LOG=debug` to see per-search diagnostics.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use log::info;

use dominoes_rust::board::{Board, Move, Orientation, parse_move, str_move};
use dominoes_rust::constants::{
    DEFAULT_COLS, DEFAULT_DEPTH, DEFAULT_OPENING_PLIES, DEFAULT_ROWS, DEFAULT_SEED,
};
use dominoes_rust::game::Game;
use dominoes_rust::search::{SearchResult, Searcher};

/// Dominoes-Rust: Minimax with Alpha-Beta pruning for a tile placement game
#[derive(Parser)]
#[command(name = "dominoes-rust")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the demo: vertical to move on a 3x3 board with the centre blocked
    Demo,
    /// Search a single position
    Search(SearchArgs),
    /// Play a full game between two engines
    Selfplay(SelfplayArgs),
}

#[derive(Args)]
struct SearchArgs {
    /// Number of rows
    #[arg(long, default_value_t = DEFAULT_ROWS)]
    rows: usize,
    /// Number of columns
    #[arg(long, default_value_t = DEFAULT_COLS)]
    cols: usize,
    /// Side to move (v or h)
    #[arg(long, default_value = "v")]
    to_move: Orientation,
    /// Depth limit in plies
    #[arg(long, default_value_t = DEFAULT_DEPTH)]
    depth: usize,
    /// Pre-place a vertical tile at row,col (repeatable)
    #[arg(long, value_parser = parse_move)]
    vertical: Vec<Move>,
    /// Pre-place a horizontal tile at row,col (repeatable)
    #[arg(long, value_parser = parse_move)]
    horizontal: Vec<Move>,
    /// Disable Alpha-Beta cutoffs
    #[arg(long)]
    no_pruning: bool,
}

#[derive(Args)]
struct SelfplayArgs {
    /// Number of rows
    #[arg(long, default_value_t = DEFAULT_ROWS)]
    rows: usize,
    /// Number of columns
    #[arg(long, default_value_t = DEFAULT_COLS)]
    cols: usize,
    /// Side that moves first (v or h)
    #[arg(long, default_value = "v")]
    first: Orientation,
    /// Depth limit of the vertical engine
    #[arg(long, default_value_t = DEFAULT_DEPTH)]
    depth_vertical: usize,
    /// Depth limit of the horizontal engine
    #[arg(long, default_value_t = DEFAULT_DEPTH)]
    depth_horizontal: usize,
    /// Random plies before the engines take over
    #[arg(long, default_value_t = DEFAULT_OPENING_PLIES)]
    opening: usize,
    /// Seed for the random opening
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Search(args)) => run_search(&args),
        Some(Commands::Selfplay(args)) => run_selfplay(&args),
        Some(Commands::Demo) | None => run_demo(),
    }
}

fn run_demo() -> Result<()> {
    println!("Dominoes-Rust: Minimax with Alpha-Beta pruning\n");

    let board = Board::new(3, 3)
        .apply(1, 1, Orientation::Horizontal)
        .context("seeding the demo position")?;
    println!("Current board (# = occupied):");
    println!("{board}");

    println!("Thinking...");
    let result = Searcher::new(4).search(&board, Orientation::Vertical);
    print_result(&result);
    Ok(())
}

fn run_search(args: &SearchArgs) -> Result<()> {
    let mut board = Board::new(args.rows, args.cols);
    let seeds = args
        .vertical
        .iter()
        .map(|&mv| (mv, Orientation::Vertical))
        .chain(args.horizontal.iter().map(|&mv| (mv, Orientation::Horizontal)));
    for (mv, orientation) in seeds {
        board = board
            .apply(mv.0, mv.1, orientation)
            .with_context(|| format!("pre-placing {orientation} tile at {}", str_move(Some(mv))))?;
    }
    println!("{board}");

    info!(
        "searching {}x{} for {} at depth {}",
        args.rows, args.cols, args.to_move, args.depth
    );
    let result = Searcher::new(args.depth)
        .with_pruning(!args.no_pruning)
        .search(&board, args.to_move);
    print_result(&result);
    Ok(())
}

fn run_selfplay(args: &SelfplayArgs) -> Result<()> {
    let mut game = Game::new(Board::new(args.rows, args.cols), args.first);
    let mut rng = fastrand::Rng::with_seed(args.seed);
    let opening = game.random_opening(&mut rng, args.opening);
    info!("played {opening} random opening plies with seed {}", args.seed);

    let winner = game.play_out(args.depth_vertical, args.depth_horizontal);
    for (ply, (orientation, mv)) in game.history().iter().enumerate() {
        println!("{:>3}. {orientation:<10} {}", ply + 1, str_move(Some(*mv)));
    }
    println!("\n{}", game.board());
    println!("Winner: {winner} ({} has no move)", winner.opposite());
    Ok(())
}

fn print_result(result: &SearchResult) {
    println!("Selected move: {}", str_move(result.best_move));
    println!("Heuristic score: {}", result.value);
    println!("Leaf nodes evaluated: {}", result.nodes);
}
