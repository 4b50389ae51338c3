//! Dominoes-Rust: a Minimax engine for a two-player tile placement game.
//!
//! Two players take turns placing 1x2 tiles on a rectangular grid. One
//! player always places tiles vertically, the other horizontally; a player
//! who cannot place a tile on their turn loses. The engine searches the game
//! tree with depth-limited Minimax and Alpha-Beta pruning, scoring positions
//! at the cutoff by mobility difference.
//!
//! ## Modules
//!
//! - [`constants`] - Default dimensions and search parameters
//! - [`board`] - Grid state, placement legality and errors
//! - [`movegen`] - Move generation and static evaluation
//! - [`search`] - Alpha-Beta search
//! - [`game`] - Full games and self-play
//!
//! ## Example
//!
//! ```
//! use dominoes_rust::board::{Board, Orientation};
//! use dominoes_rust::search::get_best_move;
//!
//! // Block the centre with a horizontal tile
//! let board = Board::new(3, 3).apply(1, 1, Orientation::Horizontal).unwrap();
//!
//! // Search four plies ahead for the vertical player
//! let result = get_best_move(&board, Orientation::Vertical, 4);
//! println!("Best move: {:?} (value {})", result.best_move, result.value);
//! ```

pub mod board;
pub mod constants;
pub mod game;
pub mod movegen;
pub mod search;
