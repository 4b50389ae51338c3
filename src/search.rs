//! Depth-limited Minimax search with Alpha-Beta pruning.
//!
//! The maximizing and minimizing halves of the search are one procedure
//! parametrized by a [`Role`]. Roles alternate every ply together with the
//! tile orientation, and the root is always the maximizing side.
//!
//! Leaves are scored by [`evaluate`] from the point of view of the side to
//! move *at the leaf*, not from the root's point of view.
//!
//! The board is mutated in place: every child is explored under a
//! [`Placed`](crate::board::Placed) guard, so the tile is lifted again on
//! every exit path, including a cutoff.
//!
//! ## Example
//!
//! ```
//! use dominoes_rust::board::{Board, Orientation};
//! use dominoes_rust::search::get_best_move;
//!
//! let board = Board::new(3, 3);
//! let result = get_best_move(&board, Orientation::Vertical, 1);
//! assert_eq!(result.best_move, Some((0, 0)));
//! assert_eq!(result.nodes, 6);
//! ```

use log::{debug, trace};

use crate::board::{Board, Move, Orientation, str_move};
use crate::movegen::{evaluate, legal_moves};

/// Outcome of a search from the root.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// Best move for the side to move, or `None` if it has no legal move
    /// or the depth limit is zero.
    pub best_move: Option<Move>,
    /// Minimax value of the root.
    pub value: f64,
    /// Number of leaves evaluated.
    pub nodes: u64,
}

/// Which side of the minimax a node belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Role {
    Max,
    Min,
}

/// Alpha-Beta bounds.
#[derive(Copy, Clone, Debug)]
struct Window {
    alpha: f64,
    beta: f64,
}

impl Window {
    const FULL: Window = Window {
        alpha: f64::NEG_INFINITY,
        beta: f64::INFINITY,
    };
}

impl Role {
    fn opposite(self) -> Self {
        match self {
            Role::Max => Role::Min,
            Role::Min => Role::Max,
        }
    }

    /// Starting value before any child has been seen.
    fn worst(self) -> f64 {
        match self {
            Role::Max => f64::NEG_INFINITY,
            Role::Min => f64::INFINITY,
        }
    }

    /// Strict comparison, so the first of several equal moves is kept.
    fn improves(self, candidate: f64, best: f64) -> bool {
        match self {
            Role::Max => candidate > best,
            Role::Min => candidate < best,
        }
    }

    /// Raise alpha (Max) or lower beta (Min) to the best value found so far.
    fn tighten(self, window: &mut Window, best: f64) {
        match self {
            Role::Max => window.alpha = window.alpha.max(best),
            Role::Min => window.beta = window.beta.min(best),
        }
    }

    /// Whether the remaining siblings can no longer influence an ancestor.
    fn cuts_off(self, window: Window, best: f64) -> bool {
        match self {
            Role::Max => best >= window.beta,
            Role::Min => best <= window.alpha,
        }
    }
}

/// Search driver holding the depth limit and the leaf counter.
///
/// The counter is a plain field, so a searcher must not be shared between
/// threads while a search is running.
pub struct Searcher {
    limit: usize,
    pruning: bool,
    nodes: u64,
}

impl Searcher {
    /// Create a searcher with the given depth limit in plies.
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            pruning: true,
            nodes: 0,
        }
    }

    /// Enable or disable Alpha-Beta cutoffs. Without them the search is plain Minimax.
    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }

    /// Leaves evaluated by the most recent search.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Find the best move for `orientation` on `board`.
    pub fn search(&mut self, board: &Board, orientation: Orientation) -> SearchResult {
        self.nodes = 0;
        let mut scratch = board.clone();
        let (value, best_move) =
            self.alpha_beta(&mut scratch, orientation, Role::Max, Window::FULL, 0);
        debug!(
            "{orientation} to move, depth {}: best {} value {value} nodes {} (pruning {})",
            self.limit,
            str_move(best_move),
            self.nodes,
            self.pruning
        );
        SearchResult {
            best_move,
            value,
            nodes: self.nodes,
        }
    }

    fn alpha_beta(
        &mut self,
        board: &mut Board,
        orientation: Orientation,
        role: Role,
        mut window: Window,
        depth: usize,
    ) -> (f64, Option<Move>) {
        if depth == self.limit || !board.has_any_legal_move(orientation) {
            self.nodes += 1;
            return (evaluate(board, orientation), None);
        }

        let mut best_value = role.worst();
        let mut best_move = None;

        for mv in legal_moves(board, orientation) {
            let (value, _) = {
                let mut child = board
                    .place(mv, orientation)
                    .expect("generated moves are legal");
                self.alpha_beta(&mut child, orientation.opposite(), role.opposite(), window, depth + 1)
            };

            if role.improves(value, best_value) {
                best_value = value;
                best_move = Some(mv);
            }

            if self.pruning {
                role.tighten(&mut window, best_value);
                if role.cuts_off(window, best_value) {
                    trace!("{role:?} cutoff at depth {depth} after {}", str_move(Some(mv)));
                    break;
                }
            }
        }

        (best_value, best_move)
    }
}

/// Best move for `orientation` with Alpha-Beta pruning, searching `limit` plies.
pub fn get_best_move(board: &Board, orientation: Orientation, limit: usize) -> SearchResult {
    Searcher::new(limit).search(board, orientation)
}

/// Same as [`get_best_move`] but without pruning.
pub fn minimax(board: &Board, orientation: Orientation, limit: usize) -> SearchResult {
    Searcher::new(limit)
        .with_pruning(false)
        .search(board, orientation)
}
