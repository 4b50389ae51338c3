//! Full games between two sides.
//!
//! A game ends as soon as the side to move cannot place a tile; that side
//! loses and the side that moved last wins. Openings can be randomized with
//! a seeded generator so that self-play runs are reproducible.

use log::debug;

use crate::board::{Board, Move, MoveError, Orientation, str_move};
use crate::movegen::legal_moves;
use crate::search::get_best_move;

/// A game in progress.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    to_move: Orientation,
    history: Vec<(Orientation, Move)>,
}

impl Game {
    /// Start a game from `board` with `first` to move.
    pub fn new(board: Board, first: Orientation) -> Self {
        Self {
            board,
            to_move: first,
            history: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Orientation {
        self.to_move
    }

    /// Moves played so far, oldest first.
    pub fn history(&self) -> &[(Orientation, Move)] {
        &self.history
    }

    /// Play a move for the side to move and pass the turn.
    pub fn play(&mut self, mv: Move) -> Result<(), MoveError> {
        self.board = self.board.apply(mv.0, mv.1, self.to_move)?;
        self.history.push((self.to_move, mv));
        self.to_move = self.to_move.opposite();
        Ok(())
    }

    /// The side to move has no legal placement.
    pub fn is_over(&self) -> bool {
        !self.board.has_any_legal_move(self.to_move)
    }

    /// The side that made the last move, once the game is over.
    pub fn winner(&self) -> Option<Orientation> {
        self.is_over().then(|| self.to_move.opposite())
    }

    /// Play up to `plies` uniformly random legal moves.
    ///
    /// Stops early if the game ends. Returns the number of moves played.
    pub fn random_opening(&mut self, rng: &mut fastrand::Rng, plies: usize) -> usize {
        for played in 0..plies {
            let moves = legal_moves(&self.board, self.to_move);
            if moves.is_empty() {
                return played;
            }
            let mv = moves[rng.usize(..moves.len())];
            self.play(mv).expect("generated moves are legal");
        }
        plies
    }

    /// Let each side pick its moves by search at its own depth until the game ends.
    ///
    /// Returns the winner.
    pub fn play_out(&mut self, depth_vertical: usize, depth_horizontal: usize) -> Orientation {
        loop {
            if let Some(winner) = self.winner() {
                return winner;
            }
            let depth = match self.to_move {
                Orientation::Vertical => depth_vertical,
                Orientation::Horizontal => depth_horizontal,
            };
            // A zero depth never yields a move, so search at least one ply.
            let result = get_best_move(&self.board, self.to_move, depth.max(1));
            let mv = result
                .best_move
                .expect("side to move has a legal move");
            debug!(
                "{} plays {} (value {}, nodes {})",
                self.to_move,
                str_move(Some(mv)),
                result.value,
                result.nodes
            );
            self.play(mv).expect("searched moves are legal");
        }
    }
}
