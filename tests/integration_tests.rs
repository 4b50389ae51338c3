//! Integration tests for dominoes-rust
//!
//! Covers the public search API end to end: the documented scenarios,
//! agreement between the pruned and unpruned searches on random positions,
//! and soundness of move generation.

use dominoes_rust::board::{Board, Orientation};
use dominoes_rust::game::Game;
use dominoes_rust::movegen::{count_legal_moves, evaluate, legal_moves};
use dominoes_rust::search::{SearchResult, get_best_move, minimax};

// =============================================================================
// Helper functions for setting up test positions
// =============================================================================

const ORIENTATIONS: [Orientation; 2] = [Orientation::Vertical, Orientation::Horizontal];

/// The demo position: a horizontal tile at (1,1) on a 3x3 board.
fn blocked_centre() -> Board {
    Board::new(3, 3)
        .apply(1, 1, Orientation::Horizontal)
        .unwrap()
}

/// A random position of at most 4x4 with a few tiles already placed.
fn random_board(rng: &mut fastrand::Rng) -> Board {
    let rows = rng.usize(0..=4);
    let cols = rng.usize(0..=4);
    let mut game = Game::new(Board::new(rows, cols), *rng.choice(&ORIENTATIONS).unwrap());
    let plies = rng.usize(0..=3);
    game.random_opening(rng, plies);
    game.board().clone()
}

// =============================================================================
// Documented scenarios
// =============================================================================

#[test]
fn test_empty_3x3_depth_one() {
    let result = get_best_move(&Board::new(3, 3), Orientation::Vertical, 1);
    assert_eq!(result.best_move, Some((0, 0)));
    // After (0,0) horizontal and vertical both have four placements left.
    assert_eq!(result.value, 0.0);
    assert_eq!(
        result.nodes,
        legal_moves(&Board::new(3, 3), Orientation::Vertical).len() as u64
    );
    assert_eq!(result.nodes, 6);
}

#[test]
fn test_blocked_centre_depth_four() {
    let board = blocked_centre();
    let pruned = get_best_move(&board, Orientation::Vertical, 4);
    let plain = minimax(&board, Orientation::Vertical, 4);

    let mv = pruned.best_move.expect("vertical has moves");
    assert!(board.is_legal(mv.0, mv.1, Orientation::Vertical));
    assert!(pruned.value.is_finite());
    assert!(pruned.nodes > 1);
    assert!(pruned.nodes <= plain.nodes);
    assert_eq!(pruned.value, plain.value);
    assert_eq!(pruned.best_move, plain.best_move);
}

#[test]
fn test_single_cell_board() {
    for orientation in ORIENTATIONS {
        for limit in [0, 1, 6] {
            assert_eq!(
                get_best_move(&Board::new(1, 1), orientation, limit),
                SearchResult {
                    best_move: None,
                    value: 0.0,
                    nodes: 1
                }
            );
        }
    }
}

#[test]
fn test_degenerate_board() {
    for (rows, cols) in [(0, 0), (0, 5), (5, 0)] {
        let result = get_best_move(&Board::new(rows, cols), Orientation::Vertical, 3);
        assert_eq!(result.best_move, None);
        assert_eq!(result.value, 0.0);
        assert_eq!(result.nodes, 1);
    }
}

#[test]
fn test_depth_zero_is_a_leaf() {
    let board = blocked_centre();
    for orientation in ORIENTATIONS {
        assert!(board.has_any_legal_move(orientation));
        let result = get_best_move(&board, orientation, 0);
        assert_eq!(result.best_move, None);
        assert_eq!(result.value, evaluate(&board, orientation));
        assert_eq!(result.nodes, 1);
    }
}

// =============================================================================
// Search properties
// =============================================================================

#[test]
fn test_pruning_equivalence_random_positions() {
    let mut rng = fastrand::Rng::with_seed(0x5eed);
    let mut pruned_total = 0;
    let mut plain_total = 0;

    for _ in 0..60 {
        let board = random_board(&mut rng);
        let orientation = *rng.choice(&ORIENTATIONS).unwrap();
        let limit = rng.usize(0..=3);

        let pruned = get_best_move(&board, orientation, limit);
        let plain = minimax(&board, orientation, limit);
        assert_eq!(pruned.value, plain.value, "value differs on\n{board}");
        assert_eq!(pruned.best_move, plain.best_move, "move differs on\n{board}");
        assert!(pruned.nodes <= plain.nodes, "more nodes with pruning on\n{board}");

        pruned_total += pruned.nodes;
        plain_total += plain.nodes;
    }

    // A full 4x4 board at depth 3 always offers cutoffs.
    let board = Board::new(4, 4);
    let pruned = get_best_move(&board, Orientation::Vertical, 3);
    let plain = minimax(&board, Orientation::Vertical, 3);
    assert_eq!(pruned.value, plain.value);
    assert_eq!(pruned.best_move, plain.best_move);
    pruned_total += pruned.nodes;
    plain_total += plain.nodes;
    assert!(pruned_total < plain_total);
}

#[test]
fn test_terminal_detection_at_any_depth() {
    // Vertical is stuck, horizontal still has one move.
    let board: Board = "# . . #\n. # # .".parse().unwrap();
    assert!(legal_moves(&board, Orientation::Vertical).is_empty());
    assert_eq!(legal_moves(&board, Orientation::Horizontal), vec![(0, 1)]);
    for limit in 0..5 {
        let result = get_best_move(&board, Orientation::Vertical, limit);
        assert_eq!(result.best_move, None);
        assert_eq!(result.value, -1.0);
        assert_eq!(result.nodes, 1);
    }
}

#[test]
fn test_determinism() {
    let board = blocked_centre();
    let first = get_best_move(&board, Orientation::Vertical, 4);
    for _ in 0..3 {
        assert_eq!(get_best_move(&board, Orientation::Vertical, 4), first);
    }
}

#[test]
fn test_search_does_not_modify_board() {
    let board = blocked_centre();
    let copy = board.clone();
    let _ = get_best_move(&board, Orientation::Horizontal, 5);
    assert_eq!(board, copy);
}

// =============================================================================
// Move generation
// =============================================================================

#[test]
fn test_legal_moves_sound_and_complete() {
    let mut rng = fastrand::Rng::with_seed(42);
    for _ in 0..100 {
        let board = random_board(&mut rng);
        for orientation in ORIENTATIONS {
            let moves = legal_moves(&board, orientation);
            assert_eq!(moves.len(), count_legal_moves(&board, orientation));
            assert_eq!(!moves.is_empty(), board.has_any_legal_move(orientation));

            let mut sorted = moves.clone();
            sorted.sort();
            assert_eq!(moves, sorted, "moves not in row-major order");

            for row in 0..board.rows() + 1 {
                for col in 0..board.cols() + 1 {
                    assert_eq!(
                        moves.contains(&(row, col)),
                        board.is_legal(row, col, orientation),
                        "{orientation} at {row},{col} on\n{board}"
                    );
                }
            }
        }
    }
}

// =============================================================================
// Games
// =============================================================================

#[test]
fn test_selfplay_loser_cannot_move() {
    let mut rng = fastrand::Rng::with_seed(3);
    let mut game = Game::new(Board::new(4, 4), Orientation::Horizontal);
    game.random_opening(&mut rng, 2);
    let winner = game.play_out(2, 1);

    assert!(!game.board().has_any_legal_move(winner.opposite()));
    let (last_side, _) = *game.history().last().unwrap();
    assert_eq!(last_side, winner);
}
