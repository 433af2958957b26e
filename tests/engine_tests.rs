//! End-to-end turn-loop tests.
//!
//! These drive whole games through the public API: scripted win, draw, and
//! rejection scenarios, strict alternation, termination bounds, and
//! reproducibility of seeded random play.

use gridline::{
    Board, FirstEmptyProvider, GameEngine, GameError, GameOutcome, Player, Position,
    RandomProvider, ScriptedProvider, Symbol,
};

fn scripted(symbol: Symbol, moves: &[(usize, usize)]) -> Player {
    Player::new(symbol, Box::new(ScriptedProvider::new(moves.to_vec())))
}

fn random(symbol: Symbol, seed: u64) -> Player {
    Player::new(symbol, Box::new(RandomProvider::new(seed)))
}

/// The first player completes row 0 across three of its turns
/// while the opponent plays elsewhere and never blocks.
#[test]
fn test_first_player_wins_row_zero() {
    let x = scripted(Symbol::X, &[(0, 0), (0, 1), (0, 2)]);
    let o = scripted(Symbol::O, &[(1, 0), (1, 1)]);
    let mut engine = GameEngine::with_standard_board(x, o).unwrap();

    // First four turns leave the game open.
    for _ in 0..4 {
        assert_eq!(engine.play_turn().unwrap(), GameOutcome::InProgress);
    }

    // X's third placement completes row 0.
    assert_eq!(engine.play_turn().unwrap(), GameOutcome::Won(Symbol::X));
    assert_eq!(engine.winner(), Some(Symbol::X));
    assert_eq!(engine.turns_taken(), 5);
    assert!(engine.is_over());
}

/// The classic draw fill X O X / X O O / O X X.
#[test]
fn test_classic_draw_game() {
    let x = scripted(Symbol::X, &[(0, 0), (0, 2), (1, 0), (2, 1), (2, 2)]);
    let o = scripted(Symbol::O, &[(0, 1), (1, 1), (1, 2), (2, 0)]);
    let mut engine = GameEngine::with_standard_board(x, o).unwrap();

    assert_eq!(engine.play_to_end().unwrap(), GameOutcome::Draw);
    assert_eq!(engine.winner(), None);
    assert_eq!(engine.turns_taken(), 9);
    assert!(engine.board().is_full());
}

/// A move proposed at (3, 0) on a 3×3 board is rejected as
/// out of bounds and leaves the game untouched.
#[test]
fn test_out_of_bounds_move_rejected() {
    let x = scripted(Symbol::X, &[(3, 0)]);
    let o = scripted(Symbol::O, &[]);
    let mut engine = GameEngine::with_standard_board(x, o).unwrap();

    let err = engine.play_turn().unwrap_err();
    match err {
        GameError::InvalidMove { symbol, source } => {
            assert_eq!(symbol, Symbol::X);
            assert_eq!(
                *source,
                GameError::OutOfBounds {
                    pos: Position::new(3, 0),
                    rows: 3,
                    columns: 3
                }
            );
        }
        other => panic!("expected InvalidMove, got {:?}", other),
    }

    assert_eq!(engine.outcome(), GameOutcome::InProgress);
    assert_eq!(engine.turns_taken(), 0);
    assert_eq!(engine.board().empty_positions().count(), 9);
}

/// A move proposed at an already-occupied cell is rejected as
/// occupied.
#[test]
fn test_occupied_cell_move_rejected() {
    let x = scripted(Symbol::X, &[(0, 0)]);
    let o = scripted(Symbol::O, &[(0, 0)]);
    let mut engine = GameEngine::with_standard_board(x, o).unwrap();

    engine.play_turn().unwrap();
    let err = engine.play_turn().unwrap_err();

    match err {
        GameError::InvalidMove { symbol, source } => {
            assert_eq!(symbol, Symbol::O);
            assert_eq!(
                *source,
                GameError::CellOccupied {
                    pos: Position::new(0, 0),
                    occupant: Symbol::X
                }
            );
        }
        other => panic!("expected InvalidMove, got {:?}", other),
    }

    // The rejected move consumed no turn; O is still to play.
    assert_eq!(engine.turns_taken(), 1);
    assert_eq!(engine.active_symbol(), Symbol::O);
}

/// The loop alternates strictly between the two configured players.
#[test]
fn test_strict_alternation() {
    let mut engine =
        GameEngine::with_standard_board(random(Symbol::X, 1), random(Symbol::O, 2)).unwrap();

    let mut expected = Symbol::X;
    while !engine.is_over() {
        assert_eq!(engine.active_symbol(), expected);
        engine.play_turn().unwrap();
        expected = expected.opponent();
    }
}

/// Random games terminate within rows × columns turns on boards of assorted
/// shapes, and the mark counts reflect strict alternation.
#[test]
fn test_termination_bound() {
    for (rows, columns, seed) in [(3, 3, 11), (4, 4, 12), (2, 5, 13), (5, 2, 14), (1, 1, 15)] {
        let mut engine = GameEngine::new(
            rows,
            columns,
            random(Symbol::X, seed),
            random(Symbol::O, seed + 100),
        )
        .unwrap();

        let outcome = engine.play_to_end().unwrap();
        assert!(outcome.is_terminal());
        assert!(engine.turns_taken() <= rows * columns);

        let x_cells = count(engine.board(), Symbol::X);
        let o_cells = count(engine.board(), Symbol::O);
        assert!(x_cells == o_cells || x_cells == o_cells + 1);
    }
}

/// A 1×1 board is a degenerate but legal game: the single cell is a full
/// row, so the first move wins.
#[test]
fn test_one_by_one_board() {
    let mut engine =
        GameEngine::new(1, 1, random(Symbol::X, 3), random(Symbol::O, 4)).unwrap();

    assert_eq!(engine.play_to_end().unwrap(), GameOutcome::Won(Symbol::X));
    assert_eq!(engine.turns_taken(), 1);
}

/// Seeded random games replay identically: same seeds, same final board.
#[test]
fn test_seeded_games_are_reproducible() {
    let final_board = |(xs, os): (u64, u64)| -> Board {
        let mut engine =
            GameEngine::with_standard_board(random(Symbol::X, xs), random(Symbol::O, os))
                .unwrap();
        engine.play_to_end().unwrap();
        engine.board().clone()
    };

    assert_eq!(final_board((7, 9)), final_board((7, 9)));
}

/// After a win the engine reports the winner through the query surface and
/// refuses further turns.
#[test]
fn test_result_reporting_after_win() {
    let x = Player::new(Symbol::X, Box::new(FirstEmptyProvider::new()));
    let o = Player::new(Symbol::O, Box::new(FirstEmptyProvider::new()));
    let mut engine = GameEngine::with_standard_board(x, o).unwrap();

    let outcome = engine.play_to_end().unwrap();
    assert_eq!(outcome, engine.outcome());
    assert_eq!(engine.winner(), outcome.winner());
    assert_eq!(engine.active_symbol(), engine.winner().unwrap());
    assert_eq!(engine.play_turn().unwrap_err(), GameError::GameOver);
}

/// An exhausted scripted provider surfaces as an InvalidMove contract
/// violation rather than corrupting the board.
#[test]
fn test_exhausted_script_is_contract_violation() {
    let x = scripted(Symbol::X, &[(0, 0)]);
    let o = scripted(Symbol::O, &[]);
    let mut engine = GameEngine::with_standard_board(x, o).unwrap();

    engine.play_turn().unwrap();
    assert!(matches!(
        engine.play_turn().unwrap_err(),
        GameError::InvalidMove { .. }
    ));
}

fn count(board: &Board, symbol: Symbol) -> usize {
    (0..board.rows())
        .flat_map(|row| (0..board.columns()).map(move |col| Position::new(row, col)))
        .filter(|&pos| board.symbol_at(pos) == Some(symbol))
        .count()
}
