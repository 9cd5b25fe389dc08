//! Tests for the standard rules engine
//!
//! - Draw detection (stalemate, fifty-move rule, insufficient material)
//! - Checkmate and check
//! - Castling, promotion and move rejection

use chess_session::{MoveRejected, MoveRequest, PositionEngine, PositionError, Side, StandardRules};

fn sq(name: &str) -> chess_session::Square {
    name.parse().unwrap()
}

fn load(fen: &str) -> chess_session::Position {
    StandardRules::new().load(fen).unwrap()
}

fn play(fen: &str, from: &str, to: &str) -> Result<chess_session::MoveOutcome<chess_session::Position>, MoveRejected> {
    let rules = StandardRules::new();
    rules.try_move(&load(fen), MoveRequest::new(sq(from), sq(to)))
}

// =============================================================================
// Stalemate Tests
// =============================================================================

#[test]
fn test_stalemate_king_in_corner() {
    let rules = StandardRules::new();
    let pos = load("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1");

    assert!(rules.is_game_over(&pos));
    assert!(rules.is_draw(&pos));
    assert!(!rules.is_checkmate(&pos));
    assert!(!rules.is_check(&pos), "Stalemate means king is not in check");
}

#[test]
fn test_stalemate_king_and_pawn_endgame() {
    let rules = StandardRules::new();
    let pos = load("6k1/6P1/6K1/8/8/8/8/8 b - - 0 1");

    assert!(rules.is_draw(&pos));
    assert!(!rules.is_checkmate(&pos));
}

// =============================================================================
// Fifty-Move Rule Tests
// =============================================================================

#[test]
fn test_fifty_move_rule_at_100_halfmoves() {
    let rules = StandardRules::new();
    let pos = load("8/8/8/4k3/8/4K3/8/4R3 w - - 100 60");

    assert!(rules.is_draw(&pos), "halfmove clock 100 should be a draw");
    assert!(rules.is_game_over(&pos));
}

#[test]
fn test_fifty_move_rule_at_99_halfmoves() {
    let rules = StandardRules::new();
    let pos = load("8/8/8/4k3/8/4K3/8/4R3 w - - 99 60");

    assert!(!rules.is_draw(&pos));
    assert!(!rules.is_game_over(&pos));
}

#[test]
fn test_fifty_move_rule_reset_on_pawn_move() {
    let rules = StandardRules::new();
    let outcome = play("8/8/8/4k3/8/3K4/4P3/8 w - - 99 60", "e2", "e3").unwrap();

    assert_eq!(outcome.san, "e3");
    assert!(!rules.is_draw(&outcome.position));
    assert!(rules.serialize(&outcome.position).ends_with(" 0 60"));
}

// =============================================================================
// Insufficient Material Tests
// =============================================================================

#[test]
fn test_insufficient_material_draws() {
    let rules = StandardRules::new();
    for fen in [
        "8/8/8/4k3/8/4K3/8/8 w - - 0 1",
        "8/8/8/4k3/8/4KB2/8/8 w - - 0 1",
        "8/8/8/4k3/8/4KN2/8/8 w - - 0 1",
        "8/8/4b3/4k3/8/4K3/8/8 w - - 0 1",
        "8/8/4n3/4k3/8/4K3/8/8 w - - 0 1",
        // Both bishops on dark squares
        "5b2/8/8/4k3/8/4K3/8/2B5 w - - 0 1",
    ] {
        let pos = load(fen);
        assert!(rules.is_draw(&pos), "{fen} should be insufficient material");
        assert!(rules.is_game_over(&pos), "{fen} should be game over");
    }
}

#[test]
fn test_sufficient_material_keeps_playing() {
    let rules = StandardRules::new();
    for fen in [
        // Opposite colour bishops
        "2b5/8/8/4k3/8/4K3/8/2B5 w - - 0 1",
        "8/8/8/4k3/8/4K3/4P3/8 w - - 0 1",
        "8/8/8/4k3/8/4K3/8/4R3 w - - 0 1",
        "8/8/8/4k3/8/4K3/8/4Q3 w - - 0 1",
        "8/8/8/4k3/8/4K3/3NN3/8 w - - 0 1",
    ] {
        let pos = load(fen);
        assert!(!rules.is_draw(&pos), "{fen} should not be drawn");
        assert!(!rules.is_game_over(&pos), "{fen} should not be over");
    }
}

// =============================================================================
// Checkmate and Check
// =============================================================================

#[test]
fn test_checkmate_is_not_stalemate() {
    let rules = StandardRules::new();
    let pos = load("r1bqkb1r/pppp1Qpp/2n2n2/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 4");

    assert!(rules.is_checkmate(&pos));
    assert!(rules.is_check(&pos));
    assert!(rules.is_game_over(&pos));
    assert_eq!(rules.side_to_move(&pos), Side::Black);
}

#[test]
fn test_check_is_not_checkmate() {
    let rules = StandardRules::new();
    let pos = load("rnbqkbnr/ppppp1pp/8/5p1Q/4P3/8/PPPP1PPP/RNB1KBNR b KQkq - 1 2");

    assert!(rules.is_check(&pos));
    assert!(!rules.is_checkmate(&pos));
    assert!(!rules.is_game_over(&pos));
}

// =============================================================================
// Move Handling
// =============================================================================

#[test]
fn test_castling_by_two_file_king_move() {
    let fen = "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1";
    let short = play(fen, "e1", "g1").unwrap();
    assert_eq!(short.san, "O-O");
    assert!(short.position.fen().starts_with("r3k2r/8/8/8/8/8/8/R4RK1 b kq"));

    let long = play(fen, "e1", "c1").unwrap();
    assert_eq!(long.san, "O-O-O");
    assert!(long.position.fen().starts_with("r3k2r/8/8/8/8/8/8/2KR3R b kq"));
}

#[test]
fn test_castling_rejections() {
    // King dragged onto its own rook
    assert_eq!(
        play("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1", "e1", "h1").unwrap_err(),
        MoveRejected::Illegal {
            from: sq("e1"),
            to: sq("h1")
        }
    );
    // No castling rights
    assert!(play("r3k2r/8/8/8/8/8/8/R3K2R w - - 0 1", "e1", "g1").is_err());
    // Passing through an attacked square
    assert!(play("r3k2r/8/8/8/8/8/5r2/R3K2R w KQkq - 0 1", "e1", "g1").is_err());
    assert!(play("r3k2r/8/8/8/8/8/5r2/R3K2R w KQkq - 0 1", "e1", "c1").is_ok());
}

#[test]
fn test_promotion_defaults_to_queen() {
    let white = play("4k3/P7/8/8/8/8/8/4K3 w - - 0 1", "a7", "a8").unwrap();
    assert_eq!(white.san, "a8=Q+");
    assert!(white.position.fen().starts_with("Q3k3/"));

    let black = play("4k3/8/8/8/8/8/p7/4K3 b - - 0 1", "a2", "a1").unwrap();
    assert_eq!(black.san, "a1=Q+");
    assert!(black.position.fen().contains("/q3K3 w"));
}

#[test]
fn test_rejects_illegal_and_empty_moves() {
    let start = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    assert_eq!(
        play(start, "e2", "e5").unwrap_err(),
        MoveRejected::Illegal {
            from: sq("e2"),
            to: sq("e5")
        }
    );
    assert_eq!(play(start, "e3", "e4").unwrap_err(), MoveRejected::NoPieceToMove(sq("e3")));
    assert_eq!(play(start, "e7", "e5").unwrap_err(), MoveRejected::NoPieceToMove(sq("e7")));
    // Capturing an own piece
    assert!(play(start, "d1", "d2").is_err());
}

#[test]
fn test_try_move_leaves_input_untouched() {
    let rules = StandardRules::new();
    let start = rules.create_initial();
    let before = rules.serialize(&start);

    let outcome = rules.try_move(&start, MoveRequest::new(sq("g1"), sq("f3"))).unwrap();

    assert_eq!(rules.serialize(&start), before);
    assert_ne!(outcome.position, start);
    assert_eq!(rules.side_to_move(&outcome.position), Side::Black);
}

#[test]
fn test_serialize_load_round_trip() {
    let rules = StandardRules::new();
    let start = rules.create_initial();
    assert_eq!(
        rules.serialize(&start),
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"
    );

    let reloaded = rules.load(&rules.serialize(&start)).unwrap();
    assert_eq!(reloaded, start);
}

#[test]
fn test_load_rejects_corrupt_fen() {
    let rules = StandardRules::new();
    let err = rules.load("not a position").unwrap_err();
    assert!(matches!(err, PositionError::InvalidFen { ref fen, .. } if fen == "not a position"));
}
