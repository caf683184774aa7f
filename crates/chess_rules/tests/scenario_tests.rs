//! Whole-game scenarios played through the public API
//!
//! Covers each piece kind moving, capturing and failing, plus check handling
//! and replaying many games in parallel.

use chess_rules::{Game, MoveError, Piece, PieceKind, Side};
use rayon::prelude::*;

fn play(moves: &str) -> Game {
    Game::from_moves(moves).unwrap_or_else(|e| panic!("{moves:?} failed: {e}"))
}

fn assert_piece(game: &Game, at: &str, kind: PieceKind, side: Side) {
    assert_eq!(
        game.piece_at(at).unwrap(),
        Some(Piece::new(kind, side)),
        "expected {side} {kind} at {at}"
    );
}

fn assert_no_piece(game: &Game, at: &str) {
    assert_eq!(game.piece_at(at).unwrap(), None, "expected no piece at {at}");
}

fn assert_move_error(game: &mut Game, token: &str, expected: &str) {
    let before = game.clone();
    match game.apply_move(token) {
        Ok(()) => panic!("{token} should have been rejected"),
        Err(err) => assert!(
            err.to_string().contains(expected),
            "{token}: {err:?} does not mention {expected:?}"
        ),
    }
    assert_eq!(game.position(), before.position());
    assert_eq!(game.moves(), before.moves());
}

// =============================================================================
// Pawns
// =============================================================================

#[test]
fn test_pawn_moves() {
    let mut game = Game::new();
    game.apply_move("e4").unwrap();
    assert_no_piece(&game, "e2");
    assert_piece(&game, "e4", PieceKind::Pawn, Side::White);

    game.apply_move("e5").unwrap();
    assert_no_piece(&game, "e7");
    assert_piece(&game, "e5", PieceKind::Pawn, Side::Black);
}

#[test]
fn test_pawn_moves_out_of_reach() {
    let mut game = Game::new();
    for file in 'a'..='h' {
        let to = format!("{file}5");
        assert_move_error(
            &mut game,
            &to,
            &format!("no pawn found that can move to {to}"),
        );
    }

    game.apply_move("d4").unwrap();

    // Black pawns cannot reach the fourth rank in one move
    for file in 'a'..='h' {
        let to = format!("{file}4");
        assert_move_error(
            &mut game,
            &to,
            &format!("no pawn found that can move to {to}"),
        );
    }
}

#[test]
fn test_pawn_captures() {
    let game = play("e4 d5 exd5");
    assert_no_piece(&game, "e4");
    assert_piece(&game, "d5", PieceKind::Pawn, Side::White);

    // Two pawns could take on d5; the file picks one
    let game = play("c4 d5 e4 e5 exd5");
    assert_no_piece(&game, "e4");
    assert_piece(&game, "d5", PieceKind::Pawn, Side::White);
    assert_piece(&game, "c4", PieceKind::Pawn, Side::White);

    let game = play("c4 d5 e4 e5 cxd5");
    assert_no_piece(&game, "c4");
    assert_piece(&game, "d5", PieceKind::Pawn, Side::White);
    assert_piece(&game, "e4", PieceKind::Pawn, Side::White);
}

#[test]
fn test_pawn_promotion() {
    let opening = "a4 e6 a5 e5 a6 e4 axb7 e3";
    for (suffix, kind) in [
        ("Q", PieceKind::Queen),
        ("R", PieceKind::Rook),
        ("B", PieceKind::Bishop),
        ("N", PieceKind::Knight),
    ] {
        let game = play(&format!("{opening} bxa8={suffix}"));
        assert_piece(&game, "a8", kind, Side::White);
        assert_no_piece(&game, "b7");
        assert_eq!(game.moves().last().unwrap(), &format!("bxa8={suffix}"));
    }

    let mut game = play(opening);
    assert_move_error(&mut game, "bxa8=K", "invalid promotion: K");
}

// =============================================================================
// Knights
// =============================================================================

#[test]
fn test_knight_tour() {
    let mut game = Game::new();
    let hops = [
        ("Nf3", "g1", Side::White),
        ("Nh6", "g8", Side::Black),
        ("Nc3", "b1", Side::White),
        ("Na6", "b8", Side::Black),
        ("Nh4", "f3", Side::White),
        ("Nf5", "h6", Side::Black),
        ("Na4", "c3", Side::White),
        ("Nc5", "a6", Side::Black),
    ];
    for (token, from, side) in hops {
        game.apply_move(token).unwrap();
        assert_piece(&game, &token[1..], PieceKind::Knight, side);
        assert_no_piece(&game, from);
    }
}

#[test]
fn test_knight_errors() {
    let mut game = Game::new();

    assert_move_error(&mut game, "Ng3", "no knight found that can move to g3");
    assert_move_error(&mut game, "Nb3", "no knight found that can move to b3");

    assert_move_error(&mut game, "Ng1", "g1 blocked by white knight");
    assert_move_error(&mut game, "Nd2", "d2 blocked by white pawn");
    assert_move_error(&mut game, "Ne2", "e2 blocked by white pawn");

    game.apply_move("Nf3").unwrap();

    assert_move_error(&mut game, "Ng6", "no knight found that can move to g6");
    assert_move_error(&mut game, "Nb6", "no knight found that can move to b6");
    assert_move_error(&mut game, "Ne7", "e7 blocked by black pawn");
    assert_move_error(&mut game, "Nd7", "d7 blocked by black pawn");
}

#[test]
fn test_knight_ambiguity() {
    let opening = "e4 e5 Nf3 d6 Nc3 d5 Nb5 d4";

    let mut game = play(opening);
    assert_move_error(&mut game, "Nxd4", "move ambiguous: 2 knights can move to d4");
    assert_move_error(&mut game, "N4xd4", "no knight found that can move to d4");
    game.apply_move("Nfxd4").unwrap();
    assert_piece(&game, "d4", PieceKind::Knight, Side::White);
    assert_piece(&game, "b5", PieceKind::Knight, Side::White);
    assert_no_piece(&game, "f3");

    let mut game = play(opening);
    game.apply_move("N3xd4").unwrap();
    assert_no_piece(&game, "f3");

    let game = play(&format!("{opening} Nbxd4"));
    assert_piece(&game, "d4", PieceKind::Knight, Side::White);
    assert_piece(&game, "f3", PieceKind::Knight, Side::White);
    assert_piece(&game, "e4", PieceKind::Pawn, Side::White);
    assert_piece(&game, "e5", PieceKind::Pawn, Side::Black);
    for empty in ["g1", "b1", "c3", "d6", "d5", "b5"] {
        assert_no_piece(&game, empty);
    }
}

#[test]
fn test_knight_capture() {
    let game = play("e4 Nf6 d4 Nxe4");
    assert_piece(&game, "e4", PieceKind::Knight, Side::Black);
    assert_piece(&game, "d4", PieceKind::Pawn, Side::White);
    for empty in ["g8", "e2", "d2"] {
        assert_no_piece(&game, empty);
    }
}

// =============================================================================
// Sliders
// =============================================================================

#[test]
fn test_bishop_moves() {
    let mut game = Game::new();
    assert_move_error(&mut game, "Bc4", "no bishop found that can move to c4");

    game.play("e3 e6 Bc4").unwrap();
    assert_piece(&game, "c4", PieceKind::Bishop, Side::White);
    assert_no_piece(&game, "f1");

    game.apply_move("Bc5").unwrap();
    assert_piece(&game, "c5", PieceKind::Bishop, Side::Black);
    assert_no_piece(&game, "f8");
}

#[test]
fn test_bishop_errors_and_capture() {
    let mut game = Game::new();
    assert_move_error(&mut game, "Bc3", "no bishop found that can move to c3");
    assert_move_error(&mut game, "Bc2", "c2 blocked by white pawn");
    assert_move_error(&mut game, "Bb2", "b2 blocked by white pawn");
    assert_move_error(&mut game, "Bd3", "no bishop found that can move to d3");

    let game = play("e4 e5 Bc4 d5 Bxd5");
    assert_piece(&game, "d5", PieceKind::Bishop, Side::White);
    assert_piece(&game, "e4", PieceKind::Pawn, Side::White);
    assert_piece(&game, "e5", PieceKind::Pawn, Side::Black);
    for empty in ["f1", "e2", "e7", "d7"] {
        assert_no_piece(&game, empty);
    }
}

#[test]
fn test_rook_moves() {
    let mut game = Game::new();
    assert_move_error(&mut game, "Ra3", "no rook found that can move to a3");

    game.play("a4 a5 Ra3").unwrap();
    assert_piece(&game, "a3", PieceKind::Rook, Side::White);
    assert_no_piece(&game, "a1");

    game.apply_move("Ra6").unwrap();
    assert_piece(&game, "a6", PieceKind::Rook, Side::Black);
    assert_no_piece(&game, "a8");
}

#[test]
fn test_rook_errors_and_disambiguation() {
    let mut game = Game::new();
    assert_move_error(&mut game, "Rb2", "b2 blocked by white pawn");
    assert_move_error(&mut game, "Rb1", "b1 blocked by white knight");
    assert_move_error(&mut game, "Ra2", "a2 blocked by white pawn");

    game.play("e3 e6 a4 d6 Ra3").unwrap();
    // The black h-rook is still behind its pawn
    assert_move_error(&mut game, "Rh3", "no rook found that can move to h3");

    let mut game = play("a4 e6 h4 e5 Ra3 e4");
    assert_move_error(&mut game, "Rh3", "move ambiguous: 2 rooks can move to h3");
    game.apply_move("Rhh3").unwrap();

    let game = play("a4 e6 h4 e5 Ra3 e4 Rhh3 e3 Raxe3");
    assert_piece(&game, "e3", PieceKind::Rook, Side::White);
    assert_piece(&game, "h3", PieceKind::Rook, Side::White);
    assert_no_piece(&game, "a3");
}

#[test]
fn test_queen_moves() {
    let mut game = Game::new();
    assert_move_error(&mut game, "Qd2", "d2 blocked by white pawn");
    assert_move_error(&mut game, "Qd1", "d1 blocked by white queen");
    assert_move_error(&mut game, "Qe1", "e1 blocked by white king");
    assert_move_error(&mut game, "Qc1", "c1 blocked by white bishop");
    assert_move_error(&mut game, "Qd3", "no queen found that can move to d3");

    game.play("d4 d5 Qd3").unwrap();
    assert_piece(&game, "d3", PieceKind::Queen, Side::White);
    assert_no_piece(&game, "d1");

    game.apply_move("Qd6").unwrap();
    assert_piece(&game, "d6", PieceKind::Queen, Side::Black);
    assert_no_piece(&game, "d8");
}

// =============================================================================
// Kings and check
// =============================================================================

#[test]
fn test_king_walk() {
    let game = play("e4 e5 Ke2 Ke7 Kf3 Kd6 Kg3 Kc6");
    for empty in ["e1", "e8", "e2", "e7", "f3", "d6"] {
        assert_no_piece(&game, empty);
    }
    assert_piece(&game, "g3", PieceKind::King, Side::White);
    assert_piece(&game, "c6", PieceKind::King, Side::Black);
}

#[test]
fn test_king_errors() {
    let mut game = Game::new();
    assert_move_error(&mut game, "Ke1", "e1 blocked by white king");
    assert_move_error(&mut game, "Ke2", "e2 blocked by white pawn");
    assert_move_error(&mut game, "Ke3", "no king found that can move to e3");
}

#[test]
fn test_check_must_be_answered() {
    let mut game = Game::new();
    assert!(!game.in_check());

    game.play("e4 e5 Qh5 Nc6 Qxf7").unwrap();
    assert!(game.in_check());
    assert!(game.moves().last().unwrap().ends_with('+'));

    assert_move_error(&mut game, "Nf6", "king is in check");
    assert_move_error(&mut game, "Ke7", "king is in check");
    game.apply_move("Kxf7").unwrap();
    assert!(!game.in_check());
}

#[test]
fn test_pinned_knight() {
    let mut game = play("d4 e5 Nc3 Bb4");
    assert_eq!(game.apply_move("Ne4"), Err(MoveError::OwnKingInCheck));
}

// =============================================================================
// Full games
// =============================================================================

#[test]
fn test_game_with_castling_and_check_suffix() {
    let mut game = play("d4 d5 Bf4 Nf6 e3 Ne4 Nc3 Nf2 Kxf2 e6 Qg4 Be7 Re1 O-O Kg3 Bh4+");
    assert!(game.in_check());
    assert_eq!(game.moves().len(), 16);
    assert_eq!(game.moves().last().unwrap(), "Bh4+");
    assert_piece(&game, "g8", PieceKind::King, Side::Black);
    assert_piece(&game, "f8", PieceKind::Rook, Side::Black);

    // The x is followed by a single character that is not a square
    assert_move_error(&mut game, "Qex6", "square does not exist");
}

#[test]
fn test_notation_replays_to_same_position() {
    let game = play("e4 e5 Nf3 Nc6 Bb5 a6 Bxc6 dxc6 O-O f6");
    let notation = game.algebraic_notation();
    assert_eq!(notation, "`1.e4 e5 2.Nf3 Nc6 3.Bb5 a6 4.Bxc6 dxc6 5.O-O f6`");

    let replay = play(notation.trim_matches('`'));
    assert_eq!(replay.position(), game.position());
    assert_eq!(replay.moves(), game.moves());
}

#[test]
fn test_parallel_games_are_independent() {
    fn assert_send<T: Send>() {}
    assert_send::<Game>();

    let games = [
        "e4 e5 Qh5 Nc6 Qxf7",
        "d4 d5 Bf4 Nf6 e3 Ne4 Nc3 Nf2 Kxf2 e6 Qg4 Be7 Re1 O-O Kg3 Bh4+",
        "a4 e6 a5 e5 a6 e4 axb7 e3 bxa8=Q",
        "e4 e5 Ke2 Ke7 Kf3 Kd6 Kg3 Kc6",
        "e4 e5 Nf3 d6 Nc3 d5 Nb5 d4 Nbxd4",
    ];

    let results: Vec<(usize, String)> = games
        .par_iter()
        .map(|moves| {
            let game = play(moves);
            (game.moves().len(), game.algebraic_notation())
        })
        .collect();

    for (moves, (count, notation)) in games.iter().zip(&results) {
        assert_eq!(*count, moves.split_whitespace().count());
        let sequential = play(moves);
        assert_eq!(notation, &sequential.algebraic_notation());
    }
}
