//! Integration tests that play complete games and check how they end.

use gambit_core::{
    Board, Color, Piece, PieceKind, Square, generate_legal_moves, has_legal_moves, legal_moves,
};
use gambit_game::{DrawReason, Game, GameConfig, GameError, GameStatus};

fn play_all(game: &mut Game, moves: &[&str]) {
    for text in moves {
        game.play(text)
            .unwrap_or_else(|err| panic!("move {text} failed: {err}"));
    }
}

// ── Decisive endings ─────────────────────────────────────────────────────────

#[test]
fn fools_mate() {
    let mut game = Game::new();
    play_all(&mut game, &["f2f3", "e7e5", "g2g4"]);
    assert_eq!(game.status(), GameStatus::InProgress);

    let status = game.make_move(game.board().parse_uci_move("d8h4").unwrap()).unwrap();
    assert_eq!(
        status,
        GameStatus::Checkmate {
            winner: Color::Black
        }
    );
    assert!(game.legal_moves().is_empty());
    assert!(game.selectable_moves(Square::E1).is_empty());

    // The generator itself finds nothing for any white piece.
    let board = game.board();
    assert!(board.in_check());
    assert_eq!(board.side(Color::White).count(), 16);
    for sq in board.side(Color::White) {
        assert!(legal_moves(board, sq).is_empty(), "{sq} still has moves");
    }
    assert!(generate_legal_moves(board).is_empty());
}

#[test]
fn check_is_reported_while_replies_exist() {
    let mut game = Game::new();
    play_all(&mut game, &["e4", "f5", "Qh5+"]);
    assert_eq!(game.status(), GameStatus::Check);
    // Only g6 blocks; the king cannot move.
    let replies: Vec<String> = game.legal_moves().iter().map(|mv| mv.to_string()).collect();
    assert_eq!(replies, vec!["g7g6".to_string()]);
}

#[test]
fn stalemate() {
    let mut game = Game::from_fen("k7/8/1K6/8/8/8/8/2Q5 w - - 0 1").unwrap();
    let status = game.make_move(game.board().parse_uci_move("c1c7").unwrap()).unwrap();
    assert_eq!(status, GameStatus::Stalemate);
    let board = game.board();
    assert!(!board.in_check());
    assert!(generate_legal_moves(board).is_empty());
    assert!(!has_legal_moves(board));
    assert!(matches!(game.play("Ka7"), Err(GameError::GameOver { .. })));
}

// ── Special moves ────────────────────────────────────────────────────────────

#[test]
fn kingside_castling_moves_both_pieces() {
    let mut game =
        Game::from_fen("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w KQkq - 0 1").unwrap();
    let mv = game.play("O-O").unwrap();
    assert!(mv.is_castle_kingside());

    let board = game.board();
    assert_eq!(board.piece_at(Square::G1), Some(Piece::WHITE_KING));
    assert_eq!(board.piece_at(Square::F1), Some(Piece::WHITE_ROOK));
    assert_eq!(board.piece_at(Square::E1), None);
    assert_eq!(board.piece_at(Square::H1), None);
    assert_eq!(board.castling().to_string(), "kq");

    let mv = game.play("O-O-O").unwrap();
    assert!(mv.is_castle_queenside());
    assert_eq!(game.board().piece_at(Square::C8), Some(Piece::new(PieceKind::King, Color::Black)));
    assert_eq!(game.board().piece_at(Square::D8), Some(Piece::BLACK_ROOK));
    assert_eq!(game.board().castling().to_string(), "-");
}

#[test]
fn cannot_castle_through_attacked_square() {
    // The black rook on f2 covers f1.
    let game = Game::from_fen("4k3/8/8/8/8/8/5r2/R3K2R w KQ - 0 1").unwrap();
    let targets: Vec<Square> = game
        .selectable_moves(Square::E1)
        .iter()
        .map(|mv| mv.to())
        .collect();
    assert!(!targets.contains(&Square::G1));
    assert!(targets.contains(&Square::C1));
}

#[test]
fn rook_move_forfeits_one_side() {
    let mut game =
        Game::from_fen("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w KQkq - 0 1").unwrap();
    play_all(&mut game, &["Rg1", "Rb8", "Rh1"]);
    assert_eq!(game.board().castling().to_string(), "Qk");
    let targets: Vec<Square> = game
        .selectable_moves(Square::E8)
        .iter()
        .map(|mv| mv.to())
        .collect();
    assert!(targets.contains(&Square::G8));
    assert!(!targets.contains(&Square::C8));
}

#[test]
fn en_passant_capture() {
    let mut game = Game::new();
    play_all(&mut game, &["e4", "a6", "e5", "d5"]);
    assert_eq!(game.board().en_passant(), Some(Square::D6));

    let mv = game.play("exd6").unwrap();
    assert!(mv.is_en_passant());
    assert_eq!(mv.to_string(), "e5d6");
    assert_eq!(game.board().piece_at(Square::D6), Some(Piece::WHITE_PAWN));
    assert_eq!(game.board().piece_at(Square::D5), None);
    assert_eq!(game.board().en_passant(), None);
}

#[test]
fn en_passant_expires_after_one_move() {
    let mut game = Game::new();
    play_all(&mut game, &["e4", "a6", "e5", "d5", "a3", "a5"]);
    assert!(matches!(
        game.play("e5d6"),
        Err(GameError::IllegalMove(_))
    ));
}

#[test]
fn promotion_offers_four_pieces() {
    let mut game = Game::from_fen("8/P6k/8/8/8/8/8/4K3 w - - 0 1").unwrap();
    let mut kinds: Vec<PieceKind> = game
        .selectable_moves(Square::A7)
        .iter()
        .filter_map(|mv| mv.promotion_kind())
        .collect();
    kinds.sort_by_key(|kind| kind.index());
    assert_eq!(
        kinds,
        vec![
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Rook,
            PieceKind::Queen
        ]
    );

    game.play("a8=N").unwrap();
    assert_eq!(game.board().piece_at(Square::A8), Some(Piece::WHITE_KNIGHT));
    game.play("Kg7").unwrap();
    assert_eq!(game.board().piece_at(Square::A8), Some(Piece::WHITE_KNIGHT));
    assert_eq!(game.board().pieces(PieceKind::Pawn).count(), 0);
}

// ── Draws ────────────────────────────────────────────────────────────────────

const KNIGHT_SHUFFLE: [&str; 4] = ["Nf3", "Nf6", "Ng1", "Ng8"];

#[test]
fn threefold_repetition() {
    let mut game = Game::new();
    play_all(&mut game, &KNIGHT_SHUFFLE);
    assert_eq!(game.repetition_count(), 2);
    play_all(&mut game, &KNIGHT_SHUFFLE[..3]);
    assert_eq!(game.status(), GameStatus::InProgress);

    game.play("Ng8").unwrap();
    assert_eq!(game.repetition_count(), 3);
    assert_eq!(game.status(), GameStatus::Draw(DrawReason::Repetition));
    assert!(game.legal_moves().is_empty());
    assert!(matches!(game.play("e4"), Err(GameError::GameOver { .. })));

    game.undo().unwrap();
    assert_eq!(game.status(), GameStatus::InProgress);
}

#[test]
fn repetition_respects_config() {
    let mut game = Game::with_config(GameConfig {
        detect_repetition: false,
        ..GameConfig::default()
    })
    .unwrap();
    play_all(&mut game, &KNIGHT_SHUFFLE);
    play_all(&mut game, &KNIGHT_SHUFFLE);
    assert_eq!(game.status(), GameStatus::InProgress);

    let mut game = Game::with_config(GameConfig {
        repetition_limit: 2,
        ..GameConfig::default()
    })
    .unwrap();
    play_all(&mut game, &KNIGHT_SHUFFLE);
    assert_eq!(game.status(), GameStatus::Draw(DrawReason::Repetition));
}

#[test]
fn pawn_move_breaks_repetition_chain() {
    let mut game = Game::new();
    play_all(&mut game, &KNIGHT_SHUFFLE);
    play_all(&mut game, &["e4", "e5"]);
    play_all(&mut game, &KNIGHT_SHUFFLE);
    play_all(&mut game, &KNIGHT_SHUFFLE);
    // The position after 1.e4 e5 has now occurred three times, the start only twice.
    assert_eq!(game.status(), GameStatus::Draw(DrawReason::Repetition));
    assert_eq!(game.board().halfmove_clock(), 8);
}

#[test]
fn fifty_move_rule() {
    let mut game = Game::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 99 80").unwrap();
    assert_eq!(game.status(), GameStatus::InProgress);
    game.play("Ra2").unwrap();
    assert_eq!(game.board().halfmove_clock(), 100);
    assert_eq!(game.status(), GameStatus::Draw(DrawReason::FiftyMove));
}

#[test]
fn pawn_move_resets_fifty_move_count() {
    let mut game = Game::from_fen("4k3/8/8/8/8/8/P7/R3K3 w - - 99 80").unwrap();
    game.play("a3").unwrap();
    assert_eq!(game.board().halfmove_clock(), 0);
    assert_eq!(game.status(), GameStatus::InProgress);
}

#[test]
fn shorter_fifty_move_limit() {
    let mut game = Game::with_config(GameConfig {
        fifty_move_limit: 4,
        ..GameConfig::default()
    })
    .unwrap();
    play_all(&mut game, &["Nc3", "Nc6", "Nb1"]);
    assert_eq!(game.status(), GameStatus::InProgress);
    game.play("Nb8").unwrap();
    // The fifty-move check comes before repetition.
    assert_eq!(game.status(), GameStatus::Draw(DrawReason::FiftyMove));
}

#[test]
fn capture_down_to_bare_kings() {
    let mut game = Game::from_fen("4k3/8/8/8/8/8/3r4/4K3 w - - 0 1").unwrap();
    game.play("Kxd2").unwrap();
    assert_eq!(
        game.status(),
        GameStatus::Draw(DrawReason::InsufficientMaterial)
    );
}

// ── Determinism ──────────────────────────────────────────────────────────────

#[test]
fn same_moves_give_same_positions() {
    let line = ["e4", "c5", "Nf3", "d6", "d4", "cxd4", "Nxd4", "Nf6", "Nc3", "a6"];
    let mut first = Game::new();
    let mut second = Game::new();
    play_all(&mut first, &line);
    play_all(&mut second, &line);

    assert_eq!(first.board(), second.board());
    assert_eq!(first.board().hash(), second.board().hash());
    assert_eq!(
        first.board().to_string(),
        "rnbqkb1r/1p2pppp/p2p1n2/8/3NP3/2N5/PPP2PPP/R1BQKB1R w KQkq - 0 6"
    );
    let hashes: Vec<u64> = first.history().iter().map(Board::hash).collect();
    let again: Vec<u64> = second.history().iter().map(Board::hash).collect();
    assert_eq!(hashes, again);
}

#[test]
fn generation_is_repeatable() {
    let mut game = Game::new();
    play_all(&mut game, &["e4", "d5", "exd5", "Nf6", "Bb5+", "c6"]);
    let board = *game.board();

    let sorted = |board: &Board| {
        let mut names: Vec<String> = generate_legal_moves(board)
            .iter()
            .map(|mv| mv.to_string())
            .collect();
        names.sort();
        names
    };
    let first = sorted(&board);
    assert!(!first.is_empty());
    assert_eq!(sorted(&board), first);

    // A fresh board rebuilt from FEN generates the same set.
    let rebuilt: Board = board.to_string().parse().unwrap();
    assert_eq!(sorted(&rebuilt), first);

    // Generating for each square adds up to the whole.
    let per_square: usize = board
        .side(board.side_to_move())
        .map(|sq| legal_moves(&board, sq).len())
        .sum();
    assert_eq!(per_square, first.len());
}
