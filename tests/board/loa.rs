use internal_iterator::InternalIterator;
use itertools::Itertools;

use lines_of_action::board::{Outcome, Piece, Player};
use lines_of_action::loa::{Direction, InvalidMoveLimit, LoaBoard, Move, PlayError, Square, DEFAULT_MOVE_LIMIT};
use lines_of_action::util::board_gen::random_board_with_moves;
use lines_of_action::util::tiny::consistent_rng;

use crate::board::board_test_main;
use crate::util::{board, move_strings};

const START_LAYOUT: &str = "1bbbbbb1/w6w/w6w/w6w/w6w/w6w/w6w/1bbbbbb1 b";

fn mv(s: &str) -> Move {
    s.parse().unwrap()
}

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

#[test]
fn start() {
    board_test_main(&LoaBoard::default());
}

#[test]
fn start_white_to_move() {
    board_test_main(&board("1bbbbbb1/w6w/w6w/w6w/w6w/w6w/w6w/1bbbbbb1 w"));
}

#[test]
fn random_positions() {
    let start = LoaBoard::default();
    let mut rng = consistent_rng();

    for n in [1, 2, 5, 10, 20, 40] {
        for _ in 0..4 {
            let board = random_board_with_moves(&start, n, &mut rng);
            board_test_main(&board);
        }
    }
}

#[test]
fn fixtures() {
    for layout in [
        "w6w/8/8/8/5b2/2bb4/8/7w b",
        "w7/8/8/4b2w/8/8/8/b1w5 b",
        "w7/8/8/8/7w/8/6b1/bw1w4 b",
        "w7/8/8/8/7w/8/6b1/bb1w4 b",
        "8/8/8/8/8/8/8/bbww4 w",
    ] {
        board_test_main(&board(layout));
    }
}

#[test]
fn start_layout() {
    let board = LoaBoard::default();
    assert_eq!(START_LAYOUT, board.to_layout());
    assert_eq!(board, START_LAYOUT.parse::<LoaBoard>().unwrap());
    assert_eq!(format!("LoaBoard(\"{}\")", START_LAYOUT), format!("{:?}", board));
}

#[test]
fn start_render() {
    let expected = "\
===
    - b b b b b b -
    w - - - - - - w
    w - - - - - - w
    w - - - - - - w
    w - - - - - - w
    w - - - - - - w
    w - - - - - - w
    - b b b b b b -
Next move: black
===";
    assert_eq!(expected, LoaBoard::default().to_string());
}

#[test]
fn start_state() {
    let board = LoaBoard::default();

    assert_eq!(Player::Black, board.next_player());
    assert_eq!(0, board.moves_made());
    assert_eq!(2 * DEFAULT_MOVE_LIMIT, board.move_limit());
    assert_eq!(None, board.outcome());
    assert!(!board.game_over());

    assert_eq!(12, board.pieces(Player::Black).count());
    assert_eq!(12, board.pieces(Player::White).count());
    assert_eq!(24, board.occupied().count());

    assert_eq!(Piece::Empty, board.get(sq("a1")));
    assert_eq!(Piece::Black, board.get(sq("b1")));
    assert_eq!(Piece::White, board.get(sq("a2")));
    assert_eq!(Piece::Black, board.get(sq("g8")));
    assert_eq!(Piece::Empty, board.get(sq("h8")));
}

#[test]
fn start_moves() {
    let board = LoaBoard::default();
    let expected = "b1-h1 b1-b3 b1-d3 b8-b6 b8-d6 b8-h8 c1-a3 c1-c3 c1-e3 c8-a6 c8-c6 c8-e6 \
        d1-b3 d1-d3 d1-f3 d8-b6 d8-d6 d8-f6 e1-c3 e1-e3 e1-g3 e8-c6 e8-e6 e8-g6 \
        f1-d3 f1-f3 f1-h3 f8-d6 f8-f6 f8-h6 g1-a1 g1-e3 g1-g3 g8-e6 g8-g6 g8-a8";

    let legal = board.legal_moves();
    assert_eq!(36, legal.len());
    assert_eq!(expected.split_whitespace().collect_vec(), move_strings(&legal));
    assert!(legal.iter().all(|mv| !mv.capture));

    assert_eq!(36, board.available_moves().count());
}

#[test]
fn start_moves_from_b8() {
    let board = LoaBoard::default();
    let from = sq("b8");

    let dests = Square::all().filter(|&to| board.is_legal(from, to)).collect_vec();
    assert_eq!(vec![sq("b6"), sq("d6"), sq("h8")], dests);

    assert!(!board.is_legal(from, sq("b7")));
    assert!(!board.is_legal(from, sq("d7")));
    assert!(!board.is_legal(from, sq("c8")));
}

#[test]
fn start_line_counts() {
    let board = LoaBoard::default();

    // row 1 holds six black pieces, column b only b1 and b8
    assert_eq!(6, board.line_count(sq("b1"), Direction::E));
    assert_eq!(6, board.line_count(sq("b1"), Direction::W));
    assert_eq!(2, board.line_count(sq("b1"), Direction::N));
    assert_eq!(2, board.line_count(sq("b1"), Direction::NE));
    assert_eq!(2, board.line_count(sq("b1"), Direction::NW));
    assert_eq!(1, board.line_count(sq("d4"), Direction::NE));
}

#[test]
fn illegal_in_start() {
    let board = LoaBoard::default();

    // not aligned
    assert!(!board.is_legal(sq("b1"), sq("c3")));
    // wrong distance
    assert!(!board.is_legal(sq("b1"), sq("b2")));
    // not the player to move
    assert!(!board.is_legal(sq("a2"), sq("c2")));
    // empty source
    assert!(!board.is_legal(sq("a1"), sq("a3")));
    // null move
    assert!(!board.is_legal(sq("b1"), sq("b1")));
}

#[test]
fn blocked() {
    let board = LoaBoard::default();

    assert!(board.blocked(sq("b1"), sq("c3")), "unaligned squares are blocked");
    assert!(board.blocked(sq("b1"), sq("c1")), "friendly destination");
    assert!(!board.blocked(sq("b1"), sq("b3")));
    assert!(!board.blocked(sq("b1"), sq("h1")), "friendly pieces can be jumped");
}

#[test]
fn capture() {
    let mut board = board("w7/8/8/4b2w/8/8/8/b1w5 b");
    let expected = "a1-c1 a1-a3 a1-c3 e5-c3 e5-e4 e5-f4 e5-c5 e5-g5 e5-d6 e5-e6 e5-g7";

    let legal = board.legal_moves();
    assert_eq!(expected.split_whitespace().collect_vec(), move_strings(&legal));
    assert_eq!(1, legal.iter().filter(|m| m.capture).count());
    assert_eq!(None, board.outcome());

    let capture = legal[0];
    assert_eq!(mv("a1-c1"), capture);
    assert!(capture.capture);
    assert_eq!("a1-c1x", format!("{:?}", capture));

    board.make_move(capture);
    assert_eq!(Piece::Empty, board.get(sq("a1")));
    assert_eq!(Piece::Black, board.get(sq("c1")));
    assert_eq!(2, board.pieces(Player::White).count());

    board.retract();
    assert_eq!(Piece::Black, board.get(sq("a1")));
    assert_eq!(Piece::White, board.get(sq("c1")));
    assert_eq!(3, board.pieces(Player::White).count());
    assert_eq!(Player::Black, board.next_player());
}

#[test]
fn blocked_by_opponent() {
    let board = board("w7/8/8/8/7w/8/6b1/bw1w4 b");
    let expected = "a1-b2 a1-a3 g2-f1 g2-g1 g2-f2 g2-h2 g2-g3 g2-h3 g2-e4";

    assert_eq!(expected.split_whitespace().collect_vec(), move_strings(&board.legal_moves()));
    assert!(!board.is_legal(sq("a1"), sq("d1")));
    assert!(board.blocked(sq("a1"), sq("d1")));
}

#[test]
fn jump_own_piece() {
    let board = board("w7/8/8/8/7w/8/6b1/bb1w4 b");
    let expected = "a1-d1 a1-b2 a1-a3 b1-a2 b1-b2 b1-c2 g2-f1 g2-g1 g2-f2 g2-h2 g2-g3 g2-h3 g2-e4";

    let legal = board.legal_moves();
    assert_eq!(expected.split_whitespace().collect_vec(), move_strings(&legal));
    assert!(legal[0].capture);
}

#[test]
fn both_contiguous() {
    let white_to_move = board("8/8/8/8/8/8/8/bbww4 w");
    assert_eq!(Some(Outcome::WonBy(Player::Black)), white_to_move.outcome());

    let black_to_move = board("8/8/8/8/8/8/8/bbww4 b");
    assert_eq!(Some(Outcome::WonBy(Player::White)), black_to_move.outcome());
    assert_eq!(Some(Player::White), black_to_move.winner());
}

#[test]
fn single_side_contiguous() {
    let board = board("8/8/8/8/8/8/1b6/b4w1w w");
    assert_eq!(Some(Outcome::WonBy(Player::Black)), board.outcome());
    assert!(board.pieces_contiguous(Player::Black));
    assert!(!board.pieces_contiguous(Player::White));
}

#[test]
fn tie_on_move_limit() {
    let mut board = LoaBoard::default();
    board.set_move_limit(1).unwrap();
    assert_eq!(2, board.move_limit());

    board.make_move(mv("b1-b3"));
    assert_eq!(None, board.outcome());
    board.make_move(mv("a2-c2"));

    assert_eq!(Some(Outcome::Draw), board.outcome());
    assert_eq!(None, board.winner());
    assert!(board.game_over());
    assert_eq!(&[6, 5, 1], board.region_sizes(Player::Black));
    assert_eq!(&[6, 5, 1], board.region_sizes(Player::White));

    assert_eq!(Err(PlayError::GameOver), board.try_make_move(mv("b8-b6")));

    board.retract();
    assert_eq!(None, board.outcome());
}

#[test]
fn move_limit_error() {
    let mut board = LoaBoard::default();
    board.make_move(mv("b1-b3"));
    board.make_move(mv("a2-c2"));

    assert_eq!(
        Err(InvalidMoveLimit {
            limit: 1,
            moves_made: 2
        }),
        board.set_move_limit(1)
    );
    assert_eq!(2 * DEFAULT_MOVE_LIMIT, board.move_limit());

    board.set_move_limit(2).unwrap();
    assert_eq!(4, board.move_limit());
    assert_eq!(None, board.outcome());
}

#[test]
fn retract_empty_history() {
    let mut board = LoaBoard::default();
    board.retract();
    assert_eq!(LoaBoard::default(), board);
    assert_eq!(0, board.moves_made());
}

#[test]
fn make_retract_history() {
    let mut board = LoaBoard::default();
    let moves = [mv("b1-b3"), mv("a2-c2"), mv("c8-c6")];

    for &mv in &moves {
        board.make_move(mv);
    }
    assert_eq!(&moves, board.moves());
    assert_eq!(3, board.moves_made());
    assert_eq!(Player::White, board.next_player());

    for _ in 0..moves.len() {
        board.retract();
    }
    assert_eq!(LoaBoard::default(), board);
}

#[test]
fn try_make_move() {
    let mut board = LoaBoard::default();

    assert_eq!(Err(PlayError::IllegalMove(mv("b1-b2"))), board.try_make_move(mv("b1-b2")));
    assert_eq!(Err(PlayError::IllegalMove(mv("a2-c2"))), board.try_make_move(mv("a2-c2")));
    assert_eq!(LoaBoard::default(), board);

    assert_eq!(Ok(()), board.try_make_move(mv("b1-b3")));
    assert_eq!(Player::White, board.next_player());

    let mut finished = self::board("8/8/8/8/8/8/8/bbww4 w");
    assert_eq!(Err(PlayError::GameOver), finished.try_make_move(mv("c1-e1")));
}

#[test]
#[should_panic]
fn make_illegal_move() {
    let mut board = LoaBoard::default();
    board.make_move(mv("b1-b2"));
}

#[test]
#[should_panic]
fn empty_piece_opposite() {
    Piece::Empty.opposite();
}

#[test]
fn piece_opposite() {
    assert_eq!(Piece::White, Piece::Black.opposite());
    assert_eq!(Piece::Black, Piece::White.opposite());
}

#[test]
fn set_invalidates() {
    let mut board = board("8/8/8/8/8/2bbb3/2bbb3/2bbb3 w");
    assert_eq!(&[9], board.region_sizes(Player::Black));

    board.set(sq("e3"), Piece::Empty, None);
    board.set(sq("h8"), Piece::Black, Some(Player::Black));
    board.assert_valid();

    assert_eq!(&[8, 1], board.region_sizes(Player::Black));
    assert_eq!(Player::Black, board.next_player());
    assert_eq!(0, board.moves_made());
}

#[test]
fn random_legal_move() {
    let board = LoaBoard::default();
    let mut rng = consistent_rng();

    for _ in 0..100 {
        let mv = board.random_legal_move(&mut rng).unwrap();
        assert!(board.is_legal_move(mv));
    }

    let empty = LoaBoard::empty(Player::Black);
    assert_eq!(None, empty.random_legal_move(&mut rng));
    assert!(empty.legal_moves().is_empty());
}

#[test]
fn parse_square_and_move() {
    assert_eq!(Square::from_col_row(0, 0), sq("a1"));
    assert_eq!(Square::from_col_row(7, 7), sq("h8"));
    assert_eq!("c5", Square::from_col_row(2, 4).to_string());

    let parsed = mv("b8-h8");
    assert_eq!(sq("b8"), parsed.from);
    assert_eq!(sq("h8"), parsed.to);
    assert_eq!("b8-h8", parsed.to_string());

    for bad in ["", "a", "a9", "i1", "A1", "a1 ", "a10"] {
        assert!(bad.parse::<Square>().is_err(), "parsed {:?}", bad);
    }
    for bad in ["", "b8", "b8h8", "b8-h9", "b8-h8-a1", "b8 - h8"] {
        assert!(bad.parse::<Move>().is_err(), "parsed {:?}", bad);
    }
}

#[test]
fn parse_layout_errors() {
    for bad in [
        "",
        "1bbbbbb1/w6w/w6w/w6w/w6w/w6w/w6w/1bbbbbb1",
        "1bbbbbb1/w6w/w6w/w6w/w6w/w6w/w6w/1bbbbbb1 x",
        "1bbbbbb1/w6w/w6w/w6w/w6w/w6w/w6w/1bbbbbb1 -",
        "1bbbbbb1/w6w/w6w/w6w/w6w/w6w/1bbbbbb1 b",
        "1bbbbbb1/w6w/w6w/w6w/w6w/w6w/w6w/1bbbbbb b",
        "1bbbbbb1/w6w/w6w/w6w/w6w/w6w/w6w/1bbbbbb11 b",
        "1bbbbbb1/w6w/w6w/w6w/w6w/w6w/w6w/1bbxbbb1 b",
        "1bbbbbb1/w6w/w6w/w6w/w6w/w6w/w6w/1bbbbbb1  b",
    ] {
        assert!(LoaBoard::from_layout(bad).is_err(), "parsed {:?}", bad);
    }
}

#[test]
fn parse_layout_long_digit_row() {
    for row in ["9".repeat(29), "9".to_owned(), "44444".to_owned(), "71".repeat(20)] {
        let layout = format!("{}/8/8/8/8/8/8/8 b", row);
        assert!(LoaBoard::from_layout(&layout).is_err(), "parsed {:?}", layout);
    }

    let split = board("3b4/8/8/8/8/8/8/8 w");
    assert_eq!(Piece::Black, split.get(sq("d8")));
}

#[test]
fn layout_with_dashes() {
    let dashed = board("-bbbbbb-/w------w/w6w/w6w/w6w/w6w/w6w/1bbbbbb1 b");
    assert_eq!(LoaBoard::default(), dashed);
}
