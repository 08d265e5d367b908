use lines_of_action::ai::simple::RandomBot;
use lines_of_action::ai::{Bot, SelectError};
use lines_of_action::board::Player;
use lines_of_action::loa::LoaBoard;
use lines_of_action::util::tiny::consistent_rng;

use crate::util::{board, test_sampler_uniform};

#[test]
fn random_bot_uniform() {
    let board = LoaBoard::default();
    let mut bot = RandomBot::new(consistent_rng());

    test_sampler_uniform(&board.legal_moves(), true, || bot.select_move(&board).ok());
}

#[test]
fn random_bot_uniform_capture() {
    let board = board("w7/8/8/4b2w/8/8/8/b1w5 b");
    let mut bot = RandomBot::new(consistent_rng());

    test_sampler_uniform(&board.legal_moves(), false, || bot.select_move(&board).ok());
}

#[test]
fn random_bot_errors() {
    let mut bot = RandomBot::new(consistent_rng());

    let finished = board("8/8/8/8/8/8/8/bbww4 w");
    assert_eq!(Err(SelectError::GameOver), bot.select_move(&finished));

    let empty = LoaBoard::empty(Player::Black);
    assert_eq!(Err(SelectError::NoLegalMoves), bot.select_move(&empty));
}
