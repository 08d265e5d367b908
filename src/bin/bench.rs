use std::time::Instant;

use itertools::Itertools;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use lines_of_action::ai::minimax::MachinePlayer;
use lines_of_action::ai::simple::RandomBot;
use lines_of_action::board::Player;
use lines_of_action::loa::LoaBoard;
use lines_of_action::util::board_gen::random_board_with_moves;
use lines_of_action::util::game_stats::{average_game_stats, perft};
use lines_of_action::util::tiny::consistent_rng;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let start = LoaBoard::default();
    let midgame = random_board_with_moves(&start, 10, &mut consistent_rng());

    bench("perft_start_3", || {
        perft(&start, 3);
    });

    bench("random_games_100", || {
        let mut white = RandomBot::new(SmallRng::from_entropy());
        let mut black = RandomBot::new(SmallRng::from_entropy());
        let stats = average_game_stats(&start, &mut white, &mut black, 100);
        println!("  {:?}", stats);
    });

    bench("search_start_depth_2", || {
        MachinePlayer::new(Player::Black, 2).choose_move(&start).unwrap();
    });

    bench("search_start_depth_3", || {
        MachinePlayer::new(Player::Black, 3).choose_move(&start).unwrap();
    });

    bench("search_midgame_depth_3", || {
        let player = MachinePlayer::new(midgame.next_player(), 3);
        player.choose_move(&midgame).unwrap();
    });
}

const ITERATION_COUNT: usize = 10;
const REMOVED_OUTLIERS_PER_SIDE: usize = 1;

fn bench(name: &str, mut f: impl FnMut()) {
    assert!(ITERATION_COUNT > REMOVED_OUTLIERS_PER_SIDE * 2);
    println!("Running benchmark {}", name);

    let mut timings = vec![];

    for _ in 0..ITERATION_COUNT {
        let start = Instant::now();
        f();
        timings.push(start.elapsed());
    }

    // remove outliers
    for _ in 0..REMOVED_OUTLIERS_PER_SIDE {
        timings.remove(timings.iter().position_min().unwrap());
        timings.remove(timings.iter().position_max().unwrap());
    }

    let timings = timings.iter().map(|d| d.as_secs_f32() * 1000.0).collect_vec();
    let mean = timings.iter().sum::<f32>() / timings.len() as f32;
    let stddev = (timings.iter().map(|&f| (f - mean).powi(2)).sum::<f32>() / timings.len() as f32).sqrt();

    println!("  {:.2}ms\t +- {:.2}ms", mean, stddev);
}
