// Copyright (C) 2020-2024 Andy Kurnia.

use linewords::{display, error, game_config, game_state};
use rand::prelude::*;

// Plays by itself until the bag and rack are both empty. Each turn the rack
// is laid down left to right from a random space, as many tiles as fit.
fn main() -> error::Returns<()> {
    linewords::init_tracing();
    let seed = match std::env::args().nth(1) {
        Some(s) => s.parse()?,
        None => rand::random(),
    };
    println!("seed: {}", seed);
    let mut rng = rand_chacha::ChaCha20Rng::seed_from_u64(seed);
    let game_config = game_config::make_english_game_config();
    let board_len = game_config.board_layout().len();
    let mut game_state = game_state::GameState::new(&game_config, &mut rng);

    loop {
        display::print_game(&game_state);
        let rack_ids = game_state
            .current_rack_contents()
            .iter()
            .map(|tile| tile.id())
            .collect::<Vec<_>>();
        if rack_ids.is_empty() {
            break;
        }
        let start = rng.random_range(0..board_len);
        for (index, tile_id) in (start..board_len).zip(rack_ids) {
            game_state.place_tile(tile_id, index)?;
        }
        let submission = game_state.submit(&mut rng)?;
        println!(
            "played {} for {} (total {})",
            submission.word, submission.score, submission.total
        );
    }

    println!(
        "game over after {} rounds, final score {}",
        game_state.round(),
        game_state.current_game_score()
    );
    Ok(())
}
