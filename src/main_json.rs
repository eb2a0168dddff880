// Copyright (C) 2020-2024 Andy Kurnia.

use linewords::{bag, error, game_config, placement, play_scorer, return_error};
use std::io::Read;

// config: optional, same shape as a --config file. defaults to english.
// placements: [space, letter] pairs, spaces count from 0, any order.
// the tiles must all be available in a fresh bag.
#[derive(serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct Question {
    #[serde(default)]
    config: Option<serde_json::Value>,
    placements: Vec<(usize, char)>,
}

#[derive(serde::Serialize)]
struct Answer {
    word: String,
    score: u64,
}

fn answer(question: Question) -> error::Returns<Answer> {
    let game_config = match question.config {
        Some(value) => game_config::GameConfig::from_json_value(value)?,
        None => game_config::make_english_game_config(),
    };
    let alphabet = game_config.alphabet();
    let mut bag = bag::Bag::new(alphabet);
    let mut placement = placement::Placement::new(game_config.board_layout().len());
    for &(index, label) in &question.placements {
        let Some(letter) = alphabet.find(label) else {
            return_error!(format!("{:?} is not in the alphabet", label));
        };
        let tile = match bag.draw_letter(letter) {
            Ok(tile) => tile,
            Err(_) => {
                return_error!(format!(
                    "too many {} (bag contains only {})",
                    alphabet.label(letter),
                    alphabet.freq(letter)
                ));
            }
        };
        placement.place(index, tile).map_err(|rejected| rejected.error)?;
    }
    let score =
        play_scorer::compute_score(&placement.all_placements(), game_config.board_layout())?;
    Ok(Answer {
        word: placement.word(),
        score,
    })
}

pub fn main() -> error::Returns<()> {
    linewords::init_tracing();
    let data = match std::env::args().nth(1) {
        Some(filename) => std::fs::read_to_string(filename)?,
        None => {
            let mut s = String::new();
            std::io::stdin().read_to_string(&mut s)?;
            s
        }
    };
    let question = serde_json::from_str::<Question>(&data)?;
    let answer = answer(question)?;
    println!("{}", serde_json::to_string(&answer)?);
    Ok(())
}
