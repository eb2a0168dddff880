// Copyright (C) 2020-2024 Andy Kurnia.

mod rlhelper;

use linewords::{display, error, game_config, game_state, return_error};
use rand::prelude::*;

struct Args {
    seed: Option<u64>,
    config: Option<String>,
}

fn parse_args() -> error::Returns<Args> {
    let mut args = Args {
        seed: None,
        config: None,
    };
    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--seed" => match it.next() {
                Some(v) => args.seed = Some(v.parse()?),
                None => {
                    return_error!("--seed needs a number".into());
                }
            },
            "--config" => match it.next() {
                Some(v) => args.config = Some(v),
                None => {
                    return_error!("--config needs a file name".into());
                }
            },
            _ => {
                return_error!(format!("unknown argument {:?}", arg));
            }
        }
    }
    Ok(args)
}

fn parse_space(s: &str, board_len: usize) -> Option<usize> {
    match s.parse::<usize>() {
        Ok(n) if n >= 1 && n <= board_len => Some(n - 1),
        _ => None,
    }
}

// exactly one character, so "QX" is not taken as Q.
fn parse_letter(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

const HELP: &str = "\
place <letter> <space>  put a rack tile on a space (spaces count from 1)
play <letters> <space>  place several tiles left to right from a space
submit                  score the tiles on the board
newrack                 throw away the rack and draw a fresh one
board, rack, score      show the game
source <file>           run commands from a file
exit";

fn run_command(
    game_state: &mut game_state::GameState,
    rng: &mut dyn RngCore,
    strings: &[String],
) {
    let board_len = game_state.game_config.board_layout().len();
    match strings[0].as_str() {
        "help" => {
            println!("{}", HELP);
        }
        "board" | "rack" | "score" => {
            display::print_game(game_state);
        }
        "place" => {
            if strings.len() < 3 {
                println!("need a letter and a space");
                return;
            }
            let Some(label) = parse_letter(&strings[1]) else {
                println!("need a single letter, use play for several");
                return;
            };
            let Some(index) = parse_space(&strings[2], board_len) else {
                println!("space must be 1 to {}", board_len);
                return;
            };
            let Some(tile_id) = game_state.find_rack_tile(label) else {
                println!("no {} on the rack", label);
                return;
            };
            match game_state.place_tile(tile_id, index) {
                Ok(()) => display::print_game(game_state),
                Err(err) => println!("{}", err),
            }
        }
        "play" => {
            if strings.len() < 3 {
                println!("need letters and a starting space");
                return;
            }
            let Some(start) = parse_space(&strings[2], board_len) else {
                println!("space must be 1 to {}", board_len);
                return;
            };
            for (index, label) in (start..).zip(strings[1].chars()) {
                let Some(tile_id) = game_state.find_rack_tile(label) else {
                    println!("no {} on the rack", label);
                    break;
                };
                if let Err(err) = game_state.place_tile(tile_id, index) {
                    println!("{}", err);
                    break;
                }
            }
            display::print_game(game_state);
        }
        "submit" => match game_state.submit(rng) {
            Ok(submission) => {
                println!(
                    "Word: {}\nScore: {}\nTotal Score: {}",
                    submission.word, submission.score, submission.total
                );
                display::print_game(game_state);
            }
            Err(err) => println!("{}", err),
        },
        "newrack" => match game_state.request_new_rack(rng) {
            Ok(()) => display::print_game(game_state),
            Err(err) => println!("{}", err),
        },
        _ => {
            println!("invalid input, help for help");
        }
    }
}

fn main() -> error::Returns<()> {
    linewords::init_tracing();
    let args = parse_args()?;
    let game_config = match &args.config {
        Some(filename) => game_config::GameConfig::from_json_str(&std::fs::read_to_string(filename)?)?,
        None => game_config::make_english_game_config(),
    };
    let seed = args.seed.unwrap_or_else(rand::random);
    println!("seed: {}", seed);
    let mut rng = rand_chacha::ChaCha20Rng::seed_from_u64(seed);
    let mut game_state = game_state::GameState::new(&game_config, &mut rng);
    display::print_game(&game_state);

    let mut rl = rlhelper::new_rl_editor()?;
    let mut cmd_stack = Vec::<(String, Option<(String, usize)>)>::new();
    loop {
        if let Some((line, source)) = cmd_stack.pop() {
            if let Some((filename, line_num)) = source {
                println!("{}:{}> {}", filename, line_num, line);
            }
            match shell_words::split(&line) {
                Ok(strings) => {
                    if strings.is_empty() {
                        continue;
                    }
                    match strings[0].as_str() {
                        "exit" => {
                            break;
                        }
                        "source" => {
                            if strings.len() > 1 {
                                match std::fs::read_to_string(&strings[1]) {
                                    Ok(whole_file) => {
                                        let v = cmd_stack.len();
                                        for (line_num, line) in whole_file.lines().enumerate() {
                                            cmd_stack.push((
                                                line.to_string(),
                                                Some((strings[1].clone(), line_num + 1)),
                                            ));
                                        }
                                        cmd_stack[v..].reverse();
                                    }
                                    Err(err) => {
                                        println!("cannot open file: {:?}", err);
                                    }
                                }
                            } else {
                                println!("need another arg");
                            }
                        }
                        _ => {
                            run_command(&mut game_state, &mut rng, &strings);
                        }
                    }
                }
                Err(err) => {
                    println!("Bad quoting: {:?}", err);
                }
            }
        } else {
            match rl.readline(">> ") {
                Ok(line) => {
                    rl.add_history_entry(line.as_str())?;
                    cmd_stack.push((line, None));
                }
                Err(rustyline::error::ReadlineError::Interrupted) => {
                    println!("CTRL-C");
                    break;
                }
                Err(rustyline::error::ReadlineError::Eof) => {
                    println!("CTRL-D");
                    break;
                }
                Err(err) => {
                    println!("Error: {:?}", err);
                    break;
                }
            }
        }
    }

    println!("final score: {}", game_state.current_game_score());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn place_takes_one_letter() {
        assert_eq!(parse_letter("q"), Some('q'));
        assert_eq!(parse_letter("QX"), None);
        assert_eq!(parse_letter(""), None);
    }

    #[test]
    fn spaces_count_from_one() {
        assert_eq!(parse_space("1", 15), Some(0));
        assert_eq!(parse_space("15", 15), Some(14));
        assert_eq!(parse_space("0", 15), None);
        assert_eq!(parse_space("16", 15), None);
        assert_eq!(parse_space("x", 15), None);
    }
}
