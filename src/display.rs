// Copyright (C) 2020-2024 Andy Kurnia.

use super::{bag, board_layout, game_state};

#[inline(always)]
pub fn empty_label(bonus: board_layout::BonusKind) -> &'static str {
    match bonus {
        board_layout::BonusKind::TripleWord => "=",
        board_layout::BonusKind::DoubleWord => "-",
        board_layout::BonusKind::TripleLetter => "\"",
        board_layout::BonusKind::DoubleLetter => "'",
        board_layout::BonusKind::Normal => " ",
    }
}

pub fn fmt_board(
    board_layout: &board_layout::BoardLayout,
    board_tiles: &[Option<bag::Tile>],
) -> String {
    let mut s = String::new();
    s.push_str("  ");
    for i in 0..board_layout.len() {
        s.push_str(&format!(" {:>2}", i + 1));
    }
    s.push_str("\n  +");
    for _ in 0..board_layout.len() {
        s.push_str("---");
    }
    s.push_str("+\n  |");
    for (i, &bonus) in board_layout.spaces().iter().enumerate() {
        match board_tiles.get(i).and_then(Option::as_ref) {
            Some(tile) => s.push_str(&format!(" {} ", tile.label())),
            None => s.push_str(&format!(" {} ", empty_label(bonus))),
        }
    }
    s.push_str("|\n  +");
    for _ in 0..board_layout.len() {
        s.push_str("---");
    }
    s.push('+');
    s
}

pub fn fmt_rack_tiles(tiles: &[bag::Tile]) -> String {
    tiles
        .iter()
        .map(|tile| format!("{}{}", tile.label(), tile.score()))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn print_game(game_state: &game_state::GameState) {
    println!(
        "{}",
        fmt_board(
            game_state.game_config.board_layout(),
            game_state.current_board_state()
        )
    );
    println!(
        "rack: {}",
        fmt_rack_tiles(game_state.current_rack_contents())
    );
    println!(
        "score: {}, round: {}, bag: {}",
        game_state.current_game_score(),
        game_state.round() + 1,
        game_state.bag().total_remaining()
    );
}
