// Copyright (C) 2020-2024 Andy Kurnia.

use super::{alphabet, board_layout, error};

pub struct StaticGameConfig<'a> {
    alphabet: alphabet::Alphabet<'a>,
    board_layout: board_layout::BoardLayout<'a>,
    rack_size: usize,
}

pub enum GameConfig<'a> {
    Static(StaticGameConfig<'a>),
}

impl<'a> GameConfig<'a> {
    #[inline(always)]
    pub fn alphabet(&self) -> &alphabet::Alphabet<'a> {
        match self {
            GameConfig::Static(x) => &x.alphabet,
        }
    }

    #[inline(always)]
    pub fn board_layout(&self) -> &board_layout::BoardLayout<'a> {
        match self {
            GameConfig::Static(x) => &x.board_layout,
        }
    }

    #[inline(always)]
    pub fn rack_size(&self) -> usize {
        match self {
            GameConfig::Static(x) => x.rack_size,
        }
    }
}

pub fn make_english_game_config<'a>() -> GameConfig<'a> {
    GameConfig::Static(StaticGameConfig {
        alphabet: alphabet::make_english_alphabet(),
        board_layout: board_layout::make_common_board_layout(),
        rack_size: 7,
    })
}

// every field is optional, missing ones come from the english config.
//   {
//     "letters": { "A": { "count": 9, "value": 1 }, ... },
//     "board": [ "TW", "", "", "DL", ... ],
//     "rack_size": 7
//   }
#[derive(serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    letters: Option<std::collections::BTreeMap<char, LetterEntry>>,
    board: Option<Vec<String>>,
    rack_size: Option<usize>,
}

#[derive(serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct LetterEntry {
    count: u8,
    value: u8,
}

impl GameConfig<'static> {
    pub fn from_json_str(json: &str) -> Result<Self, error::GameError> {
        Self::from_config_file(
            serde_json::from_str(json)
                .map_err(|e| error::GameError::InvalidConfig(e.to_string()))?,
        )
    }

    pub fn from_json_value(value: serde_json::Value) -> Result<Self, error::GameError> {
        Self::from_config_file(
            serde_json::from_value(value)
                .map_err(|e| error::GameError::InvalidConfig(e.to_string()))?,
        )
    }

    fn from_config_file(file: ConfigFile) -> Result<Self, error::GameError> {
        let alphabet = match file.letters {
            Some(letters) => {
                let mut letters = letters
                    .into_iter()
                    .map(|(label, entry)| alphabet::Letter {
                        label: label.to_ascii_uppercase(),
                        freq: entry.count,
                        score: entry.value,
                    })
                    .collect::<Vec<_>>();
                letters.sort_by_key(|l| l.label);
                alphabet::Alphabet::from_letters(letters)?
            }
            None => alphabet::make_english_alphabet(),
        };
        let board_layout = match file.board {
            Some(labels) => board_layout::BoardLayout::from_labels(&labels)?,
            None => board_layout::make_common_board_layout(),
        };
        let rack_size = file.rack_size.unwrap_or(7);
        if rack_size == 0 {
            return Err(error::GameError::InvalidConfig(
                "rack_size must be positive".into(),
            ));
        }
        Ok(GameConfig::Static(StaticGameConfig {
            alphabet,
            board_layout,
            rack_size,
        }))
    }
}
