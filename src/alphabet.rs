// Copyright (C) 2020-2024 Andy Kurnia.

use super::error;

// letter numbering follows table order, starting from 0.
// there is no blank, every letter has a fixed face value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Letter {
    pub label: char,
    pub freq: u8,
    pub score: u8,
}

const fn letter(label: char, freq: u8, score: u8) -> Letter {
    Letter { label, freq, score }
}

pub enum Alphabet<'a> {
    Static(&'a [Letter]),
    Owned(Box<[Letter]>),
}

impl<'a> Alphabet<'a> {
    // labels must be unique and every letter must have a positive score.
    pub fn from_letters(letters: Vec<Letter>) -> Result<Alphabet<'static>, error::GameError> {
        if letters.is_empty() || letters.len() > u8::MAX as usize {
            return Err(error::GameError::InvalidConfig(format!(
                "need 1 to {} letters, found {}",
                u8::MAX,
                letters.len()
            )));
        }
        for (i, l) in letters.iter().enumerate() {
            if l.score == 0 {
                return Err(error::GameError::InvalidConfig(format!(
                    "letter {:?} must be worth at least 1 point",
                    l.label
                )));
            }
            if letters[..i].iter().any(|other| other.label == l.label) {
                return Err(error::GameError::InvalidConfig(format!(
                    "letter {:?} is listed twice",
                    l.label
                )));
            }
        }
        Ok(Alphabet::Owned(letters.into_boxed_slice()))
    }

    #[inline(always)]
    fn letters(&self) -> &[Letter] {
        match self {
            Alphabet::Static(x) => *x,
            Alphabet::Owned(x) => &x[..],
        }
    }

    #[inline(always)]
    pub fn len(&self) -> u8 {
        self.letters().len() as u8
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline(always)]
    pub fn get(&self, idx: u8) -> &Letter {
        &self.letters()[idx as usize]
    }

    #[inline(always)]
    pub fn label(&self, idx: u8) -> char {
        self.get(idx).label
    }

    #[inline(always)]
    pub fn score(&self, idx: u8) -> u8 {
        self.get(idx).score
    }

    #[inline(always)]
    pub fn freq(&self, idx: u8) -> u8 {
        self.get(idx).freq
    }

    pub fn num_tiles(&self) -> u16 {
        self.letters().iter().map(|l| l.freq as u16).sum()
    }

    // case-insensitive.
    pub fn find(&self, label: char) -> Option<u8> {
        let label = label.to_ascii_uppercase();
        self.letters()
            .iter()
            .position(|l| l.label == label)
            .map(|idx| idx as u8)
    }

    pub fn fmt_rack(&self, rack: &[u8]) -> String {
        rack.iter().map(|&idx| self.label(idx)).collect()
    }
}

pub static ENGLISH_LETTERS: &[Letter] = &[
    letter('A', 9, 1),
    letter('B', 2, 3),
    letter('C', 2, 3),
    letter('D', 4, 2),
    letter('E', 12, 1),
    letter('F', 2, 4),
    letter('G', 3, 2),
    letter('H', 2, 4),
    letter('I', 9, 1),
    letter('J', 1, 8),
    letter('K', 1, 5),
    letter('L', 4, 1),
    letter('M', 2, 3),
    letter('N', 6, 1),
    letter('O', 8, 1),
    letter('P', 2, 3),
    letter('Q', 1, 10),
    letter('R', 6, 1),
    letter('S', 4, 1),
    letter('T', 6, 1),
    letter('U', 4, 1),
    letter('V', 2, 4),
    letter('W', 2, 4),
    letter('X', 1, 8),
    letter('Y', 2, 4),
    letter('Z', 1, 10),
];

pub fn make_english_alphabet<'a>() -> Alphabet<'a> {
    Alphabet::Static(ENGLISH_LETTERS)
}
