// Copyright (C) 2020-2024 Andy Kurnia.

use super::error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BonusKind {
    Normal,
    DoubleLetter,
    TripleLetter,
    DoubleWord,
    TripleWord,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Premium {
    pub word_multiplier: u8,
    pub tile_multiplier: u8,
}

impl BonusKind {
    #[inline(always)]
    pub fn premium(self) -> Premium {
        match self {
            BonusKind::Normal => FVS,
            BonusKind::DoubleLetter => DLS,
            BonusKind::TripleLetter => TLS,
            BonusKind::DoubleWord => DWS,
            BonusKind::TripleWord => TWS,
        }
    }

    pub fn from_label(label: &str) -> Option<BonusKind> {
        match label {
            "" => Some(BonusKind::Normal),
            "DL" => Some(BonusKind::DoubleLetter),
            "TL" => Some(BonusKind::TripleLetter),
            "DW" => Some(BonusKind::DoubleWord),
            "TW" => Some(BonusKind::TripleWord),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BonusKind::Normal => "",
            BonusKind::DoubleLetter => "DL",
            BonusKind::TripleLetter => "TL",
            BonusKind::DoubleWord => "DW",
            BonusKind::TripleWord => "TW",
        }
    }
}

const TWS: Premium = Premium {
    word_multiplier: 3,
    tile_multiplier: 1,
};
const DWS: Premium = Premium {
    word_multiplier: 2,
    tile_multiplier: 1,
};
const TLS: Premium = Premium {
    word_multiplier: 1,
    tile_multiplier: 3,
};
const DLS: Premium = Premium {
    word_multiplier: 1,
    tile_multiplier: 2,
};
const FVS: Premium = Premium {
    word_multiplier: 1,
    tile_multiplier: 1,
};

pub enum BoardLayout<'a> {
    Static(&'a [BonusKind]),
    Owned(Box<[BonusKind]>),
}

impl<'a> BoardLayout<'a> {
    pub fn from_labels<S: AsRef<str>>(
        labels: &[S],
    ) -> Result<BoardLayout<'static>, error::GameError> {
        if labels.is_empty() {
            return Err(error::GameError::InvalidConfig(
                "board needs at least one space".into(),
            ));
        }
        labels
            .iter()
            .enumerate()
            .map(|(i, label)| {
                BonusKind::from_label(label.as_ref()).ok_or_else(|| {
                    error::GameError::InvalidConfig(format!(
                        "space {} has unknown bonus {:?}",
                        i,
                        label.as_ref()
                    ))
                })
            })
            .collect::<Result<Box<[_]>, _>>()
            .map(BoardLayout::Owned)
    }

    #[inline(always)]
    pub fn spaces(&self) -> &[BonusKind] {
        match self {
            BoardLayout::Static(x) => *x,
            BoardLayout::Owned(x) => &x[..],
        }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.spaces().len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline(always)]
    pub fn bonus_at(&self, index: usize) -> Result<BonusKind, error::GameError> {
        self.spaces()
            .get(index)
            .copied()
            .ok_or(error::GameError::OutOfRange {
                index,
                len: self.len(),
            })
    }

    #[inline(always)]
    pub fn premium_at(&self, index: usize) -> Result<Premium, error::GameError> {
        self.bonus_at(index).map(BonusKind::premium)
    }
}

use BonusKind::{DoubleLetter as DL, Normal as FV, TripleWord as TW};

// the top row of the usual 15x15 board.
pub static COMMON_ROW: &[BonusKind] = &[
    TW, FV, FV, DL, FV, FV, FV, TW, FV, FV, FV, DL, FV, FV, TW, //
];

pub fn make_common_board_layout<'a>() -> BoardLayout<'a> {
    BoardLayout::Static(COMMON_ROW)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn common_row() {
        let layout = make_common_board_layout();
        assert_eq!(layout.len(), 15);
        assert_eq!(layout.bonus_at(0), Ok(BonusKind::TripleWord));
        assert_eq!(layout.bonus_at(3), Ok(BonusKind::DoubleLetter));
        assert_eq!(layout.bonus_at(7), Ok(BonusKind::TripleWord));
        assert_eq!(layout.bonus_at(14), Ok(BonusKind::TripleWord));
        assert_eq!(layout.bonus_at(1), Ok(BonusKind::Normal));
    }

    #[test]
    fn out_of_range() {
        let layout = make_common_board_layout();
        assert_eq!(
            layout.bonus_at(15),
            Err(error::GameError::OutOfRange { index: 15, len: 15 })
        );
    }

    #[test]
    fn labels_round_trip_through_layout() {
        let layout = BoardLayout::from_labels(&["TW", "", "TL", "DW", "DL"]).unwrap();
        let labels = layout
            .spaces()
            .iter()
            .map(|b| b.label())
            .collect::<Vec<_>>();
        assert_eq!(labels, ["TW", "", "TL", "DW", "DL"]);
        assert_eq!(
            layout.premium_at(2),
            Ok(Premium {
                word_multiplier: 1,
                tile_multiplier: 3
            })
        );
    }

    #[test]
    fn rejects_unknown_labels() {
        assert!(BoardLayout::from_labels(&["TW", "XX"]).is_err());
        assert!(BoardLayout::from_labels::<&str>(&[]).is_err());
    }
}
