// Copyright (C) 2020-2024 Andy Kurnia.

use super::{bag, error};

// A refused tile comes back with the reason, so the caller can return it.
#[derive(Debug)]
pub struct Rejected {
    pub error: error::GameError,
    pub tile: bag::Tile,
}

// Tiles put on the board during the current turn, one slot per space.
pub struct Placement {
    spaces: Box<[Option<bag::Tile>]>,
    num_placed: usize,
}

impl Placement {
    pub fn new(board_len: usize) -> Self {
        Self {
            spaces: (0..board_len).map(|_| None).collect(),
            num_placed: 0,
        }
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.num_placed == 0
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.num_placed
    }

    #[inline(always)]
    pub fn board_len(&self) -> usize {
        self.spaces.len()
    }

    pub fn tile_at(&self, index: usize) -> Option<&bag::Tile> {
        self.spaces.get(index).and_then(Option::as_ref)
    }

    // one per board space, None where empty.
    pub fn spaces(&self) -> &[Option<bag::Tile>] {
        &self.spaces
    }

    pub fn place(&mut self, index: usize, tile: bag::Tile) -> Result<(), Rejected> {
        let len = self.spaces.len();
        let Some(space) = self.spaces.get_mut(index) else {
            return Err(Rejected {
                error: error::GameError::OutOfRange { index, len },
                tile,
            });
        };
        if space.is_some() {
            tracing::debug!(index, tile = tile.id(), "space occupied");
            return Err(Rejected {
                error: error::GameError::SpaceOccupied { index },
                tile,
            });
        }
        tracing::debug!(index, tile = tile.id(), label = %tile.label(), "placed tile");
        *space = Some(tile);
        self.num_placed += 1;
        Ok(())
    }

    // In board order, which is what makes the word, never in placing order.
    pub fn all_placements(&self) -> Vec<(usize, &bag::Tile)> {
        self.spaces
            .iter()
            .enumerate()
            .filter_map(|(index, space)| space.as_ref().map(|tile| (index, tile)))
            .collect()
    }

    pub fn word(&self) -> String {
        self.spaces
            .iter()
            .flatten()
            .map(|tile| tile.label())
            .collect()
    }

    // the tiles are discarded, not returned anywhere.
    pub fn clear(&mut self) {
        self.spaces.iter_mut().for_each(|space| *space = None);
        self.num_placed = 0;
    }
}
