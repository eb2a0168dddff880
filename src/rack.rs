// Copyright (C) 2020-2024 Andy Kurnia.

use super::{bag, error};
use rand::prelude::*;

#[derive(Default)]
pub struct Rack {
    tiles: Vec<bag::Tile>,
}

impl Rack {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline(always)]
    pub fn tiles(&self) -> &[bag::Tile] {
        &self.tiles
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    // An empty bag just leaves the rack short.
    pub fn refill(&mut self, bag: &mut bag::Bag, rng: &mut dyn RngCore, rack_size: usize) {
        while self.tiles.len() < rack_size {
            match bag.draw(rng) {
                Ok(tile) => self.tiles.push(tile),
                Err(_) => {
                    tracing::debug!(
                        have = self.tiles.len(),
                        want = rack_size,
                        "rack left short"
                    );
                    break;
                }
            }
        }
    }

    pub fn position(&self, tile_id: u32) -> Option<usize> {
        self.tiles.iter().position(|tile| tile.id() == tile_id)
    }

    // leftmost tile showing this label.
    pub fn find_label(&self, label: char) -> Option<u32> {
        let label = label.to_ascii_uppercase();
        self.tiles
            .iter()
            .find(|tile| tile.label() == label)
            .map(|tile| tile.id())
    }

    pub fn remove(&mut self, tile_id: u32) -> Result<bag::Tile, error::GameError> {
        let pos = self
            .position(tile_id)
            .ok_or(error::GameError::NotFound { tile_id })?;
        Ok(self.tiles.remove(pos))
    }

    // puts a tile back where it was taken from, clamped to the end.
    pub fn restore(&mut self, pos: usize, tile: bag::Tile) {
        let pos = pos.min(self.tiles.len());
        self.tiles.insert(pos, tile);
    }

    // the tiles are gone for good, not returned to the bag.
    pub fn discard_all(&mut self) {
        self.tiles.clear();
    }
}
