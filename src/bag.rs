// Copyright (C) 2020-2024 Andy Kurnia.

use super::{alphabet, error};
use rand::prelude::*;

// A drawn tile. Deliberately neither Clone nor Copy: it lives either on the
// rack or on the board, and moving it is the only way to change that.
#[derive(Debug, PartialEq, Eq)]
pub struct Tile {
    id: u32,
    letter: u8,
    label: char,
    score: u8,
}

impl Tile {
    #[inline(always)]
    pub fn id(&self) -> u32 {
        self.id
    }

    #[inline(always)]
    pub fn letter(&self) -> u8 {
        self.letter
    }

    #[inline(always)]
    pub fn label(&self) -> char {
        self.label
    }

    // face value as at draw time.
    #[inline(always)]
    pub fn score(&self) -> u8 {
        self.score
    }
}

pub struct Bag<'a> {
    alphabet: &'a alphabet::Alphabet<'a>,
    remaining: Box<[u8]>,
    next_id: u32,
}

impl<'a> Bag<'a> {
    pub fn new(alphabet: &'a alphabet::Alphabet<'a>) -> Bag<'a> {
        Bag {
            alphabet,
            remaining: (0..alphabet.len())
                .map(|letter| alphabet.freq(letter))
                .collect(),
            next_id: 0,
        }
    }

    // letters outside the alphabet have none left.
    #[inline(always)]
    pub fn remaining(&self, letter: u8) -> u8 {
        self.remaining.get(letter as usize).copied().unwrap_or(0)
    }

    pub fn total_remaining(&self) -> usize {
        self.remaining.iter().map(|&n| n as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.remaining.iter().all(|&n| n == 0)
    }

    // Each letter that still has tiles is equally likely, regardless of how
    // many of it are left. This is not the same as drawing a random tile.
    pub fn draw(&mut self, rng: &mut dyn RngCore) -> Result<Tile, error::GameError> {
        let num_available = self.remaining.iter().filter(|&&n| n > 0).count();
        if num_available == 0 {
            tracing::debug!("bag is empty");
            return Err(error::GameError::NotAvailable);
        }
        let pick = rng.random_range(0..num_available);
        let letter = self
            .remaining
            .iter()
            .enumerate()
            .filter(|&(_, &n)| n > 0)
            .nth(pick)
            .map(|(letter, _)| letter as u8)
            .ok_or(error::GameError::NotAvailable)?;
        self.remaining[letter as usize] -= 1;
        let tile = self.mint(letter);
        tracing::debug!(
            tile = tile.id,
            label = %tile.label,
            left = self.remaining[letter as usize],
            "drew tile"
        );
        Ok(tile)
    }

    // takes one specific letter out, for callers that already know the tiles.
    pub fn draw_letter(&mut self, letter: u8) -> Result<Tile, error::GameError> {
        match self.remaining.get_mut(letter as usize) {
            Some(n) if *n > 0 => *n -= 1,
            _ => return Err(error::GameError::NotAvailable),
        }
        Ok(self.mint(letter))
    }

    fn mint(&mut self, letter: u8) -> Tile {
        let tile = Tile {
            id: self.next_id,
            letter,
            label: self.alphabet.label(letter),
            score: self.alphabet.score(letter),
        };
        self.next_id += 1;
        tile
    }
}

impl Clone for Bag<'_> {
    #[inline(always)]
    fn clone(&self) -> Self {
        Self {
            alphabet: self.alphabet,
            remaining: self.remaining.clone(),
            next_id: self.next_id,
        }
    }

    #[inline(always)]
    fn clone_from(&mut self, source: &Self) {
        self.alphabet = source.alphabet;
        self.remaining.clone_from(&source.remaining);
        self.next_id = source.next_id;
    }
}

#[cfg(test)]
pub(crate) fn make_tile(id: u32, label: char, score: u8) -> Tile {
    Tile {
        id,
        letter: (label as u8).wrapping_sub(b'A'),
        label,
        score,
    }
}
