// Copyright (C) 2020-2024 Andy Kurnia.

use super::{bag, board_layout, error};

// Letter premiums apply to their own tile. Word premiums multiply together,
// so two triple-word spaces make the word worth nine times its letters.
// The sum and the product are both order-independent, so the caller's
// ordering does not matter here.
// A custom board can stack enough word premiums to exceed u64, which is
// reported as ScoreOverflow.
pub fn compute_score(
    placements: &[(usize, &bag::Tile)],
    board_layout: &board_layout::BoardLayout,
) -> Result<u64, error::GameError> {
    if placements.is_empty() {
        return Err(error::GameError::EmptySubmission);
    }
    let mut word_multiplier = 1u64;
    let mut word_score = 0u64;
    for &(idx, tile) in placements {
        let premium = board_layout.premium_at(idx)?;
        word_multiplier = word_multiplier
            .checked_mul(premium.word_multiplier as u64)
            .ok_or(error::GameError::ScoreOverflow)?;
        word_score = word_score
            .checked_add(tile.score() as u64 * premium.tile_multiplier as u64)
            .ok_or(error::GameError::ScoreOverflow)?;
    }
    word_score
        .checked_mul(word_multiplier)
        .ok_or(error::GameError::ScoreOverflow)
}
