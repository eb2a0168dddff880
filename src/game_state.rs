// Copyright (C) 2020-2024 Andy Kurnia.

use super::{bag, error, game_config, placement, play_scorer, rack};
use rand::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundPhase {
    AwaitingPlacement,
    Submitted,
    RoundComplete,
}

// What a successful submit reports back for display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
    pub word: String,
    pub score: u64,
    pub total: u64,
}

pub struct GameState<'a> {
    pub game_config: &'a game_config::GameConfig<'a>,
    bag: bag::Bag<'a>,
    rack: rack::Rack,
    placement: placement::Placement,
    score: u64,
    phase: RoundPhase,
    round: u32,
}

impl<'a> GameState<'a> {
    // deals the first rack.
    pub fn new(game_config: &'a game_config::GameConfig<'a>, rng: &mut dyn RngCore) -> Self {
        let mut bag = bag::Bag::new(game_config.alphabet());
        let mut rack = rack::Rack::new();
        rack.refill(&mut bag, rng, game_config.rack_size());
        Self {
            game_config,
            bag,
            rack,
            placement: placement::Placement::new(game_config.board_layout().len()),
            score: 0,
            phase: RoundPhase::AwaitingPlacement,
            round: 0,
        }
    }

    #[inline(always)]
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    #[inline(always)]
    pub fn round(&self) -> u32 {
        self.round
    }

    #[inline(always)]
    pub fn bag(&self) -> &bag::Bag<'a> {
        &self.bag
    }

    #[inline(always)]
    pub fn placement(&self) -> &placement::Placement {
        &self.placement
    }

    #[inline(always)]
    pub fn current_game_score(&self) -> u64 {
        self.score
    }

    #[inline(always)]
    pub fn current_rack_contents(&self) -> &[bag::Tile] {
        self.rack.tiles()
    }

    // one entry per board space.
    #[inline(always)]
    pub fn current_board_state(&self) -> &[Option<bag::Tile>] {
        self.placement.spaces()
    }

    pub fn find_rack_tile(&self, label: char) -> Option<u32> {
        self.rack.find_label(label)
    }

    // Every public call leaves the round in AwaitingPlacement, so this only
    // fails if that stops being true.
    fn expect_phase(&self, action: &'static str) -> Result<(), error::GameError> {
        if self.phase == RoundPhase::AwaitingPlacement {
            Ok(())
        } else {
            Err(error::GameError::WrongPhase {
                action,
                phase: self.phase,
            })
        }
    }

    // A refused tile goes back to the slot it came from.
    pub fn place_tile(&mut self, tile_id: u32, index: usize) -> Result<(), error::GameError> {
        self.expect_phase("place")?;
        let pos = self
            .rack
            .position(tile_id)
            .ok_or(error::GameError::NotFound { tile_id })?;
        let tile = self.rack.remove(tile_id)?;
        match self.placement.place(index, tile) {
            Ok(()) => Ok(()),
            Err(placement::Rejected { error, tile }) => {
                self.rack.restore(pos, tile);
                Err(error)
            }
        }
    }

    pub fn submit(&mut self, rng: &mut dyn RngCore) -> Result<Submission, error::GameError> {
        self.expect_phase("submit")?;
        if self.placement.is_empty() {
            tracing::debug!("nothing to submit");
            return Err(error::GameError::EmptySubmission);
        }
        let score = play_scorer::compute_score(
            &self.placement.all_placements(),
            self.game_config.board_layout(),
        )?;
        let total = self
            .score
            .checked_add(score)
            .ok_or(error::GameError::ScoreOverflow)?;
        let word = self.placement.word();
        self.phase = RoundPhase::Submitted;

        self.score = total;
        self.placement.clear();
        self.phase = RoundPhase::RoundComplete;

        self.rack
            .refill(&mut self.bag, rng, self.game_config.rack_size());
        self.round += 1;
        self.phase = RoundPhase::AwaitingPlacement;

        tracing::info!(
            round = self.round,
            %word,
            score,
            total = self.score,
            "word submitted"
        );
        Ok(Submission {
            word,
            score,
            total: self.score,
        })
    }

    // The old tiles are used up, the bag does not get them back.
    pub fn request_new_rack(&mut self, rng: &mut dyn RngCore) -> Result<(), error::GameError> {
        self.expect_phase("deal a new rack")?;
        tracing::debug!(discarded = self.rack.len(), "new rack requested");
        self.rack.discard_all();
        self.rack
            .refill(&mut self.bag, rng, self.game_config.rack_size());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn starts_with_full_rack() {
        let game_config = game_config::make_english_game_config();
        let mut rng = ChaCha20Rng::seed_from_u64(5);
        let game_state = GameState::new(&game_config, &mut rng);
        assert_eq!(game_state.current_rack_contents().len(), 7);
        assert_eq!(game_state.bag().total_remaining(), 91);
        assert_eq!(game_state.current_game_score(), 0);
        assert_eq!(game_state.phase(), RoundPhase::AwaitingPlacement);
        assert_eq!(game_state.current_board_state().len(), 15);
    }

    #[test]
    fn empty_submit_changes_nothing() {
        let game_config = game_config::make_english_game_config();
        let mut rng = ChaCha20Rng::seed_from_u64(5);
        let mut game_state = GameState::new(&game_config, &mut rng);
        let rack_before = game_state
            .current_rack_contents()
            .iter()
            .map(|t| t.id())
            .collect::<Vec<_>>();
        assert_eq!(
            game_state.submit(&mut rng),
            Err(error::GameError::EmptySubmission)
        );
        assert_eq!(game_state.current_game_score(), 0);
        assert_eq!(game_state.round(), 0);
        assert_eq!(
            game_state
                .current_rack_contents()
                .iter()
                .map(|t| t.id())
                .collect::<Vec<_>>(),
            rack_before
        );
    }

    #[test]
    fn occupied_space_sends_tile_back_to_its_slot() {
        let game_config = game_config::make_english_game_config();
        let mut rng = ChaCha20Rng::seed_from_u64(11);
        let mut game_state = GameState::new(&game_config, &mut rng);
        let ids = game_state
            .current_rack_contents()
            .iter()
            .map(|t| t.id())
            .collect::<Vec<_>>();
        game_state.place_tile(ids[0], 5).unwrap();
        assert_eq!(
            game_state.place_tile(ids[3], 5),
            Err(error::GameError::SpaceOccupied { index: 5 })
        );
        assert_eq!(
            game_state.place_tile(ids[3], 99),
            Err(error::GameError::OutOfRange { index: 99, len: 15 })
        );
        assert_eq!(
            game_state
                .current_rack_contents()
                .iter()
                .map(|t| t.id())
                .collect::<Vec<_>>(),
            ids[1..]
        );
        assert_eq!(
            game_state.current_board_state()[5].as_ref().map(|t| t.id()),
            Some(ids[0])
        );
        assert_eq!(
            game_state.place_tile(ids[0], 6),
            Err(error::GameError::NotFound { tile_id: ids[0] })
        );
    }

    #[test]
    fn submit_scores_clears_and_refills() {
        let game_config = game_config::make_english_game_config();
        let mut rng = ChaCha20Rng::seed_from_u64(2024);
        let mut game_state = GameState::new(&game_config, &mut rng);
        let (id0, score0) = {
            let t = &game_state.current_rack_contents()[0];
            (t.id(), t.score() as u64)
        };
        let (id1, score1) = {
            let t = &game_state.current_rack_contents()[1];
            (t.id(), t.score() as u64)
        };
        // index 1 is plain, index 3 doubles the letter.
        game_state.place_tile(id1, 3).unwrap();
        game_state.place_tile(id0, 1).unwrap();
        let submission = game_state.submit(&mut rng).unwrap();
        assert_eq!(submission.score, score0 + score1 * 2);
        assert_eq!(submission.total, submission.score);
        assert_eq!(submission.word.chars().count(), 2);
        assert!(game_state.placement().is_empty());
        assert_eq!(game_state.current_rack_contents().len(), 7);
        assert_eq!(game_state.bag().total_remaining(), 98 - 9);
        assert_eq!(game_state.round(), 1);
        assert_eq!(game_state.phase(), RoundPhase::AwaitingPlacement);
    }

    #[test]
    fn new_rack_consumes_old_tiles() {
        let game_config = game_config::make_english_game_config();
        let mut rng = ChaCha20Rng::seed_from_u64(8);
        let mut game_state = GameState::new(&game_config, &mut rng);
        let id = game_state.current_rack_contents()[0].id();
        game_state.place_tile(id, 0).unwrap();
        let old = game_state
            .current_rack_contents()
            .iter()
            .map(|t| t.id())
            .collect::<Vec<_>>();
        game_state.request_new_rack(&mut rng).unwrap();
        assert_eq!(game_state.current_rack_contents().len(), 7);
        assert!(
            game_state
                .current_rack_contents()
                .iter()
                .all(|t| !old.contains(&t.id()))
        );
        assert_eq!(game_state.bag().total_remaining(), 98 - 7 - 7);
        assert_eq!(game_state.placement().len(), 1);
        assert_eq!(game_state.current_game_score(), 0);
    }

    fn fill_board(game_state: &mut GameState) {
        let ids = game_state
            .current_rack_contents()
            .iter()
            .map(|t| t.id())
            .collect::<Vec<_>>();
        for (index, id) in ids.into_iter().enumerate() {
            game_state.place_tile(id, index).unwrap();
        }
    }

    #[test]
    fn overflowing_word_changes_nothing() {
        let game_config = game_config::GameConfig::from_json_str(&format!(
            r#"{{ "letters": {{ "A": {{ "count": 50, "value": 1 }} }}, "board": {:?}, "rack_size": 41 }}"#,
            vec!["TW"; 41]
        ))
        .unwrap();
        let mut rng = ChaCha20Rng::seed_from_u64(3);
        let mut game_state = GameState::new(&game_config, &mut rng);
        fill_board(&mut game_state);
        assert_eq!(
            game_state.submit(&mut rng),
            Err(error::GameError::ScoreOverflow)
        );
        assert_eq!(game_state.current_game_score(), 0);
        assert_eq!(game_state.round(), 0);
        assert_eq!(game_state.placement().len(), 41);
        assert!(game_state.current_rack_contents().is_empty());
        assert_eq!(game_state.bag().total_remaining(), 9);
        assert_eq!(game_state.phase(), RoundPhase::AwaitingPlacement);
    }

    #[test]
    fn overflowing_total_changes_nothing() {
        let game_config = game_config::GameConfig::from_json_str(
            r#"{ "letters": { "A": { "count": 10, "value": 1 } }, "board": ["TW", "TW"], "rack_size": 2 }"#,
        )
        .unwrap();
        let mut rng = ChaCha20Rng::seed_from_u64(3);
        let mut game_state = GameState::new(&game_config, &mut rng);
        game_state.score = u64::MAX - 17;
        fill_board(&mut game_state);
        // (1 + 1) * 9 = 18 is one too many.
        assert_eq!(
            game_state.submit(&mut rng),
            Err(error::GameError::ScoreOverflow)
        );
        assert_eq!(game_state.current_game_score(), u64::MAX - 17);
        assert_eq!(game_state.placement().len(), 2);
        assert_eq!(game_state.bag().total_remaining(), 8);
    }

    #[test]
    fn half_finished_round_refuses_actions() {
        let game_config = game_config::make_english_game_config();
        let mut rng = ChaCha20Rng::seed_from_u64(6);
        let mut game_state = GameState::new(&game_config, &mut rng);
        let id = game_state.current_rack_contents()[0].id();
        game_state.phase = RoundPhase::Submitted;
        assert_eq!(
            game_state.place_tile(id, 0),
            Err(error::GameError::WrongPhase {
                action: "place",
                phase: RoundPhase::Submitted,
            })
        );
        game_state.phase = RoundPhase::RoundComplete;
        assert!(matches!(
            game_state.submit(&mut rng),
            Err(error::GameError::WrongPhase { .. })
        ));
        assert!(matches!(
            game_state.request_new_rack(&mut rng),
            Err(error::GameError::WrongPhase { .. })
        ));
        assert_eq!(game_state.current_rack_contents().len(), 7);
        assert!(game_state.placement().is_empty());
    }
}
