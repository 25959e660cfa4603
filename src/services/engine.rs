use std::sync::Arc;

use log::{info, warn};

use crate::constants::{FULL_RACK_MULTIPLIER, RACK_SIZE, TOTAL_ROUNDS};
use crate::errors::GameError;
use crate::models::{Phase, RoundState};
use crate::services::letter_pool::LetterPool;
use crate::services::lexicon::Lexicon;

/// Drives one game of letters rounds: the letter-selection phase
/// against the pool, then word formation and scoring against the
/// lexicon. Phase transitions within a round are one-way.
pub struct RoundEngine {
    pool: LetterPool,
    lexicon: Arc<Lexicon>,
    state: RoundState,
}

impl RoundEngine {
    /// A new engine starts ready to play round one.
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self {
            pool: LetterPool::new(),
            lexicon,
            state: RoundState::new_round(1, 0),
        }
    }

    /// Reset the pool, the score, and the round counter.
    pub fn start_new_game(&mut self) {
        info!("Starting new game");
        self.pool.reset();
        self.state = RoundState::new_round(1, 0);
    }

    /// Draw a consonant onto the rack. Quota or rack exhaustion is a
    /// soft cap (callers may poll speculatively), reported as `None`.
    pub fn request_consonant(&mut self) -> Result<Option<char>, GameError> {
        self.require_phase(Phase::LetterSelection)?;

        if self.state.remaining_consonant_selections == 0 {
            warn!("No more consonants can be selected this round");
            return Ok(None);
        }
        if self.state.selected_letters.len() >= RACK_SIZE {
            warn!("Maximum letters already selected");
            return Ok(None);
        }

        let letter = match self.pool.draw_consonant() {
            Ok(letter) => letter,
            Err(err) => {
                warn!("Consonant draw failed: {}", err);
                return Ok(None);
            }
        };
        self.state.selected_letters.push(letter);
        self.state.remaining_consonant_selections -= 1;
        self.finish_selection_if_rack_full();

        info!("Selected consonant: {}", letter);
        Ok(Some(letter))
    }

    /// Draw a vowel onto the rack; same soft-cap behavior as consonants.
    pub fn request_vowel(&mut self) -> Result<Option<char>, GameError> {
        self.require_phase(Phase::LetterSelection)?;

        if self.state.remaining_vowel_selections == 0 {
            warn!("No more vowels can be selected this round");
            return Ok(None);
        }
        if self.state.selected_letters.len() >= RACK_SIZE {
            warn!("Maximum letters already selected");
            return Ok(None);
        }

        let letter = match self.pool.draw_vowel() {
            Ok(letter) => letter,
            Err(err) => {
                warn!("Vowel draw failed: {}", err);
                return Ok(None);
            }
        };
        self.state.selected_letters.push(letter);
        self.state.remaining_vowel_selections -= 1;
        self.finish_selection_if_rack_full();

        info!("Selected vowel: {}", letter);
        Ok(Some(letter))
    }

    /// Score a submission against the rack and close the round. An
    /// invalid or blank word scores zero; a word using the whole rack
    /// scores double. The longest formable words are recorded for
    /// end-of-round feedback either way.
    pub async fn submit_word(&mut self, word: &str) -> Result<u32, GameError> {
        self.require_phase(Phase::WordFormation)?;

        let available: String = self.state.selected_letters.iter().collect();
        let word = word.trim().to_uppercase();

        let mut score = 0;
        if self.lexicon.validate(&word, &available).await {
            let length = word.chars().count();
            score = length as u32;
            if length == RACK_SIZE {
                score *= FULL_RACK_MULTIPLIER;
            }
        }

        self.state.longest_possible_words = self.lexicon.longest_possible_words(&available).await;
        self.state.submitted_word = word.clone();
        self.state.current_round_score = score;
        self.state.total_score += score;
        self.state.phase = Phase::RoundComplete;

        info!("Word submitted: {:?}, score: {}", word, score);
        Ok(score)
    }

    /// Advance to the next round, or flag the game complete after the
    /// final round. Returns whether a new round actually started.
    pub fn start_next_round(&mut self) -> Result<bool, GameError> {
        if self.state.phase != Phase::RoundComplete {
            return Err(GameError::RoundNotComplete);
        }

        if self.state.current_round >= TOTAL_ROUNDS {
            info!("All {} rounds played, game complete", TOTAL_ROUNDS);
            self.state.game_complete = true;
            return Ok(false);
        }

        self.pool.reset();
        self.state = RoundState::new_round(self.state.current_round + 1, self.state.total_score);
        info!("Starting round {}", self.state.current_round);
        Ok(true)
    }

    /// Read-only snapshot of the current round.
    pub fn state(&self) -> RoundState {
        self.state.clone()
    }

    fn require_phase(&self, required: Phase) -> Result<(), GameError> {
        if self.state.phase == required {
            Ok(())
        } else {
            Err(GameError::WrongPhase {
                required,
                actual: self.state.phase,
            })
        }
    }

    fn finish_selection_if_rack_full(&mut self) {
        if self.state.selected_letters.len() >= RACK_SIZE {
            info!("Rack full, moving to word formation");
            self.state.phase = Phase::WordFormation;
        }
    }
}
