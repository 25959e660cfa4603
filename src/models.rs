use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::constants::{MAX_CONSONANTS, MAX_VOWELS, ROUND_TIME_LIMIT};
use crate::services::engine::RoundEngine;
use crate::services::lexicon::Lexicon;

/// Application state shared across all handlers. Round mutations are
/// single-caller by contract, so one async mutex guards the engine.
pub struct AppState {
    pub engine: Mutex<RoundEngine>,
    pub lexicon: Arc<Lexicon>,
}

/// Phase of the current round. Transitions are one-way:
/// LetterSelection -> WordFormation -> RoundComplete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Phase {
    LetterSelection,
    WordFormation,
    RoundComplete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LetterKind {
    Vowel,
    Consonant,
}

impl fmt::Display for LetterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LetterKind::Vowel => write!(f, "vowel"),
            LetterKind::Consonant => write!(f, "consonant"),
        }
    }
}

/// Snapshot of one game in progress.
#[derive(Debug, Clone, Serialize)]
pub struct RoundState {
    /// Current round number, 1-based
    pub current_round: u32,
    pub phase: Phase,
    /// Set once all rounds have been played
    pub game_complete: bool,
    /// Letters drawn so far this round, in draw order
    pub selected_letters: Vec<char>,
    pub remaining_consonant_selections: usize,
    pub remaining_vowel_selections: usize,
    /// Round time budget in seconds; countdown is the caller's job
    pub remaining_time: u32,
    pub submitted_word: String,
    pub current_round_score: u32,
    pub total_score: u32,
    /// Longest dictionary words formable from this round's rack
    pub longest_possible_words: Vec<String>,
}

impl RoundState {
    /// Fresh state for the given round, carrying the running total.
    pub fn new_round(round: u32, total_score: u32) -> Self {
        Self {
            current_round: round,
            phase: Phase::LetterSelection,
            game_complete: false,
            selected_letters: Vec::new(),
            remaining_consonant_selections: MAX_CONSONANTS,
            remaining_vowel_selections: MAX_VOWELS,
            remaining_time: ROUND_TIME_LIMIT,
            submitted_word: String::new(),
            current_round_score: 0,
            total_score,
            longest_possible_words: Vec::new(),
        }
    }
}

#[derive(Deserialize)]
pub struct SubmitRequest {
    pub word: String,
}

#[derive(Serialize)]
pub struct DrawResponse {
    /// None when the request was a no-op (quota or rack already full)
    pub letter: Option<char>,
    pub state: RoundState,
}

#[derive(Serialize)]
pub struct SubmitResponse {
    pub valid: bool,
    pub score: u32,
    pub state: RoundState,
}

#[derive(Serialize)]
pub struct NextRoundResponse {
    /// False once all rounds have been played
    pub advanced: bool,
    pub state: RoundState,
}

#[derive(Deserialize)]
pub struct ValidateQuery {
    /// Rack letters; when present the word must also be formable from them
    pub letters: Option<String>,
}

#[derive(Serialize)]
pub struct ConfigResponse {
    pub total_rounds: u32,
    pub round_time_limit: u32,
    pub rack_size: usize,
    pub min_vowels: usize,
    pub max_vowels: usize,
    pub min_consonants: usize,
    pub max_consonants: usize,
    pub full_rack_multiplier: u32,
    pub vowel_frequencies: HashMap<char, u32>,
    pub consonant_frequencies: HashMap<char, u32>,
}
