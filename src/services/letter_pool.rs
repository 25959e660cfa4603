use log::debug;
use rand::Rng;

use crate::constants::{CONSONANT_FREQUENCIES, VOWEL_FREQUENCIES};
use crate::errors::GameError;
use crate::models::LetterKind;

/// Weighted letter pools for one game. Each draw removes one unit of
/// weight, so the pools deplete without replacement until `reset`
/// restores the canonical frequency tables.
pub struct LetterPool {
    vowels: Vec<(char, u32)>,
    consonants: Vec<(char, u32)>,
}

impl LetterPool {
    pub fn new() -> Self {
        Self {
            vowels: VOWEL_FREQUENCIES.to_vec(),
            consonants: CONSONANT_FREQUENCIES.to_vec(),
        }
    }

    pub fn draw_vowel(&mut self) -> Result<char, GameError> {
        draw_weighted(&mut self.vowels, LetterKind::Vowel)
    }

    pub fn draw_consonant(&mut self) -> Result<char, GameError> {
        draw_weighted(&mut self.consonants, LetterKind::Consonant)
    }

    pub fn has_vowels_available(&self) -> bool {
        self.vowels.iter().any(|&(_, weight)| weight > 0)
    }

    pub fn has_consonants_available(&self) -> bool {
        self.consonants.iter().any(|&(_, weight)| weight > 0)
    }

    pub fn remaining_vowels(&self) -> u32 {
        self.vowels.iter().map(|&(_, weight)| weight).sum()
    }

    pub fn remaining_consonants(&self) -> u32 {
        self.consonants.iter().map(|&(_, weight)| weight).sum()
    }

    /// Discard all prior depletion and reseed both pools.
    pub fn reset(&mut self) {
        debug!("Resetting letter pools");
        self.vowels = VOWEL_FREQUENCIES.to_vec();
        self.consonants = CONSONANT_FREQUENCIES.to_vec();
    }
}

impl Default for LetterPool {
    fn default() -> Self {
        Self::new()
    }
}

/// Weighted sampling without replacement: pick a uniform point in the
/// total remaining weight, walk the entries accumulating weight until
/// the point is covered, then decrement the selected entry. Depleted
/// entries keep a zero weight and are skipped by the scan.
fn draw_weighted(pool: &mut [(char, u32)], kind: LetterKind) -> Result<char, GameError> {
    let total: u32 = pool.iter().map(|&(_, weight)| weight).sum();
    if total == 0 {
        return Err(GameError::Exhausted(kind));
    }

    let mut point = rand::thread_rng().gen_range(0..total);
    for entry in pool.iter_mut() {
        if point < entry.1 {
            entry.1 -= 1;
            debug!("Drew {} {}", kind, entry.0);
            return Ok(entry.0);
        }
        point -= entry.1;
    }

    unreachable!("weighted draw point exceeded total pool weight")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_draw_depletes_total_weight_by_one() {
        let mut pool = LetterPool::new();
        let vowels_before = pool.remaining_vowels();
        let consonants_before = pool.remaining_consonants();

        pool.draw_vowel().unwrap();
        pool.draw_consonant().unwrap();

        assert_eq!(pool.remaining_vowels(), vowels_before - 1);
        assert_eq!(pool.remaining_consonants(), consonants_before - 1);
    }

    #[test]
    fn test_draining_vowels_matches_frequency_table() {
        let mut pool = LetterPool::new();
        let mut drawn: HashMap<char, u32> = HashMap::new();

        while pool.has_vowels_available() {
            *drawn.entry(pool.draw_vowel().unwrap()).or_insert(0) += 1;
        }

        // Every unit of weight was handed out exactly once
        for (letter, weight) in VOWEL_FREQUENCIES {
            assert_eq!(drawn.get(&letter), Some(&weight));
        }
        assert_eq!(
            pool.draw_vowel(),
            Err(GameError::Exhausted(LetterKind::Vowel))
        );
    }

    #[test]
    fn test_draining_consonants_matches_frequency_table() {
        let mut pool = LetterPool::new();
        let mut drawn: HashMap<char, u32> = HashMap::new();

        while pool.has_consonants_available() {
            *drawn.entry(pool.draw_consonant().unwrap()).or_insert(0) += 1;
        }

        for (letter, weight) in CONSONANT_FREQUENCIES {
            assert_eq!(drawn.get(&letter), Some(&weight));
        }
        assert_eq!(
            pool.draw_consonant(),
            Err(GameError::Exhausted(LetterKind::Consonant))
        );
    }

    #[test]
    fn test_reset_restores_canonical_weights() {
        let initial_vowels: u32 = VOWEL_FREQUENCIES.iter().map(|&(_, w)| w).sum();
        let initial_consonants: u32 = CONSONANT_FREQUENCIES.iter().map(|&(_, w)| w).sum();

        let mut pool = LetterPool::new();
        for _ in 0..10 {
            pool.draw_vowel().unwrap();
            pool.draw_consonant().unwrap();
        }
        pool.reset();

        assert_eq!(pool.remaining_vowels(), initial_vowels);
        assert_eq!(pool.remaining_consonants(), initial_consonants);
    }
}
