//! Fixed game configuration: round structure, selection quotas, and the
//! canonical letter frequency tables the pools are seeded from.

/// Total number of rounds in a game
pub const TOTAL_ROUNDS: u32 = 4;

/// Time limit for each round, in seconds
pub const ROUND_TIME_LIMIT: u32 = 30;

/// Number of letters drawn per round (the rack)
pub const RACK_SIZE: usize = 9;

/// Minimum vowels a caller should request per round
pub const MIN_VOWELS: usize = 3;

/// Maximum vowels that may be requested per round
pub const MAX_VOWELS: usize = 5;

/// Minimum consonants a caller should request per round
pub const MIN_CONSONANTS: usize = 4;

/// Maximum consonants that may be requested per round
pub const MAX_CONSONANTS: usize = 6;

/// Score multiplier for a word that uses the whole rack
pub const FULL_RACK_MULTIPLIER: u32 = 2;

/// Shortest word admitted to the lexicon
pub const MIN_WORD_LENGTH: usize = 3;

/// Longest word admitted to the lexicon, bounded by the rack
pub const MAX_WORD_LENGTH: usize = RACK_SIZE;

/// Most times any single letter may repeat in an admitted word.
/// Deliberately tied to the pool quotas: words needing a letter three
/// times are almost never spellable from a nine-letter rack.
pub const MAX_LETTER_REPEATS: usize = 2;

/// Canonical vowel weights, based on standard English letter frequency
pub const VOWEL_FREQUENCIES: [(char, u32); 5] = [
    ('A', 15),
    ('E', 21),
    ('I', 13),
    ('O', 13),
    ('U', 5),
];

/// Canonical consonant weights, based on standard English letter frequency
pub const CONSONANT_FREQUENCIES: [(char, u32); 21] = [
    ('B', 4),
    ('C', 6),
    ('D', 8),
    ('F', 4),
    ('G', 5),
    ('H', 10),
    ('J', 1),
    ('K', 2),
    ('L', 9),
    ('M', 6),
    ('N', 13),
    ('P', 4),
    ('Q', 1),
    ('R', 14),
    ('S', 10),
    ('T', 15),
    ('V', 3),
    ('W', 4),
    ('X', 1),
    ('Y', 4),
    ('Z', 1),
];
