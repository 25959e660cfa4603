pub mod engine;
pub mod letter_pool;
pub mod lexicon;
