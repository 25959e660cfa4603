use actix_web::{get, HttpResponse, Responder};
use log::info;

use crate::constants::{
    CONSONANT_FREQUENCIES, FULL_RACK_MULTIPLIER, MAX_CONSONANTS, MAX_VOWELS, MIN_CONSONANTS,
    MIN_VOWELS, RACK_SIZE, ROUND_TIME_LIMIT, TOTAL_ROUNDS, VOWEL_FREQUENCIES,
};
use crate::models::ConfigResponse;

#[get("/config")]
pub async fn get_config() -> impl Responder {
    info!("Serving game configuration");

    HttpResponse::Ok().json(ConfigResponse {
        total_rounds: TOTAL_ROUNDS,
        round_time_limit: ROUND_TIME_LIMIT,
        rack_size: RACK_SIZE,
        min_vowels: MIN_VOWELS,
        max_vowels: MAX_VOWELS,
        min_consonants: MIN_CONSONANTS,
        max_consonants: MAX_CONSONANTS,
        full_rack_multiplier: FULL_RACK_MULTIPLIER,
        vowel_frequencies: VOWEL_FREQUENCIES.iter().copied().collect(),
        consonant_frequencies: CONSONANT_FREQUENCIES.iter().copied().collect(),
    })
}
