use actix_web::{get, post, web, HttpResponse, Responder};

use crate::errors::GameError;
use crate::models::{AppState, DrawResponse, NextRoundResponse, SubmitRequest, SubmitResponse};

/// Phase violations are caller bugs; surface them as a conflict rather
/// than swallowing them.
fn reject(err: &GameError) -> HttpResponse {
    HttpResponse::Conflict().body(err.to_string())
}

#[post("/game")]
pub async fn new_game(data: web::Data<AppState>) -> impl Responder {
    let mut engine = data.engine.lock().await;
    engine.start_new_game();
    HttpResponse::Ok().json(engine.state())
}

#[get("/game")]
pub async fn game_state(data: web::Data<AppState>) -> impl Responder {
    let engine = data.engine.lock().await;
    HttpResponse::Ok().json(engine.state())
}

#[post("/game/consonant")]
pub async fn request_consonant(data: web::Data<AppState>) -> impl Responder {
    let mut engine = data.engine.lock().await;
    match engine.request_consonant() {
        Ok(letter) => HttpResponse::Ok().json(DrawResponse {
            letter,
            state: engine.state(),
        }),
        Err(err) => reject(&err),
    }
}

#[post("/game/vowel")]
pub async fn request_vowel(data: web::Data<AppState>) -> impl Responder {
    let mut engine = data.engine.lock().await;
    match engine.request_vowel() {
        Ok(letter) => HttpResponse::Ok().json(DrawResponse {
            letter,
            state: engine.state(),
        }),
        Err(err) => reject(&err),
    }
}

#[post("/game/word")]
pub async fn submit_word(
    data: web::Data<AppState>,
    body: web::Json<SubmitRequest>,
) -> impl Responder {
    let mut engine = data.engine.lock().await;
    match engine.submit_word(&body.word).await {
        Ok(score) => HttpResponse::Ok().json(SubmitResponse {
            valid: score > 0,
            score,
            state: engine.state(),
        }),
        Err(err) => reject(&err),
    }
}

#[post("/game/next")]
pub async fn next_round(data: web::Data<AppState>) -> impl Responder {
    let mut engine = data.engine.lock().await;
    match engine.start_next_round() {
        Ok(advanced) => HttpResponse::Ok().json(NextRoundResponse {
            advanced,
            state: engine.state(),
        }),
        Err(err) => reject(&err),
    }
}
