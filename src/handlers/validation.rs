use actix_web::{get, web, HttpResponse, Responder};
use log::info;

use crate::models::{AppState, ValidateQuery};

#[get("/validate/{word}")]
pub async fn validate_word(
    data: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<ValidateQuery>,
) -> impl Responder {
    let word = path.into_inner();

    let valid = match &query.letters {
        Some(letters) => data.lexicon.validate(&word, letters).await,
        None => data.lexicon.is_valid_word(&word).await,
    };

    if valid {
        info!("Valid word queried: {}", word.to_uppercase());
        HttpResponse::Ok().finish()
    } else {
        info!("Invalid word queried: {}", word.to_uppercase());
        HttpResponse::NotFound().finish()
    }
}
