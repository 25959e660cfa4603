use std::fs::OpenOptions;
use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use clap::{Arg, Command};
use log::info;
use tokio::sync::Mutex;

mod constants;
mod errors;
mod handlers;
mod models;
mod services;
mod utils;

use models::AppState;
use services::engine::RoundEngine;
use services::lexicon::{DictionarySource, Lexicon};

// Function to initialize logging
fn init_logging(log_file: Option<&String>) {
    if let Some(file) = log_file {
        let log_output = OpenOptions::new()
            .create(true)
            .append(true)
            .open(file)
            .expect("Failed to open log file");

        env_logger::Builder::new()
            .target(env_logger::Target::Pipe(Box::new(log_output)))
            .init();
    } else {
        env_logger::init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let matches = Command::new("lettersd")
        .version("1.0")
        .about("Letters-round word game engine and service")
        .arg(
            Arg::new("listen-host")
                .long("listen-host")
                .num_args(1)
                .default_value("0.0.0.0:2346")
                .help("Specify the listen address (e.g., 0.0.0.0:2346)"),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .num_args(1)
                .help("Specify a log file path (if omitted, logs to stderr)"),
        )
        .arg(
            Arg::new("dictionary")
                .long("dictionary")
                .num_args(1)
                .default_value("./share/dictionary.txt")
                .help("Dictionary path: plain word list, or .json length buckets"),
        )
        .get_matches();

    let listen_host = matches
        .get_one::<String>("listen-host")
        .expect("listen-host argument must always have a default value")
        .clone();
    let log_file = matches.get_one::<String>("log-file");
    let dictionary = matches
        .get_one::<String>("dictionary")
        .expect("dictionary argument must always have a default value");

    init_logging(log_file);

    let lexicon = Arc::new(Lexicon::new(DictionarySource::from_path(dictionary)));
    lexicon.initialize().await;
    info!("Lexicon ready with {} words", lexicon.word_count().await);

    let state = web::Data::new(AppState {
        engine: Mutex::new(RoundEngine::new(lexicon.clone())),
        lexicon,
    });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(handlers::config::get_config)
            .service(handlers::game::new_game)
            .service(handlers::game::game_state)
            .service(handlers::game::request_consonant)
            .service(handlers::game::request_vowel)
            .service(handlers::game::submit_word)
            .service(handlers::game::next_round)
            .service(handlers::validation::validate_word)
    })
    .bind(&listen_host)?
    .run()
    .await
}
