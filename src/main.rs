mod cli;

use std::process::ExitCode;

use album_tally::{Album, GENRES, album_count, check_genre};
use clap::Parser;
use log::{info, warn};

use crate::cli::{Cli, Commands};

const DEMO_GENRES: &[&str] = &["Hip-Hop", "Pop", "Jazz", "Rock"];

fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        // RUST_LOG overrides the verbosity flag
        .parse_default_env()
        .init();

    match cli.command {
        Commands::Genres { json } => {
            if json {
                match serde_json::to_string(GENRES) {
                    Ok(s) => println!("{}", s),
                    Err(e) => {
                        eprintln!("Failed to encode genres: {}", e);
                        return ExitCode::FAILURE;
                    }
                }
            } else {
                for genre in GENRES {
                    println!("{}", genre);
                }
            }
        }
        Commands::Check { genre } => {
            if check_genre(&genre) {
                println!("{} is an allowed genre", genre);
            } else {
                println!("{} is not an allowed genre", genre);
                return ExitCode::FAILURE;
            }
        }
        Commands::New { genre, date } => match Album::new(genre, date) {
            Ok(album) => {
                match serde_json::to_string_pretty(&album) {
                    Ok(s) => println!("{}", s),
                    Err(e) => {
                        eprintln!("Failed to encode album: {}", e);
                        return ExitCode::FAILURE;
                    }
                }
                println!("Album count: {}", album_count());
            }
            Err(e) => {
                eprintln!("{}", e);
                return ExitCode::FAILURE;
            }
        },
        Commands::Demo => {
            for (i, genre) in DEMO_GENRES.iter().enumerate() {
                let date = format!("200{}-01-01", i);
                match Album::new(*genre, date) {
                    Ok(album) => {
                        info!("Created {} album ({})", album.genre(), album.release_date())
                    }
                    Err(e) => warn!("Skipped: {}", e),
                }
            }
            println!("Genres: {}", GENRES.join(", "));
            println!("Album count: {}", album_count());
        }
    }

    ExitCode::SUCCESS
}
