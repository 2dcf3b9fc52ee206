use std::io::{BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use isolation::{GameState, Player};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::game::play_game;
use crate::recording::Recorder;

mod game;
mod recording;

#[derive(Parser)]
struct Args {
    /// The symbol the human plays, "x" or "o" (asked interactively if omitted)
    #[arg(short, long, value_parser = parse_player)]
    side: Option<Player>,

    /// The symbol that moves first (picked at random if omitted)
    #[arg(short, long, value_parser = parse_player)]
    first: Option<Player>,

    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// Record finished games as JSON files into this directory
    #[arg(short, long)]
    record_games_to_directory: Option<PathBuf>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

fn parse_player(s: &str) -> Result<Player, String> {
    match s {
        "x" | "X" => Ok(Player::X),
        "o" | "O" => Ok(Player::O),
        _ => Err(String::from("expected 'x' or 'o'")),
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    initialize_logging(args.log_level);

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut recorder = match args.record_games_to_directory {
        Some(directory) => Some(Recorder::new(directory)?),
        None => None,
    };

    loop {
        let human = match args.side {
            Some(side) => side,
            None => prompt_side()?,
        };
        let first_to_move = match args.first {
            Some(first) => first,
            None => {
                if rng.gen::<bool>() {
                    Player::X
                } else {
                    Player::O
                }
            }
        };
        info!(human = %human, first = %first_to_move, "Starting a new game");

        let mut state = GameState::new(human, first_to_move);
        let winner = play_game(&mut state, &mut recorder)?;
        println!("Game over: {} wins!", winner);

        if !prompt_yes_no("Would you like to play again? (y or n): ")? {
            break Ok(());
        }
    }
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

fn prompt_side() -> anyhow::Result<Player> {
    loop {
        match parse_player(&prompt_line("Choose your side (x or o): ")?) {
            Ok(side) => break Ok(side),
            Err(_) => println!("Enter 'x' or 'o'"),
        }
    }
}

fn prompt_yes_no(message: &str) -> anyhow::Result<bool> {
    loop {
        match prompt_line(message)?.as_str() {
            "y" => break Ok(true),
            "n" => break Ok(false),
            _ => println!("Enter 'y' or 'n'"),
        }
    }
}

fn prompt_line(message: &str) -> anyhow::Result<String> {
    print!("{}", message);
    std::io::stdout().flush()?;
    let mut buf = String::new();
    if std::io::stdin().lock().read_line(&mut buf)? == 0 {
        anyhow::bail!("Unexpected end of input");
    }
    Ok(String::from(buf.trim()))
}
