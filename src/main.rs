//! Tic-tac-toe against an unbeatable minimax opponent.
//!
//! ## Usage
//!
//! - `tictactoe-minimax` - Play X against the computer
//! - `tictactoe-minimax play --opponent human` - Two humans at one console
//! - `tictactoe-minimax demo --games 500` - Computer against random play

use std::io;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use tictactoe_minimax::constants::DEMO_GAMES;
use tictactoe_minimax::game::{Game, Participant};
use tictactoe_minimax::playout::self_play;

/// Tic-tac-toe with an exhaustive minimax opponent
#[derive(Parser)]
#[command(name = "tictactoe-minimax")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log more to stderr (-v info, -vv debug, -vvv trace). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game as X (the default)
    Play {
        /// Who plays O
        #[arg(long, value_enum, default_value_t = Opponent::Computer)]
        opponent: Opponent,
    },
    /// Let the computer play O against a random X and report the results
    Demo {
        /// Number of games to play
        #[arg(long, default_value_t = DEMO_GAMES)]
        games: usize,
        /// Seed for the random player; drawn from the system if omitted
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Opponent {
    Computer,
    Human,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Some(Commands::Play { opponent }) => play(opponent),
        None => play(Opponent::Computer),
        Some(Commands::Demo { games, seed }) => run_demo(games, seed),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(io::stderr)
        .init();
}

fn play(opponent: Opponent) -> Result<()> {
    let o = match opponent {
        Opponent::Computer => Participant::Computer,
        Opponent::Human => Participant::Human,
    };
    let mut game = Game::new(Participant::Human, o)?;
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    game.run(&mut stdin.lock(), &mut stdout)?;
    Ok(())
}

fn run_demo(games: usize, seed: Option<u64>) -> Result<()> {
    let seed = seed.unwrap_or_else(|| fastrand::u64(..));
    println!("Computer (o) against random play (x), {games} games, seed {seed}\n");

    let tally = self_play(games, seed)?;
    println!("Computer wins: {}", tally.wins);
    println!("Draws:         {}", tally.draws);
    println!("Computer losses: {}", tally.losses);
    Ok(())
}
