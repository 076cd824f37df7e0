use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use hand_cricket::core::{Coin, Difficulty, EngineConfig, Guess, Phase, Role, Snapshot};
use hand_cricket::engine::{GameEngine, Update};
use hand_cricket::records::{record_game, MemoryProfileStore, ProfileStore};

/// Play hand cricket against the computer in the terminal.
#[derive(Parser)]
#[command(name = "hand-cricket", about = "Two-innings hand cricket against the computer")]
struct Cli {
    /// Opponent difficulty: easy, medium or hard
    #[arg(long)]
    difficulty: Option<Difficulty>,

    /// Fixed RNG seed for a reproducible game
    #[arg(long)]
    seed: Option<u64>,

    /// Path to a TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Name to record results under
    #[arg(long, default_value = "player")]
    player: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => EngineConfig::default(),
    };
    if let Some(difficulty) = cli.difficulty {
        config.difficulty = difficulty;
    }
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }

    let mut engine = GameEngine::new(config);
    let mut store = MemoryProfileStore::new();
    let stdin = io::stdin();
    let mut out = io::stdout().lock();

    writeln!(out, "Hand Cricket ({} mode)", engine.state().difficulty)?;
    writeln!(out, "Commands: head | tails | bat | bowl | 0-10 | difficulty <level> | reset | quit")?;
    print_status(&mut out, &engine.snapshot())?;

    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let outcome = match input.to_ascii_lowercase().as_str() {
            "quit" | "exit" => break,
            "reset" => Ok(engine.reset()),
            "bat" => engine.choose_role(Role::Batting),
            "bowl" => engine.choose_role(Role::Bowling),
            cmd if cmd.starts_with("difficulty") => {
                let level = cmd.trim_start_matches("difficulty").trim();
                match level.parse::<Difficulty>().and_then(|d| engine.set_difficulty(d)) {
                    Ok(snapshot) => {
                        writeln!(out, "Difficulty set to {}.", snapshot.difficulty)?;
                    }
                    Err(err) => writeln!(out, "{err}")?,
                }
                continue;
            }
            cmd => match cmd.parse::<Coin>() {
                Ok(call) => engine.call_toss(call),
                Err(_) => cmd.parse::<Guess>().and_then(|guess| engine.play(guess)),
            },
        };

        match outcome {
            Ok(update) => {
                render(&mut out, &update)?;
                if update.snapshot.phase == Phase::Finished {
                    let profile = record_game(&mut store, &cli.player, &update.snapshot)?;
                    writeln!(
                        out,
                        "{}: {} played, {} won, {} lost, {} tied. Type 'reset' to play again.",
                        profile.player_id, profile.games_played, profile.wins, profile.losses, profile.ties
                    )?;
                }
            }
            Err(err) => writeln!(out, "{err}")?,
        }
    }

    if let Some(profile) = store.get(&cli.player) {
        writeln!(
            out,
            "Session: {} games, best score {}, win rate {:.0}%",
            profile.games_played,
            profile.best_score,
            profile.win_rate() * 100.0
        )?;
    }
    Ok(())
}

fn render(out: &mut impl Write, update: &Update) -> io::Result<()> {
    for event in &update.events {
        writeln!(out, "{event}")?;
    }
    print_status(out, &update.snapshot)
}

fn print_status(out: &mut impl Write, snapshot: &Snapshot) -> io::Result<()> {
    writeln!(out, "{}", snapshot.status_line())?;
    if snapshot.phase == Phase::Playing {
        write!(
            out,
            "  You {} | Computer {}",
            snapshot.player_runs, snapshot.opponent_runs
        )?;
        if let Some(needed) = snapshot.runs_to_target() {
            write!(out, " | {needed} to target")?;
        }
        writeln!(out)?;
    }
    Ok(())
}
