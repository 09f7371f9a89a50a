//! Tournament CLI
//!
//! Run matches between Mancala engines and analyse boards.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use mancala_core::{best_move, minimax, Board, Player};
use serde::Serialize;
use tournament::{create_engine, MatchResult, MatchRunner, TournamentConfig, TournamentError};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Mancala tournament runner
#[derive(Parser, Debug)]
#[command(name = "tournament")]
#[command(about = "Play Mancala engines against each other", long_about = None)]
#[command(version)]
struct Cli {
    /// TOML config file (missing file = defaults)
    #[arg(long, global = true, default_value = "tournament.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

/// Options for a match
#[derive(clap::Args, Debug)]
struct MatchArgs {
    /// Games per match
    #[arg(short, long)]
    games: Option<u32>,

    /// Minimax search depth
    #[arg(short, long)]
    depth: Option<u8>,

    /// Random plies before the engines take over
    #[arg(long)]
    opening_plies: Option<u32>,

    /// Seed for the opening plies
    #[arg(long)]
    seed: Option<u64>,

    /// Print the final tally as JSON on stdout
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play a match between two engines (minimax, random, random:<seed>)
    Match {
        engine1: String,
        engine2: String,
        #[command(flatten)]
        args: MatchArgs,
    },

    /// Search a board and print the recommended move
    Analyze {
        /// Board as "a0,..,a5,storeA/b7,..,b12,storeB"
        #[arg(long, default_value = "4,4,4,4,4,4,0/4,4,4,4,4,4,0")]
        board: String,

        /// Side to move: a or b
        #[arg(long, default_value = "a")]
        player: String,

        /// Search depth
        #[arg(short, long, default_value_t = mancala_core::DEFAULT_DEPTH)]
        depth: u8,
    },
}

/// Machine-readable match summary
#[derive(Serialize)]
struct MatchReport<'a> {
    engine1: &'a str,
    engine2: &'a str,
    games: u32,
    depth: u8,
    result: &'a MatchResult,
}

fn apply_overrides(
    mut config: TournamentConfig,
    args: &MatchArgs,
) -> Result<TournamentConfig, TournamentError> {
    if let Some(games) = args.games {
        config.games_per_match = games;
    }
    if let Some(depth) = args.depth {
        config.search_depth = depth;
    }
    if let Some(plies) = args.opening_plies {
        config.opening_plies = plies;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    config.validate()?;
    Ok(config)
}

fn run_match(
    config: TournamentConfig,
    engine1_name: &str,
    engine2_name: &str,
    json: bool,
) -> Result<(), TournamentError> {
    let mut engine1 = create_engine(engine1_name)?;
    let mut engine2 = create_engine(engine2_name)?;

    info!(
        engine1 = engine1_name,
        engine2 = engine2_name,
        games = config.games_per_match,
        depth = config.search_depth,
        "starting match"
    );

    let runner = MatchRunner::new(config.match_config());
    let result = runner.run_match(engine1.as_mut(), engine2.as_mut());

    if json {
        let report = MatchReport {
            engine1: engine1_name,
            engine2: engine2_name,
            games: config.games_per_match,
            depth: config.search_depth,
            result: &result,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("=== Match: {} vs {} ===", engine1_name, engine2_name);
    println!(
        "{}: {} wins, {} losses, {} draws",
        engine1_name, result.wins, result.losses, result.draws
    );
    println!("Score: {:.1}%", result.score() * 100.0);
    println!("Average store margin: {:+.1}", result.average_margin());

    Ok(())
}

fn analyze(board: &str, player: &str, depth: u8) -> Result<(), TournamentError> {
    let board: Board = board.parse()?;
    let player: Player = player.parse()?;

    println!("Board: {}", board);
    println!("To move: {}", player);

    if let Some(result) = board.result() {
        println!("Game over: {}", result);
        return Ok(());
    }

    let outcome = best_move(&board, player, depth)?;
    if depth > 0 {
        for pit in board.legal_moves(player) {
            let child = board.apply_move(pit, player)?;
            let (score, _) = minimax(&child, depth - 1, !player.is_maximizing());
            println!("  pit {:>2}: {:>4}", pit, score);
        }
    }
    match outcome.best_move {
        Some(pit) => println!("Best move: pit {} (score {})", pit, outcome.score),
        None => println!("No move at depth 0 (score {})", outcome.score),
    }
    println!("Nodes: {}", outcome.nodes);
    Ok(())
}

fn run(cli: Cli) -> Result<(), TournamentError> {
    let config = TournamentConfig::load_or_default(&cli.config)?;

    match cli.command {
        Command::Match {
            engine1,
            engine2,
            args,
        } => {
            let config = apply_overrides(config, &args)?;
            run_match(config, &engine1, &engine2, args.json)
        }
        Command::Analyze {
            board,
            player,
            depth,
        } => analyze(&board, &player, depth),
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "tournament failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
