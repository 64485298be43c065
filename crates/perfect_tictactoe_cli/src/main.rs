//! Perfect Tic-Tac-Toe - command-line front end
//!
//! Thin presentation layer over the `perfect_tictactoe` library.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use perfect_tictactoe::{
    Board, Move, Outcome, Player, current_player, evaluate, initial_state, outcome, result, terminal,
    utility, validate, winner,
};
use serde::Serialize;
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::BestMove { board, json } => run_best_move(&board, json),
        Command::Evaluate { board, json } => run_evaluate(&board, json),
        Command::SelfPlay { board } => run_self_play(board.as_deref()),
    }
}

/// Parses board text and rejects positions no legal game reaches.
#[instrument]
fn parse_board(text: &str) -> Result<Board> {
    let board: Board = text
        .parse()
        .with_context(|| format!("Failed to parse board '{}'", text))?;
    validate(&board).with_context(|| format!("Board '{}' is not reachable", text))?;
    debug!(%board, "Parsed board");
    Ok(board)
}

/// Search result as printed by `best-move --json`.
#[derive(Debug, Serialize)]
struct BestMoveReport {
    to_move: Option<Player>,
    best_move: Option<Move>,
    row: Option<usize>,
    col: Option<usize>,
    value: i32,
    nodes: u64,
}

/// Board summary as printed by `evaluate --json`.
#[derive(Debug, Serialize)]
struct EvaluateReport {
    board: String,
    to_move: Option<Player>,
    winner: Option<Player>,
    terminal: bool,
    utility: i32,
    outcome: Outcome,
}

/// Searches `board` and collects what `best-move` prints.
fn best_move_report(board: &Board) -> BestMoveReport {
    let eval = evaluate(board);
    info!(nodes = eval.nodes(), value = eval.value(), "Search finished");

    BestMoveReport {
        to_move: current_player(board),
        best_move: eval.best_move(),
        row: eval.best_move().map(|mv| mv.row()),
        col: eval.best_move().map(|mv| mv.col()),
        value: eval.value(),
        nodes: eval.nodes(),
    }
}

/// Collects what `evaluate` prints.
fn evaluate_report(board: &Board) -> EvaluateReport {
    EvaluateReport {
        board: board.to_string().replace('\n', "/"),
        to_move: current_player(board),
        winner: winner(board),
        terminal: terminal(board),
        utility: utility(board),
        outcome: outcome(board),
    }
}

/// Plays minimax against itself from `board`, returning each move with the
/// board it produced.
fn self_play(mut board: Board) -> Result<Vec<(Player, Move, Board)>> {
    let mut plies = Vec::new();

    while let Some(player) = current_player(&board) {
        let eval = evaluate(&board);
        let mv = eval
            .best_move()
            .context("Search returned no move on a non-terminal board")?;
        info!(%player, %mv, nodes = eval.nodes(), "Playing move");

        board = result(&board, mv);
        plies.push((player, mv, board));
    }

    Ok(plies)
}

/// Run the `best-move` command
fn run_best_move(text: &str, json: bool) -> Result<()> {
    let board = parse_board(text)?;
    let report = best_move_report(&board);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{board}\n");
    match (report.to_move, report.best_move) {
        (Some(player), Some(mv)) => {
            println!("{player} to move: play {mv} ({})", mv.position());
            println!("Value under perfect play: {}", describe_value(report.value));
        }
        _ => println!("Game is over: {}", outcome(&board)),
    }
    Ok(())
}

/// Run the `evaluate` command
fn run_evaluate(text: &str, json: bool) -> Result<()> {
    let board = parse_board(text)?;
    let report = evaluate_report(&board);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{board}\n");
    println!("To move:  {}", display_player(report.to_move));
    println!("Winner:   {}", display_player(report.winner));
    println!("Terminal: {}", report.terminal);
    println!("Utility:  {}", report.utility);
    println!("Outcome:  {}", report.outcome);
    Ok(())
}

/// Run the `self-play` command
fn run_self_play(text: Option<&str>) -> Result<()> {
    let start = match text {
        Some(text) => parse_board(text)?,
        None => initial_state(),
    };

    println!("{start}\n");
    let plies = self_play(start)?;
    for (player, mv, board) in &plies {
        println!("{player} plays {mv}\n{board}\n");
    }

    let last = plies.last().map_or(start, |&(_, _, board)| board);
    println!("Result: {}", outcome(&last));
    Ok(())
}

fn display_player(player: Option<Player>) -> String {
    player.map_or_else(|| "-".to_string(), |p| p.to_string())
}

fn describe_value(value: i32) -> &'static str {
    match value.signum() {
        1 => "X wins",
        -1 => "O wins",
        _ => "draw",
    }
}
