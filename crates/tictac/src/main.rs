//! tictac - command-line entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use tictac::{Analysis, AppConfig, GameSession, GameStatus, SaveFile, self_play};
use tictac_core::{EncodedState, Player, Position};
use tracing::{info, instrument};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load(&cli.config)?;
    tictac::logging::init(&config)?;

    info!(command = ?cli.command, "TicTacToe started");
    let save = SaveFile::new(config.save_path());

    match cli.command {
        Command::New => run_new(&save),
        Command::Show => run_show(&save),
        Command::Move { position } => run_move(&save, &position),
        Command::Hint => run_hint(&save),
        Command::Analyze { state, turn, json } => run_analyze(&state, turn.into(), json),
        Command::Selfplay { ai_first } => run_selfplay(ai_first),
    }
}

/// Prints the board, its encoding and whose turn it is.
fn print_session(session: &GameSession) {
    println!("{}\n", session.board().display());
    println!("State: {}", session.state());
    match session.status() {
        GameStatus::InProgress => println!("To move: {}", session.to_move()),
        status => println!("Game over: {}", status),
    }
}

/// Loads the saved game and lets the AI play a move it still owes.
///
/// Saves again when the AI moved, so the file never holds a position
/// with O to move.
fn load_game(save: &SaveFile) -> Result<GameSession> {
    let mut session = save.load_session();
    if let Some(reply) = session.resume() {
        println!("AI plays {} ({})\n", reply.to_index(), reply);
        save.write(&session.state())?;
    }
    Ok(session)
}

#[instrument(skip_all)]
fn run_new(save: &SaveFile) -> Result<()> {
    let mut session = save.load_session();
    session.reset();
    save.write(&session.state())?;
    print_session(&session);
    Ok(())
}

#[instrument(skip_all)]
fn run_show(save: &SaveFile) -> Result<()> {
    print_session(&load_game(save)?);
    Ok(())
}

#[instrument(skip(save))]
fn run_move(save: &SaveFile, position: &str) -> Result<()> {
    let pos = Position::from_label_or_number(position)
        .with_context(|| format!("Unknown position {:?} (use 0-8 or a label)", position))?;

    let mut session = load_game(save)?;
    let status = session.place_human(pos)?;
    if status == GameStatus::InProgress
        && let Some(reply) = session.play_ai()?
    {
        println!("AI plays {} ({})\n", reply.to_index(), reply);
    }

    save.write(&session.state())?;
    print_session(&session);
    Ok(())
}

#[instrument(skip_all)]
fn run_hint(save: &SaveFile) -> Result<()> {
    let session = load_game(save)?;
    match session.hint() {
        Some(pos) => println!("Best move for X: {} ({})", pos.to_index(), pos),
        None => println!("No move to suggest ({})", session.status()),
    }
    Ok(())
}

#[instrument]
fn run_analyze(state: &str, turn: Player, json: bool) -> Result<()> {
    let state: EncodedState = state
        .parse()
        .with_context(|| format!("Invalid state {:?}", state))?;
    let analysis = Analysis::new(state, turn);

    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        print!("{}", analysis.render());
    }
    Ok(())
}

#[instrument]
fn run_selfplay(ai_first: bool) -> Result<()> {
    let first = if ai_first { Player::AI } else { Player::HUMAN };
    let game = self_play(first);

    for (ply, (player, pos)) in game.moves.iter().enumerate() {
        println!("{:>2}. {} -> {} ({})", ply + 1, player, pos.to_index(), pos);
    }
    println!("\n{}\n", game.board.display());
    println!("Result: {}", game.outcome);
    Ok(())
}
