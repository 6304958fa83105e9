//! Tictactwo - terminal presentation layer
//!
//! A line-oriented stand-in for the original single-screen mobile UI:
//! splash banner, rules and about text, editable player names, score
//! card, and the board with the fading tile dimmed. All game state
//! lives in the library engine; this binary only renders snapshots
//! and issues commands.

use anyhow::Result;
use clap::Parser;
use std::io::{BufRead, Write};
use std::time::Duration;
use tictactwo::{Engine, Mark, MoveError, PlayerSlot, Position, Snapshot, WINDOW};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Play tic-tac-toe where only the six most recent marks survive.
#[derive(Debug, Parser)]
#[command(name = "tictactwo", version, about)]
struct Cli {
    /// Display name for player one (X).
    #[arg(long)]
    player1: Option<String>,

    /// Display name for player two (O).
    #[arg(long)]
    player2: Option<String>,

    /// Skip the splash banner and its delay.
    #[arg(long)]
    skip_splash: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let mut engine = Engine::new();
    if let Some(name) = cli.player1 {
        engine.set_player_name(PlayerSlot::One, name);
    }
    if let Some(name) = cli.player2 {
        engine.set_player_name(PlayerSlot::Two, name);
    }

    if !cli.skip_splash {
        println!("\n  Tic Tac Toe 2\n");
        // Cosmetic only; game state is untouched.
        std::thread::sleep(Duration::from_secs(2));
    }

    println!("Type 'help' for commands.\n");
    render(&engine.snapshot());

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((c, r)) => (c, r.trim()),
            None => (line, ""),
        };

        match command.to_lowercase().as_str() {
            "quit" | "exit" => break,
            "help" => print_help(),
            "rules" => print_rules(&engine.snapshot()),
            "about" => print_about(),
            "restart" => {
                engine.reset_game();
                render(&engine.snapshot());
            }
            "reset-score" => {
                engine.reset_score();
                render(&engine.snapshot());
            }
            "name" => {
                handle_rename(&mut engine, rest);
                render(&engine.snapshot());
            }
            "snapshot" => {
                println!("{}", serde_json::to_string_pretty(&engine.snapshot())?);
            }
            _ => handle_move(&mut engine, line),
        }
    }

    Ok(())
}

/// Applies a move given as a 1-based cell number or a position label.
fn handle_move(engine: &mut Engine, input: &str) {
    // Cell numbers on screen are 1-based; labels pass through as-is.
    let position = match input.parse::<usize>() {
        Ok(n) if (1..=9).contains(&n) => Position::from_index(n - 1),
        Ok(_) => None,
        Err(_) => Position::from_label_or_number(input),
    };

    let Some(position) = position else {
        println!("Unrecognized command or cell: {input:?}. Type 'help'.");
        return;
    };

    match engine.apply_move(position.to_index()) {
        Ok(()) => {
            debug!(%position, "Move accepted");
            let state = engine.snapshot();
            if state.winner.is_some() {
                // Short reveal delay, matching the original animation.
                std::thread::sleep(Duration::from_millis(100));
            }
            render(&state);
        }
        Err(MoveError::CellOccupied(_)) => {
            println!("That spot is already filled!");
        }
        Err(err) => {
            println!("{err}");
        }
    }
}

fn handle_rename(engine: &mut Engine, rest: &str) {
    let usage = "Usage: name <1|2> <new name>";
    let Some((slot, name)) = rest.split_once(char::is_whitespace) else {
        println!("{usage}");
        return;
    };
    let slot = match slot {
        "1" => PlayerSlot::One,
        "2" => PlayerSlot::Two,
        _ => {
            println!("{usage}");
            return;
        }
    };
    engine.set_player_name(slot, name.trim());
}

fn render(state: &Snapshot) {
    if let Some(winner) = &state.winner {
        println!();
        println!("  +---------------------------+");
        println!("    {winner} Wins!");
        println!("  +---------------------------+");
        println!("  Type 'restart' for a new game.");
        println!();
        print_score_card(state);
        return;
    }

    println!();
    println!("{}", state.board.display(state.fading));
    println!();
    print_score_card(state);
    let to_move_name = match state.to_move {
        Mark::X => &state.names[0],
        Mark::O => &state.names[1],
    };
    println!("Move: {}", state.move_number);
    println!("{}'s Turn ({})", to_move_name, state.to_move);
}

fn print_score_card(state: &Snapshot) {
    println!("Score Card");
    println!("  {}: {}", state.names[0], state.scores[0]);
    println!("  {}: {}", state.names[1], state.scores[1]);
}

fn print_help() {
    println!("Commands:");
    println!("  1-9 or a cell label   place your mark (e.g. '5' or 'center')");
    println!("  restart               reset the board, keep scores");
    println!("  reset-score           clear both scores");
    println!("  name <1|2> <name>     rename a player (anytime)");
    println!("  rules                 show the game rules");
    println!("  about                 show about text");
    println!("  snapshot              dump the engine state as JSON");
    println!("  quit                  leave the game");
}

fn print_rules(state: &Snapshot) {
    println!("Game Rules");
    println!();
    println!("  Tic Tac Toe 2");
    println!();
    println!("  1. {} -> 'X' | {} -> 'O'", state.names[0], state.names[1]);
    println!("  2. Goal: Get 3 marks in a row.");
    println!("  3. Pick an empty tile to place your mark.");
    println!("  4. Only the latest {WINDOW} moves stay visible.");
    println!("  5. The oldest mark fades and is removed.");
    println!("  6. Winning shows the player name & score updates.");
    println!("  7. 'restart' resets the board (keeps scores).");
    println!("  8. 'reset-score' clears the scores.");
    println!("  9. Player names are editable anytime.");
    println!();
    println!("  Enjoy!");
}

fn print_about() {
    println!("About");
    println!("  Tic Tac Toe 2 - a sliding-window tic-tac-toe variant.");
    println!("  The engine lives in the tictactwo library crate.");
}
