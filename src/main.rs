use anyhow::Result;
use clap::Parser;
use std::io::{self, Write};
use std::thread;
use std::time::Duration;
use tacbot::board::{Board, Mark};
use tacbot::game::{Game, GameState};
use tacbot::search::alphabeta::Searcher;

#[derive(Parser, Debug)]
#[command(author, version, about = "Play tic-tac-toe against the engine", long_about = None)]
struct Args {
    /// Operation mode: 'c' to play the computer, '2' for two players at one keyboard
    #[arg(long, default_value = "c")]
    mode: String,

    /// Your mark when playing the computer: 'x' moves first, 'o' second
    #[arg(long, default_value = "x")]
    mark: String,

    /// Pause before the computer replies, purely for pacing
    #[arg(long, default_value_t = 500)]
    delay_ms: u64,
}

#[derive(Default)]
struct Scores {
    x: u32,
    o: u32,
    draws: u32,
}

fn parse_mark(mark_str: &str) -> Result<Mark> {
    match mark_str.to_lowercase().as_str() {
        "x" => Ok(Mark::X),
        "o" => Ok(Mark::O),
        _ => anyhow::bail!("Invalid mark: use 'x' or 'o'"),
    }
}

fn print_board(board: &Board) {
    println!("\n{}", board);
}

/// Prompt until the player names an empty cell. Cells are numbered 1-9,
/// left to right, top to bottom. Returns None on 'quit'.
fn get_human_move(board: &Board) -> Result<Option<usize>> {
    loop {
        print!("Enter a cell (1-9, 'quit' to exit): ");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        let input = input.trim();

        if input == "quit" {
            return Ok(None);
        }
        match input.parse::<usize>() {
            Ok(n) if (1..=9).contains(&n) => {
                if board.is_cell_empty(n - 1) {
                    return Ok(Some(n - 1));
                }
                println!("Cell {n} is taken!");
            }
            _ => println!("Invalid input! Enter a number from 1 to 9"),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mode = args.mode.chars().next().unwrap_or('c');
    let vs_computer = mode != '2';
    let human_mark = parse_mark(&args.mark)?;

    let mut scores = Scores::default();
    let mut game = Game::new(Mark::X);
    let mut searcher = Searcher::new();

    println!("Tic Tac Toe");
    println!("===========");
    if vs_computer {
        println!("You play {human_mark}; the computer plays optimally.");
    } else {
        println!("Two players at one keyboard; X moves first.");
    }
    println!("Cells are numbered 1-9, left to right, top to bottom.");

    'session: loop {
        while !game.state().is_over() {
            print_board(game.board());
            let side = game.to_move();

            if !vs_computer || side == human_mark {
                println!("{side} to move");
                match get_human_move(game.board())? {
                    Some(idx) => {
                        game.play(idx)?;
                    }
                    None => {
                        println!("Thanks for playing!");
                        break 'session;
                    }
                }
            } else {
                println!("Computer ({side}) is thinking...");
                // UI pacing only; skipping the pause cannot change the game.
                thread::sleep(Duration::from_millis(args.delay_ms));
                let result = searcher.choose_move(game.board(), side);
                log::debug!("searched {} nodes, score {}", result.nodes, result.score);
                if let Some(idx) = result.best {
                    println!("Computer plays cell {}", idx + 1);
                    game.play(idx)?;
                } else {
                    break;
                }
            }
        }

        print_board(game.board());
        match game.state() {
            GameState::Won { mark, line } => {
                println!(
                    "{mark} wins! (cells {}, {}, {})",
                    line[0] + 1,
                    line[1] + 1,
                    line[2] + 1
                );
                match mark {
                    Mark::X => scores.x += 1,
                    Mark::O => scores.o += 1,
                }
            }
            GameState::Drawn => {
                println!("It's a draw!");
                scores.draws += 1;
            }
            _ => {}
        }
        println!("Score: X {} / O {} / draws {}", scores.x, scores.o, scores.draws);

        print!("Play again? (y/n): ");
        io::stdout().flush()?;
        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Thanks for playing!");
            break;
        }
        game.reset();
    }

    Ok(())
}
