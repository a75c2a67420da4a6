use std::io::{BufRead, Write};

use anyhow::Result;
use rand::Rng;
use sweeper_core::{Board, GameConfig};

use crate::input::{Command, parse_command};
use crate::render::BoardView;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameResult {
    Won,
    Lost,
    Quit,
}

/// Plays games with `config` until the player quits or input runs out.
pub fn run<R: BufRead, W: Write, G: Rng>(
    config: GameConfig,
    rng: &mut G,
    mut input: R,
    mut output: W,
) -> Result<()> {
    let mut line = String::new();
    loop {
        let board = Board::from_config(config, rng)?;
        log::info!(
            "New {}x{} game with {} mines",
            config.size,
            config.size,
            config.mines
        );

        let message = match play(board, &mut input, &mut output)? {
            GameResult::Won => "Congratulations, you won!",
            GameResult::Lost => "KABOOM! You hit a mine!",
            GameResult::Quit => return Ok(()),
        };
        writeln!(output, "{message}\nPress Enter to restart. Type q to exit.")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 || matches!(line.trim(), "q" | "quit") {
            return Ok(());
        }
    }
}

/// Runs a single game on `board` until it is won, lost or abandoned.
pub fn play<R: BufRead, W: Write>(mut board: Board, mut input: R, mut output: W) -> Result<GameResult> {
    write!(output, "{}", BoardView(&board))?;

    let mut line = String::new();
    loop {
        writeln!(output, "Enter coordinates on the form \"X Y\": ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            log::debug!("Input closed mid-game");
            return Ok(GameResult::Quit);
        }

        let coords = match parse_command(&line, board.size()) {
            Ok(Command::Reveal(coords)) => coords,
            Ok(Command::Quit) => return Ok(GameResult::Quit),
            Err(err) => {
                log::debug!("Rejected input {:?}: {}", line.trim(), err);
                writeln!(output, "Wrong input, please try again.")?;
                continue;
            }
        };

        let outcome = board.reveal(coords)?;
        write!(output, "{}", BoardView(&board))?;

        if outcome.hit_mine() {
            return Ok(GameResult::Lost);
        }
        if board.all_non_mines_uncovered() {
            return Ok(GameResult::Won);
        }
    }
}
