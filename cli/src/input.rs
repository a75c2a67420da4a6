use sweeper_core::{Coord, Coord2};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Expected coordinates on the form \"X Y\"")]
    Format,
    #[error("Coordinates ({x}, {y}) are outside the {size}x{size} board")]
    OutOfBounds { x: u32, y: u32, size: Coord },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Reveal(Coord2),
    Quit,
}

/// Parses one line of player input, either `q`/`quit` or an `"X Y"` pair.
pub fn parse_command(input: &str, size: Coord) -> Result<Command, InputError> {
    match input.trim() {
        "q" | "quit" => Ok(Command::Quit),
        coords => parse_coords(coords, size).map(Command::Reveal),
    }
}

/// Parses two whitespace separated integers and checks them against a board
/// of side `size`.
pub fn parse_coords(input: &str, size: Coord) -> Result<Coord2, InputError> {
    let mut parts = input.split_whitespace();
    let (Some(x), Some(y), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(InputError::Format);
    };

    let x: u32 = x.parse().map_err(|_| InputError::Format)?;
    let y: u32 = y.parse().map_err(|_| InputError::Format)?;

    match (Coord::try_from(x), Coord::try_from(y)) {
        (Ok(cx), Ok(cy)) if cx < size && cy < size => Ok((cx, cy)),
        _ => Err(InputError::OutOfBounds { x, y, size }),
    }
}
