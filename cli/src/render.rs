use std::fmt;

use sweeper_core::{Board, Coord};

/// Text view of a board: a header of column indices, then one row per `y`
/// from the top (`size - 1`) down to `0`.
pub struct BoardView<'a>(pub &'a Board);

fn digits(n: Coord) -> usize {
    n.checked_ilog10().map_or(1, |log| log as usize + 1)
}

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        let size = board.size();
        let width = digits(size - 1);
        // multi-digit columns need a separator to stay readable
        let column = if width == 1 { 1 } else { width + 1 };

        write!(f, "{:width$}", "", width = width + 1)?;
        for x in 0..size {
            write!(f, "{x:>column$}")?;
        }
        writeln!(f)?;

        for y in (0..size).rev() {
            write!(f, "{y:>width$}|")?;
            for x in 0..size {
                let cell = board.cell_at((x, y)).map_err(|_| fmt::Error)?;
                write!(f, "{:>column$}", cell.glyph().as_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
