use serde::{Deserialize, Serialize};

/// State of a single board position.
///
/// `is_revealed` only ever goes from `false` to `true`, `is_mine` is fixed once
/// placement is done, and `adjacent_mines` is filled in right after placement.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub is_revealed: bool,
    pub is_mine: bool,
    pub adjacent_mines: u8,
}

impl Cell {
    pub const fn glyph(self) -> Glyph {
        match (self.is_revealed, self.is_mine, self.adjacent_mines) {
            (false, _, _) => Glyph::Hidden,
            (true, true, _) => Glyph::Mine,
            (true, false, 0) => Glyph::Blank,
            (true, false, count) => Glyph::Count(count),
        }
    }
}

/// Player-visible summary of a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Glyph {
    Hidden,
    Mine,
    Count(u8),
    Blank,
}

impl Glyph {
    /// Counts above 9 cannot come from a board and render as `?`.
    pub fn as_char(self) -> char {
        match self {
            Self::Hidden => '?',
            Self::Mine => 'X',
            Self::Count(count) => char::from_digit(count.into(), 10).unwrap_or('?'),
            Self::Blank => ' ',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_cells_do_not_leak_contents() {
        let mine = Cell {
            is_mine: true,
            ..Default::default()
        };
        assert_eq!(mine.glyph(), Glyph::Hidden);
        assert_eq!(Cell::default().glyph().as_char(), '?');
    }

    #[test]
    fn revealed_cells_show_their_state() {
        let revealed = |is_mine, adjacent_mines| Cell {
            is_revealed: true,
            is_mine,
            adjacent_mines,
        };

        assert_eq!(revealed(true, 3).glyph().as_char(), 'X');
        assert_eq!(revealed(false, 0).glyph().as_char(), ' ');
        assert_eq!(revealed(false, 3).glyph(), Glyph::Count(3));
        assert_eq!(revealed(false, 8).glyph().as_char(), '8');
    }

    #[test]
    fn impossible_counts_do_not_render_as_digits() {
        assert_eq!(Glyph::Count(10).as_char(), '?');
        assert_eq!(Glyph::Count(u8::MAX).as_char(), '?');
    }
}
