/// Single coordinate axis, used for the board side length and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(x, y)`.
pub type Coord2 = (Coord, Coord);

/// Number of cells on a square board of side `size`.
pub const fn area(size: Coord) -> CellCount {
    let size = size as CellCount;
    size * size
}

pub(crate) fn nd_index((x, y): Coord2) -> [usize; 2] {
    [x.into(), y.into()]
}

/// Cells sharing an edge or corner with `center` on a square board of side
/// `size`. Positions past an edge are dropped, never wrapped.
pub fn neighbors((x, y): Coord2, size: Coord) -> impl Iterator<Item = Coord2> {
    let last = size.saturating_sub(1);
    let span = move |c: Coord| c.saturating_sub(1)..=c.saturating_add(1).min(last);

    span(x)
        .flat_map(move |nx| span(y).map(move |ny| (nx, ny)))
        .filter(move |&pos| pos != (x, y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn center_cell_has_eight_neighbors() {
        let found: Vec<_> = neighbors((2, 2), 5).collect();
        assert_eq!(found.len(), 8);
        assert!(!found.contains(&(2, 2)));
    }

    #[test]
    fn corner_cells_are_clipped() {
        let found: Vec<_> = neighbors((0, 0), 5).collect();
        assert_eq!(found, [(0, 1), (1, 0), (1, 1)]);

        let found: Vec<_> = neighbors((4, 4), 5).collect();
        assert_eq!(found, [(3, 3), (3, 4), (4, 3)]);
    }

    #[test]
    fn edge_cell_has_five_neighbors() {
        assert_eq!(neighbors((0, 2), 5).count(), 5);
        assert_eq!(neighbors((2, 4), 5).count(), 5);
    }

    #[test]
    fn far_edge_of_largest_board_does_not_wrap() {
        let found: Vec<_> = neighbors((Coord::MAX - 1, 0), Coord::MAX).collect();
        assert_eq!(found, [(253, 0), (253, 1), (254, 1)]);
    }

    #[test]
    fn single_cell_board_has_no_neighbors() {
        assert_eq!(neighbors((0, 0), 1).count(), 0);
    }

    #[test]
    fn area_of_largest_board_fits() {
        assert_eq!(area(4), 16);
        assert_eq!(area(Coord::MAX), 65025);
    }
}
