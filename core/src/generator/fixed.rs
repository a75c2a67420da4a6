use super::*;
use crate::types::nd_index;

/// Places mines at explicit coordinates, for known layouts.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FixedMines<'a> {
    coords: &'a [Coord2],
}

impl<'a> FixedMines<'a> {
    pub fn new(coords: &'a [Coord2]) -> Self {
        Self { coords }
    }
}

impl MineGenerator for FixedMines<'_> {
    fn generate(self, mines: &mut Array2<bool>) -> Result<CellCount> {
        let (size_x, size_y) = mines.dim();
        if let Some(&coords) = self
            .coords
            .iter()
            .find(|(x, y)| usize::from(*x) >= size_x || usize::from(*y) >= size_y)
        {
            return Err(BoardError::InvalidCoords(coords));
        }

        let mut placed: CellCount = 0;
        for &coords in self.coords {
            let cell = &mut mines[nd_index(coords)];
            if !*cell {
                *cell = true;
                placed += 1;
            }
        }
        Ok(placed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marks_given_cells_once() {
        let mut mines = Array2::default([3, 3]);

        let placed = FixedMines::new(&[(0, 0), (2, 1), (0, 0)])
            .generate(&mut mines)
            .unwrap();

        assert_eq!(placed, 2);
        assert!(mines[[0, 0]]);
        assert!(mines[[2, 1]]);
        assert!(!mines[[1, 2]]);
    }

    #[test]
    fn out_of_bounds_places_nothing() {
        let mut mines = Array2::default([3, 3]);

        let err = FixedMines::new(&[(0, 0), (3, 0)])
            .generate(&mut mines)
            .unwrap_err();

        assert_eq!(err, BoardError::InvalidCoords((3, 0)));
        assert!(mines.iter().all(|&is_mine| !is_mine));
    }
}
