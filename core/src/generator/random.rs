use rand::Rng;

use super::*;

/// Places `count` mines uniformly at random by sampling `(x, y)` pairs and
/// rejecting the ones that already hold a mine.
#[derive(Debug)]
pub struct RandomMines<'a, R> {
    count: CellCount,
    rng: &'a mut R,
}

impl<'a, R: Rng> RandomMines<'a, R> {
    pub fn new(count: CellCount, rng: &'a mut R) -> Self {
        Self { count, rng }
    }
}

impl<R: Rng> MineGenerator for RandomMines<'_, R> {
    fn generate(self, mines: &mut Array2<bool>) -> Result<CellCount> {
        let available = free_cells(mines);

        if self.count > available {
            log::warn!(
                "Minefield cannot fit requested mines, requested {} but only {} cells are free",
                self.count,
                available
            );
            return Err(BoardError::TooManyMines {
                requested: self.count,
                available,
            });
        }

        // optimize for full boards, sampling would only keep hitting taken cells
        if self.count == available {
            mines.fill(true);
            return Ok(self.count);
        }

        let (size_x, size_y) = mines.dim();
        let mut placed: CellCount = 0;
        let mut samples: u32 = 0;
        while placed < self.count {
            let x = self.rng.random_range(0..size_x);
            let y = self.rng.random_range(0..size_y);
            samples = samples.saturating_add(1);

            let cell = &mut mines[[x, y]];
            if !*cell {
                *cell = true;
                placed += 1;
            }
        }

        log::debug!("Placed {} mines from {} samples", placed, samples);
        Ok(placed)
    }
}
