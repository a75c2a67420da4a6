use ndarray::Array2;

use crate::*;
pub use fixed::*;
pub use random::*;

mod fixed;
mod random;

/// Strategy for marking mines on a board.
pub trait MineGenerator {
    /// Marks new mines in `mines`, which already holds any earlier placement,
    /// and returns how many were added. On error `mines` is left untouched.
    fn generate(self, mines: &mut Array2<bool>) -> Result<CellCount>;
}

pub(crate) fn free_cells(mines: &Array2<bool>) -> CellCount {
    let free = mines.iter().filter(|&&is_mine| !is_mine).count();
    CellCount::try_from(free).unwrap_or(CellCount::MAX)
}
