use alloc::collections::VecDeque;
use ndarray::{Array2, Zip};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::*;
use crate::types::nd_index;

/// Result of revealing a single coordinate.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealOutcome {
    Safe,
    HitMine,
}

impl RevealOutcome {
    pub const fn hit_mine(self) -> bool {
        matches!(self, Self::HitMine)
    }

    const fn of_cell(cell: Cell) -> Self {
        if cell.is_mine {
            Self::HitMine
        } else {
            Self::Safe
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Square minefield owning every cell of one game.
///
/// Expected call order is [`Board::new`], one placement, then any number of
/// [`Board::reveal`] calls. Revealing before placement plays on an empty
/// board and placing again before any reveal adds more mines. Once a cell is
/// revealed the mines are frozen.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BoardFields")]
pub struct Board {
    cells: Array2<Cell>,
    size: Coord,
    mine_count: CellCount,
    revealed_count: CellCount,
    triggered_mine: Option<Coord2>,
}

/// Serialized form of [`Board`], checked before it becomes one.
#[derive(Deserialize)]
struct BoardFields {
    cells: Array2<Cell>,
    size: Coord,
    triggered_mine: Option<Coord2>,
}

impl TryFrom<BoardFields> for Board {
    type Error = BoardError;

    fn try_from(fields: BoardFields) -> Result<Self> {
        let BoardFields {
            cells,
            size,
            triggered_mine,
        } = fields;

        let side = usize::from(size);
        if size == 0 || cells.dim() != (side, side) {
            return Err(BoardError::InvalidBoardShape);
        }

        let mut board = Self {
            mine_count: cells.iter().filter(|cell| cell.is_mine).count() as CellCount,
            revealed_count: cells.iter().filter(|cell| cell.is_revealed).count() as CellCount,
            cells,
            size,
            triggered_mine,
        };

        if let Some(coords) = triggered_mine {
            let cell = board.cell_at(coords)?;
            if !(cell.is_mine && cell.is_revealed) {
                return Err(BoardError::InvalidBoardShape);
            }
        }

        board.update_adjacent_mines();
        Ok(board)
    }
}

impl Board {
    pub fn new(size: Coord) -> Result<Self> {
        if size == 0 {
            return Err(BoardError::InvalidSize);
        }

        Ok(Self {
            cells: Array2::default(nd_index((size, size))),
            size,
            mine_count: 0,
            revealed_count: 0,
            triggered_mine: None,
        })
    }

    /// Builds a board from `config` and places its mines with `rng`.
    pub fn from_config<R: Rng>(config: GameConfig, rng: &mut R) -> Result<Self> {
        let mut board = Self::new(config.size)?;
        board.place_mines_with(config.mines, rng)?;
        Ok(board)
    }

    pub fn size(&self) -> Coord {
        self.size
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    pub fn safe_cell_count(&self) -> CellCount {
        area(self.size) - self.mine_count
    }

    /// First mine that was revealed, if any.
    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    pub fn contains(&self, (x, y): Coord2) -> bool {
        x < self.size && y < self.size
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if self.contains(coords) {
            Ok(coords)
        } else {
            Err(BoardError::InvalidCoords(coords))
        }
    }

    pub fn cell_at(&self, coords: Coord2) -> Result<Cell> {
        let coords = self.validate_coords(coords)?;
        Ok(self.cells[nd_index(coords)])
    }

    /// All cells with their coordinates, in `x`-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Coord2, Cell)> + '_ {
        self.cells
            .indexed_iter()
            .map(|((x, y), &cell)| ((x as Coord, y as Coord), cell))
    }

    /// Places `count` mines at random using the thread-local generator.
    #[cfg(feature = "std")]
    pub fn place_mines(&mut self, count: CellCount) -> Result<CellCount> {
        self.place_mines_with(count, &mut rand::rng())
    }

    pub fn place_mines_with<R: Rng>(&mut self, count: CellCount, rng: &mut R) -> Result<CellCount> {
        self.place_with(RandomMines::new(count, rng))
    }

    /// Marks mines chosen by `generator` and recomputes every adjacency count.
    ///
    /// Fails with [`BoardError::MinesFrozen`] once any cell has been revealed.
    pub fn place_with<G: MineGenerator>(&mut self, generator: G) -> Result<CellCount> {
        if self.revealed_count > 0 {
            log::warn!(
                "Refusing to place mines after {} cells were revealed",
                self.revealed_count
            );
            return Err(BoardError::MinesFrozen);
        }
        if self.mine_count > 0 {
            log::warn!("Board already holds {} mines, adding more", self.mine_count);
        }

        let mut mines = self.cells.map(|cell| cell.is_mine);
        let placed = generator.generate(&mut mines)?;

        Zip::from(&mut self.cells)
            .and(&mines)
            .for_each(|cell, &is_mine| cell.is_mine = is_mine);
        self.mine_count += placed;
        self.update_adjacent_mines();

        log::debug!(
            "Placed {} mines on {}x{} board, {} total",
            placed,
            self.size,
            self.size,
            self.mine_count
        );
        Ok(placed)
    }

    fn update_adjacent_mines(&mut self) {
        for x in 0..self.size {
            for y in 0..self.size {
                let coords = (x, y);
                let adjacent_mines = self
                    .neighbors(coords)
                    .filter(|&pos| self.cells[nd_index(pos)].is_mine)
                    .count();
                self.cells[nd_index(coords)].adjacent_mines = adjacent_mines as u8;
            }
        }
    }

    /// Reveals the cell at `coords`, cascading through zero-count regions.
    ///
    /// Revealing an already revealed cell changes nothing and reports the
    /// same outcome as the first time.
    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.validate_coords(coords)?;
        let cell = self.cells[nd_index(coords)];

        if cell.is_revealed {
            return Ok(RevealOutcome::of_cell(cell));
        }

        let outcome = self.reveal_single_cell(coords);
        if outcome.hit_mine() {
            log::debug!("Hit mine at {:?}", coords);
            self.triggered_mine.get_or_insert(coords);
        }
        Ok(outcome)
    }

    fn reveal_single_cell(&mut self, coords: Coord2) -> RevealOutcome {
        let cell = &mut self.cells[nd_index(coords)];
        cell.is_revealed = true;
        self.revealed_count += 1;

        if cell.is_mine {
            return RevealOutcome::HitMine;
        }

        let adjacent_mines = cell.adjacent_mines;
        log::debug!(
            "Revealed cell at {:?}, adjacent mines: {}",
            coords,
            adjacent_mines
        );
        if adjacent_mines == 0 {
            self.flood_fill(coords);
        }
        RevealOutcome::Safe
    }

    /// Reveals the zero-count region around `origin` and its numbered border.
    ///
    /// Neighbors of a zero-count cell are never mines, so nothing queued here
    /// can explode. `is_revealed` is the visited marker.
    fn flood_fill(&mut self, origin: Coord2) {
        let mut to_visit: VecDeque<_> = self.hidden_neighbors(origin).collect();
        log::trace!(
            "Starting flood-fill from {:?}, initial neighbors: {:?}",
            origin,
            to_visit
        );

        while let Some(visit_coords) = to_visit.pop_front() {
            let cell = &mut self.cells[nd_index(visit_coords)];
            if cell.is_revealed {
                continue;
            }

            cell.is_revealed = true;
            self.revealed_count += 1;
            let visit_adjacent_mines = cell.adjacent_mines;
            log::trace!(
                "Flood revealed cell at {:?}, adjacent mines: {}",
                visit_coords,
                visit_adjacent_mines
            );

            if visit_adjacent_mines == 0 {
                to_visit.extend(self.hidden_neighbors(visit_coords));
            }
        }
    }

    /// In-bounds cells around `coords`.
    pub fn neighbors(&self, coords: Coord2) -> impl Iterator<Item = Coord2> + use<> {
        neighbors(coords, self.size)
    }

    fn hidden_neighbors(&self, coords: Coord2) -> impl Iterator<Item = Coord2> + '_ {
        self.neighbors(coords)
            .filter(|&pos| !self.cells[nd_index(pos)].is_revealed)
    }

    /// Whether every non-mine cell is revealed. Vacuously true on a board
    /// made entirely of mines.
    pub fn all_non_mines_uncovered(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_mine || cell.is_revealed)
    }

    pub fn status(&self) -> GameStatus {
        if self.triggered_mine.is_some() {
            GameStatus::Lost
        } else if self.all_non_mines_uncovered() {
            GameStatus::Won
        } else {
            GameStatus::Playing
        }
    }
}
