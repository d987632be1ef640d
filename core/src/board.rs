use alloc::vec;
use alloc::vec::Vec;

use crate::*;

/// Result of exploring a single cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RevealCount {
    /// Mines adjacent to the explored cell, now stored in it.
    pub count: u8,
    /// Neighbours that were still unexplored, mines included.
    pub unexplored: Area,
}

/// Flat grid of cells indexed by `y * width + x`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: Vec<Cell>,
    width: Coord,
    height: Coord,
    mines: CellCount,
    remaining_mines: isize,
}

impl Board {
    pub fn new(size: BoardSize) -> Self {
        Self::blank(size.width(), size.height(), size.mines())
    }

    fn blank(width: Coord, height: Coord, mines: CellCount) -> Self {
        Self {
            cells: vec![Cell::EMPTY; usize::from(mult(width, height))],
            width,
            height,
            mines,
            remaining_mines: mines as isize,
        }
    }

    /// Clears every cell and resizes the board for a new game.
    pub fn setup(&mut self, size: BoardSize) {
        self.width = size.width();
        self.height = size.height();
        self.mines = size.mines();
        self.remaining_mines = size.mines() as isize;
        self.cells.clear();
        self.cells.resize(usize::from(size.area()), Cell::EMPTY);
    }

    pub fn width(&self) -> Coord {
        self.width
    }

    pub fn height(&self) -> Coord {
        self.height
    }

    pub fn mines(&self) -> CellCount {
        self.mines
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Mines minus flags, negative when more flags than mines are placed.
    pub fn remaining_mines(&self) -> isize {
        self.remaining_mines
    }

    pub fn validate_index(&self, index: CellIndex) -> Result<CellIndex> {
        if index < self.cells.len() {
            Ok(index)
        } else {
            Err(GameError::InvalidIndex(index))
        }
    }

    pub fn value(&self, index: CellIndex) -> Result<Cell> {
        let index = self.validate_index(index)?;
        Ok(self.cells[index])
    }

    /// Scatters the configured number of mines, keeping `origin` and its neighbours clear.
    pub fn seed_mines<S: IndexSource + ?Sized>(
        &mut self,
        origin: CellIndex,
        source: &mut S,
    ) -> Result<()> {
        let origin = self.validate_index(origin)?;
        let size = self.cells.len();
        let clean_area = surrounding_area(origin, self.width.into(), size);

        let free_cells = self
            .cells
            .iter()
            .enumerate()
            .filter(|&(index, cell)| !cell.is_mine() && !clean_area.contains(&index))
            .count();
        if free_cells < usize::from(self.mines) {
            return Err(GameError::NoRoomForMines(self.mines));
        }

        let mut placed: CellCount = 0;
        while placed < self.mines {
            let index = source.next_index(size);
            let Some(&cell) = self.cells.get(index) else {
                continue;
            };
            if cell.is_mine() || clean_area.contains(&index) {
                continue;
            }
            self.cells[index] = cell.place_mine()?;
            placed += 1;
        }

        log::debug!(
            "Seeded {} mines around {} on a {}x{} board",
            placed,
            origin,
            self.width,
            self.height
        );
        Ok(())
    }

    /// Flips the flag on a hidden cell and returns its new value.
    pub fn toggle_flag(&mut self, index: CellIndex) -> Result<Cell> {
        let index = self.validate_index(index)?;
        let cell = self.cells[index].toggle_flag()?;
        self.cells[index] = cell;

        if cell.is_flagged() {
            self.remaining_mines -= 1;
        } else {
            self.remaining_mines += 1;
        }
        Ok(cell)
    }

    /// Marks the cell explored with its adjacent mine count.
    pub fn reveal_and_count(&mut self, index: CellIndex) -> Result<RevealCount> {
        let index = self.validate_index(index)?;
        let unexplored: Area = neighbours(index, self.width.into(), self.cells.len())
            .into_iter()
            .filter(|&pos| !self.cells[pos].is_explored())
            .collect();
        let count = unexplored
            .iter()
            .filter(|&&pos| self.cells[pos].is_mine())
            .count() as u8;

        self.cells[index] = Cell::Explored(count);
        Ok(RevealCount { count, unexplored })
    }

    /// Explores `origin` and every empty cell connected to it through zero counts.
    ///
    /// Flagged empty cells inside the region are explored as well, dropping
    /// their flag. `on_change` sees every written cell exactly once.
    pub fn cascade(
        &mut self,
        origin: CellIndex,
        mut on_change: impl FnMut(CellIndex, Cell),
    ) -> Result<()> {
        let mut pending = vec![self.validate_index(origin)?];

        while let Some(index) = pending.pop() {
            if !self.cells[index].is_empty() {
                continue;
            }

            let RevealCount { count, unexplored } = self.reveal_and_count(index)?;
            on_change(index, Cell::Explored(count));
            log::trace!("Explored cell {}, mine count: {}", index, count);

            if count == 0 {
                pending.extend(
                    unexplored
                        .into_iter()
                        .rev()
                        .filter(|&pos| self.cells[pos].is_empty()),
                );
            }
        }

        Ok(())
    }

    /// Whether any safe cell is still hidden. Hidden mines never count.
    pub fn has_unresolved_cells(&self) -> bool {
        self.cells.iter().any(|cell| cell.is_empty())
    }

    pub fn flag_count(&self) -> CellCount {
        self.cells.iter().filter(|cell| cell.is_flagged()).count() as CellCount
    }

    pub fn count_remaining_mines(&mut self) {
        self.remaining_mines = self.mines as isize - self.flag_count() as isize;
    }

    pub fn mine_count(&self) -> CellCount {
        self.cells.iter().filter(|cell| cell.is_mine()).count() as CellCount
    }
}
