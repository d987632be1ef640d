use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - Initial -> InProgress
/// - InProgress -> Success
/// - InProgress -> Failure
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// No cell revealed yet, mines not placed
    #[default]
    Initial,
    InProgress,
    /// Every safe cell explored
    Success,
    /// A mine was revealed
    Failure,
}

impl GameStatus {
    pub const fn is_initial(self) -> bool {
        matches!(self, Self::Initial)
    }

    /// Indicates the game has ended and no moves can be made anymore
    pub const fn is_final(self) -> bool {
        matches!(self, Self::Success | Self::Failure)
    }
}

/// Receives board updates as they happen.
pub trait GameListener {
    /// A cell got explored or had its flag toggled.
    fn on_cell_changed(&mut self, index: CellIndex, cell: Cell) {
        let _ = (index, cell);
    }

    /// The game moved to `status`; `index` is the cell that caused it.
    fn on_status_changed(&mut self, index: CellIndex, status: GameStatus) {
        let _ = (index, status);
    }
}

impl GameListener for () {}

impl<C, S> GameListener for (C, S)
where
    C: FnMut(CellIndex, Cell),
    S: FnMut(CellIndex, GameStatus),
{
    fn on_cell_changed(&mut self, index: CellIndex, cell: Cell) {
        (self.0)(index, cell)
    }

    fn on_status_changed(&mut self, index: CellIndex, status: GameStatus) {
        (self.1)(index, status)
    }
}

/// Represents a game from the first reveal to a win or loss.
#[derive(Clone, Debug)]
pub struct Game<L = (), S = RandomIndexSource> {
    size: BoardSize,
    board: Board,
    status: GameStatus,
    listener: L,
    source: S,
}

impl<L: GameListener, S: IndexSource> Game<L, S> {
    pub fn new(size: BoardSize, listener: L, source: S) -> Self {
        Self {
            size,
            board: Board::new(size),
            status: GameStatus::Initial,
            listener,
            source,
        }
    }

    /// Discards the current board and starts over; mines are placed on the first reveal.
    pub fn new_game(&mut self, size: BoardSize) {
        self.size = size;
        self.board.setup(size);
        self.status = GameStatus::Initial;
        log::debug!("New game {}", size);
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_final()
    }

    pub fn size(&self) -> BoardSize {
        self.size
    }

    pub fn len(&self) -> usize {
        self.board.len()
    }

    pub fn is_empty(&self) -> bool {
        self.board.is_empty()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn value(&self, index: CellIndex) -> Result<Cell> {
        self.board.value(index)
    }

    pub fn remaining_mines(&self) -> isize {
        self.board.remaining_mines()
    }

    pub fn listener(&self) -> &L {
        &self.listener
    }

    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }

    /// Flags or unflags a hidden cell. Finished games ignore the request.
    pub fn toggle_flag(&mut self, index: CellIndex) -> Result<MarkOutcome> {
        let index = self.board.validate_index(index)?;
        if self.status.is_final() {
            return Ok(MarkOutcome::NoChange);
        }

        let cell = self.board.toggle_flag(index)?;
        self.listener.on_cell_changed(index, cell);

        if !self.status.is_initial() {
            self.update_status(index);
        }
        Ok(MarkOutcome::Changed)
    }

    /// Reveals a cell, cascading through zero counts.
    ///
    /// The first reveal of a game places the mines around it. Explored or
    /// flagged cells and finished games are left untouched.
    pub fn reveal(&mut self, index: CellIndex) -> Result<RevealOutcome> {
        let index = self.board.validate_index(index)?;
        if self.status.is_final() {
            return Ok(RevealOutcome::NoChange);
        }

        let cell = self.board.cells()[index];
        if cell.is_explored() || cell.is_flagged() {
            return Ok(RevealOutcome::NoChange);
        }

        if self.status.is_initial() {
            self.board.seed_mines(index, &mut self.source)?;
            self.set_status(index, GameStatus::InProgress);
        }

        if self.board.cells()[index].is_unflagged_mine() {
            log::debug!("Mine hit at {}", index);
            self.set_status(index, GameStatus::Failure);
            return Ok(RevealOutcome::HitMine);
        }

        let listener = &mut self.listener;
        self.board
            .cascade(index, |changed, cell| listener.on_cell_changed(changed, cell))?;
        self.board.count_remaining_mines();
        self.update_status(index);

        Ok(match self.status {
            GameStatus::Success => RevealOutcome::Won,
            _ => RevealOutcome::Revealed,
        })
    }

    fn update_status(&mut self, index: CellIndex) {
        let status = if self.board.has_unresolved_cells() {
            GameStatus::InProgress
        } else {
            GameStatus::Success
        };

        if status != self.status {
            self.set_status(index, status);
        }
    }

    fn set_status(&mut self, index: CellIndex, status: GameStatus) {
        log::debug!("Game status {:?} -> {:?} at {}", self.status, status, index);
        self.status = status;
        self.listener.on_status_changed(index, status);
    }
}
