use serde::{Deserialize, Serialize};

use crate::*;

/// State of one grid position.
///
/// Flags only exist on hidden cells, and the flag is orthogonal to whether the
/// cell holds a mine. A hidden empty cell becomes [`Cell::Explored`] exactly once,
/// a hidden mine never does.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Revealed cell with the number of adjacent mines, `0..=8`.
    Explored(u8),
    Hidden { mine: bool, flagged: bool },
}

impl Cell {
    pub const MAX_COUNT: u8 = 8;

    pub const EMPTY: Cell = Cell::Hidden {
        mine: false,
        flagged: false,
    };
    pub const MINE: Cell = Cell::Hidden {
        mine: true,
        flagged: false,
    };

    /// Packed code bit of a hidden empty cell.
    pub const EMPTY_CODE: u8 = 0b001_0000;
    /// Packed code bit of a hidden mine.
    pub const MINE_CODE: u8 = 0b010_0000;
    /// Packed code bit of a flag.
    pub const FLAG_CODE: u8 = 0b100_0000;

    /// Hidden cell without a mine, flagged or not.
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Hidden { mine: false, .. })
    }

    /// Hidden cell with a mine, flagged or not.
    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Hidden { mine: true, .. })
    }

    pub const fn is_flagged(self) -> bool {
        matches!(self, Self::Hidden { flagged: true, .. })
    }

    pub const fn is_explored(self) -> bool {
        matches!(self, Self::Explored(_))
    }

    pub const fn is_unflagged_mine(self) -> bool {
        matches!(
            self,
            Self::Hidden {
                mine: true,
                flagged: false
            }
        )
    }

    /// A flag placed on a cell that has no mine.
    pub const fn is_flagged_empty(self) -> bool {
        matches!(
            self,
            Self::Hidden {
                mine: false,
                flagged: true
            }
        )
    }

    pub const fn count(self) -> Option<u8> {
        match self {
            Self::Explored(count) => Some(count),
            Self::Hidden { .. } => None,
        }
    }

    pub fn toggle_flag(self) -> Result<Self> {
        match self {
            Self::Explored(_) => Err(GameError::CellExplored),
            Self::Hidden { mine, flagged } => Ok(Self::Hidden {
                mine,
                flagged: !flagged,
            }),
        }
    }

    /// Turns a hidden empty cell into a hidden mine, keeping its flag.
    pub fn place_mine(self) -> Result<Self> {
        match self {
            Self::Explored(_) => Err(GameError::CellExplored),
            Self::Hidden { mine: true, .. } => Err(GameError::CellMined),
            Self::Hidden {
                mine: false,
                flagged,
            } => Ok(Self::Hidden {
                mine: true,
                flagged,
            }),
        }
    }

    /// Packed integer form: explored counts are `0..=8`, hidden cells combine
    /// [`Self::EMPTY_CODE`] or [`Self::MINE_CODE`] with [`Self::FLAG_CODE`].
    pub const fn code(self) -> u8 {
        match self {
            Self::Explored(count) => count,
            Self::Hidden { mine, flagged } => {
                let kind = if mine { Self::MINE_CODE } else { Self::EMPTY_CODE };
                if flagged { kind | Self::FLAG_CODE } else { kind }
            }
        }
    }

    pub const fn from_code(code: u8) -> Option<Self> {
        let flagged = code & Self::FLAG_CODE != 0;
        match code & !Self::FLAG_CODE {
            count if count <= Self::MAX_COUNT && !flagged => Some(Self::Explored(count)),
            Self::EMPTY_CODE => Some(Self::Hidden {
                mine: false,
                flagged,
            }),
            Self::MINE_CODE => Some(Self::Hidden {
                mine: true,
                flagged,
            }),
            _ => None,
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::EMPTY
    }
}
