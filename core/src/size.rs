use core::cmp::Ordering;
use core::fmt;
use serde::{Deserialize, Serialize};

use crate::*;

/// Validated board configuration: `width x height` cells holding `mines` mines.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBoardSize")]
pub struct BoardSize {
    width: Coord,
    height: Coord,
    mines: CellCount,
}

#[derive(Deserialize)]
struct RawBoardSize {
    width: Coord,
    height: Coord,
    mines: CellCount,
}

impl TryFrom<RawBoardSize> for BoardSize {
    type Error = GameError;

    fn try_from(raw: RawBoardSize) -> Result<Self> {
        Self::new(raw.width, raw.height, raw.mines)
    }
}

impl BoardSize {
    pub const MIN_WIDTH: Coord = 8;
    pub const MAX_WIDTH: Coord = 30;
    pub const MIN_HEIGHT: Coord = 8;
    pub const MAX_HEIGHT: Coord = 24;

    pub const SMALL: BoardSize = BoardSize::new_unchecked(8, 8, 10);
    pub const MEDIUM: BoardSize = BoardSize::new_unchecked(16, 16, 40);
    pub const BIG: BoardSize = BoardSize::new_unchecked(30, 16, 99);

    pub const STANDARD: [BoardSize; 3] = [Self::SMALL, Self::MEDIUM, Self::BIG];

    const fn new_unchecked(width: Coord, height: Coord, mines: CellCount) -> Self {
        Self {
            width,
            height,
            mines,
        }
    }

    pub fn new(width: Coord, height: Coord, mines: CellCount) -> Result<Self> {
        if !(Self::MIN_WIDTH..=Self::MAX_WIDTH).contains(&width)
            || !(Self::MIN_HEIGHT..=Self::MAX_HEIGHT).contains(&height)
        {
            return Err(GameError::InvalidDimensions { width, height });
        }

        if mines == 0 {
            return Err(GameError::TooFewMines);
        }

        let max = Self::max_mines(width, height);
        if mines > max {
            return Err(GameError::TooManyMines { mines, max });
        }

        Ok(Self::new_unchecked(width, height, mines))
    }

    /// Upper bound on mines for a board, always leaves room for a mine-free opening.
    pub const fn max_mines(width: Coord, height: Coord) -> CellCount {
        mult(width.saturating_sub(1), height.saturating_sub(1))
    }

    pub const fn width(&self) -> Coord {
        self.width
    }

    pub const fn height(&self) -> Coord {
        self.height
    }

    pub const fn mines(&self) -> CellCount {
        self.mines
    }

    pub const fn area(&self) -> CellCount {
        mult(self.width, self.height)
    }

    pub fn is_standard(&self) -> bool {
        Self::STANDARD.contains(self)
    }
}

/// Ordered by area, then mine count; width only separates transposed boards.
impl Ord for BoardSize {
    fn cmp(&self, other: &Self) -> Ordering {
        self.area()
            .cmp(&other.area())
            .then(self.mines.cmp(&other.mines))
            .then(self.width.cmp(&other.width))
    }
}

impl PartialOrd for BoardSize {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for BoardSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} * {} : {}", self.width, self.height, self.mines)
    }
}
