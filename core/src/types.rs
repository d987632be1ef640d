use smallvec::SmallVec;

/// Single coordinate axis used for board width and height.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Linear position of a cell, `y * width + x`.
pub type CellIndex = usize;

/// Up to nine cell indices: a clipped 3x3 block or the Moore neighbourhood of a cell.
pub type Area = SmallVec<[CellIndex; 9]>;

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Horizontal offsets allowed around `center`, so a scan never wraps into the neighbouring row.
const fn horizontal_bounds(center: CellIndex, width: CellIndex) -> (isize, isize) {
    let column = center % width;
    let lower = if column == 0 { 0 } else { -1 };
    let upper = if column + 1 == width { 0 } else { 1 };
    (lower, upper)
}

fn scan(center: CellIndex, width: CellIndex, size: CellIndex, include_center: bool) -> Area {
    let mut area = Area::new();
    if width == 0 {
        return area;
    }

    let (lower, upper) = horizontal_bounds(center, width);
    let center = center as isize;
    let width = width as isize;
    let size = size as isize;

    for row in [-width, 0, width] {
        for column in lower..=upper {
            let pos = center + row + column;
            if pos < 0 || pos >= size || (pos == center && !include_center) {
                continue;
            }
            area.push(pos as CellIndex);
        }
    }

    area
}

/// Clipped 3x3 block around `center`, including `center`, in ascending order.
pub fn surrounding_area(center: CellIndex, width: CellIndex, size: CellIndex) -> Area {
    scan(center, width, size, true)
}

/// Clipped Moore neighbourhood of `center` (up to 8 cells), in ascending order.
pub fn neighbours(center: CellIndex, width: CellIndex, size: CellIndex) -> Area {
    scan(center, width, size, false)
}
