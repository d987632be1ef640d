use crate::*;
pub use random::*;
pub use sequence::*;

mod random;
mod sequence;

/// Source of cell positions used when scattering mines.
pub trait IndexSource {
    /// Returns an index in `0..bound`; `bound` is never zero.
    fn next_index(&mut self, bound: CellIndex) -> CellIndex;
}

impl<S: IndexSource + ?Sized> IndexSource for &mut S {
    fn next_index(&mut self, bound: CellIndex) -> CellIndex {
        (**self).next_index(bound)
    }
}
