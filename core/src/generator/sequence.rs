use alloc::vec::Vec;

use super::*;

/// Replays a fixed list of positions, wrapping around at the end.
///
/// Values are reduced modulo the requested bound. Useful to lay out a known
/// minefield, e.g. for tests or puzzle replays.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SequenceSource {
    indices: Vec<CellIndex>,
    position: usize,
}

impl SequenceSource {
    pub fn new(indices: impl IntoIterator<Item = CellIndex>) -> Self {
        Self {
            indices: indices.into_iter().collect(),
            position: 0,
        }
    }
}

impl IndexSource for SequenceSource {
    fn next_index(&mut self, bound: CellIndex) -> CellIndex {
        if self.indices.is_empty() {
            return 0;
        }
        let index = self.indices[self.position % self.indices.len()];
        self.position += 1;
        index % bound
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_and_reduces() {
        let mut source = SequenceSource::new([3, 70]);
        assert_eq!(source.next_index(64), 3);
        assert_eq!(source.next_index(64), 6);
        assert_eq!(source.next_index(64), 3);
    }
}
