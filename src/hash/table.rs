// Chained hash index over the source buffer's fixed-size blocks.
//
// Two parallel integer arrays, both sized `nblocks = len(source) / 16`:
//   landmark[bucket] = most-recently-indexed block whose hash lands there
//   collide[block]   = previous block sharing that bucket
// Stored entries are block index + 1 so that 0 means "empty"; chains yield
// blocks in reverse insertion order (highest block index first). Only
// block-aligned offsets are indexed; overlap matches come from extending
// outward at probe time, not from indexing every byte offset.

use super::rolling::{BLOCK_SIZE, RollingHash};

/// One-time hash index over a source buffer. Read-only after `build`.
pub struct SourceIndex {
    landmark: Vec<u32>,
    collide: Vec<u32>,
}

impl SourceIndex {
    /// Index every non-overlapping `BLOCK_SIZE` block of `source`.
    ///
    /// Caller precondition: `source.len() > BLOCK_SIZE`, so there is at
    /// least one block and one bucket. Shorter sources must bypass
    /// matching entirely.
    pub fn build(source: &[u8]) -> Self {
        let nblocks = source.len() / BLOCK_SIZE;
        debug_assert!(nblocks > 0);

        let mut landmark = vec![0u32; nblocks];
        let mut collide = vec![0u32; nblocks];
        for block in 0..nblocks {
            let hash = RollingHash::init(source, block * BLOCK_SIZE).value();
            let bucket = hash as usize % nblocks;
            collide[block] = landmark[bucket];
            landmark[bucket] = block as u32 + 1;
        }
        Self { landmark, collide }
    }

    /// Number of buckets (equals the number of indexed blocks).
    pub fn nbuckets(&self) -> usize {
        self.landmark.len()
    }

    /// Walk the candidate blocks whose block hash reduces to the same
    /// bucket as `hash`, most recently indexed first.
    pub fn chain(&self, hash: u32) -> Chain<'_> {
        let bucket = hash as usize % self.landmark.len();
        Chain {
            index: self,
            entry: self.landmark[bucket],
        }
    }
}

/// Iterator over one bucket's chain of block indices.
pub struct Chain<'a> {
    index: &'a SourceIndex,
    entry: u32,
}

impl Iterator for Chain<'_> {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        if self.entry == 0 {
            return None;
        }
        let block = (self.entry - 1) as usize;
        self.entry = self.index.collide[block];
        Some(block)
    }
}
