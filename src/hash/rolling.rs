// Rolling window fingerprint.
//
// Adler-style two-accumulator checksum over a fixed 16-byte window:
// `low` is the byte sum, `high` the sum of running lows. Sliding the
// window forward one byte is O(1): subtract the outgoing byte from `low`,
// subtract `BLOCK_SIZE * outgoing` from `high`, add the new `low` back in.
// An `advance` chain stays bit-identical to a fresh `init` at the same
// offset, so the packed value can be used for bucket selection either way.

/// Width of the hash window, and of the non-overlapping source blocks the
/// index is built over.
pub const BLOCK_SIZE: usize = 16;

/// Incrementally-updatable fingerprint over a `BLOCK_SIZE` window.
///
/// `init` computes from scratch in O(BLOCK_SIZE); `advance` slides the
/// window forward one byte in O(1). Any non-adjacent jump requires a
/// re-`init`.
#[derive(Debug, Clone, Copy)]
pub struct RollingHash {
    low: u32,
    high: u32,
}

impl RollingHash {
    /// Hash the window `buf[offset..offset + BLOCK_SIZE)`.
    ///
    /// Caller precondition: a full window exists at `offset`.
    pub fn init(buf: &[u8], offset: usize) -> Self {
        debug_assert!(offset + BLOCK_SIZE <= buf.len());
        let mut low: u32 = 0;
        let mut high: u32 = 0;
        for &b in &buf[offset..offset + BLOCK_SIZE] {
            low = low.wrapping_add(u32::from(b));
            high = high.wrapping_add(low);
        }
        Self { low, high }
    }

    /// Slide the window forward one byte: drop `outgoing`, take `incoming`.
    #[inline(always)]
    pub fn advance(&mut self, outgoing: u8, incoming: u8) {
        let out = u32::from(outgoing);
        self.low = self.low.wrapping_sub(out).wrapping_add(u32::from(incoming));
        self.high = self
            .high
            .wrapping_sub(out.wrapping_mul(BLOCK_SIZE as u32))
            .wrapping_add(self.low);
    }

    /// The packed accumulator, used modulo the index's bucket count.
    #[inline(always)]
    pub fn value(&self) -> u32 {
        ((self.high & 0xFFFF) << 16) | (self.low & 0xFFFF)
    }
}
