// Greedy match search against the source index.
//
// For each candidate block on the probed chain, the match is extended
// forward byte-by-byte and then backward across the block boundary, so a
// match is not limited to block-aligned offsets or block-multiple lengths.
// A candidate is kept only if it beats its own encoding cost and is
// strictly longer than the best seen so far; ties keep the first found
// (chain order, newest block first).

use super::rolling::BLOCK_SIZE;
use super::table::SourceIndex;
use crate::wire::varint;

/// Chain entries examined per probe. A performance cap, not an error:
/// an exhausted budget just means the best candidate so far wins.
pub const PROBE_LIMIT: usize = 250;

/// Result of one successful probe. Ephemeral; consumed by the encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    /// Matched byte count.
    pub length: usize,
    /// Source offset the copy starts at (after backward extension).
    pub offset: usize,
    /// Target bytes between the scan base and the match start, to be
    /// emitted as a literal run before the copy.
    pub literal_prefix: usize,
}

/// Probe the index for the best source match of the target window at
/// `base + i`, whose rolling hash is `hash`.
///
/// Returns `None` when no candidate pays for its own encoding; the caller
/// then advances the scan by one byte.
pub fn find_match(
    source: &[u8],
    target: &[u8],
    index: &SourceIndex,
    hash: u32,
    base: usize,
    i: usize,
) -> Option<Match> {
    let pos = base + i;
    let mut best: Option<Match> = None;
    let mut best_len = 0usize;

    for block in index.chain(hash).take(PROBE_LIMIT) {
        let start = block * BLOCK_SIZE;

        // Forward: the hash only proposed this block, bytes decide. A stale
        // bucket collision simply extends zero bytes and fails the cost test.
        let fwd = source[start..]
            .iter()
            .zip(&target[pos..])
            .take_while(|(a, b)| a == b)
            .count();

        // Backward across the block boundary, bounded by both buffers.
        let mut back = 0usize;
        while back + 1 < start
            && back + 1 <= i
            && source[start - back - 1] == target[pos - back - 1]
        {
            back += 1;
        }

        let length = fwd + back;
        let offset = start - back;
        let literal_prefix = i - back;

        // The copy must not cost more to encode than the bytes it replaces:
        // its own tag + varints, plus the preceding insert's tag + length.
        let overhead = varint::sizeof(literal_prefix as u64)
            + varint::sizeof(length as u64)
            + varint::sizeof(offset as u64)
            + 3;
        if length >= overhead && length > best_len {
            best_len = length;
            best = Some(Match {
                length,
                offset,
                literal_prefix,
            });
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::rolling::RollingHash;

    fn probe(source: &[u8], target: &[u8], base: usize, i: usize) -> Option<Match> {
        let index = SourceIndex::build(source);
        let hash = RollingHash::init(target, base + i).value();
        find_match(source, target, &index, hash, base, i)
    }

    #[test]
    fn finds_block_aligned_match() {
        let source = b"0123456789abcdefGHIJKLMNOPQRSTUV";
        let target = b"GHIJKLMNOPQRSTUV trailing";
        let m = probe(source, target, 0, 0).expect("match");
        assert_eq!(m.offset, 16);
        assert_eq!(m.length, 16);
        assert_eq!(m.literal_prefix, 0);
    }

    #[test]
    fn backward_extension_crosses_block_boundary() {
        // The target repeats source bytes 8..32; the window at i = 8 hashes
        // the block at source offset 16, and backward extension recovers
        // the 8 bytes before it.
        let source = b"0123456789abcdefGHIJKLMNOPQRSTUVwxyz!@#$%^&*()_+";
        let target = b"89abcdefGHIJKLMNOPQRSTUV";
        let m = probe(source, target, 0, 8).expect("match");
        assert_eq!(m.offset, 8);
        assert_eq!(m.length, 24);
        assert_eq!(m.literal_prefix, 0);
    }

    #[test]
    fn literal_prefix_accounts_for_unmatched_lead() {
        let source = b"_______________0GHIJKLMNOPQRSTUV";
        let target = b"XYGHIJKLMNOPQRSTUV";
        let m = probe(source, target, 0, 2).expect("match");
        assert_eq!(m.literal_prefix, 2);
        assert_eq!(m.offset, 16);
        assert_eq!(m.length, 16);
    }

    #[test]
    fn short_match_fails_the_cost_test() {
        // Distinct 16-byte windows whose hashes collide into the same small
        // bucket space can still be proposed; with zero matching bytes the
        // candidate can never pay for tag + varint overhead.
        let source = b"abcdefghijklmnopqrstuvwxyz012345";
        let target = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ!@#$%^";
        assert_eq!(probe(source, target, 0, 0), None);
    }

    #[test]
    fn longer_candidate_replaces_shorter() {
        // Two copies of the same block; the second is followed by more
        // matching bytes, so forward extension is longer there.
        let mut source = Vec::new();
        source.extend_from_slice(b"GHIJKLMNOPQRSTUV");
        source.extend_from_slice(b"________________");
        source.extend_from_slice(b"GHIJKLMNOPQRSTUVWXYZ");
        let target = b"GHIJKLMNOPQRSTUVWXYZ";
        let m = probe(&source, target, 0, 0).expect("match");
        assert_eq!(m.offset, 32);
        assert_eq!(m.length, 20);
    }

    #[test]
    fn tie_keeps_first_found() {
        // Identical candidate blocks: equal lengths, so the newest block
        // (probed first) must win.
        let source = b"GHIJKLMNOPQRSTUVGHIJKLMNOPQRSTUV";
        let target = b"GHIJKLMNOPQRSTUV....";
        let m = probe(source, target, 0, 0).expect("match");
        assert_eq!(m.offset, 16, "expected the most recently indexed block");
        assert_eq!(m.length, 16);
    }
}
