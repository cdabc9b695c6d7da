// Delta encoder: greedy scan of the target against the source index.
//
// The scan keeps a rolling hash over the 16-byte window at `base + i`.
// Each position is probed against the index; a hit emits the pending
// literal prefix (if any) followed by a copy, then restarts the hash at
// the new base. A miss slides the window one byte. The loop guard
// reserves a full window of lookahead, so up to 15 trailing bytes are
// flushed as a final literal run.
//
// Total function: any pair of buffers, including empty ones or a source
// too small to index, produces a valid delta. Deterministic: identical
// inputs yield byte-identical deltas.

use crate::hash::matching;
use crate::hash::rolling::{BLOCK_SIZE, RollingHash};
use crate::hash::table::SourceIndex;
use crate::wire;

/// Compute a delta that transforms `source` into `target`.
///
/// The returned bytes replay against `source` (see
/// [`apply`](crate::delta::decoder::apply)) to reconstruct `target`
/// exactly.
pub fn create(source: &[u8], target: &[u8]) -> Vec<u8> {
    let mut delta = Vec::new();

    // A source this small can never satisfy the cost test, and indexing it
    // would produce a degenerate table. The whole target goes out literal.
    if source.len() <= BLOCK_SIZE {
        wire::emit_insert(&mut delta, target);
        return delta;
    }

    let index = SourceIndex::build(source);
    let mut base = 0usize;

    'scan: while base + BLOCK_SIZE < target.len() {
        let mut hash = RollingHash::init(target, base);
        let mut i = 0usize;
        loop {
            if let Some(m) =
                matching::find_match(source, target, &index, hash.value(), base, i)
            {
                if m.literal_prefix > 0 {
                    wire::emit_insert(&mut delta, &target[base..base + m.literal_prefix]);
                    base += m.literal_prefix;
                }
                wire::emit_copy(&mut delta, m.length as u64, m.offset as u64);
                base += m.length;
                continue 'scan;
            }
            if base + i + BLOCK_SIZE >= target.len() {
                // No full window left to hash; nothing further can match.
                wire::emit_insert(&mut delta, &target[base..]);
                base = target.len();
                break 'scan;
            }
            hash.advance(target[base + i], target[base + i + BLOCK_SIZE]);
            i += 1;
        }
    }

    if base < target.len() {
        wire::emit_insert(&mut delta, &target[base..]);
    }

    delta
}
