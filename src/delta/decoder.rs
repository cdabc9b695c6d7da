// Delta replay: reconstruct the target from source + command stream.
//
// Format checking (tags, varints, insert lengths) lives in the command
// iterator; this module adds the one check only the applier can perform,
// that every copy range lies inside the source buffer. The encoder alone
// cannot guarantee that, since the source at apply time may differ from
// the source at encode time.

use crate::error::ApplyError;
use crate::wire::{Command, CommandIter};

/// Replay `delta` against `source`, reconstructing the target buffer.
///
/// Fails atomically: on any malformed command or out-of-bounds copy the
/// partial output is discarded and an error returned.
pub fn apply(source: &[u8], delta: &[u8]) -> Result<Vec<u8>, ApplyError> {
    let mut output = Vec::new();
    for command in CommandIter::new(delta) {
        match command? {
            Command::Insert { data } => output.extend_from_slice(data),
            Command::Copy { len, offset } => {
                let end = offset.checked_add(len);
                match end {
                    Some(end) if end <= source.len() as u64 => {
                        output.extend_from_slice(&source[offset as usize..end as usize]);
                    }
                    _ => {
                        return Err(ApplyError::CopyOutOfBounds {
                            len,
                            offset,
                            source_len: source.len(),
                        });
                    }
                }
            }
        }
    }
    Ok(output)
}
