// Delta wire format: tagged commands over a varint codec.
//
// A delta is a flat sequence of commands, no header or terminator:
//   insert: [TAG_INSERT][varint len][len raw bytes]
//   copy:   [TAG_COPY][varint len][varint source offset]
// The stream ends at end-of-input; a truncated trailing command is a
// format error.

use crate::error::ApplyError;

pub mod varint;

/// Command byte introducing an insert (literal run follows inline).
pub const TAG_INSERT: u8 = 0x01;

/// Command byte introducing a copy from the source buffer.
pub const TAG_COPY: u8 = 0x02;

// ---------------------------------------------------------------------------
// Parsed commands
// ---------------------------------------------------------------------------

/// One decoded delta command. Insert data borrows from the delta stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    Insert { data: &'a [u8] },
    Copy { len: u64, offset: u64 },
}

// ---------------------------------------------------------------------------
// Command iterator
// ---------------------------------------------------------------------------

/// Iterator over the commands of a delta stream.
///
/// Performs all format checking (tags, varint completeness, insert lengths
/// against the remaining stream). Source bounds are not checked here; that
/// is the applier's job, since only it knows the source buffer.
pub struct CommandIter<'a> {
    delta: &'a [u8],
    pos: usize,
}

impl<'a> CommandIter<'a> {
    pub fn new(delta: &'a [u8]) -> Self {
        Self { delta, pos: 0 }
    }

    fn read_varint(&mut self) -> Result<u64, ApplyError> {
        let at = self.pos;
        let (v, n) = varint::read(&self.delta[at..])
            .map_err(|source| ApplyError::TruncatedCommand { offset: at, source })?;
        self.pos += n;
        Ok(v)
    }
}

impl<'a> Iterator for CommandIter<'a> {
    type Item = Result<Command<'a>, ApplyError>;

    fn next(&mut self) -> Option<Self::Item> {
        // Copy the 'a reference out so returned slices outlive `&mut self`.
        let delta = self.delta;
        if self.pos >= delta.len() {
            return None;
        }
        let tag_at = self.pos;
        let tag = delta[tag_at];
        self.pos += 1;

        let cmd = match tag {
            TAG_INSERT => self.read_varint().and_then(|len| {
                let remaining = delta.len() - self.pos;
                let Ok(len_usize) = usize::try_from(len) else {
                    return Err(ApplyError::InsertOverrun { len, remaining });
                };
                if len_usize > remaining {
                    return Err(ApplyError::InsertOverrun { len, remaining });
                }
                let data = &delta[self.pos..self.pos + len_usize];
                self.pos += len_usize;
                Ok(Command::Insert { data })
            }),
            TAG_COPY => self.read_varint().and_then(|len| {
                let offset = self.read_varint()?;
                Ok(Command::Copy { len, offset })
            }),
            other => Err(ApplyError::UnknownTag {
                tag: other,
                offset: tag_at,
            }),
        };

        if cmd.is_err() {
            // Poison the iterator; a malformed stream has no further commands.
            self.pos = self.delta.len();
        }
        Some(cmd)
    }
}

// ---------------------------------------------------------------------------
// Emit helpers
// ---------------------------------------------------------------------------

/// Append an insert command carrying `data` verbatim.
pub fn emit_insert(out: &mut Vec<u8>, data: &[u8]) {
    out.push(TAG_INSERT);
    varint::write(out, data.len() as u64);
    out.extend_from_slice(data);
}

/// Append a copy command for `len` bytes at source `offset`.
pub fn emit_copy(out: &mut Vec<u8>, len: u64, offset: u64) {
    out.push(TAG_COPY);
    varint::write(out, len);
    varint::write(out, offset);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
