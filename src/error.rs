// Error types for delta replay.
//
// `create` is total and has no error path; all failures belong to `apply`,
// which rejects malformed delta streams (format errors) and copy ranges that
// fall outside the source buffer (bounds errors). Failures are atomic: the
// partially built output is discarded.

use thiserror::Error;

use crate::wire::varint::VarintError;

/// Coarse classification of an `apply` failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The delta stream itself is malformed (unknown tag, truncation,
    /// insert overrunning the stream).
    Format,
    /// The delta is well-formed but references bytes outside the source.
    Bounds,
}

/// Error raised while replaying a delta against a source buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ApplyError {
    /// A command byte that is neither an insert nor a copy tag.
    #[error("unknown command tag {tag:#04x} at delta offset {offset}")]
    UnknownTag { tag: u8, offset: usize },

    /// A command header ended before its varint fields were complete.
    #[error("truncated command at delta offset {offset}: {source}")]
    TruncatedCommand {
        offset: usize,
        source: VarintError,
    },

    /// An insert claimed more literal bytes than the delta stream holds.
    #[error("insert of {len} bytes exceeds the {remaining} remaining delta bytes")]
    InsertOverrun { len: u64, remaining: usize },

    /// A copy range extends past the end of the source buffer.
    #[error("copy of {len} bytes at source offset {offset} exceeds source length {source_len}")]
    CopyOutOfBounds {
        len: u64,
        offset: u64,
        source_len: usize,
    },
}

impl ApplyError {
    /// Which side of the format/bounds taxonomy this error falls on.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::CopyOutOfBounds { .. } => ErrorKind::Bounds,
            Self::UnknownTag { .. }
            | Self::TruncatedCommand { .. }
            | Self::InsertOverrun { .. } => ErrorKind::Format,
        }
    }
}
