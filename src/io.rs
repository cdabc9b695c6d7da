// File-level helpers for delta encoding/decoding.
//
// `encode_file()` and `decode_file()` wrap the in-memory codec with file
// reads/writes and return size statistics. The codec itself is purely
// in-memory, so both sides read their inputs fully before working.

use std::io;
use std::path::Path;

use log::debug;
use thiserror::Error;

use crate::delta::{decoder, encoder};
use crate::error::ApplyError;

// ---------------------------------------------------------------------------
// Stats
// ---------------------------------------------------------------------------

/// Statistics returned by `encode_file()`.
#[derive(Debug, Clone)]
pub struct EncodeStats {
    /// Source file size in bytes.
    pub source_size: u64,
    /// Target file size in bytes.
    pub target_size: u64,
    /// Delta output size in bytes.
    pub delta_size: u64,
}

/// Statistics returned by `decode_file()`.
#[derive(Debug, Clone)]
pub struct DecodeStats {
    /// Source file size in bytes.
    pub source_size: u64,
    /// Delta file size in bytes.
    pub delta_size: u64,
    /// Reconstructed output size in bytes.
    pub output_size: u64,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Error type for file-level operations.
#[derive(Debug, Error)]
pub enum IoError {
    /// File open, read, or write failure.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// Delta replay failure (malformed delta or incompatible source).
    #[error("apply error: {0}")]
    Apply(#[from] ApplyError),
}

// ---------------------------------------------------------------------------
// encode_file
// ---------------------------------------------------------------------------

/// Compute the delta between a source file and a target file, writing the
/// command stream to `delta_path`.
pub fn encode_file(
    source_path: &Path,
    target_path: &Path,
    delta_path: &Path,
) -> Result<EncodeStats, IoError> {
    let source = std::fs::read(source_path)?;
    let target = std::fs::read(target_path)?;

    let delta = encoder::create(&source, &target);
    std::fs::write(delta_path, &delta)?;

    debug!(
        "encoded {} -> {}: {} source, {} target, {} delta bytes",
        source_path.display(),
        delta_path.display(),
        source.len(),
        target.len(),
        delta.len()
    );

    Ok(EncodeStats {
        source_size: source.len() as u64,
        target_size: target.len() as u64,
        delta_size: delta.len() as u64,
    })
}

// ---------------------------------------------------------------------------
// decode_file
// ---------------------------------------------------------------------------

/// Replay a delta file against a source file, writing the reconstructed
/// target to `output_path`.
pub fn decode_file(
    source_path: &Path,
    delta_path: &Path,
    output_path: &Path,
) -> Result<DecodeStats, IoError> {
    let source = std::fs::read(source_path)?;
    let delta = std::fs::read(delta_path)?;

    let output = decoder::apply(&source, &delta)?;
    std::fs::write(output_path, &output)?;

    debug!(
        "decoded {} against {}: {} delta, {} output bytes",
        delta_path.display(),
        source_path.display(),
        delta.len(),
        output.len()
    );

    Ok(DecodeStats {
        source_size: source.len() as u64,
        delta_size: delta.len() as u64,
        output_size: output.len() as u64,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
