//! Blockdelta: block-indexed binary delta codec.
//!
//! Given a source buffer and a target buffer, [`create`] computes a compact
//! command stream describing how to turn the source into the target, and
//! [`apply`] replays that stream against the source to reconstruct the
//! target. Only the difference between the two versions needs to be stored
//! or transmitted.
//!
//! The crate provides:
//! - The hash-indexed greedy matcher (`hash`)
//! - Delta creation and bounds-checked replay (`delta`)
//! - The tagged-command wire format and varint codec (`wire`)
//! - File-oriented helpers (`io`)
//! - An optional CLI (`cli` feature)
//!
//! # Quick Start
//!
//! ```
//! let source = b"hello old world";
//! let target = b"hello new world";
//!
//! let delta = blockdelta::create(source, target);
//! let decoded = blockdelta::apply(source, &delta).unwrap();
//! assert_eq!(decoded, target);
//! ```

pub mod delta;
pub mod error;
pub mod hash;
pub mod io;
pub mod wire;

#[cfg(feature = "cli")]
pub mod cli;

pub use delta::decoder::apply;
pub use delta::encoder::create;
pub use error::{ApplyError, ErrorKind};
pub use hash::BLOCK_SIZE;
