// Variable-length unsigned integer encoding for delta counts and offsets.
//
// Prefix-tagged layout: the first byte decides the total width.
//   A0 <= 240          : value is A0 itself                        (1 byte)
//   A0 in 241..=248    : 240 + 256*(A0-241) + A1                   (2 bytes)
//   A0 == 249          : 2288 + 256*A1 + A2                        (3 bytes)
//   A0 in 250..=255    : (A0-247) big-endian payload bytes follow  (4-9 bytes)
//
// Size table this realizes (the wire compatibility contract):
//   1 byte  <= 240            2 bytes <= 2287
//   3 bytes <= 67823          4 bytes <= 2^24-1
//   5 bytes <= 2^32-1         6 bytes <= 2^40-1
//   7 bytes <= 2^48-1         8 bytes <= 2^56-1
//   9 bytes otherwise
//
// Unlike base-128 varints, single-byte headers cover values up to 240 and
// decoding never loops over continuation bits.

use thiserror::Error;

/// Maximum encoded length of a `u64` (1 tag byte + 8 payload bytes).
pub const MAX_VARINT_LEN: usize = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VarintError {
    /// Not enough input bytes to complete the integer.
    #[error("truncated varint: wanted {wanted} bytes, had {available}")]
    Truncated { wanted: usize, available: usize },
}

// ---------------------------------------------------------------------------
// Encoding
// ---------------------------------------------------------------------------

/// Append the encoding of `v` to `out`. Writes 1..=9 bytes.
pub fn write(out: &mut Vec<u8>, v: u64) {
    if v <= 240 {
        out.push(v as u8);
    } else if v <= 2287 {
        let v = v - 240;
        out.push(241 + (v >> 8) as u8);
        out.push((v & 0xFF) as u8);
    } else if v <= 67823 {
        let v = v - 2288;
        out.push(249);
        out.push((v >> 8) as u8);
        out.push((v & 0xFF) as u8);
    } else {
        let be = v.to_be_bytes();
        let payload = 8 - (v.leading_zeros() / 8) as usize;
        out.push(247 + payload as u8);
        out.extend_from_slice(&be[8 - payload..]);
    }
}

// ---------------------------------------------------------------------------
// Decoding
// ---------------------------------------------------------------------------

/// Decode one integer from the front of `data`.
/// Returns `(value, bytes_consumed)` or a truncation error.
pub fn read(data: &[u8]) -> Result<(u64, usize), VarintError> {
    let a0 = *data.first().ok_or(VarintError::Truncated {
        wanted: 1,
        available: 0,
    })?;
    match a0 {
        0..=240 => Ok((u64::from(a0), 1)),
        241..=248 => {
            let a1 = fetch(data, 1)?;
            Ok((240 + 256 * u64::from(a0 - 241) + u64::from(a1), 2))
        }
        249 => {
            let a1 = fetch(data, 1)?;
            let a2 = fetch(data, 2)?;
            Ok((2288 + 256 * u64::from(a1) + u64::from(a2), 3))
        }
        250..=255 => {
            let payload = usize::from(a0 - 247);
            if data.len() < 1 + payload {
                return Err(VarintError::Truncated {
                    wanted: 1 + payload,
                    available: data.len(),
                });
            }
            let mut v: u64 = 0;
            for &byte in &data[1..1 + payload] {
                v = (v << 8) | u64::from(byte);
            }
            Ok((v, 1 + payload))
        }
    }
}

#[inline]
fn fetch(data: &[u8], idx: usize) -> Result<u8, VarintError> {
    data.get(idx).copied().ok_or(VarintError::Truncated {
        wanted: idx + 1,
        available: data.len(),
    })
}

// ---------------------------------------------------------------------------
// Sizing
// ---------------------------------------------------------------------------

/// Encoded byte-length of `v`, per the size table above.
///
/// The matcher uses this to weigh a copy command against the literal bytes
/// it would replace, so it must agree exactly with `write`.
#[inline]
pub fn sizeof(v: u64) -> usize {
    if v <= 240 {
        1
    } else if v <= 2287 {
        2
    } else if v <= 67823 {
        3
    } else if v <= 0xFF_FFFF {
        4
    } else if v <= 0xFFFF_FFFF {
        5
    } else if v <= 0xFF_FFFF_FFFF {
        6
    } else if v <= 0xFFFF_FFFF_FFFF {
        7
    } else if v <= 0xFF_FFFF_FFFF_FFFF {
        8
    } else {
        9
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
