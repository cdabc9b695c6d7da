// Pinned wire-format vectors.
//
// These lock the byte-exact output of the encoder and the varint layout.
// A failure here means the wire format drifted: deltas written by older
// builds would stop replaying identically.

use blockdelta::wire::varint;
use blockdelta::{apply, create};

fn encode_varint(v: u64) -> Vec<u8> {
    let mut buf = Vec::new();
    varint::write(&mut buf, v);
    buf
}

#[test]
fn varint_layout_vectors() {
    let vectors: &[(u64, &[u8])] = &[
        (0, &[0x00]),
        (240, &[0xF0]),
        (241, &[0xF1, 0x01]),
        (300, &[0xF1, 0x3C]),
        (2287, &[0xF8, 0xFF]),
        (2288, &[0xF9, 0x00, 0x00]),
        (67823, &[0xF9, 0xFF, 0xFF]),
        (67824, &[0xFA, 0x01, 0x08, 0xF0]),
        (0xFF_FFFF, &[0xFA, 0xFF, 0xFF, 0xFF]),
        (0x0102_0304, &[0xFB, 0x01, 0x02, 0x03, 0x04]),
        (u64::MAX, &[0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF]),
    ];
    for &(value, expected) in vectors {
        assert_eq!(encode_varint(value), expected, "value {value}");
        let (decoded, consumed) = varint::read(expected).unwrap();
        assert_eq!(decoded, value);
        assert_eq!(consumed, expected.len());
    }
}

#[test]
fn scenario_delta_bytes() {
    let source = b"ABCDEFGHABCDEFGHABCDEFGHABCDEFGH";
    let target = b"XYABCDEFGHABCDEFGHZZ";
    let delta = create(source, target);

    // insert "XY" | copy 16 @ 16 | insert "ZZ"
    let expected = [
        0x01, 0x02, b'X', b'Y', //
        0x02, 0x10, 0x10, //
        0x01, 0x02, b'Z', b'Z',
    ];
    assert_eq!(delta, expected);
    assert_eq!(apply(source, &delta).unwrap(), target);
}

#[test]
fn tiny_source_delta_bytes() {
    // Source at or below one block: single insert carrying the target.
    let delta = create(b"0123456789abcdef", b"AB");
    assert_eq!(delta, [0x01, 0x02, b'A', b'B']);

    // Both buffers empty: a single zero-length insert.
    assert_eq!(create(b"", b""), [0x01, 0x00]);
}

#[test]
fn empty_target_with_indexable_source_is_empty_delta() {
    let source: Vec<u8> = (0..=255u8).collect();
    assert_eq!(create(&source, b""), Vec::<u8>::new());
}
