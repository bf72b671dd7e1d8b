//! End-to-end octet buffer scenarios
//!
//! Exercises the public surface the way a protocol layer would: build a
//! command frame with chained writes, walk a response with cursor reads,
//! and classify frames with the hex pattern predicates.

use octet_buffer::{hex_matches_bitflags, hex_matches_bitpattern, OctetBuffer, OctetBufferError};

#[test]
fn walk_deadbeef_with_u16_reads() {
    let mut buffer = OctetBuffer::from_hex("deadbeef").expect("hex should decode");

    assert_eq!(buffer.read_u16().expect("first u16"), 0xDEAD);
    assert_eq!(buffer.read_u16().expect("second u16"), 0xBEEF);
    assert_eq!(buffer.remaining(), 0);

    let err = buffer.read_u16().expect_err("buffer is drained");
    assert_eq!(err.missing_bytes(), Some(2));
}

#[test]
fn hex_roundtrip_is_lossless_and_uppercase() {
    let samples: [&[u8]; 4] = [
        &[],
        &[0x00],
        &[0xDE, 0xAD, 0xBE, 0xEF],
        &[0x00, 0x01, 0x7F, 0x80, 0xFF],
    ];

    for bytes in samples {
        let hex = OctetBuffer::from_bytes(bytes.to_vec()).to_hex();
        let decoded = OctetBuffer::from_hex(&hex).expect("serialized form must decode");
        assert_eq!(decoded.as_slice(), bytes);
        assert_eq!(hex, hex.to_uppercase());
    }
}

#[test]
fn build_command_frame_with_chained_writes() {
    // Frame: command byte, 16-bit address, 24-bit length, payload
    let mut frame = OctetBuffer::new();
    frame
        .write_u8(0xA5)
        .write_u16(0x0100)
        .write_u24(0x000004)
        .write_bytes(&[0xDE, 0xAD, 0xBE, 0xEF]);

    assert_eq!(frame.to_hex(), "A50100000004DEADBEEF");
    assert_eq!(frame.available(), 10);

    // Parse it back
    frame.reset();
    assert_eq!(frame.read_u8().unwrap(), 0xA5);
    assert_eq!(frame.read_u16().unwrap(), 0x0100);
    assert_eq!(frame.read_u24().unwrap(), 4);
    assert_eq!(frame.read_remaining(), vec![0xDE, 0xAD, 0xBE, 0xEF]);
}

#[test]
fn narrow_writes_truncate_for_field_packing() {
    let mut buffer = OctetBuffer::new();
    buffer.write_u8(0xFEDE).write_u16(0xFE02DE).write_u24(0xFEBB20DE);

    assert_eq!(buffer.to_hex(), "DE02DEBB20DE");

    buffer.reset();
    assert_eq!(buffer.read_u8().unwrap(), 0xDE);
    assert_eq!(buffer.read_u16().unwrap(), 0x02DE);
    assert_eq!(buffer.read_u24().unwrap(), 0xBB20DE);
}

#[test]
fn patching_a_frame_in_place() {
    // Build, then rewind and patch the length field without disturbing
    // the rest of the frame
    let mut frame = OctetBuffer::from_hex("A500DEAD").unwrap();
    frame.set_position(1);
    frame.write_u8(0x02);

    assert_eq!(frame.to_hex(), "A502DEAD");
    assert_eq!(frame.available(), 4);
}

#[test]
fn peek_drives_dispatch_without_consuming() {
    let mut response = OctetBuffer::from_hex("8102").unwrap();

    // Exception responses carry the high bit in the first byte
    let first = response.peek().unwrap();
    assert!(first & 0x80 != 0);
    assert_eq!(response.position(), 0);

    // The dispatcher then consumes normally
    assert_eq!(response.read_u8().unwrap(), 0x81);
    assert_eq!(response.read_u8().unwrap(), 0x02);
}

#[test]
fn write_hex_appends_decoded_bytes() {
    let mut buffer = OctetBuffer::new();
    buffer
        .write_hex("a501")
        .and_then(|buffer| buffer.write_hex("00FF"))
        .expect("valid hex");

    assert_eq!(buffer.to_hex(), "A50100FF");

    let err = buffer.write_hex("not-hex").expect_err("invalid hex");
    assert!(matches!(err, OctetBufferError::InvalidArgument(_)));
    assert_eq!(buffer.to_hex(), "A50100FF");
}

#[test]
fn classify_responses_with_bitflags() {
    // Status byte must have both the ready (0x01) and link-up (0x04) bits
    let required = "05";

    assert!(hex_matches_bitflags("FF", required));
    assert!(hex_matches_bitflags("05", required));
    assert!(hex_matches_bitflags("D5", required));
    assert!(!hex_matches_bitflags("01", required));
    assert!(!hex_matches_bitflags("F0", required));
}

#[test]
fn classify_responses_with_bitpattern() {
    // Match any successful read response regardless of payload
    let pattern = "A5 xx 00 xx";

    assert!(hex_matches_bitpattern("A5 01 00 FF", pattern));
    assert!(hex_matches_bitpattern("a5de00be", pattern));
    assert!(!hex_matches_bitpattern("A5 01 02 FF", pattern));
    assert!(!hex_matches_bitpattern("A5 01 00", pattern));
}

#[test]
fn pattern_match_serialized_frames() {
    let mut frame = OctetBuffer::new();
    frame.write_u8(0xA5).write_u16(0x00DE);

    assert!(hex_matches_bitpattern(&frame.to_hex(), "A500xx"));
    assert!(hex_matches_bitflags(&frame.to_hex(), "A00000"));
}
