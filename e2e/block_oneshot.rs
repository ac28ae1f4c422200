//! End-to-end coverage of the Block codec's one-shot API.

use blazer_codec::block::compress::{compress_bound, compress_into};
use blazer_codec::block::decompress::decompress_into;

fn roundtrip(input: &[u8]) {
    let mut compressed = vec![0u8; compress_bound(input.len())];
    let n = compress_into(input, &mut compressed);
    let mut out = vec![0u8; input.len()];
    let written = decompress_into(&compressed[..n], &mut out).expect("decompress failed");
    assert_eq!(written, input.len());
    assert_eq!(&out[..], input);
}

#[test]
fn empty_buffer_roundtrips() {
    roundtrip(b"");
}

#[test]
fn short_literal_run_roundtrips() {
    roundtrip(b"hello");
}

#[test]
fn highly_repetitive_text_roundtrips() {
    let text = "the quick brown fox jumps over the lazy dog. ".repeat(200);
    roundtrip(text.as_bytes());
}

#[test]
fn incompressible_random_bytes_roundtrip() {
    let mut data = vec![0u8; 8192];
    let mut x: u32 = 0xC0FF_EE11;
    for b in data.iter_mut() {
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        *b = (x & 0xFF) as u8;
    }
    roundtrip(&data);
}

#[test]
fn compressed_output_is_smaller_for_repetitive_input() {
    let text = "ABCDEFGH".repeat(4096);
    let mut compressed = vec![0u8; compress_bound(text.len())];
    let n = compress_into(text.as_bytes(), &mut compressed);
    assert!(n < text.len() / 2, "expected strong compression, got {n} bytes from {} input", text.len());
}
