//! End-to-end coverage of the decoders' error paths.

use blazer_codec::block::compress::{compress_bound as block_bound, compress_into as block_compress};
use blazer_codec::block::decompress::decompress_into as block_decompress;
use blazer_codec::error::{BlockDecompressError, StreamDecompressError};
use blazer_codec::stream::compress::{compress_bound as stream_bound, compress_into as stream_compress};
use blazer_codec::stream::decompress::decompress_into as stream_decompress;
use blazer_codec::stream::types::HashTable;

#[test]
fn block_decoder_rejects_output_overflow() {
    let input = b"some moderately long input that compresses a bit, compresses a bit";
    let mut compressed = vec![0u8; block_bound(input.len())];
    let n = block_compress(input, &mut compressed);

    let mut out = vec![0u8; input.len() - 1];
    let err = block_decompress(&compressed[..n], &mut out).unwrap_err();
    assert_eq!(err, BlockDecompressError::OutputOverflow);
}

#[test]
fn block_decoder_accepts_exact_capacity() {
    let input = b"exact capacity output buffer test, exact capacity output buffer test";
    let mut compressed = vec![0u8; block_bound(input.len())];
    let n = block_compress(input, &mut compressed);

    let mut out = vec![0u8; input.len()];
    let written = block_decompress(&compressed[..n], &mut out).unwrap();
    assert_eq!(written, input.len());
}

#[test]
fn stream_decoder_rejects_output_overflow() {
    let input = b"stream decoder output overflow test, stream decoder output overflow test";
    let mut table = HashTable::new();
    let mut compressed = vec![0u8; stream_bound(input.len())];
    let n = stream_compress(input, &mut compressed, &mut table);

    let mut out = vec![0u8; input.len() - 1];
    let err = stream_decompress(&compressed[..n], &mut out).unwrap_err();
    assert_eq!(err, StreamDecompressError::OutputOverflow);
}

#[test]
fn stream_decoder_rejects_truncated_tokens() {
    let mut out = vec![0u8; 16];
    // A long-token header byte with no following distance/hash-key bytes.
    let err = stream_decompress(&[0x80], &mut out).unwrap_err();
    assert_eq!(err, StreamDecompressError::InputUnderrun);
}

#[test]
fn garbage_input_never_panics_the_block_decoder() {
    let mut out = vec![0u8; 256];
    let mut x: u32 = 0x1337_BEEF;
    for _ in 0..200 {
        let mut garbage = vec![0u8; 64];
        for b in garbage.iter_mut() {
            x ^= x << 13;
            x ^= x >> 17;
            x ^= x << 5;
            *b = (x & 0xFF) as u8;
        }
        let _ = block_decompress(&garbage, &mut out);
    }
}

#[test]
fn garbage_input_never_panics_the_stream_decoder() {
    let mut out = vec![0u8; 256];
    let mut x: u32 = 0x5EED_F00D;
    for _ in 0..200 {
        let mut garbage = vec![0u8; 64];
        for b in garbage.iter_mut() {
            x ^= x << 13;
            x ^= x >> 17;
            x ^= x << 5;
            *b = (x & 0xFF) as u8;
        }
        let _ = stream_decompress(&garbage, &mut out);
    }
}
