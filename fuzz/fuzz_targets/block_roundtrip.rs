#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let bound = blazer_codec::block::compress::compress_bound(data.len());
    let mut compressed = vec![0u8; bound];
    let n = blazer_codec::block::compress::compress_into(data, &mut compressed);

    let mut recovered = vec![0u8; data.len()];
    let written = blazer_codec::block::decompress::decompress_into(&compressed[..n], &mut recovered)
        .expect("a buffer this codec just produced must decode cleanly");

    assert_eq!(
        written,
        data.len(),
        "block round-trip mismatch: compressed {} bytes back to {} bytes (expected {})",
        n,
        written,
        data.len()
    );
    assert_eq!(recovered, data, "block round-trip produced different bytes");
});
