#![no_main]
use libfuzzer_sys::fuzz_target;

use blazer_codec::stream::types::HashTable;

// Splits arbitrary input into chunks at every 4th byte and compresses each
// chunk through one persistent hash table, the way a real caller would feed
// a growing stream. Verifies the whole thing still decodes back exactly.
fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let mut table = HashTable::new();
    let mut compressed = Vec::new();
    let mut start = 0;
    while start < data.len() {
        let end = (start + 4).min(data.len());
        let chunk = &data[start..end];
        let bound = blazer_codec::stream::compress::compress_bound(chunk.len());
        let mut dst = vec![0u8; bound];
        let n = blazer_codec::stream::compress::compress_into(chunk, &mut dst, &mut table);
        compressed.extend_from_slice(&dst[..n]);
        start = end;
    }

    let mut recovered = vec![0u8; data.len()];
    let written = blazer_codec::stream::decompress::decompress_into(&compressed, &mut recovered)
        .expect("a buffer this codec just produced must decode cleanly");

    assert_eq!(written, data.len(), "stream round-trip length mismatch");
    assert_eq!(recovered, data, "stream round-trip produced different bytes");
});
