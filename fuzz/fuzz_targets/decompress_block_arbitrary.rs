#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Feed arbitrary bytes through the block decompressor.
    // Err results are expected and fine; what we verify is no panics or UB.

    {
        let mut dst = vec![0u8; 0];
        let _ = blazer_codec::block::decompress::decompress_into(data, &mut dst);
    }

    {
        let mut dst = vec![0u8; 4096];
        let _ = blazer_codec::block::decompress::decompress_into(data, &mut dst);
    }

    if !data.is_empty() {
        let mut dst = vec![0u8; data.len()];
        let _ = blazer_codec::block::decompress::decompress_into(data, &mut dst);
    }

    {
        let large = (data.len().saturating_mul(255)).min(1 << 20);
        let mut dst = vec![0u8; large];
        let _ = blazer_codec::block::decompress::decompress_into(data, &mut dst);
    }
});
