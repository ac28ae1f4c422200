//! End-to-end coverage of the raw C-ABI entry points, exercised the way a
//! non-Rust host would call them: raw pointers and lengths, no safe
//! wrappers.

use std::os::raw::c_int;

use blazer_codec::abi::{blazer_block_compress, blazer_block_decompress, blazer_stream_compress, blazer_stream_decompress, crc32c_append};
use blazer_codec::block::compress::compress_bound as block_bound;
use blazer_codec::config::HASH_TABLE_SIZE;
use blazer_codec::stream::compress::compress_bound as stream_bound;

#[test]
fn block_roundtrip_via_raw_pointers() {
    let input = b"raw pointer block roundtrip test, raw pointer block roundtrip test";
    let bound = block_bound(input.len());
    let mut compressed = vec![0u8; bound];

    unsafe {
        let n = blazer_block_compress(
            input.as_ptr(),
            0,
            input.len() as c_int,
            compressed.as_mut_ptr(),
            0,
            bound as c_int,
        );
        assert!(n >= 0);

        let mut out = vec![0u8; input.len()];
        let written = blazer_block_decompress(
            compressed.as_ptr(),
            0,
            n,
            out.as_mut_ptr(),
            0,
            out.len() as c_int,
        );
        assert_eq!(written as usize, input.len());
        assert_eq!(&out[..], &input[..]);
    }
}

#[test]
fn stream_roundtrip_via_raw_pointers_with_caller_owned_hash_table() {
    let input = b"raw pointer stream roundtrip test, raw pointer stream roundtrip test";
    let bound = stream_bound(input.len());
    let mut compressed = vec![0u8; bound];
    let mut table = vec![0i32; HASH_TABLE_SIZE];

    unsafe {
        let n = blazer_stream_compress(
            input.as_ptr(),
            0,
            input.len() as c_int,
            0,
            compressed.as_mut_ptr(),
            0,
            bound as c_int,
            table.as_mut_ptr(),
        );
        assert!(n >= 0);

        let mut out = vec![0u8; input.len()];
        let written = blazer_stream_decompress(
            compressed.as_ptr(),
            0,
            n,
            out.as_mut_ptr(),
            0,
            out.len() as c_int,
        );
        assert_eq!(written as usize, input.len());
        assert_eq!(&out[..], &input[..]);
    }
}

#[test]
fn crc32c_via_raw_pointer_matches_check_value() {
    let data = b"123456789";
    unsafe {
        assert_eq!(crc32c_append(0, data.as_ptr(), data.len()), 0xE306_9283);
    }
}

#[test]
fn null_input_pointer_is_rejected_not_dereferenced() {
    unsafe {
        assert_eq!(blazer_block_compress(std::ptr::null(), 0, 0, std::ptr::null_mut(), 0, 0), -1);
    }
}
