//! C-ABI shims — export the raw entry points callers link against when
//! embedding this codec from a non-Rust host.
//!
//! The `c-abi` Cargo feature documents this intent but doesn't gate
//! compilation of this module; it's always built into the `staticlib` so a
//! non-Rust host can link it regardless of which Cargo features the Rust
//! side enabled.
//!
//! Safe-Rust results are converted to raw negative `i32` sentinels here,
//! mirroring the source's plain-integer error convention: a non-negative
//! return is a byte count, a negative return is an error code.

use std::os::raw::{c_int, c_uchar};
use std::slice;

use crate::block;
use crate::crc32c;
use crate::error::{BlockDecompressError, StreamDecompressError};
use crate::stream;

// ─────────────────────────────────────────────────────────────────────────────
// blazer_block_compress  (BlazerBlock.cpp)
//
// int blazer_block_compress(const uint8_t *in, int inOffset, int inLength,
//                            uint8_t *out, int outOffset);
//
// Returns the number of bytes written to `out`.
// ─────────────────────────────────────────────────────────────────────────────
#[no_mangle]
pub unsafe extern "C" fn blazer_block_compress(
    input: *const c_uchar,
    in_offset: c_int,
    in_length: c_int,
    output: *mut c_uchar,
    out_offset: c_int,
    out_capacity: c_int,
) -> c_int {
    if in_offset < 0 || in_length < 0 || out_offset < 0 || out_capacity < 0 || input.is_null() || output.is_null() {
        return -1;
    }
    let in_slice = slice::from_raw_parts(input, (in_offset + in_length) as usize);
    let out_slice = slice::from_raw_parts_mut(output, (out_offset + out_capacity) as usize);
    let n = block::compress::compress(in_slice, in_offset as usize, in_length as usize, out_slice, out_offset as usize);
    n as c_int
}

// ─────────────────────────────────────────────────────────────────────────────
// blazer_block_decompress  (BlazerBlock.cpp)
//
// int blazer_block_decompress(const uint8_t *in, int inOffset, int inLength,
//                              uint8_t *out, int outOffset, int outCapacity);
//
// Returns the number of bytes written, or a negative error sentinel.
// ─────────────────────────────────────────────────────────────────────────────
#[no_mangle]
pub unsafe extern "C" fn blazer_block_decompress(
    input: *const c_uchar,
    in_offset: c_int,
    in_length: c_int,
    output: *mut c_uchar,
    out_offset: c_int,
    out_capacity: c_int,
) -> c_int {
    if in_offset < 0 || in_length < 0 || out_offset < 0 || out_capacity < 0 || input.is_null() || output.is_null() {
        return -1;
    }
    let in_slice = slice::from_raw_parts(input, (in_offset + in_length) as usize);
    let out_slice = slice::from_raw_parts_mut(output, (out_offset + out_capacity) as usize);
    match block::decompress::decompress(
        in_slice,
        in_offset as usize,
        in_length as usize,
        out_slice,
        out_offset as usize,
        out_capacity as usize,
    ) {
        Ok(n) => n as c_int,
        Err(BlockDecompressError::OutputOverflow) => -1,
        Err(BlockDecompressError::BadSourceIndex(idx)) => idx,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// blazer_stream_compress  (BlazerStream.cpp)
//
// int blazer_stream_compress(const uint8_t *in, int inOffset, int inLength,
//                             int64_t inShift, uint8_t *out, int outOffset,
//                             int32_t *hashTable);
//
// `hashTable` must point to `HASH_TABLE_SIZE` (65536) `int32_t` slots, owned
// and persisted by the caller across a sequence of calls covering one
// logical stream.
// ─────────────────────────────────────────────────────────────────────────────
#[no_mangle]
pub unsafe extern "C" fn blazer_stream_compress(
    input: *const c_uchar,
    in_offset: c_int,
    in_length: c_int,
    in_shift: i64,
    output: *mut c_uchar,
    out_offset: c_int,
    out_capacity: c_int,
    hash_table: *mut i32,
) -> c_int {
    if in_offset < 0 || in_length < 0 || out_offset < 0 || out_capacity < 0 || input.is_null() || output.is_null() || hash_table.is_null()
    {
        return -1;
    }
    let in_slice = slice::from_raw_parts(input, (in_offset + in_length) as usize);
    let out_slice = slice::from_raw_parts_mut(output, (out_offset + out_capacity) as usize);
    let table_slice = slice::from_raw_parts_mut(hash_table, crate::config::HASH_TABLE_SIZE);
    let mut table = stream::types::HashTable::from_raw_parts(table_slice);
    let n = stream::compress::compress(
        in_slice,
        in_offset as usize,
        in_length as usize,
        in_shift,
        out_slice,
        out_offset as usize,
        &mut table,
    );
    table.write_back(table_slice);
    n as c_int
}

// ─────────────────────────────────────────────────────────────────────────────
// blazer_stream_decompress  (BlazerStream.cpp)
//
// int blazer_stream_decompress(const uint8_t *in, int inOffset, int inLength,
//                               uint8_t *out, int outOffset, int outCapacity);
//
// Returns the number of bytes written, or a negative error sentinel.
// ─────────────────────────────────────────────────────────────────────────────
#[no_mangle]
pub unsafe extern "C" fn blazer_stream_decompress(
    input: *const c_uchar,
    in_offset: c_int,
    in_length: c_int,
    output: *mut c_uchar,
    out_offset: c_int,
    out_capacity: c_int,
) -> c_int {
    if in_offset < 0 || in_length < 0 || out_offset < 0 || out_capacity < 0 || input.is_null() || output.is_null() {
        return -1;
    }
    let in_slice = slice::from_raw_parts(input, (in_offset + in_length) as usize);
    let out_slice = slice::from_raw_parts_mut(output, (out_offset + out_capacity) as usize);
    match stream::decompress::decompress(
        in_slice,
        in_offset as usize,
        in_length as usize,
        out_slice,
        out_offset as usize,
        out_capacity as usize,
    ) {
        Ok(n) => n as c_int,
        Err(StreamDecompressError::OutputOverflow) => -1,
        Err(StreamDecompressError::InputUnderrun) => -2,
        Err(StreamDecompressError::BackReferenceUnderflow) => -3,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// crc32c_append  (crc32c.cpp)
//
// uint32_t crc32c_append(uint32_t crc, const uint8_t *input, size_t length);
// ─────────────────────────────────────────────────────────────────────────────
#[no_mangle]
pub unsafe extern "C" fn crc32c_append(crc: u32, input: *const c_uchar, length: usize) -> u32 {
    if input.is_null() || length == 0 {
        return crc;
    }
    let slice = slice::from_raw_parts(input, length);
    crc32c::append(crc, slice)
}

// ─────────────────────────────────────────────────────────────────────────────
// Unit tests
// ─────────────────────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::os::raw::c_uchar;

    const SAMPLE: &[u8] = b"Hello, Blazer ABI! Hello, Blazer ABI! Hello, Blazer ABI! This is a test.";

    unsafe fn block_compress(src: &[u8]) -> Vec<u8> {
        let bound = block::compress::compress_bound(src.len());
        let mut dst = vec![0u8; bound];
        let n = blazer_block_compress(
            src.as_ptr() as *const c_uchar,
            0,
            src.len() as c_int,
            dst.as_mut_ptr() as *mut c_uchar,
            0,
            bound as c_int,
        );
        assert!(n >= 0, "blazer_block_compress returned {n}");
        dst.truncate(n as usize);
        dst
    }

    #[test]
    fn block_roundtrip_through_abi() {
        unsafe {
            let compressed = block_compress(SAMPLE);
            let mut dst = vec![0u8; SAMPLE.len()];
            let n = blazer_block_decompress(
                compressed.as_ptr() as *const c_uchar,
                0,
                compressed.len() as c_int,
                dst.as_mut_ptr() as *mut c_uchar,
                0,
                dst.len() as c_int,
            );
            assert_eq!(n as usize, SAMPLE.len());
            assert_eq!(&dst[..], SAMPLE);
        }
    }

    #[test]
    fn block_decompress_reports_output_overflow() {
        unsafe {
            let compressed = block_compress(SAMPLE);
            let mut dst = vec![0u8; 2];
            let n = blazer_block_decompress(
                compressed.as_ptr() as *const c_uchar,
                0,
                compressed.len() as c_int,
                dst.as_mut_ptr() as *mut c_uchar,
                0,
                dst.len() as c_int,
            );
            assert_eq!(n, -1);
        }
    }

    #[test]
    fn null_pointers_are_rejected() {
        unsafe {
            assert_eq!(blazer_block_compress(std::ptr::null(), 0, 0, std::ptr::null_mut(), 0, 0), -1);
            assert_eq!(blazer_block_decompress(std::ptr::null(), 0, 0, std::ptr::null_mut(), 0, 0), -1);
            assert_eq!(blazer_stream_decompress(std::ptr::null(), 0, 0, std::ptr::null_mut(), 0, 0), -1);
        }
    }

    #[test]
    fn stream_roundtrip_through_abi() {
        unsafe {
            let mut table = vec![0i32; crate::config::HASH_TABLE_SIZE];
            let mut out = vec![0u8; stream::compress::compress_bound(SAMPLE.len())];
            let n = blazer_stream_compress(
                SAMPLE.as_ptr() as *const c_uchar,
                0,
                SAMPLE.len() as c_int,
                0,
                out.as_mut_ptr() as *mut c_uchar,
                0,
                out.len() as c_int,
                table.as_mut_ptr(),
            );
            assert!(n >= 0);
            let mut dst = vec![0u8; SAMPLE.len()];
            let written = blazer_stream_decompress(
                out.as_ptr() as *const c_uchar,
                0,
                n as c_int,
                dst.as_mut_ptr() as *mut c_uchar,
                0,
                dst.len() as c_int,
            );
            assert_eq!(written as usize, SAMPLE.len());
            assert_eq!(&dst[..], SAMPLE);
        }
    }

    #[test]
    fn crc32c_append_matches_reference_vector() {
        unsafe {
            let data = b"123456789";
            let crc = crc32c_append(0, data.as_ptr(), data.len());
            assert_eq!(crc, 0xE306_9283);
        }
    }
}
