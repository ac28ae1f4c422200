//! Stream encoder.
//!
//! Ported from `Blazer.Native/BlazerStream.cpp`'s `blazer_stream_compress_block`
//! (`examples/original_source/`). `input` is the full accumulated buffer for
//! the logical stream (history plus the new bytes to compress); `in_offset`
//! is the absolute index within it where the new block begins, and
//! `in_shift` is the stream-absolute position corresponding to `input[0]`.
//! This is what makes cross-block matches safe to read: a match candidate
//! found via the persistent hash table may resolve to a position before
//! `in_offset`, and that position is still present in `input` as long as the
//! caller never discards history it expects future blocks to reference.
//!
//! See `spec.md` §4.4 and `DESIGN.md` for the one safety-motivated departure
//! from the source's match-acceptance predicate.

use crate::hash::{hash_key, read_be32_at, seed, MIN_SEQ_LEN};
use crate::stream::types::{emit_long_token, emit_short_token, emit_terminator, HashTable, MAX_BACK_REF};

/// Compresses `input[in_offset..in_offset+in_len]` into `output[out_offset..]`,
/// updating `hash_table` in place so later calls covering later parts of the
/// same logical stream can find matches into this block. Returns the number
/// of bytes written.
pub fn compress(
    input: &[u8],
    in_offset: usize,
    in_len: usize,
    in_shift: i64,
    output: &mut [u8],
    out_offset: usize,
    hash_table: &mut HashTable,
) -> usize {
    let in_end = in_offset + in_len;
    let mut out_idx = out_offset;

    let mut mul_el: u32 = 0;
    let mut idx_in = in_offset;
    let mut last_processed = in_offset;

    if in_end - idx_in > 3 {
        mul_el = seed(input[idx_in], input[idx_in + 1], input[idx_in + 2]);
        idx_in += 3;
    } else {
        idx_in = in_end;
    }

    let iter_max = in_end as isize - 1;

    while (idx_in as isize) < iter_max {
        let elem0 = input[idx_in];
        mul_el = (mul_el << 8) | elem0 as u32;
        let h_key = hash_key(mul_el);
        let hash_val = hash_table[h_key] as i64 - in_shift;
        hash_table[h_key] = (idx_in as i64 + in_shift) as i32;

        let back_ref = idx_in as i64 - hash_val;

        // `hash_val >= 3` subsumes the source's `hashVal == 0` rejection: any
        // genuinely stored entry is always >= 3 (the rolling hash cannot seed
        // before position 3), so this only ever rejects unset/degenerate
        // slots, never a legitimate match — but it additionally keeps the
        // `hash_val - 3` read below in bounds, which a bare `!= 0` check does
        // not guarantee once `in_shift` is nonzero.
        let matched = hash_val >= 3
            && back_ref < MAX_BACK_REF
            && (back_ref < 257 || input[hash_val as usize + 1] == input[idx_in + 1])
            && mul_el == read_be32_at(input, hash_val as usize);

        if !matched {
            idx_in += 1;
            continue;
        }

        let cnt_lit = idx_in - last_processed - 3;
        let mut h_val_pos = hash_val as usize + 1;
        idx_in += 1;

        while idx_in < in_end {
            let e = input[idx_in];
            mul_el = (mul_el << 8) | e as u32;
            hash_table[hash_key(mul_el)] = (idx_in as i64 + in_shift) as i32;
            if input[h_val_pos] == e {
                h_val_pos += 1;
                idx_in += 1;
            } else {
                break;
            }
        }

        let seq_len = idx_in - cnt_lit - last_processed - MIN_SEQ_LEN;
        let mut dist = back_ref;

        out_idx += if dist >= 257 {
            dist -= 257;
            emit_long_token(&mut output[out_idx..], cnt_lit, seq_len, dist as u16)
        } else {
            dist -= 1;
            emit_short_token(&mut output[out_idx..], cnt_lit, seq_len, dist as u8)
        };

        output[out_idx..out_idx + cnt_lit].copy_from_slice(&input[last_processed..last_processed + cnt_lit]);
        out_idx += cnt_lit;

        last_processed = idx_in;
        idx_in += 3;

        if idx_in < in_end {
            mul_el = (mul_el << 8) | input[idx_in - 2] as u32;
            hash_table[hash_key(mul_el)] = (idx_in as i64 - 2 + in_shift) as i32;
            mul_el = (mul_el << 8) | input[idx_in - 1] as u32;
            hash_table[hash_key(mul_el)] = (idx_in as i64 - 1 + in_shift) as i32;
        }
    }

    let cnt_lit = in_end - last_processed;
    if cnt_lit > 0 {
        out_idx += emit_terminator(&mut output[out_idx..], cnt_lit);
        output[out_idx..out_idx + cnt_lit].copy_from_slice(&input[in_end - cnt_lit..in_end]);
        out_idx += cnt_lit;
    }

    out_idx - out_offset
}

/// Convenience wrapper for compressing a whole buffer as a single block
/// starting a fresh logical stream (`in_shift = 0`).
pub fn compress_into(input: &[u8], output: &mut [u8], hash_table: &mut HashTable) -> usize {
    compress(input, 0, input.len(), 0, output, 0, hash_table)
}

/// Upper bound on the compressed size of a block of `in_len` bytes.
pub fn compress_bound(in_len: usize) -> usize {
    in_len + 3 + 5
}
