//! Block decoder — the security-critical decompression path.
//!
//! No check here may be elided: a decoder faces arbitrary compressed input,
//! not just the output of [`crate::block::compress`], and must never panic
//! or read/write out of bounds. Ported from `Blazer.Native/BlazerBlock.cpp`'s
//! `blazer_block_decompress_block` (`examples/original_source/`); see
//! `spec.md` §4.3 and `DESIGN.md` for the hash-table symmetry this module
//! depends on.

use crate::block::types::{HashTable, TERMINATOR};
use crate::error::BlockDecompressError as Error;
use crate::hash::{hash_key, MIN_SEQ_LEN};
use crate::varint::read_varint;

enum Source {
    /// Far match: resolve through the reconstructed hash table.
    Hash(u16),
    /// Near match: distance directly, `idx_out - distance`.
    Dist(i64),
}

/// Decompresses `input[in_offset..in_offset+in_len]` into
/// `output[out_offset..out_offset+out_cap]`. Returns the number of bytes
/// written, or an error if the output capacity would be exceeded or a
/// hash-resolved back-reference source came out negative.
pub fn decompress(
    input: &[u8],
    in_offset: usize,
    in_len: usize,
    output: &mut [u8],
    out_offset: usize,
    out_cap: usize,
) -> Result<usize, Error> {
    let input = &input[in_offset..in_offset + in_len];
    let output = &mut output[out_offset..out_offset + out_cap];

    let mut hash_arr = HashTable::new();
    let mut mul_el: u32 = 0;
    let mut idx_out: usize = 0;
    let mut pos: usize = 0;

    while pos < input.len() {
        let elem = input[pos];
        pos += 1;

        let seq_cnt_first_raw = (elem & 0xF) as usize;
        let lit_cnt_first_raw = ((elem >> 4) & 7) as usize;

        let mut lit_cnt;
        let mut seq_cnt;
        let lit_cnt_first;
        let seq_cnt_first;
        let source: Option<Source>;

        if elem >= 0x80 {
            let bytes = input.get(pos..pos + 2).ok_or(Error::OutputOverflow)?;
            let raw = u16::from_le_bytes([bytes[0], bytes[1]]);
            pos += 2;
            if raw == TERMINATOR {
                lit_cnt = (elem - 0x80) as usize;
                seq_cnt = 0;
                lit_cnt_first = if lit_cnt == 127 { 7 } else { 0 };
                seq_cnt_first = 0;
                source = None;
            } else {
                lit_cnt = lit_cnt_first_raw;
                seq_cnt = seq_cnt_first_raw + MIN_SEQ_LEN;
                lit_cnt_first = lit_cnt_first_raw;
                seq_cnt_first = seq_cnt_first_raw;
                source = Some(Source::Hash(raw));
            }
        } else {
            let d = *input.get(pos).ok_or(Error::OutputOverflow)?;
            pos += 1;
            lit_cnt = lit_cnt_first_raw;
            seq_cnt = seq_cnt_first_raw + MIN_SEQ_LEN;
            lit_cnt_first = lit_cnt_first_raw;
            seq_cnt_first = seq_cnt_first_raw;
            source = Some(Source::Dist(d as i64 + 1));
        }

        if lit_cnt_first == 7 {
            lit_cnt += read_varint(input, &mut pos).ok_or(Error::OutputOverflow)? as usize;
        }
        if seq_cnt_first == 15 {
            seq_cnt += read_varint(input, &mut pos).ok_or(Error::OutputOverflow)? as usize;
        }

        if idx_out + lit_cnt + seq_cnt > output.len() {
            return Err(Error::OutputOverflow);
        }
        let lit_src = input.get(pos..pos + lit_cnt).ok_or(Error::OutputOverflow)?;
        output[idx_out..idx_out + lit_cnt].copy_from_slice(lit_src);
        for i in 0..lit_cnt {
            mul_el = (mul_el << 8) | lit_src[i] as u32;
            hash_arr[hash_key(mul_el)] = idx_out as i32;
            idx_out += 1;
        }
        pos += lit_cnt;

        if let Some(src_kind) = source {
            let in_rep_idx: i64 = match src_kind {
                Source::Hash(h) => hash_arr[h as usize] as i64 - 3,
                Source::Dist(back_ref) => idx_out as i64 - back_ref,
            };

            if in_rep_idx < 0 {
                if seq_cnt > 0 {
                    return Err(Error::BadSourceIndex(in_rep_idx as i32));
                }
            } else {
                let mut src = in_rep_idx as usize;
                for _ in 0..seq_cnt {
                    let v = output[src];
                    mul_el = (mul_el << 8) | v as u32;
                    hash_arr[hash_key(mul_el)] = idx_out as i32;
                    output[idx_out] = v;
                    idx_out += 1;
                    src += 1;
                }
            }
        }
    }

    Ok(idx_out)
}

/// Convenience wrapper over [`decompress`] for a whole-buffer call starting
/// at offset 0.
pub fn decompress_into(input: &[u8], output: &mut [u8]) -> Result<usize, Error> {
    let cap = output.len();
    decompress(input, 0, input.len(), output, 0, cap)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::compress::{compress_bound, compress_into};

    #[test]
    fn empty_input_decompresses_to_nothing() {
        let mut out = [0u8; 4];
        let n = decompress_into(&[], &mut out).unwrap();
        assert_eq!(n, 0);
    }

    #[test]
    fn output_overflow_is_reported() {
        let mut compressed = [0u8; 16];
        let n = compress_into(b"hello world", &mut compressed);
        let mut out = [0u8; 2];
        let err = decompress_into(&compressed[..n], &mut out).unwrap_err();
        assert_eq!(err, Error::OutputOverflow);
    }

    #[test]
    fn exact_capacity_roundtrips() {
        let input = b"the quick brown fox the quick brown fox";
        let mut compressed = vec![0u8; compress_bound(input.len())];
        let n = compress_into(input, &mut compressed);
        let mut out = vec![0u8; input.len()];
        let written = decompress_into(&compressed[..n], &mut out).unwrap();
        assert_eq!(written, input.len());
        assert_eq!(&out[..], input);
    }
}
