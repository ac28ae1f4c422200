//! Stream decoder.
//!
//! Needs no hash table: a far-match token already carries `distance - 257`
//! directly, so every match resolves via `idx_out - distance` regardless of
//! token kind. Ported from `Blazer.Native/BlazerStream.cpp`'s
//! `blazer_stream_decompress_block` (`examples/original_source/`); see
//! `spec.md` §4.5.

use crate::error::StreamDecompressError as Error;
use crate::hash::MIN_SEQ_LEN;
use crate::stream::types::TERMINATOR;
use crate::varint::read_varint;

/// Decompresses `input[in_offset..in_offset+in_len]` into
/// `output[out_offset..out_offset+out_cap]`. Returns the number of bytes
/// written.
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
        let back_ref: Option<i64>;

        if elem >= 0x80 {
            let bytes = input.get(pos..pos + 2).ok_or(Error::InputUnderrun)?;
            let raw = u16::from_le_bytes([bytes[0], bytes[1]]);
            pos += 2;
            if raw == TERMINATOR {
                lit_cnt = (elem - 0x80) as usize;
                seq_cnt = 0;
                lit_cnt_first = if lit_cnt == 127 { 7 } else { 0 };
                seq_cnt_first = 0;
                back_ref = None;
            } else {
                lit_cnt = lit_cnt_first_raw;
                seq_cnt = seq_cnt_first_raw + MIN_SEQ_LEN;
                lit_cnt_first = lit_cnt_first_raw;
                seq_cnt_first = seq_cnt_first_raw;
                back_ref = Some(raw as i64 + 257);
            }
        } else {
            let d = *input.get(pos).ok_or(Error::InputUnderrun)?;
            pos += 1;
            lit_cnt = lit_cnt_first_raw;
            seq_cnt = seq_cnt_first_raw + MIN_SEQ_LEN;
            lit_cnt_first = lit_cnt_first_raw;
            seq_cnt_first = seq_cnt_first_raw;
            back_ref = Some(d as i64 + 1);
        }

        if lit_cnt_first == 7 {
            lit_cnt += read_varint(input, &mut pos).ok_or(Error::InputUnderrun)? as usize;
        }
        if seq_cnt_first == 15 {
            seq_cnt += read_varint(input, &mut pos).ok_or(Error::InputUnderrun)? as usize;
        }

        if idx_out + lit_cnt + seq_cnt > output.len() {
            return Err(Error::OutputOverflow);
        }
        let lit_src = input.get(pos..pos + lit_cnt).ok_or(Error::InputUnderrun)?;
        output[idx_out..idx_out + lit_cnt].copy_from_slice(lit_src);
        idx_out += lit_cnt;
        pos += lit_cnt;

        if let Some(dist) = back_ref {
            let src_idx = idx_out as i64 - dist;
            if src_idx < 0 {
                if seq_cnt > 0 {
                    return Err(Error::BackReferenceUnderflow);
                }
            } else if dist as usize >= seq_cnt.max(1) && (src_idx as usize + seq_cnt) <= idx_out {
                // Non-overlapping: the whole run already sits in `output`,
                // safe to copy in one shot.
                let src = src_idx as usize;
                output.copy_within(src..src + seq_cnt, idx_out);
                idx_out += seq_cnt;
            } else {
                let mut src = src_idx as usize;
                for _ in 0..seq_cnt {
                    output[idx_out] = output[src];
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
    use crate::stream::compress::{compress_bound, compress_into};
    use crate::stream::types::HashTable;

    #[test]
    fn empty_input_decompresses_to_nothing() {
        let mut out = [0u8; 4];
        let n = decompress_into(&[], &mut out).unwrap();
        assert_eq!(n, 0);
    }

    #[test]
    fn output_overflow_is_reported() {
        let mut table = HashTable::new();
        let mut compressed = [0u8; 32];
        let n = compress_into(b"hello world", &mut compressed, &mut table);
        let mut out = [0u8; 2];
        let err = decompress_into(&compressed[..n], &mut out).unwrap_err();
        assert_eq!(err, Error::OutputOverflow);
    }

    #[test]
    fn overlapping_match_copies_byte_by_byte() {
        let mut table = HashTable::new();
        let input = b"aaaaaaaaaaaaaaaaaaaa"; // one-byte period, distance 1
        let mut compressed = vec![0u8; compress_bound(input.len())];
        let n = compress_into(input, &mut compressed, &mut table);
        let mut out = vec![0u8; input.len()];
        let written = decompress_into(&compressed[..n], &mut out).unwrap();
        assert_eq!(written, input.len());
        assert_eq!(&out[..], &input[..]);
    }

    #[test]
    fn truncated_input_is_an_error() {
        let mut out = [0u8; 8];
        let err = decompress_into(&[0x81], &mut out).unwrap_err();
        assert_eq!(err, Error::InputUnderrun);
    }
}
