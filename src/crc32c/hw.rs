//! SSE4.2-accelerated CRC-32C, used when the CPU advertises the instruction.
//!
//! Runs three independent `crc32` instruction streams over `LONG_SHIFT`- and
//! then `SHORT_SHIFT`-byte spans to hide the instruction's three-cycle
//! latency behind its one-cycle throughput, combining the streams with
//! precomputed "zeros" shift tables. Ported from `Blazer.Native/crc32c.cpp`'s
//! `calculate_hw`/`append_hw` (`examples/original_source/`), itself adapted
//! from Mark Adler's public-domain `crc32c.c`.
//!
//! # Safety
//!
//! Every function here requires SSE4.2. Callers must confirm
//! `std::arch::is_x86_64_feature_detected!("sse4.2")` before calling — see
//! [`super::dispatch`], the only caller.

#![allow(unsafe_code)]

use std::sync::OnceLock;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::{_mm_crc32_u64, _mm_crc32_u8};

use super::{LONG_SHIFT, POLY, SHORT_SHIFT};

static SHIFT_TABLES: OnceLock<ShiftTables> = OnceLock::new();

struct ShiftTables {
    long: [[u32; 256]; 4],
    short: [[u32; 256]; 4],
}

fn shift_tables() -> &'static ShiftTables {
    SHIFT_TABLES.get_or_init(build_shift_tables)
}

fn build_shift_tables() -> ShiftTables {
    let mut short = [[0u32; 256]; 4];
    let mut long = [[0u32; 256]; 4];

    for i in 0..256u32 {
        let mut res = i;
        for _ in 0..8 * (SHORT_SHIFT - 4) {
            res = if res & 1 == 1 { POLY ^ (res >> 1) } else { res >> 1 };
        }
        for t in 0..4 {
            for _ in 0..8 {
                res = if res & 1 == 1 { POLY ^ (res >> 1) } else { res >> 1 };
            }
            short[3 - t][i as usize] = res;
        }
        for _ in 0..8 * (LONG_SHIFT - 4 - SHORT_SHIFT) {
            res = if res & 1 == 1 { POLY ^ (res >> 1) } else { res >> 1 };
        }
        for t in 0..4 {
            for _ in 0..8 {
                res = if res & 1 == 1 { POLY ^ (res >> 1) } else { res >> 1 };
            }
            long[3 - t][i as usize] = res;
        }
    }

    ShiftTables { long, short }
}

#[inline]
fn shift_crc(shift_table: &[[u32; 256]; 4], crc: u32) -> u32 {
    shift_table[0][(crc & 0xff) as usize]
        ^ shift_table[1][((crc >> 8) & 0xff) as usize]
        ^ shift_table[2][((crc >> 16) & 0xff) as usize]
        ^ shift_table[3][(crc >> 24) as usize]
}

/// # Safety
/// The caller must have confirmed SSE4.2 support.
#[target_feature(enable = "sse4.2")]
pub unsafe fn append(crc: u32, buf: &[u8]) -> u32 {
    let tables = shift_tables();
    let mut next = buf;
    let mut crc0 = (crc ^ 0xffff_ffff) as u64;

    while !next.is_empty() && (next.as_ptr() as usize) & 7 != 0 {
        crc0 = _mm_crc32_u8(crc0 as u32, next[0]) as u64;
        next = &next[1..];
    }

    while next.len() >= 3 * LONG_SHIFT {
        let (block, rest) = next.split_at(3 * LONG_SHIFT);
        let mut crc1: u64 = 0;
        let mut crc2: u64 = 0;
        let mut i = 0;
        while i < LONG_SHIFT {
            crc0 = _mm_crc32_u64(crc0, read_u64(block, i));
            crc1 = _mm_crc32_u64(crc1, read_u64(block, LONG_SHIFT + i));
            crc2 = _mm_crc32_u64(crc2, read_u64(block, 2 * LONG_SHIFT + i));
            i += 8;
        }
        crc0 = (shift_crc(&tables.long, crc0 as u32) as u64) ^ crc1;
        crc0 = (shift_crc(&tables.long, crc0 as u32) as u64) ^ crc2;
        next = rest;
    }

    while next.len() >= 3 * SHORT_SHIFT {
        let (block, rest) = next.split_at(3 * SHORT_SHIFT);
        let mut crc1: u64 = 0;
        let mut crc2: u64 = 0;
        let mut i = 0;
        while i < SHORT_SHIFT {
            crc0 = _mm_crc32_u64(crc0, read_u64(block, i));
            crc1 = _mm_crc32_u64(crc1, read_u64(block, SHORT_SHIFT + i));
            crc2 = _mm_crc32_u64(crc2, read_u64(block, 2 * SHORT_SHIFT + i));
            i += 8;
        }
        crc0 = (shift_crc(&tables.short, crc0 as u32) as u64) ^ crc1;
        crc0 = (shift_crc(&tables.short, crc0 as u32) as u64) ^ crc2;
        next = rest;
    }

    while next.len() >= 8 {
        crc0 = _mm_crc32_u64(crc0, read_u64(next, 0));
        next = &next[8..];
    }

    for &b in next {
        crc0 = _mm_crc32_u8(crc0 as u32, b) as u64;
    }

    (crc0 as u32) ^ 0xffff_ffff
}

#[inline]
fn read_u64(buf: &[u8], at: usize) -> u64 {
    u64::from_ne_bytes(buf[at..at + 8].try_into().unwrap())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shift_tables_build_without_panicking() {
        let t = shift_tables();
        assert_ne!(t.long[0][1], 0);
        assert_ne!(t.short[0][1], 0);
    }

    #[test]
    fn check_value_matches_reference_vector() {
        if !std::arch::is_x86_64_feature_detected!("sse4.2") {
            return;
        }
        let got = unsafe { append(0, b"123456789") };
        assert_eq!(got, 0xE306_9283);
    }

    #[test]
    fn matches_table_path_across_all_three_shift_regimes() {
        if !std::arch::is_x86_64_feature_detected!("sse4.2") {
            return;
        }
        for len in [0, 1, 7, 8, 64, 3 * SHORT_SHIFT + 5, 3 * LONG_SHIFT + 17] {
            let mut data = vec![0u8; len];
            let mut x: u32 = 0x9E37_79B9;
            for b in data.iter_mut() {
                x ^= x << 13;
                x ^= x >> 17;
                x ^= x << 5;
                *b = (x & 0xFF) as u8;
            }
            let hw = unsafe { append(0, &data) };
            let table = super::table::append(0, &data);
            assert_eq!(hw, table, "mismatch at len {len}");
        }
    }
}
