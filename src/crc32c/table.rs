//! Slice-by-16 table-driven CRC-32C, used wherever the SSE4.2 path isn't
//! available. About 15x slower than the hardware path but portable.
//!
//! Ported from `Blazer.Native/crc32c.cpp`'s `calculate_table`/`append_table`
//! (`examples/original_source/`).

use std::sync::OnceLock;

use super::POLY;

static TABLE: OnceLock<[[u32; 256]; 16]> = OnceLock::new();

fn table() -> &'static [[u32; 256]; 16] {
    TABLE.get_or_init(build_table)
}

fn build_table() -> [[u32; 256]; 16] {
    let mut table = [[0u32; 256]; 16];
    for i in 0..256u32 {
        let mut res = i;
        for t in 0..16 {
            for _ in 0..8 {
                res = if res & 1 == 1 { POLY ^ (res >> 1) } else { res >> 1 };
            }
            table[t][i as usize] = res;
        }
    }
    table
}

pub fn append(crci: u32, input: &[u8]) -> u32 {
    let table = table();
    let mut crc = (crci ^ 0xffff_ffff) as u64;
    let mut next = input;

    while next.len() >= 16 {
        let low = u64::from_le_bytes(next[0..8].try_into().unwrap());
        let high = u64::from_le_bytes(next[8..16].try_into().unwrap());
        crc ^= low;
        crc = table[15][(crc & 0xff) as usize] as u64
            ^ table[14][((crc >> 8) & 0xff) as usize] as u64
            ^ table[13][((crc >> 16) & 0xff) as usize] as u64
            ^ table[12][((crc >> 24) & 0xff) as usize] as u64
            ^ table[11][((crc >> 32) & 0xff) as usize] as u64
            ^ table[10][((crc >> 40) & 0xff) as usize] as u64
            ^ table[9][((crc >> 48) & 0xff) as usize] as u64
            ^ table[8][(crc >> 56) as usize] as u64
            ^ table[7][(high & 0xff) as usize] as u64
            ^ table[6][((high >> 8) & 0xff) as usize] as u64
            ^ table[5][((high >> 16) & 0xff) as usize] as u64
            ^ table[4][((high >> 24) & 0xff) as usize] as u64
            ^ table[3][((high >> 32) & 0xff) as usize] as u64
            ^ table[2][((high >> 40) & 0xff) as usize] as u64
            ^ table[1][((high >> 48) & 0xff) as usize] as u64
            ^ table[0][(high >> 56) as usize] as u64;
        next = &next[16..];
    }

    let mut crc = crc as u32;
    for &b in next {
        crc = table[0][((crc ^ b as u32) & 0xff) as usize] ^ (crc >> 8);
    }

    crc ^ 0xffff_ffff
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_value_matches_reference_vector() {
        assert_eq!(append(0, b"123456789"), 0xE306_9283);
    }

    #[test]
    fn appending_in_pieces_matches_one_shot() {
        let whole = append(0, b"the quick brown fox jumps over the lazy dog");
        let mut crc = 0;
        for chunk in b"the quick brown fox jumps over the lazy dog".chunks(7) {
            crc = append(crc, chunk);
        }
        assert_eq!(crc, whole);
    }

    #[test]
    fn empty_input_is_identity() {
        assert_eq!(append(0x1234_5678, &[]), 0x1234_5678);
    }
}
