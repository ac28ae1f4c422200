//! End-to-end coverage of the Stream codec across multiple calls sharing one
//! persistent hash table and logical buffer.

use blazer_codec::stream::compress::{compress, compress_bound, compress_into};
use blazer_codec::stream::decompress::decompress_into;
use blazer_codec::stream::types::HashTable;

#[test]
fn two_identical_blocks_produce_a_far_match_for_the_second() {
    let block = b"hello world, hello world, hello world!";
    let mut combined = Vec::new();
    combined.extend_from_slice(block);
    combined.extend_from_slice(block);

    let mut table = HashTable::new();
    let mut out1 = vec![0u8; compress_bound(block.len())];
    let n1 = compress(&combined, 0, block.len(), 0, &mut out1, 0, &mut table);

    let mut out2 = vec![0u8; compress_bound(block.len())];
    let n2 = compress(&combined, block.len(), block.len(), 0, &mut out2, 0, &mut table);

    let mut tokens = Vec::new();
    tokens.extend_from_slice(&out1[..n1]);
    tokens.extend_from_slice(&out2[..n2]);

    let mut decoded = vec![0u8; combined.len()];
    let written = decompress_into(&tokens, &mut decoded).unwrap();
    assert_eq!(written, combined.len());
    assert_eq!(&decoded[..], &combined[..]);
}

#[test]
fn many_small_blocks_over_one_growing_buffer_all_roundtrip() {
    let pieces: Vec<&[u8]> = vec![
        b"alpha beta gamma ",
        b"delta epsilon zeta ",
        b"alpha beta gamma ", // repeats an earlier piece, exercising a far match
        b"eta theta iota kappa ",
    ];

    let mut buffer = Vec::new();
    for p in &pieces {
        buffer.extend_from_slice(p);
    }

    let mut table = HashTable::new();
    let mut tokens = Vec::new();
    let mut offset = 0;
    for p in &pieces {
        let mut out = vec![0u8; compress_bound(p.len())];
        let n = compress(&buffer, offset, p.len(), 0, &mut out, 0, &mut table);
        tokens.extend_from_slice(&out[..n]);
        offset += p.len();
    }

    let mut decoded = vec![0u8; buffer.len()];
    let written = decompress_into(&tokens, &mut decoded).unwrap();
    assert_eq!(written, buffer.len());
    assert_eq!(&decoded[..], &buffer[..]);
}

#[test]
fn single_call_whole_buffer_roundtrips() {
    let data = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. ".repeat(50);
    let mut table = HashTable::new();
    let mut out = vec![0u8; compress_bound(data.len())];
    let n = compress_into(data.as_bytes(), &mut out, &mut table);
    let mut decoded = vec![0u8; data.len()];
    let written = decompress_into(&out[..n], &mut decoded).unwrap();
    assert_eq!(written, data.len());
    assert_eq!(&decoded[..], data.as_bytes());
}
