#![no_main]
use libfuzzer_sys::fuzz_target;

// Checks that accumulating arbitrary input in one shot agrees with
// accumulating it split into two pieces. The hardware and table backends are
// unit-tested against each other directly inside the crate
// (`crc32c::hw::tests::matches_table_path_across_all_three_shift_regimes`);
// this target instead fuzzes the public, dispatched entry point for
// crash-freedom and split-accumulation consistency.
fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }
    let (split_byte, rest) = data.split_at(1);
    let whole = blazer_codec::crc32c_append(0, rest);

    if rest.is_empty() {
        return;
    }
    let split_at = (split_byte[0] as usize) % rest.len();
    let (head, tail) = rest.split_at(split_at);
    let split = blazer_codec::crc32c_append(blazer_codec::crc32c_append(0, head), tail);

    assert_eq!(whole, split, "crc32c must be independent of how input is chunked");
});
