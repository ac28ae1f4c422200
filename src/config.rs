// config.rs — Compile-time configuration constants.
//
// Shared tuning constants for the block/stream codecs and the CRC-32C
// dispatch. There is no environment-variable or CLI-flag layer here — this
// crate has no process entry point, so every knob below is a compile-time
// constant rather than a runtime-overridable default.

/// Bits of the rolling-hash key used to index the hash table. Both the
/// Block and Stream codecs share this value; changing it changes the wire
/// format (the hash key is embedded directly in far-match Block tokens).
pub const HASH_TABLE_BITS: u32 = 16;

/// Number of entries in a hash table (`2^HASH_TABLE_BITS`).
pub const HASH_TABLE_SIZE: usize = 1 << HASH_TABLE_BITS;

/// Reserved hash-table index value meaning "no far match" in a Block-codec
/// long token, and the reserved distance value meaning "terminator" in a
/// Stream-codec long token.
pub const HASH_TABLE_LEN: usize = HASH_TABLE_SIZE - 1;

/// Whether the CRC-32C dispatch prefers the hardware (SSE4.2) path when the
/// running CPU supports it. Disabling this forces the table-driven fallback
/// even on capable hardware; useful for testing path equivalence.
/// Corresponds to no macro in the original source — the original dispatches
/// unconditionally on `detect_hw()` — but exposing a feature flag lets tests
/// exercise both paths on the same machine.
pub const PREFER_HARDWARE_CRC: bool = !cfg!(feature = "force-table-crc");
