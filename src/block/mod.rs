//! Block codec: self-contained LZ77-family compression and decompression.
//!
//! Each call is independent — the hash table is zero-initialized per
//! invocation and discarded afterward. Far back-references (distance > 256)
//! are encoded as the *hash-table index* that produced the match rather than
//! as a literal distance, so [`decompress`] reconstructs the encoder's hash
//! table bit-for-bit while decoding (see `DESIGN.md`, "hash symmetry").

pub mod compress;
pub mod decompress;
pub mod types;

pub use compress::compress;
pub use decompress::decompress;
pub use types::HashTable;
