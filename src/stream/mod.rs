//! Stream codec: LZ77-family compression across a sequence of blocks
//! sharing one caller-owned hash table.
//!
//! Unlike the Block codec, hash-table entries are absolute stream positions
//! (`position + in_shift`) and far matches are encoded as a literal
//! `distance - 257` rather than a hash-table index — so [`decompress`] needs
//! no hash table at all. See `spec.md` §4.4–§4.5.

pub mod compress;
pub mod decompress;
pub mod types;

pub use compress::compress;
pub use decompress::decompress;
pub use types::HashTable;
