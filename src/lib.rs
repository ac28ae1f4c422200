// Byte-oriented LZ77-family compressor/decompressor, plus a CRC-32C
// checksum primitive — a Rust port of the Blazer.Native codec.

pub mod abi;
pub mod block;
pub mod config;
pub mod crc32c;
pub mod error;
pub mod hash;
pub mod stream;
pub mod varint;

// ─────────────────────────────────────────────────────────────────────────────
// Top-level convenience re-exports for the most common API entry points.
// ─────────────────────────────────────────────────────────────────────────────

/// One-shot Block compression.
pub use block::compress::compress as block_compress;
/// One-shot Block decompression.
pub use block::decompress::decompress as block_decompress;
/// Error type for Block decompression.
pub use error::BlockDecompressError;

/// Stream compression, persisting match history in a caller-owned
/// [`stream::HashTable`] across a sequence of calls.
pub use stream::compress::compress as stream_compress;
/// Stream decompression.
pub use stream::decompress::decompress as stream_decompress;
/// Error type for Stream decompression.
pub use error::StreamDecompressError;

/// CRC-32C (Castagnoli) checksum, extending `crc` over `input`.
pub use crc32c::append as crc32c_append;
