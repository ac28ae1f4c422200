//! Error types for the decompression paths.
//!
//! Compressors cannot fail on valid inputs within the caller-promised output
//! capacity — the capacity contract is the caller's responsibility — so only
//! the decoders have an error type. These are converted to the raw negative
//! `i32` sentinels of the C-ABI layer in [`crate::abi`].

use std::fmt;

/// Errors from [`crate::block::decompress`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockDecompressError {
    /// Decoding would write past the caller-supplied output capacity.
    OutputOverflow,
    /// A hash-resolved back-reference source index came out negative.
    /// Carries that (negative) index, mirroring the source's convention of
    /// returning the bad index itself as the error code.
    BadSourceIndex(i32),
}

impl fmt::Display for BlockDecompressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutputOverflow => write!(f, "block decompress: output overflow"),
            Self::BadSourceIndex(idx) => {
                write!(f, "block decompress: back-reference resolved to negative index {idx}")
            }
        }
    }
}

impl std::error::Error for BlockDecompressError {}

/// Errors from [`crate::stream::decompress`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamDecompressError {
    /// Decoding would write past the caller-supplied output capacity.
    OutputOverflow,
    /// A literal run would read past the end of the input buffer.
    InputUnderrun,
    /// The computed match source lies before the start of the output
    /// region.
    BackReferenceUnderflow,
}

impl fmt::Display for StreamDecompressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutputOverflow => write!(f, "stream decompress: output overflow"),
            Self::InputUnderrun => write!(f, "stream decompress: input underrun"),
            Self::BackReferenceUnderflow => write!(f, "stream decompress: back-reference underflow"),
        }
    }
}

impl std::error::Error for StreamDecompressError {}
