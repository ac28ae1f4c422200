//! CRC-32C (Castagnoli) checksum, dispatching to a hardware SSE4.2 path when
//! available and falling back to a table-driven software path otherwise.
//!
//! Both paths are required to produce bit-identical digests — see
//! `hw::tests::matches_table_path_across_all_three_shift_regimes`. Ported
//! from `Blazer.Native/crc32c.cpp` (`examples/original_source/`); see
//! `spec.md` §4.6.

mod hw;
mod table;

use std::sync::OnceLock;

use crate::config::PREFER_HARDWARE_CRC;

const POLY: u32 = 0x82f6_3b78;
const LONG_SHIFT: usize = 8192;
const SHORT_SHIFT: usize = 256;

#[derive(Clone, Copy)]
enum Backend {
    Hardware,
    Table,
}

static BACKEND: OnceLock<Backend> = OnceLock::new();

fn backend() -> Backend {
    *BACKEND.get_or_init(|| {
        if PREFER_HARDWARE_CRC && has_sse42() {
            Backend::Hardware
        } else {
            Backend::Table
        }
    })
}

#[cfg(target_arch = "x86_64")]
fn has_sse42() -> bool {
    std::arch::is_x86_64_feature_detected!("sse4.2")
}

#[cfg(not(target_arch = "x86_64"))]
fn has_sse42() -> bool {
    false
}

/// Extends `crc` over `input`. Pass `0` as the initial value for a fresh
/// checksum, or a previous call's result to accumulate across buffers.
pub fn append(crc: u32, input: &[u8]) -> u32 {
    match backend() {
        // SAFETY: `backend()` only returns `Hardware` after confirming
        // SSE4.2 support via `has_sse42`.
        Backend::Hardware => unsafe { hw::append(crc, input) },
        Backend::Table => table::append(crc, input),
    }
}

#[cfg(test)]
pub(crate) fn backend_is_hardware_for_tests() -> bool {
    matches!(backend(), Backend::Hardware)
}
