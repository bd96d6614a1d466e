//! SIMD-accelerated kernels, selected at runtime by detected CPU capability.
//!
//! Coverage is intentionally narrow: `F32` gets all five distance kinds, and
//! `Bit`/`Hamming` gets a popcount-based override. Every other
//! (kind, encoding) pair is served by [`crate::kernel::scalar`] regardless of
//! detected SIMD level.

pub mod dispatch;

#[cfg(target_arch = "x86_64")]
mod bit_popcount;
#[cfg(target_arch = "aarch64")]
mod neon;
#[cfg(target_arch = "x86_64")]
mod tail_unroll;
#[cfg(target_arch = "x86_64")]
mod x86_avx2;
#[cfg(target_arch = "x86_64")]
mod x86_avx512;

pub use dispatch::{simd_level, SimdLevel};
