//! Runtime SIMD level detection and the SIMD-backed half of kernel lookup.
//!
//! [`simd_level`] is detected once per process and cached in a
//! [`std::sync::OnceLock`]; every subsequent call is a single atomic load.

use crate::distance::DistanceKind;
use crate::encoding::ElementEncoding;
use crate::kernel::KernelFn;

/// SIMD capability level detected at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimdLevel {
    /// AVX-512F available (`x86_64` only).
    Avx512,
    /// AVX2 + FMA available (`x86_64` only).
    Avx2,
    /// NEON available (aarch64, always true).
    Neon,
    /// No usable SIMD backend; every kernel falls back to scalar.
    Scalar,
}

static SIMD_LEVEL: std::sync::OnceLock<SimdLevel> = std::sync::OnceLock::new();

fn detect_simd_level() -> SimdLevel {
    #[cfg(target_arch = "x86_64")]
    {
        if is_x86_feature_detected!("avx512f") {
            return SimdLevel::Avx512;
        }
        if is_x86_feature_detected!("avx2") && is_x86_feature_detected!("fma") {
            return SimdLevel::Avx2;
        }
    }

    #[cfg(target_arch = "aarch64")]
    {
        return SimdLevel::Neon;
    }

    #[allow(unreachable_code)]
    SimdLevel::Scalar
}

/// Returns the cached SIMD capability level for the current CPU, detecting
/// it on first call.
#[inline]
#[must_use]
pub fn simd_level() -> SimdLevel {
    *SIMD_LEVEL.get_or_init(detect_simd_level)
}

#[cfg(target_arch = "x86_64")]
mod entries {
    use super::super::{bit_popcount, x86_avx2, x86_avx512};
    use crate::kernel::{kernel_entry, kernel_entry_bit};

    /// # Safety
    /// See [`x86_avx2::squared_l2`].
    #[target_feature(enable = "avx2", enable = "fma")]
    unsafe fn avx2_l2(a: &[f32], b: &[f32]) -> f32 {
        x86_avx2::squared_l2(a, b).sqrt()
    }

    /// # Safety
    /// See [`x86_avx512::squared_l2`].
    #[target_feature(enable = "avx512f")]
    unsafe fn avx512_l2(a: &[f32], b: &[f32]) -> f32 {
        x86_avx512::squared_l2(a, b).sqrt()
    }

    kernel_entry!(avx2_f32_l2, f32, avx2_l2);
    kernel_entry!(avx2_f32_squared_l2, f32, x86_avx2::squared_l2);
    kernel_entry!(avx2_f32_l1, f32, x86_avx2::l1);
    kernel_entry!(avx2_f32_dot, f32, x86_avx2::dot);
    kernel_entry!(avx2_f32_cosine, f32, x86_avx2::cosine);
    kernel_entry_bit!(avx2_bit_hamming, bit_popcount::hamming_avx2);

    kernel_entry!(avx512_f32_l2, f32, avx512_l2);
    kernel_entry!(avx512_f32_squared_l2, f32, x86_avx512::squared_l2);
    kernel_entry!(avx512_f32_l1, f32, x86_avx512::l1);
    kernel_entry!(avx512_f32_dot, f32, x86_avx512::dot);
    kernel_entry!(avx512_f32_cosine, f32, x86_avx512::cosine);
    kernel_entry_bit!(avx512_bit_hamming, bit_popcount::hamming_avx512);
}

#[cfg(target_arch = "aarch64")]
mod entries {
    use super::super::neon;
    use crate::kernel::kernel_entry;

    #[inline]
    fn neon_l2(a: &[f32], b: &[f32]) -> f32 {
        neon::squared_l2(a, b).sqrt()
    }

    kernel_entry!(neon_f32_l2, f32, neon_l2);
    kernel_entry!(neon_f32_squared_l2, f32, neon::squared_l2);
    kernel_entry!(neon_f32_l1, f32, neon::l1);
    kernel_entry!(neon_f32_dot, f32, neon::dot);
    kernel_entry!(neon_f32_cosine, f32, neon::cosine);
}

/// Looks up a SIMD-backed kernel for `(kind, enc)` at the currently detected
/// [`SimdLevel`]. Returns `None` when no SIMD override exists for this pair
/// or this architecture, in which case the caller should fall back to
/// [`crate::kernel::scalar::lookup`].
#[must_use]
pub fn lookup(kind: DistanceKind, enc: ElementEncoding) -> Option<KernelFn> {
    #[cfg(target_arch = "x86_64")]
    {
        match (simd_level(), kind, enc) {
            (SimdLevel::Avx512, DistanceKind::L2, ElementEncoding::F32) => {
                Some(entries::avx512_f32_l2)
            }
            (SimdLevel::Avx512, DistanceKind::SquaredL2, ElementEncoding::F32) => {
                Some(entries::avx512_f32_squared_l2)
            }
            (SimdLevel::Avx512, DistanceKind::L1, ElementEncoding::F32) => {
                Some(entries::avx512_f32_l1)
            }
            (SimdLevel::Avx512, DistanceKind::Dot, ElementEncoding::F32) => {
                Some(entries::avx512_f32_dot)
            }
            (SimdLevel::Avx512, DistanceKind::Cosine, ElementEncoding::F32) => {
                Some(entries::avx512_f32_cosine)
            }
            (SimdLevel::Avx512, DistanceKind::Hamming, ElementEncoding::Bit) => {
                Some(entries::avx512_bit_hamming)
            }
            (SimdLevel::Avx2, DistanceKind::L2, ElementEncoding::F32) => {
                Some(entries::avx2_f32_l2)
            }
            (SimdLevel::Avx2, DistanceKind::SquaredL2, ElementEncoding::F32) => {
                Some(entries::avx2_f32_squared_l2)
            }
            (SimdLevel::Avx2, DistanceKind::L1, ElementEncoding::F32) => {
                Some(entries::avx2_f32_l1)
            }
            (SimdLevel::Avx2, DistanceKind::Dot, ElementEncoding::F32) => {
                Some(entries::avx2_f32_dot)
            }
            (SimdLevel::Avx2, DistanceKind::Cosine, ElementEncoding::F32) => {
                Some(entries::avx2_f32_cosine)
            }
            (SimdLevel::Avx2, DistanceKind::Hamming, ElementEncoding::Bit) => {
                Some(entries::avx2_bit_hamming)
            }
            _ => None,
        }
    }

    #[cfg(target_arch = "aarch64")]
    {
        match (simd_level(), kind, enc) {
            (SimdLevel::Neon, DistanceKind::L2, ElementEncoding::F32) => Some(entries::neon_f32_l2),
            (SimdLevel::Neon, DistanceKind::SquaredL2, ElementEncoding::F32) => {
                Some(entries::neon_f32_squared_l2)
            }
            (SimdLevel::Neon, DistanceKind::L1, ElementEncoding::F32) => Some(entries::neon_f32_l1),
            (SimdLevel::Neon, DistanceKind::Dot, ElementEncoding::F32) => {
                Some(entries::neon_f32_dot)
            }
            (SimdLevel::Neon, DistanceKind::Cosine, ElementEncoding::F32) => {
                Some(entries::neon_f32_cosine)
            }
            _ => None,
        }
    }

    #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
    {
        let _ = (kind, enc);
        None
    }
}
