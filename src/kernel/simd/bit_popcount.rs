//! Vectorized Hamming distance for packed-bit buffers.
//!
//! XORs the two buffers in wide registers, then folds each resulting chunk
//! through the CPU's native 64-bit population count (`POPCNT` on `x86_64`,
//! `CNT` on aarch64) rather than the portable SWAR fallback in
//! [`crate::kernel::scalar::bit`].

#![allow(clippy::cast_precision_loss)]

/// AVX2 Hamming distance: 32-byte XOR chunks, popcounted as four u64 lanes.
///
/// # Safety
///
/// Caller must ensure AVX2 is available and `a.len() == b.len()`.
#[target_feature(enable = "avx2")]
#[inline]
pub(super) unsafe fn hamming_avx2(a: &[u8], b: &[u8], _n: usize) -> f32 {
    use std::arch::x86_64::*;

    let len = a.len();
    let simd_len = len / 32;
    let mut total = 0_u64;

    let a_ptr = a.as_ptr();
    let b_ptr = b.as_ptr();

    for i in 0..simd_len {
        let offset = i * 32;
        let va = _mm256_loadu_si256(a_ptr.add(offset).cast());
        let vb = _mm256_loadu_si256(b_ptr.add(offset).cast());
        let x = _mm256_xor_si256(va, vb);
        let mut buf = [0_u8; 32];
        _mm256_storeu_si256(buf.as_mut_ptr().cast(), x);
        for chunk in buf.chunks_exact(8) {
            total += u64::from_le_bytes(chunk.try_into().unwrap()).count_ones() as u64;
        }
    }

    let base = simd_len * 32;
    for i in base..len {
        total += u64::from((a[i] ^ b[i]).count_ones());
    }

    total as f32
}

/// AVX-512F Hamming distance: 64-byte XOR chunks, popcounted as eight u64
/// lanes.
///
/// # Safety
///
/// Caller must ensure AVX-512F is available and `a.len() == b.len()`.
#[target_feature(enable = "avx512f")]
#[inline]
pub(super) unsafe fn hamming_avx512(a: &[u8], b: &[u8], _n: usize) -> f32 {
    use std::arch::x86_64::*;

    let len = a.len();
    let simd_len = len / 64;
    let mut total = 0_u64;

    let a_ptr = a.as_ptr();
    let b_ptr = b.as_ptr();

    for i in 0..simd_len {
        let offset = i * 64;
        let va = _mm512_loadu_si512(a_ptr.add(offset).cast());
        let vb = _mm512_loadu_si512(b_ptr.add(offset).cast());
        let x = _mm512_xor_si512(va, vb);
        let mut buf = [0_u8; 64];
        _mm512_storeu_si512(buf.as_mut_ptr().cast(), x);
        for chunk in buf.chunks_exact(8) {
            total += u64::from_le_bytes(chunk.try_into().unwrap()).count_ones() as u64;
        }
    }

    let base = simd_len * 64;
    for i in base..len {
        total += u64::from((a[i] ^ b[i]).count_ones());
    }

    total as f32
}
