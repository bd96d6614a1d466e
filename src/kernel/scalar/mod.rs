//! Scalar reference kernels — the fallback available for every supported
//! `(DistanceKind, ElementEncoding)` pair, and the correctness oracle the
//! SIMD backend is checked against.

// The per-encoding modules are named with a `_kernel` suffix so they don't
// shadow the primitive types of the same name (`f32`, `u8`, `i8`) that the
// `kernel_entry!` invocations below also need to name as element types.
#[path = "bf16.rs"]
pub mod bf16_kernel;
pub mod bit;
#[path = "f16.rs"]
pub mod f16_kernel;
#[path = "f32.rs"]
pub mod f32_kernel;
mod half_common;
#[path = "i8.rs"]
pub mod i8_kernel;
#[path = "u8.rs"]
pub mod u8_kernel;

use super::{kernel_entry, kernel_entry_bit, KernelFn};
use crate::distance::DistanceKind;
use crate::encoding::ElementEncoding;

kernel_entry!(f32_l2, f32, f32_kernel::l2);
kernel_entry!(f32_squared_l2, f32, f32_kernel::squared_l2);
kernel_entry!(f32_l1, f32, f32_kernel::l1);
kernel_entry!(f32_dot, f32, f32_kernel::dot);
kernel_entry!(f32_cosine, f32, f32_kernel::cosine);

kernel_entry!(f16_l2, u16, f16_kernel::l2);
kernel_entry!(f16_squared_l2, u16, f16_kernel::squared_l2);
kernel_entry!(f16_l1, u16, f16_kernel::l1);
kernel_entry!(f16_dot, u16, f16_kernel::dot);
kernel_entry!(f16_cosine, u16, f16_kernel::cosine);

kernel_entry!(bf16_l2, u16, bf16_kernel::l2);
kernel_entry!(bf16_squared_l2, u16, bf16_kernel::squared_l2);
kernel_entry!(bf16_l1, u16, bf16_kernel::l1);
kernel_entry!(bf16_dot, u16, bf16_kernel::dot);
kernel_entry!(bf16_cosine, u16, bf16_kernel::cosine);

kernel_entry!(u8_l2, u8, u8_kernel::l2);
kernel_entry!(u8_squared_l2, u8, u8_kernel::squared_l2);
kernel_entry!(u8_l1, u8, u8_kernel::l1);
kernel_entry!(u8_dot, u8, u8_kernel::dot);
kernel_entry!(u8_cosine, u8, u8_kernel::cosine);

kernel_entry!(i8_l2, i8, i8_kernel::l2);
kernel_entry!(i8_squared_l2, i8, i8_kernel::squared_l2);
kernel_entry!(i8_l1, i8, i8_kernel::l1);
kernel_entry!(i8_dot, i8, i8_kernel::dot);
kernel_entry!(i8_cosine, i8, i8_kernel::cosine);

kernel_entry_bit!(bit_hamming, bit::hamming);

/// Returns the scalar kernel for `(kind, enc)`, or `None` if the pair is
/// not supported (e.g. `Hamming` for any non-`Bit` encoding, or anything
/// other than `Hamming` for `Bit`).
#[must_use]
pub fn lookup(kind: DistanceKind, enc: ElementEncoding) -> Option<KernelFn> {
    use DistanceKind::{Cosine, Dot, Hamming, L1, L2};
    use ElementEncoding::{Bf16, Bit, F16, F32, I8, U8};

    Some(match (kind, enc) {
        (L2, F32) => f32_l2,
        (DistanceKind::SquaredL2, F32) => f32_squared_l2,
        (L1, F32) => f32_l1,
        (Dot, F32) => f32_dot,
        (Cosine, F32) => f32_cosine,

        (L2, F16) => f16_l2,
        (DistanceKind::SquaredL2, F16) => f16_squared_l2,
        (L1, F16) => f16_l1,
        (Dot, F16) => f16_dot,
        (Cosine, F16) => f16_cosine,

        (L2, Bf16) => bf16_l2,
        (DistanceKind::SquaredL2, Bf16) => bf16_squared_l2,
        (L1, Bf16) => bf16_l1,
        (Dot, Bf16) => bf16_dot,
        (Cosine, Bf16) => bf16_cosine,

        (L2, U8) => u8_l2,
        (DistanceKind::SquaredL2, U8) => u8_squared_l2,
        (L1, U8) => u8_l1,
        (Dot, U8) => u8_dot,
        (Cosine, U8) => u8_cosine,

        (L2, I8) => i8_l2,
        (DistanceKind::SquaredL2, I8) => i8_squared_l2,
        (L1, I8) => i8_l1,
        (Dot, I8) => i8_dot,
        (Cosine, I8) => i8_cosine,

        (Hamming, Bit) => bit_hamming,

        _ => return None,
    })
}
