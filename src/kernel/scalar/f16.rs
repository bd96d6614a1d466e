//! Scalar F16 kernels: widen to f32 via [`crate::encoding::f16_to_f32`], then
//! accumulate in f64 under the half-precision special-value discipline in
//! [`super::half_common`].

use super::half_common;
use crate::encoding::f16_to_f32;

#[must_use]
pub fn squared_l2(a: &[u16], b: &[u16]) -> f32 {
    half_common::squared_l2(a, b, f16_to_f32)
}

#[must_use]
pub fn l2(a: &[u16], b: &[u16]) -> f32 {
    half_common::l2(a, b, f16_to_f32)
}

#[must_use]
pub fn l1(a: &[u16], b: &[u16]) -> f32 {
    half_common::l1(a, b, f16_to_f32)
}

#[must_use]
pub fn dot(a: &[u16], b: &[u16]) -> f32 {
    half_common::dot(a, b, f16_to_f32)
}

#[must_use]
pub fn cosine(a: &[u16], b: &[u16]) -> f32 {
    half_common::cosine(a, b, f16_to_f32)
}
