//! Scalar I8 kernels.
//!
//! Differences are computed in the `i16` domain (sign-extended, see
//! [`crate::encoding::i8_to_i16`]) so that `-128 - 127` cannot overflow the
//! source `i8` type. Squares widen further into `i32`; the crate's length
//! cap (`n <= 2^20`) keeps `n * max_square` within `i32` range.

use crate::encoding::i8_to_i16;

#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn squared_l2(a: &[i8], b: &[i8]) -> f32 {
    let acc: i32 = a
        .iter()
        .zip(b.iter())
        .map(|(&x, &y)| {
            let d = i32::from(i8_to_i16(x) - i8_to_i16(y));
            d * d
        })
        .sum();
    acc as f32
}

#[must_use]
pub fn l2(a: &[i8], b: &[i8]) -> f32 {
    squared_l2(a, b).sqrt()
}

#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn l1(a: &[i8], b: &[i8]) -> f32 {
    let acc: i32 = a
        .iter()
        .zip(b.iter())
        .map(|(&x, &y)| {
            let x = i32::from(i8_to_i16(x));
            let y = i32::from(i8_to_i16(y));
            // Branchless absolute difference via max/min.
            x.max(y) - x.min(y)
        })
        .sum();
    acc as f32
}

#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn dot(a: &[i8], b: &[i8]) -> f32 {
    let acc: i32 = a
        .iter()
        .zip(b.iter())
        .map(|(&x, &y)| i32::from(i8_to_i16(x)) * i32::from(i8_to_i16(y)))
        .sum();
    -(acc as f32)
}

#[must_use]
pub fn cosine(a: &[i8], b: &[i8]) -> f32 {
    let mut dot = 0_i64;
    let mut norm_a_sq = 0_i64;
    let mut norm_b_sq = 0_i64;

    for (&x, &y) in a.iter().zip(b.iter()) {
        let x = i64::from(i8_to_i16(x));
        let y = i64::from(i8_to_i16(y));
        dot += x * y;
        norm_a_sq += x * x;
        norm_b_sq += y * y;
    }

    if norm_a_sq == 0 || norm_b_sq == 0 {
        return 1.0;
    }

    #[allow(clippy::cast_precision_loss)]
    let ratio = (dot as f64 / ((norm_a_sq as f64).sqrt() * (norm_b_sq as f64).sqrt())) as f32;
    crate::distance::cosine_distance_from_ratio(ratio)
}
