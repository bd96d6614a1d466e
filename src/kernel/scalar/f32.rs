//! Scalar F32 kernels — the reference implementation every SIMD kernel is
//! checked against. Cosine accumulates dot product and both norms in a
//! single pass over the data.

#[must_use]
pub fn squared_l2(a: &[f32], b: &[f32]) -> f32 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum()
}

#[must_use]
pub fn l2(a: &[f32], b: &[f32]) -> f32 {
    squared_l2(a, b).sqrt()
}

#[must_use]
pub fn l1(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b.iter()).map(|(x, y)| (x - y).abs()).sum()
}

#[must_use]
pub fn dot(a: &[f32], b: &[f32]) -> f32 {
    -a.iter().zip(b.iter()).map(|(x, y)| x * y).sum::<f32>()
}

#[must_use]
pub fn cosine(a: &[f32], b: &[f32]) -> f32 {
    let mut dot = 0.0_f32;
    let mut norm_a_sq = 0.0_f32;
    let mut norm_b_sq = 0.0_f32;

    for (x, y) in a.iter().zip(b.iter()) {
        dot += x * y;
        norm_a_sq += x * x;
        norm_b_sq += y * y;
    }

    if norm_a_sq == 0.0 || norm_b_sq == 0.0 {
        return 1.0;
    }

    let ratio = dot / (norm_a_sq.sqrt() * norm_b_sq.sqrt());
    crate::distance::cosine_distance_from_ratio(ratio)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_is_zero() {
        let a = [1.0_f32, 2.0, 3.0, 4.0];
        assert_eq!(squared_l2(&a, &a), 0.0);
        assert_eq!(l2(&a, &a), 0.0);
        assert_eq!(l1(&a, &a), 0.0);
    }

    #[test]
    fn cosine_of_zero_vector_is_one() {
        let a = [0.0_f32; 4];
        let b = [1.0_f32, 2.0, 3.0, 4.0];
        assert_eq!(cosine(&a, &b), 1.0);
    }

    #[test]
    fn dot_is_negated() {
        let a = [1.0_f32, 0.0, 0.0, 0.0];
        let b = [2.0_f32, 0.0, 0.0, 0.0];
        assert_eq!(dot(&a, &b), -2.0);
    }

    #[test]
    fn s1_l2_basis_vectors_against_uniform_query() {
        let q = [0.5_f32, 0.5, 0.5, 0.5];
        for basis in [
            [1.0_f32, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ] {
            assert!((l2(&basis, &q) - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn s3_l1_known_value() {
        let a = [1.0_f32, 2.0, 0.0, -1.0];
        let b = [0.75_f32, -0.25, 1.25, -0.75];
        assert!((l1(&a, &b) - 4.0).abs() < 1e-6);
    }

    #[test]
    fn s4_squared_l2_known_value() {
        let a = [1.0_f32, 2.0, 0.0, -1.0];
        let b = [0.75_f32, -0.25, 1.25, -0.75];
        assert!((squared_l2(&a, &b) - 6.75).abs() < 1e-6);
    }
}
