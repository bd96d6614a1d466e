//! Distance kinds and the small amount of shared semantics (identities,
//! the cosine clamp) that every backend must agree on.

/// A supported distance or similarity measure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DistanceKind {
    /// Euclidean distance: `sqrt(sum((a-b)^2))`.
    L2,
    /// Squared Euclidean distance: `sum((a-b)^2)`.
    SquaredL2,
    /// Manhattan distance: `sum(|a-b|)`.
    L1,
    /// Negated dot product: `-sum(a*b)`, so that "closer" stays "smaller".
    Dot,
    /// `1 - clamp(cosine_similarity(a, b), -1, 1)`.
    Cosine,
    /// Population count of `a XOR b`, defined only for [`crate::encoding::ElementEncoding::Bit`].
    Hamming,
}

impl DistanceKind {
    /// Every distance kind this crate knows how to compute.
    pub const ALL: [DistanceKind; 6] = [
        DistanceKind::L2,
        DistanceKind::SquaredL2,
        DistanceKind::L1,
        DistanceKind::Dot,
        DistanceKind::Cosine,
        DistanceKind::Hamming,
    ];

    /// The well-defined result for `n == 0`.
    #[must_use]
    pub const fn zero_length_identity(self) -> f32 {
        match self {
            DistanceKind::L2
            | DistanceKind::SquaredL2
            | DistanceKind::L1
            | DistanceKind::Dot
            | DistanceKind::Hamming => 0.0,
            DistanceKind::Cosine => 1.0,
        }
    }
}

/// Clamps a cosine-similarity ratio into `[-1, 1]` and returns `1 - ratio`.
///
/// Floating-point rounding can push `dot / (norm_a * norm_b)` slightly
/// outside the mathematically valid range; the clamp must happen before the
/// subtraction. A non-finite ratio (either norm underflowed to zero, or the
/// ratio itself is NaN/infinite) maps to the "maximally dissimilar" value
/// `1.0`.
#[inline]
#[must_use]
pub fn cosine_distance_from_ratio(ratio: f32) -> f32 {
    if ratio.is_finite() {
        1.0 - ratio.clamp(-1.0, 1.0)
    } else {
        1.0
    }
}
