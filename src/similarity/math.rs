use super::error::SimilarityError;
use crate::constants::{MAX_PERCENTAGE, MIN_PERCENTAGE};

/// `dot(a, b) / (|a| * |b|)`, accumulated in f64.
///
/// Zero-norm, empty or mismatched inputs are errors, never scored as `0`.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f64, SimilarityError> {
    if a.len() != b.len() {
        return Err(SimilarityError::DimensionMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    if a.is_empty() {
        return Err(SimilarityError::EmptyVector);
    }

    let (dot, norm_a_sq, norm_b_sq) =
        a.iter()
            .zip(b.iter())
            .fold((0.0f64, 0.0f64, 0.0f64), |(dot, na, nb), (&av, &bv)| {
                let av = f64::from(av);
                let bv = f64::from(bv);
                (dot + av * bv, na + av * av, nb + bv * bv)
            });

    let norm_a = norm_a_sq.sqrt();
    let norm_b = norm_b_sq.sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return Err(SimilarityError::ZeroNorm);
    }

    let similarity = dot / (norm_a * norm_b);
    if !similarity.is_finite() {
        return Err(SimilarityError::NonFinite);
    }

    Ok(similarity)
}

/// Maps a cosine similarity to a percentage: scale by 100, round to two
/// decimals, clamp to `[0, 100]`.
///
/// Negative similarities are clamped to `0`. Never returns `-0.0`.
pub fn to_percentage(similarity: f64) -> f64 {
    let rounded = (similarity * 100.0 * 100.0).round() / 100.0;

    if rounded.is_nan() || rounded <= MIN_PERCENTAGE {
        MIN_PERCENTAGE
    } else if rounded >= MAX_PERCENTAGE {
        MAX_PERCENTAGE
    } else {
        rounded
    }
}
