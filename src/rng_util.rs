/// Generate a random `f64` in the range `[low, high)`.
#[inline]
pub(crate) fn f64_range(rng: &mut fastrand::Rng, low: f64, high: f64) -> f64 {
    low + rng.f64() * (high - low)
}

/// Draw an index from `weights` with probability proportional to each weight.
///
/// Weights must be non-negative with a positive sum. Returns `None` for an
/// empty slice.
pub(crate) fn weighted_index(rng: &mut fastrand::Rng, weights: &[f64]) -> Option<usize> {
    let total: f64 = weights.iter().sum();
    if weights.is_empty() || total <= 0.0 {
        return None;
    }
    let target = rng.f64() * total;
    let mut cumulative = 0.0;
    for (i, w) in weights.iter().enumerate() {
        cumulative += w;
        if target < cumulative {
            return Some(i);
        }
    }
    // Rounding can leave `target` just above the final cumulative sum.
    Some(weights.len() - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weighted_index_empty() {
        let mut rng = fastrand::Rng::with_seed(1);
        assert_eq!(weighted_index(&mut rng, &[]), None);
    }

    #[test]
    fn weighted_index_skips_zero_weights() {
        let mut rng = fastrand::Rng::with_seed(7);
        for _ in 0..200 {
            assert_eq!(weighted_index(&mut rng, &[0.0, 1.0, 0.0]), Some(1));
        }
    }

    #[test]
    fn weighted_index_follows_weights() {
        let mut rng = fastrand::Rng::with_seed(42);
        let mut counts = [0usize; 2];
        for _ in 0..10_000 {
            counts[weighted_index(&mut rng, &[1.0, 3.0]).unwrap()] += 1;
        }
        // Expected split is 2500 / 7500.
        assert!((2200..2800).contains(&counts[0]), "counts: {counts:?}");
    }
}
