/// Computes `Σ(fraction * weight) / Σ(weight) * 100` over `(fraction, weight)` pairs.
/// Returns `None` when the weights sum to zero.
pub fn weighted_percentage<I>(items: I) -> Option<f64>
where
    I: IntoIterator<Item = (f64, f64)>,
{
    let mut weighted_total = 0.0;
    let mut weight_sum = 0.0;

    for (fraction, weight) in items {
        weighted_total += fraction * weight;
        weight_sum += weight;
    }

    if weight_sum == 0.0 {
        None
    } else {
        Some(weighted_total / weight_sum * 100.0)
    }
}

/// Computes the arithmetic mean of a slice of values. Returns 0.0 for empty input.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Rounds to two decimal places.
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
