/// Round the exact binary value to 3 decimal places.
///
/// `1.0005` is stored just below the midpoint, so it rounds down to `1.0`.
/// Scaling by 1000 first would lose that and round up.
pub fn round3(value: f64) -> f64 {
    format!("{value:.3}").parse().unwrap_or(value)
}

/// Median of `values`: the middle element for odd lengths, the mean of the
/// two middle elements for even lengths. `None` when empty.
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Some(sorted[mid])
    } else {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    }
}

/// `0.25` -> `"25.000%"`
pub fn percent(ratio: f64) -> String {
    format!("{:.3}%", ratio * 100.0)
}

/// `1.5` -> `"1.500"`
pub fn fixed3(value: f64) -> String {
    format!("{value:.3}")
}
