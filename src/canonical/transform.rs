/// Normalize a raw emotion sample into (-1, 1).
/// NaN propagates; ±Infinity saturates to ±1.
pub fn normalize(raw: f64) -> f64 {
    raw.tanh()
}

/// U* transform.
///
/// `tanh(2n)` saturates fast, so extreme negatives are harder to reach;
/// the `0.2n` term keeps the curve strictly increasing. The result is only
/// approximately bounded to [-1, 1] and is not clamped.
pub fn u_transform(n: f64) -> f64 {
    ((2.0 * n).tanh() + 0.2 * n) / 1.2
}
