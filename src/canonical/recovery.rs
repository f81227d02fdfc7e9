/// One recovery step: warmth grows by `dt` and saturates at 1.0.
/// There is no decay; warmth only resets with a new session.
pub fn recover(warmth: f64, dt: f64) -> f64 {
    (warmth + dt).min(1.0)
}
