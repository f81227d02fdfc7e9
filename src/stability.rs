use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Coarse bands for interpreting a stability score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StabilityBand {
    Stable,
    Borderline,
    Unstable,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StabilityResult {
    /// Roughly [-2.0, 2.0]. >= 0.0 is more stable, <= -1.0 is critical.
    pub score: f64,
    pub band: StabilityBand,
    pub previous_score: Option<f64>,
}

const SCORE_LIMIT: f64 = 2.0;

/// Placeholder heuristic, not a real controller.
/// Higher intensity, volatility or fatigue push the score negative.
fn heuristic_score(state: &BTreeMap<String, f64>) -> f64 {
    let get = |key: &str| state.get(key).copied().unwrap_or(0.0);
    let raw = -(0.4 * get("intensity") + 0.3 * get("volatility") + 0.3 * get("fatigue"));
    raw.clamp(-SCORE_LIMIT, SCORE_LIMIT)
}

pub fn interpret_band(score: f64) -> StabilityBand {
    if score <= -1.0 {
        StabilityBand::Unstable
    } else if score <= -0.2 {
        StabilityBand::Borderline
    } else {
        StabilityBand::Stable
    }
}

/// Parallel stability signal. Not wired into the canonical pipeline.
/// `previous_score` enables simple exponential smoothing.
pub fn compute_stability(state: &BTreeMap<String, f64>, previous_score: Option<f64>) -> StabilityResult {
    let mut score = heuristic_score(state);
    if let Some(prev) = previous_score {
        score = 0.7 * prev + 0.3 * score;
    }

    StabilityResult {
        score,
        band: interpret_band(score),
        previous_score,
    }
}
