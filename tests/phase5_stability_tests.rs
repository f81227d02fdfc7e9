use std::collections::BTreeMap;

use els::canonical::SafetyLevel;
use els::stability::{compute_stability, interpret_band, StabilityBand};
use els::telemetry::{TelemetryEvent, TelemetryRecorder};

fn state(pairs: &[(&str, f64)]) -> BTreeMap<String, f64> {
    pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

#[test]
fn test_empty_state_is_stable() {
    let result = compute_stability(&BTreeMap::new(), None);
    assert_eq!(result.score, 0.0);
    assert_eq!(result.band, StabilityBand::Stable);
    assert!(result.previous_score.is_none());
}

#[test]
fn test_heuristic_weights() {
    let result = compute_stability(&state(&[("intensity", 1.0)]), None);
    assert!((result.score - (-0.4)).abs() < 1e-9);
    assert_eq!(result.band, StabilityBand::Borderline);

    let result = compute_stability(&state(&[("intensity", 1.0), ("volatility", 1.0), ("fatigue", 1.0)]), None);
    assert!((result.score - (-1.0)).abs() < 1e-9);
    assert_eq!(result.band, StabilityBand::Unstable);

    // Unknown keys are ignored
    let result = compute_stability(&state(&[("mood", 9.0)]), None);
    assert_eq!(result.band, StabilityBand::Stable);
}

#[test]
fn test_score_is_clamped() {
    let result = compute_stability(&state(&[("intensity", 50.0)]), None);
    assert_eq!(result.score, -2.0);

    let result = compute_stability(&state(&[("fatigue", -50.0)]), None);
    assert_eq!(result.score, 2.0);
}

#[test]
fn test_smoothing_with_previous_score() {
    let s = state(&[("intensity", 1.0), ("volatility", 1.0), ("fatigue", 1.0)]);

    // 0.7 * 0.0 + 0.3 * -1.0
    let result = compute_stability(&s, Some(0.0));
    assert!((result.score - (-0.3)).abs() < 1e-9);
    assert_eq!(result.band, StabilityBand::Borderline);
    assert_eq!(result.previous_score, Some(0.0));

    // A stable history damps a single bad reading
    let result = compute_stability(&s, Some(1.0));
    assert!((result.score - 0.4).abs() < 1e-9);
    assert_eq!(result.band, StabilityBand::Stable);
}

#[test]
fn test_band_boundaries() {
    assert_eq!(interpret_band(-1.0), StabilityBand::Unstable);
    assert_eq!(interpret_band(-0.2), StabilityBand::Borderline);
    assert_eq!(interpret_band(-0.19), StabilityBand::Stable);
}

#[test]
fn test_recorder_is_bounded() {
    let mut recorder = TelemetryRecorder::new();
    assert!(recorder.is_empty());

    for _ in 0..10_005 {
        recorder.record(TelemetryEvent::VerdictIssued { level: SafetyLevel::Ok, u: 0.5 });
    }
    assert_eq!(recorder.len(), 10_000);
    assert_eq!(recorder.snapshot().verdict_stats.ok, 10_000);

    recorder.clear();
    assert_eq!(recorder.snapshot().verdict_stats.ok, 0);
}

#[test]
fn test_saturated_recovery_is_counted() {
    let mut recorder = TelemetryRecorder::new();
    recorder.record(TelemetryEvent::RecoveryStep { warmth_before: 0.9, warmth_after: 1.0 });
    recorder.record(TelemetryEvent::RecoveryStep { warmth_before: 1.0, warmth_after: 1.0 });

    let snap = recorder.snapshot();
    assert_eq!(snap.recovery_stats.steps, 2);
    assert_eq!(snap.recovery_stats.saturated_steps, 1);
}
