use chrono::{TimeZone, Utc};
use els::canonical::CanonicalSession;
use els::xc::{auto_safety, build_envelope, build_envelope_at, to_xc_state, ContextMetadata, HeaderLevel, SafetyHeader};
use els::{CanonicalSnapshot, DepthBand};

fn snapshot(u_star: f64) -> CanonicalSnapshot {
    CanonicalSnapshot::new(0.3, 7.0, 100.0, u_star)
}

#[test]
fn test_depth_band_boundaries() {
    assert_eq!(DepthBand::from_u_star(-1.0), DepthBand::Abyss);
    assert_eq!(DepthBand::from_u_star(-0.8), DepthBand::Abyss);
    assert_eq!(DepthBand::from_u_star(-0.79), DepthBand::DeepRain);
    assert_eq!(DepthBand::from_u_star(-0.3), DepthBand::DeepRain);
    assert_eq!(DepthBand::from_u_star(-0.29), DepthBand::Mid);
    assert_eq!(DepthBand::from_u_star(0.3), DepthBand::Mid);
    assert_eq!(DepthBand::from_u_star(0.31), DepthBand::Surface);
    assert_eq!(DepthBand::from_u_star(5.0), DepthBand::Surface);
}

#[test]
fn test_depth_bands_are_ordered() {
    // Sweep: bands only ever move upward as u grows.
    let rank = |b: DepthBand| match b {
        DepthBand::Abyss => 0,
        DepthBand::DeepRain => 1,
        DepthBand::Mid => 2,
        DepthBand::Surface => 3,
    };
    let mut prev = 0;
    for i in -200..=200 {
        let r = rank(DepthBand::from_u_star(i as f64 / 100.0));
        assert!(r >= prev);
        prev = r;
    }
    assert_eq!(prev, 3);
}

#[test]
fn test_auto_safety_includes_boundary() {
    let header = auto_safety(&snapshot(-0.95));
    assert_eq!(header.safety_level, HeaderLevel::Caution);
    assert_eq!(header.reason, "extreme_depth");

    let header = auto_safety(&snapshot(-0.94));
    assert_eq!(header, SafetyHeader::default());
    assert_eq!(header.reason, "normal");
    assert_eq!(header.version, "1.0b");
}

#[test]
fn test_envelope_at_extreme_depth() {
    let env = build_envelope(snapshot(-0.95), ContextMetadata::default(), None);

    assert_eq!(env.depth_band(), DepthBand::Abyss);
    assert_eq!(env.safety().safety_level, HeaderLevel::Caution);
    assert_eq!(env.safety().reason, "extreme_depth");
    assert_eq!(env.version(), "1.0b");
    assert_eq!(env.timestamp().len(), "2026-01-01T00:00:00Z".len());
    assert!(env.timestamp().ends_with('Z'));
}

#[test]
fn test_explicit_safety_wins() {
    let explicit = SafetyHeader::new(HeaderLevel::Hold, "operator_hold");
    let env = build_envelope(snapshot(0.5), ContextMetadata::default(), Some(explicit.clone()));
    assert_eq!(env.safety(), &explicit);

    // Even when the derivation would say caution
    let env = build_envelope(snapshot(-0.99), ContextMetadata::default(), Some(SafetyHeader::default()));
    assert_eq!(env.safety().safety_level, HeaderLevel::Ok);
}

#[test]
fn test_timestamp_format() {
    let now = Utc.with_ymd_and_hms(2026, 10, 18, 7, 5, 9).unwrap();
    let env = build_envelope_at(snapshot(0.0), ContextMetadata::default(), None, now);
    assert_eq!(env.timestamp(), "2026-10-18T07:05:09Z");
}

#[test]
fn test_envelope_serialization_contract() {
    let now = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
    let context = ContextMetadata {
        user_id: Some("u-42".to_string()),
        tags: vec!["night".to_string(), "checkin".to_string()],
        ..ContextMetadata::default()
    };
    let env = build_envelope_at(CanonicalSnapshot::new(0.6, 6.5, 150.0, -0.5), context, None, now);
    let v = env.to_value();

    assert_eq!(v["xc_version"], "1.0b");
    assert_eq!(v["timestamp"], "2026-01-02T03:04:05Z");

    let canonical = &v["canonical"];
    assert_eq!(canonical["warmth_c"], 0.6);
    assert_eq!(canonical["sorrow_pH"], 6.5);
    assert_eq!(canonical["drive_mV"], 150.0);
    assert_eq!(canonical["u_star"], -0.5);
    assert_eq!(canonical["depth_band"], "deep_rain");

    let ctx = &v["context"];
    assert_eq!(ctx["source"], "chat");
    assert_eq!(ctx["channel"], "web");
    assert_eq!(ctx["culture"], "generic");
    assert_eq!(ctx["user_id"], "u-42");
    assert_eq!(ctx["tags"][1], "checkin");

    assert_eq!(v["safety"]["safety_level"], "ok");
    assert_eq!(v["safety"]["reason"], "normal");
    assert_eq!(v["safety"]["version"], "1.0b");
}

#[test]
fn test_missing_context_defaults() {
    let ctx: ContextMetadata = serde_json::from_str("{}").expect("empty context parses");
    assert_eq!(ctx, ContextMetadata::default());
    assert!(ctx.user_id.is_none());
    assert!(ctx.tags.is_empty());

    let env = build_envelope(snapshot(0.0), ctx, None);
    assert!(env.to_value()["context"]["user_id"].is_null());
}

#[test]
fn test_xc_state_projection() {
    let mut session = CanonicalSession::new();
    let result = session.process(-5.0).expect("finite input");
    let state = to_xc_state(&result);

    assert_eq!(state.u, result.u);
    assert_eq!(state.safety_level, result.safety_level);
    assert_eq!(state.warmth_c, result.warmth_c);

    let json = serde_json::to_value(&state).expect("serializable");
    assert_eq!(json["safety_level"], "blocked");
}
