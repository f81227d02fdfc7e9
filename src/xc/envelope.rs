use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::types::{ContextMetadata, HeaderLevel, SafetyHeader};
use crate::canonical::{CanonicalResult, SafetyLevel};
use crate::config::XC_VERSION;
use crate::snapshot::{CanonicalSnapshot, DepthBand};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Canonical block of the envelope: the snapshot plus its derived band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct XcCanonical {
    #[serde(flatten)]
    pub snapshot: CanonicalSnapshot,
    pub depth_band: DepthBand,
}

/// Terminal, immutable envelope. Built in one shot by `build_envelope*`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XcEnvelope {
    xc_version: String,
    timestamp: String,
    canonical: XcCanonical,
    context: ContextMetadata,
    safety: SafetyHeader,
}

impl XcEnvelope {
    /// Assemble with an explicit version and capture instant.
    /// An explicit safety header always wins over the derived one.
    pub fn assemble(
        version: &str,
        snapshot: CanonicalSnapshot,
        context: ContextMetadata,
        explicit_safety: Option<SafetyHeader>,
        now: DateTime<Utc>,
    ) -> Self {
        let safety = explicit_safety.unwrap_or_else(|| SafetyHeader {
            version: version.to_string(),
            ..auto_safety(&snapshot)
        });
        Self {
            xc_version: version.to_string(),
            timestamp: now.format(TIMESTAMP_FORMAT).to_string(),
            canonical: XcCanonical {
                snapshot,
                depth_band: snapshot.depth_band(),
            },
            context,
            safety,
        }
    }

    pub fn version(&self) -> &str {
        &self.xc_version
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn canonical(&self) -> &XcCanonical {
        &self.canonical
    }

    pub fn snapshot(&self) -> CanonicalSnapshot {
        self.canonical.snapshot
    }

    pub fn depth_band(&self) -> DepthBand {
        self.canonical.depth_band
    }

    pub fn context(&self) -> &ContextMetadata {
        &self.context
    }

    pub fn safety(&self) -> &SafetyHeader {
        &self.safety
    }

    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

/// Rough safety header derived from the canonical state.
/// Extreme depth (boundary included) raises caution.
pub fn auto_safety(snapshot: &CanonicalSnapshot) -> SafetyHeader {
    if snapshot.is_extreme_depth() {
        return SafetyHeader::new(HeaderLevel::Caution, "extreme_depth");
    }
    SafetyHeader::default()
}

pub fn build_envelope(
    snapshot: CanonicalSnapshot,
    context: ContextMetadata,
    explicit_safety: Option<SafetyHeader>,
) -> XcEnvelope {
    build_envelope_at(snapshot, context, explicit_safety, Utc::now())
}

pub fn build_envelope_at(
    snapshot: CanonicalSnapshot,
    context: ContextMetadata,
    explicit_safety: Option<SafetyHeader>,
    now: DateTime<Utc>,
) -> XcEnvelope {
    XcEnvelope::assemble(XC_VERSION, snapshot, context, explicit_safety, now)
}

/// Flat projection of a canonical result for quick logging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XcState {
    pub raw: f64,
    pub n: f64,
    pub u: f64,
    pub safety_level: SafetyLevel,
    pub safety_reason: String,
    pub warmth_c: f64,
}

pub fn to_xc_state(result: &CanonicalResult) -> XcState {
    XcState {
        raw: result.raw,
        n: result.n,
        u: result.u,
        safety_level: result.safety_level,
        safety_reason: result.safety_reason.clone(),
        warmth_c: result.warmth_c,
    }
}
