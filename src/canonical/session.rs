use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use super::gate::{gate_with, SafetyLevel};
use super::recovery::recover;
use super::transform::{normalize, u_transform};
use crate::config::ElsConfig;
use crate::error::{ElsError, Result};
use crate::snapshot::CanonicalSnapshot;

/// Output of one canonical step. Field names are the logging contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalResult {
    pub raw: f64,
    pub n: f64,
    pub u: f64,
    pub redline_threshold: f64,
    pub safety_level: SafetyLevel,
    pub safety_reason: String,
    pub warmth_c: f64,
}

impl CanonicalResult {
    /// Flat string-keyed mapping for log sinks.
    pub fn to_fields(&self) -> Map<String, Value> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            // Non-finite floats serialize as null; a struct always yields an object.
            _ => Map::new(),
        }
    }

    /// Combine this step with caller-supplied sorrow/drive readings.
    pub fn snapshot(&self, sorrow_ph: f64, drive_mv: f64) -> CanonicalSnapshot {
        CanonicalSnapshot {
            warmth_c: self.warmth_c,
            sorrow_ph,
            drive_mv,
            u_star: self.u,
        }
    }
}

/// Per-conversation canonical pipeline.
///
/// Holds the gate configuration and the warmth accumulator. Callers must
/// drive one session from one logical thread; `process` takes `&mut self`
/// so the borrow checker enforces the single-writer rule.
#[derive(Debug, Clone)]
pub struct CanonicalSession {
    config: ElsConfig,
    warmth_c: f64,
}

impl CanonicalSession {
    pub fn new() -> Self {
        Self {
            config: ElsConfig::default(),
            warmth_c: 0.0,
        }
    }

    pub fn with_threshold(threshold: f64) -> Result<Self> {
        Self::with_config(ElsConfig::with_threshold(threshold))
    }

    pub fn with_config(config: ElsConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            warmth_c: 0.0,
        })
    }

    pub fn threshold(&self) -> f64 {
        self.config.gate.threshold
    }

    pub fn warmth(&self) -> f64 {
        self.warmth_c
    }

    pub fn config(&self) -> &ElsConfig {
        &self.config
    }

    /// Run one raw sample through normalize → U* → gate → recovery.
    ///
    /// NaN and ±Infinity are rejected and leave warmth untouched.
    pub fn process(&mut self, raw: f64) -> Result<CanonicalResult> {
        if !raw.is_finite() {
            warn!(raw, "Rejected non-finite sample");
            return Err(ElsError::NonFiniteInput { field: "raw", value: raw });
        }

        let n = normalize(raw);
        let u = u_transform(n);
        let verdict = gate_with(u, &self.config.gate);

        if verdict.level == SafetyLevel::Blocked {
            let before = self.warmth_c;
            self.warmth_c = recover(self.warmth_c, self.config.recovery_step);
            warn!(u, threshold = verdict.threshold, warmth_before = before, warmth_after = self.warmth_c, "Redline crossed, recovery step applied");
        }

        debug!(raw, n, u, level = verdict.level.as_str(), warmth = self.warmth_c, "Canonical step");

        Ok(CanonicalResult {
            raw,
            n,
            u,
            redline_threshold: verdict.threshold,
            safety_level: verdict.level,
            safety_reason: verdict.reason,
            warmth_c: self.warmth_c,
        })
    }
}

impl Default for CanonicalSession {
    fn default() -> Self {
        Self::new()
    }
}
