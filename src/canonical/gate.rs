use serde::{Deserialize, Serialize};

use crate::config::{GateConfig, DEFAULT_WARNING_MARGIN};

/// Discrete safety levels derived from the continuous U* value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SafetyLevel {
    Ok,
    Warning,
    Blocked,
}

impl SafetyLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SafetyLevel::Ok => "ok",
            SafetyLevel::Warning => "warning",
            SafetyLevel::Blocked => "blocked",
        }
    }

    pub fn reason(&self) -> &'static str {
        match self {
            SafetyLevel::Blocked => "ELS_U* below hard redline; block or strongly de-escalate.",
            SafetyLevel::Warning => "ELS_U* near redline; respond carefully and de-escalate.",
            SafetyLevel::Ok => "ELS_U* in safe range.",
        }
    }
}

/// Result of the U* gate. Recomputed per sample, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SafetyVerdict {
    pub level: SafetyLevel,
    pub reason: String,
    pub u_value: f64,
    pub threshold: f64,
}

/// Gate with the default warning margin.
pub fn gate(u: f64, threshold: f64) -> SafetyVerdict {
    classify(u, threshold, DEFAULT_WARNING_MARGIN)
}

pub fn gate_with(u: f64, config: &GateConfig) -> SafetyVerdict {
    classify(u, config.threshold, config.warning_margin)
}

/// Boundaries resolve to the stricter band: `u == threshold` is BLOCKED,
/// `u == threshold + margin` is WARNING. A NaN `u` compares false
/// everywhere and lands in OK, which is why sessions reject NaN upfront.
fn classify(u: f64, threshold: f64, margin: f64) -> SafetyVerdict {
    let level = if u <= threshold {
        SafetyLevel::Blocked
    } else if u <= threshold + margin {
        SafetyLevel::Warning
    } else {
        SafetyLevel::Ok
    };

    SafetyVerdict {
        level,
        reason: level.reason().to_string(),
        u_value: u,
        threshold,
    }
}

/// Strict "below the redline" check. The gate above is authoritative.
pub fn detect_redline(u: f64, threshold: f64) -> bool {
    u < threshold
}
