use serde::{Deserialize, Serialize};

use crate::canonical::SafetyLevel;
use crate::redline::RedlineSeverity;
use crate::snapshot::DepthBand;
use crate::ul::Intensity;
use crate::xc::HeaderLevel;

// Allowed: levels, bands, numeric state
// Forbidden: request text, matched keywords, user ids

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TelemetryEvent {
    VerdictIssued {
        level: SafetyLevel,
        u: f64,
    },

    RecoveryStep {
        warmth_before: f64,
        warmth_after: f64,
    },

    InputRejected,

    RedlineChecked {
        severity: RedlineSeverity,
    },

    EnvelopeBuilt {
        depth_band: DepthBand,
        safety_level: HeaderLevel,
    },

    MetaphorRendered {
        intensity: Intensity,
        softened: bool,
    },
}
