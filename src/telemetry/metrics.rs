use std::collections::VecDeque;

use super::event::TelemetryEvent;
use crate::canonical::SafetyLevel;
use crate::redline::RedlineSeverity;
use crate::ul::Intensity;
use crate::xc::HeaderLevel;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TelemetrySnapshot {
    pub verdict_stats: VerdictStats,
    pub recovery_stats: RecoveryStats,
    pub envelope_stats: EnvelopeStats,
    pub metaphor_stats: MetaphorStats,
    pub redline_stats: RedlineStats,
    pub rejected_inputs: u64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct VerdictStats {
    pub ok: u64,
    pub warning: u64,
    pub blocked: u64,
    pub min_u: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecoveryStats {
    pub steps: u64,
    pub total_gain: f64,
    /// Steps that hit the 1.0 ceiling without gaining anything.
    pub saturated_steps: u64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnvelopeStats {
    pub built: u64,
    pub ok: u64,
    pub caution: u64,
    pub hold: u64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetaphorStats {
    pub rendered: u64,
    pub softened: u64,
    pub high_intensity: u64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RedlineStats {
    pub checked: u64,
    pub soft_blocks: u64,
    pub hard_blocks: u64,
}

pub fn compute_snapshot(events: &VecDeque<TelemetryEvent>) -> TelemetrySnapshot {
    let mut snap = TelemetrySnapshot::default();

    for event in events {
        match event {
            TelemetryEvent::VerdictIssued { level, u } => {
                match level {
                    SafetyLevel::Ok => snap.verdict_stats.ok += 1,
                    SafetyLevel::Warning => snap.verdict_stats.warning += 1,
                    SafetyLevel::Blocked => snap.verdict_stats.blocked += 1,
                }
                snap.verdict_stats.min_u = Some(match snap.verdict_stats.min_u {
                    Some(m) => m.min(*u),
                    None => *u,
                });
            }
            TelemetryEvent::RecoveryStep { warmth_before, warmth_after } => {
                snap.recovery_stats.steps += 1;
                let gain = warmth_after - warmth_before;
                snap.recovery_stats.total_gain += gain;
                if gain <= 0.0 {
                    snap.recovery_stats.saturated_steps += 1;
                }
            }
            TelemetryEvent::InputRejected => snap.rejected_inputs += 1,
            TelemetryEvent::RedlineChecked { severity } => {
                snap.redline_stats.checked += 1;
                match severity {
                    RedlineSeverity::Allow => {}
                    RedlineSeverity::SoftBlock => snap.redline_stats.soft_blocks += 1,
                    RedlineSeverity::HardBlock => snap.redline_stats.hard_blocks += 1,
                }
            }
            TelemetryEvent::EnvelopeBuilt { safety_level, .. } => {
                snap.envelope_stats.built += 1;
                match safety_level {
                    HeaderLevel::Ok => snap.envelope_stats.ok += 1,
                    HeaderLevel::Caution => snap.envelope_stats.caution += 1,
                    HeaderLevel::Hold => snap.envelope_stats.hold += 1,
                }
            }
            TelemetryEvent::MetaphorRendered { intensity, softened } => {
                snap.metaphor_stats.rendered += 1;
                if *softened {
                    snap.metaphor_stats.softened += 1;
                }
                if *intensity == Intensity::High {
                    snap.metaphor_stats.high_intensity += 1;
                }
            }
        }
    }

    snap
}
