use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, info_span, warn};
use uuid::Uuid;

use crate::canonical::{CanonicalResult, SafetyLevel};
use crate::config::ElsConfig;
use crate::els_core::ElsCore;
use crate::error::{ElsError, Result};
use crate::redline::{RedlineFilter, RedlineVerdict};
use crate::telemetry::{TelemetryEvent, TelemetryRecorder};
use crate::ul::{UlMapper, UlResult};
use crate::xc::{ContextMetadata, XcEnvelope};

pub const NEUTRAL_SORROW_PH: f64 = 7.0;
pub const NEUTRAL_DRIVE_MV: f64 = 100.0;

/// One request into the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineInput {
    pub raw: f64,
    #[serde(rename = "sorrow_pH")]
    pub sorrow_ph: f64,
    #[serde(rename = "drive_mV")]
    pub drive_mv: f64,
    pub context: ContextMetadata,
    /// Request text for the upstream redline filter, if any.
    pub text: Option<String>,
}

impl Default for PipelineInput {
    fn default() -> Self {
        Self {
            raw: 0.0,
            sorrow_ph: NEUTRAL_SORROW_PH,
            drive_mv: NEUTRAL_DRIVE_MV,
            context: ContextMetadata::default(),
            text: None,
        }
    }
}

impl PipelineInput {
    pub fn raw(raw: f64) -> Self {
        Self {
            raw,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineOutput {
    pub session_id: Uuid,
    pub canonical: CanonicalResult,
    pub envelope: XcEnvelope,
    pub metaphor: UlResult,
    pub redline: Option<RedlineVerdict>,
}

/// Canonical session → XC envelope → UL metaphor, for one conversation.
///
/// Data only flows forward; the session warmth is the only thing that
/// survives between calls.
pub struct ElsPipeline {
    session_id: Uuid,
    core: ElsCore,
    mapper: UlMapper,
    redline: Option<Box<dyn RedlineFilter>>,
    telemetry: TelemetryRecorder,
}

impl ElsPipeline {
    pub fn new(config: ElsConfig) -> Result<Self> {
        Ok(Self {
            session_id: Uuid::new_v4(),
            core: ElsCore::new(config)?,
            mapper: UlMapper::default(),
            redline: None,
            telemetry: TelemetryRecorder::new(),
        })
    }

    pub fn with_redline(mut self, filter: Box<dyn RedlineFilter>) -> Self {
        self.redline = Some(filter);
        self
    }

    pub fn with_mapper(mut self, mapper: UlMapper) -> Self {
        self.mapper = mapper;
        self
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn warmth(&self) -> f64 {
        self.core.warmth()
    }

    pub fn telemetry(&self) -> &TelemetryRecorder {
        &self.telemetry
    }

    pub fn run(&mut self, input: PipelineInput) -> Result<PipelineOutput> {
        self.run_at(input, Utc::now())
    }

    pub fn run_at(&mut self, input: PipelineInput, now: DateTime<Utc>) -> Result<PipelineOutput> {
        let span = info_span!("els_request", session = %self.session_id);
        let _guard = span.enter();

        // 0. Caller readings must be finite before anything runs
        for (field, value) in [("sorrow_pH", input.sorrow_ph), ("drive_mV", input.drive_mv)] {
            if !value.is_finite() {
                warn!(field, value, "Rejected non-finite reading");
                self.telemetry.record(TelemetryEvent::InputRejected);
                return Err(ElsError::NonFiniteInput { field, value });
            }
        }

        // 1. Upstream text verdict
        let redline = match (&self.redline, &input.text) {
            (Some(filter), Some(text)) => {
                let verdict = filter.check(text);
                self.telemetry.record(TelemetryEvent::RedlineChecked { severity: verdict.severity });
                Some(verdict)
            }
            _ => None,
        };

        // 2. Canonical step
        let warmth_before = self.core.warmth();
        let canonical = match self.core.step(input.raw) {
            Ok(result) => result,
            Err(e) => {
                if matches!(e, ElsError::NonFiniteInput { .. }) {
                    self.telemetry.record(TelemetryEvent::InputRejected);
                }
                return Err(e);
            }
        };
        self.telemetry.record(TelemetryEvent::VerdictIssued {
            level: canonical.safety_level,
            u: canonical.u,
        });
        if canonical.safety_level == SafetyLevel::Blocked {
            self.telemetry.record(TelemetryEvent::RecoveryStep {
                warmth_before,
                warmth_after: canonical.warmth_c,
            });
        }

        // 3. Envelope
        let snapshot = canonical.snapshot(input.sorrow_ph, input.drive_mv);
        let explicit_safety = redline.as_ref().and_then(RedlineVerdict::safety_header);
        let envelope = XcEnvelope::assemble(
            &self.core.config().xc_version,
            snapshot,
            input.context,
            explicit_safety,
            now,
        );
        self.telemetry.record(TelemetryEvent::EnvelopeBuilt {
            depth_band: envelope.depth_band(),
            safety_level: envelope.safety().safety_level,
        });

        // 4. Metaphor
        let metaphor = self.mapper.map(&snapshot);
        let softened = metaphor.safety_note != crate::ul::mapper::NOTE_NORMAL;
        self.telemetry.record(TelemetryEvent::MetaphorRendered {
            intensity: metaphor.intensity,
            softened,
        });

        debug!(depth_band = envelope.depth_band().as_str(), softened, "Envelope and metaphor rendered");
        info!(
            level = canonical.safety_level.as_str(),
            u = canonical.u,
            warmth = canonical.warmth_c,
            "ELS request processed"
        );

        Ok(PipelineOutput {
            session_id: self.session_id,
            canonical,
            envelope,
            metaphor,
            redline,
        })
    }
}
