pub mod canonical;
pub mod config;
pub mod els_core;
pub mod error;
pub mod pipeline;
pub mod redline;
pub mod snapshot;
pub mod stability;
pub mod telemetry;
pub mod ul;
pub mod xc;

// Re-export the pieces most callers need
pub use crate::canonical::{CanonicalResult, CanonicalSession, SafetyLevel, SafetyVerdict};
pub use crate::config::{ElsConfig, GateConfig};
pub use crate::els_core::ElsCore;
pub use crate::error::{ConfigError, ElsError, Result};
pub use crate::pipeline::{ElsPipeline, PipelineInput, PipelineOutput};
pub use crate::snapshot::{CanonicalSnapshot, DepthBand};
