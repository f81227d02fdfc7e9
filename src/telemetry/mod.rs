//! Instrumentation for the ELS pipeline.
//!
//! # SAFETY INVARIANT
//! Telemetry is a READ-ONLY side-effect layer.
//! It must **NEVER** be read inside decision logic (gate, envelope, mapper).
//!
//! # PRIVACY INVARIANT
//! Events must **NEVER** contain user content (request text, user ids, tags).
//! Only levels, bands, and numeric state are allowed.

pub mod event;
pub mod metrics;
pub mod recorder;

pub use event::TelemetryEvent;
pub use metrics::{compute_snapshot, TelemetrySnapshot};
pub use recorder::TelemetryRecorder;
