//! XC: cross-context envelope.
//!
//! XC does not interpret emotions. It only carries the canonical numeric
//! state, caller context, and a small safety header, assembled once into an
//! immutable, loggable artifact.

pub mod envelope;
pub mod types;

pub use envelope::{auto_safety, build_envelope, build_envelope_at, to_xc_state, XcCanonical, XcEnvelope, XcState};
pub use types::{ContextMetadata, HeaderLevel, SafetyHeader};
