//! Canonical Layer
//!
//! raw emotion → tanh normalization → U* transform → safety gate → recovery
//!
//! # STATE INVARIANT
//! `CanonicalSession` is the ONLY stateful object in ELS. It owns one scalar
//! (warmth) and is never shared between conversations.

pub mod gate;
pub mod recovery;
pub mod session;
pub mod transform;

pub use gate::{detect_redline, gate, gate_with, SafetyLevel, SafetyVerdict};
pub use recovery::recover;
pub use session::{CanonicalResult, CanonicalSession};
pub use transform::{normalize, u_transform};
