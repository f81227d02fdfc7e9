//! UL: metaphor mapping layer.
//!
//! Turns the four canonical scalars into a gentle description, a glyph,
//! a coarse intensity band, and a safety note. Deterministic and pure.

pub mod mapper;
pub mod types;

pub use mapper::{map, to_metaphor, UlMapper};
pub use types::{EmotionState, Intensity, UlResult};
