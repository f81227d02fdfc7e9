use crate::canonical::{CanonicalResult, CanonicalSession};
use crate::config::ElsConfig;
use crate::error::Result;

/// High-level one-line interface over one canonical session.
///
/// ```ignore
/// let mut els = ElsCore::new(ElsConfig::default())?;
/// let result = els.step(-0.8)?;
/// ```
#[derive(Debug, Clone)]
pub struct ElsCore {
    canonical: CanonicalSession,
}

impl ElsCore {
    pub fn new(config: ElsConfig) -> Result<Self> {
        Ok(Self {
            canonical: CanonicalSession::with_config(config)?,
        })
    }

    pub fn step(&mut self, raw_emotion: f64) -> Result<CanonicalResult> {
        self.canonical.process(raw_emotion)
    }

    pub fn session(&self) -> &CanonicalSession {
        &self.canonical
    }

    pub fn config(&self) -> &ElsConfig {
        self.canonical.config()
    }

    pub fn warmth(&self) -> f64 {
        self.canonical.warmth()
    }
}
