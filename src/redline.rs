use serde::{Deserialize, Serialize};

use crate::xc::{HeaderLevel, SafetyHeader};

/// Coarse text verdict produced upstream of the canonical layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RedlineSeverity {
    /// Safe to process normally.
    Allow,
    /// Sensitive themes; decline politely or answer with extra support.
    SoftBlock,
    /// Must refuse.
    HardBlock,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedlineVerdict {
    pub severity: RedlineSeverity,
    pub reason: String,
    pub matched_keywords: Vec<String>,
}

impl RedlineVerdict {
    pub fn allow(reason: &str) -> Self {
        Self {
            severity: RedlineSeverity::Allow,
            reason: reason.to_string(),
            matched_keywords: Vec::new(),
        }
    }

    pub fn allowed(&self) -> bool {
        self.severity == RedlineSeverity::Allow
    }

    /// Explicit XC header implied by this verdict.
    /// `None` means the envelope derives its own header.
    pub fn safety_header(&self) -> Option<SafetyHeader> {
        match self.severity {
            RedlineSeverity::Allow => None,
            RedlineSeverity::SoftBlock => Some(SafetyHeader::new(HeaderLevel::Caution, "redline_soft_block")),
            RedlineSeverity::HardBlock => Some(SafetyHeader::new(HeaderLevel::Hold, "redline_hard_block")),
        }
    }
}

/// Pluggable text classifier. ELS only depends on the three-way verdict,
/// never on how it was reached.
pub trait RedlineFilter: Send + Sync {
    fn check(&self, text: &str) -> RedlineVerdict;
}
