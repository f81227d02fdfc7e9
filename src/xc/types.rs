use serde::{Deserialize, Serialize};

use crate::config::XC_VERSION;

/// Where a snapshot came from. Supplied entirely by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextMetadata {
    pub source: String,
    pub channel: String,
    pub culture: String,
    pub user_id: Option<String>,
    pub tags: Vec<String>,
}

impl Default for ContextMetadata {
    fn default() -> Self {
        Self {
            source: "chat".to_string(),
            channel: "web".to_string(),
            culture: "generic".to_string(),
            user_id: None,
            tags: Vec::new(),
        }
    }
}

/// How downstream consumers may use the signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderLevel {
    /// Safe for normal downstream use.
    Ok,
    /// Handle gently (extreme depth, high distress).
    Caution,
    /// Do not use for user-visible output.
    Hold,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetyHeader {
    pub safety_level: HeaderLevel,
    pub reason: String,
    pub version: String,
}

impl SafetyHeader {
    pub fn new(safety_level: HeaderLevel, reason: &str) -> Self {
        Self {
            safety_level,
            reason: reason.to_string(),
            version: XC_VERSION.to_string(),
        }
    }
}

impl Default for SafetyHeader {
    fn default() -> Self {
        Self::new(HeaderLevel::Ok, "normal")
    }
}
