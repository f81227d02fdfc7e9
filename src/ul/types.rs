use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// UL consumes the same four scalars XC carries.
pub type EmotionState = crate::snapshot::CanonicalSnapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UlResult {
    pub text: String,
    pub symbol: String,
    pub intensity: Intensity,
    pub safety_note: String,
}

impl UlResult {
    pub fn to_fields(&self) -> Map<String, Value> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        }
    }
}
