use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

pub const DEFAULT_REDLINE_THRESHOLD: f64 = -0.95;
pub const DEFAULT_WARNING_MARGIN: f64 = 0.15;
pub const DEFAULT_RECOVERY_STEP: f64 = 0.3;
pub const XC_VERSION: &str = "1.0b";

/// Redline threshold plus the WARNING band width above it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GateConfig {
    /// Hard redline in U* space. Values at or below it are BLOCKED.
    pub threshold: f64,
    /// Width of the WARNING band sitting directly above the redline.
    pub warning_margin: f64,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_REDLINE_THRESHOLD,
            warning_margin: DEFAULT_WARNING_MARGIN,
        }
    }
}

/// Top-level configuration. All values are demo defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElsConfig {
    pub gate: GateConfig,
    /// Warmth added per BLOCKED sample.
    pub recovery_step: f64,
    pub xc_version: String,
}

impl Default for ElsConfig {
    fn default() -> Self {
        Self {
            gate: GateConfig::default(),
            recovery_step: DEFAULT_RECOVERY_STEP,
            xc_version: XC_VERSION.to_string(),
        }
    }
}

impl ElsConfig {
    pub fn with_threshold(threshold: f64) -> Self {
        Self {
            gate: GateConfig {
                threshold,
                ..GateConfig::default()
            },
            ..Self::default()
        }
    }

    /// Parse a (possibly partial) JSON document and validate it.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: ElsConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Fail fast on values that would make the gate meaningless.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        check_range("gate.threshold", self.gate.threshold, -1.0, 1.0)?;
        check_range("gate.warning_margin", self.gate.warning_margin, 0.0, 1.0)?;
        check_range("recovery_step", self.recovery_step, 0.0, 1.0)?;
        Ok(())
    }
}

fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> std::result::Result<(), ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::NonFinite { field });
    }
    if value < min || value > max {
        return Err(ConfigError::OutOfRange { field, value, min, max });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ElsError;

    #[test]
    fn defaults_are_valid() {
        let config = ElsConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.gate.threshold, -0.95);
        assert_eq!(config.gate.warning_margin, 0.15);
        assert_eq!(config.recovery_step, 0.3);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config = ElsConfig::from_json_str(r#"{ "gate": { "threshold": -0.9 } }"#)
            .expect("partial config should parse");
        assert_eq!(config.gate.threshold, -0.9);
        assert_eq!(config.gate.warning_margin, DEFAULT_WARNING_MARGIN);
        assert_eq!(config.xc_version, XC_VERSION);
    }

    #[test]
    fn rejects_out_of_range_threshold() {
        let err = ElsConfig::from_json_str(r#"{ "gate": { "threshold": -4.0 } }"#).unwrap_err();
        assert!(matches!(
            err,
            ElsError::Config(ConfigError::OutOfRange { field: "gate.threshold", .. })
        ));
    }

    #[test]
    fn rejects_garbage() {
        let err = ElsConfig::from_json_str("not json").unwrap_err();
        assert!(matches!(err, ElsError::Config(ConfigError::Parse(_))));
    }

    #[test]
    fn rejects_nan_step() {
        let mut config = ElsConfig::default();
        config.recovery_step = f64::NAN;
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonFinite { field: "recovery_step" })
        );
    }
}
