use serde::{Deserialize, Serialize};

/// U* at or below this is extreme depth: XC raises caution, UL softens.
pub const EXTREME_DEPTH_U_STAR: f64 = -0.95;

/// Point-in-time copy of the canonical emotion state.
/// Mirrors the emotion-depth model shared by XC and UL.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanonicalSnapshot {
    pub warmth_c: f64,
    /// pH-like sorrow scalar, neutral around 7.0.
    #[serde(rename = "sorrow_pH")]
    pub sorrow_ph: f64,
    /// mV-like drive scalar.
    #[serde(rename = "drive_mV")]
    pub drive_mv: f64,
    pub u_star: f64,
}

impl CanonicalSnapshot {
    pub fn new(warmth_c: f64, sorrow_ph: f64, drive_mv: f64, u_star: f64) -> Self {
        Self {
            warmth_c,
            sorrow_ph,
            drive_mv,
            u_star,
        }
    }

    pub fn depth_band(&self) -> DepthBand {
        DepthBand::from_u_star(self.u_star)
    }

    /// Boundary included.
    pub fn is_extreme_depth(&self) -> bool {
        self.u_star <= EXTREME_DEPTH_U_STAR
    }
}

/// Coarse depth classification of U*.
/// Names are neutral; renderers pick their own metaphor family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DepthBand {
    Abyss,
    DeepRain,
    Mid,
    Surface,
}

impl DepthBand {
    /// Boundaries belong to the lower band. NaN falls through to Surface.
    pub fn from_u_star(u: f64) -> Self {
        if u <= -0.8 {
            DepthBand::Abyss
        } else if u <= -0.3 {
            DepthBand::DeepRain
        } else if u <= 0.3 {
            DepthBand::Mid
        } else {
            DepthBand::Surface
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DepthBand::Abyss => "abyss",
            DepthBand::DeepRain => "deep_rain",
            DepthBand::Mid => "mid",
            DepthBand::Surface => "surface",
        }
    }
}
