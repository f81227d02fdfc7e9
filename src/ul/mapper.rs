use serde_json::Value;

use super::types::{EmotionState, Intensity, UlResult};
use crate::snapshot::DepthBand;

pub const SOFTENED_TEXT: &str = "Even in the deepest water, you are gently held by the ocean.";
pub const NOTE_NORMAL: &str = "normal";
pub const NOTE_SOFTENED: &str = "softened_extreme_negative";

/// Minimal metaphor generator.
///
/// `culture` and `style` mark where per-user adaptation would plug in;
/// the default rendering ignores them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UlMapper {
    pub culture: String,
    pub style: String,
}

impl Default for UlMapper {
    fn default() -> Self {
        Self::new("generic", "poetic")
    }
}

impl UlMapper {
    pub fn new(culture: &str, style: &str) -> Self {
        Self {
            culture: culture.to_string(),
            style: style.to_string(),
        }
    }

    pub fn map(&self, state: &EmotionState) -> UlResult {
        let band = DepthBand::from_u_star(state.u_star);
        let symbol = symbol_for(band);
        let intensity = intensity_for(state);

        // Hard replacement: the composed text is discarded, not modified.
        let (text, safety_note) = if state.is_extreme_depth() {
            (SOFTENED_TEXT.to_string(), NOTE_SOFTENED)
        } else {
            (base_metaphor(band, state), NOTE_NORMAL)
        };

        UlResult {
            text,
            symbol: symbol.to_string(),
            intensity,
            safety_note: safety_note.to_string(),
        }
    }
}

/// Map with the default mapper.
pub fn map(state: &EmotionState) -> UlResult {
    UlMapper::default().map(state)
}

/// Convenience wrapper returning a plain JSON object.
pub fn to_metaphor(warmth_c: f64, sorrow_ph: f64, drive_mv: f64, u_star: f64) -> Value {
    let state = EmotionState::new(warmth_c, sorrow_ph, drive_mv, u_star);
    Value::Object(map(&state).to_fields())
}

fn base_metaphor(band: DepthBand, s: &EmotionState) -> String {
    let core = match band {
        DepthBand::Abyss => "a deep seabed where light is faint",
        DepthBand::DeepRain => "rain falling in the quiet ocean",
        DepthBand::Mid => "slow mid-depth currents",
        DepthBand::Surface => "surface waves glittering with light",
    };

    let mut text = String::new();
    if s.warmth_c >= 0.7 {
        text.push_str("warm ");
    } else if s.warmth_c <= 0.2 {
        text.push_str("cool ");
    }
    text.push_str(core);

    // Lower pH reads as sorrow, higher as clarity. 6.7..=7.3 is neutral.
    if s.sorrow_ph < 6.7 {
        text.push_str(", carrying a soft echo of sadness");
    } else if s.sorrow_ph > 7.3 {
        text.push_str(", feeling unusually clear");
    }

    if s.drive_mv > 180.0 {
        text.push_str(", already ready to move again");
    } else if s.drive_mv < 40.0 {
        text.push_str(", almost at rest");
    }

    text
}

fn symbol_for(band: DepthBand) -> &'static str {
    match band {
        DepthBand::Abyss => "🌊",
        DepthBand::DeepRain => "🌧️",
        DepthBand::Mid => "💧",
        DepthBand::Surface => "❇️",
    }
}

/// First match wins: HIGH, then LOW, else MEDIUM.
fn intensity_for(s: &EmotionState) -> Intensity {
    if s.u_star.abs() > 0.9 || s.drive_mv > 220.0 {
        return Intensity::High;
    }
    if s.u_star.abs() < 0.3 && (0.3..=0.7).contains(&s.warmth_c) {
        return Intensity::Low;
    }
    Intensity::Medium
}
