//! Raw fighter records as external sources report them.

use serde::{Deserialize, Serialize};

use super::units;
use crate::models::FighterProfile;

/// A fighter record with measurements still in source form.
///
/// This is the shape of roster JSON files and API payloads: counts as
/// integers, height/reach/weight as free-form strings, reach optional.
/// Conversion to a [`FighterProfile`] applies the unit parsers and their
/// lenient defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawFighterRecord {
    pub name: String,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub ko_wins: u32,
    pub height: String,
    /// Missing reach is estimated from height.
    #[serde(default)]
    pub reach: Option<String>,
    #[serde(default)]
    pub weight: Option<String>,
}

impl RawFighterRecord {
    pub fn into_profile(self) -> FighterProfile {
        let height_cm = units::parse_length_cm(&self.height);
        let reach_cm = match &self.reach {
            Some(raw) => units::parse_length_cm(raw),
            None => units::estimate_reach_cm(height_cm),
        };
        let weight_lbs = match &self.weight {
            Some(raw) => units::parse_weight_lbs(raw),
            None => units::DEFAULT_WEIGHT_LBS,
        };
        FighterProfile::from_record(
            self.name,
            self.wins,
            self.losses,
            self.draws,
            self.ko_wins,
            height_cm,
            reach_cm,
            weight_lbs,
        )
    }
}
