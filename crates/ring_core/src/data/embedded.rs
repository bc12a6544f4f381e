//! Embedded fallback roster.
//!
//! The curated table of well-known fighters is compiled into the binary with
//! `include_str!` and parsed once behind a `OnceLock`, so lookups work with
//! no file I/O and no network. It is exposed through the provider trait
//! rather than as mutable module state.

use std::sync::OnceLock;

use super::record::RawFighterRecord;
use crate::models::FighterProfile;

/// Curated roster JSON (~1KB), measurements in source form.
pub const ROSTER_JSON: &str = include_str!("../../data/roster.json");

static ROSTER: OnceLock<Vec<FighterProfile>> = OnceLock::new();

/// The parsed embedded roster, built on first access.
pub fn embedded_roster() -> &'static [FighterProfile] {
    ROSTER.get_or_init(|| {
        let records: Vec<RawFighterRecord> =
            serde_json::from_str(ROSTER_JSON).expect("Embedded roster JSON is corrupted");
        records.into_iter().map(RawFighterRecord::into_profile).collect()
    })
}

/// Case-insensitive lookup in the embedded roster.
pub fn embedded_lookup(name: &str) -> Option<&'static FighterProfile> {
    embedded_roster().iter().find(|f| f.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_parses_and_validates() {
        let roster = embedded_roster();
        assert_eq!(roster.len(), 6);
        for fighter in roster {
            fighter.validate().expect("embedded fighter must validate");
        }
    }

    #[test]
    fn test_known_entries() {
        let fury = embedded_lookup("Tyson Fury").expect("Fury should exist");
        assert_eq!(fury.total_bouts, 35);
        assert_eq!(fury.weight_lbs, 270.0);

        let canelo = embedded_lookup("canelo alvarez").expect("lookup is case-insensitive");
        assert_eq!(canelo.wins, 62);
    }

    #[test]
    fn test_unknown_name_is_none() {
        assert!(embedded_lookup("Rocky Balboa").is_none());
    }
}
