//! Fighter attribute providers.
//!
//! A provider maps a fighter name to a profile. Production deployments
//! chain several sources (remote API, secondary API, curated table) in
//! priority order; the chain lives entirely outside the simulation core,
//! which only ever sees a validated profile or a hard not-found error.

use crate::error::{Result, SimError};
use crate::models::FighterProfile;

use super::embedded;

/// A read-only source of fighter profiles.
pub trait FighterProvider: Send + Sync {
    /// Look up a fighter by name. `None` means this source has no entry;
    /// chained providers fall through to the next source.
    fn lookup(&self, name: &str) -> Option<FighterProfile>;

    /// Names this source can resolve, for error messages and rosters.
    fn known_names(&self) -> Vec<String>;
}

/// Provider backed by an in-memory table.
pub struct StaticTableProvider {
    fighters: Vec<FighterProfile>,
}

impl StaticTableProvider {
    pub fn new(fighters: Vec<FighterProfile>) -> Self {
        Self { fighters }
    }

    /// The embedded curated roster.
    pub fn embedded() -> Self {
        Self::new(embedded::embedded_roster().to_vec())
    }
}

impl FighterProvider for StaticTableProvider {
    fn lookup(&self, name: &str) -> Option<FighterProfile> {
        self.fighters.iter().find(|f| f.name.eq_ignore_ascii_case(name)).cloned()
    }

    fn known_names(&self) -> Vec<String> {
        self.fighters.iter().map(|f| f.name.clone()).collect()
    }
}

/// Ordered fallback chain: sources are tried in sequence until one returns
/// a profile.
pub struct ChainedProvider {
    sources: Vec<Box<dyn FighterProvider>>,
}

impl ChainedProvider {
    pub fn new(sources: Vec<Box<dyn FighterProvider>>) -> Self {
        Self { sources }
    }
}

impl FighterProvider for ChainedProvider {
    fn lookup(&self, name: &str) -> Option<FighterProfile> {
        self.sources.iter().find_map(|s| s.lookup(name))
    }

    fn known_names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for source in &self.sources {
            for name in source.known_names() {
                if !names.iter().any(|n| n.eq_ignore_ascii_case(&name)) {
                    names.push(name);
                }
            }
        }
        names
    }
}

/// Maximum edit distance at which a roster name is offered as a "did you
/// mean" suggestion.
const SUGGESTION_MAX_DISTANCE: usize = 3;

/// Resolve a name or fail with a descriptive, suggestion-carrying error.
///
/// Not-found is a hard input-validation failure: it surfaces before the
/// simulation entry point ever runs a trial.
pub fn resolve_fighter(provider: &dyn FighterProvider, name: &str) -> Result<FighterProfile> {
    if let Some(profile) = provider.lookup(name) {
        profile.validate()?;
        return Ok(profile);
    }
    let available = provider.known_names();
    let suggestion = closest_name(name, &available);
    log::warn!("fighter '{name}' not found (suggestion: {suggestion:?})");
    Err(SimError::FighterNotFound { name: name.to_string(), suggestion, available })
}

fn closest_name(target: &str, candidates: &[String]) -> Option<String> {
    candidates
        .iter()
        .map(|c| (edit_distance(&target.to_ascii_lowercase(), &c.to_ascii_lowercase()), c))
        .filter(|(d, _)| *d <= SUGGESTION_MAX_DISTANCE)
        .min_by_key(|(d, _)| *d)
        .map(|(_, c)| c.clone())
}

/// Levenshtein distance over chars, single-row rolling buffer.
fn edit_distance(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b_chars.len()).collect();
    for (i, ca) in a.chars().enumerate() {
        let mut prev_diag = row[0];
        row[0] = i + 1;
        for (j, &cb) in b_chars.iter().enumerate() {
            let substitution = prev_diag + usize::from(ca != cb);
            prev_diag = row[j + 1];
            row[j + 1] = substitution.min(row[j] + 1).min(prev_diag + 1);
        }
    }
    *row.last().unwrap_or(&0)
}
