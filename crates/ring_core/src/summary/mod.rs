//! Result summarization: percentages, implied odds, advisories and the
//! text report rendered by the CLI front-end.

use serde::{Deserialize, Serialize};

use crate::models::{FighterProfile, SimulationResult};

/// Weight gap (lbs) beyond which a matchup earns a mismatch advisory.
pub const WEIGHT_MISMATCH_THRESHOLD_LBS: f64 = 25.0;

/// Approximate width of one professional weight class (lbs), used to bucket
/// the size of a mismatch.
pub const WEIGHT_CLASS_STEP_LBS: f64 = 15.0;

/// One side of the matchup in the rendered summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FighterLine {
    pub name: String,
    pub wins: u64,
    pub win_pct: f64,
    /// Implied decimal odds (`100 / win_pct`); `None` when the percentage is
    /// exactly zero ("N/A", never a division error).
    pub implied_odds: Option<f64>,
}

/// Aggregated, presentation-ready view of one simulation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FightSummary {
    pub fighter_a: FighterLine,
    pub fighter_b: FighterLine,
    pub draws: u64,
    pub draw_pct: f64,
    pub favorite: String,
    pub n_trials: u64,
    pub elapsed_secs: f64,
    /// Trials per second; `None` encodes an unmeasurably fast run
    /// (serialized as null rather than a non-JSON infinity).
    pub throughput: Option<f64>,
    pub warnings: Vec<String>,
}

/// Implied decimal odds for a win percentage, guarded at zero.
pub fn implied_decimal_odds(win_pct: f64) -> Option<f64> {
    if win_pct > 0.0 {
        Some(100.0 / win_pct)
    } else {
        None
    }
}

/// Advisory for matchups that cross weight classes.
///
/// Returns a message when the gap exceeds [`WEIGHT_MISMATCH_THRESHOLD_LBS`],
/// bucketing the magnitude into approximate class counts.
pub fn weight_mismatch_warning(a: &FighterProfile, b: &FighterProfile) -> Option<String> {
    let diff = (a.weight_lbs - b.weight_lbs).abs();
    if diff <= WEIGHT_MISMATCH_THRESHOLD_LBS {
        return None;
    }
    let classes = (diff / WEIGHT_CLASS_STEP_LBS).round() as u32;
    let heavier = if a.weight_lbs > b.weight_lbs { &a.name } else { &b.name };
    Some(format!(
        "{} is {:.0} lbs heavier (~{} weight classes apart); this matchup \
         crosses sanctioned divisions",
        heavier, diff, classes
    ))
}

/// Turn raw counters into the presentation-ready summary.
pub fn summarize(
    result: &SimulationResult,
    fighter_a: &FighterProfile,
    fighter_b: &FighterProfile,
) -> FightSummary {
    let pct_a = result.win_pct_a();
    let pct_b = result.win_pct_b();
    let favorite =
        if pct_a >= pct_b { fighter_a.name.clone() } else { fighter_b.name.clone() };

    let mut warnings = Vec::new();
    if let Some(w) = weight_mismatch_warning(fighter_a, fighter_b) {
        warnings.push(w);
    }

    let throughput = result.throughput();
    FightSummary {
        fighter_a: FighterLine {
            name: fighter_a.name.clone(),
            wins: result.wins_a,
            win_pct: pct_a,
            implied_odds: implied_decimal_odds(pct_a),
        },
        fighter_b: FighterLine {
            name: fighter_b.name.clone(),
            wins: result.wins_b,
            win_pct: pct_b,
            implied_odds: implied_decimal_odds(pct_b),
        },
        draws: result.draws,
        draw_pct: result.draw_pct(),
        favorite,
        n_trials: result.n_trials,
        elapsed_secs: result.elapsed_secs,
        throughput: throughput.is_finite().then_some(throughput),
        warnings,
    }
}

impl FightSummary {
    /// Render the classic fixed-width result block.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let rule = "=".repeat(60);
        out.push_str(&format!("{rule}\nSIMULATION RESULTS\n{rule}\n"));
        for line in [&self.fighter_a, &self.fighter_b] {
            out.push_str(&format!(
                "{}:\n  Wins: {} ({:.2}%)\n",
                line.name, line.wins, line.win_pct
            ));
        }
        out.push_str(&format!("Draws: {} ({:.2}%)\n\n", self.draws, self.draw_pct));
        out.push_str("Performance:\n");
        out.push_str(&format!("  Execution time: {:.2} s\n", self.elapsed_secs));
        match self.throughput {
            Some(t) => out.push_str(&format!("  Throughput: {t:.0} trials/s\n")),
            None => out.push_str("  Throughput: n/a (sub-resolution elapsed time)\n"),
        }

        let (fav, dog) = if self.fighter_a.win_pct >= self.fighter_b.win_pct {
            (&self.fighter_a, &self.fighter_b)
        } else {
            (&self.fighter_b, &self.fighter_a)
        };
        out.push_str(&format!(
            "\nPREDICTION: {} is favored to win ({:.2}%)\n",
            fav.name, fav.win_pct
        ));
        out.push_str(&format!("{} has a {:.2}% chance (underdog)\n", dog.name, dog.win_pct));
        out.push_str("\nImplied betting odds:\n");
        for line in [fav, dog] {
            match line.implied_odds {
                Some(odds) => out.push_str(&format!("  {}: {:.2} to 1\n", line.name, odds)),
                None => out.push_str(&format!("  {}: N/A\n", line.name)),
            }
        }
        for warning in &self.warnings {
            out.push_str(&format!("\nWARNING: {warning}\n"));
        }
        out.push_str(&rule);
        out.push('\n');
        out
    }
}
