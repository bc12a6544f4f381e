//! Measurement string parsing for external fighter records.
//!
//! Sports data sources report height and weight in whatever unit the local
//! federation uses ("198 cm", "6ft 2in", "6'2\"", "108 kg", "240 lbs").
//! Parsing is lenient: an unreadable string logs a warning and falls back to
//! a neutral default instead of failing the lookup.

/// Fallback height when a source string cannot be parsed.
pub const DEFAULT_HEIGHT_CM: f64 = 180.0;

/// Fallback weight when a source string cannot be parsed.
pub const DEFAULT_WEIGHT_LBS: f64 = 160.0;

const CM_PER_INCH: f64 = 2.54;
const LBS_PER_KG: f64 = 2.20462;

/// Parse a height or reach string into centimeters.
///
/// Accepts "198 cm", "6ft 2in", "6'2\"", "6' 2\"" and bare numbers
/// (interpreted as cm).
pub fn parse_length_cm(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return DEFAULT_HEIGHT_CM;
    }
    match try_parse_length_cm(trimmed) {
        Some(cm) => cm,
        None => {
            log::warn!("could not parse height/reach '{raw}', using {DEFAULT_HEIGHT_CM} cm");
            DEFAULT_HEIGHT_CM
        }
    }
}

fn try_parse_length_cm(s: &str) -> Option<f64> {
    let lower = s.to_ascii_lowercase();
    if let Some(cm) = lower.strip_suffix("cm") {
        return cm.trim().parse::<f64>().ok();
    }
    if lower.contains("ft") || lower.contains('\'') {
        // Normalize "6ft 2in" / "6' 2\"" to feet'inches
        let normalized = lower.replace("ft", "'").replace("in", "").replace('"', "");
        let mut parts = normalized.split('\'');
        let feet = parts.next()?.trim().parse::<f64>().ok()?;
        let inches = match parts.next().map(str::trim) {
            Some(p) if !p.is_empty() => p.parse::<f64>().ok()?,
            _ => 0.0,
        };
        return Some((feet * 12.0 + inches) * CM_PER_INCH);
    }
    lower.parse::<f64>().ok()
}

/// Parse a weight string into pounds.
///
/// Accepts "240 lbs", "240 lb", "108 kg" and bare numbers (interpreted as
/// lbs).
pub fn parse_weight_lbs(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return DEFAULT_WEIGHT_LBS;
    }
    match try_parse_weight_lbs(trimmed) {
        Some(lbs) => lbs,
        None => {
            log::warn!("could not parse weight '{raw}', using {DEFAULT_WEIGHT_LBS} lbs");
            DEFAULT_WEIGHT_LBS
        }
    }
}

fn try_parse_weight_lbs(s: &str) -> Option<f64> {
    let lower = s.to_ascii_lowercase();
    if let Some(lbs) = lower.strip_suffix("lbs").or_else(|| lower.strip_suffix("lb")) {
        return lbs.trim().parse::<f64>().ok();
    }
    if let Some(kg) = lower.strip_suffix("kg") {
        return Some(kg.trim().parse::<f64>().ok()? * LBS_PER_KG);
    }
    lower.parse::<f64>().ok()
}

/// Estimate reach from height. Across professional rosters the average reach
/// is approximately equal to height, so it is the best single-point guess
/// when a source omits reach.
pub fn estimate_reach_cm(height_cm: f64) -> f64 {
    height_cm
}
